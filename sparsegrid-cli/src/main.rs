// sparsegrid-cli/src/main.rs
use std::env;
use std::error::Error;
use std::io::{self, Write};
use std::process;

use sparsegrid_io::{load_grid_file, write_by_col, write_by_row, write_dump, write_grid};

const USAGE: &str = "Usage: sparsegrid <command> <rows> <cols> <file> [<other-file>]

Commands:
  show        print the grid
  dump        print the row-sorted rows/cols/values sequences
  by-row      list (col, value) pairs row by row
  by-col      list (row, value) pairs column by column
  stats       print bounds, live entry count and capacity
  add         print <file> + <other-file>
  sub         print <file> - <other-file>
  transpose   print the transpose of a square grid";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Show,
    Dump,
    ByRow,
    ByCol,
    Stats,
    Add,
    Sub,
    Transpose,
}

impl Command {
    fn parse(name: &str) -> Option<Self> {
        let command = match name {
            "show" => Command::Show,
            "dump" => Command::Dump,
            "by-row" => Command::ByRow,
            "by-col" => Command::ByCol,
            "stats" => Command::Stats,
            "add" => Command::Add,
            "sub" => Command::Sub,
            "transpose" => Command::Transpose,
            _ => return None,
        };
        Some(command)
    }

    fn needs_other(self) -> bool {
        matches!(self, Command::Add | Command::Sub)
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    command: Command,
    rows: usize,
    cols: usize,
    file: String,
    other: Option<String>,
}

fn parse_args(args: &[String]) -> Result<Invocation, String> {
    let rest = args.get(1..).unwrap_or_default();
    let (name, rows, cols, file, extra) = match rest {
        [name, rows, cols, file, extra @ ..] => (name, rows, cols, file, extra),
        _ => return Err("Missing arguments".to_string()),
    };

    let command = Command::parse(name).ok_or_else(|| format!("Unknown command '{}'", name))?;
    let rows = rows
        .parse::<usize>()
        .map_err(|_| format!("Invalid row count '{}'", rows))?;
    let cols = cols
        .parse::<usize>()
        .map_err(|_| format!("Invalid column count '{}'", cols))?;

    let other = match (command.needs_other(), extra) {
        (true, [other]) => Some(other.clone()),
        (false, []) => None,
        (true, _) => return Err(format!("'{}' takes exactly one other file", name)),
        (false, _) => return Err(format!("'{}' takes a single file", name)),
    };

    Ok(Invocation {
        command,
        rows,
        cols,
        file: file.clone(),
        other,
    })
}

fn run<W: Write>(invocation: &Invocation, out: &mut W) -> Result<(), Box<dyn Error>> {
    let Invocation {
        command,
        rows,
        cols,
        ..
    } = *invocation;
    let mut matrix = load_grid_file(&invocation.file, rows, cols)?;

    match command {
        Command::Show => write_grid(&matrix, &mut *out)?,
        Command::Dump => write_dump(&matrix, &mut *out)?,
        Command::ByRow => write_by_row(&matrix, &mut *out)?,
        Command::ByCol => write_by_col(&matrix, &mut *out)?,
        Command::Stats => {
            writeln!(out, "bounds: {}x{}", matrix.row_bound(), matrix.col_bound())?;
            writeln!(out, "live entries: {}", matrix.live_count())?;
            writeln!(out, "capacity: {}", matrix.capacity())?;
        }
        Command::Add | Command::Sub => {
            let other_path = invocation
                .other
                .as_deref()
                .ok_or("missing other file")?;
            let other = load_grid_file(other_path, rows, cols)?;
            if command == Command::Add {
                matrix.add(&other)?;
            } else {
                matrix.subtract(&other)?;
            }
            write_grid(&matrix, &mut *out)?;
        }
        Command::Transpose => {
            matrix.transpose()?;
            write_grid(&matrix, &mut *out)?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    let invocation = match parse_args(&args) {
        Ok(invocation) => invocation,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };
    log::debug!("Parsed invocation: {:?}", invocation);

    // --- Execution ---
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(&invocation, &mut out) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
