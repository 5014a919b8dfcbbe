use std::fmt::Display;
use std::io::Write;

use sparsegrid_core::{Matrix, SparseMatrix};

use crate::error::Result;

fn bracketed<T: Display>(items: &[T]) -> String {
    let mut out = String::from("[ ");
    for item in items {
        out.push_str(&format!("{item} "));
    }
    out.push(']');
    out
}

/// Prints the row-sorted dump as three bracketed sequences.
pub fn write_dump<W: Write>(matrix: &SparseMatrix, mut writer: W) -> Result<()> {
    let dump = matrix.dump_sorted();
    writeln!(writer, "rows:   {}", bracketed(&dump.rows))?;
    writeln!(writer, "cols:   {}", bracketed(&dump.cols))?;
    writeln!(writer, "values: {}", bracketed(&dump.values))?;
    Ok(())
}

/// Prints one line per row listing its `(col, value)` pairs.
pub fn write_by_row<W: Write>(matrix: &SparseMatrix, mut writer: W) -> Result<()> {
    let mut walk = matrix.entries_by_row().peekable();
    for row in 0..matrix.rows() {
        write!(writer, "row {row}:")?;
        while let Some((_, col, value)) = walk.next_if(|&(r, _, _)| r == row) {
            write!(writer, " ({col}, {value})")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Prints one line per column listing its `(row, value)` pairs.
pub fn write_by_col<W: Write>(matrix: &SparseMatrix, mut writer: W) -> Result<()> {
    let mut walk = matrix.entries_by_col().peekable();
    for col in 0..matrix.cols() {
        write!(writer, "col {col}:")?;
        while let Some((row, _, value)) = walk.next_if(|&(_, c, _)| c == col) {
            write!(writer, " ({row}, {value})")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
