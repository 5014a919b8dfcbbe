use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use sparsegrid_core::{Matrix, SparseMatrix};

use crate::error::{GridIoError, Result};

/// Reads a row-major grid of whitespace-separated integers into `matrix`.
///
/// Exactly `rows * cols` values are consumed; line breaks are not
/// significant and anything after the last cell is ignored. Every non-zero
/// cell is stored with `set`; zero cells leave existing entries alone.
/// On error `matrix` is left unchanged.
pub fn read_grid<R: BufRead>(matrix: &mut SparseMatrix, reader: R) -> Result<()> {
    let (rows, cols) = matrix.dims();
    let total = rows * cols;

    let mut cells = Vec::new();
    let mut idx = 0;
    'lines: for line in reader.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            if idx == total {
                break 'lines;
            }
            let (row, col) = (idx / cols, idx % cols);
            let value: i32 = token.parse().map_err(|_| GridIoError::Parse {
                row,
                col,
                token: token.to_string(),
            })?;
            if value != 0 {
                cells.push((row, col, value));
            }
            idx += 1;
        }
    }
    if idx < total {
        return Err(GridIoError::UnexpectedEof {
            row: idx / cols,
            col: idx % cols,
        });
    }

    let mut staged = matrix.clone();
    for &(row, col, value) in &cells {
        staged.set(row, col, value)?;
    }
    log::debug!(
        "Read {}x{} grid with {} non-zero cells",
        rows,
        cols,
        cells.len()
    );
    *matrix = staged;
    Ok(())
}

/// Opens `path` and reads it with [`read_grid`].
pub fn read_grid_file<P: AsRef<Path>>(matrix: &mut SparseMatrix, path: P) -> Result<()> {
    let path = path.as_ref();
    log::info!(
        "Loading {}x{} grid from {}",
        matrix.rows(),
        matrix.cols(),
        path.display()
    );
    let file = File::open(path)?;
    read_grid(matrix, BufReader::new(file))
}

/// Builds a fresh `rows x cols` matrix from a text grid.
pub fn load_grid<R: BufRead>(reader: R, rows: usize, cols: usize) -> Result<SparseMatrix> {
    let mut matrix = SparseMatrix::new(rows, cols, 0)?;
    read_grid(&mut matrix, reader)?;
    Ok(matrix)
}

/// Like [`load_grid`], reading from a file.
pub fn load_grid_file<P: AsRef<Path>>(path: P, rows: usize, cols: usize) -> Result<SparseMatrix> {
    let mut matrix = SparseMatrix::new(rows, cols, 0)?;
    read_grid_file(&mut matrix, path)?;
    Ok(matrix)
}

/// Writes every cell in row-major order, one space-separated row per line.
pub fn write_grid<W: Write>(matrix: &SparseMatrix, mut writer: W) -> Result<()> {
    for row in 0..matrix.rows() {
        let line = (0..matrix.cols())
            .map(|col| matrix.get(row, col).map(|value| value.to_string()))
            .collect::<sparsegrid_core::Result<Vec<_>>>()?
            .join(" ");
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

/// Writes the grid to `path`, replacing any existing file.
pub fn write_grid_file<P: AsRef<Path>>(matrix: &SparseMatrix, path: P) -> Result<()> {
    let path = path.as_ref();
    log::info!(
        "Writing {}x{} grid to {}",
        matrix.rows(),
        matrix.cols(),
        path.display()
    );
    let mut writer = BufWriter::new(File::create(path)?);
    write_grid(matrix, &mut writer)?;
    writer.flush()?;
    Ok(())
}
