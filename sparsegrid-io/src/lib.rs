//! Plain-text adapters for [`SparseMatrix`](sparsegrid_core::SparseMatrix).
//!
//! The persisted form is a row-major grid of whitespace-separated integers,
//! one matrix row per line.

pub mod error;
pub mod grid;
pub mod report;

pub use error::{GridIoError, Result};
pub use grid::{
    load_grid, load_grid_file, read_grid, read_grid_file, write_grid, write_grid_file,
};
pub use report::{write_by_col, write_by_row, write_dump};
