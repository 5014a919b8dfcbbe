use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SparseGridError {
    #[error("Invalid matrix dimensions: {0}")]
    InvalidDimension(String),

    #[error("Invalid capacity hint {capacity} for a {rows}x{cols} matrix")]
    InvalidCapacity {
        capacity: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Coordinate ({row}, {col}) out of range for bounds {rows}x{cols}")]
    CoordinateOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Entry at ({row}, {col}) has value 0")]
    ZeroValue { row: usize, col: usize },

    #[error("Matrix has no live entries to delete")]
    EmptyStore,

    #[error("Shape mismatch: {lhs:?} vs {rhs:?}")]
    ShapeMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("Matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    #[error("Value overflow at ({row}, {col}): {lhs} {op} {rhs}")]
    ValueOverflow {
        row: usize,
        col: usize,
        lhs: i32,
        rhs: i32,
        op: char,
    },
}

pub type Result<T> = core::result::Result<T, SparseGridError>;
