//! # Sparse Grid Core
//!
//! Coordinate-list sparse matrix store for bounded integer grids, with
//! cell-wise addition, subtraction, transpose and ordered traversal.

pub mod entry;
pub mod error;
pub mod ops;
pub mod sparse_matrix;
pub mod traits;
pub mod traversal;

pub use entry::{Entry, Slot, MAX_BOUND};
pub use error::{Result, SparseGridError};
pub use sparse_matrix::SparseMatrix;
pub use traits::Matrix;
pub use traversal::{AxisIter, SortedDump};
