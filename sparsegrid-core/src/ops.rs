//! Matrix algebra over two stores sharing dimensions.
//!
//! Slot order is insertion order, not (row, col) order, so combination is
//! keyed by coordinate and never walks the two slot arrays in lockstep.

use std::collections::BTreeMap;

use crate::error::{Result, SparseGridError};
use crate::sparse_matrix::SparseMatrix;
use crate::traits::Matrix;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Combine {
    Add,
    Subtract,
}

impl Combine {
    fn symbol(self) -> char {
        match self {
            Combine::Add => '+',
            Combine::Subtract => '-',
        }
    }

    fn apply(self, lhs: i32, rhs: i32) -> Option<i32> {
        match self {
            Combine::Add => lhs.checked_add(rhs),
            Combine::Subtract => lhs.checked_sub(rhs),
        }
    }
}

impl SparseMatrix {
    /// Adds `other` into `self` cell by cell.
    ///
    /// # Errors
    /// `ShapeMismatch` if the bounds differ, `ValueOverflow` if a sum leaves
    /// the `i32` range. `self` is unchanged on error.
    pub fn add(&mut self, other: &SparseMatrix) -> Result<()> {
        self.combine(other, Combine::Add)
    }

    /// Subtracts `other` from `self` cell by cell.
    ///
    /// # Errors
    /// Same as [`SparseMatrix::add`].
    pub fn subtract(&mut self, other: &SparseMatrix) -> Result<()> {
        self.combine(other, Combine::Subtract)
    }

    /// Swaps row and column of every live entry in a single pass.
    ///
    /// Slot count and slot order are unchanged.
    pub fn transpose(&mut self) -> Result<()> {
        if !self.is_square() {
            return Err(SparseGridError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        for entry in self.slots.iter_mut().filter_map(|slot| slot.entry_mut()) {
            entry.swap_coords();
        }
        log::debug!("Transposed {}x{} matrix", self.rows(), self.cols());
        Ok(())
    }

    fn combine(&mut self, other: &SparseMatrix, op: Combine) -> Result<()> {
        if !self.same_shape(other) {
            return Err(SparseGridError::ShapeMismatch {
                lhs: self.dims(),
                rhs: other.dims(),
            });
        }

        // Values are copied out of `other`; nothing in `self` refers back to it.
        let incoming: BTreeMap<(usize, usize), i32> = other
            .entries()
            .map(|entry| (entry.coords(), entry.value()))
            .collect();

        let mut updates = Vec::with_capacity(incoming.len());
        for (&(row, col), &rhs) in &incoming {
            let lhs = self.get(row, col)?;
            let value = op.apply(lhs, rhs).ok_or(SparseGridError::ValueOverflow {
                row,
                col,
                lhs,
                rhs,
                op: op.symbol(),
            })?;
            updates.push((row, col, value));
        }

        // Staged on a copy so a failure part-way leaves `self` untouched.
        let mut staged = self.clone();
        for &(row, col, value) in &updates {
            staged.set(row, col, value)?;
        }
        log::debug!(
            "Applied {} {} updates to {}x{} matrix",
            updates.len(),
            op.symbol(),
            self.rows(),
            self.cols()
        );
        *self = staged;
        Ok(())
    }
}
