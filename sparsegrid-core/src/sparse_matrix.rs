use crate::entry::{Entry, Slot, MAX_BOUND};
use crate::error::{Result, SparseGridError};
use crate::traits::Matrix;

/// Coordinate-list sparse matrix of `i32` values.
///
/// Only non-zero cells are stored, each in its own [`Slot`]. Lookups scan the
/// slot array linearly.
///
/// The slot array grows by exactly one slot whenever a new coordinate is
/// inserted into a full store, so inserting N new coordinates costs O(N²)
/// copying in total. Deleting an entry shrinks the array to the number of
/// remaining live entries.
///
/// `PartialEq` is structural: it compares bounds and the slot array as
/// stored, including empty slots and slot order. Two matrices holding the
/// same cells can compare unequal; compare [`SparseMatrix::to_dense`] or
/// [`SparseMatrix::dump_sorted`] for value equality.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix {
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
    /// Entry storage; its length is the current capacity.
    pub(crate) slots: Vec<Slot>,
}

impl SparseMatrix {
    /// Creates an empty matrix with `capacity` pre-allocated empty slots.
    ///
    /// # Errors
    /// `InvalidDimension` if either bound is not below [`MAX_BOUND`],
    /// `InvalidCapacity` if `capacity` exceeds `rows * cols`.
    pub fn new(rows: usize, cols: usize, capacity: usize) -> Result<Self> {
        if rows >= MAX_BOUND || cols >= MAX_BOUND {
            return Err(SparseGridError::InvalidDimension(format!(
                "{}x{} exceeds the maximum bound of {}",
                rows, cols, MAX_BOUND
            )));
        }
        // u64 keeps the area exact on 32-bit targets
        if capacity as u64 > rows as u64 * cols as u64 {
            return Err(SparseGridError::InvalidCapacity {
                capacity,
                rows,
                cols,
            });
        }
        Ok(SparseMatrix {
            rows,
            cols,
            slots: vec![Slot::Empty; capacity],
        })
    }

    /// Creates a matrix from a dense row-major grid, storing every non-zero cell.
    pub fn from_dense(dense: &[Vec<i32>], capacity: usize) -> Result<Self> {
        let rows = dense.len();
        let cols = dense.first().map_or(0, |row| row.len());
        if let Some((r, row)) = dense.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(SparseGridError::InvalidDimension(format!(
                "Row {} has {} columns, expected {}",
                r,
                row.len(),
                cols
            )));
        }

        let mut matrix = SparseMatrix::new(rows, cols, capacity)?;
        for (r, row) in dense.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value != 0 {
                    matrix.set(r, c, value)?;
                }
            }
        }
        Ok(matrix)
    }

    /// Expands the matrix into a dense row-major grid.
    pub fn to_dense(&self) -> Vec<Vec<i32>> {
        let mut dense = vec![vec![0; self.cols]; self.rows];
        for entry in self.entries() {
            dense[entry.row()][entry.col()] = entry.value();
        }
        dense
    }

    pub fn row_bound(&self) -> usize {
        self.rows
    }

    pub fn col_bound(&self) -> usize {
        self.cols
    }

    /// Returns the number of allocated slots, occupied or not.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Counts live entries by probing every coordinate of the matrix.
    pub fn live_count(&self) -> usize {
        (0..self.rows)
            .flat_map(|r| (0..self.cols).map(move |c| (r, c)))
            .filter(|&(r, c)| self.value_at(r, c) != 0)
            .count()
    }

    /// Returns true if any live entry holds `value`.
    ///
    /// Visits every coordinate in row-major order. Zero is never stored, so
    /// `contains(0)` is always false.
    pub fn contains(&self, value: i32) -> bool {
        if value == 0 {
            return false;
        }
        (0..self.rows).any(|r| (0..self.cols).any(|c| self.value_at(r, c) == value))
    }

    /// Returns the value at `(row, col)`, or 0 if no entry is stored there.
    pub fn get(&self, row: usize, col: usize) -> Result<i32> {
        self.check_bounds(row, col)?;
        Ok(self.value_at(row, col))
    }

    /// Stores `value` at `(row, col)`.
    ///
    /// A zero value deletes the entry (see [`SparseMatrix::delete`]). An
    /// existing entry is overwritten in place; a new one takes the first empty
    /// slot, growing the store by one slot when none is left.
    pub fn set(&mut self, row: usize, col: usize, value: i32) -> Result<()> {
        self.check_bounds(row, col)?;

        if value == 0 {
            return self.delete(row, col);
        }

        if let Some(entry) = self
            .find(row, col)
            .and_then(|idx| self.slots[idx].entry_mut())
        {
            entry.set_value(value);
            return Ok(());
        }

        let entry = Entry::new(row, col, value)?;
        let idx = match self.slots.iter().position(Slot::is_empty) {
            Some(idx) => idx,
            None => {
                self.grow_by_one();
                self.slots.len() - 1
            }
        };
        self.slots[idx] = Slot::Occupied(entry);
        Ok(())
    }

    /// Removes the entry at `(row, col)`.
    ///
    /// Fails with `EmptyStore` whenever the matrix holds no live entries, even
    /// if `(row, col)` was never set. On a non-empty matrix, deleting an
    /// absent coordinate is a no-op.
    pub fn delete(&mut self, row: usize, col: usize) -> Result<()> {
        self.check_bounds(row, col)?;

        let occupied = self.occupied();
        if occupied == 0 {
            return Err(SparseGridError::EmptyStore);
        }

        let Some(idx) = self.find(row, col) else {
            return Ok(());
        };

        let mut remaining = Vec::with_capacity(occupied - 1);
        remaining.extend(
            self.slots
                .iter()
                .enumerate()
                .filter(|&(i, slot)| i != idx && !slot.is_empty())
                .map(|(_, slot)| *slot),
        );
        log::debug!(
            "Deleted ({}, {}); storage shrunk from {} to {} slots",
            row,
            col,
            self.slots.len(),
            remaining.len()
        );
        self.slots = remaining;
        Ok(())
    }

    /// Iterates live entries in storage order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.slots.iter().filter_map(Slot::entry)
    }

    /// Returns the raw slot array, empty slots included.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of occupied slots.
    pub(crate) fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    pub(crate) fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(SparseGridError::CoordinateOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn find(&self, row: usize, col: usize) -> Option<usize> {
        self.slots.iter().position(|slot| slot.holds(row, col))
    }

    fn value_at(&self, row: usize, col: usize) -> i32 {
        self.slots
            .iter()
            .find(|slot| slot.holds(row, col))
            .and_then(Slot::entry)
            .map_or(0, Entry::value)
    }

    // Reallocates with room for exactly one more slot.
    fn grow_by_one(&mut self) {
        let mut grown = Vec::with_capacity(self.slots.len() + 1);
        grown.extend_from_slice(&self.slots);
        grown.push(Slot::Empty);
        log::trace!("Grew storage to {} slots", grown.len());
        self.slots = grown;
    }
}

impl Matrix for SparseMatrix {
    type Value = i32;

    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}
