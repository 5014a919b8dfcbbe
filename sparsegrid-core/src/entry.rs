use serde::{Deserialize, Serialize};

use crate::error::{Result, SparseGridError};

/// Exclusive upper limit for any row or column index, and for matrix bounds.
pub const MAX_BOUND: usize = 50_000;

/// A single live `(row, col, value)` cell of a sparse matrix.
///
/// Deserialization goes through [`Entry::new`], so decoded entries obey the
/// same bounds and non-zero rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawEntry")]
pub struct Entry {
    row: usize,
    col: usize,
    value: i32,
}

impl Entry {
    /// Creates an entry, rejecting coordinates at or beyond [`MAX_BOUND`]
    /// and a zero value.
    pub fn new(row: usize, col: usize, value: i32) -> Result<Self> {
        if row >= MAX_BOUND || col >= MAX_BOUND {
            return Err(SparseGridError::CoordinateOutOfRange {
                row,
                col,
                rows: MAX_BOUND,
                cols: MAX_BOUND,
            });
        }
        if value == 0 {
            return Err(SparseGridError::ZeroValue { row, col });
        }
        Ok(Entry { row, col, value })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn coords(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub(crate) fn set_value(&mut self, value: i32) {
        self.value = value;
    }

    pub(crate) fn swap_coords(&mut self) {
        std::mem::swap(&mut self.row, &mut self.col);
    }
}

#[derive(Deserialize)]
struct RawEntry {
    row: usize,
    col: usize,
    value: i32,
}

impl TryFrom<RawEntry> for Entry {
    type Error = SparseGridError;

    fn try_from(raw: RawEntry) -> Result<Self> {
        Entry::new(raw.row, raw.col, raw.value)
    }
}

impl From<Entry> for (usize, usize, i32) {
    fn from(entry: Entry) -> Self {
        (entry.row, entry.col, entry.value)
    }
}

/// A storage position in the entry array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Slot {
    #[default]
    Empty,
    Occupied(Entry),
}

impl Slot {
    pub fn entry(&self) -> Option<&Entry> {
        match self {
            Slot::Occupied(entry) => Some(entry),
            Slot::Empty => None,
        }
    }

    pub(crate) fn entry_mut(&mut self) -> Option<&mut Entry> {
        match self {
            Slot::Occupied(entry) => Some(entry),
            Slot::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub(crate) fn holds(&self, row: usize, col: usize) -> bool {
        self.entry().is_some_and(|e| e.row == row && e.col == col)
    }
}
