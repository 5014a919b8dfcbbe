use serde::{Deserialize, Serialize};

use crate::entry::{Entry, Slot};
use crate::sparse_matrix::SparseMatrix;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Axis {
    Row,
    Col,
}

/// Walks the live entries of a matrix one row (or column) at a time.
///
/// Lines are visited in ascending order; within a line entries come in
/// storage order. Every line costs one pass over the slot array.
#[derive(Clone, Debug)]
pub struct AxisIter<'a> {
    slots: &'a [Slot],
    axis: Axis,
    lines: usize,
    line: usize,
    pos: usize,
}

impl<'a> AxisIter<'a> {
    fn new(matrix: &'a SparseMatrix, axis: Axis) -> Self {
        let lines = match axis {
            Axis::Row => matrix.row_bound(),
            Axis::Col => matrix.col_bound(),
        };
        AxisIter {
            slots: matrix.slots(),
            axis,
            lines,
            line: 0,
            pos: 0,
        }
    }

    fn key(&self, entry: &Entry) -> usize {
        match self.axis {
            Axis::Row => entry.row(),
            Axis::Col => entry.col(),
        }
    }
}

impl Iterator for AxisIter<'_> {
    type Item = (usize, usize, i32);

    fn next(&mut self) -> Option<Self::Item> {
        while self.line < self.lines {
            while let Some(slot) = self.slots.get(self.pos) {
                self.pos += 1;
                if let Some(entry) = slot.entry() {
                    if self.key(entry) == self.line {
                        return Some((*entry).into());
                    }
                }
            }
            self.line += 1;
            self.pos = 0;
        }
        None
    }
}

/// Live entries as three parallel sequences, stably sorted by row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortedDump {
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
    pub values: Vec<i32>,
}

impl SortedDump {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SparseMatrix {
    /// Live entries grouped by ascending row.
    pub fn entries_by_row(&self) -> AxisIter<'_> {
        AxisIter::new(self, Axis::Row)
    }

    /// Live entries grouped by ascending column.
    pub fn entries_by_col(&self) -> AxisIter<'_> {
        AxisIter::new(self, Axis::Col)
    }

    /// Snapshot of the live entries sorted by row, ties kept in storage order.
    /// The matrix itself is not reordered.
    pub fn dump_sorted(&self) -> SortedDump {
        let mut entries: Vec<&Entry> = self.entries().collect();
        entries.sort_by_key(|entry| entry.row());

        let mut dump = SortedDump {
            rows: Vec::with_capacity(entries.len()),
            cols: Vec::with_capacity(entries.len()),
            values: Vec::with_capacity(entries.len()),
        };
        for entry in entries {
            dump.rows.push(entry.row());
            dump.cols.push(entry.col());
            dump.values.push(entry.value());
        }
        dump
    }
}
