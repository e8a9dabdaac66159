//! # Cell Locator
//!
//! Resolves `(table anchor, row, column)` to the content span of that cell.

use crate::{FlatIndex, LookupError};
use docbatch_common::Span;
use serde::{Deserialize, Serialize};

/// Address of one table cell within a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRef {
    pub table_start_index: usize,
    pub row: usize,
    pub column: usize,
}

impl CellRef {
    pub fn new(table_start_index: usize, row: usize, column: usize) -> Self {
        Self {
            table_start_index,
            row,
            column,
        }
    }

    pub fn locate(&self, index: &FlatIndex) -> Result<Span, LookupError> {
        locate(index, self.table_start_index, self.row, self.column)
    }
}

/// Content span of the cell at `(row, column)` of the table anchored at
/// `anchor`.
///
/// The span includes the cell's trailing terminator. Callers that replace a
/// cell's text while keeping the terminator stop one short of `end`.
pub fn locate(
    index: &FlatIndex,
    anchor: usize,
    row: usize,
    column: usize,
) -> Result<Span, LookupError> {
    let table = index.find_table(anchor)?;

    let cell = index
        .cell(table, row, column)
        .ok_or(LookupError::CellOutOfBounds {
            anchor,
            row,
            column,
            rows: table.rows,
            columns: table.columns,
        })?;

    cell.content
        .ok_or(LookupError::CellWithoutContent { anchor, row, column })
}
