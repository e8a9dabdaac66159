use docbatch_common::Span;
use thiserror::Error;

/// The snapshot's structure violates the index model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("Element {index} ends before it starts ({start}..{end})")]
    InvertedElement { index: usize, start: usize, end: usize },

    #[error("Element {next} overlaps or precedes element {previous}")]
    OutOfOrder { previous: Span, next: Span },

    #[error("Table at {anchor}: {message}")]
    TableShape { anchor: usize, message: String },

    #[error("Table at {anchor}: cell ({row}, {column}) has no room for a terminator")]
    DegenerateCell { anchor: usize, row: usize, column: usize },

    #[error("Invalid snapshot JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for IndexError {
    fn from(e: serde_json::Error) -> Self {
        IndexError::Json(e.to_string())
    }
}

/// An anchor, row or column that does not resolve to a table or cell.
///
/// All variants are "not found" conditions; none is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("No table starts at offset {anchor}")]
    TableNotFound { anchor: usize },

    #[error("Cell ({row}, {column}) is outside the {rows}x{columns} table at {anchor}")]
    CellOutOfBounds {
        anchor: usize,
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    #[error("Cell ({row}, {column}) of the table at {anchor} has no content")]
    CellWithoutContent { anchor: usize, row: usize, column: usize },
}
