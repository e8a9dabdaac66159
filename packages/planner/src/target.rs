//! Edit targets and the requests they are resolved from

use docbatch_common::Span;
use docbatch_document::CellRef;
use serde::{Deserialize, Serialize};

/// What to do with a target's range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditOperation {
    /// Insert text at the range start, keeping existing content
    Insert(String),
    /// Replace the range body, keeping its trailing terminator
    Replace(String),
    /// Remove the range body, keeping its trailing terminator
    Delete,
}

/// One requested mutation, resolved against the original snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditTarget {
    pub span: Span,
    pub operation: EditOperation,
}

impl EditTarget {
    pub fn new(span: Span, operation: EditOperation) -> Self {
        Self { span, operation }
    }
}

/// Where a request applies, before resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLocation {
    /// Content of a table cell
    Cell(CellRef),
    /// Arbitrary absolute range
    Range(Span),
    /// Just before the body's final terminator
    End,
}

/// Caller-supplied edit, keyed by cell or by offset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRequest {
    pub at: TargetLocation,
    pub operation: EditOperation,
}

impl TargetRequest {
    pub fn cell(cell: CellRef, operation: EditOperation) -> Self {
        Self {
            at: TargetLocation::Cell(cell),
            operation,
        }
    }

    pub fn range(span: Span, operation: EditOperation) -> Self {
        Self {
            at: TargetLocation::Range(span),
            operation,
        }
    }

    pub fn append(text: impl Into<String>) -> Self {
        Self {
            at: TargetLocation::End,
            operation: EditOperation::Insert(text.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellWrite {
    pub row: usize,
    pub column: usize,
    pub text: String,
}

/// Text for several cells of one table, written in a single batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellWriteBatch {
    pub table_start_index: usize,
    pub cells: Vec<CellWrite>,
    /// Replace existing cell text (`true`) or insert before it (`false`);
    /// `None` defers to the caller's default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace_existing: Option<bool>,
}

impl CellWriteBatch {
    pub fn to_requests(&self, default_replace: bool) -> Vec<TargetRequest> {
        let replace = self.replace_existing.unwrap_or(default_replace);
        self.cells
            .iter()
            .map(|write| {
                let operation = if replace {
                    EditOperation::Replace(write.text.clone())
                } else {
                    EditOperation::Insert(write.text.clone())
                };
                TargetRequest::cell(
                    CellRef::new(self.table_start_index, write.row, write.column),
                    operation,
                )
            })
            .collect()
    }
}
