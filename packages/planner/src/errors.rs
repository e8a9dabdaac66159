//! Error types for planning and submitting batches

use docbatch_common::Span;
use docbatch_document::{IndexError, LookupError};
use thiserror::Error;

/// The target set cannot be ordered into a valid batch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("Targets {0} and {1} overlap")]
    Overlap(Span, Span),

    #[error("More than one target starts at offset {0}")]
    DuplicateStart(usize),
}

/// A target request that does not resolve against the snapshot
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Target {request}: {source}")]
    Lookup { request: usize, source: LookupError },

    #[error("Target {request}: range {span} extends past the document end {end}")]
    OutsideDocument { request: usize, span: Span, end: usize },

    #[error("Target {request}: cannot append to an empty document")]
    EmptyDocument { request: usize },
}

/// Failure reported by the external batch executor
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ExecutorError {
    pub message: String,
}

impl ExecutorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Any failure along snapshot → plan → execute.
///
/// All variants are terminal for the call that produced them: either a
/// complete op list is produced (and submitted), or nothing is.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Snapshot error: {0}")]
    Index(#[from] IndexError),

    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Plan error: {0}")]
    Plan(#[from] PlanError),

    #[error("External API error: {0}")]
    ExternalApi(String),
}

impl From<ExecutorError> for BatchError {
    fn from(e: ExecutorError) -> Self {
        BatchError::ExternalApi(e.message)
    }
}
