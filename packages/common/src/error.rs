use thiserror::Error;

/// Raised when a half-open range would end before it starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    #[error("Span end {end} precedes start {start}")]
    Inverted { start: usize, end: usize },
}
