use std::fmt;
use thiserror::Error;

pub type RangeResult<T> = Result<T, RangeError>;

/// Grid axis, used to report which bound of a range is invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Invalid range notation: {0:?}")]
    Malformed(String),

    #[error("Row numbers start at 1: {0:?}")]
    ZeroRow(String),

    #[error("Range bound out of range: {0:?}")]
    Overflow(String),

    #[error("Range {text:?} ends before it starts on the {axis} axis")]
    EmptySpan { text: String, axis: Axis },
}
