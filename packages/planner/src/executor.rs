//! # Batch executors
//!
//! The external mutating API is modelled as [`BatchExecutor`]: it receives
//! the complete op list in one call and either applies all of it or none.

use crate::{ExecutorError, PrimitiveOp};

/// Applies one planned batch atomically
pub trait BatchExecutor {
    fn execute(&mut self, ops: &[PrimitiveOp]) -> Result<(), ExecutorError>;
}

/// In-memory executor over plain text, one position per character.
///
/// Used for dry runs. A batch with any op out of range leaves the text
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextExecutor {
    chars: Vec<char>,
}

impl TextExecutor {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn into_text(self) -> String {
        self.chars.into_iter().collect()
    }
}

impl BatchExecutor for TextExecutor {
    fn execute(&mut self, ops: &[PrimitiveOp]) -> Result<(), ExecutorError> {
        let mut working = self.chars.clone();

        for (i, op) in ops.iter().enumerate() {
            match op {
                PrimitiveOp::DeleteRange { start, end } => {
                    if start > end || *end > working.len() {
                        return Err(ExecutorError::new(format!(
                            "Op {}: delete [{}, {}) outside text of length {}",
                            i,
                            start,
                            end,
                            working.len()
                        )));
                    }
                    working.drain(*start..*end);
                }
                PrimitiveOp::InsertAt { position, text } => {
                    if *position > working.len() {
                        return Err(ExecutorError::new(format!(
                            "Op {}: insert at {} outside text of length {}",
                            i,
                            position,
                            working.len()
                        )));
                    }
                    working.splice(*position..*position, text.chars());
                }
            }
        }

        self.chars = working;
        Ok(())
    }
}
