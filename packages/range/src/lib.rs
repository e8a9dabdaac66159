//! # Range Notation
//!
//! Parses compact range expressions such as `A1:D10`, `A:D`, `5:10` or
//! `Sheet1!B2` into zero-based, half-open [`GridRange`] coordinates.
//!
//! ```rust
//! use docbatch_range::parse;
//!
//! let range = parse("Sheet1!A1:D10", 0).unwrap();
//! assert_eq!(range.start_row, Some(0));
//! assert_eq!(range.end_column, Some(4));
//! ```

pub mod error;
pub mod grid_range;
pub mod parser;

pub use error::{Axis, RangeError, RangeResult};
pub use grid_range::GridRange;
pub use parser::{column_index, column_letters, parse};
