//! Shared offset primitives for docbatch packages.

pub mod error;
pub mod span;

pub use error::SpanError;
pub use span::Span;
