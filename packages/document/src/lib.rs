//! # Docbatch Document
//!
//! Turns one structural snapshot of a position-addressed document into a flat
//! index that later planning stages can query by absolute offset.
//!
//! ```text
//! snapshot JSON ──► Snapshot (wire) ──► FlatIndex ──► locate(anchor, row, column)
//!                                          │
//!                                          └──► outline()
//! ```
//!
//! The index is an arena: elements, tables and cells live in flat vectors
//! and refer to each other by position, never by pointer. Tables are keyed
//! by their anchor offset (the table element's declared start).

pub mod error;
pub mod index;
pub mod locator;
pub mod outline;
pub mod snapshot;

pub use error::{IndexError, LookupError};
pub use index::{Cell, Element, ElementId, ElementKind, FlatIndex, Table, TableId};
pub use locator::{locate, CellRef};
pub use outline::{Outline, OutlineEntry};
pub use snapshot::Snapshot;
