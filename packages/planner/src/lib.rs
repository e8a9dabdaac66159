//! # Docbatch Planner
//!
//! Plans a set of edits against one document snapshot as a single ordered
//! batch of primitive operations.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: Snapshot → FlatIndex              │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ resolve: TargetRequest → EditTarget         │
//! │  - cells located via the index              │
//! │  - raw ranges checked against the body      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ planner: EditTarget[] → PrimitiveOp[]       │
//! │  - reject overlaps and shared starts        │
//! │  - emit groups highest offset first         │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ executor: one atomic batch call             │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering invariant
//!
//! Every op in the batch is interpreted against the document as left by the
//! ops before it. An edit at offset `p` only moves offsets greater than `p`,
//! so with groups emitted by original start, highest first, each group's
//! original offsets are still valid when it runs.
//!
//! ## Usage
//!
//! ```rust
//! use docbatch_common::Span;
//! use docbatch_planner::{plan, EditOperation, EditTarget, PrimitiveOp};
//!
//! let targets = vec![
//!     EditTarget::new(Span::new(10, 14).unwrap(), EditOperation::Replace("a".into())),
//!     EditTarget::new(Span::new(20, 25).unwrap(), EditOperation::Replace("b".into())),
//! ];
//! let ops = plan(&targets).unwrap();
//! assert_eq!(ops[0], PrimitiveOp::DeleteRange { start: 20, end: 24 });
//! ```

mod errors;
mod executor;
mod ops;
mod pipeline;
mod planner;
mod resolve;
mod target;

pub use errors::{BatchError, ExecutorError, PlanError, ResolveError};
pub use executor::{BatchExecutor, TextExecutor};
pub use ops::{ApiLocation, ApiRange, ApiRequest, PrimitiveOp};
pub use pipeline::{BatchPlan, Pipeline};
pub use planner::plan;
pub use resolve::resolve;
pub use target::{
    CellWrite, CellWriteBatch, EditOperation, EditTarget, TargetLocation, TargetRequest,
};

// Re-export the types requests are built from
pub use docbatch_common::Span;
pub use docbatch_document::{CellRef, FlatIndex, Snapshot};
