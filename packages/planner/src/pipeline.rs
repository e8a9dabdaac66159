//! # Pipeline
//!
//! Snapshot in, one atomic batch out. The index is built once per pipeline
//! and every call plans against that same unmutated snapshot.

use crate::{
    plan, resolve, ApiRequest, BatchError, BatchExecutor, CellWriteBatch, EditTarget,
    PrimitiveOp, TargetRequest,
};
use docbatch_document::{FlatIndex, Snapshot};
use serde::Serialize;

/// A planned batch together with the targets it was planned from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchPlan {
    pub targets: Vec<EditTarget>,
    pub ops: Vec<PrimitiveOp>,
}

impl BatchPlan {
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The ops as native request objects of the external batch endpoint
    pub fn to_requests(&self) -> Vec<ApiRequest> {
        self.ops.iter().map(ApiRequest::from).collect()
    }
}

pub struct Pipeline {
    index: FlatIndex,
}

impl Pipeline {
    pub fn new(snapshot: &Snapshot) -> Result<Self, BatchError> {
        Ok(Self {
            index: FlatIndex::build(snapshot)?,
        })
    }

    pub fn from_index(index: FlatIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &FlatIndex {
        &self.index
    }

    /// Resolve and plan `requests` without executing anything
    pub fn plan(&self, requests: &[TargetRequest]) -> Result<BatchPlan, BatchError> {
        let targets = resolve(&self.index, requests)?;
        let ops = plan(&targets)?;
        Ok(BatchPlan { targets, ops })
    }

    /// Plan a bulk write into the cells of one table.
    ///
    /// `default_replace` applies when the batch does not say whether
    /// existing cell text is replaced.
    pub fn write_cells(
        &self,
        batch: &CellWriteBatch,
        default_replace: bool,
    ) -> Result<BatchPlan, BatchError> {
        tracing::debug!(
            table = batch.table_start_index,
            cells = batch.cells.len(),
            "Planning cell writes"
        );
        self.plan(&batch.to_requests(default_replace))
    }

    /// Plan `requests` and hand the whole op list to `executor` in one call.
    ///
    /// Nothing reaches the executor unless planning succeeds. An empty plan
    /// is not submitted.
    pub fn submit<E: BatchExecutor>(
        &self,
        executor: &mut E,
        requests: &[TargetRequest],
    ) -> Result<BatchPlan, BatchError> {
        let batch = self.plan(requests)?;
        if batch.is_empty() {
            tracing::info!("Nothing to submit");
            return Ok(batch);
        }

        executor.execute(&batch.ops).map_err(|e| {
            tracing::error!("Batch rejected: {}", e);
            BatchError::from(e)
        })?;

        tracing::info!(ops = batch.ops.len(), "Submitted batch");
        Ok(batch)
    }
}
