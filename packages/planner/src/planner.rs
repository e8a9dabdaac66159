//! # Batch Planner
//!
//! Turns a set of edit targets, all resolved against one snapshot, into a
//! single op list whose offsets stay valid as it is applied in order.

use crate::{EditOperation, EditTarget, PlanError, PrimitiveOp};

/// Plan `targets` as one batch.
///
/// Each target becomes a group of at most two ops. Groups are emitted by
/// original start offset, highest first. Targets that overlap or share a
/// start offset are rejected and no ops are produced.
pub fn plan(targets: &[EditTarget]) -> Result<Vec<PrimitiveOp>, PlanError> {
    let mut order: Vec<&EditTarget> = targets.iter().collect();
    order.sort_by_key(|target| (target.span.start(), target.span.end()));

    validate(&order)?;

    let mut ops = Vec::with_capacity(targets.len() * 2);
    for target in order.iter().rev() {
        target.emit(&mut ops);
    }

    tracing::debug!(targets = targets.len(), ops = ops.len(), "Planned batch");

    Ok(ops)
}

/// `order` must be sorted by start offset
fn validate(order: &[&EditTarget]) -> Result<(), PlanError> {
    for pair in order.windows(2) {
        if pair[0].span.start() == pair[1].span.start() {
            return Err(PlanError::DuplicateStart(pair[0].span.start()));
        }
    }

    // The span reaching furthest right so far is the only one a later
    // target can collide with.
    let mut widest = match order.first() {
        Some(target) => target.span,
        None => return Ok(()),
    };
    for target in &order[1..] {
        if target.span.start() < widest.end() {
            return Err(PlanError::Overlap(widest, target.span));
        }
        if target.span.end() > widest.end() {
            widest = target.span;
        }
    }

    Ok(())
}

impl EditTarget {
    /// The ops this target contributes, in the order they must run
    pub fn primitive_ops(&self) -> Vec<PrimitiveOp> {
        let mut ops = Vec::with_capacity(2);
        self.emit(&mut ops);
        ops
    }

    fn emit(&self, ops: &mut Vec<PrimitiveOp>) {
        let start = self.span.start();
        let end = self.span.end();
        // Position `end - 1` holds the container's terminator
        let has_body = end - start > 1;

        match &self.operation {
            EditOperation::Insert(text) => ops.push(PrimitiveOp::InsertAt {
                position: start,
                text: text.clone(),
            }),
            EditOperation::Replace(text) => {
                if has_body {
                    ops.push(PrimitiveOp::DeleteRange {
                        start,
                        end: end - 1,
                    });
                }
                ops.push(PrimitiveOp::InsertAt {
                    position: start,
                    text: text.clone(),
                });
            }
            EditOperation::Delete => {
                if has_body {
                    ops.push(PrimitiveOp::DeleteRange {
                        start,
                        end: end - 1,
                    });
                }
            }
        }
    }
}
