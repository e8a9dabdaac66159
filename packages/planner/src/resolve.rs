//! Resolves caller requests into edit targets against one index

use crate::{EditTarget, ResolveError, TargetLocation, TargetRequest};
use docbatch_common::Span;
use docbatch_document::FlatIndex;

/// Resolve every request against `index`.
///
/// Fails on the first request that does not resolve; no partial target
/// list is ever returned.
pub fn resolve(
    index: &FlatIndex,
    requests: &[TargetRequest],
) -> Result<Vec<EditTarget>, ResolveError> {
    let body_end = index.body_span().map(|span| span.end()).unwrap_or(0);

    requests
        .iter()
        .enumerate()
        .map(|(request, item)| {
            let span = match &item.at {
                TargetLocation::Cell(cell) => cell
                    .locate(index)
                    .map_err(|source| ResolveError::Lookup { request, source })?,
                TargetLocation::Range(span) => {
                    if span.end() > body_end {
                        return Err(ResolveError::OutsideDocument {
                            request,
                            span: *span,
                            end: body_end,
                        });
                    }
                    *span
                }
                TargetLocation::End => index
                    .append_position()
                    .map(Span::point)
                    .ok_or(ResolveError::EmptyDocument { request })?,
            };
            tracing::trace!(request, %span, "Resolved target");
            Ok(EditTarget::new(span, item.operation.clone()))
        })
        .collect()
}
