pub mod locate;
pub mod outline;
pub mod plan;
pub mod range;

pub use locate::{locate, LocateArgs};
pub use outline::{outline, OutlineArgs};
pub use plan::{plan, PlanArgs};
pub use range::{range, RangeArgs};

use anyhow::{Context, Result};
use docbatch_document::Snapshot;
use std::path::Path;

/// Read a snapshot JSON file as returned by the document API
pub(crate) fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read snapshot {}", path.display()))?;
    let snapshot = Snapshot::from_json(&source)
        .with_context(|| format!("Invalid snapshot {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        elements = snapshot.body.content.len(),
        "Loaded snapshot"
    );
    Ok(snapshot)
}
