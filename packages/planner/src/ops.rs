//! Primitive operations and their external API request form

use serde::{Deserialize, Serialize};

/// One atomic mutation in a batch.
///
/// Offsets are interpreted against the document as left by the ops that
/// precede this one in the same batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum PrimitiveOp {
    /// Remove `[start, end)`
    #[serde(rename = "delete")]
    DeleteRange { start: usize, end: usize },

    /// Insert `text` so that its first character lands at `position`
    #[serde(rename = "insert")]
    InsertAt { position: usize, text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRange {
    pub start_index: usize,
    pub end_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiLocation {
    pub index: usize,
}

/// A primitive op in the request shape the external batch endpoint accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApiRequest {
    DeleteContentRange { range: ApiRange },
    InsertText { location: ApiLocation, text: String },
}

impl PrimitiveOp {
    pub fn position(&self) -> usize {
        match self {
            PrimitiveOp::DeleteRange { start, .. } => *start,
            PrimitiveOp::InsertAt { position, .. } => *position,
        }
    }

    pub fn to_api_request(&self) -> ApiRequest {
        match self {
            PrimitiveOp::DeleteRange { start, end } => ApiRequest::DeleteContentRange {
                range: ApiRange {
                    start_index: *start,
                    end_index: *end,
                },
            },
            PrimitiveOp::InsertAt { position, text } => ApiRequest::InsertText {
                location: ApiLocation { index: *position },
                text: text.clone(),
            },
        }
    }
}

impl From<&PrimitiveOp> for ApiRequest {
    fn from(op: &PrimitiveOp) -> Self {
        op.to_api_request()
    }
}
