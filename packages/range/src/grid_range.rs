use crate::parser::column_letters;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Zero-based, half-open grid coordinates on one sheet.
///
/// A `None` bound means the range is unbounded on that side, e.g. `A:D`
/// leaves both row bounds open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridRange {
    #[serde(rename = "sheetId")]
    pub sheet_id: i64,

    #[serde(rename = "startRowIndex", default, skip_serializing_if = "Option::is_none")]
    pub start_row: Option<u32>,

    #[serde(rename = "endRowIndex", default, skip_serializing_if = "Option::is_none")]
    pub end_row: Option<u32>,

    #[serde(rename = "startColumnIndex", default, skip_serializing_if = "Option::is_none")]
    pub start_column: Option<u32>,

    #[serde(rename = "endColumnIndex", default, skip_serializing_if = "Option::is_none")]
    pub end_column: Option<u32>,
}

impl GridRange {
    /// Unbounded range covering the whole sheet
    pub fn whole_sheet(sheet_id: i64) -> Self {
        Self {
            sheet_id,
            ..Self::default()
        }
    }

    /// True when a closed axis has `end <= start`.
    ///
    /// The parser never produces such a range, but ranges assembled by hand
    /// or deserialized from elsewhere can.
    pub fn is_empty(&self) -> bool {
        let closed_empty = |start: Option<u32>, end: Option<u32>| match (start, end) {
            (Some(s), Some(e)) => e <= s,
            _ => false,
        };
        closed_empty(self.start_row, self.end_row)
            || closed_empty(self.start_column, self.end_column)
    }

    /// Number of rows, if both row bounds are set
    pub fn row_count(&self) -> Option<u32> {
        Some(self.end_row?.saturating_sub(self.start_row?))
    }

    /// Number of columns, if both column bounds are set
    pub fn column_count(&self) -> Option<u32> {
        Some(self.end_column?.saturating_sub(self.start_column?))
    }

    /// Whether the end bounds are exactly what a start-only token implies
    fn is_single_token(&self) -> bool {
        self.end_row == self.start_row.map(|r| r + 1)
            && self.end_column == self.start_column.map(|c| c + 1)
    }
}

/// Renders canonical notation without the sheet prefix: `A1:D10`, `A:D`, `5:10`.
///
/// Notation has no form for a range open on every side, so
/// [`GridRange::whole_sheet`] renders as the empty string, which `parse`
/// rejects as malformed.
impl fmt::Display for GridRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(col) = self.start_column {
            write!(f, "{}", column_letters(col))?;
        }
        if let Some(row) = self.start_row {
            write!(f, "{}", row + 1)?;
        }
        if self.is_single_token() {
            return Ok(());
        }

        write!(f, ":")?;
        if let Some(col) = self.end_column {
            write!(f, "{}", column_letters(col.saturating_sub(1)))?;
        }
        if let Some(row) = self.end_row {
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}
