//! # Range Notation Parser
//!
//! Converts `[Sheet!]START[:END]` notation into a [`GridRange`].
//!
//! Each token is optional column letters followed by optional row digits.
//! Columns are base-26 with `A = 1 .. Z = 26` and are converted to zero-based
//! indices; rows are 1-based in notation. End bounds are exclusive in the
//! output, so a start-only token covers exactly one row and/or column.

use crate::{Axis, GridRange, RangeError, RangeResult};
use regex::Regex;
use std::sync::OnceLock;

fn range_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([A-Z]*)([0-9]*)(?::([A-Z]*)([0-9]*))?$").expect("range pattern compiles")
    })
}

/// Parse range notation into zero-based grid coordinates on `sheet_id`.
///
/// Accepted forms: `A1`, `A1:D10`, `A:D`, `5:10`, each optionally prefixed
/// with `SheetName!` (the prefix is discarded). Matching is case-insensitive.
pub fn parse(range_text: &str, sheet_id: i64) -> RangeResult<GridRange> {
    let body = match range_text.split_once('!') {
        Some((_sheet, rest)) => rest,
        None => range_text,
    };
    let body = body.trim().to_ascii_uppercase();

    let malformed = || RangeError::Malformed(range_text.to_string());

    let caps = range_pattern().captures(&body).ok_or_else(malformed)?;
    let group = |i: usize| caps.get(i).map(|m| m.as_str()).unwrap_or("");

    let (start_col, start_row) = (group(1), group(2));
    let has_end = caps.get(3).is_some();
    let (end_col, end_row) = (group(3), group(4));

    if start_col.is_empty() && start_row.is_empty() {
        return Err(malformed());
    }
    if has_end && end_col.is_empty() && end_row.is_empty() {
        return Err(malformed());
    }

    let start_column = optional_column(start_col, range_text)?;
    let start_row = optional_row(start_row, range_text)?.map(|r| r - 1);
    let end_column = match optional_column(end_col, range_text)? {
        Some(col) => Some(col + 1),
        None => start_column.map(|col| col + 1),
    };
    let end_row = match optional_row(end_row, range_text)? {
        Some(row) => Some(row),
        None => start_row.map(|row| row + 1),
    };

    check_order(start_row, end_row, Axis::Row, range_text)?;
    check_order(start_column, end_column, Axis::Column, range_text)?;

    let range = GridRange {
        sheet_id,
        start_row,
        end_row,
        start_column,
        end_column,
    };
    tracing::trace!(input = range_text, ?range, "Parsed range notation");
    Ok(range)
}

/// Zero-based index for column letters: `A -> 0`, `Z -> 25`, `AA -> 26`.
///
/// Returns `None` for empty input, non-letters, or indices beyond `u32`.
pub fn column_index(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }
    let mut value: u64 = 0;
    for ch in letters.chars() {
        let ch = ch.to_ascii_uppercase();
        if !ch.is_ascii_uppercase() {
            return None;
        }
        let digit = u64::from(ch as u8 - b'A' + 1);
        value = value.checked_mul(26)?.checked_add(digit)?;
    }
    u32::try_from(value - 1).ok()
}

/// Column letters for a zero-based index: `0 -> A`, `26 -> AA`.
pub fn column_letters(index: u32) -> String {
    let mut n = u64::from(index) + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        letters.push((b'A' + rem) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

fn optional_column(letters: &str, text: &str) -> RangeResult<Option<u32>> {
    if letters.is_empty() {
        return Ok(None);
    }
    // +1 for the exclusive end bound must also fit
    match column_index(letters) {
        Some(index) if index < u32::MAX => Ok(Some(index)),
        _ => Err(RangeError::Overflow(text.to_string())),
    }
}

fn optional_row(digits: &str, text: &str) -> RangeResult<Option<u32>> {
    if digits.is_empty() {
        return Ok(None);
    }
    let row: u32 = digits
        .parse()
        .map_err(|_| RangeError::Overflow(text.to_string()))?;
    match row {
        0 => Err(RangeError::ZeroRow(text.to_string())),
        u32::MAX => Err(RangeError::Overflow(text.to_string())),
        row => Ok(Some(row)),
    }
}

fn check_order(start: Option<u32>, end: Option<u32>, axis: Axis, text: &str) -> RangeResult<()> {
    match (start, end) {
        (Some(s), Some(e)) if e <= s => Err(RangeError::EmptySpan {
            text: text.to_string(),
            axis,
        }),
        _ => Ok(()),
    }
}
