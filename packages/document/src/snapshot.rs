//! # Snapshot wire types
//!
//! The structural read of a document as returned by the external document
//! API: a body of structural elements, each carrying absolute
//! `startIndex`/`endIndex` offsets, with tables nesting rows, cells and
//! further structural elements.
//!
//! Only the fields the index needs are modelled; everything else in the
//! payload is ignored on deserialization.

use crate::IndexError;
use serde::{Deserialize, Serialize};

/// One immutable structural read of a document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default)]
    pub body: Body,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

/// A top-level or cell-level structural unit.
///
/// Exactly one of the kind fields is expected to be set; an element with
/// none of them is indexed as an unknown paragraph-like unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_index: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_index: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<Paragraph>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<Table>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_break: Option<SectionBreak>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_of_contents: Option<TableOfContents>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    #[serde(default)]
    pub elements: Vec<ParagraphElement>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph_style: Option<ParagraphStyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub named_style_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_index: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_index: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_run: Option<TextRun>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    #[serde(default)]
    pub rows: usize,

    #[serde(default)]
    pub columns: usize,

    #[serde(default)]
    pub table_rows: Vec<TableRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_index: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_index: Option<usize>,

    #[serde(default)]
    pub table_cells: Vec<TableCell>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_index: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_index: Option<usize>,

    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionBreak {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableOfContents {
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

impl Snapshot {
    /// Parse a snapshot from the API's JSON representation
    pub fn from_json(json: &str) -> Result<Self, IndexError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Every text run in the document, in document order, with its declared
    /// start offset. Descends into tables, cells and tables of contents.
    pub fn text_runs(&self) -> Vec<(usize, &str)> {
        let mut runs = Vec::new();
        // Explicit stack instead of recursion; pushed in reverse so pops
        // come out in document order.
        let mut stack: Vec<&StructuralElement> = self.body.content.iter().rev().collect();

        while let Some(element) = stack.pop() {
            if let Some(paragraph) = &element.paragraph {
                for run in &paragraph.elements {
                    if let Some(text) = &run.text_run {
                        runs.push((run.start_index.unwrap_or(0), text.content.as_str()));
                    }
                }
            }
            if let Some(table) = &element.table {
                let nested = table
                    .table_rows
                    .iter()
                    .flat_map(|row| row.table_cells.iter())
                    .flat_map(|cell| cell.content.iter());
                stack.extend(nested.collect::<Vec<_>>().into_iter().rev());
            }
            if let Some(toc) = &element.table_of_contents {
                stack.extend(toc.content.iter().rev());
            }
        }

        runs
    }

    /// Lay out every text run at its declared offset.
    ///
    /// Positions no run covers (table and cell boundaries, the implicit
    /// leading position) are filled with spaces, so character `i` of the
    /// result corresponds to document offset `i`.
    pub fn render_text(&self) -> String {
        let mut chars: Vec<char> = Vec::new();
        for (start, text) in self.text_runs() {
            for (i, ch) in text.chars().enumerate() {
                let at = start + i;
                if at >= chars.len() {
                    chars.resize(at + 1, ' ');
                }
                chars[at] = ch;
            }
        }
        chars.into_iter().collect()
    }
}
