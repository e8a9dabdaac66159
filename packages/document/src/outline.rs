//! Human-readable structure listing of an index, one line per element:
//!
//! ```text
//! [1-7] HEADING_1: "Title"
//! [7-23] TABLE: 2x2
//! [23-28] NORMAL_TEXT: "tail"
//! ```

use crate::{ElementKind, FlatIndex};
use docbatch_common::Span;
use serde::Serialize;
use std::fmt;

const PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    pub span: Span,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Outline {
    pub entries: Vec<OutlineEntry>,
}

impl FlatIndex {
    pub fn outline(&self) -> Outline {
        let entries = self
            .elements()
            .iter()
            .map(|element| {
                let label = match &element.kind {
                    ElementKind::Paragraph { style, text } => {
                        format!("{}: {:?}", style, preview(text))
                    }
                    ElementKind::Table(id) => match self.table(*id) {
                        Some(table) => format!("TABLE: {}x{}", table.rows, table.columns),
                        None => "TABLE".to_string(),
                    },
                    ElementKind::SectionBreak => "SECTION_BREAK".to_string(),
                    ElementKind::TableOfContents => "TABLE_OF_CONTENTS".to_string(),
                    ElementKind::Other => "UNKNOWN".to_string(),
                };
                OutlineEntry {
                    span: element.span,
                    label,
                }
            })
            .collect();
        Outline { entries }
    }
}

fn preview(text: &str) -> String {
    let trimmed = text.trim();
    let mut out: String = trimmed.chars().take(PREVIEW_CHARS).collect();
    if trimmed.chars().count() > PREVIEW_CHARS {
        out.push_str("...");
    }
    out
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(
                f,
                "[{}-{}] {}",
                entry.span.start(),
                entry.span.end(),
                entry.label
            )?;
        }
        Ok(())
    }
}
