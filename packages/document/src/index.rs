//! # Flat Index
//!
//! Arena view of a [`Snapshot`]: one [`Element`] per top-level structural
//! unit with its absolute `[start, end)` span, a table arena, and a cell
//! arena holding every table's `rows x columns` grid in row-major order.
//!
//! The index is built once per snapshot and never mutated afterwards.

use crate::snapshot::{self, Snapshot, StructuralElement};
use crate::{IndexError, LookupError};
use docbatch_common::Span;
use std::ops::Range;

const DEFAULT_PARAGRAPH_STYLE: &str = "NORMAL_TEXT";

/// Position of an element in the element arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

/// Position of a table in the table arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    Paragraph { style: String, text: String },
    Table(TableId),
    SectionBreak,
    TableOfContents,
    /// A structural unit of a kind this index does not model
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub span: Span,
    pub kind: ElementKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub element: ElementId,
    pub span: Span,
    pub rows: usize,
    pub columns: usize,
    /// Slots in the cell arena, `rows * columns` long
    cells: Range<usize>,
}

impl Table {
    /// The table's stable identifier within a snapshot: its start offset
    pub fn anchor(&self) -> usize {
        self.span.start()
    }
}

/// One grid slot of a table.
///
/// `content` runs from the first content element's start to the last
/// content element's end, so it includes the cell's trailing terminator.
/// It is `None` when the cell has no content elements, or when the row is
/// shorter than the table and the slot has no cell at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
    pub span: Option<Span>,
    pub content: Option<Span>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatIndex {
    elements: Vec<Element>,
    tables: Vec<Table>,
    cells: Vec<Cell>,
}

impl FlatIndex {
    /// Flatten a snapshot into an index.
    ///
    /// Elements must be ordered by start and must not overlap. Gaps between
    /// consecutive elements are tolerated.
    pub fn build(snapshot: &Snapshot) -> Result<Self, IndexError> {
        let mut index = Self::default();
        let mut previous: Option<Span> = None;

        for (i, element) in snapshot.body.content.iter().enumerate() {
            let start = element.start_index.unwrap_or(0);
            let end = element.end_index.unwrap_or(start);
            let span = Span::new(start, end)
                .map_err(|_| IndexError::InvertedElement { index: i, start, end })?;

            if let Some(prev) = previous {
                if span.start() < prev.end() {
                    return Err(IndexError::OutOfOrder {
                        previous: prev,
                        next: span,
                    });
                }
                if span.start() > prev.end() {
                    tracing::warn!(
                        gap_start = prev.end(),
                        gap_end = span.start(),
                        "Gap between structural elements"
                    );
                }
            }

            let id = ElementId(index.elements.len());
            let kind = index.classify(id, span, element)?;
            index.elements.push(Element { span, kind });
            previous = Some(span);
        }

        tracing::debug!(
            elements = index.elements.len(),
            tables = index.tables.len(),
            cells = index.cells.len(),
            "Built document index"
        );
        Ok(index)
    }

    fn classify(
        &mut self,
        id: ElementId,
        span: Span,
        element: &StructuralElement,
    ) -> Result<ElementKind, IndexError> {
        if let Some(table) = &element.table {
            return Ok(ElementKind::Table(self.push_table(id, span, table)?));
        }
        if let Some(paragraph) = &element.paragraph {
            let style = paragraph
                .paragraph_style
                .as_ref()
                .and_then(|s| s.named_style_type.clone())
                .unwrap_or_else(|| DEFAULT_PARAGRAPH_STYLE.to_string());
            let text = paragraph
                .elements
                .iter()
                .filter_map(|e| e.text_run.as_ref())
                .map(|run| run.content.as_str())
                .collect();
            return Ok(ElementKind::Paragraph { style, text });
        }
        if element.section_break.is_some() {
            return Ok(ElementKind::SectionBreak);
        }
        if element.table_of_contents.is_some() {
            return Ok(ElementKind::TableOfContents);
        }
        Ok(ElementKind::Other)
    }

    fn push_table(
        &mut self,
        element: ElementId,
        span: Span,
        table: &snapshot::Table,
    ) -> Result<TableId, IndexError> {
        let anchor = span.start();
        let actual_rows = table.table_rows.len();
        let rows = if table.rows == 0 { actual_rows } else { table.rows };
        if actual_rows != rows {
            return Err(IndexError::TableShape {
                anchor,
                message: format!("declares {} rows but has {}", rows, actual_rows),
            });
        }

        let widest = table
            .table_rows
            .iter()
            .map(|row| row.table_cells.len())
            .max()
            .unwrap_or(0);
        // The grid is sized from real cells, never from the declared count alone
        let columns = if table.columns == 0 { widest } else { table.columns };
        if widest != columns {
            return Err(IndexError::TableShape {
                anchor,
                message: format!(
                    "widest row has {} cells but {} columns are declared",
                    widest, columns
                ),
            });
        }

        let first = self.cells.len();
        for (r, row) in table.table_rows.iter().enumerate() {
            for c in 0..columns {
                let cell = match row.table_cells.get(c) {
                    Some(cell) => cell_record(anchor, span, r, c, cell)?,
                    None => Cell {
                        row: r,
                        column: c,
                        span: None,
                        content: None,
                    },
                };
                self.cells.push(cell);
            }
        }

        let id = TableId(self.tables.len());
        self.tables.push(Table {
            element,
            span,
            rows,
            columns,
            cells: first..self.cells.len(),
        });
        tracing::trace!(anchor, rows, columns, "Indexed table");
        Ok(id)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn table(&self, id: TableId) -> Option<&Table> {
        self.tables.get(id.0)
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The table whose declared start is exactly `anchor`.
    ///
    /// There is no nearest-match fallback: an anchor inside a table, or just
    /// before one, is not found.
    pub fn find_table(&self, anchor: usize) -> Result<&Table, LookupError> {
        let first = self.elements.partition_point(|e| e.span.start() < anchor);
        self.elements[first..]
            .iter()
            .take_while(|e| e.span.start() == anchor)
            .find_map(|e| match e.kind {
                ElementKind::Table(id) => self.tables.get(id.0),
                _ => None,
            })
            .ok_or(LookupError::TableNotFound { anchor })
    }

    /// Row-major grid of a table's cells
    pub fn cells(&self, table: &Table) -> &[Cell] {
        &self.cells[table.cells.clone()]
    }

    /// The grid slot at `(row, column)`, or `None` outside the grid
    pub fn cell(&self, table: &Table, row: usize, column: usize) -> Option<&Cell> {
        if row >= table.rows || column >= table.columns {
            return None;
        }
        self.cells(table).get(row * table.columns + column)
    }

    /// The non-empty element whose span contains `offset`
    pub fn element_at(&self, offset: usize) -> Option<&Element> {
        let after = self.elements.partition_point(|e| e.span.start() <= offset);
        self.elements[..after]
            .iter()
            .rev()
            .find(|e| !e.span.is_empty())
            .filter(|e| e.span.contains(offset))
    }

    /// Span from the first element's start to the last element's end
    pub fn body_span(&self) -> Option<Span> {
        let first = self.elements.first()?;
        let last = self.elements.last()?;
        Span::new(first.span.start(), last.span.end()).ok()
    }

    /// Where text appended to the body should be inserted: just before the
    /// body's final terminator.
    pub fn append_position(&self) -> Option<usize> {
        let last = self.elements.last()?;
        last.span.end().checked_sub(1)
    }
}

fn cell_record(
    anchor: usize,
    table_span: Span,
    row: usize,
    column: usize,
    cell: &snapshot::TableCell,
) -> Result<Cell, IndexError> {
    let span = match (cell.start_index, cell.end_index) {
        (Some(start), Some(end)) => Span::new(start, end).ok(),
        _ => None,
    };

    let content = match (cell.content.first(), cell.content.last()) {
        (Some(first), Some(last)) => {
            let start = first.start_index.unwrap_or(0);
            let end = last.end_index.unwrap_or(start + 1);
            let content = Span::new(start, end)
                .ok()
                .filter(|s| !s.is_empty())
                .ok_or(IndexError::DegenerateCell { anchor, row, column })?;
            if content.start() < table_span.start() || content.end() > table_span.end() {
                return Err(IndexError::TableShape {
                    anchor,
                    message: format!(
                        "cell ({}, {}) content {} lies outside the table",
                        row, column, content
                    ),
                });
            }
            Some(content)
        }
        _ => None,
    };

    Ok(Cell {
        row,
        column,
        span,
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn para(start: usize, text: &str) -> serde_json::Value {
        let end = start + text.chars().count();
        json!({
            "startIndex": start,
            "endIndex": end,
            "paragraph": {
                "elements": [{ "startIndex": start, "endIndex": end, "textRun": { "content": text } }]
            }
        })
    }

    fn snapshot(content: Vec<serde_json::Value>) -> Snapshot {
        serde_json::from_value(json!({ "body": { "content": content } })).unwrap()
    }

    /// 2x2 table at offset 7; cell (0, 1) and (1, 1) hold only a terminator
    fn table_doc() -> Snapshot {
        snapshot(vec![
            json!({ "endIndex": 1, "sectionBreak": {} }),
            para(1, "Title\n"),
            json!({
                "startIndex": 7,
                "endIndex": 23,
                "table": {
                    "rows": 2,
                    "columns": 2,
                    "tableRows": [
                        {
                            "startIndex": 8, "endIndex": 15,
                            "tableCells": [
                                { "startIndex": 9, "endIndex": 13, "content": [para(10, "ab\n")] },
                                { "startIndex": 13, "endIndex": 15, "content": [para(14, "\n")] }
                            ]
                        },
                        {
                            "startIndex": 15, "endIndex": 23,
                            "tableCells": [
                                { "startIndex": 16, "endIndex": 21, "content": [para(17, "xyz\n")] },
                                { "startIndex": 21, "endIndex": 23, "content": [para(22, "\n")] }
                            ]
                        }
                    ]
                }
            }),
            para(23, "tail\n"),
        ])
    }

    #[test]
    fn test_build_elements_in_order() {
        let index = FlatIndex::build(&table_doc()).unwrap();
        let spans: Vec<_> = index
            .elements()
            .iter()
            .map(|e| (e.span.start(), e.span.end()))
            .collect();
        assert_eq!(spans, vec![(0, 1), (1, 7), (7, 23), (23, 28)]);
        assert_eq!(index.elements()[0].kind, ElementKind::SectionBreak);
        assert_eq!(
            index.elements()[1].kind,
            ElementKind::Paragraph {
                style: "NORMAL_TEXT".to_string(),
                text: "Title\n".to_string()
            }
        );
    }

    #[test]
    fn test_table_grid() {
        let index = FlatIndex::build(&table_doc()).unwrap();
        let table = index.find_table(7).unwrap();
        assert_eq!((table.rows, table.columns), (2, 2));
        assert_eq!(table.anchor(), 7);
        assert_eq!(index.cells(table).len(), 4);

        let cell = index.cell(table, 1, 0).unwrap();
        assert_eq!(cell.content, Some(Span::new(17, 21).unwrap()));
        assert_eq!(cell.span, Some(Span::new(16, 21).unwrap()));
        assert!(index.cell(table, 2, 0).is_none());
        assert!(index.cell(table, 0, 2).is_none());
    }

    #[test]
    fn test_find_table_is_exact() {
        let index = FlatIndex::build(&table_doc()).unwrap();
        assert!(index.find_table(7).is_ok());
        for anchor in [6, 8, 1, 23] {
            assert_eq!(
                index.find_table(anchor),
                Err(LookupError::TableNotFound { anchor })
            );
        }
    }

    #[test]
    fn test_gap_is_tolerated() {
        let index = FlatIndex::build(&snapshot(vec![para(1, "a\n"), para(10, "b\n")])).unwrap();
        assert_eq!(index.elements().len(), 2);
    }

    #[test]
    fn test_overlap_rejected() {
        let err = FlatIndex::build(&snapshot(vec![para(1, "abc\n"), para(3, "b\n")])).unwrap_err();
        assert_eq!(
            err,
            IndexError::OutOfOrder {
                previous: Span::new(1, 5).unwrap(),
                next: Span::new(3, 5).unwrap()
            }
        );
    }

    #[test]
    fn test_inverted_element_rejected() {
        let err = FlatIndex::build(&snapshot(vec![json!({
            "startIndex": 5, "endIndex": 2, "paragraph": {}
        })]))
        .unwrap_err();
        assert_eq!(err, IndexError::InvertedElement { index: 0, start: 5, end: 2 });
    }

    #[test]
    fn test_short_row_and_empty_cell() {
        let doc = snapshot(vec![json!({
            "startIndex": 1,
            "endIndex": 10,
            "table": {
                "rows": 2,
                "columns": 2,
                "tableRows": [
                    { "tableCells": [
                        { "content": [para(3, "a\n")] },
                        { "content": [] }
                    ] },
                    { "tableCells": [ { "content": [para(7, "b\n")] } ] }
                ]
            }
        })]);
        let index = FlatIndex::build(&doc).unwrap();
        let table = index.find_table(1).unwrap();

        assert_eq!(index.cell(table, 0, 0).unwrap().content, Some(Span::new(3, 5).unwrap()));
        assert_eq!(index.cell(table, 0, 1).unwrap().content, None);
        assert_eq!(index.cell(table, 1, 1).unwrap().content, None);
    }

    #[test]
    fn test_table_shape_errors() {
        let too_wide = snapshot(vec![json!({
            "startIndex": 1, "endIndex": 10,
            "table": { "rows": 1, "columns": 1, "tableRows": [
                { "tableCells": [ { "content": [] }, { "content": [] } ] }
            ] }
        })]);
        assert!(matches!(
            FlatIndex::build(&too_wide),
            Err(IndexError::TableShape { anchor: 1, .. })
        ));

        let missing_row = snapshot(vec![json!({
            "startIndex": 1, "endIndex": 10,
            "table": { "rows": 3, "columns": 1, "tableRows": [ { "tableCells": [] } ] }
        })]);
        assert!(matches!(
            FlatIndex::build(&missing_row),
            Err(IndexError::TableShape { .. })
        ));
    }

    #[test]
    fn test_declared_columns_must_match_widest_row() {
        let doc = snapshot(vec![json!({
            "startIndex": 1, "endIndex": 6,
            "table": { "rows": 1, "columns": 20_000_000, "tableRows": [
                { "tableCells": [ { "content": [para(3, "a\n")] } ] }
            ] }
        })]);
        assert!(matches!(
            FlatIndex::build(&doc),
            Err(IndexError::TableShape { anchor: 1, .. })
        ));
    }

    #[test]
    fn test_dimensions_inferred_when_undeclared() {
        let doc = snapshot(vec![json!({
            "startIndex": 1, "endIndex": 20,
            "table": { "tableRows": [
                { "tableCells": [ { "content": [para(3, "a\n")] }, { "content": [para(6, "b\n")] }, { "content": [para(9, "c\n")] } ] }
            ] }
        })]);
        let index = FlatIndex::build(&doc).unwrap();
        let table = index.find_table(1).unwrap();
        assert_eq!((table.rows, table.columns), (1, 3));
    }

    #[test]
    fn test_cell_content_outside_table_rejected() {
        let doc = snapshot(vec![json!({
            "startIndex": 1, "endIndex": 5,
            "table": { "tableRows": [ { "tableCells": [ { "content": [para(3, "abcdef\n")] } ] } ] }
        })]);
        assert!(matches!(
            FlatIndex::build(&doc),
            Err(IndexError::TableShape { anchor: 1, .. })
        ));
    }

    #[test]
    fn test_element_at() {
        let index = FlatIndex::build(&table_doc()).unwrap();
        assert_eq!(index.element_at(0).unwrap().kind, ElementKind::SectionBreak);
        assert!(matches!(index.element_at(12).unwrap().kind, ElementKind::Table(_)));
        assert_eq!(index.element_at(23).unwrap().span, Span::new(23, 28).unwrap());
        assert!(index.element_at(28).is_none());
    }

    #[test]
    fn test_append_position_and_body_span() {
        let index = FlatIndex::build(&table_doc()).unwrap();
        assert_eq!(index.append_position(), Some(27));
        assert_eq!(index.body_span(), Some(Span::new(0, 28).unwrap()));

        let empty = FlatIndex::build(&Snapshot::default()).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.append_position(), None);
        assert_eq!(empty.body_span(), None);
    }
}
