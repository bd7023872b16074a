//! Layout composers: columns, sections and record tables.

use super::format::FormatKind;
use super::primitives::format_text;
use super::{ColumnWidth, Columns, Content, Margins, Section, Table, TableLayout};
use crate::dictionary::{Concept, Vocabulary, resolve};
use crate::models::Schema;
use crate::models::field::{Record, get_value};

const COLUMN_GAP: f32 = 20.0;

/// Two node sequences side by side. Either side may be empty.
pub fn generate_two_columns(
    left: Vec<Content>,
    right: Vec<Content>,
    margins: Option<Margins>,
) -> Content {
    Content::Columns(Columns {
        left,
        right,
        column_gap: COLUMN_GAP,
        margin: margins,
    })
}

/// Wrap nodes under one page-break policy.
pub fn create_section(nodes: Vec<Content>, breakable: bool, margins: Option<Margins>) -> Content {
    Content::Section(Section {
        content: nodes,
        unbreakable: !breakable,
        margin: margins,
    })
}

/// One table column: record field name, display title, cell format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub title: &'static str,
    pub format: FormatKind,
}

impl ColumnSpec {
    pub fn new(name: &'static str, title: &'static str, format: FormatKind) -> Self {
        Self {
            name,
            title,
            format,
        }
    }
}

/// Build a table with a header row of column titles and one row per record.
///
/// Returns `None` when there are no records.
pub fn get_content_table<R: Record>(
    vocabulary: &dyn Vocabulary,
    schema: Schema,
    columns: &[ColumnSpec],
    records: &[R],
    width: ColumnWidth,
) -> Option<Content> {
    if records.is_empty() {
        return None;
    }

    let mut body = Vec::with_capacity(records.len() + 1);
    body.push(
        columns
            .iter()
            .map(|column| format_text(column.title, FormatKind::TableHeader))
            .collect(),
    );

    for record in records {
        let row = columns
            .iter()
            .map(|column| {
                let field = record.field(column.name);
                match column.format {
                    FormatKind::FormOfPayment => format_text(
                        &resolve(vocabulary, Concept::FormOfPayment, schema, field),
                        FormatKind::Default,
                    ),
                    format => format_text(get_value(field), format),
                }
            })
            .collect();
        body.push(row);
    }

    Some(Content::Table(Table {
        widths: vec![width; columns.len()],
        header_rows: 1,
        body,
        layout: TableLayout::Grid,
    }))
}
