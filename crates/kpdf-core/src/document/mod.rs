//! Print-ready document tree handed to the PDF renderer.
//!
//! The tree only describes structure and text. Physical layout (fonts, page
//! breaks, table drawing) is left to the renderer, which receives structural
//! hints such as [`Margins`] and the `unbreakable` flag of a [`Section`].

mod format;
mod layout;
mod primitives;

pub use format::{FormatKind, format_value, wrap_text};
pub use layout::{ColumnSpec, create_section, generate_two_columns, get_content_table};
pub use primitives::{
    LabelValue, create_header, create_label_text, create_sub_header, format_text, generate_line,
};

use serde::{Deserialize, Serialize};

/// Outer spacing of a node: top, right, bottom, left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    /// No spacing on any side.
    pub const ZERO: Margins = Margins::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// One node of the document tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Content {
    /// A single line of styled text.
    Text(Text),
    /// Two node sequences side by side.
    Columns(Columns),
    /// A table.
    Table(Table),
    /// A group of nodes with a page-break hint.
    Section(Section),
    /// Horizontal separator.
    Line(Line),
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Run {
    pub text: String,
    pub style: FormatKind,
}

/// A line of text made of styled runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub runs: Vec<Run>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margins>,
}

impl Text {
    /// Concatenated text of all runs.
    pub fn plain(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// Two-column row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Columns {
    pub left: Vec<Content>,
    pub right: Vec<Content>,
    pub column_gap: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margins>,
}

/// Width policy of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ColumnWidth {
    /// Share the remaining width equally.
    #[serde(rename = "*")]
    Star,
    /// Fit the content.
    #[serde(rename = "auto")]
    Auto,
    /// Fixed width in points.
    #[serde(untagged)]
    Fixed(f32),
}

/// Table border style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableLayout {
    /// Full grid.
    Grid,
    /// Horizontal lines between rows only.
    LightHorizontalLines,
}

/// A table. The first `header_rows` rows of `body` repeat on page breaks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub widths: Vec<ColumnWidth>,
    pub header_rows: usize,
    pub body: Vec<Vec<Content>>,
    pub layout: TableLayout,
}

impl Table {
    /// Body rows after the header.
    pub fn rows(&self) -> &[Vec<Content>] {
        &self.body[self.header_rows.min(self.body.len())..]
    }
}

/// Nodes grouped under one page-break policy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub content: Vec<Content>,
    pub unbreakable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margins>,
}

/// Horizontal separator line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub thickness: f32,
    pub margin: Margins,
}

impl Content {
    /// Plain-text outline of this node, one entry per text line.
    ///
    /// Columns are flattened left then right; table rows are joined with
    /// `" | "`; separator lines become `"---"`.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.collect_lines(&mut lines);
        lines
    }

    fn collect_lines(&self, lines: &mut Vec<String>) {
        match self {
            Content::Text(text) => lines.push(text.plain()),
            Content::Columns(columns) => {
                for node in columns.left.iter().chain(&columns.right) {
                    node.collect_lines(lines);
                }
            }
            Content::Table(table) => {
                for row in &table.body {
                    let cells: Vec<String> =
                        row.iter().map(|cell| cell.lines().join(" ")).collect();
                    lines.push(cells.join(" | "));
                }
            }
            Content::Section(section) => {
                for node in &section.content {
                    node.collect_lines(lines);
                }
            }
            Content::Line(_) => lines.push("---".to_string()),
        }
    }
}

/// Plain-text outline of a node sequence.
pub fn outline(nodes: &[Content]) -> Vec<String> {
    nodes.iter().flat_map(Content::lines).collect()
}
