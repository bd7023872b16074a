//! Atomic content nodes.

use super::format::{FormatKind, format_value};
use super::{Content, Line, Margins, Run, Text};
use crate::models::field::{Field, get_value};

const HEADER_MARGINS: Margins = Margins::new(8.0, 0.0, 4.0, 0.0);
const SUB_HEADER_MARGINS: Margins = Margins::new(4.0, 0.0, 2.0, 0.0);
const LINE_MARGINS: Margins = Margins::new(0.0, 0.0, 4.0, 0.0);

/// Value of a label/value line.
///
/// Only field values go through the line's format kind; text is emitted
/// as given.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelValue<'a> {
    Field(Option<&'a Field>),
    Text(String),
}

impl<'a> From<&'a Field> for LabelValue<'a> {
    fn from(field: &'a Field) -> Self {
        LabelValue::Field(Some(field))
    }
}

impl<'a> From<Option<&'a Field>> for LabelValue<'a> {
    fn from(field: Option<&'a Field>) -> Self {
        LabelValue::Field(field)
    }
}

impl<'a> From<&'a Option<Field>> for LabelValue<'a> {
    fn from(field: &'a Option<Field>) -> Self {
        LabelValue::Field(field.as_ref())
    }
}

impl From<&str> for LabelValue<'_> {
    fn from(text: &str) -> Self {
        LabelValue::Text(text.to_string())
    }
}

impl From<String> for LabelValue<'_> {
    fn from(text: String) -> Self {
        LabelValue::Text(text)
    }
}

/// A single styled text node.
pub fn format_text(value: &str, kind: FormatKind) -> Content {
    Content::Text(Text {
        runs: vec![Run {
            text: format_value(value, kind),
            style: kind,
        }],
        margin: None,
    })
}

/// One `"<label><value>"` line. An absent field yields an empty value but
/// the label is still emitted.
pub fn create_label_text<'a>(
    label: &str,
    value: impl Into<LabelValue<'a>>,
    kind: FormatKind,
) -> Content {
    let text = match value.into() {
        LabelValue::Field(field) => format_value(get_value(field), kind),
        LabelValue::Text(text) => text,
    };

    Content::Text(Text {
        runs: vec![
            Run {
                text: label.to_string(),
                style: FormatKind::Label,
            },
            Run {
                text,
                style: if kind == FormatKind::Default {
                    FormatKind::Value
                } else {
                    kind
                },
            },
        ],
        margin: None,
    })
}

/// Section header. Defaults to margins 8/0/4/0.
pub fn create_header(title: &str, margins: Option<Margins>) -> Content {
    Content::Text(Text {
        runs: vec![Run {
            text: title.to_string(),
            style: FormatKind::Header,
        }],
        margin: Some(margins.unwrap_or(HEADER_MARGINS)),
    })
}

/// Sub-header. Defaults to margins 4/0/2/0.
pub fn create_sub_header(title: &str, margins: Option<Margins>) -> Content {
    Content::Text(Text {
        runs: vec![Run {
            text: title.to_string(),
            style: FormatKind::SubHeader,
        }],
        margin: Some(margins.unwrap_or(SUB_HEADER_MARGINS)),
    })
}

/// Horizontal separator.
pub fn generate_line() -> Content {
    Content::Line(Line {
        thickness: 1.0,
        margin: LINE_MARGINS,
    })
}
