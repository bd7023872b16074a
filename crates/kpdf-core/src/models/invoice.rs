//! Whole-invoice record tagged with its schema version.

use std::path::Path;

use serde::Deserialize;

use super::{Schema, fa1, fa2, fa3};
use crate::error::Result;

/// An invoice body in one of the supported schema versions.
///
/// Decoded from JSON of the form `{"schema": "FA2", "Platnosc": {...}, ...}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "schema")]
pub enum InvoiceRecord {
    /// FA(1) invoice.
    #[serde(rename = "FA1")]
    Fa1(fa1::Fa),
    /// FA(2) invoice.
    #[serde(rename = "FA2")]
    Fa2(fa2::Fa),
    /// FA(3) invoice.
    #[serde(rename = "FA3")]
    Fa3(fa3::Fa),
}

impl InvoiceRecord {
    /// Decode a record from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a record from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Schema version of this record.
    pub fn schema(&self) -> Schema {
        match self {
            InvoiceRecord::Fa1(_) => Schema::Fa1,
            InvoiceRecord::Fa2(_) => Schema::Fa2,
            InvoiceRecord::Fa3(_) => Schema::Fa3,
        }
    }
}
