//! Input records for the KSeF FA(1), FA(2) and FA(3) schemas, plus
//! configuration.

pub mod common;
pub mod config;
pub mod fa1;
pub mod fa2;
pub mod fa3;
pub mod field;
pub mod invoice;

use serde::{Deserialize, Serialize};

pub use field::{Field, OneOrMany, Record, get_table, get_value, has_value, is_set};

/// Version of the structured invoice schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Schema {
    /// FA(1).
    #[serde(rename = "FA1")]
    Fa1,
    /// FA(2).
    #[serde(rename = "FA2")]
    Fa2,
    /// FA(3).
    #[serde(rename = "FA3")]
    Fa3,
}

impl Schema {
    /// Schema name as used in the document header (`FA (2)` style codes).
    pub fn code(&self) -> &'static str {
        match self {
            Schema::Fa1 => "FA (1)",
            Schema::Fa2 => "FA (2)",
            Schema::Fa3 => "FA (3)",
        }
    }
}

impl std::fmt::Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
