//! Configuration structures for document composition.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::dictionary::{English, Polish, Vocabulary};
use crate::error::{KpdfError, Result};

/// Main configuration for kpdf.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KpdfConfig {
    /// Document composition configuration.
    pub document: DocumentConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Language of labels and dictionary entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Polish.
    #[default]
    Pl,
    /// English.
    En,
}

impl Language {
    /// Vocabulary used for this language.
    pub fn vocabulary(self) -> &'static dyn Vocabulary {
        match self {
            Language::Pl => &Polish,
            Language::En => &English,
        }
    }
}

impl std::str::FromStr for Language {
    type Err = KpdfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pl" | "polish" => Ok(Language::Pl),
            "en" | "english" => Ok(Language::En),
            other => Err(KpdfError::Config(format!("unsupported language: {other}"))),
        }
    }
}

/// Document composition configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Language of labels.
    pub language: Language,

    /// Characters between inserted line breaks in long descriptions
    /// (0 = no wrapping).
    pub description_wrap_width: usize,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            language: Language::Pl,
            description_wrap_width: 30,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl KpdfConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| KpdfError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| KpdfError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
