pub mod batch;
pub mod config;
pub mod render;

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use kpdf_core::models::config::KpdfConfig;
use kpdf_core::{Content, Schema, outline};

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Document tree as JSON
    Json,
    /// Plain-text outline
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "txt",
        }
    }
}

/// Sections composed for one invoice record.
#[derive(Serialize)]
pub struct RenderedDocument<'a> {
    pub schema: Schema,
    pub content: &'a [Content],
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kpdf")
        .join("config.json")
}

/// Explicit config file, else the default file when it exists, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<KpdfConfig> {
    if let Some(path) = config_path {
        return Ok(KpdfConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Loading config from {}", default_path.display());
        Ok(KpdfConfig::from_file(&default_path)?)
    } else {
        Ok(KpdfConfig::default())
    }
}

pub fn format_document(
    document: &RenderedDocument<'_>,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(document)?),
        OutputFormat::Json => Ok(serde_json::to_string(document)?),
        OutputFormat::Text => {
            let mut output = format!("{}\n", document.schema);
            for line in outline(document.content) {
                output.push_str(&line);
                output.push('\n');
            }
            Ok(output)
        }
    }
}
