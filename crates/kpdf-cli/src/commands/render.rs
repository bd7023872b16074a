//! Render command - compose the sections of a single invoice record.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use kpdf_core::models::config::Language;
use kpdf_core::{Context, InvoiceRecord, compose_sections};

use super::{OutputFormat, RenderedDocument, format_document, load_config};

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Invoice record (JSON)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Label language (overrides the configuration)
    #[arg(long)]
    language: Option<Language>,
}

pub fn run(args: RenderArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(language) = args.language {
        config.document.language = language;
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Rendering file: {}", args.input.display());

    let invoice = InvoiceRecord::from_file(&args.input)?;
    let ctx = Context::from_config(&config);
    let content = compose_sections(&ctx, &invoice);
    debug!("Composed {} sections for {}", content.len(), invoice.schema());

    let document = RenderedDocument {
        schema: invoice.schema(),
        content: &content,
    };
    let output = format_document(&document, args.format, config.output.pretty)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total rendering time: {:?}", start.elapsed());

    Ok(())
}
