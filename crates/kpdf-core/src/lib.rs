//! Core library for composing KSeF invoice sections.
//!
//! This crate provides:
//! - Input records for the FA(1), FA(2) and FA(3) schema variants
//! - Polish and English label dictionaries and code tables
//! - Document tree primitives consumed by a PDF renderer
//! - Payment, bank account, transport and carrier section generators

pub mod dictionary;
pub mod document;
pub mod error;
pub mod generators;
pub mod models;

pub use dictionary::{English, Polish, Vocabulary};
pub use document::{Content, FormatKind, outline};
pub use error::{KpdfError, Result};
pub use generators::{Context, compose_sections};
pub use models::config::{KpdfConfig, Language};
pub use models::invoice::InvoiceRecord;
pub use models::{Field, Schema};
