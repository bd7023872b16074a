//! Section generators.
//!
//! Every schema variant gets a thin module ([`fa1`], [`fa2`], [`fa3`]) that
//! binds its record fields onto the shared algorithms in [`payment`] and
//! [`bank_account`]. FA(2) additionally carries the transport and carrier
//! sections. Generators never fail: absent data yields empty output.

mod address;
pub mod bank_account;
pub mod carrier;
pub mod fa1;
pub mod fa2;
pub mod fa3;
pub mod payment;
pub mod transport;

use tracing::debug;

use crate::dictionary::{Concept, Label, Polish, Vocabulary, resolve};
use crate::document::Content;
use crate::models::config::KpdfConfig;
use crate::models::field::{Field, get_table, has_value, is_set};
use crate::models::invoice::InvoiceRecord;
use crate::models::Schema;

/// Default characters between inserted line breaks in descriptions.
pub const DEFAULT_WRAP_WIDTH: usize = 30;

/// Shared state of one generation run.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    /// Labels and code tables.
    pub vocabulary: &'a dyn Vocabulary,
    /// Characters between inserted line breaks in long descriptions.
    pub wrap_width: usize,
}

impl<'a> Context<'a> {
    pub fn new(vocabulary: &'a dyn Vocabulary) -> Self {
        Self {
            vocabulary,
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }

    pub fn with_wrap_width(mut self, wrap_width: usize) -> Self {
        self.wrap_width = wrap_width;
        self
    }

    pub fn label(&self, label: Label) -> &'static str {
        self.vocabulary.label(label)
    }

    /// Resolve a coded field; see [`resolve`].
    pub fn resolve<'f>(
        &self,
        concept: Concept,
        schema: Schema,
        field: impl Into<Option<&'f Field>>,
    ) -> String {
        resolve(self.vocabulary, concept, schema, field)
    }
}

impl Context<'static> {
    pub fn from_config(config: &KpdfConfig) -> Self {
        Context::new(config.document.language.vocabulary())
            .with_wrap_width(config.document.description_wrap_width)
    }
}

impl Default for Context<'static> {
    fn default() -> Self {
        Context::new(&Polish)
    }
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("wrap_width", &self.wrap_width)
            .finish_non_exhaustive()
    }
}

/// A coded value, or a free-text "other" alternative when no code is given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum CodedOrOther<'a> {
    Coded(&'a Field),
    Other(&'a Field),
    Neither,
}

impl<'a> CodedOrOther<'a> {
    /// The code wins when present. Otherwise the description is used when
    /// `other_allowed` holds and the description is present.
    pub(crate) fn choose(
        code: Option<&'a Field>,
        other_allowed: bool,
        description: Option<&'a Field>,
    ) -> Self {
        match (code, description) {
            (Some(code), _) if has_value(code) => CodedOrOther::Coded(code),
            (_, Some(description)) if other_allowed && has_value(description) => {
                CodedOrOther::Other(description)
            }
            _ => CodedOrOther::Neither,
        }
    }

    /// Variant gated by a `"1"` flag field, as transport and cargo are.
    pub(crate) fn flagged(
        code: Option<&'a Field>,
        flag: Option<&'a Field>,
        description: Option<&'a Field>,
    ) -> Self {
        Self::choose(code, is_set(flag), description)
    }
}

/// Run every section generator that applies to an invoice record.
pub fn compose_sections(ctx: &Context<'_>, invoice: &InvoiceRecord) -> Vec<Content> {
    match invoice {
        InvoiceRecord::Fa1(fa) => fa1::generate_platnosc(ctx, fa.platnosc.as_ref()),
        InvoiceRecord::Fa2(fa) => {
            let mut sections = fa2::generate_platnosc(ctx, fa.platnosc.as_ref());

            let transports = get_table(
                fa.warunki_transakcji
                    .as_ref()
                    .and_then(|warunki| warunki.transport.as_ref()),
            );
            if transports.is_empty() {
                debug!("no transport records");
            }
            let numbered = transports.len() > 1;
            for (i, transport) in transports.iter().enumerate() {
                let index = numbered.then_some(i + 1);
                sections.push(fa2::generate_transport(ctx, transport, index));
            }

            sections
        }
        InvoiceRecord::Fa3(fa) => fa3::generate_platnosc(ctx, fa.platnosc.as_ref()),
    }
}
