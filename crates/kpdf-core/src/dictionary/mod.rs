//! Labels and code lookup tables.
//!
//! Section generators never hard-code display strings. They ask a
//! [`Vocabulary`] for section labels and for the display name of coded
//! values (form of payment, transport type, country, ...). Coded values and
//! their names diverge between schema versions, so every lookup is keyed by
//! the [`Schema`] as well.

mod english;
mod polish;

pub use english::English;
pub use polish::Polish;

use tracing::debug;

use crate::models::Schema;
use crate::models::field::{Field, get_value, has_value};

/// A coded-value dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Concept {
    /// Form of payment (`FormaPlatnosci`).
    FormOfPayment,
    /// Transport type (`RodzajTransportu`).
    TransportType,
    /// Cargo type (`OpisLadunku`).
    CargoType,
    /// Own-bank-account classification (`RachunekWlasnyBanku`).
    OwnBankAccount,
    /// Country (`KodKraju`).
    Country,
}

/// Display labels used by the section generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    // Payment
    Payment,
    Paid,
    PartiallyPaid,
    NotPaid,
    PaymentDate,
    FormOfPayment,
    OtherPayment,
    OtherPaymentDescription,
    PaymentLink,
    KsefPaymentId,
    PartialPaymentDate,
    PartialPaymentAmount,
    PartialPaymentForm,
    PaymentDueDate,
    PaymentDueDescription,
    Discount,
    DiscountConditions,
    DiscountAmount,

    // Bank account
    BankAccount,
    FactorBankAccount,
    AccountFormat,
    DomesticAccount,
    ForeignAccount,
    AccountNumber,
    SwiftCode,
    OwnBankAccount,
    BankName,
    AccountDescription,

    // Transport
    Transport,
    TransportType,
    OtherTransport,
    OtherTransportDescription,
    TransportData,
    TransportOrderNumber,
    PackagingUnit,
    CargoType,
    OtherCargo,
    OtherCargoDescription,
    TransportStart,
    TransportEnd,
    Shipping,
    ShippedFrom,
    ShippedTo,
    ShippedVia,
    Gln,

    // Carrier
    Carrier,
    Identification,
    Address,
    Nip,
    EuVatNumber,
    TaxId,
    NoIdentifier,
    Name,
}

/// Source of display strings for a document.
pub trait Vocabulary {
    /// Display text of a label.
    fn label(&self, label: Label) -> &'static str;

    /// Display name of a coded value, if the code is known.
    fn lookup(&self, concept: Concept, schema: Schema, code: &str) -> Option<&'static str>;
}

/// A code → name table.
pub(crate) type Table = &'static [(&'static str, &'static str)];

pub(crate) fn find(table: Table, code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, name)| *name)
}

/// Resolve a coded field to its display name.
///
/// Absent fields and unrecognised codes resolve to an empty string.
pub fn resolve<'a>(
    vocabulary: &dyn Vocabulary,
    concept: Concept,
    schema: Schema,
    field: impl Into<Option<&'a Field>>,
) -> String {
    let field = field.into();
    if !has_value(field) {
        return String::new();
    }

    let code = get_value(field);
    match vocabulary.lookup(concept, schema, code) {
        Some(name) => name.to_string(),
        None => {
            debug!(?concept, %schema, code, "unrecognised code");
            String::new()
        }
    }
}
