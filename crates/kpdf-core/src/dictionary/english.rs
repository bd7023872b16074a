//! English labels and code tables.

use super::{Concept, Label, Table, Vocabulary, find};
use crate::models::Schema;

/// English vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl Vocabulary for English {
    fn label(&self, label: Label) -> &'static str {
        match label {
            Label::Payment => "Payment",
            Label::Paid => "Paid",
            Label::PartiallyPaid => "Partial payment",
            Label::NotPaid => "Not paid",
            Label::PaymentDate => "Payment date: ",
            Label::FormOfPayment => "Form of payment: ",
            Label::OtherPayment => "Other payment",
            Label::OtherPaymentDescription => "Other payment description: ",
            Label::PaymentLink => "Payment link: ",
            Label::KsefPaymentId => "KSeF payment identifier: ",
            Label::PartialPaymentDate => "Partial payment date",
            Label::PartialPaymentAmount => "Partial payment amount",
            Label::PartialPaymentForm => "Form of payment",
            Label::PaymentDueDate => "Payment due date",
            Label::PaymentDueDescription => "Due date description",
            Label::Discount => "Discount",
            Label::DiscountConditions => "Discount conditions: ",
            Label::DiscountAmount => "Discount amount: ",

            Label::BankAccount => "Bank account number",
            Label::FactorBankAccount => "Factor bank account number",
            Label::AccountFormat => "Account format",
            Label::DomesticAccount => "Domestic",
            Label::ForeignAccount => "Foreign",
            Label::AccountNumber => "Full account number",
            Label::SwiftCode => "SWIFT code",
            Label::OwnBankAccount => "Bank's own account",
            Label::BankName => "Bank name",
            Label::AccountDescription => "Account description",

            Label::Transport => "Transport",
            Label::TransportType => "Transport type: ",
            Label::OtherTransport => "Other transport",
            Label::OtherTransportDescription => "Other transport description: ",
            Label::TransportData => "Transport data",
            Label::TransportOrderNumber => "Transport order number: ",
            Label::PackagingUnit => "Packaging unit: ",
            Label::CargoType => "Cargo type: ",
            Label::OtherCargo => "Other cargo",
            Label::OtherCargoDescription => "Other cargo description: ",
            Label::TransportStart => "Transport start: ",
            Label::TransportEnd => "Transport end: ",
            Label::Shipping => "Shipping",
            Label::ShippedFrom => "Shipped from",
            Label::ShippedTo => "Shipped to",
            Label::ShippedVia => "Shipped via",
            Label::Gln => "GLN: ",

            Label::Carrier => "Carrier",
            Label::Identification => "Identification",
            Label::Address => "Address",
            Label::Nip => "NIP: ",
            Label::EuVatNumber => "EU VAT number: ",
            Label::TaxId => "Tax identifier: ",
            Label::NoIdentifier => "No identifier",
            Label::Name => "Name: ",
        }
    }

    fn lookup(&self, concept: Concept, schema: Schema, code: &str) -> Option<&'static str> {
        let table = match (concept, schema) {
            (Concept::FormOfPayment, Schema::Fa1) => &FORMS_OF_PAYMENT[..6],
            (Concept::FormOfPayment, _) => FORMS_OF_PAYMENT,
            (Concept::TransportType, _) => TRANSPORT_TYPES,
            (Concept::CargoType, _) => CARGO_TYPES,
            (Concept::OwnBankAccount, _) => OWN_BANK_ACCOUNTS,
            (Concept::Country, _) => COUNTRIES,
        };
        find(table, code)
    }
}

static FORMS_OF_PAYMENT: Table = &[
    ("1", "Cash"),
    ("2", "Card"),
    ("3", "Voucher"),
    ("4", "Cheque"),
    ("5", "Credit"),
    ("6", "Bank transfer"),
    ("7", "Mobile payment"),
];

static TRANSPORT_TYPES: Table = &[
    ("1", "Sea transport"),
    ("2", "Rail transport"),
    ("3", "Road transport"),
    ("4", "Air transport"),
    ("5", "Postal consignment"),
    ("7", "Fixed transport installations"),
    ("8", "Inland waterway transport"),
];

static CARGO_TYPES: Table = &[
    ("1", "Can"),
    ("2", "Barrel"),
    ("3", "Bottle"),
    ("4", "Carton"),
    ("5", "Canister"),
    ("6", "Cage"),
    ("7", "Container"),
    ("8", "Basket"),
    ("9", "Punnet"),
    ("10", "Bulk package"),
    ("11", "Parcel"),
    ("12", "Bundle"),
    ("13", "Pallet"),
    ("14", "Receptacle"),
    ("15", "Container for solid bulk cargo"),
    ("16", "Container for liquid bulk cargo"),
    ("17", "Box"),
    ("18", "Tin"),
    ("19", "Crate"),
    ("20", "Sack"),
];

static OWN_BANK_ACCOUNTS: Table = &[
    (
        "1",
        "Bank or credit union account used to settle acquired monetary receivables",
    ),
    (
        "2",
        "Bank or credit union account used to collect the buyer's payment and pass it to the supplier",
    ),
    (
        "3",
        "Bank or credit union account held for its own operations, not a settlement account",
    ),
];

static COUNTRIES: Table = &[
    ("AT", "Austria"),
    ("BE", "Belgium"),
    ("BG", "Bulgaria"),
    ("BY", "Belarus"),
    ("CA", "Canada"),
    ("CH", "Switzerland"),
    ("CN", "China"),
    ("CY", "Cyprus"),
    ("CZ", "Czechia"),
    ("DE", "Germany"),
    ("DK", "Denmark"),
    ("EE", "Estonia"),
    ("EL", "Greece"),
    ("ES", "Spain"),
    ("FI", "Finland"),
    ("FR", "France"),
    ("GB", "United Kingdom"),
    ("GR", "Greece"),
    ("HR", "Croatia"),
    ("HU", "Hungary"),
    ("IE", "Ireland"),
    ("IN", "India"),
    ("IS", "Iceland"),
    ("IT", "Italy"),
    ("JP", "Japan"),
    ("KR", "South Korea"),
    ("LI", "Liechtenstein"),
    ("LT", "Lithuania"),
    ("LU", "Luxembourg"),
    ("LV", "Latvia"),
    ("MT", "Malta"),
    ("NL", "Netherlands"),
    ("NO", "Norway"),
    ("PL", "Poland"),
    ("PT", "Portugal"),
    ("RO", "Romania"),
    ("RU", "Russia"),
    ("SE", "Sweden"),
    ("SI", "Slovenia"),
    ("SK", "Slovakia"),
    ("TR", "Türkiye"),
    ("UA", "Ukraine"),
    ("US", "United States"),
    ("XI", "Northern Ireland"),
];
