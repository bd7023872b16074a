//! Records of the FA(1) schema.

use serde::Deserialize;

use super::common::{Skonto, ZaplataCzesciowa};
use super::field::{Field, OneOrMany};

/// Invoice body (`Fa`) fields consumed by the section generators.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Fa {
    /// Payment section.
    pub platnosc: Option<Platnosc>,
}

/// Payment terms and settlement information.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Platnosc {
    /// `"1"` when the invoice has been paid.
    pub zaplacono: Option<Field>,
    /// Payment date, when paid.
    pub data_zaplaty: Option<Field>,
    /// `"1"` when the invoice has been paid in part.
    pub zaplata_czesciowa_znacznik: Option<Field>,
    /// Partial payments made so far.
    pub zaplata_czesciowa: Option<OneOrMany<ZaplataCzesciowa>>,
    /// Payment due dates.
    pub terminy_platnosci: Option<OneOrMany<TerminyPlatnosci>>,
    /// Coded form of payment.
    pub forma_platnosci: Option<Field>,
    /// Free-text description of a non-standard form of payment.
    pub opis_platnosci: Option<Field>,
    /// Seller's bank accounts.
    pub rachunek_bankowy: Option<OneOrMany<RachunekBankowy>>,
    /// Factor's bank accounts.
    pub rachunek_bankowy_faktora: Option<OneOrMany<RachunekBankowy>>,
    /// Discount for early payment.
    pub skonto: Option<Skonto>,
}

/// A single payment due date.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TerminyPlatnosci {
    /// Due date.
    pub termin_platnosci: Option<Field>,
    /// Description of the due date.
    pub termin_platnosci_opis: Option<Field>,
}

/// Bank account. FA(1) keeps domestic and foreign numbers in separate fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RachunekBankowy {
    /// Account number in the Polish (NRB) format.
    #[serde(rename = "NrRBPL")]
    pub nr_rb_pl: Option<Field>,
    /// Account number in a foreign format.
    #[serde(rename = "NrRBZagr")]
    pub nr_rb_zagr: Option<Field>,
    /// SWIFT code of the bank.
    #[serde(rename = "SWIFT")]
    pub swift: Option<Field>,
    /// Own-bank-account classification code.
    #[serde(rename = "RachunekWlasnyBanku")]
    pub rachunek_wlasny_banku: Option<Field>,
    /// Bank name.
    #[serde(rename = "NazwaBanku")]
    pub nazwa_banku: Option<Field>,
}
