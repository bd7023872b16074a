//! Records of the FA(3) schema.

use serde::Deserialize;

use super::common::{Skonto, ZaplataCzesciowa};
use super::field::{Field, OneOrMany, get_value};

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
    pub znacznik_zaplaty_czesciowej: Option<Field>,
    /// Partial payments made so far.
    pub zaplata_czesciowa: Option<OneOrMany<ZaplataCzesciowa>>,
    /// Payment due dates.
    pub termin_platnosci: Option<OneOrMany<TerminPlatnosci>>,
    /// Coded form of payment.
    pub forma_platnosci: Option<Field>,
    /// `"1"` for a non-standard form of payment.
    pub platnosc_inna: Option<Field>,
    /// Free-text description of a non-standard form of payment.
    pub opis_platnosci: Option<Field>,
    /// Seller's bank accounts.
    pub rachunek_bankowy: Option<OneOrMany<RachunekBankowy>>,
    /// Factor's bank accounts.
    pub rachunek_bankowy_faktora: Option<OneOrMany<RachunekBankowy>>,
    /// Discount for early payment.
    pub skonto: Option<Skonto>,
    /// Link to an online payment.
    pub link_do_platnosci: Option<Field>,
    /// KSeF payment identifier.
    #[serde(rename = "IPKSeF")]
    pub ip_ksef: Option<Field>,
}

/// A single payment due date.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TerminPlatnosci {
    /// Due date.
    pub termin: Option<Field>,
    /// Structured description of the due date.
    pub termin_opis: Option<TerminOpis>,
}

/// Due date expressed relative to an event, e.g. "14 days from delivery".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TerminOpis {
    /// Number of units.
    pub ilosc: Option<Field>,
    /// Unit of time.
    pub jednostka: Option<Field>,
    /// Event the period starts from.
    pub zdarzenie_poczatkowe: Option<Field>,
}

impl TerminOpis {
    /// Join the non-empty parts with single spaces.
    pub fn describe(&self) -> String {
        [&self.ilosc, &self.jednostka, &self.zdarzenie_poczatkowe]
            .into_iter()
            .map(|part| get_value(part))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Bank account with a single unified number field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RachunekBankowy {
    /// Account number.
    #[serde(rename = "NrRB")]
    pub nr_rb: Option<Field>,
    /// SWIFT code of the bank.
    #[serde(rename = "SWIFT")]
    pub swift: Option<Field>,
    /// Own-bank-account classification code.
    #[serde(rename = "RachunekWlasnyBanku")]
    pub rachunek_wlasny_banku: Option<Field>,
    /// Bank name.
    #[serde(rename = "NazwaBanku")]
    pub nazwa_banku: Option<Field>,
    /// Free-text account description.
    #[serde(rename = "OpisRachunku")]
    pub opis_rachunku: Option<Field>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_term() {
        let opis = TerminOpis {
            ilosc: Some(Field::new("14")),
            jednostka: Some(Field::new("dni")),
            zdarzenie_poczatkowe: Some(Field::new("od dostawy")),
        };
        assert_eq!(opis.describe(), "14 dni od dostawy");
    }

    #[test]
    fn test_describe_skips_missing_parts() {
        let opis = TerminOpis {
            ilosc: Some(Field::new("30")),
            jednostka: None,
            zdarzenie_poczatkowe: Some(Field::new("")),
        };
        assert_eq!(opis.describe(), "30");
        assert_eq!(TerminOpis::default().describe(), "");
    }
}
