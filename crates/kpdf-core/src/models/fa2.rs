//! Records of the FA(2) schema.

use serde::Deserialize;

use super::common::{Skonto, ZaplataCzesciowa};
use super::field::{Field, OneOrMany};

/// Invoice body (`Fa`) fields consumed by the section generators.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Fa {
    /// Payment section.
    pub platnosc: Option<Platnosc>,
    /// Transaction terms, including transport.
    pub warunki_transakcji: Option<WarunkiTransakcji>,
}

/// Transaction terms.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WarunkiTransakcji {
    /// Transport legs.
    pub transport: Option<OneOrMany<Transport>>,
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
}

/// A single payment due date.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TerminPlatnosci {
    /// Due date.
    pub termin: Option<Field>,
    /// Description of the due date.
    pub termin_opis: Option<Field>,
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

/// One transport leg.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Transport {
    /// Coded transport type.
    pub rodzaj_transportu: Option<Field>,
    /// `"1"` for a non-standard transport type.
    pub transport_inny: Option<Field>,
    /// Description of the non-standard transport type.
    pub opis_innego_transportu: Option<Field>,
    /// Carrier.
    pub przewoznik: Option<Przewoznik>,
    /// Transport order number.
    pub nr_zlecenia_transportu: Option<Field>,
    /// Coded cargo type.
    pub opis_ladunku: Option<Field>,
    /// `"1"` for a non-standard cargo type.
    pub ladunek_inny: Option<Field>,
    /// Description of the non-standard cargo type.
    pub opis_innego_ladunku: Option<Field>,
    /// Packaging unit.
    pub jednostka_opakowania: Option<Field>,
    /// Start of transport (date and time).
    pub data_godz_rozp_transportu: Option<Field>,
    /// End of transport (date and time).
    pub data_godz_zak_transportu: Option<Field>,
    /// Shipped-from address.
    pub wysylka_z: Option<Adres>,
    /// Intermediate addresses.
    pub wysylka_przez: Option<OneOrMany<Adres>>,
    /// Shipped-to address.
    pub wysylka_do: Option<Adres>,
}

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Adres {
    /// ISO country code.
    #[serde(rename = "KodKraju")]
    pub kod_kraju: Option<Field>,
    /// First address line.
    #[serde(rename = "AdresL1")]
    pub adres_l1: Option<Field>,
    /// Second address line.
    #[serde(rename = "AdresL2")]
    pub adres_l2: Option<Field>,
    /// Global Location Number.
    #[serde(rename = "GLN")]
    pub gln: Option<Field>,
}

/// Carrier of a transport leg.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Przewoznik {
    /// Identification data.
    pub dane_identyfikacyjne: Option<DaneIdentyfikacyjne>,
    /// Carrier address.
    pub adres_przewoznika: Option<Adres>,
}

/// Identification data of a party.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DaneIdentyfikacyjne {
    /// Polish tax identification number.
    #[serde(rename = "NIP")]
    pub nip: Option<Field>,
    /// EU member state code of the VAT number.
    #[serde(rename = "KodUE")]
    pub kod_ue: Option<Field>,
    /// EU VAT number.
    #[serde(rename = "NrVatUE")]
    pub nr_vat_ue: Option<Field>,
    /// Country of a non-EU tax identifier.
    #[serde(rename = "KodKraju")]
    pub kod_kraju: Option<Field>,
    /// Non-EU tax identifier.
    #[serde(rename = "NrID")]
    pub nr_id: Option<Field>,
    /// `"1"` when the party has no identifier.
    #[serde(rename = "BrakID")]
    pub brak_id: Option<Field>,
    /// Name.
    #[serde(rename = "Nazwa")]
    pub nazwa: Option<Field>,
}
