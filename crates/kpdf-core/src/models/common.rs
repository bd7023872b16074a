//! Records shared by every schema variant.

use serde::Deserialize;

use super::field::{Field, Record};

/// Column name of the installment date.
pub const DATA_ZAPLATY_CZESCIOWEJ: &str = "DataZaplatyCzesciowej";
/// Column name of the installment amount.
pub const KWOTA_ZAPLATY_CZESCIOWEJ: &str = "KwotaZaplatyCzesciowej";
/// Column name of the installment form of payment.
pub const FORMA_PLATNOSCI: &str = "FormaPlatnosci";

/// One partial payment (installment) already made.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ZaplataCzesciowa {
    /// Date of the partial payment.
    pub data_zaplaty_czesciowej: Option<Field>,
    /// Amount of the partial payment.
    pub kwota_zaplaty_czesciowej: Option<Field>,
    /// Coded form of payment.
    pub forma_platnosci: Option<Field>,
}

impl Record for ZaplataCzesciowa {
    fn field(&self, name: &str) -> Option<&Field> {
        match name {
            DATA_ZAPLATY_CZESCIOWEJ => self.data_zaplaty_czesciowej.as_ref(),
            KWOTA_ZAPLATY_CZESCIOWEJ => self.kwota_zaplaty_czesciowej.as_ref(),
            FORMA_PLATNOSCI => self.forma_platnosci.as_ref(),
            _ => None,
        }
    }
}

/// Discount for early payment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Skonto {
    /// Conditions under which the discount applies.
    pub warunki_skonta: Option<Field>,
    /// Size of the discount.
    pub wysokosc_skonta: Option<Field>,
}
