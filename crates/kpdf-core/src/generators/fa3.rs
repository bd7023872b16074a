//! FA(3) section generators.

use tracing::debug;

use super::bank_account::{AccountNumber, BankAccount, generate_accounts};
use super::payment::{self, PaymentStatus, PaymentTermRow, PaymentView};
use super::{CodedOrOther, Context};
use crate::dictionary::Label;
use crate::document::{Content, FormatKind, create_label_text};
use crate::models::Schema;
use crate::models::fa3::{Platnosc, RachunekBankowy, TerminPlatnosci};
use crate::models::field::{Field, get_table, has_value};

impl BankAccount for RachunekBankowy {
    const SCHEMA: Schema = Schema::Fa3;

    fn number(&self) -> AccountNumber<'_> {
        AccountNumber::Unified {
            number: self.nr_rb.as_ref(),
            description: self.opis_rachunku.as_ref(),
        }
    }

    fn swift(&self) -> Option<&Field> {
        self.swift.as_ref()
    }

    fn own_bank_account(&self) -> Option<&Field> {
        self.rachunek_wlasny_banku.as_ref()
    }

    fn bank_name(&self) -> Option<&Field> {
        self.nazwa_banku.as_ref()
    }
}

fn term_row(term: &TerminPlatnosci) -> PaymentTermRow<'_> {
    let opis = term
        .termin_opis
        .as_ref()
        .map(|opis| opis.describe())
        .filter(|opis| !opis.is_empty())
        .map(Field::new);
    PaymentTermRow::new(term.termin.as_ref(), opis)
}

/// Payment section of an FA(3) invoice.
pub fn generate_platnosc(ctx: &Context<'_>, platnosc: Option<&Platnosc>) -> Vec<Content> {
    let Some(platnosc) = platnosc else {
        debug!(schema = %Schema::Fa3, "no payment section");
        return Vec::new();
    };

    let terms = get_table(platnosc.termin_platnosci.as_ref())
        .iter()
        .map(term_row)
        .collect();

    let mut extra_lines = Vec::new();
    if has_value(&platnosc.link_do_platnosci) {
        extra_lines.push(create_label_text(
            ctx.label(Label::PaymentLink),
            &platnosc.link_do_platnosci,
            FormatKind::Default,
        ));
    }
    if has_value(&platnosc.ip_ksef) {
        extra_lines.push(create_label_text(
            ctx.label(Label::KsefPaymentId),
            &platnosc.ip_ksef,
            FormatKind::Default,
        ));
    }

    let mut accounts = generuj_rachunek_bankowy(
        ctx,
        get_table(platnosc.rachunek_bankowy.as_ref()),
        None,
    );
    accounts.extend(generuj_rachunek_bankowy(
        ctx,
        get_table(platnosc.rachunek_bankowy_faktora.as_ref()),
        Some(ctx.label(Label::FactorBankAccount)),
    ));

    payment::generate(
        ctx,
        PaymentView {
            schema: Schema::Fa3,
            status: PaymentStatus::from_flags(
                &platnosc.zaplacono,
                &platnosc.znacznik_zaplaty_czesciowej,
            ),
            data_zaplaty: platnosc.data_zaplaty.as_ref(),
            form: CodedOrOther::choose(
                platnosc.forma_platnosci.as_ref(),
                true,
                platnosc.opis_platnosci.as_ref(),
            ),
            extra_lines,
            installments: get_table(platnosc.zaplata_czesciowa.as_ref()),
            terms,
            accounts,
            skonto: platnosc.skonto.as_ref(),
        },
    )
}

/// Bank account blocks for FA(3) accounts, titled "bank account" by default.
pub fn generuj_rachunek_bankowy(
    ctx: &Context<'_>,
    accounts: &[RachunekBankowy],
    title: Option<&str>,
) -> Vec<Content> {
    generate_accounts(
        ctx,
        accounts,
        title.unwrap_or(ctx.label(Label::BankAccount)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Polish;
    use crate::document::outline;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_link_and_ksef_id_after_form() {
        let platnosc: Platnosc = serde_json::from_value(serde_json::json!({
            "FormaPlatnosci": "7",
            "LinkDoPlatnosci": "https://pay.example/abc",
            "IPKSeF": "ABC123",
        }))
        .unwrap();

        let lines = outline(&generate_platnosc(&Context::new(&Polish), Some(&platnosc)));
        assert_eq!(
            &lines[3..],
            &[
                "Forma płatności: Płatność mobilna",
                "Link do płatności: https://pay.example/abc",
                "Identyfikator płatności KSeF: ABC123",
            ]
        );
    }

    #[test]
    fn test_structured_term_description() {
        let platnosc: Platnosc = serde_json::from_value(serde_json::json!({
            "TerminPlatnosci": [
                {"Termin": "2024-03-01"},
                {"TerminOpis": {"Ilosc": "14", "Jednostka": "dni", "ZdarzeniePoczatkowe": "od doręczenia"}},
            ],
        }))
        .unwrap();

        let lines = outline(&generate_platnosc(&Context::default(), Some(&platnosc)));
        assert_eq!(
            &lines[3..],
            &[
                "Termin płatności | Opis terminu płatności",
                "2024-03-01 | ",
                " | 14 dni od doręczenia",
            ]
        );
    }

    #[test]
    fn test_empty_term_description_adds_no_column() {
        let platnosc: Platnosc = serde_json::from_value(serde_json::json!({
            "TerminPlatnosci": {"Termin": "2024-03-01", "TerminOpis": {}},
        }))
        .unwrap();

        let lines = outline(&generate_platnosc(&Context::default(), Some(&platnosc)));
        assert_eq!(&lines[3..], &["Termin płatności", "2024-03-01"]);
    }
}
