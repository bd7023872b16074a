//! FA(1) section generators.

use tracing::debug;

use super::bank_account::{AccountNumber, BankAccount, generate_accounts};
use super::payment::{self, PaymentStatus, PaymentTermRow, PaymentView};
use super::{CodedOrOther, Context};
use crate::dictionary::Label;
use crate::document::Content;
use crate::models::Schema;
use crate::models::fa1::{Platnosc, RachunekBankowy};
use crate::models::field::{Field, get_table};

impl BankAccount for RachunekBankowy {
    const SCHEMA: Schema = Schema::Fa1;

    fn number(&self) -> AccountNumber<'_> {
        AccountNumber::Split {
            domestic: self.nr_rb_pl.as_ref(),
            foreign: self.nr_rb_zagr.as_ref(),
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

/// Payment section of an FA(1) invoice.
pub fn generate_platnosc(ctx: &Context<'_>, platnosc: Option<&Platnosc>) -> Vec<Content> {
    let Some(platnosc) = platnosc else {
        debug!(schema = %Schema::Fa1, "no payment section");
        return Vec::new();
    };

    let terms = get_table(platnosc.terminy_platnosci.as_ref())
        .iter()
        .map(|term| {
            PaymentTermRow::new(
                term.termin_platnosci.as_ref(),
                term.termin_platnosci_opis.clone(),
            )
        })
        .collect();

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
            schema: Schema::Fa1,
            status: PaymentStatus::from_flags(
                &platnosc.zaplacono,
                &platnosc.zaplata_czesciowa_znacznik,
            ),
            data_zaplaty: platnosc.data_zaplaty.as_ref(),
            form: CodedOrOther::choose(
                platnosc.forma_platnosci.as_ref(),
                true,
                platnosc.opis_platnosci.as_ref(),
            ),
            extra_lines: Vec::new(),
            installments: get_table(platnosc.zaplata_czesciowa.as_ref()),
            terms,
            accounts,
            skonto: platnosc.skonto.as_ref(),
        },
    )
}

/// Bank account blocks for FA(1) accounts, titled "bank account" by default.
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
    use crate::dictionary::English;
    use crate::document::outline;
    use crate::models::field::OneOrMany;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_absent_payment() {
        assert!(generate_platnosc(&Context::default(), None).is_empty());
    }

    #[test]
    fn test_domestic_and_foreign_numbers_both_rendered() {
        let account = RachunekBankowy {
            nr_rb_pl: Some(Field::new("61109010140000071219812874")),
            nr_rb_zagr: Some(Field::new("DE89370400440532013000")),
            swift: Some(Field::new("WBKPPLPP")),
            rachunek_wlasny_banku: Some(Field::new("2")),
            nazwa_banku: None,
        };

        let blocks = generuj_rachunek_bankowy(&Context::default(), &[account], None);
        assert_eq!(
            outline(&blocks),
            vec![
                "Numer rachunku bankowego",
                "Format rachunku | Polski",
                "Pełny numer rachunku | 61109010140000071219812874",
                "Format rachunku | Zagraniczny",
                "Pełny numer rachunku | DE89370400440532013000",
                "Kod SWIFT | WBKPPLPP",
                "Rachunek własny banku | Rachunek banku lub SKOK wykorzystywany do pobrania należności od nabywcy i przekazania jej dostawcy",
                "Nazwa banku | ",
            ]
        );
    }

    #[test]
    fn test_payment_with_accounts_and_factor() {
        let platnosc: Platnosc = serde_json::from_value(serde_json::json!({
            "ZaplataCzesciowaZnacznik": "1",
            "FormaPlatnosci": "7",
            "OpisPlatnosci": "kompensata",
            "TerminyPlatnosci": {"TerminPlatnosci": "2024-02-29"},
            "RachunekBankowy": [{"NrRBPL": "1"}, {"NrRBPL": "2"}],
            "RachunekBankowyFaktora": {"NrRBZagr": "3"},
        }))
        .unwrap();

        let content = generate_platnosc(&Context::new(&English), Some(&platnosc));
        let lines = outline(&content);

        assert_eq!(&lines[..3], &["---", "Payment", "Partial payment"]);
        // Code 7 is unknown to FA(1): the form line stays, with an empty name.
        assert_eq!(lines[3], "Form of payment: ");
        assert!(!lines.contains(&"Other payment".to_string()));
        assert!(lines.contains(&"Payment due date".to_string()));
        assert!(lines.contains(&"Bank account number 1".to_string()));
        assert!(lines.contains(&"Bank account number 2".to_string()));
        assert!(lines.contains(&"Factor bank account number".to_string()));

        let rows = content
            .iter()
            .filter(|node| matches!(node, Content::Columns(_)))
            .count();
        // Terms row plus two rows of accounts.
        assert_eq!(rows, 3);
    }

    #[test]
    fn test_single_term_sequence() {
        let platnosc = Platnosc {
            terminy_platnosci: Some(OneOrMany::One(Default::default())),
            ..Default::default()
        };
        let content = generate_platnosc(&Context::default(), Some(&platnosc));
        assert_eq!(content.len(), 4);
    }
}
