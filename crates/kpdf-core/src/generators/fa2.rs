//! FA(2) section generators.

use tracing::debug;

use super::bank_account::{AccountNumber, BankAccount, generate_accounts};
use super::payment::{self, PaymentStatus, PaymentTermRow, PaymentView};
use super::{CodedOrOther, Context};
use crate::dictionary::Label;
use crate::document::Content;
use crate::models::Schema;
use crate::models::fa2::{Platnosc, RachunekBankowy};
use crate::models::field::{Field, get_table};

pub use super::carrier::generate_przewoznik;
pub use super::transport::generate_transport;

impl BankAccount for RachunekBankowy {
    const SCHEMA: Schema = Schema::Fa2;

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

/// Payment section of an FA(2) invoice.
pub fn generate_platnosc(ctx: &Context<'_>, platnosc: Option<&Platnosc>) -> Vec<Content> {
    let Some(platnosc) = platnosc else {
        debug!(schema = %Schema::Fa2, "no payment section");
        return Vec::new();
    };

    let terms = get_table(platnosc.termin_platnosci.as_ref())
        .iter()
        .map(|term| PaymentTermRow::new(term.termin.as_ref(), term.termin_opis.clone()))
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
            schema: Schema::Fa2,
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
            extra_lines: Vec::new(),
            installments: get_table(platnosc.zaplata_czesciowa.as_ref()),
            terms,
            accounts,
            skonto: platnosc.skonto.as_ref(),
        },
    )
}

/// Bank account blocks for FA(2) accounts, titled "bank account" by default.
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
