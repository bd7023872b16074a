//! Bank account blocks.

use tracing::trace;

use super::Context;
use crate::dictionary::{Concept, Label};
use crate::document::{
    ColumnWidth, Content, FormatKind, Table, TableLayout, create_section, create_sub_header,
    format_text, wrap_text,
};
use crate::models::Schema;
use crate::models::field::{Field, get_value, has_value};

/// How a variant stores the account number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccountNumber<'a> {
    /// FA(1): separate domestic and foreign number fields.
    Split {
        domestic: Option<&'a Field>,
        foreign: Option<&'a Field>,
    },
    /// FA(2)/FA(3): one number plus an optional free-text description.
    Unified {
        number: Option<&'a Field>,
        description: Option<&'a Field>,
    },
}

/// Field binding of a variant's bank account record.
pub(crate) trait BankAccount {
    const SCHEMA: Schema;

    fn number(&self) -> AccountNumber<'_>;
    fn swift(&self) -> Option<&Field>;
    fn own_bank_account(&self) -> Option<&Field>;
    fn bank_name(&self) -> Option<&Field>;
}

/// One block per account. The title is numbered only when there is more
/// than one account.
pub(crate) fn generate_accounts<A: BankAccount>(
    ctx: &Context<'_>,
    accounts: &[A],
    title: &str,
) -> Vec<Content> {
    let numbered = accounts.len() > 1;
    accounts
        .iter()
        .enumerate()
        .map(|(i, account)| {
            let title = if numbered {
                format!("{} {}", title, i + 1)
            } else {
                title.to_string()
            };
            account_block(ctx, account, &title)
        })
        .collect()
}

fn account_block<A: BankAccount>(ctx: &Context<'_>, account: &A, title: &str) -> Content {
    let mut rows = Vec::new();
    let mut row = |label: Label, value: &str| {
        rows.push(vec![
            format_text(ctx.label(label), FormatKind::GrayBoldTitle),
            format_text(value, FormatKind::Default),
        ]);
    };

    match account.number() {
        AccountNumber::Split { domestic, foreign } => {
            trace!(
                domestic = has_value(domestic),
                foreign = has_value(foreign),
                "split account number"
            );
            if has_value(domestic) {
                row(Label::AccountFormat, ctx.label(Label::DomesticAccount));
                row(Label::AccountNumber, get_value(domestic));
            }
            if has_value(foreign) {
                row(Label::AccountFormat, ctx.label(Label::ForeignAccount));
                row(Label::AccountNumber, get_value(foreign));
            }
        }
        AccountNumber::Unified {
            number,
            description,
        } => {
            row(Label::AccountNumber, get_value(number));
            if has_value(description) {
                row(
                    Label::AccountDescription,
                    &wrap_text(get_value(description), ctx.wrap_width),
                );
            }
        }
    }

    row(Label::SwiftCode, get_value(account.swift()));
    row(
        Label::OwnBankAccount,
        &ctx.resolve(Concept::OwnBankAccount, A::SCHEMA, account.own_bank_account()),
    );
    row(Label::BankName, get_value(account.bank_name()));

    let table = Content::Table(Table {
        widths: vec![ColumnWidth::Star, ColumnWidth::Auto],
        header_rows: 0,
        body: rows,
        layout: TableLayout::LightHorizontalLines,
    });

    create_section(vec![create_sub_header(title, None), table], false, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::English;
    use crate::document::outline;
    use pretty_assertions::assert_eq;

    struct Account {
        number: Option<Field>,
        description: Option<Field>,
    }

    impl BankAccount for Account {
        const SCHEMA: Schema = Schema::Fa2;

        fn number(&self) -> AccountNumber<'_> {
            AccountNumber::Unified {
                number: self.number.as_ref(),
                description: self.description.as_ref(),
            }
        }

        fn swift(&self) -> Option<&Field> {
            None
        }

        fn own_bank_account(&self) -> Option<&Field> {
            None
        }

        fn bank_name(&self) -> Option<&Field> {
            None
        }
    }

    #[test]
    fn test_no_accounts_no_blocks() {
        let accounts: Vec<Account> = Vec::new();
        assert!(generate_accounts(&Context::default(), &accounts, "Rachunek").is_empty());
    }

    #[test]
    fn test_blocks_are_unbreakable_and_numbered() {
        let accounts = vec![
            Account {
                number: Some(Field::new("PL61109010140000071219812874")),
                description: None,
            },
            Account {
                number: None,
                description: None,
            },
        ];
        let blocks = generate_accounts(&Context::new(&English), &accounts, "Bank account number");
        assert_eq!(blocks.len(), 2);

        for block in &blocks {
            let Content::Section(section) = block else {
                panic!("expected section");
            };
            assert!(section.unbreakable);
        }

        assert_eq!(
            outline(&blocks[..1]),
            vec![
                "Bank account number 1",
                "Full account number | PL61109010140000071219812874",
                "SWIFT code | ",
                "Bank's own account | ",
                "Bank name | ",
            ]
        );
        assert_eq!(blocks[1].lines()[0], "Bank account number 2");
    }

    #[test]
    fn test_description_is_wrapped() {
        let accounts = vec![Account {
            number: None,
            description: Some(Field::new("abcdefghij")),
        }];
        let ctx = Context::new(&English).with_wrap_width(4);
        let blocks = generate_accounts(&ctx, &accounts, "Account");

        let Content::Section(section) = &blocks[0] else {
            panic!("expected section");
        };
        let Content::Table(table) = &section.content[1] else {
            panic!("expected table");
        };
        assert_eq!(table.header_rows, 0);
        assert_eq!(table.body[1][1].lines(), vec!["abcd\nefgh\nij"]);
        assert_eq!(blocks[0].lines()[0], "Account");
    }
}
