//! Payment section, shared by every schema variant.
//!
//! The variants differ only in field names and in their bank account type,
//! so each variant module fills a [`PaymentView`] and hands it to
//! [`generate`].

use tracing::trace;

use super::{CodedOrOther, Context};
use crate::dictionary::{Concept, Label};
use crate::document::{
    ColumnSpec, ColumnWidth, Content, FormatKind, create_header, create_label_text,
    format_text, generate_line, generate_two_columns, get_content_table,
};
use crate::models::Schema;
use crate::models::common::{
    DATA_ZAPLATY_CZESCIOWEJ, FORMA_PLATNOSCI, KWOTA_ZAPLATY_CZESCIOWEJ, Skonto, ZaplataCzesciowa,
};
use crate::models::field::{Field, Record, has_value, is_set};

/// Column name of the payment term date.
pub const TERMIN: &str = "Termin";
/// Column name of the payment term description.
pub const TERMIN_OPIS: &str = "TerminOpis";

/// Payment status; exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    PartiallyPaid,
    NotPaid,
}

impl PaymentStatus {
    /// Paid wins over partially paid, which wins over not paid.
    pub fn from_flags<'a>(
        paid: impl Into<Option<&'a Field>>,
        partially_paid: impl Into<Option<&'a Field>>,
    ) -> Self {
        if is_set(paid) {
            PaymentStatus::Paid
        } else if is_set(partially_paid) {
            PaymentStatus::PartiallyPaid
        } else {
            PaymentStatus::NotPaid
        }
    }

    fn label(self) -> Label {
        match self {
            PaymentStatus::Paid => Label::Paid,
            PaymentStatus::PartiallyPaid => Label::PartiallyPaid,
            PaymentStatus::NotPaid => Label::NotPaid,
        }
    }
}

/// One payment term, normalized across variants.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentTermRow<'a> {
    pub termin: Option<&'a Field>,
    pub opis: Option<Field>,
}

impl<'a> PaymentTermRow<'a> {
    pub fn new(termin: Option<&'a Field>, opis: Option<Field>) -> Self {
        Self { termin, opis }
    }
}

impl Record for PaymentTermRow<'_> {
    fn field(&self, name: &str) -> Option<&Field> {
        match name {
            TERMIN => self.termin,
            TERMIN_OPIS => self.opis.as_ref(),
            _ => None,
        }
    }
}

/// Payment fields bound from one schema variant.
pub(crate) struct PaymentView<'a> {
    pub schema: Schema,
    pub status: PaymentStatus,
    pub data_zaplaty: Option<&'a Field>,
    pub form: CodedOrOther<'a>,
    /// Variant-specific lines emitted after the form of payment.
    pub extra_lines: Vec<Content>,
    pub installments: &'a [ZaplataCzesciowa],
    pub terms: Vec<PaymentTermRow<'a>>,
    /// Own account blocks followed by factor account blocks.
    pub accounts: Vec<Content>,
    pub skonto: Option<&'a Skonto>,
}

pub(crate) fn generate(ctx: &Context<'_>, view: PaymentView<'_>) -> Vec<Content> {
    let mut content = vec![generate_line(), create_header(ctx.label(Label::Payment), None)];

    trace!(status = ?view.status, "payment status");
    content.push(format_text(ctx.label(view.status.label()), FormatKind::Bold));
    if view.status == PaymentStatus::Paid {
        content.push(create_label_text(
            ctx.label(Label::PaymentDate),
            view.data_zaplaty,
            FormatKind::Date,
        ));
    }

    match view.form {
        CodedOrOther::Coded(code) => content.push(create_label_text(
            ctx.label(Label::FormOfPayment),
            ctx.resolve(Concept::FormOfPayment, view.schema, code),
            FormatKind::Default,
        )),
        CodedOrOther::Other(description) => {
            content.push(format_text(ctx.label(Label::OtherPayment), FormatKind::Label));
            content.push(create_label_text(
                ctx.label(Label::OtherPaymentDescription),
                description,
                FormatKind::Default,
            ));
        }
        CodedOrOther::Neither => {}
    }
    content.extend(view.extra_lines);

    let installments = installments_table(ctx, view.schema, view.installments);
    let terms = terms_table(ctx, view.schema, &view.terms);
    match (installments, terms) {
        (Some(installments), Some(terms)) => {
            content.push(generate_two_columns(vec![installments], vec![terms], None));
        }
        (None, Some(terms)) => {
            content.push(generate_two_columns(Vec::new(), vec![terms], None));
        }
        (Some(installments), None) => content.push(installments),
        (None, None) => {}
    }

    content.extend(pair_accounts(view.accounts));

    if let Some(skonto) = view.skonto {
        content.push(create_header(ctx.label(Label::Discount), None));
        content.push(create_label_text(
            ctx.label(Label::DiscountConditions),
            &skonto.warunki_skonta,
            FormatKind::Default,
        ));
        content.push(create_label_text(
            ctx.label(Label::DiscountAmount),
            &skonto.wysokosc_skonta,
            FormatKind::Default,
        ));
    }

    content
}

fn installments_table(
    ctx: &Context<'_>,
    schema: Schema,
    installments: &[ZaplataCzesciowa],
) -> Option<Content> {
    let columns = [
        ColumnSpec::new(
            DATA_ZAPLATY_CZESCIOWEJ,
            ctx.label(Label::PartialPaymentDate),
            FormatKind::Date,
        ),
        ColumnSpec::new(
            KWOTA_ZAPLATY_CZESCIOWEJ,
            ctx.label(Label::PartialPaymentAmount),
            FormatKind::Currency,
        ),
        ColumnSpec::new(
            FORMA_PLATNOSCI,
            ctx.label(Label::PartialPaymentForm),
            FormatKind::FormOfPayment,
        ),
    ];
    get_content_table(ctx.vocabulary, schema, &columns, installments, ColumnWidth::Star)
}

fn terms_table(ctx: &Context<'_>, schema: Schema, terms: &[PaymentTermRow<'_>]) -> Option<Content> {
    let described = terms.iter().any(|term| has_value(term.opis.as_ref()));

    let mut columns = vec![ColumnSpec::new(
        TERMIN,
        ctx.label(Label::PaymentDueDate),
        FormatKind::Date,
    )];
    if described {
        columns.push(ColumnSpec::new(
            TERMIN_OPIS,
            ctx.label(Label::PaymentDueDescription),
            FormatKind::Description,
        ));
    }

    get_content_table(ctx.vocabulary, schema, &columns, terms, ColumnWidth::Star)
}

/// Two account blocks per row, in arrival order; an odd tail gets an empty
/// right column.
fn pair_accounts(accounts: Vec<Content>) -> Vec<Content> {
    let mut rows = Vec::with_capacity(accounts.len().div_ceil(2));
    let mut blocks = accounts.into_iter();
    while let Some(left) = blocks.next() {
        let right = blocks.next().into_iter().collect();
        rows.push(generate_two_columns(vec![left], right, None));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{English, Polish};
    use crate::document::{Columns, Table, outline};
    use pretty_assertions::assert_eq;

    fn view<'a>(schema: Schema) -> PaymentView<'a> {
        PaymentView {
            schema,
            status: PaymentStatus::NotPaid,
            data_zaplaty: None,
            form: CodedOrOther::Neither,
            extra_lines: Vec::new(),
            installments: &[],
            terms: Vec::new(),
            accounts: Vec::new(),
            skonto: None,
        }
    }

    fn columns_of(node: &Content) -> &Columns {
        match node {
            Content::Columns(columns) => columns,
            other => panic!("expected columns, got {other:?}"),
        }
    }

    fn table_of(node: &Content) -> &Table {
        match node {
            Content::Table(table) => table,
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn test_status_priority() {
        let one = Field::new("1");
        let zero = Field::new("0");
        let cases = [
            (Some(&one), Some(&one), PaymentStatus::Paid),
            (Some(&one), None, PaymentStatus::Paid),
            (Some(&zero), Some(&one), PaymentStatus::PartiallyPaid),
            (None, Some(&one), PaymentStatus::PartiallyPaid),
            (None, Some(&zero), PaymentStatus::NotPaid),
            (None, None, PaymentStatus::NotPaid),
        ];
        for (paid, partial, expected) in cases {
            assert_eq!(PaymentStatus::from_flags(paid, partial), expected);
        }
    }

    #[test]
    fn test_exactly_one_status_line() {
        let one = Field::new("1");
        let zero = Field::new("0");
        let flags = [None, Some(&zero), Some(&one)];
        let statuses = ["Paid", "Partial payment", "Not paid"];

        for paid in flags {
            for partial in flags {
                let mut status_view = view(Schema::Fa3);
                status_view.status = PaymentStatus::from_flags(paid, partial);
                let lines = outline(&generate(&Context::new(&English), status_view));

                let emitted: Vec<&str> = lines
                    .iter()
                    .map(String::as_str)
                    .filter(|line| statuses.contains(line))
                    .collect();
                assert_eq!(emitted.len(), 1, "paid={paid:?} partial={partial:?}");
                assert_eq!(lines[2], emitted[0]);
            }
        }
    }

    #[test]
    fn test_paid_emits_payment_date_after_header() {
        let date = Field::new("2025-10-10");
        let mut paid = view(Schema::Fa2);
        paid.status = PaymentStatus::Paid;
        paid.data_zaplaty = Some(&date);

        let content = generate(&Context::new(&English), paid);
        assert_eq!(
            outline(&content),
            vec!["---", "Payment", "Paid", "Payment date: 2025-10-10"]
        );
    }

    #[test]
    fn test_form_of_payment_excludes_other() {
        let code = Field::new("1");
        let description = Field::new("barter");
        let mut with_code = view(Schema::Fa2);
        with_code.form = CodedOrOther::choose(Some(&code), true, Some(&description));

        let lines = outline(&generate(&Context::default(), with_code));
        assert!(lines.contains(&"Forma płatności: Gotówka".to_string()));
        assert!(!lines.contains(&"Płatność inna".to_string()));

        let mut other = view(Schema::Fa2);
        other.form = CodedOrOther::choose(None, true, Some(&description));
        let lines = outline(&generate(&Context::default(), other));
        assert!(lines.contains(&"Płatność inna".to_string()));
        assert!(lines.contains(&"Opis płatności innej: barter".to_string()));
    }

    #[test]
    fn test_terms_description_column_only_when_described() {
        let date = Field::new("2024-03-01");
        let mut plain = view(Schema::Fa2);
        plain.terms = vec![PaymentTermRow::new(Some(&date), None)];

        let content = generate(&Context::default(), plain);
        let table = &columns_of(&content[3]).right[0];
        assert_eq!(table_of(table).widths.len(), 1);

        let mut described = view(Schema::Fa2);
        described.terms = vec![
            PaymentTermRow::new(Some(&date), None),
            PaymentTermRow::new(Some(&date), Some(Field::new("14 dni"))),
        ];
        let content = generate(&Context::default(), described);
        let columns = columns_of(&content[3]);
        assert!(columns.left.is_empty());
        let table = table_of(&columns.right[0]);
        assert_eq!(table.widths.len(), 2);
        for row in &table.body {
            assert_eq!(row.len(), 2);
        }
        assert_eq!(
            columns.right[0].lines(),
            vec![
                "Termin płatności | Opis terminu płatności",
                "2024-03-01 | ",
                "2024-03-01 | 14 dni",
            ]
        );
    }

    #[test]
    fn test_installments_alone_are_not_wrapped() {
        let installments = vec![ZaplataCzesciowa {
            data_zaplaty_czesciowej: Some(Field::new("2024-01-01")),
            kwota_zaplaty_czesciowej: Some(Field::new("10")),
            forma_platnosci: None,
        }];
        let mut only_installments = view(Schema::Fa2);
        only_installments.installments = &installments;

        let content = generate(&Context::default(), only_installments);
        assert_eq!(content.len(), 4);
        assert!(matches!(content[3], Content::Table(_)));
    }

    #[test]
    fn test_accounts_pair_into_rows() {
        for n in 0usize..6 {
            let accounts = (0..n).map(|i| format_text(&format!("acc {i}"), FormatKind::Default));
            let rows = pair_accounts(accounts.collect());
            assert_eq!(rows.len(), n.div_ceil(2));
            if let Some(last) = rows.last() {
                assert_eq!(columns_of(last).right.is_empty(), n % 2 == 1);
            }
        }
    }

    #[test]
    fn test_skonto_lines() {
        let skonto = Skonto {
            warunki_skonta: Some(Field::new("zapłata w 7 dni")),
            wysokosc_skonta: None,
        };
        let mut with_discount = view(Schema::Fa1);
        with_discount.skonto = Some(&skonto);

        let lines = outline(&generate(&Context::new(&Polish), with_discount));
        assert_eq!(
            &lines[3..],
            &["Skonto", "Warunki skonta: zapłata w 7 dni", "Wysokość skonta: "]
        );
    }
}
