//! Carrier (`Przewoznik`) block of a transport section.

use tracing::debug;

use super::Context;
use super::address::address_lines;
use crate::dictionary::Label;
use crate::document::{
    Content, FormatKind, Margins, create_header, create_label_text, create_section,
    create_sub_header, format_text, generate_two_columns,
};
use crate::models::Schema;
use crate::models::fa2::{DaneIdentyfikacyjne, Przewoznik};
use crate::models::field::{get_value, has_value, is_set};

/// Carrier header plus identification and address side by side.
///
/// An absent carrier yields nothing and touches no dictionary.
pub fn generate_przewoznik(ctx: &Context<'_>, przewoznik: Option<&Przewoznik>) -> Vec<Content> {
    let Some(przewoznik) = przewoznik else {
        debug!("no carrier");
        return Vec::new();
    };

    let identification = przewoznik
        .dane_identyfikacyjne
        .as_ref()
        .map(|dane| identification(ctx, dane))
        .unwrap_or_default();

    let mut address = vec![create_sub_header(ctx.label(Label::Address), None)];
    if let Some(adres) = &przewoznik.adres_przewoznika {
        address.extend(address_lines(ctx, Schema::Fa2, adres));
    }

    vec![
        create_header(ctx.label(Label::Carrier), None),
        generate_two_columns(
            identification,
            vec![create_section(address, false, Some(Margins::ZERO))],
            None,
        ),
    ]
}

fn identification(ctx: &Context<'_>, dane: &DaneIdentyfikacyjne) -> Vec<Content> {
    let mut lines = vec![create_sub_header(ctx.label(Label::Identification), None)];

    if has_value(&dane.nip) {
        lines.push(create_label_text(ctx.label(Label::Nip), &dane.nip, FormatKind::Default));
    }
    if has_value(&dane.nr_vat_ue) {
        let vat = join_present(get_value(&dane.kod_ue), get_value(&dane.nr_vat_ue));
        lines.push(create_label_text(ctx.label(Label::EuVatNumber), vat, FormatKind::Default));
    }
    if has_value(&dane.nr_id) {
        let id = join_present(get_value(&dane.kod_kraju), get_value(&dane.nr_id));
        lines.push(create_label_text(ctx.label(Label::TaxId), id, FormatKind::Default));
    }
    if is_set(&dane.brak_id) {
        lines.push(format_text(ctx.label(Label::NoIdentifier), FormatKind::Default));
    }
    if has_value(&dane.nazwa) {
        lines.push(create_label_text(ctx.label(Label::Name), &dane.nazwa, FormatKind::Default));
    }

    lines
}

fn join_present(prefix: &str, value: &str) -> String {
    if prefix.is_empty() {
        value.to_string()
    } else {
        format!("{prefix} {value}")
    }
}
