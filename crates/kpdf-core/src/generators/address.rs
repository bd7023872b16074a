use super::Context;
use crate::dictionary::{Concept, Label};
use crate::document::{Content, FormatKind, create_label_text, create_sub_header, format_text};
use crate::models::Schema;
use crate::models::fa2::Adres;
use crate::models::field::{get_value, has_value};

/// Address lines followed by the resolved country name, each only when present.
pub(crate) fn address_lines(ctx: &Context<'_>, schema: Schema, adres: &Adres) -> Vec<Content> {
    let mut lines = Vec::new();
    for line in [&adres.adres_l1, &adres.adres_l2] {
        if has_value(line) {
            lines.push(format_text(get_value(line), FormatKind::Default));
        }
    }

    let country = ctx.resolve(Concept::Country, schema, &adres.kod_kraju);
    if !country.is_empty() {
        lines.push(format_text(&country, FormatKind::Default));
    }
    lines
}

/// Titled shipping address block; empty unless the first address line is
/// present.
pub(crate) fn shipping_address(
    ctx: &Context<'_>,
    schema: Schema,
    title: &str,
    adres: Option<&Adres>,
) -> Vec<Content> {
    let Some(adres) = adres.filter(|adres| has_value(&adres.adres_l1)) else {
        return Vec::new();
    };

    let mut block = vec![create_sub_header(title, None)];
    block.extend(address_lines(ctx, schema, adres));
    if has_value(&adres.gln) {
        block.push(create_label_text(
            ctx.label(Label::Gln),
            &adres.gln,
            FormatKind::Default,
        ));
    }
    block
}
