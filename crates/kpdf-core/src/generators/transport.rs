//! Transport section (FA(2)).

use tracing::{debug, trace};

use super::address::shipping_address;
use super::carrier::generate_przewoznik;
use super::{CodedOrOther, Context};
use crate::dictionary::{Concept, Label};
use crate::document::{
    Content, FormatKind, create_header, create_label_text, create_section, create_sub_header,
    format_text, generate_two_columns,
};
use crate::models::Schema;
use crate::models::fa2::Transport;
use crate::models::field::{get_table, has_value};

const SCHEMA: Schema = Schema::Fa2;

/// One transport record as a breakable section. `index` numbers the header
/// when the invoice carries several transports.
pub fn generate_transport(ctx: &Context<'_>, transport: &Transport, index: Option<usize>) -> Content {
    let title = match index {
        Some(index) => format!("{} {}", ctx.label(Label::Transport), index),
        None => ctx.label(Label::Transport).to_string(),
    };
    let mut content = vec![create_header(&title, None)];

    let kind = transport_kind(ctx, transport);
    let details = transport_details(ctx, transport);
    content.push(generate_two_columns(kind, details, None));

    content.extend(generate_przewoznik(ctx, transport.przewoznik.as_ref()));
    content.extend(shipping(ctx, transport));

    create_section(content, true, None)
}

fn transport_kind(ctx: &Context<'_>, transport: &Transport) -> Vec<Content> {
    let kind = CodedOrOther::flagged(
        transport.rodzaj_transportu.as_ref(),
        transport.transport_inny.as_ref(),
        transport.opis_innego_transportu.as_ref(),
    );
    trace!(?kind, "transport kind");

    match kind {
        CodedOrOther::Coded(code) => vec![create_label_text(
            ctx.label(Label::TransportType),
            ctx.resolve(Concept::TransportType, SCHEMA, code),
            FormatKind::Default,
        )],
        CodedOrOther::Other(description) => vec![
            format_text(ctx.label(Label::OtherTransport), FormatKind::Label),
            create_label_text(
                ctx.label(Label::OtherTransportDescription),
                description,
                FormatKind::Default,
            ),
        ],
        CodedOrOther::Neither => Vec::new(),
    }
}

fn transport_details(ctx: &Context<'_>, transport: &Transport) -> Vec<Content> {
    let mut details = vec![
        create_label_text(
            ctx.label(Label::TransportOrderNumber),
            &transport.nr_zlecenia_transportu,
            FormatKind::Default,
        ),
        create_label_text(
            ctx.label(Label::PackagingUnit),
            &transport.jednostka_opakowania,
            FormatKind::Default,
        ),
    ];

    let cargo = CodedOrOther::flagged(
        transport.opis_ladunku.as_ref(),
        transport.ladunek_inny.as_ref(),
        transport.opis_innego_ladunku.as_ref(),
    );
    match cargo {
        CodedOrOther::Coded(code) => details.push(create_label_text(
            ctx.label(Label::CargoType),
            ctx.resolve(Concept::CargoType, SCHEMA, code),
            FormatKind::Default,
        )),
        CodedOrOther::Other(description) => {
            details.push(format_text(ctx.label(Label::OtherCargo), FormatKind::Label));
            details.push(create_label_text(
                ctx.label(Label::OtherCargoDescription),
                description,
                FormatKind::Default,
            ));
        }
        CodedOrOther::Neither => {}
    }

    details.push(create_label_text(
        ctx.label(Label::TransportStart),
        &transport.data_godz_rozp_transportu,
        FormatKind::DateTime,
    ));
    details.push(create_label_text(
        ctx.label(Label::TransportEnd),
        &transport.data_godz_zak_transportu,
        FormatKind::DateTime,
    ));

    if !details.is_empty() {
        details.insert(0, create_sub_header(ctx.label(Label::TransportData), None));
    }
    details
}

fn shipping(ctx: &Context<'_>, transport: &Transport) -> Vec<Content> {
    let from_present = transport
        .wysylka_z
        .as_ref()
        .is_some_and(|adres| has_value(&adres.adres_l1));
    let to_present = transport
        .wysylka_do
        .as_ref()
        .is_some_and(|adres| has_value(&adres.adres_l1));
    let via = get_table(transport.wysylka_przez.as_ref());

    if !from_present && !to_present && via.is_empty() {
        debug!("no shipping addresses");
        return Vec::new();
    }

    let mut content = vec![
        create_header(ctx.label(Label::Shipping), None),
        generate_two_columns(
            shipping_address(
                ctx,
                SCHEMA,
                ctx.label(Label::ShippedFrom),
                transport.wysylka_z.as_ref(),
            ),
            shipping_address(
                ctx,
                SCHEMA,
                ctx.label(Label::ShippedTo),
                transport.wysylka_do.as_ref(),
            ),
            None,
        ),
    ];

    let mut intermediate: Vec<Content> = Vec::new();
    let blocks = via
        .iter()
        .map(|adres| shipping_address(ctx, SCHEMA, ctx.label(Label::ShippedVia), Some(adres)))
        .filter(|block| !block.is_empty());
    for block in blocks {
        if !intermediate.is_empty() {
            intermediate.push(format_text("", FormatKind::Default));
        }
        intermediate.extend(block);
    }
    content.push(generate_two_columns(intermediate, Vec::new(), None));

    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::English;
    use crate::document::{Columns, outline};
    use crate::models::fa2::{Adres, Przewoznik};
    use crate::models::field::{Field, OneOrMany};
    use pretty_assertions::assert_eq;

    fn adres(line: &str, country: &str) -> Adres {
        Adres {
            kod_kraju: Some(Field::new(country)),
            adres_l1: Some(Field::new(line)),
            adres_l2: None,
            gln: None,
        }
    }

    #[test]
    fn test_minimal_transport() {
        let transport = Transport {
            rodzaj_transportu: Some(Field::new("3")),
            ..Default::default()
        };

        let section = generate_transport(&Context::new(&English), &transport, None);
        let Content::Section(inner) = &section else {
            panic!("expected section");
        };
        assert!(!inner.unbreakable);
        assert_eq!(
            section.lines(),
            vec![
                "Transport",
                "Transport type: Road transport",
                "Transport data",
                "Transport order number: ",
                "Packaging unit: ",
                "Transport start: ",
                "Transport end: ",
            ]
        );
    }

    #[test]
    fn test_other_transport_needs_flag_and_description() {
        let flag_only = Transport {
            transport_inny: Some(Field::new("1")),
            ..Default::default()
        };
        let lines = generate_transport(&Context::new(&English), &flag_only, Some(2)).lines();
        assert_eq!(lines[0], "Transport 2");
        assert!(!lines.contains(&"Other transport".to_string()));

        let described = Transport {
            transport_inny: Some(Field::new("1")),
            opis_innego_transportu: Some(Field::new("Dron")),
            ladunek_inny: Some(Field::new("1")),
            opis_innego_ladunku: Some(Field::new("Luzem")),
            data_godz_rozp_transportu: Some(Field::new("2024-05-01T10:15:30")),
            ..Default::default()
        };
        let lines = generate_transport(&Context::new(&English), &described, None).lines();
        assert!(lines.contains(&"Other transport".to_string()));
        assert!(lines.contains(&"Other transport description: Dron".to_string()));
        assert!(lines.contains(&"Other cargo description: Luzem".to_string()));
        assert!(lines.contains(&"Transport start: 2024-05-01 10:15".to_string()));
    }

    #[test]
    fn test_no_shipping_without_addresses() {
        let transport = Transport {
            wysylka_z: Some(Adres {
                adres_l2: Some(Field::new("only second line")),
                ..Default::default()
            }),
            ..Default::default()
        };
        let lines = generate_transport(&Context::default(), &transport, None).lines();
        assert!(!lines.contains(&"Wysyłka".to_string()));
    }

    #[test]
    fn test_shipping_blocks() {
        let transport = Transport {
            wysylka_z: Some(adres("Magazyn 1", "PL")),
            wysylka_przez: Some(OneOrMany::from(vec![
                adres("Hub A", "DE"),
                Adres::default(),
                adres("Hub B", "CZ"),
            ])),
            ..Default::default()
        };

        let section = generate_transport(&Context::new(&English), &transport, None);
        let Content::Section(inner) = &section else {
            panic!("expected section");
        };
        let shipping = &inner.content[2..];
        assert_eq!(
            outline(shipping),
            vec![
                "Shipping",
                "Shipped from",
                "Magazyn 1",
                "Poland",
                "Shipped via",
                "Hub A",
                "Germany",
                "",
                "Shipped via",
                "Hub B",
                "Czechia",
            ]
        );

        let Content::Columns(via) = &shipping[2] else {
            panic!("expected columns");
        };
        assert!(via.right.is_empty());
    }

    #[test]
    fn test_shipping_origin_only_keeps_intermediate_row() {
        let transport = Transport {
            wysylka_z: Some(adres("Magazyn 1", "PL")),
            ..Default::default()
        };

        let section = generate_transport(&Context::new(&English), &transport, None);
        let Content::Section(inner) = &section else {
            panic!("expected section");
        };
        let shipping = &inner.content[2..];
        let rows: Vec<&Columns> = shipping
            .iter()
            .filter_map(|node| match node {
                Content::Columns(columns) => Some(columns),
                _ => None,
            })
            .collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[1].left.is_empty());
        assert!(rows[1].right.is_empty());
        assert_eq!(outline(shipping), vec!["Shipping", "Shipped from", "Magazyn 1", "Poland"]);
    }

    #[test]
    fn test_carrier_is_included() {
        let transport = Transport {
            przewoznik: Some(Przewoznik::default()),
            ..Default::default()
        };
        let lines = generate_transport(&Context::new(&English), &transport, None).lines();
        assert!(lines.contains(&"Carrier".to_string()));
        assert!(lines.contains(&"Address".to_string()));
    }
}
