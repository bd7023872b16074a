//! Polish labels and code tables.

use super::{Concept, Label, Table, Vocabulary, find};
use crate::models::Schema;

/// Polish vocabulary (default).
#[derive(Debug, Clone, Copy, Default)]
pub struct Polish;

impl Vocabulary for Polish {
    fn label(&self, label: Label) -> &'static str {
        match label {
            Label::Payment => "Płatność",
            Label::Paid => "Zapłacono",
            Label::PartiallyPaid => "Zapłata częściowa",
            Label::NotPaid => "Brak zapłaty",
            Label::PaymentDate => "Data zapłaty: ",
            Label::FormOfPayment => "Forma płatności: ",
            Label::OtherPayment => "Płatność inna",
            Label::OtherPaymentDescription => "Opis płatności innej: ",
            Label::PaymentLink => "Link do płatności: ",
            Label::KsefPaymentId => "Identyfikator płatności KSeF: ",
            Label::PartialPaymentDate => "Data zapłaty częściowej",
            Label::PartialPaymentAmount => "Kwota zapłaty częściowej",
            Label::PartialPaymentForm => "Forma płatności",
            Label::PaymentDueDate => "Termin płatności",
            Label::PaymentDueDescription => "Opis terminu płatności",
            Label::Discount => "Skonto",
            Label::DiscountConditions => "Warunki skonta: ",
            Label::DiscountAmount => "Wysokość skonta: ",

            Label::BankAccount => "Numer rachunku bankowego",
            Label::FactorBankAccount => "Numer rachunku bankowego faktora",
            Label::AccountFormat => "Format rachunku",
            Label::DomesticAccount => "Polski",
            Label::ForeignAccount => "Zagraniczny",
            Label::AccountNumber => "Pełny numer rachunku",
            Label::SwiftCode => "Kod SWIFT",
            Label::OwnBankAccount => "Rachunek własny banku",
            Label::BankName => "Nazwa banku",
            Label::AccountDescription => "Opis rachunku",

            Label::Transport => "Transport",
            Label::TransportType => "Rodzaj transportu: ",
            Label::OtherTransport => "Transport inny",
            Label::OtherTransportDescription => "Opis innego rodzaju transportu: ",
            Label::TransportData => "Dane transportu",
            Label::TransportOrderNumber => "Numer zlecenia transportu: ",
            Label::PackagingUnit => "Jednostka opakowania: ",
            Label::CargoType => "Rodzaj ładunku: ",
            Label::OtherCargo => "Ładunek inny",
            Label::OtherCargoDescription => "Opis innego ładunku: ",
            Label::TransportStart => "Data i godzina rozpoczęcia transportu: ",
            Label::TransportEnd => "Data i godzina zakończenia transportu: ",
            Label::Shipping => "Wysyłka",
            Label::ShippedFrom => "Adres miejsca wysyłki",
            Label::ShippedTo => "Adres miejsca docelowego",
            Label::ShippedVia => "Adres pośredni wysyłki",
            Label::Gln => "GLN: ",

            Label::Carrier => "Przewoźnik",
            Label::Identification => "Dane identyfikacyjne",
            Label::Address => "Adres",
            Label::Nip => "NIP: ",
            Label::EuVatNumber => "Numer VAT UE: ",
            Label::TaxId => "Identyfikator podatkowy: ",
            Label::NoIdentifier => "Brak identyfikatora",
            Label::Name => "Nazwa: ",
        }
    }

    fn lookup(&self, concept: Concept, schema: Schema, code: &str) -> Option<&'static str> {
        let table = match (concept, schema) {
            (Concept::FormOfPayment, Schema::Fa1) => &FORMS_OF_PAYMENT[..6],
            (Concept::FormOfPayment, _) => FORMS_OF_PAYMENT,
            (Concept::TransportType, _) => TRANSPORT_TYPES,
            (Concept::CargoType, _) => CARGO_TYPES,
            (Concept::OwnBankAccount, _) => OWN_BANK_ACCOUNTS,
            (Concept::Country, _) => COUNTRIES,
        };
        find(table, code)
    }
}

/// FA(1) knows codes 1-6; mobile payments (7) arrived with FA(2).
static FORMS_OF_PAYMENT: Table = &[
    ("1", "Gotówka"),
    ("2", "Karta"),
    ("3", "Bon"),
    ("4", "Czek"),
    ("5", "Kredyt"),
    ("6", "Przelew"),
    ("7", "Płatność mobilna"),
];

static TRANSPORT_TYPES: Table = &[
    ("1", "Transport morski"),
    ("2", "Transport kolejowy"),
    ("3", "Transport drogowy"),
    ("4", "Transport lotniczy"),
    ("5", "Przesyłka pocztowa"),
    ("7", "Stałe instalacje przesyłowe"),
    ("8", "Żegluga śródlądowa"),
];

static CARGO_TYPES: Table = &[
    ("1", "Bańka"),
    ("2", "Beczka"),
    ("3", "Butla"),
    ("4", "Karton"),
    ("5", "Kanister"),
    ("6", "Klatka"),
    ("7", "Kontener"),
    ("8", "Kosz/koszyk"),
    ("9", "Łubianka"),
    ("10", "Opakowanie zbiorcze"),
    ("11", "Paczka"),
    ("12", "Pakunek"),
    ("13", "Paleta"),
    ("14", "Pojemnik"),
    ("15", "Pojemnik do ładunków masowych stałych"),
    ("16", "Pojemnik do ładunków masowych w postaci płynnej"),
    ("17", "Pudełko"),
    ("18", "Puszka"),
    ("19", "Skrzynia"),
    ("20", "Worek"),
];

static OWN_BANK_ACCOUNTS: Table = &[
    (
        "1",
        "Rachunek banku lub SKOK służący do rozliczeń z tytułu nabywanych wierzytelności pieniężnych",
    ),
    (
        "2",
        "Rachunek banku lub SKOK wykorzystywany do pobrania należności od nabywcy i przekazania jej dostawcy",
    ),
    (
        "3",
        "Rachunek banku lub SKOK prowadzony w ramach gospodarki własnej, niebędący rachunkiem rozliczeniowym",
    ),
];

static COUNTRIES: Table = &[
    ("AT", "Austria"),
    ("BE", "Belgia"),
    ("BG", "Bułgaria"),
    ("BY", "Białoruś"),
    ("CA", "Kanada"),
    ("CH", "Szwajcaria"),
    ("CN", "Chiny"),
    ("CY", "Cypr"),
    ("CZ", "Czechy"),
    ("DE", "Niemcy"),
    ("DK", "Dania"),
    ("EE", "Estonia"),
    ("EL", "Grecja"),
    ("ES", "Hiszpania"),
    ("FI", "Finlandia"),
    ("FR", "Francja"),
    ("GB", "Wielka Brytania"),
    ("GR", "Grecja"),
    ("HR", "Chorwacja"),
    ("HU", "Węgry"),
    ("IE", "Irlandia"),
    ("IN", "Indie"),
    ("IS", "Islandia"),
    ("IT", "Włochy"),
    ("JP", "Japonia"),
    ("KR", "Korea Południowa"),
    ("LI", "Liechtenstein"),
    ("LT", "Litwa"),
    ("LU", "Luksemburg"),
    ("LV", "Łotwa"),
    ("MT", "Malta"),
    ("NL", "Holandia"),
    ("NO", "Norwegia"),
    ("PL", "Polska"),
    ("PT", "Portugalia"),
    ("RO", "Rumunia"),
    ("RU", "Rosja"),
    ("SE", "Szwecja"),
    ("SI", "Słowenia"),
    ("SK", "Słowacja"),
    ("TR", "Turcja"),
    ("UA", "Ukraina"),
    ("US", "Stany Zjednoczone"),
    ("XI", "Irlandia Północna"),
];
