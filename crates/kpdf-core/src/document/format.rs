//! Value formatting for text nodes.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::str::FromStr;

/// Style and value transformation of a text run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    #[default]
    Default,
    Label,
    Value,
    Bold,
    Header,
    SubHeader,
    GrayBoldTitle,
    TableHeader,
    /// `YYYY-MM-DD`.
    Date,
    /// `YYYY-MM-DD HH:MM`, seconds stripped.
    DateTime,
    /// `HH:MM`.
    Time,
    /// Polish amount, e.g. `1 234,56`.
    Currency,
    Percentage,
    /// Coded form of payment; resolved by table builders.
    FormOfPayment,
    Description,
}

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const TIME_FORMAT: &str = "%H:%M";

/// Transform a raw value for display.
///
/// Values that cannot be parsed for their kind are returned unchanged.
pub fn format_value(value: &str, kind: FormatKind) -> String {
    let value = value.trim();
    if value.is_empty() {
        return String::new();
    }

    let formatted = match kind {
        FormatKind::Date => parse_date(value).map(|d| d.format(DATE_FORMAT).to_string()),
        FormatKind::DateTime => {
            parse_date_time(value).map(|dt| dt.format(DATE_TIME_FORMAT).to_string())
        }
        FormatKind::Time => parse_time(value).map(|t| t.format(TIME_FORMAT).to_string()),
        FormatKind::Currency => Decimal::from_str(value).ok().map(format_polish_amount),
        FormatKind::Percentage => Some(format!("{}%", value.trim_end_matches('%'))),
        _ => None,
    };

    formatted.unwrap_or_else(|| value.to_string())
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .or_else(|| parse_date_time(value).map(|dt| dt.date()))
}

fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    ["%H:%M:%S%.f", "%H:%M"]
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(value, format).ok())
        .or_else(|| parse_date_time(value).map(|dt| dt.time()))
}

/// Format amount in Polish style (1 234,56).
fn format_polish_amount(amount: Decimal) -> String {
    let amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let s = format!("{:.2}", amount.abs());
    let Some((integer_part, decimal_part)) = s.split_once('.') else {
        return s;
    };

    let chars: Vec<char> = integer_part.chars().collect();
    let mut formatted = String::new();
    if amount.is_sign_negative() && !amount.is_zero() {
        formatted.push('-');
    }

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push(' ');
        }
        formatted.push(*c);
    }

    format!("{},{}", formatted, decimal_part)
}

/// Insert a line break every `width` characters. `0` disables wrapping.
pub fn wrap_text(value: &str, width: usize) -> String {
    if width == 0 {
        return value.to_string();
    }

    let chars: Vec<char> = value.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_date() {
        assert_eq!(format_value("2025-10-10", FormatKind::Date), "2025-10-10");
        assert_eq!(
            format_value("2025-10-10T08:30:00", FormatKind::Date),
            "2025-10-10"
        );
        assert_eq!(format_value("10 Oct", FormatKind::Date), "10 Oct");
    }

    #[test]
    fn test_format_date_time_strips_seconds() {
        assert_eq!(
            format_value("2025-10-10T08:30:45", FormatKind::DateTime),
            "2025-10-10 08:30"
        );
        assert_eq!(
            format_value("2025-10-10T08:30:45+02:00", FormatKind::DateTime),
            "2025-10-10 08:30"
        );
        assert_eq!(format_value("14:05:59", FormatKind::Time), "14:05");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_value("1234.56", FormatKind::Currency), "1 234,56");
        assert_eq!(format_value("1234567.5", FormatKind::Currency), "1 234 567,50");
        assert_eq!(format_value("-999.99", FormatKind::Currency), "-999,99");
        assert_eq!(format_value("-1000", FormatKind::Currency), "-1 000,00");
        assert_eq!(format_value("abc", FormatKind::Currency), "abc");
    }

    #[test]
    fn test_format_currency_rounds_before_sign() {
        assert_eq!(format_value("-0.001", FormatKind::Currency), "0,00");
        assert_eq!(format_value("-0.004", FormatKind::Currency), "0,00");
        assert_eq!(format_value("-0.006", FormatKind::Currency), "-0,01");
        assert_eq!(format_value("12.345", FormatKind::Currency), "12,35");
    }

    #[test]
    fn test_format_percentage_and_passthrough() {
        assert_eq!(format_value("2", FormatKind::Percentage), "2%");
        assert_eq!(format_value("2%", FormatKind::Percentage), "2%");
        assert_eq!(format_value("tekst", FormatKind::Default), "tekst");
        assert_eq!(format_value("", FormatKind::Currency), "");
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("abcdefgh", 3), "abc\ndef\ngh");
        assert_eq!(wrap_text("abc", 3), "abc");
        assert_eq!(wrap_text("abcdef", 0), "abcdef");
        assert_eq!(wrap_text("", 5), "");
    }
}
