//! Turns a classified segment into a base value and a signed offset.
//!
//! Symbolic fields follow a two-token grammar: the field keyword, optionally
//! followed by one `+` or `-` and a non-negative integer (`YEAR`, `MONTH + 3`,
//! `DAY-1`). The base value of a symbolic field comes from the anchor date.

use chrono::{Datelike, NaiveDate};
use tracing::trace;

use super::errors::TemplateErrorKind;
use super::types::{FieldKind, FieldValue, ResolvedField};

/// Resolve a classified field against `anchor`.
pub fn resolve_field(
    value: &FieldValue,
    kind: FieldKind,
    anchor: NaiveDate,
) -> Result<ResolvedField, TemplateErrorKind> {
    let field = match value {
        FieldValue::Literal(text) => resolve_literal(text, kind)?,
        FieldValue::Symbolic(text) => {
            let delta = parse_offset(text, kind)?;
            ResolvedField { kind, base_value: anchor_value(anchor, kind), delta }
        }
    };
    trace!(?field, "resolved field");
    Ok(field)
}

fn resolve_literal(text: &str, kind: FieldKind) -> Result<ResolvedField, TemplateErrorKind> {
    let value = parse_number(text, kind)?;
    if value < 1 {
        return Err(TemplateErrorKind::OutOfRange { kind, value, bound: 1 });
    }
    if value > kind.max_value() {
        return Err(TemplateErrorKind::OutOfRange { kind, value, bound: kind.max_value() });
    }
    Ok(ResolvedField::literal(kind, value))
}

/// Parse the optional signed suffix of an upper-cased symbolic field.
fn parse_offset(text: &str, kind: FieldKind) -> Result<i32, TemplateErrorKind> {
    let Some(idx) = text.find(['+', '-']) else {
        let desc = text.trim();
        if desc != kind.keyword() {
            return Err(TemplateErrorKind::WrongKeyword { kind, found: desc.to_string() });
        }
        return Ok(0);
    };

    let (desc, rest) = text.split_at(idx);
    let mut rest_chars = rest.chars();
    let operator = rest_chars.next().unwrap_or('+');
    let value_part = rest_chars.as_str();

    if let Some(second) = value_part.chars().find(|c| matches!(c, '+' | '-')) {
        return Err(TemplateErrorKind::UnexpectedOperator { kind, operator: second });
    }

    let desc = desc.trim();
    let value_part = value_part.trim();
    if value_part.is_empty() {
        return Err(TemplateErrorKind::BlankOffsetValue(kind));
    }
    if desc != kind.keyword() {
        return Err(TemplateErrorKind::WrongKeyword { kind, found: desc.to_string() });
    }

    let amount = parse_number(value_part, kind)?;
    Ok(if operator == '-' { -amount } else { amount })
}

fn parse_number(text: &str, kind: FieldKind) -> Result<i32, TemplateErrorKind> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TemplateErrorKind::NotAnInteger { kind, text: text.to_string() });
    }
    text.parse::<i32>()
        .map_err(|_| TemplateErrorKind::NotAnInteger { kind, text: text.to_string() })
}

fn anchor_value(anchor: NaiveDate, kind: FieldKind) -> i32 {
    match kind {
        FieldKind::Year => anchor.year(),
        FieldKind::Month => anchor.month() as i32,
        FieldKind::Day => anchor.day() as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn symbolic(text: &str) -> FieldValue {
        FieldValue::Symbolic(text.to_string())
    }

    #[test]
    fn test_literal_value() {
        let field =
            resolve_field(&FieldValue::Literal("07".into()), FieldKind::Month, anchor())
                .unwrap();
        assert_eq!(field, ResolvedField { kind: FieldKind::Month, base_value: 7, delta: 0 });
    }

    #[rstest]
    #[case("0000", FieldKind::Year, 0, 1)]
    #[case("00", FieldKind::Month, 0, 1)]
    #[case("13", FieldKind::Month, 13, 12)]
    #[case("00", FieldKind::Day, 0, 1)]
    #[case("32", FieldKind::Day, 32, 31)]
    fn test_literal_out_of_range(
        #[case] text: &str,
        #[case] kind: FieldKind,
        #[case] value: i32,
        #[case] bound: i32,
    ) {
        assert_eq!(
            resolve_field(&FieldValue::Literal(text.into()), kind, anchor()).unwrap_err(),
            TemplateErrorKind::OutOfRange { kind, value, bound }
        );
    }

    #[test]
    fn test_day_31_passes_range_check_for_any_month() {
        let field =
            resolve_field(&FieldValue::Literal("31".into()), FieldKind::Day, anchor()).unwrap();
        assert_eq!(field.base_value, 31);
    }

    #[rstest]
    #[case("YEAR", FieldKind::Year, 2024, 0)]
    #[case("MONTH", FieldKind::Month, 6, 0)]
    #[case("DAY", FieldKind::Day, 15, 0)]
    #[case("YEAR+1", FieldKind::Year, 2024, 1)]
    #[case("MONTH-2", FieldKind::Month, 6, -2)]
    #[case("DAY + 20", FieldKind::Day, 15, 20)]
    #[case(" DAY - 0 ", FieldKind::Day, 15, 0)]
    #[case("YEAR+0010", FieldKind::Year, 2024, 10)]
    fn test_symbolic_value(
        #[case] text: &str,
        #[case] kind: FieldKind,
        #[case] base_value: i32,
        #[case] delta: i32,
    ) {
        assert_eq!(
            resolve_field(&symbolic(text), kind, anchor()).unwrap(),
            ResolvedField { kind, base_value, delta }
        );
    }

    #[rstest]
    #[case("YEAR+1-2", TemplateErrorKind::UnexpectedOperator { kind: FieldKind::Year, operator: '-' })]
    #[case("YEAR++1", TemplateErrorKind::UnexpectedOperator { kind: FieldKind::Year, operator: '+' })]
    #[case("YEAR+", TemplateErrorKind::BlankOffsetValue(FieldKind::Year))]
    #[case("YEAR -  ", TemplateErrorKind::BlankOffsetValue(FieldKind::Year))]
    #[case("YEARS+1", TemplateErrorKind::WrongKeyword { kind: FieldKind::Year, found: "YEARS".into() })]
    #[case("YEARX", TemplateErrorKind::WrongKeyword { kind: FieldKind::Year, found: "YEARX".into() })]
    #[case("YEAR+ONE", TemplateErrorKind::NotAnInteger { kind: FieldKind::Year, text: "ONE".into() })]
    #[case("YEAR+1 2", TemplateErrorKind::NotAnInteger { kind: FieldKind::Year, text: "1 2".into() })]
    #[case("YEAR+99999999999", TemplateErrorKind::NotAnInteger { kind: FieldKind::Year, text: "99999999999".into() })]
    fn test_symbolic_errors(#[case] text: &str, #[case] expected: TemplateErrorKind) {
        assert_eq!(resolve_field(&symbolic(text), FieldKind::Year, anchor()).unwrap_err(), expected);
    }

    #[test]
    fn test_blank_offset_checked_before_keyword() {
        assert_eq!(
            resolve_field(&symbolic("YEARS-"), FieldKind::Year, anchor()).unwrap_err(),
            TemplateErrorKind::BlankOffsetValue(FieldKind::Year)
        );
    }
}
