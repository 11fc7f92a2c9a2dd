//! Builds the final date from a resolved field triple.

use chrono::{Duration, Months, NaiveDate};
use tracing::trace;

use super::errors::TemplateErrorKind;
use super::types::ResolvedField;

/// Compose the base date, then apply the year, month and day offsets in that order.
///
/// Each offset is applied to the result of the previous one. Year and month steps
/// clip the day to the end of the target month (Jan 31 + 1 month = Feb 28/29).
pub fn compose(fields: &[ResolvedField; 3]) -> Result<NaiveDate, TemplateErrorKind> {
    let [year, month, day] = fields;

    let base = u32::try_from(month.base_value)
        .ok()
        .zip(u32::try_from(day.base_value).ok())
        .and_then(|(m, d)| NaiveDate::from_ymd_opt(year.base_value, m, d))
        .ok_or(TemplateErrorKind::InvalidComposedDate {
            year: year.base_value,
            month: month.base_value,
            day: day.base_value,
        })?;
    trace!(%base, "composed base date");

    let date = add_months(base, i64::from(year.delta) * 12)
        .and_then(|d| add_months(d, i64::from(month.delta)))
        .and_then(|d| d.checked_add_signed(Duration::days(i64::from(day.delta))))
        .ok_or(TemplateErrorKind::DateOutOfRange)?;
    trace!(%date, "applied offsets");

    Ok(date)
}

fn add_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let count = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months < 0 { date.checked_sub_months(count) } else { date.checked_add_months(count) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::types::FieldKind;

    fn fields(base: (i32, i32, i32), delta: (i32, i32, i32)) -> [ResolvedField; 3] {
        [
            ResolvedField { kind: FieldKind::Year, base_value: base.0, delta: delta.0 },
            ResolvedField { kind: FieldKind::Month, base_value: base.1, delta: delta.1 },
            ResolvedField { kind: FieldKind::Day, base_value: base.2, delta: delta.2 },
        ]
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_no_offsets() {
        assert_eq!(compose(&fields((2024, 12, 25), (0, 0, 0))).unwrap(), ymd(2024, 12, 25));
    }

    #[test]
    fn test_invalid_base_date() {
        assert_eq!(
            compose(&fields((2023, 4, 31), (0, 0, 0))).unwrap_err(),
            TemplateErrorKind::InvalidComposedDate { year: 2023, month: 4, day: 31 }
        );
        assert_eq!(
            compose(&fields((2023, 2, 29), (1, 0, 0))).unwrap_err(),
            TemplateErrorKind::InvalidComposedDate { year: 2023, month: 2, day: 29 }
        );
    }

    #[test]
    fn test_year_offset_clips_leap_day() {
        assert_eq!(compose(&fields((2024, 2, 29), (1, 0, 0))).unwrap(), ymd(2025, 2, 28));
        assert_eq!(compose(&fields((2024, 2, 29), (-4, 0, 0))).unwrap(), ymd(2020, 2, 29));
    }

    #[test]
    fn test_month_offset_crosses_year() {
        assert_eq!(compose(&fields((2024, 11, 30), (0, 3, 0))).unwrap(), ymd(2025, 2, 28));
        assert_eq!(compose(&fields((2024, 1, 15), (0, -2, 0))).unwrap(), ymd(2023, 11, 15));
    }

    #[test]
    fn test_day_offset_crosses_month() {
        assert_eq!(compose(&fields((2024, 12, 31), (0, 0, 1))).unwrap(), ymd(2025, 1, 1));
        assert_eq!(compose(&fields((2024, 3, 1), (0, 0, -1))).unwrap(), ymd(2024, 2, 29));
    }

    #[test]
    fn test_offsets_applied_sequentially() {
        // Jan 31 + 1 month clips to Feb 29, minus 1 day is Feb 28.
        // Day first would give Jan 30 + 1 month = Feb 29.
        assert_eq!(compose(&fields((2024, 1, 31), (0, 1, -1))).unwrap(), ymd(2024, 2, 28));
        assert_eq!(compose(&fields((2023, 2, 28), (1, 0, 1))).unwrap(), ymd(2024, 2, 29));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            compose(&fields((9999, 1, 1), (i32::MAX, 0, 0))).unwrap_err(),
            TemplateErrorKind::DateOutOfRange
        );
    }
}
