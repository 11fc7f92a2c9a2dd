//! Holiday template parsing and resolution.
//!
//! A template is `YEAR-MONTH-DAY` where each field is either a fixed-width
//! number or its keyword with an optional signed offset:
//!
//! - `2024-12-25` (fixed date)
//! - `<YEAR>-01-01` (New Year of the anchor's year)
//! - `<YEAR+1>-06-15`, `2024-<MONTH-2>-01`
//! - `YEAR-MONTH-<DAY+2>` (two days after the anchor)
//!
//! Keywords are case-insensitive. A `-` inside a field must be wrapped in
//! `<...>` so it is not read as the field separator.
//!
//! Resolution never reads the clock: every symbolic field takes its value from
//! the anchor date passed in by the caller.

pub mod classifier;
pub mod composer;
pub mod delta;
pub mod errors;
pub mod segmenter;
pub mod types;

pub use errors::{TemplateError, TemplateErrorKind};
pub use types::{FieldKind, FieldValue, ResolvedField};

use chrono::NaiveDate;
use tracing::debug;

/// Resolve `template` against `anchor` into a concrete date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use holidate_core::template::resolve;
///
/// let anchor = NaiveDate::from_ymd_opt(2024, 11, 20).unwrap();
/// let date = resolve("<YEAR+1>-01-01", anchor).unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
/// ```
pub fn resolve(template: &str, anchor: NaiveDate) -> Result<NaiveDate, TemplateError> {
    let fields = parse_fields(template, anchor)?;
    let date = composer::compose(&fields).map_err(|kind| TemplateError::new(template, kind))?;
    debug!(template, %anchor, %date, "resolved holiday template");
    Ok(date)
}

/// Segment, classify and resolve the three fields without composing them.
pub fn parse_fields(
    template: &str,
    anchor: NaiveDate,
) -> Result<[ResolvedField; 3], TemplateError> {
    let err = |kind| TemplateError::new(template, kind);

    let segments = segmenter::split_segments(template).map_err(err)?;

    let mut fields = [ResolvedField::literal(FieldKind::Year, 0); 3];
    for ((slot, segment), kind) in fields.iter_mut().zip(&segments).zip(FieldKind::ALL) {
        let value = classifier::classify(segment, kind).map_err(err)?;
        *slot = delta::resolve_field(&value, kind, anchor).map_err(err)?;
    }
    Ok(fields)
}
