//! Sets of holidays resolved from templates against one shared anchor.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::template::{self, TemplateError};

/// A holiday template and the date it resolved to.
///
/// The template is kept exactly as written for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holiday {
    pub template: String,
    pub date: NaiveDate,
}

impl Holiday {
    pub fn resolve(template: &str, anchor: NaiveDate) -> Result<Self, TemplateError> {
        let date = template::resolve(template, anchor)?;
        Ok(Self { template: template.to_string(), date })
    }
}

#[derive(Debug, Error)]
#[error("holiday #{} is invalid: {source}", .index + 1)]
pub struct HolidayError {
    /// Zero-based position of the failing entry.
    pub index: usize,
    #[source]
    pub source: TemplateError,
}

/// Resolved holidays in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HolidaySet {
    holidays: Vec<Holiday>,
}

impl HolidaySet {
    /// Resolve every template against the same `anchor`, stopping at the first failure.
    pub fn resolve_all<I, S>(templates: I, anchor: NaiveDate) -> Result<Self, HolidayError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let holidays = templates
            .into_iter()
            .enumerate()
            .map(|(index, t)| {
                Holiday::resolve(t.as_ref(), anchor)
                    .map_err(|source| HolidayError { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = holidays.len(), %anchor, "resolved holidays");
        Ok(Self { holidays })
    }

    /// Distinct holiday dates in calendar order.
    pub fn dates(&self) -> BTreeSet<NaiveDate> {
        self.holidays.iter().map(|h| h.date).collect()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.holidays.iter().any(|h| h.date == date)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Holiday> {
        self.holidays.iter()
    }

    /// Holidays ordered by date; entries on the same date keep input order.
    pub fn sorted_by_date(&self) -> Vec<&Holiday> {
        let mut sorted: Vec<&Holiday> = self.holidays.iter().collect();
        sorted.sort_by_key(|h| h.date);
        sorted
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

impl<'a> IntoIterator for &'a HolidaySet {
    type Item = &'a Holiday;
    type IntoIter = std::slice::Iter<'a, Holiday>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
