//! Field kinds and intermediate values produced while resolving a template.

use std::fmt;

/// One of the three fields of a holiday template, in template order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKind {
    Year,
    Month,
    Day,
}

impl FieldKind {
    /// All kinds in the order they appear in a template.
    pub const ALL: [FieldKind; 3] = [FieldKind::Year, FieldKind::Month, FieldKind::Day];

    /// Upper-case keyword that anchors a symbolic field to the anchor date.
    pub fn keyword(self) -> &'static str {
        match self {
            FieldKind::Year => "YEAR",
            FieldKind::Month => "MONTH",
            FieldKind::Day => "DAY",
        }
    }

    /// Number of digits a literal value must have.
    pub fn literal_width(self) -> usize {
        match self {
            FieldKind::Year => 4,
            FieldKind::Month | FieldKind::Day => 2,
        }
    }

    /// Largest literal value accepted before composition.
    ///
    /// Day is capped at 31 for every month; whether the day exists in the
    /// named month is only checked once the date is composed.
    pub fn max_value(self) -> i32 {
        match self {
            FieldKind::Year => 9999,
            FieldKind::Month => 12,
            FieldKind::Day => 31,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Year => "year",
            FieldKind::Month => "month",
            FieldKind::Day => "day",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a single segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Fixed-width digit string, as written.
    Literal(String),
    /// Keyword expression, upper-cased.
    Symbolic(String),
}

/// A field ready for composition: the base value and the offset applied afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedField {
    pub kind: FieldKind,
    pub base_value: i32,
    pub delta: i32,
}

impl ResolvedField {
    pub fn literal(kind: FieldKind, value: i32) -> Self {
        Self { kind, base_value: value, delta: 0 }
    }
}
