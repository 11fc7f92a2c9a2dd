//! Error types for holiday template resolution.

use thiserror::Error;

use super::types::FieldKind;

/// A template that failed to resolve, together with the text as written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid holiday template '{template}': {kind}")]
pub struct TemplateError {
    pub template: String,
    pub kind: TemplateErrorKind,
}

impl TemplateError {
    pub fn new(template: impl Into<String>, kind: TemplateErrorKind) -> Self {
        Self { template: template.into(), kind }
    }

    /// The field the failure belongs to, when it can be attributed to one.
    pub fn field(&self) -> Option<FieldKind> {
        match &self.kind {
            TemplateErrorKind::BlankField(kind)
            | TemplateErrorKind::InvalidFieldValue { kind, .. }
            | TemplateErrorKind::OutOfRange { kind, .. }
            | TemplateErrorKind::UnexpectedOperator { kind, .. }
            | TemplateErrorKind::WrongKeyword { kind, .. }
            | TemplateErrorKind::BlankOffsetValue(kind)
            | TemplateErrorKind::NotAnInteger { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// What went wrong while resolving a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateErrorKind {
    #[error("nested brackets")]
    NestedBracket,

    #[error("unmatched '>'")]
    UnmatchedBracket,

    #[error("unexpected '<' (only one bracket region per field)")]
    UnexpectedBracket,

    #[error("expected 3 fields separated by '-', found {0}")]
    SegmentCountMismatch(usize),

    #[error("field '{0}' cannot be blank")]
    BlankField(FieldKind),

    #[error("field '{kind}' has invalid value '{text}'")]
    InvalidFieldValue { kind: FieldKind, text: String },

    #[error("field '{kind}' has invalid value (is={value}, must be {})", range_hint(.value, .bound))]
    OutOfRange { kind: FieldKind, value: i32, bound: i32 },

    #[error("unexpected '{operator}' in field '{kind}'")]
    UnexpectedOperator { kind: FieldKind, operator: char },

    #[error("field '{kind}' expects keyword {} but found '{found}'", .kind.keyword())]
    WrongKeyword { kind: FieldKind, found: String },

    #[error("offset value in field '{0}' cannot be blank")]
    BlankOffsetValue(FieldKind),

    #[error("invalid integer value in field '{kind}': '{text}'")]
    NotAnInteger { kind: FieldKind, text: String },

    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidComposedDate { year: i32, month: i32, day: i32 },

    #[error("offsets move the date out of the supported range")]
    DateOutOfRange,
}

fn range_hint(value: &i32, bound: &i32) -> String {
    if value < bound { format!(">= {bound}") } else { format!("<= {bound}") }
}
