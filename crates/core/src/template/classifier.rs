//! Decides whether a segment is a literal number or a keyword expression.

use super::errors::TemplateErrorKind;
use super::types::{FieldKind, FieldValue};

/// Classify one trimmed segment for the field at `kind`.
pub fn classify(segment: &str, kind: FieldKind) -> Result<FieldValue, TemplateErrorKind> {
    if segment.trim().is_empty() {
        return Err(TemplateErrorKind::BlankField(kind));
    }

    if is_literal(segment, kind) {
        return Ok(FieldValue::Literal(segment.to_string()));
    }

    let upper = segment.to_uppercase();
    if upper.starts_with(kind.keyword()) {
        return Ok(FieldValue::Symbolic(upper));
    }

    Err(TemplateErrorKind::InvalidFieldValue { kind, text: segment.to_string() })
}

fn is_literal(segment: &str, kind: FieldKind) -> bool {
    segment.len() == kind.literal_width() && segment.bytes().all(|b| b.is_ascii_digit())
}
