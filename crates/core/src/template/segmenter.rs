//! Splits a raw template into its year, month and day segments.
//!
//! Segments are separated by `-`. A segment may contain one region delimited by
//! `<` and `>`; inside it `-` is kept as text, which is how a field carries a
//! subtraction (`2024-<MONTH-2>-01`). The delimiters themselves are dropped.

use tracing::trace;

use super::errors::TemplateErrorKind;

/// Bracket state of the segment currently being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Outside a bracket region; a region may still be opened.
    Open,
    /// Inside a bracket region.
    InBrackets,
    /// Outside, after this segment's bracket region was closed.
    Closed,
}

/// Split `template` into exactly three trimmed segments.
pub fn split_segments(template: &str) -> Result<Vec<String>, TemplateErrorKind> {
    let mut segments = Vec::with_capacity(3);
    let mut current = String::new();
    let mut pending = false;
    let mut state = ScanState::Open;

    for ch in template.chars() {
        match (ch, state) {
            ('<', ScanState::InBrackets) => return Err(TemplateErrorKind::NestedBracket),
            ('<', ScanState::Closed) => return Err(TemplateErrorKind::UnexpectedBracket),
            ('<', ScanState::Open) => state = ScanState::InBrackets,
            ('>', ScanState::InBrackets) => state = ScanState::Closed,
            ('>', _) => return Err(TemplateErrorKind::UnmatchedBracket),
            ('-', ScanState::Open | ScanState::Closed) => {
                segments.push(current.trim().to_string());
                current.clear();
                pending = false;
                state = ScanState::Open;
            }
            _ => {
                current.push(ch);
                pending = true;
            }
        }
    }

    if pending {
        segments.push(current.trim().to_string());
    }

    trace!(?segments, "split template into segments");

    if segments.len() != 3 {
        return Err(TemplateErrorKind::SegmentCountMismatch(segments.len()));
    }
    Ok(segments)
}
