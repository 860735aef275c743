use crate::model::FormatKind;

/// Contract violations detected while converting or generating requests.
///
/// Malformed markdown never produces one of these: the walker recovers from
/// unterminated spans and stray tokens on its own. These variants mean the
/// bookkeeping itself is inconsistent, so the whole conversion is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("cursor out of sync with buffer: cursor at {cursor}, expected {expected}")]
    CursorMismatch { cursor: usize, expected: usize },
    #[error("inverted {kind} range: start {start} is after end {end}")]
    InvertedRange {
        kind: FormatKind,
        start: usize,
        end: usize,
    },
    #[error("{kind} range {start}..{end} exceeds buffer limit {limit}")]
    RangeOutOfBounds {
        kind: FormatKind,
        start: usize,
        end: usize,
        limit: usize,
    },
    #[error("inverted list item range: start {start} is after end {end}")]
    InvertedListItem { start: usize, end: usize },
    #[error("table at index {index} has no columns")]
    EmptyTable { index: usize },
}
