//! Error taxonomy for malformed assertion input.

use thiserror::Error;

/// Result alias used throughout the classification core.
pub type Result<T> = std::result::Result<T, AssertionError>;

/// Fail-fast errors for input that cannot be classified at all.
///
/// Missing context (no containing sentence, no dependency coverage) is not an error;
/// the affected features simply stay `false`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssertionError {
    #[error("invalid span: begin {begin} is after end {end}")]
    InvertedSpan { begin: usize, end: usize },

    #[error("offset {offset} overflows when added to {base}")]
    OffsetOverflow { base: usize, offset: usize },

    #[error("span {begin}..{end} exceeds document length {len}")]
    SpanOutOfBounds { begin: usize, end: usize, len: usize },

    #[error("token `{0}` not found in sentence text")]
    UnalignedToken(String),

    #[error("unknown mention id {0}")]
    UnknownMention(usize),

    #[error("dependency node {node} points at missing head {head}")]
    DanglingHead { node: usize, head: usize },

    #[error("dependency node {0} is part of a head cycle")]
    CyclicHead(usize),

    #[error("unknown indicator strategy `{0}`")]
    UnknownStrategy(String),

    #[error("invalid context scope `{0}`")]
    InvalidScope(String),

    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),
}
