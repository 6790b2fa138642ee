//! Immutable begin/end offset pairs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AssertionError, Result};

/// Half-open byte range `[begin, end)` into the document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawSpan")]
pub struct TextSpan {
    begin: usize,
    end: usize,
}

#[derive(Deserialize)]
struct RawSpan {
    begin: usize,
    end: usize,
}

impl TryFrom<RawSpan> for TextSpan {
    type Error = AssertionError;

    fn try_from(raw: RawSpan) -> Result<Self> {
        TextSpan::new(raw.begin, raw.end)
    }
}

impl TextSpan {
    /// Build a span, rejecting `begin > end`.
    pub fn new(begin: usize, end: usize) -> Result<Self> {
        if begin > end {
            return Err(AssertionError::InvertedSpan { begin, end });
        }
        Ok(Self { begin, end })
    }

    /// Offset of an annotation given relative to the start of its containing sentence.
    pub fn in_sentence(sentence: TextSpan, begin: usize, end: usize) -> Result<Self> {
        let shift = |offset: usize| {
            sentence
                .begin
                .checked_add(offset)
                .ok_or(AssertionError::OffsetOverflow {
                    base: sentence.begin,
                    offset,
                })
        };
        Self::new(shift(begin)?, shift(end)?)
    }

    pub fn begin(&self) -> usize {
        self.begin
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn width(&self) -> usize {
        self.end - self.begin
    }

    /// End-exclusive: a span ending at `x` does not overlap one beginning at `x`.
    pub fn overlaps(&self, other: &TextSpan) -> bool {
        self.begin < other.end && other.begin < self.end
    }

    pub fn contains(&self, other: &TextSpan) -> bool {
        self.begin <= other.begin && other.end <= self.end
    }

    /// This span expressed relative to the start of `container`, if it lies inside it.
    pub fn relative_to(&self, container: &TextSpan) -> Option<TextSpan> {
        container.contains(self).then(|| TextSpan {
            begin: self.begin - container.begin,
            end: self.end - container.begin,
        })
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.begin, self.end)
    }
}
