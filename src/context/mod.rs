//! Context and window utilities: sentence lookup, neighbour windows, lexical cues.

pub mod lexicon;
pub mod section;
pub mod window;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::AssertionError;

pub use section::in_history_section;
pub use window::{containing_sentence, neighbor_window};

/// Token scope examined around a mention by the indicator strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContextScope {
    Left,
    Middle,
    Right,
    /// Left, middle, and right tokens concatenated.
    All,
}

impl FromStr for ContextScope {
    type Err = AssertionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "LEFT" => Ok(Self::Left),
            "MIDDLE" => Ok(Self::Middle),
            "RIGHT" => Ok(Self::Right),
            "ALL" => Ok(Self::All),
            _ => Err(AssertionError::InvalidScope(raw.to_string())),
        }
    }
}

impl fmt::Display for ContextScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "LEFT",
            Self::Middle => "MIDDLE",
            Self::Right => "RIGHT",
            Self::All => "ALL",
        };
        f.write_str(name)
    }
}

/// Parse a comma separated scope order such as `LEFT,RIGHT`.
pub fn parse_scope_order(raw: &str) -> Result<Vec<ContextScope>, AssertionError> {
    raw.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(str::parse)
        .collect()
}
