//! Static registry of named indicator strategies.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::AssertionError;

use super::{negation, run, status, Indicator, IndicatorKind, Machine, WindowToken};

/// Closed set of strategies an engine can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Status,
    Negation,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Status, StrategyKind::Negation];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Negation => "negation",
        }
    }

    pub fn build(self) -> IndicatorStrategy {
        let (machines, boundaries) = match self {
            Self::Status => (status::machines(), status::BOUNDARIES),
            Self::Negation => (negation::machines(), negation::BOUNDARIES),
        };
        IndicatorStrategy {
            kind: self,
            machines,
            boundaries,
        }
    }
}

impl FromStr for StrategyKind {
    type Err = AssertionError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| AssertionError::UnknownStrategy(name.to_string()))
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A strategy's machines plus the tokens that bound its scopes.
#[derive(Debug, Clone)]
pub struct IndicatorStrategy {
    kind: StrategyKind,
    machines: Vec<(Machine, IndicatorKind)>,
    boundaries: &'static [&'static str],
}

impl IndicatorStrategy {
    /// Look a strategy up by its registered name.
    pub fn named(name: &str) -> Result<Self, AssertionError> {
        name.parse::<StrategyKind>().map(StrategyKind::build)
    }

    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    pub fn is_boundary(&self, token: &str) -> bool {
        self.boundaries
            .iter()
            .any(|boundary| token.eq_ignore_ascii_case(boundary))
    }

    pub fn detect(&self, tokens: &[WindowToken<'_>]) -> Vec<Indicator> {
        run(&self.machines, tokens)
    }
}
