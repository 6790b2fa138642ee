//! Runtime configuration utilities for clinical-assertion.

use std::env;

use anyhow::Context;
use serde::Deserialize;

use crate::context::{parse_scope_order, ContextScope};

/// Classifier configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Preceding/following neighbours examined for subsumption.
    pub subsumption_window: usize,
    /// Maximum tokens examined left of a mention for status and negation cues.
    pub left_scope: usize,
    /// Maximum tokens examined right of a mention.
    pub right_scope: usize,
    /// Order in which scopes are examined.
    pub scope_order: Vec<ContextScope>,
    /// Registered name of the status indicator strategy.
    pub status_strategy: String,
    /// Registered name of the negation indicator strategy.
    pub negation_strategy: String,
    /// Documents annotated concurrently by the CLI.
    pub max_concurrent_documents: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            subsumption_window: 5,
            left_scope: 7,
            right_scope: 7,
            scope_order: vec![ContextScope::Left, ContextScope::Right],
            status_strategy: "status".to_string(),
            negation_strategy: "negation".to_string(),
            max_concurrent_documents: 4,
        }
    }
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let subsumption_window = env_usize("SUBSUMPTION_WINDOW", defaults.subsumption_window);
        let left_scope = env_usize("CONTEXT_LEFT_SCOPE", defaults.left_scope);
        let right_scope = env_usize("CONTEXT_RIGHT_SCOPE", defaults.right_scope);
        let scope_order = match env::var("CONTEXT_SCOPE_ORDER") {
            Ok(raw) => parse_scope_order(&raw).context("parsing CONTEXT_SCOPE_ORDER")?,
            Err(_) => defaults.scope_order,
        };
        let status_strategy = env::var("STATUS_STRATEGY").unwrap_or(defaults.status_strategy);
        let negation_strategy =
            env::var("NEGATION_STRATEGY").unwrap_or(defaults.negation_strategy);
        let max_concurrent_documents = env_usize(
            "MAX_CONCURRENT_DOCUMENTS",
            defaults.max_concurrent_documents,
        )
        .max(1);

        Ok(Self {
            subsumption_window,
            left_scope,
            right_scope,
            scope_order,
            status_strategy,
            negation_strategy,
            max_concurrent_documents,
        })
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
