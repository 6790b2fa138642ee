//! Rule-based assertion classification for clinical concept mentions.
//!
//! Given a document snapshot (text, sentences, tokens, dependency parse, mentions), the
//! [`assertion::AssertionEngine`] decides for each mention whether it is generic, whose
//! subject it concerns, its status, and whether it is negated.

pub mod assertion;
pub mod cli;
pub mod config;
pub mod context;
pub mod dependency;
pub mod document;
pub mod error;
pub mod fsm;
pub mod logging;

pub use assertion::AssertionEngine;
pub use document::{Document, MentionId};
pub use error::{AssertionError, Result};
