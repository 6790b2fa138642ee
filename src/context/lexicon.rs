//! Lexical cue patterns shared by the attribute classifiers.
//!
//! Term tests run on lowercased covered text; label tests are case-sensitive.

use once_cell::sync::Lazy;
use regex::Regex;

static DISCUSSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:discuss|ask|understand|understood|tell|told|mention|talk|speak|spoke|address)")
        .expect("valid regex")
});

static DONOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^donor").expect("valid regex"));

static FAMILY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:father|dad|mother|mom|bro|sis|sib|cousin|aunt|uncle|grandm|grandp|grandf|wife|spouse|husband|child|offspring|progeny|son|daughter|nephew|niece|kin|family)",
    )
    .expect("valid regex")
});

static OTHER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:in-law|stepc|stepd|stepso|stepf|stepm|step-)").expect("valid regex")
});

static MODIFIER_DEPREL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:NMOD|amod|nmod|det|predet|nn|poss|possessive|infmod|partmod|rcmod)$")
        .expect("valid regex")
});

static NOUN_POSTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^N..?$").expect("valid regex"));

static CORE_SRL_ARGUMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^A[01]$").expect("valid regex"));

/// Paragraph openers that mark a history section; compared against lowercased text.
pub const HISTORY_SECTION_HEADERS: &[&str] = &[
    "fh",
    "sh",
    "pmh",
    "psh",
    "social history:",
    "family history",
    "past medical history",
    "pmh/psh",
];

/// Covered text begins with a discussion verb stem ("discussed", "told", ...).
pub fn is_discussion_context(text: &str) -> bool {
    DISCUSSION.is_match(&text.to_lowercase())
}

pub fn is_donor_term(text: &str) -> bool {
    DONOR.is_match(&text.to_lowercase())
}

pub fn is_family_term(text: &str) -> bool {
    FAMILY.is_match(&text.to_lowercase())
}

/// In-laws and step relations.
pub fn is_other_term(text: &str) -> bool {
    OTHER.is_match(&text.to_lowercase())
}

/// Relation labels of dependents that modify a larger noun phrase.
pub fn is_modifier_deprel(deprel: &str) -> bool {
    MODIFIER_DEPREL.is_match(deprel)
}

pub fn is_noun_postag(postag: &str) -> bool {
    NOUN_POSTAG.is_match(postag)
}

pub fn is_core_srl_argument(label: &str) -> bool {
    CORE_SRL_ARGUMENT.is_match(label)
}

pub fn opens_history_section(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    HISTORY_SECTION_HEADERS
        .iter()
        .any(|header| lower.starts_with(header))
}
