//! Attribute slots written back onto mentions by the assertion classifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discourse entity a mention is predicated of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    #[default]
    Patient,
    FamilyMember,
    DonorFamilyMember,
    DonorOther,
    Other,
}

impl Subject {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::FamilyMember => "family_member",
            Self::DonorFamilyMember => "donor_family_member",
            Self::DonorOther => "donor_other",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Negation context of a mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    #[default]
    Affirmed,
    Negated,
}

/// Status indicator attached to a mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    HistoryOf,
    FamilyHistoryOf,
    Probable,
}

/// Mutable attribute slots. `None` means "not yet classified".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<Subject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polarity: Option<Polarity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uncertainty: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_of: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}
