//! Subject features (donor, family, other cues) and the labelling rule.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    context::{containing_sentence, lexicon},
    dependency::NodeId,
    document::{Document, MentionId, Subject},
    error::Result,
};

/// Who a cue word refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Referent {
    Donor,
    Family,
    Other,
}

impl Referent {
    const ALL: [Referent; 3] = [Referent::Donor, Referent::Family, Referent::Other];

    fn matches(self, text: &str) -> bool {
        match self {
            Self::Donor => lexicon::is_donor_term(text),
            Self::Family => lexicon::is_family_term(text),
            Self::Other => lexicon::is_other_term(text),
        }
    }
}

/// Where a cue was found relative to the mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Cue {
    Token,
    Srlarg,
    Deppath,
    Depsrl,
}

/// Closed set of subject features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectFeature {
    DonorToken,
    DonorSrlarg,
    DonorDeppath,
    DonorDepsrl,
    FamilyToken,
    FamilySrlarg,
    FamilyDeppath,
    FamilyDepsrl,
    OtherToken,
    OtherSrlarg,
    OtherDeppath,
    OtherDepsrl,
}

impl SubjectFeature {
    pub const ALL: [SubjectFeature; 12] = [
        SubjectFeature::DonorToken,
        SubjectFeature::DonorSrlarg,
        SubjectFeature::DonorDeppath,
        SubjectFeature::DonorDepsrl,
        SubjectFeature::FamilyToken,
        SubjectFeature::FamilySrlarg,
        SubjectFeature::FamilyDeppath,
        SubjectFeature::FamilyDepsrl,
        SubjectFeature::OtherToken,
        SubjectFeature::OtherSrlarg,
        SubjectFeature::OtherDeppath,
        SubjectFeature::OtherDepsrl,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::DonorToken => "donor_token",
            Self::DonorSrlarg => "donor_srlarg",
            Self::DonorDeppath => "donor_deppath",
            Self::DonorDepsrl => "donor_depsrl",
            Self::FamilyToken => "family_token",
            Self::FamilySrlarg => "family_srlarg",
            Self::FamilyDeppath => "family_deppath",
            Self::FamilyDepsrl => "family_depsrl",
            Self::OtherToken => "other_token",
            Self::OtherSrlarg => "other_srlarg",
            Self::OtherDeppath => "other_deppath",
            Self::OtherDepsrl => "other_depsrl",
        }
    }

    fn of(referent: Referent, cue: Cue) -> Self {
        match (referent, cue) {
            (Referent::Donor, Cue::Token) => Self::DonorToken,
            (Referent::Donor, Cue::Srlarg) => Self::DonorSrlarg,
            (Referent::Donor, Cue::Deppath) => Self::DonorDeppath,
            (Referent::Donor, Cue::Depsrl) => Self::DonorDepsrl,
            (Referent::Family, Cue::Token) => Self::FamilyToken,
            (Referent::Family, Cue::Srlarg) => Self::FamilySrlarg,
            (Referent::Family, Cue::Deppath) => Self::FamilyDeppath,
            (Referent::Family, Cue::Depsrl) => Self::FamilyDepsrl,
            (Referent::Other, Cue::Token) => Self::OtherToken,
            (Referent::Other, Cue::Srlarg) => Self::OtherSrlarg,
            (Referent::Other, Cue::Deppath) => Self::OtherDeppath,
            (Referent::Other, Cue::Depsrl) => Self::OtherDepsrl,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Subject feature values for one mention, all `false` by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubjectFeatures {
    values: [bool; 12],
}

impl SubjectFeatures {
    /// Copy of `self` with `feature` set to `value`.
    pub fn with(mut self, feature: SubjectFeature, value: bool) -> Self {
        self.values[feature.index()] = value;
        self
    }

    pub fn get(&self, feature: SubjectFeature) -> bool {
        self.values[feature.index()]
    }

    fn set(&mut self, referent: Referent, cue: Cue) {
        self.values[SubjectFeature::of(referent, cue).index()] = true;
    }

    /// Any donor cue, tokens included.
    pub fn donor_or(&self) -> bool {
        self.get(SubjectFeature::DonorToken)
            || self.get(SubjectFeature::DonorDeppath)
            || self.get(SubjectFeature::DonorDepsrl)
            || self.get(SubjectFeature::DonorSrlarg)
    }

    /// Any syntactic family cue; a bare family token does not count.
    pub fn family_or(&self) -> bool {
        self.get(SubjectFeature::FamilyDeppath)
            || self.get(SubjectFeature::FamilyDepsrl)
            || self.get(SubjectFeature::FamilySrlarg)
    }

    /// Any syntactic in-law or step-relation cue.
    pub fn other_or(&self) -> bool {
        self.get(SubjectFeature::OtherDeppath)
            || self.get(SubjectFeature::OtherDepsrl)
            || self.get(SubjectFeature::OtherSrlarg)
    }

    /// The twelve features with each group's summary following its four members.
    pub fn labeled(&self) -> IndexMap<&'static str, bool> {
        let summaries = [
            ("donor_or", self.donor_or()),
            ("family_or", self.family_or()),
            ("other_or", self.other_or()),
        ];
        let mut labeled = IndexMap::with_capacity(15);
        for (group, summary) in SubjectFeature::ALL.chunks(4).zip(summaries) {
            for feature in group {
                labeled.insert(feature.name(), self.get(*feature));
            }
            labeled.insert(summary.0, summary.1);
        }
        labeled
    }
}

/// Collect donor/family/other cues around mention `id`.
///
/// Without a containing sentence every feature stays `false`.
pub fn extract_features(doc: &Document, id: MentionId) -> Result<SubjectFeatures> {
    let target = doc.mention(id)?.span;
    let mut features = SubjectFeatures::default();

    let Some(sentence) = containing_sentence(doc, target) else {
        warn!(mention = id.0, %target, "no containing sentence; subject defaults to patient");
        return Ok(features);
    };

    for argument in doc.semantic_arguments() {
        if !sentence.contains(&argument.span) || !lexicon::is_core_srl_argument(&argument.label) {
            continue;
        }
        let text = doc.covered_text(argument.span);
        for referent in Referent::ALL {
            if referent.matches(text) {
                features.set(referent, Cue::Srlarg);
            }
        }
    }

    let graph = doc.graph();
    let head = graph.head_node_for(target);
    if let Some(head) = head {
        for node in graph.path_to_top(head) {
            let text = doc.covered_text(graph.node(node).span);
            for referent in Referent::ALL {
                if referent.matches(text) {
                    features.set(referent, Cue::Deppath);
                }
            }
        }
    }

    for token in doc.tokens_within(sentence) {
        let text = doc.covered_text(token);
        for referent in Referent::ALL {
            if !referent.matches(text) {
                continue;
            }
            features.set(referent, Cue::Token);
            if one_removed(doc, graph.head_node_for(token), head) {
                features.set(referent, Cue::Depsrl);
            }
        }
    }

    debug!(mention = id.0, %target, features = ?features.labeled(), "subject features");
    Ok(features)
}

/// The cue and the mention meet at a node directly above one of them.
fn one_removed(doc: &Document, cue: Option<NodeId>, mention: Option<NodeId>) -> bool {
    let (Some(cue), Some(mention)) = (cue, mention) else {
        return false;
    };
    doc.graph()
        .path_between(cue, mention)
        .is_some_and(|path| path.is_one_removed())
}

/// Map the summaries onto a subject label; donor cues take precedence.
pub fn classify(features: &SubjectFeatures) -> Subject {
    match (features.donor_or(), features.family_or(), features.other_or()) {
        (true, true, _) => Subject::DonorFamilyMember,
        (true, false, _) => Subject::DonorOther,
        (false, false, true) => Subject::Other,
        (false, true, _) => Subject::FamilyMember,
        (false, false, false) => Subject::Patient,
    }
}
