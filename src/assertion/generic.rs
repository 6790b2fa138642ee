//! Generic-concept features and the rule that votes over them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    context::{containing_sentence, lexicon, neighbor_window, window::other_mentions},
    dependency::{DependencyGraph, NodeId},
    document::{Document, MentionId, TextSpan},
    error::Result,
};

/// Closed set of features consulted by the generic rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenericFeature {
    /// Head node modifies a larger noun phrase.
    PostcoordNmod,
    /// Head path passes through a discussion verb.
    DiscussionDeppath,
    /// A neighbouring chunk covers the mention.
    OtherToken,
    /// A neighbouring entity or event mention covers the mention.
    OtherDeppath,
}

impl GenericFeature {
    pub const ALL: [GenericFeature; 4] = [
        GenericFeature::PostcoordNmod,
        GenericFeature::DiscussionDeppath,
        GenericFeature::OtherToken,
        GenericFeature::OtherDeppath,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::PostcoordNmod => "postcoord_nmod",
            Self::DiscussionDeppath => "discussion_deppath",
            Self::OtherToken => "other_token",
            Self::OtherDeppath => "other_deppath",
        }
    }
}

/// Feature values for one mention. Every feature defaults to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericFeatures {
    postcoord_nmod: bool,
    discussion_deppath: bool,
    other_token: bool,
    other_deppath: bool,
}

impl GenericFeatures {
    /// Copy of `self` with `feature` set to `value`.
    pub fn with(mut self, feature: GenericFeature, value: bool) -> Self {
        let slot = match feature {
            GenericFeature::PostcoordNmod => &mut self.postcoord_nmod,
            GenericFeature::DiscussionDeppath => &mut self.discussion_deppath,
            GenericFeature::OtherToken => &mut self.other_token,
            GenericFeature::OtherDeppath => &mut self.other_deppath,
        };
        *slot = value;
        self
    }

    pub fn get(&self, feature: GenericFeature) -> bool {
        match feature {
            GenericFeature::PostcoordNmod => self.postcoord_nmod,
            GenericFeature::DiscussionDeppath => self.discussion_deppath,
            GenericFeature::OtherToken => self.other_token,
            GenericFeature::OtherDeppath => self.other_deppath,
        }
    }

    /// `(name, value)` pairs in [`GenericFeature::ALL`] order.
    pub fn labeled(&self) -> IndexMap<&'static str, bool> {
        GenericFeature::ALL
            .iter()
            .map(|feature| (feature.name(), self.get(*feature)))
            .collect()
    }
}

/// Compute the generic features of mention `id`.
///
/// `window` is the number of preceding and following neighbours checked for subsumption.
pub fn extract_features(doc: &Document, id: MentionId, window: usize) -> Result<GenericFeatures> {
    let target = doc.mention(id)?.span;
    let graph = doc.graph();
    let head = graph.head_node_for(target);

    let mut features = GenericFeatures::default();

    if containing_sentence(doc, target).is_some() {
        features.other_deppath = subsumed_by_mention(doc, id, target, head, window);
        features.other_token = subsumed_by_chunk(doc, target, head, window);
    } else {
        debug!(%target, "no containing sentence; subsumption features skipped");
    }

    if let Some(head) = head {
        features.postcoord_nmod = lexicon::is_modifier_deprel(&graph.node(head).deprel);
        features.discussion_deppath = graph
            .path_to_top(head)
            .any(|node| lexicon::is_discussion_context(doc.covered_text(graph.node(node).span)));
    }

    debug!(
        mention = id.0,
        %target,
        postcoord_nmod = features.postcoord_nmod,
        discussion_deppath = features.discussion_deppath,
        other_token = features.other_token,
        other_deppath = features.other_deppath,
        "generic features"
    );
    Ok(features)
}

/// Generic rule: a discussion context, or at least one subsumption vote.
///
/// Chunk subsumption (`other_token`) is reported but does not vote.
pub fn classify(features: &GenericFeatures) -> bool {
    let subsume_count =
        usize::from(features.other_deppath) + usize::from(features.postcoord_nmod);
    features.discussion_deppath || subsume_count > 0
}

fn subsumed_by_mention(
    doc: &Document,
    id: MentionId,
    target: TextSpan,
    head: Option<NodeId>,
    window: usize,
) -> bool {
    let others = other_mentions(doc, id);
    let graph = doc.graph();
    for candidate in neighbor_window(&others, |m| m.span, target, window) {
        if candidate.span.begin() > target.begin() {
            break;
        }
        if candidate.span.end() < target.end() || !candidate.can_subsume() {
            continue;
        }
        if !graph.equal_coverage(graph.head_node_for(candidate.span), head) {
            debug!(%target, subsumer = %candidate.span, "mention subsumed");
            return true;
        }
    }
    false
}

fn subsumed_by_chunk(
    doc: &Document,
    target: TextSpan,
    head: Option<NodeId>,
    window: usize,
) -> bool {
    let graph: &DependencyGraph = doc.graph();
    let mut subsumed = false;
    for chunk in neighbor_window(doc.chunks(), |c| *c, target, window) {
        if chunk.begin() > target.begin() || chunk.end() < target.end() {
            continue;
        }
        if !graph.equal_coverage(graph.head_node_for(*chunk), head) {
            subsumed = true;
        }
    }
    subsumed
}
