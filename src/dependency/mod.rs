//! Read-only access to the per-sentence dependency trees of a document.

mod path;

pub use path::{DependencyPath, PathToTop};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    context::lexicon,
    document::TextSpan,
    error::{AssertionError, Result},
};

/// Arena index of a node within its document's graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

/// Token-level node of a dependency parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyNode {
    /// CoNLL index within the sentence; 0 marks the sentence root.
    pub id: usize,
    pub span: TextSpan,
    pub deprel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<NodeId>,
}

impl DependencyNode {
    pub fn new(id: usize, span: TextSpan, deprel: impl Into<String>) -> Self {
        Self {
            id,
            span,
            deprel: deprel.into(),
            postag: None,
            head: None,
        }
    }

    /// Root node covering a whole sentence.
    pub fn root(sentence: TextSpan) -> Self {
        Self::new(0, sentence, "ROOT")
    }

    pub fn with_postag(mut self, postag: impl Into<String>) -> Self {
        self.postag = Some(postag.into());
        self
    }

    pub fn with_head(mut self, head: NodeId) -> Self {
        self.head = Some(head);
        self
    }

    pub fn is_root(&self) -> bool {
        self.id == 0
    }

    fn is_nominal(&self) -> bool {
        self.postag.as_deref().is_some_and(lexicon::is_noun_postag)
    }
}

/// All dependency nodes of a document; heads are validated to form trees.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: Vec<DependencyNode>,
}

impl DependencyGraph {
    /// Validate head pointers and reject cycles.
    pub fn new(nodes: Vec<DependencyNode>) -> Result<Self> {
        for (idx, node) in nodes.iter().enumerate() {
            if let Some(head) = node.head {
                if head.0 >= nodes.len() {
                    return Err(AssertionError::DanglingHead {
                        node: idx,
                        head: head.0,
                    });
                }
            }
        }
        for start in 0..nodes.len() {
            let mut current = nodes[start].head;
            let mut steps = 0;
            while let Some(head) = current {
                steps += 1;
                if head.0 == start || steps > nodes.len() {
                    return Err(AssertionError::CyclicHead(start));
                }
                current = nodes[head.0].head;
            }
        }
        Ok(Self { nodes })
    }

    pub fn into_nodes(self) -> Vec<DependencyNode> {
        self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &DependencyNode {
        &self.nodes[id.0]
    }

    pub fn head_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].head
    }

    /// Nodes whose spans lie entirely inside `span`, in arena order.
    pub fn nodes_covered_by(&self, span: TextSpan) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| span.contains(&node.span))
            .map(|(idx, _)| NodeId(idx))
            .collect()
    }

    /// Head node among a set of nodes, biased toward nouns.
    ///
    /// Candidates head some other node of the set while their own head lies outside it.
    /// The leftmost nominal candidate wins, else the rightmost candidate. Unheaded sets
    /// fall back to the leftmost noun, else the rightmost node. Roots are ignored.
    pub fn nominal_head(&self, nodes: &[NodeId]) -> Option<NodeId> {
        let nodes: Vec<NodeId> = nodes
            .iter()
            .copied()
            .filter(|id| !self.node(*id).is_root())
            .collect();

        let candidates: Vec<NodeId> = nodes
            .iter()
            .copied()
            .filter(|&candidate| {
                let heads_other = nodes
                    .iter()
                    .any(|&other| other != candidate && self.head_of(other) == Some(candidate));
                let headed_inside = self
                    .head_of(candidate)
                    .is_some_and(|head| head != candidate && nodes.contains(&head));
                heads_other && !headed_inside
            })
            .collect();

        let pool = if candidates.is_empty() {
            &nodes
        } else {
            &candidates
        };
        pool.iter()
            .copied()
            .find(|id| self.node(*id).is_nominal())
            .or_else(|| pool.last().copied())
    }

    /// Nominal head of whatever nodes `span` covers; `None` without dependency coverage.
    pub fn head_node_for(&self, span: TextSpan) -> Option<NodeId> {
        let covered = self.nodes_covered_by(span);
        let head = self.nominal_head(&covered);
        trace!(%span, covered = covered.len(), ?head, "resolved head node");
        head
    }

    /// Both nodes present and covering exactly the same text.
    pub fn equal_coverage(&self, a: Option<NodeId>, b: Option<NodeId>) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => self.node(a).span == self.node(b).span,
            _ => false,
        }
    }

    /// Lazy walk from `node` up to its sentence root, `node` included.
    pub fn path_to_top(&self, node: NodeId) -> PathToTop<'_> {
        PathToTop::new(self, node)
    }

    /// Path from `from` up to the first ancestor shared with `to`, then down to `to`.
    pub fn path_between(&self, from: NodeId, to: NodeId) -> Option<DependencyPath> {
        DependencyPath::between(self, from, to)
    }
}
