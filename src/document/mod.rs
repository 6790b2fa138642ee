//! Validated per-document snapshot produced by the upstream pipeline stages.

mod attributes;
mod builder;
mod span;

pub use attributes::{MentionAttributes, Polarity, Status, Subject};
pub use builder::{ConllRow, DocumentBuilder};
pub use span::TextSpan;

use serde::{Deserialize, Serialize};

use crate::{
    dependency::{DependencyGraph, DependencyNode},
    error::{AssertionError, Result},
};

/// Coarse type of an identified annotation; only entities and events can subsume others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentionKind {
    #[default]
    Entity,
    Event,
    Other,
}

/// Index of a mention within its document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MentionId(pub usize);

/// Identified clinical concept mention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    pub span: TextSpan,
    #[serde(default)]
    pub kind: MentionKind,
    #[serde(default)]
    pub attributes: MentionAttributes,
}

impl Mention {
    pub fn new(span: TextSpan, kind: MentionKind) -> Self {
        Self {
            span,
            kind,
            attributes: MentionAttributes::default(),
        }
    }

    pub fn can_subsume(&self) -> bool {
        matches!(self.kind, MentionKind::Entity | MentionKind::Event)
    }
}

/// Semantic role labelling argument (`A0`, `A1`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticArgument {
    pub span: TextSpan,
    pub label: String,
}

/// Wire shape of a document; converted into [`Document`] through validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    pub text: String,
    #[serde(default)]
    pub sentences: Vec<TextSpan>,
    #[serde(default)]
    pub chunks: Vec<TextSpan>,
    #[serde(default)]
    pub tokens: Vec<TextSpan>,
    #[serde(default)]
    pub mentions: Vec<Mention>,
    #[serde(default)]
    pub dependency_nodes: Vec<DependencyNode>,
    #[serde(default)]
    pub semantic_arguments: Vec<SemanticArgument>,
}

/// A document whose spans lie inside its text and whose dependency heads form trees.
///
/// Sentences, chunks, and tokens are kept sorted by `(begin, end)`; mentions keep their
/// input order so that [`MentionId`]s stay stable across a round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "DocumentSnapshot", into = "DocumentSnapshot")]
pub struct Document {
    text: String,
    sentences: Vec<TextSpan>,
    chunks: Vec<TextSpan>,
    tokens: Vec<TextSpan>,
    mentions: Vec<Mention>,
    graph: DependencyGraph,
    semantic_arguments: Vec<SemanticArgument>,
}

impl TryFrom<DocumentSnapshot> for Document {
    type Error = AssertionError;

    fn try_from(snapshot: DocumentSnapshot) -> Result<Self> {
        let DocumentSnapshot {
            text,
            mut sentences,
            mut chunks,
            mut tokens,
            mentions,
            dependency_nodes,
            semantic_arguments,
        } = snapshot;

        let spans = sentences
            .iter()
            .chain(&chunks)
            .chain(&tokens)
            .chain(mentions.iter().map(|m| &m.span))
            .chain(dependency_nodes.iter().map(|n| &n.span))
            .chain(semantic_arguments.iter().map(|a| &a.span));
        for span in spans {
            if text.get(span.begin()..span.end()).is_none() {
                return Err(AssertionError::SpanOutOfBounds {
                    begin: span.begin(),
                    end: span.end(),
                    len: text.len(),
                });
            }
        }

        sentences.sort();
        chunks.sort();
        tokens.sort();
        tokens.dedup();
        let graph = DependencyGraph::new(dependency_nodes)?;

        Ok(Self {
            text,
            sentences,
            chunks,
            tokens,
            mentions,
            graph,
            semantic_arguments,
        })
    }
}

impl From<Document> for DocumentSnapshot {
    fn from(doc: Document) -> Self {
        Self {
            text: doc.text,
            sentences: doc.sentences,
            chunks: doc.chunks,
            tokens: doc.tokens,
            mentions: doc.mentions,
            dependency_nodes: doc.graph.into_nodes(),
            semantic_arguments: doc.semantic_arguments,
        }
    }
}

impl Document {
    /// Parse and validate a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn builder(text: impl Into<String>) -> DocumentBuilder {
        DocumentBuilder::new(text)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text under `span`; empty if the span does not fall on character boundaries.
    pub fn covered_text(&self, span: TextSpan) -> &str {
        self.text.get(span.begin()..span.end()).unwrap_or_default()
    }

    pub fn sentences(&self) -> &[TextSpan] {
        &self.sentences
    }

    pub fn chunks(&self) -> &[TextSpan] {
        &self.chunks
    }

    pub fn tokens(&self) -> &[TextSpan] {
        &self.tokens
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    pub fn semantic_arguments(&self) -> &[SemanticArgument] {
        &self.semantic_arguments
    }

    pub fn mentions(&self) -> impl Iterator<Item = (MentionId, &Mention)> + '_ {
        self.mentions
            .iter()
            .enumerate()
            .map(|(idx, mention)| (MentionId(idx), mention))
    }

    pub fn mention_ids(&self) -> impl Iterator<Item = MentionId> {
        (0..self.mentions.len()).map(MentionId)
    }

    pub fn mention(&self, id: MentionId) -> Result<&Mention> {
        self.mentions
            .get(id.0)
            .ok_or(AssertionError::UnknownMention(id.0))
    }

    pub fn mention_mut(&mut self, id: MentionId) -> Result<&mut Mention> {
        self.mentions
            .get_mut(id.0)
            .ok_or(AssertionError::UnknownMention(id.0))
    }

    /// Tokens lying inside `span`, in document order.
    pub fn tokens_within(&self, span: TextSpan) -> impl Iterator<Item = TextSpan> + '_ {
        self.tokens
            .iter()
            .copied()
            .filter(move |token| span.contains(token))
    }
}
