//! Programmatic construction of documents, mainly for embedding callers and tests.

use crate::{
    dependency::{DependencyNode, NodeId},
    error::{AssertionError, Result},
};

use super::{Document, DocumentSnapshot, Mention, MentionKind, SemanticArgument, TextSpan};

/// One CoNLL-style row of a parsed sentence: `(form, postag, head, deprel)`.
///
/// `head` uses CoNLL numbering: 0 is the sentence root, `n` is the n-th row.
pub type ConllRow<'a> = (&'a str, &'a str, usize, &'a str);

/// Accumulates spans and parse rows, deferring validation to [`DocumentBuilder::build`].
#[derive(Debug)]
pub struct DocumentBuilder {
    snapshot: DocumentSnapshot,
    deferred: Option<AssertionError>,
}

impl DocumentBuilder {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            snapshot: DocumentSnapshot {
                text: text.into(),
                ..DocumentSnapshot::default()
            },
            deferred: None,
        }
    }

    fn span(&mut self, begin: usize, end: usize) -> Option<TextSpan> {
        match TextSpan::new(begin, end) {
            Ok(span) => Some(span),
            Err(err) => {
                self.deferred.get_or_insert(err);
                None
            }
        }
    }

    pub fn sentence(mut self, begin: usize, end: usize) -> Self {
        if let Some(span) = self.span(begin, end) {
            self.snapshot.sentences.push(span);
        }
        self
    }

    pub fn chunk(mut self, begin: usize, end: usize) -> Self {
        if let Some(span) = self.span(begin, end) {
            self.snapshot.chunks.push(span);
        }
        self
    }

    pub fn token(mut self, begin: usize, end: usize) -> Self {
        if let Some(span) = self.span(begin, end) {
            self.snapshot.tokens.push(span);
        }
        self
    }

    pub fn mention(self, begin: usize, end: usize) -> Self {
        self.mention_of_kind(begin, end, MentionKind::Entity)
    }

    pub fn mention_of_kind(mut self, begin: usize, end: usize, kind: MentionKind) -> Self {
        if let Some(span) = self.span(begin, end) {
            self.snapshot.mentions.push(Mention::new(span, kind));
        }
        self
    }

    pub fn semantic_argument(mut self, begin: usize, end: usize, label: &str) -> Self {
        if let Some(span) = self.span(begin, end) {
            self.snapshot.semantic_arguments.push(SemanticArgument {
                span,
                label: label.to_string(),
            });
        }
        self
    }

    pub fn node(mut self, node: DependencyNode) -> Self {
        self.snapshot.dependency_nodes.push(node);
        self
    }

    /// Split the whole text into word and punctuation tokens.
    pub fn tokenize(mut self) -> Self {
        let text = self.snapshot.text.clone();
        let mut start = None;
        for (idx, ch) in text.char_indices() {
            let word_char = ch.is_alphanumeric() || ch == '\'' || ch == '-';
            match (word_char, start) {
                (true, None) => start = Some(idx),
                (true, Some(_)) => {}
                (false, Some(begin)) => {
                    self = self.token(begin, idx);
                    start = None;
                }
                (false, None) => {}
            }
            if !word_char && !ch.is_whitespace() {
                self = self.token(idx, idx + ch.len_utf8());
            }
        }
        if let Some(begin) = start {
            self = self.token(begin, text.len());
        }
        self
    }

    /// Add a sentence together with its tokens and dependency parse.
    ///
    /// Row forms are aligned left to right against the sentence text; a root node covering
    /// the whole sentence is created with CoNLL id 0.
    pub fn parsed_sentence(mut self, begin: usize, end: usize, rows: &[ConllRow<'_>]) -> Self {
        let Some(sentence) = self.span(begin, end) else {
            return self;
        };
        self.snapshot.sentences.push(sentence);

        let base = self.snapshot.dependency_nodes.len();
        self.snapshot
            .dependency_nodes
            .push(DependencyNode::root(sentence));

        let mut cursor = sentence.begin();
        for (position, &(form, postag, head, deprel)) in rows.iter().enumerate() {
            let found = self
                .snapshot
                .text
                .get(cursor..sentence.end())
                .and_then(|rest| rest.find(form));
            let Some(offset) = found else {
                self.deferred
                    .get_or_insert(AssertionError::UnalignedToken(form.to_string()));
                return self;
            };
            let token_begin = cursor + offset;
            let token_end = token_begin + form.len();
            cursor = token_end;
            let Some(span) = self.span(token_begin, token_end) else {
                return self;
            };
            self.snapshot.tokens.push(span);
            self.snapshot.dependency_nodes.push(
                DependencyNode::new(position + 1, span, deprel)
                    .with_postag(postag)
                    .with_head(NodeId(base + head)),
            );
        }
        self
    }

    pub fn build(self) -> Result<Document> {
        if let Some(err) = self.deferred {
            return Err(err);
        }
        Document::try_from(self.snapshot)
    }
}
