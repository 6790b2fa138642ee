//! Bounded neighbourhoods around a mention.

use crate::document::{Document, Mention, MentionId, TextSpan};

/// First sentence (in document order) containing `span`.
pub fn containing_sentence(doc: &Document, span: TextSpan) -> Option<TextSpan> {
    doc.sentences()
        .iter()
        .copied()
        .find(|sentence| sentence.contains(&span))
}

/// Up to `size` items ordered before `target` and `size` ordered at or after it.
///
/// `sorted` must be ordered by span; the result stays in that order.
pub fn neighbor_window<T>(
    sorted: &[T],
    span_of: impl Fn(&T) -> TextSpan,
    target: TextSpan,
    size: usize,
) -> &[T] {
    let pivot = sorted.partition_point(|item| span_of(item) < target);
    let start = pivot.saturating_sub(size);
    let end = pivot.saturating_add(size).min(sorted.len());
    &sorted[start..end]
}

/// The other mentions of `doc` in `(begin, end)` order, excluding `target`.
pub fn other_mentions(doc: &Document, target: MentionId) -> Vec<&Mention> {
    let mut others: Vec<&Mention> = doc
        .mentions()
        .filter(|(id, _)| *id != target)
        .map(|(_, mention)| mention)
        .collect();
    others.sort_by_key(|mention| mention.span);
    others
}

/// Tokens to the left of `span` inside `sentence`, closest last, stopping at a boundary.
pub fn left_scope(
    doc: &Document,
    sentence: TextSpan,
    span: TextSpan,
    max: usize,
    is_boundary: impl Fn(&str) -> bool,
) -> Vec<TextSpan> {
    let mut scope: Vec<TextSpan> = doc
        .tokens_within(sentence)
        .filter(|token| token.end() <= span.begin())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .take_while(|token| !is_boundary(doc.covered_text(*token)))
        .take(max)
        .collect();
    scope.reverse();
    scope
}

/// Tokens to the right of `span` inside `sentence`, closest first, stopping at a boundary.
pub fn right_scope(
    doc: &Document,
    sentence: TextSpan,
    span: TextSpan,
    max: usize,
    is_boundary: impl Fn(&str) -> bool,
) -> Vec<TextSpan> {
    doc.tokens_within(sentence)
        .filter(|token| token.begin() >= span.end())
        .take_while(|token| !is_boundary(doc.covered_text(*token)))
        .take(max)
        .collect()
}

/// Tokens inside the mention itself.
pub fn middle_scope(doc: &Document, span: TextSpan) -> Vec<TextSpan> {
    doc.tokens_within(span).collect()
}
