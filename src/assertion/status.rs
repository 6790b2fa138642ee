//! Status and negation decisions from indicators found in token scopes.

use tracing::debug;

use crate::{
    context::{
        containing_sentence,
        window::{left_scope, middle_scope, right_scope},
        ContextScope,
    },
    document::{Document, MentionId, Polarity, Status, TextSpan},
    error::Result,
    fsm::{Indicator, IndicatorKind, IndicatorStrategy, WindowToken},
};

/// Scope sizes and the order scopes are consulted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeWindow {
    pub left: usize,
    pub right: usize,
    pub order: Vec<ContextScope>,
}

/// Tokens of one scope plus where the mention sits among them.
///
/// `before` tokens precede the mention and `inside` tokens lie within it; the rest follow.
struct ScopeTokens<'d> {
    tokens: Vec<WindowToken<'d>>,
    before: usize,
    inside: usize,
}

impl ScopeTokens<'_> {
    /// Token distance between an indicator and the mention; 0 when they touch or overlap.
    fn distance(&self, indicator: &Indicator) -> usize {
        let after = self.before + self.inside;
        if indicator.last < self.before {
            self.before - 1 - indicator.last
        } else if indicator.first >= after {
            indicator.first - after
        } else {
            0
        }
    }
}

fn gather<'d>(
    doc: &'d Document,
    sentence: Option<TextSpan>,
    target: TextSpan,
    scope: ContextScope,
    window: &ScopeWindow,
    strategy: &IndicatorStrategy,
) -> ScopeTokens<'d> {
    let boundary = |text: &str| strategy.is_boundary(text);
    let left = |sentence| left_scope(doc, sentence, target, window.left, boundary);
    let right = |sentence| right_scope(doc, sentence, target, window.right, boundary);

    let (before, inside, after) = match (scope, sentence) {
        (ContextScope::Middle, _) => (Vec::new(), middle_scope(doc, target), Vec::new()),
        (_, None) => (Vec::new(), Vec::new(), Vec::new()),
        (ContextScope::Left, Some(sentence)) => (left(sentence), Vec::new(), Vec::new()),
        (ContextScope::Right, Some(sentence)) => (Vec::new(), Vec::new(), right(sentence)),
        (ContextScope::All, Some(sentence)) => {
            (left(sentence), middle_scope(doc, target), right(sentence))
        }
    };

    let (before_len, inside_len) = (before.len(), inside.len());
    let tokens = before
        .into_iter()
        .chain(inside)
        .chain(after)
        .map(|span| WindowToken {
            span,
            text: doc.covered_text(span),
        })
        .collect();
    ScopeTokens {
        tokens,
        before: before_len,
        inside: inside_len,
    }
}

fn status_of(kind: IndicatorKind) -> Option<Status> {
    match kind {
        IndicatorKind::HistoryOf => Some(Status::HistoryOf),
        IndicatorKind::FamilyHistoryOf => Some(Status::FamilyHistoryOf),
        IndicatorKind::Probable => Some(Status::Probable),
        IndicatorKind::Negation => None,
    }
}

/// Pick one status from the indicators of a single scope.
///
/// Family history outranks everything; otherwise the indicator closest to the mention
/// wins, ties going to the leftmost.
fn decide_scope(scope: &ScopeTokens<'_>, indicators: &[Indicator]) -> Option<Status> {
    let candidates = indicators
        .iter()
        .filter_map(|indicator| status_of(indicator.kind).map(|status| (indicator, status)));

    if let Some((_, status)) = candidates
        .clone()
        .find(|(_, status)| *status == Status::FamilyHistoryOf)
    {
        return Some(status);
    }
    candidates
        .min_by_key(|(indicator, _)| (scope.distance(indicator), indicator.first))
        .map(|(_, status)| status)
}

/// Status of mention `id`; the first scope with a hit decides, except that a later
/// family-history hit replaces an earlier history-of.
pub fn detect_status(
    doc: &Document,
    id: MentionId,
    strategy: &IndicatorStrategy,
    window: &ScopeWindow,
) -> Result<Option<Status>> {
    let target = doc.mention(id)?.span;
    let sentence = containing_sentence(doc, target);

    let mut decided = None;
    for &scope in &window.order {
        let tokens = gather(doc, sentence, target, scope, window, strategy);
        let indicators = strategy.detect(&tokens.tokens);
        let Some(found) = decide_scope(&tokens, &indicators) else {
            continue;
        };
        debug!(mention = id.0, %scope, status = ?found, "status indicator");
        decided = match decided {
            None => Some(found),
            Some(Status::HistoryOf) if found == Status::FamilyHistoryOf => Some(found),
            kept => kept,
        };
    }
    Ok(decided)
}

/// `Negated` when any configured scope holds a negation indicator.
pub fn detect_polarity(
    doc: &Document,
    id: MentionId,
    strategy: &IndicatorStrategy,
    window: &ScopeWindow,
) -> Result<Polarity> {
    let target = doc.mention(id)?.span;
    let sentence = containing_sentence(doc, target);

    for &scope in &window.order {
        let tokens = gather(doc, sentence, target, scope, window, strategy);
        let hit = strategy
            .detect(&tokens.tokens)
            .into_iter()
            .find(|indicator| indicator.kind == IndicatorKind::Negation);
        if let Some(indicator) = hit {
            debug!(mention = id.0, %scope, cue = %indicator.span, "negation indicator");
            return Ok(Polarity::Negated);
        }
    }
    Ok(Polarity::Affirmed)
}
