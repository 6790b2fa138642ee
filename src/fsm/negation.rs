//! Negation indicator machines.

use super::{Condition, IndicatorKind, Machine, StateKind};

const MODAL_VERBS: &[&str] = &[
    "can", "ca", "will", "must", "could", "would", "should", "shall", "did",
];

const NEGATIVE_PARTICLES: &[&str] = &["not", "n't", "'t"];

const COLLOCATION_PARTICLES: &[&str] = &["out"];

const NEGATIVE_COLLOCATIONS: &[&str] = &["rule", "rules", "ruled", "ruling", "rule-out"];

const REGULAR_VERBS: &[&str] = &[
    "reveal",
    "reveals",
    "revealed",
    "revealing",
    "have",
    "had",
    "has",
    "feel",
    "feels",
    "felt",
    "feeling",
    "complain",
    "complains",
    "complained",
    "complaining",
    "demonstrate",
    "demonstrates",
    "demonstrated",
    "demonstrating",
    "appear",
    "appears",
    "appeared",
    "appearing",
    "caused",
    "cause",
    "causing",
    "causes",
    "find",
    "finds",
    "found",
    "discover",
    "discovered",
    "discovers",
];

const NEGATIVE_VERBS: &[&str] = &[
    "deny",
    "denies",
    "denied",
    "denying",
    "fail",
    "fails",
    "failed",
    "failing",
    "decline",
    "declines",
    "declined",
    "declining",
    "exclude",
    "excludes",
    "excluding",
    "excluded",
];

const NEGATIVE_PREPOSITIONS: &[&str] = &["without", "absent", "none"];

const NEGATIVE_DETERMINERS: &[&str] = &["no", "any", "neither", "nor", "never"];

const INDICATOR_NOUNS: &[&str] = &[
    "evidence",
    "indication",
    "indications",
    "sign",
    "signs",
    "symptoms",
    "symptom",
    "sx",
    "dx",
    "diagnosis",
    "history",
    "hx",
    "findings",
];

const REGULAR_PREPOSITIONS: &[&str] = &["of", "in", "for", "with"];

const NEGATIVE_ADJECTIVES: &[&str] = &["unremarkable", "unlikely", "negative"];

/// Tokens that close a negation scope.
pub const BOUNDARIES: &[&str] = &[
    "but",
    "however",
    "nevertheless",
    "notwithstanding",
    "though",
    "although",
    "if",
    "when",
    "how",
    "what",
    "which",
    "while",
    "since",
    "then",
    "i",
    "he",
    "she",
    "they",
    "we",
    ";",
    ":",
    ".",
    ")",
];

fn negative_marker() -> Condition {
    Condition::either(
        Condition::OneOf(NEGATIVE_PARTICLES),
        Condition::OneOf(NEGATIVE_DETERMINERS),
    )
}

/// "did not", "has no", "denies", "ruled out": verbs and particles.
pub fn aspectual_machine() -> Machine {
    let mut m = Machine::builder("aspectual_negation");
    let start = m.state("START", StateKind::Idle);
    let regular_modal = m.state("REG_MODAL", StateKind::Matching);
    let any = m.state("ANY", StateKind::Matching);
    let negative_particle = m.state("NEG_PART", StateKind::Matching);
    let negative_verb = m.state("NEG_VERB", StateKind::Matching);
    let collocation = m.state("NEG_COLLOC", StateKind::Matching);
    let collocation_particle = m.state("NEG_COLPART", StateKind::Matching);
    let end = m.state("NON_TERMINAL_END", StateKind::FoundBefore);

    m.on(start, Condition::OneOf(NEGATIVE_VERBS), negative_verb)
        .on(start, Condition::OneOf(NEGATIVE_COLLOCATIONS), collocation)
        .on(
            start,
            Condition::either(
                Condition::OneOf(MODAL_VERBS),
                Condition::OneOf(REGULAR_VERBS),
            ),
            regular_modal,
        )
        .on(start, negative_marker(), negative_particle)
        .on(start, Condition::Any, start);

    m.on(regular_modal, Condition::OneOf(NEGATIVE_COLLOCATIONS), collocation)
        .on(regular_modal, negative_marker(), negative_particle)
        .on(regular_modal, Condition::Any, any);

    m.on(collocation, Condition::OneOf(COLLOCATION_PARTICLES), collocation_particle)
        .on(collocation, Condition::Any, start);
    m.on(collocation_particle, Condition::Any, end);

    m.on(any, negative_marker(), negative_particle)
        .on(any, Condition::Any, start);

    let not_collocation = || Condition::not(Condition::OneOf(NEGATIVE_COLLOCATIONS));
    m.on(negative_particle, not_collocation(), end)
        .on(negative_particle, Condition::Any, start);
    m.on(negative_verb, not_collocation(), end)
        .on(negative_verb, Condition::Any, start);

    m.build()
}

/// "without", "no", "no evidence": prepositions and determiners, optionally with a noun.
pub fn nominal_machine() -> Machine {
    let mut m = Machine::builder("nominal_negation");
    let start = m.state("START", StateKind::Idle);
    let negative_preposition = m.state("NEG_PREP", StateKind::Matching);
    let negative_determiner = m.state("NEG_DET", StateKind::Matching);
    let indicator_noun = m.state("REG_NOUN", StateKind::Matching);
    let end = m.state("NON_TERMINAL_END", StateKind::FoundBefore);

    m.on(start, Condition::OneOf(NEGATIVE_DETERMINERS), negative_determiner)
        .on(start, Condition::OneOf(NEGATIVE_PREPOSITIONS), negative_preposition)
        .on(start, Condition::Any, start);

    m.on(negative_preposition, Condition::Any, end);
    m.on(negative_determiner, Condition::OneOf(INDICATOR_NOUNS), indicator_noun)
        .on(negative_determiner, Condition::Any, end);
    m.on(indicator_noun, Condition::Any, end);

    m.build()
}

/// "unremarkable for", "negative for": a negative adjective and a preposition.
pub fn adjectival_machine() -> Machine {
    let mut m = Machine::builder("adjectival_negation");
    let start = m.state("START", StateKind::Idle);
    let negative_adjective = m.state("NEG_ADJ", StateKind::Matching);
    let preposition = m.state("REG_PREP", StateKind::Matching);
    let end = m.state("NON_TERMINAL_END", StateKind::FoundBefore);

    m.on(start, Condition::OneOf(NEGATIVE_ADJECTIVES), negative_adjective)
        .on(start, Condition::Any, start);
    m.on(negative_adjective, Condition::OneOf(REGULAR_PREPOSITIONS), preposition)
        .on(negative_adjective, Condition::Any, start);
    m.on(preposition, Condition::Any, end);

    m.build()
}

pub fn machines() -> Vec<(Machine, IndicatorKind)> {
    vec![
        (aspectual_machine(), IndicatorKind::Negation),
        (nominal_machine(), IndicatorKind::Negation),
        (adjectival_machine(), IndicatorKind::Negation),
    ]
}
