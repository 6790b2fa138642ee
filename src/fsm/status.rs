//! Status indicator machines: history of, family history of, probable.

use super::{Condition, IndicatorKind, Machine, StateKind};

const PROBABLE: &[&str] = &["possible", "possibly", "probable", "likely"];

const HISTORY: &[&str] = &["hx", "history"];

const FAMILY_HISTORY: &[&str] = &["fx", "fh"];

/// Tokens that close a status scope.
pub const BOUNDARIES: &[&str] = super::negation::BOUNDARIES;

pub fn probable_machine() -> Machine {
    let mut m = Machine::builder("probable");
    let start = m.state("START", StateKind::Idle);
    let end = m.state("END", StateKind::Found);

    m.on(start, Condition::OneOf(PROBABLE), end)
        .on(start, Condition::Any, start);

    m.build()
}

/// "history", "hx", or the split abbreviation "h / o".
pub fn history_machine() -> Machine {
    let mut m = Machine::builder("history_of");
    let start = m.state("START", StateKind::Idle);
    let abbreviation = m.state("HISTORY_ABBR", StateKind::Matching);
    let slash = m.state("FORWARD_SLASH", StateKind::Matching);
    let end = m.state("END", StateKind::Found);

    m.on(start, Condition::OneOf(HISTORY), end)
        .on(start, Condition::Text("h"), abbreviation)
        .on(start, Condition::Any, start);
    m.on(abbreviation, Condition::Text("/"), slash)
        .on(abbreviation, Condition::Any, start);
    m.on(slash, Condition::Text("o"), end)
        .on(slash, Condition::Any, start);

    m.build()
}

/// "fh", "fx", or "family history".
pub fn family_history_machine() -> Machine {
    let mut m = Machine::builder("family_history_of");
    let start = m.state("START", StateKind::Idle);
    let family = m.state("FAMILY", StateKind::Matching);
    let end = m.state("END", StateKind::Found);

    m.on(start, Condition::OneOf(FAMILY_HISTORY), end)
        .on(start, Condition::Text("family"), family)
        .on(start, Condition::Any, start);
    m.on(family, Condition::Text("history"), end)
        .on(family, Condition::Any, start);

    m.build()
}

pub fn machines() -> Vec<(Machine, IndicatorKind)> {
    vec![
        (history_machine(), IndicatorKind::HistoryOf),
        (probable_machine(), IndicatorKind::Probable),
        (family_history_machine(), IndicatorKind::FamilyHistoryOf),
    ]
}
