//! Token-window state machines for status and negation indicators.
//!
//! A [`Machine`] is a table of named states, each with an ordered list of transitions.
//! The first transition whose [`Condition`] accepts the incoming token fires; when none
//! does the machine stays put. Machines are immutable values; every run keeps its own
//! cursor, so one machine can serve concurrent documents.

pub mod negation;
mod registry;
pub mod status;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::document::TextSpan;

pub use registry::{IndicatorStrategy, StrategyKind};

/// Role of a state in the indicator search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    /// Waiting for a trigger; the machine's first idle state is its start state.
    Idle,
    /// Part of a trigger phrase has been seen.
    Matching,
    /// Indicator found, ending at the current token.
    Found,
    /// Indicator found, ending at the token before the current one.
    FoundBefore,
}

/// Token test driving a transition. Text comparisons ignore ASCII case.
#[derive(Debug, Clone)]
pub enum Condition {
    Any,
    Text(&'static str),
    OneOf(&'static [&'static str]),
    Not(Box<Condition>),
    Either(Box<Condition>, Box<Condition>),
}

impl Condition {
    pub fn not(inner: Condition) -> Self {
        Self::Not(Box::new(inner))
    }

    pub fn either(left: Condition, right: Condition) -> Self {
        Self::Either(Box::new(left), Box::new(right))
    }

    pub fn accepts(&self, token: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Text(expected) => token.eq_ignore_ascii_case(expected),
            Self::OneOf(set) => set.iter().any(|word| token.eq_ignore_ascii_case(word)),
            Self::Not(inner) => !inner.accepts(token),
            Self::Either(left, right) => left.accepts(token) || right.accepts(token),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateId(usize);

#[derive(Debug, Clone)]
struct State {
    name: &'static str,
    kind: StateKind,
    transitions: Vec<(Condition, StateId)>,
}

/// Immutable transition table.
#[derive(Debug, Clone)]
pub struct Machine {
    name: &'static str,
    start: StateId,
    states: Vec<State>,
}

impl Machine {
    pub fn builder(name: &'static str) -> MachineBuilder {
        MachineBuilder {
            name,
            states: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn kind(&self, state: StateId) -> StateKind {
        self.states[state.0].kind
    }

    fn step(&self, state: StateId, token: &str) -> StateId {
        self.states[state.0]
            .transitions
            .iter()
            .find(|(condition, _)| condition.accepts(token))
            .map_or(state, |(_, target)| *target)
    }
}

#[derive(Debug)]
pub struct MachineBuilder {
    name: &'static str,
    states: Vec<State>,
}

impl MachineBuilder {
    pub fn state(&mut self, name: &'static str, kind: StateKind) -> StateId {
        self.states.push(State {
            name,
            kind,
            transitions: Vec::new(),
        });
        StateId(self.states.len() - 1)
    }

    pub fn on(&mut self, from: StateId, condition: Condition, to: StateId) -> &mut Self {
        self.states[from.0].transitions.push((condition, to));
        self
    }

    /// Finish the table. Panics if no idle state was declared, which is a programming
    /// error in the static machine definitions.
    pub fn build(self) -> Machine {
        let start = self
            .states
            .iter()
            .position(|state| state.kind == StateKind::Idle)
            .map(StateId)
            .expect("machine declares an idle start state");
        Machine {
            name: self.name,
            start,
            states: self.states,
        }
    }
}

/// What an indicator signals about the mention it scopes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Negation,
    HistoryOf,
    FamilyHistoryOf,
    Probable,
}

/// A token of the examined window.
#[derive(Debug, Clone, Copy)]
pub struct WindowToken<'a> {
    pub span: TextSpan,
    pub text: &'a str,
}

/// Matched trigger phrase; `first`/`last` index the window tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Indicator {
    pub first: usize,
    pub last: usize,
    pub kind: IndicatorKind,
    pub span: TextSpan,
}

struct Cursor<'m> {
    machine: &'m Machine,
    kind: IndicatorKind,
    state: StateId,
    last_idle: Option<usize>,
}

/// Feed `tokens` through every machine and collect the indicators they report.
///
/// An empty sentinel follows the last token so that phrases completed by "any following
/// token" still fire at the edge of the window; the sentinel never becomes part of an
/// indicator.
pub fn run(machines: &[(Machine, IndicatorKind)], tokens: &[WindowToken<'_>]) -> Vec<Indicator> {
    let mut cursors: Vec<Cursor<'_>> = machines
        .iter()
        .map(|(machine, kind)| Cursor {
            machine,
            kind: *kind,
            state: machine.start,
            last_idle: None,
        })
        .collect();

    let mut found = Vec::new();
    let inputs = tokens
        .iter()
        .map(|token| token.text)
        .chain(std::iter::once(""))
        .enumerate();
    for (idx, text) in inputs {
        for cursor in &mut cursors {
            cursor.state = cursor.machine.step(cursor.state, text);
            let last = match cursor.machine.kind(cursor.state) {
                StateKind::Idle => {
                    cursor.last_idle = Some(idx);
                    continue;
                }
                StateKind::Matching => continue,
                StateKind::Found => idx,
                StateKind::FoundBefore => match idx.checked_sub(1) {
                    Some(last) => last,
                    None => continue,
                },
            };
            let matched = cursor.state;
            cursor.state = cursor.machine.start;
            if last >= tokens.len() {
                continue;
            }
            let first = cursor.last_idle.map_or(0, |idle| idle + 1).min(last);
            let span = match TextSpan::new(tokens[first].span.begin(), tokens[last].span.end()) {
                Ok(span) => span,
                Err(_) => continue,
            };
            trace!(
                machine = cursor.machine.name,
                state = cursor.machine.states[matched.0].name,
                %span,
                "indicator found"
            );
            found.push(Indicator {
                first,
                last,
                kind: cursor.kind,
                span,
            });
        }
    }
    found.sort();
    found.dedup();
    found
}
