//! Boundary rule tables and the scanner that evaluates them
//!
//! Each granularity is described by a [`BreakRules`] implementation: a
//! classifier from scalars to break classes, an ordered table of rules and
//! a small state machine for the rules that need more context than the
//! window offers (regional indicator parity, emoji ZWJ sequences, sentence
//! terminator runs). A single generic [`scan`] walks any of them.

pub mod grapheme;
pub mod scanner;
pub mod sentence;
pub mod window;
pub mod word;

use core::fmt::Debug;

use crate::decode::Scalar;

pub use grapheme::GraphemeRules;
pub use scanner::{scan, Scan};
pub use sentence::SentenceRules;
pub use window::{History, Window};
pub use word::WordRules;

/// Outcome of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Boundary between the two scalars
    Break,
    /// No boundary
    Keep,
}

/// Which classes a rule compares against its sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The immediate neighbours of the position
    Raw,
    /// The nearest classes that were not absorbed
    Resolved,
}

/// Class constraint for one side of a rule
#[derive(Debug, Clone, Copy)]
pub enum Side<C: 'static> {
    Any,
    OneOf(&'static [C]),
    NoneOf(&'static [C]),
}

impl<C: Copy + PartialEq + 'static> Side<C> {
    /// Whether `class` satisfies this side; `None` is start or end of text
    pub fn matches(&self, class: Option<C>) -> bool {
        match self {
            Side::Any => true,
            Side::OneOf(set) => class.map_or(false, |class| set.contains(&class)),
            Side::NoneOf(set) => class.map_or(true, |class| !set.contains(&class)),
        }
    }
}

/// Extra condition on the window beyond the two sides
pub type Guard<C, S> = fn(&Window<'_, C, S>) -> bool;

/// One line of a rule table
#[derive(Clone, Copy)]
pub struct Rule<C: 'static, S: 'static> {
    /// Rule identifier, e.g. `"WB6"`
    pub id: &'static str,
    pub view: View,
    pub left: Side<C>,
    pub right: Side<C>,
    pub guard: Option<Guard<C, S>>,
    pub verdict: Verdict,
}

impl<C: Copy + PartialEq + 'static, S: Copy + 'static> Rule<C, S> {
    /// A rule decided by its two sides alone
    pub const fn new(
        id: &'static str,
        view: View,
        left: Side<C>,
        right: Side<C>,
        verdict: Verdict,
    ) -> Self {
        Self {
            id,
            view,
            left,
            right,
            guard: None,
            verdict,
        }
    }

    /// A rule that also needs its guard to hold
    pub const fn guarded(
        id: &'static str,
        view: View,
        left: Side<C>,
        right: Side<C>,
        guard: Guard<C, S>,
        verdict: Verdict,
    ) -> Self {
        Self {
            id,
            view,
            left,
            right,
            guard: Some(guard),
            verdict,
        }
    }

    /// Whether this rule fires at the window's position
    pub fn applies(&self, window: &Window<'_, C, S>) -> bool {
        let (left, right) = match self.view {
            View::Raw => (window.left_raw(), window.right_raw()),
            View::Resolved => (window.left(), window.right()),
        };
        self.left.matches(left)
            && self.right.matches(right)
            && self.guard.map_or(true, |guard| guard(window))
    }
}

impl<C: Debug + 'static, S: 'static> Debug for Rule<C, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("view", &self.view)
            .field("left", &self.left)
            .field("right", &self.right)
            .field("guarded", &self.guard.is_some())
            .field("verdict", &self.verdict)
            .finish()
    }
}

/// Break rules for one granularity
pub trait BreakRules {
    /// Break property value of a scalar
    type Class: Copy + PartialEq + Eq + Debug + 'static;
    /// State carried across resolved classes
    type State: Copy + Default + Debug + 'static;

    /// Classify one decoded scalar
    fn classify(scalar: &Scalar) -> Self::Class;

    /// Ordered rules; the first one that applies decides
    fn rules() -> &'static [Rule<Self::Class, Self::State>];

    /// Verdict when no rule applies
    fn fallback() -> Verdict;

    /// Classes absorbed into the preceding resolved class
    fn is_transparent(_class: Self::Class) -> bool {
        false
    }

    /// Classes that refuse to absorb a following transparent class
    fn is_hard(_class: Self::Class) -> bool {
        false
    }

    /// Classes located by [`Window::anchor_ahead`]
    fn is_anchor(_class: Self::Class) -> bool {
        false
    }

    /// Fold a resolved class into the state
    fn advance(state: Self::State, class: Self::Class) -> Self::State;
}
