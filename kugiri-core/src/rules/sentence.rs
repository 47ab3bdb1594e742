//! Sentence boundary rules (SB3 through SB11)

use super::{BreakRules, Rule, Side, Verdict, View, Window};
use crate::decode::Scalar;
use crate::properties::{sentence_class, SentenceClass};

use SentenceClass::*;

/// Where the resolved history stands relative to a terminator run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TermPhase {
    /// Not inside `SATerm Close* Sp*`
    #[default]
    None,
    /// Right after the terminator
    Term,
    /// Inside the closing punctuation
    Close,
    /// Inside the trailing spaces
    Space,
}

/// State for sentence rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentenceState {
    pub phase: TermPhase,
    /// The run was opened by an ATerm rather than an STerm
    pub aterm: bool,
}

impl SentenceState {
    #[inline]
    fn in_term_run(&self) -> bool {
        self.phase != TermPhase::None
    }
}

type SentenceWindow<'a> = Window<'a, SentenceClass, SentenceState>;

fn after_upper_or_lower(window: &SentenceWindow<'_>) -> bool {
    matches!(window.left2(), Some(Upper | Lower))
}

// SB8: the next anchor class decides whether a lowercase word continues the sentence
fn lowercase_follows_aterm(window: &SentenceWindow<'_>) -> bool {
    let state = window.state();
    state.in_term_run() && state.aterm && window.anchor_ahead() == Some(Lower)
}

fn in_term_run(window: &SentenceWindow<'_>) -> bool {
    window.state().in_term_run()
}

fn before_spaces(window: &SentenceWindow<'_>) -> bool {
    matches!(window.state().phase, TermPhase::Term | TermPhase::Close)
}

const PARA_SEP: &[SentenceClass] = &[Sep, CR, LF];

static RULES: &[Rule<SentenceClass, SentenceState>] = &[
    Rule::new("SB3", View::Raw, Side::OneOf(&[CR]), Side::OneOf(&[LF]), Verdict::Keep),
    Rule::new("SB4", View::Raw, Side::OneOf(PARA_SEP), Side::Any, Verdict::Break),
    Rule::new("SB5", View::Raw, Side::Any, Side::OneOf(&[Format, Extend]), Verdict::Keep),
    Rule::new(
        "SB6",
        View::Resolved,
        Side::OneOf(&[ATerm]),
        Side::OneOf(&[Numeric]),
        Verdict::Keep,
    ),
    Rule::guarded(
        "SB7",
        View::Resolved,
        Side::OneOf(&[ATerm]),
        Side::OneOf(&[Upper]),
        after_upper_or_lower,
        Verdict::Keep,
    ),
    Rule::guarded(
        "SB8",
        View::Resolved,
        Side::Any,
        Side::Any,
        lowercase_follows_aterm,
        Verdict::Keep,
    ),
    Rule::guarded(
        "SB8a",
        View::Resolved,
        Side::Any,
        Side::OneOf(&[SContinue, ATerm, STerm]),
        in_term_run,
        Verdict::Keep,
    ),
    Rule::guarded(
        "SB9",
        View::Resolved,
        Side::Any,
        Side::OneOf(&[Close, Sp, Sep, CR, LF]),
        before_spaces,
        Verdict::Keep,
    ),
    Rule::guarded(
        "SB10",
        View::Resolved,
        Side::Any,
        Side::OneOf(&[Sp, Sep, CR, LF]),
        in_term_run,
        Verdict::Keep,
    ),
    Rule::guarded(
        "SB11",
        View::Resolved,
        Side::Any,
        Side::Any,
        in_term_run,
        Verdict::Break,
    ),
];

/// Sentence boundary rule set
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceRules;

impl BreakRules for SentenceRules {
    type Class = SentenceClass;
    type State = SentenceState;

    fn classify(scalar: &Scalar) -> SentenceClass {
        sentence_class(scalar.value)
    }

    fn rules() -> &'static [Rule<SentenceClass, SentenceState>] {
        RULES
    }

    // SB998
    fn fallback() -> Verdict {
        Verdict::Keep
    }

    fn is_transparent(class: SentenceClass) -> bool {
        matches!(class, Extend | Format)
    }

    fn is_hard(class: SentenceClass) -> bool {
        class.is_para_sep()
    }

    fn is_anchor(class: SentenceClass) -> bool {
        matches!(
            class,
            OLetter | Upper | Lower | Sep | CR | LF | ATerm | STerm
        )
    }

    fn advance(state: SentenceState, class: SentenceClass) -> SentenceState {
        match class {
            ATerm | STerm => SentenceState {
                phase: TermPhase::Term,
                aterm: class == ATerm,
            },
            Close if matches!(state.phase, TermPhase::Term | TermPhase::Close) => SentenceState {
                phase: TermPhase::Close,
                ..state
            },
            Sp if state.in_term_run() => SentenceState {
                phase: TermPhase::Space,
                ..state
            },
            _ => SentenceState::default(),
        }
    }
}
