//! Extended grapheme cluster rules (GB3 through GB13, with GB9c)

use super::{BreakRules, Rule, Side, Verdict, View, Window};
use crate::decode::Scalar;
use crate::properties::{grapheme_class, GraphemeClass};

use GraphemeClass::*;

/// Progress through an `ExtPict Extend* ZWJ` sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmojiPhase {
    #[default]
    None,
    Pict,
    PictZwj,
}

/// Progress through `Consonant [Extend Linker]* Linker [Extend Linker]*`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConjunctPhase {
    #[default]
    None,
    Consonant,
    Linked,
}

/// State for grapheme rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphemeState {
    /// An odd number of regional indicators ends the history
    pub ri_odd: bool,
    pub emoji: EmojiPhase,
    pub conjunct: ConjunctPhase,
}

fn linked_conjunct(window: &Window<'_, GraphemeClass, GraphemeState>) -> bool {
    window.state().conjunct == ConjunctPhase::Linked
}

fn emoji_zwj_sequence(window: &Window<'_, GraphemeClass, GraphemeState>) -> bool {
    window.state().emoji == EmojiPhase::PictZwj
}

fn odd_regional_indicators(window: &Window<'_, GraphemeClass, GraphemeState>) -> bool {
    window.state().ri_odd
}

static RULES: &[Rule<GraphemeClass, GraphemeState>] = &[
    Rule::new("GB3", View::Raw, Side::OneOf(&[CR]), Side::OneOf(&[LF]), Verdict::Keep),
    Rule::new(
        "GB4",
        View::Raw,
        Side::OneOf(&[Control, CR, LF]),
        Side::Any,
        Verdict::Break,
    ),
    Rule::new(
        "GB5",
        View::Raw,
        Side::Any,
        Side::OneOf(&[Control, CR, LF]),
        Verdict::Break,
    ),
    Rule::new(
        "GB6",
        View::Raw,
        Side::OneOf(&[L]),
        Side::OneOf(&[L, V, LV, LVT]),
        Verdict::Keep,
    ),
    Rule::new(
        "GB7",
        View::Raw,
        Side::OneOf(&[LV, V]),
        Side::OneOf(&[V, T]),
        Verdict::Keep,
    ),
    Rule::new("GB8", View::Raw, Side::OneOf(&[LVT, T]), Side::OneOf(&[T]), Verdict::Keep),
    Rule::new(
        "GB9",
        View::Raw,
        Side::Any,
        Side::OneOf(&[Extend, ConjunctLinker, ZWJ]),
        Verdict::Keep,
    ),
    Rule::new("GB9a", View::Raw, Side::Any, Side::OneOf(&[SpacingMark]), Verdict::Keep),
    Rule::new("GB9b", View::Raw, Side::OneOf(&[Prepend]), Side::Any, Verdict::Keep),
    Rule::guarded(
        "GB9c",
        View::Raw,
        Side::OneOf(&[Extend, ConjunctLinker, ZWJ]),
        Side::OneOf(&[ConjunctConsonant]),
        linked_conjunct,
        Verdict::Keep,
    ),
    Rule::guarded(
        "GB11",
        View::Raw,
        Side::OneOf(&[ZWJ]),
        Side::OneOf(&[ExtendedPictographic]),
        emoji_zwj_sequence,
        Verdict::Keep,
    ),
    Rule::guarded(
        "GB12/13",
        View::Raw,
        Side::OneOf(&[RegionalIndicator]),
        Side::OneOf(&[RegionalIndicator]),
        odd_regional_indicators,
        Verdict::Keep,
    ),
];

/// Grapheme cluster rule set
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphemeRules;

impl BreakRules for GraphemeRules {
    type Class = GraphemeClass;
    type State = GraphemeState;

    fn classify(scalar: &Scalar) -> GraphemeClass {
        grapheme_class(scalar.value)
    }

    fn rules() -> &'static [Rule<GraphemeClass, GraphemeState>] {
        RULES
    }

    // GB999
    fn fallback() -> Verdict {
        Verdict::Break
    }

    fn advance(state: GraphemeState, class: GraphemeClass) -> GraphemeState {
        let emoji = match (class, state.emoji) {
            (ExtendedPictographic, _) => EmojiPhase::Pict,
            (ZWJ, EmojiPhase::Pict) => EmojiPhase::PictZwj,
            (class, EmojiPhase::Pict) if class.is_extend() => EmojiPhase::Pict,
            _ => EmojiPhase::None,
        };
        let conjunct = match (class, state.conjunct) {
            (ConjunctConsonant, _) => ConjunctPhase::Consonant,
            (_, ConjunctPhase::None) => ConjunctPhase::None,
            (ConjunctLinker, _) => ConjunctPhase::Linked,
            (Extend | ZWJ, phase) => phase,
            _ => ConjunctPhase::None,
        };
        GraphemeState {
            ri_odd: class == RegionalIndicator && !state.ri_odd,
            emoji,
            conjunct,
        }
    }
}
