//! Word boundary rules (WB3 through WB16)
//!
//! Hiragana, ideographs and complex-context letters have no rule keeping
//! them together, so without a run segmenter each of those scalars becomes
//! its own segment.

use super::{BreakRules, Rule, Side, Verdict, View, Window};
use crate::decode::Scalar;
use crate::properties::{word_class, WordClass};

use WordClass::*;

/// State for word rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordState {
    /// An odd number of regional indicators ends the resolved history
    pub ri_odd: bool,
}

type WordWindow<'a> = Window<'a, WordClass, WordState>;

fn right2_is_ah_letter(window: &WordWindow<'_>) -> bool {
    window.right2().map_or(false, WordClass::is_ah_letter)
}

fn left2_is_ah_letter(window: &WordWindow<'_>) -> bool {
    window.left2().map_or(false, WordClass::is_ah_letter)
}

fn right2_is_hebrew(window: &WordWindow<'_>) -> bool {
    window.right2() == Some(HebrewLetter)
}

fn left2_is_hebrew(window: &WordWindow<'_>) -> bool {
    window.left2() == Some(HebrewLetter)
}

fn right2_is_numeric(window: &WordWindow<'_>) -> bool {
    window.right2() == Some(Numeric)
}

fn left2_is_numeric(window: &WordWindow<'_>) -> bool {
    window.left2() == Some(Numeric)
}

fn odd_regional_indicators(window: &WordWindow<'_>) -> bool {
    window.state().ri_odd
}

const AH_LETTER: &[WordClass] = &[ALetter, HebrewLetter];
const MID_LETTER_Q: &[WordClass] = &[MidLetter, MidNumLet, SingleQuote];
const MID_NUM_Q: &[WordClass] = &[MidNum, MidNumLet, SingleQuote];
const LINE_BREAKS: &[WordClass] = &[Newline, CR, LF];

static RULES: &[Rule<WordClass, WordState>] = &[
    Rule::new("WB3", View::Raw, Side::OneOf(&[CR]), Side::OneOf(&[LF]), Verdict::Keep),
    Rule::new("WB3a", View::Raw, Side::OneOf(LINE_BREAKS), Side::Any, Verdict::Break),
    Rule::new("WB3b", View::Raw, Side::Any, Side::OneOf(LINE_BREAKS), Verdict::Break),
    Rule::new(
        "WB3c",
        View::Raw,
        Side::OneOf(&[ZWJ]),
        Side::OneOf(&[ExtendedPictographic]),
        Verdict::Keep,
    ),
    Rule::new(
        "WB3d",
        View::Raw,
        Side::OneOf(&[WSegSpace]),
        Side::OneOf(&[WSegSpace]),
        Verdict::Keep,
    ),
    Rule::new(
        "WB4",
        View::Raw,
        Side::Any,
        Side::OneOf(&[Format, Extend, ZWJ]),
        Verdict::Keep,
    ),
    Rule::new(
        "WB5",
        View::Resolved,
        Side::OneOf(AH_LETTER),
        Side::OneOf(AH_LETTER),
        Verdict::Keep,
    ),
    Rule::guarded(
        "WB6",
        View::Resolved,
        Side::OneOf(AH_LETTER),
        Side::OneOf(MID_LETTER_Q),
        right2_is_ah_letter,
        Verdict::Keep,
    ),
    Rule::guarded(
        "WB7",
        View::Resolved,
        Side::OneOf(MID_LETTER_Q),
        Side::OneOf(AH_LETTER),
        left2_is_ah_letter,
        Verdict::Keep,
    ),
    Rule::new(
        "WB7a",
        View::Resolved,
        Side::OneOf(&[HebrewLetter]),
        Side::OneOf(&[SingleQuote]),
        Verdict::Keep,
    ),
    Rule::guarded(
        "WB7b",
        View::Resolved,
        Side::OneOf(&[HebrewLetter]),
        Side::OneOf(&[DoubleQuote]),
        right2_is_hebrew,
        Verdict::Keep,
    ),
    Rule::guarded(
        "WB7c",
        View::Resolved,
        Side::OneOf(&[DoubleQuote]),
        Side::OneOf(&[HebrewLetter]),
        left2_is_hebrew,
        Verdict::Keep,
    ),
    Rule::new(
        "WB8",
        View::Resolved,
        Side::OneOf(&[Numeric]),
        Side::OneOf(&[Numeric]),
        Verdict::Keep,
    ),
    Rule::new(
        "WB9",
        View::Resolved,
        Side::OneOf(AH_LETTER),
        Side::OneOf(&[Numeric]),
        Verdict::Keep,
    ),
    Rule::new(
        "WB10",
        View::Resolved,
        Side::OneOf(&[Numeric]),
        Side::OneOf(AH_LETTER),
        Verdict::Keep,
    ),
    Rule::guarded(
        "WB11",
        View::Resolved,
        Side::OneOf(MID_NUM_Q),
        Side::OneOf(&[Numeric]),
        left2_is_numeric,
        Verdict::Keep,
    ),
    Rule::guarded(
        "WB12",
        View::Resolved,
        Side::OneOf(&[Numeric]),
        Side::OneOf(MID_NUM_Q),
        right2_is_numeric,
        Verdict::Keep,
    ),
    Rule::new(
        "WB13",
        View::Resolved,
        Side::OneOf(&[Katakana]),
        Side::OneOf(&[Katakana]),
        Verdict::Keep,
    ),
    Rule::new(
        "WB13a",
        View::Resolved,
        Side::OneOf(&[ALetter, HebrewLetter, Numeric, Katakana, ExtendNumLet]),
        Side::OneOf(&[ExtendNumLet]),
        Verdict::Keep,
    ),
    Rule::new(
        "WB13b",
        View::Resolved,
        Side::OneOf(&[ExtendNumLet]),
        Side::OneOf(&[ALetter, HebrewLetter, Numeric, Katakana]),
        Verdict::Keep,
    ),
    Rule::guarded(
        "WB15/16",
        View::Resolved,
        Side::OneOf(&[RegionalIndicator]),
        Side::OneOf(&[RegionalIndicator]),
        odd_regional_indicators,
        Verdict::Keep,
    ),
];

/// Word boundary rule set
#[derive(Debug, Clone, Copy, Default)]
pub struct WordRules;

impl BreakRules for WordRules {
    type Class = WordClass;
    type State = WordState;

    fn classify(scalar: &Scalar) -> WordClass {
        word_class(scalar.value)
    }

    fn rules() -> &'static [Rule<WordClass, WordState>] {
        RULES
    }

    // WB999
    fn fallback() -> Verdict {
        Verdict::Break
    }

    fn is_transparent(class: WordClass) -> bool {
        matches!(class, Extend | Format | ZWJ)
    }

    fn is_hard(class: WordClass) -> bool {
        matches!(class, CR | LF | Newline)
    }

    fn advance(state: WordState, class: WordClass) -> WordState {
        WordState {
            ri_odd: class == RegionalIndicator && !state.ri_odd,
        }
    }
}
