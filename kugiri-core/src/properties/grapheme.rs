//! Grapheme_Cluster_Break property

use super::{
    in_ranges, is_hangul_lv, is_hangul_syllable, Range, CONTROL, EXTEND, EXTENDED_PICTOGRAPHIC,
    HANGUL_L, HANGUL_T, HANGUL_V, PREPEND, REGIONAL_INDICATOR, SPACING_MARK,
};

// Indic_Conjunct_Break=Linker: the viramas that form conjuncts
const CONJUNCT_LINKER: &[Range] = &[
    (0x094D, 0x094D),
    (0x09CD, 0x09CD),
    (0x0ACD, 0x0ACD),
    (0x0B4D, 0x0B4D),
    (0x0C4D, 0x0C4D),
    (0x0D4D, 0x0D4D),
];

// Indic_Conjunct_Break=Consonant
const CONJUNCT_CONSONANT: &[Range] = &[
    (0x0915, 0x0939),
    (0x0958, 0x095F),
    (0x0978, 0x097F),
    (0x0995, 0x09A8),
    (0x09AA, 0x09B0),
    (0x09B2, 0x09B2),
    (0x09B6, 0x09B9),
    (0x09DC, 0x09DD),
    (0x09DF, 0x09DF),
    (0x09F0, 0x09F1),
    (0x0A95, 0x0AA8),
    (0x0AAA, 0x0AB0),
    (0x0AB2, 0x0AB3),
    (0x0AB5, 0x0AB9),
    (0x0AF9, 0x0AF9),
    (0x0B15, 0x0B28),
    (0x0B2A, 0x0B30),
    (0x0B32, 0x0B33),
    (0x0B35, 0x0B39),
    (0x0B5C, 0x0B5D),
    (0x0B5F, 0x0B5F),
    (0x0B71, 0x0B71),
    (0x0C15, 0x0C28),
    (0x0C2A, 0x0C39),
    (0x0C58, 0x0C5A),
    (0x0D15, 0x0D3A),
];

/// Grapheme break class of one scalar
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphemeClass {
    CR,
    LF,
    Control,
    Extend,
    ZWJ,
    RegionalIndicator,
    Prepend,
    SpacingMark,
    L,
    V,
    T,
    LV,
    LVT,
    ExtendedPictographic,
    /// Other, and an Indic conjunct consonant
    ConjunctConsonant,
    /// Extend, and an Indic conjunct linker (virama)
    ConjunctLinker,
    Other,
}

impl GraphemeClass {
    /// Whether the class behaves as Extend in the cluster rules
    #[inline]
    pub fn is_extend(self) -> bool {
        matches!(self, GraphemeClass::Extend | GraphemeClass::ConjunctLinker)
    }
}

/// Classify a scalar for grapheme segmentation
///
/// Unpaired surrogates land in `Control`, so they always stand alone.
pub fn grapheme_class(value: u32) -> GraphemeClass {
    match value {
        0x000D => return GraphemeClass::CR,
        0x000A => return GraphemeClass::LF,
        0x200D => return GraphemeClass::ZWJ,
        // ASCII fast path
        0x0020..=0x007E => return GraphemeClass::Other,
        _ => {}
    }

    if in_ranges(CONTROL, value) {
        GraphemeClass::Control
    } else if in_ranges(CONJUNCT_LINKER, value) {
        GraphemeClass::ConjunctLinker
    } else if in_ranges(EXTEND, value) {
        GraphemeClass::Extend
    } else if in_ranges(REGIONAL_INDICATOR, value) {
        GraphemeClass::RegionalIndicator
    } else if in_ranges(PREPEND, value) {
        GraphemeClass::Prepend
    } else if in_ranges(SPACING_MARK, value) {
        GraphemeClass::SpacingMark
    } else if in_ranges(HANGUL_L, value) {
        GraphemeClass::L
    } else if in_ranges(HANGUL_V, value) {
        GraphemeClass::V
    } else if in_ranges(HANGUL_T, value) {
        GraphemeClass::T
    } else if is_hangul_syllable(value) {
        if is_hangul_lv(value) {
            GraphemeClass::LV
        } else {
            GraphemeClass::LVT
        }
    } else if in_ranges(EXTENDED_PICTOGRAPHIC, value) {
        GraphemeClass::ExtendedPictographic
    } else if in_ranges(CONJUNCT_CONSONANT, value) {
        GraphemeClass::ConjunctConsonant
    } else {
        GraphemeClass::Other
    }
}
