//! Word_Break property

use super::{
    in_ranges, is_surrogate, Range, COMPLEX_CONTEXT, EXTEND, EXTENDED_PICTOGRAPHIC, FORMAT,
    HEBREW_LETTER, HIRAGANA, IDEOGRAPHIC, KATAKANA, REGIONAL_INDICATOR, SPACING_MARK,
};

const NEWLINE: &[Range] = &[(0x000B, 0x000C), (0x0085, 0x0085), (0x2028, 0x2029)];

const MID_NUM_LET: &[Range] = &[
    (0x002E, 0x002E),
    (0x2018, 0x2019),
    (0x2024, 0x2024),
    (0xFE52, 0xFE52),
    (0xFF07, 0xFF07),
    (0xFF0E, 0xFF0E),
];

const MID_LETTER: &[Range] = &[
    (0x003A, 0x003A),
    (0x00B7, 0x00B7),
    (0x0387, 0x0387),
    (0x055F, 0x055F),
    (0x05F4, 0x05F4),
    (0x2027, 0x2027),
    (0xFE13, 0xFE13),
    (0xFE55, 0xFE55),
    (0xFF1A, 0xFF1A),
];

const MID_NUM: &[Range] = &[
    (0x002C, 0x002C),
    (0x003B, 0x003B),
    (0x037E, 0x037E),
    (0x0589, 0x0589),
    (0x060C, 0x060D),
    (0x066C, 0x066C),
    (0x07F8, 0x07F8),
    (0x2044, 0x2044),
    (0xFE10, 0xFE10),
    (0xFE14, 0xFE14),
    (0xFE50, 0xFE50),
    (0xFE54, 0xFE54),
    (0xFF0C, 0xFF0C),
    (0xFF1B, 0xFF1B),
];

const EXTEND_NUM_LET: &[Range] = &[
    (0x005F, 0x005F),
    (0x202F, 0x202F),
    (0x203F, 0x2040),
    (0x2054, 0x2054),
    (0xFE33, 0xFE34),
    (0xFE4D, 0xFE4F),
    (0xFF3F, 0xFF3F),
];

const WSEG_SPACE: &[Range] = &[
    (0x0020, 0x0020),
    (0x1680, 0x1680),
    (0x2000, 0x2006),
    (0x2008, 0x200A),
    (0x205F, 0x205F),
    (0x3000, 0x3000),
];

/// Word break class of one scalar
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    CR,
    LF,
    Newline,
    Extend,
    ZWJ,
    RegionalIndicator,
    Format,
    Katakana,
    Hiragana,
    Ideographic,
    ComplexContext,
    HebrewLetter,
    ALetter,
    SingleQuote,
    DoubleQuote,
    MidNumLet,
    MidLetter,
    MidNum,
    Numeric,
    ExtendNumLet,
    WSegSpace,
    ExtendedPictographic,
    Other,
}

impl WordClass {
    /// Classes that make a segment word-like
    pub fn is_wordish(self) -> bool {
        matches!(
            self,
            WordClass::ALetter
                | WordClass::HebrewLetter
                | WordClass::Numeric
                | WordClass::Katakana
                | WordClass::Hiragana
                | WordClass::Ideographic
                | WordClass::ComplexContext
        )
    }

    /// Letters for the purposes of WB5 through WB7c
    #[inline]
    pub fn is_ah_letter(self) -> bool {
        matches!(self, WordClass::ALetter | WordClass::HebrewLetter)
    }

    /// MidLetter or MidNumLet or a single quote
    #[inline]
    pub fn is_mid_letter_q(self) -> bool {
        matches!(
            self,
            WordClass::MidLetter | WordClass::MidNumLet | WordClass::SingleQuote
        )
    }

    /// MidNum or MidNumLet or a single quote
    #[inline]
    pub fn is_mid_num_q(self) -> bool {
        matches!(
            self,
            WordClass::MidNum | WordClass::MidNumLet | WordClass::SingleQuote
        )
    }
}

/// Classify a scalar for word segmentation
pub fn word_class(value: u32) -> WordClass {
    match value {
        0x000D => return WordClass::CR,
        0x000A => return WordClass::LF,
        0x200D => return WordClass::ZWJ,
        0x0027 => return WordClass::SingleQuote,
        0x0022 => return WordClass::DoubleQuote,
        0x0041..=0x005A | 0x0061..=0x007A => return WordClass::ALetter,
        0x0030..=0x0039 => return WordClass::Numeric,
        _ => {}
    }

    let Some(ch) = char::from_u32(value).filter(|_| !is_surrogate(value)) else {
        return WordClass::Other;
    };

    if in_ranges(NEWLINE, value) {
        WordClass::Newline
    } else if in_ranges(REGIONAL_INDICATOR, value) {
        WordClass::RegionalIndicator
    } else if in_ranges(EXTEND, value) || in_ranges(SPACING_MARK, value) {
        WordClass::Extend
    } else if in_ranges(FORMAT, value) {
        WordClass::Format
    } else if in_ranges(KATAKANA, value) {
        WordClass::Katakana
    } else if in_ranges(HIRAGANA, value) {
        WordClass::Hiragana
    } else if in_ranges(IDEOGRAPHIC, value) {
        WordClass::Ideographic
    } else if in_ranges(COMPLEX_CONTEXT, value) {
        WordClass::ComplexContext
    } else if in_ranges(HEBREW_LETTER, value) {
        WordClass::HebrewLetter
    } else if in_ranges(MID_NUM_LET, value) {
        WordClass::MidNumLet
    } else if in_ranges(MID_LETTER, value) {
        WordClass::MidLetter
    } else if in_ranges(MID_NUM, value) {
        WordClass::MidNum
    } else if in_ranges(EXTEND_NUM_LET, value) {
        WordClass::ExtendNumLet
    } else if in_ranges(WSEG_SPACE, value) {
        WordClass::WSegSpace
    } else if in_ranges(EXTENDED_PICTOGRAPHIC, value) {
        WordClass::ExtendedPictographic
    } else if ch.is_alphabetic() {
        WordClass::ALetter
    } else if ch.is_numeric() {
        WordClass::Numeric
    } else {
        WordClass::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::assert_sorted;

    fn class_of(ch: char) -> WordClass {
        word_class(ch as u32)
    }

    #[test]
    fn test_word_tables_are_sorted() {
        assert_sorted("NEWLINE", NEWLINE);
        assert_sorted("MID_NUM_LET", MID_NUM_LET);
        assert_sorted("MID_LETTER", MID_LETTER);
        assert_sorted("MID_NUM", MID_NUM);
        assert_sorted("EXTEND_NUM_LET", EXTEND_NUM_LET);
        assert_sorted("WSEG_SPACE", WSEG_SPACE);
    }

    #[test]
    fn test_ascii_classes() {
        assert_eq!(class_of('a'), WordClass::ALetter);
        assert_eq!(class_of('Z'), WordClass::ALetter);
        assert_eq!(class_of('7'), WordClass::Numeric);
        assert_eq!(class_of('\''), WordClass::SingleQuote);
        assert_eq!(class_of('"'), WordClass::DoubleQuote);
        assert_eq!(class_of('.'), WordClass::MidNumLet);
        assert_eq!(class_of(':'), WordClass::MidLetter);
        assert_eq!(class_of(','), WordClass::MidNum);
        assert_eq!(class_of('_'), WordClass::ExtendNumLet);
        assert_eq!(class_of(' '), WordClass::WSegSpace);
        assert_eq!(class_of('-'), WordClass::Other);
        assert_eq!(class_of('?'), WordClass::Other);
    }

    #[test]
    fn test_script_classes() {
        assert_eq!(class_of('猫'), WordClass::Ideographic);
        assert_eq!(class_of('\u{20BB7}'), WordClass::Ideographic);
        assert_eq!(class_of('は'), WordClass::Hiragana);
        assert_eq!(class_of('カ'), WordClass::Katakana);
        assert_eq!(class_of('ー'), WordClass::Katakana);
        assert_eq!(class_of('ก'), WordClass::ComplexContext);
        assert_eq!(class_of('א'), WordClass::HebrewLetter);
        assert_eq!(class_of('é'), WordClass::ALetter);
        assert_eq!(class_of('。'), WordClass::Other);
    }

    #[test]
    fn test_lone_surrogate_is_other() {
        assert_eq!(word_class(0xD842), WordClass::Other);
    }

    #[test]
    fn test_wordish_classes() {
        assert!(WordClass::ALetter.is_wordish());
        assert!(WordClass::Ideographic.is_wordish());
        assert!(!WordClass::WSegSpace.is_wordish());
        assert!(!WordClass::MidNumLet.is_wordish());
        assert!(!WordClass::ExtendNumLet.is_wordish());
    }
}
