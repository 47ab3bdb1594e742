//! Sentence_Break property

use super::{in_ranges, is_surrogate, Range, EXTEND, FORMAT, SPACING_MARK};

const SEP: &[Range] = &[(0x0085, 0x0085), (0x2028, 0x2029)];

const SP: &[Range] = &[
    (0x0009, 0x0009),
    (0x000B, 0x000C),
    (0x0020, 0x0020),
    (0x00A0, 0x00A0),
    (0x1680, 0x1680),
    (0x2000, 0x200A),
    (0x202F, 0x202F),
    (0x205F, 0x205F),
    (0x3000, 0x3000),
];

const ATERM: &[Range] = &[
    (0x002E, 0x002E),
    (0x2024, 0x2024),
    (0xFE52, 0xFE52),
    (0xFF0E, 0xFF0E),
];

const STERM: &[Range] = &[
    (0x0021, 0x0021),
    (0x003F, 0x003F),
    (0x0589, 0x0589),
    (0x061D, 0x061F),
    (0x06D4, 0x06D4),
    (0x0700, 0x0702),
    (0x0964, 0x0965),
    (0x203C, 0x203D),
    (0x2047, 0x2049),
    (0x3002, 0x3002),
    (0xFE56, 0xFE57),
    (0xFF01, 0xFF01),
    (0xFF1F, 0xFF1F),
    (0xFF61, 0xFF61),
];

const SCONTINUE: &[Range] = &[
    (0x002C, 0x002D),
    (0x003A, 0x003B),
    (0x037E, 0x037E),
    (0x055D, 0x055D),
    (0x060C, 0x060D),
    (0x07F8, 0x07F8),
    (0x1802, 0x1802),
    (0x1808, 0x1808),
    (0x2013, 0x2014),
    (0x3001, 0x3001),
    (0xFE10, 0xFE11),
    (0xFE13, 0xFE13),
    (0xFE31, 0xFE32),
    (0xFE50, 0xFE51),
    (0xFE55, 0xFE55),
    (0xFE58, 0xFE58),
    (0xFE63, 0xFE63),
    (0xFF0C, 0xFF0D),
    (0xFF1A, 0xFF1B),
    (0xFF64, 0xFF64),
];

const CLOSE: &[Range] = &[
    (0x0022, 0x0022),
    (0x0027, 0x0029),
    (0x005B, 0x005B),
    (0x005D, 0x005D),
    (0x007B, 0x007B),
    (0x007D, 0x007D),
    (0x00AB, 0x00AB),
    (0x00BB, 0x00BB),
    (0x0F3A, 0x0F3D),
    (0x2018, 0x201F),
    (0x2039, 0x203A),
    (0x2045, 0x2046),
    (0x207D, 0x207E),
    (0x208D, 0x208E),
    (0x2329, 0x232A),
    (0x275B, 0x2760),
    (0x2768, 0x2775),
    (0x27E6, 0x27EF),
    (0x2983, 0x2998),
    (0x3008, 0x3011),
    (0x3014, 0x301B),
    (0x301D, 0x301F),
    (0xFD3E, 0xFD3F),
    (0xFE59, 0xFE5E),
    (0xFF08, 0xFF09),
    (0xFF3B, 0xFF3B),
    (0xFF3D, 0xFF3D),
    (0xFF5B, 0xFF5B),
    (0xFF5D, 0xFF5D),
    (0xFF5F, 0xFF60),
    (0xFF62, 0xFF63),
];

/// Sentence break class of one scalar
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentenceClass {
    CR,
    LF,
    Sep,
    Extend,
    Format,
    Sp,
    Lower,
    Upper,
    OLetter,
    Numeric,
    ATerm,
    STerm,
    SContinue,
    Close,
    Other,
}

impl SentenceClass {
    /// Paragraph separators: Sep, CR and LF
    #[inline]
    pub fn is_para_sep(self) -> bool {
        matches!(self, SentenceClass::Sep | SentenceClass::CR | SentenceClass::LF)
    }

    /// Sentence terminators: ATerm and STerm
    #[inline]
    pub fn is_term(self) -> bool {
        matches!(self, SentenceClass::ATerm | SentenceClass::STerm)
    }
}

/// Classify a scalar for sentence segmentation
pub fn sentence_class(value: u32) -> SentenceClass {
    match value {
        0x000D => return SentenceClass::CR,
        0x000A => return SentenceClass::LF,
        0x200D => return SentenceClass::Extend,
        0x0061..=0x007A => return SentenceClass::Lower,
        0x0041..=0x005A => return SentenceClass::Upper,
        0x0030..=0x0039 => return SentenceClass::Numeric,
        _ => {}
    }

    let Some(ch) = char::from_u32(value).filter(|_| !is_surrogate(value)) else {
        return SentenceClass::Other;
    };

    if in_ranges(SEP, value) {
        SentenceClass::Sep
    } else if in_ranges(EXTEND, value) || in_ranges(SPACING_MARK, value) {
        SentenceClass::Extend
    } else if in_ranges(FORMAT, value) {
        SentenceClass::Format
    } else if in_ranges(SP, value) {
        SentenceClass::Sp
    } else if in_ranges(ATERM, value) {
        SentenceClass::ATerm
    } else if in_ranges(STERM, value) {
        SentenceClass::STerm
    } else if in_ranges(SCONTINUE, value) {
        SentenceClass::SContinue
    } else if in_ranges(CLOSE, value) {
        SentenceClass::Close
    } else if ch.is_lowercase() {
        SentenceClass::Lower
    } else if ch.is_uppercase() {
        SentenceClass::Upper
    } else if ch.is_alphabetic() {
        SentenceClass::OLetter
    } else if ch.is_numeric() {
        SentenceClass::Numeric
    } else {
        SentenceClass::Other
    }
}
