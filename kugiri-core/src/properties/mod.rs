//! Unicode break property lookup
//!
//! Each property is a sorted list of inclusive scalar ranges, searched with
//! a binary search. Lists that overlap are resolved by the order in which
//! a classifier consults them.

pub mod grapheme;
pub mod sentence;
pub mod word;

pub use grapheme::{grapheme_class, GraphemeClass};
pub use sentence::{sentence_class, SentenceClass};
pub use word::{word_class, WordClass};

/// Inclusive scalar range
pub(crate) type Range = (u32, u32);

/// Whether `value` falls in one of the sorted, non-overlapping `ranges`
#[inline]
pub(crate) fn in_ranges(ranges: &[Range], value: u32) -> bool {
    ranges
        .binary_search_by(|&(lo, hi)| {
            if hi < value {
                core::cmp::Ordering::Less
            } else if lo > value {
                core::cmp::Ordering::Greater
            } else {
                core::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

#[inline]
pub(crate) fn is_surrogate(value: u32) -> bool {
    (0xD800..=0xDFFF).contains(&value)
}

// Grapheme_Extend plus emoji modifiers
pub(crate) const EXTEND: &[Range] = &[
    (0x0300, 0x036F),
    (0x0483, 0x0489),
    (0x0591, 0x05BD),
    (0x05BF, 0x05BF),
    (0x05C1, 0x05C2),
    (0x05C4, 0x05C5),
    (0x05C7, 0x05C7),
    (0x0610, 0x061A),
    (0x064B, 0x065F),
    (0x0670, 0x0670),
    (0x06D6, 0x06DC),
    (0x06DF, 0x06E4),
    (0x06E7, 0x06E8),
    (0x06EA, 0x06ED),
    (0x0711, 0x0711),
    (0x0730, 0x074A),
    (0x0900, 0x0902),
    (0x093A, 0x093A),
    (0x093C, 0x093C),
    (0x0941, 0x0948),
    (0x094D, 0x094D),
    (0x0951, 0x0957),
    (0x0962, 0x0963),
    (0x0E31, 0x0E31),
    (0x0E34, 0x0E3A),
    (0x0E47, 0x0E4E),
    (0x0EB1, 0x0EB1),
    (0x0EB4, 0x0EBC),
    (0x0EC8, 0x0ECE),
    (0x1AB0, 0x1AFF),
    (0x1DC0, 0x1DFF),
    (0x200C, 0x200C),
    (0x20D0, 0x20F0),
    (0x302A, 0x302F),
    (0x3099, 0x309A),
    (0xFE00, 0xFE0F),
    (0xFE20, 0xFE2F),
    (0xFF9E, 0xFF9F),
    (0x1F3FB, 0x1F3FF),
    (0xE0020, 0xE007F),
    (0xE0100, 0xE01EF),
];

pub(crate) const SPACING_MARK: &[Range] = &[
    (0x0903, 0x0903),
    (0x093B, 0x093B),
    (0x093E, 0x0940),
    (0x0949, 0x094C),
    (0x094E, 0x094F),
    (0x0E33, 0x0E33),
    (0x0EB3, 0x0EB3),
];

pub(crate) const PREPEND: &[Range] = &[
    (0x0600, 0x0605),
    (0x06DD, 0x06DD),
    (0x070F, 0x070F),
    (0x0890, 0x0891),
    (0x08E2, 0x08E2),
    (0x110BD, 0x110BD),
    (0x110CD, 0x110CD),
];

pub(crate) const CONTROL: &[Range] = &[
    (0x0000, 0x0009),
    (0x000B, 0x000C),
    (0x000E, 0x001F),
    (0x007F, 0x009F),
    (0x00AD, 0x00AD),
    (0x061C, 0x061C),
    (0x180E, 0x180E),
    (0x200B, 0x200B),
    (0x200E, 0x200F),
    (0x2028, 0x202E),
    (0x2060, 0x206F),
    (0xD800, 0xDFFF),
    (0xFEFF, 0xFEFF),
    (0xFFF0, 0xFFFB),
    (0xE0000, 0xE001F),
    (0xE0080, 0xE00FF),
    (0xE01F0, 0xE0FFF),
];

pub(crate) const EXTENDED_PICTOGRAPHIC: &[Range] = &[
    (0x00A9, 0x00A9),
    (0x00AE, 0x00AE),
    (0x203C, 0x203C),
    (0x2049, 0x2049),
    (0x2122, 0x2122),
    (0x2139, 0x2139),
    (0x2194, 0x2199),
    (0x21A9, 0x21AA),
    (0x231A, 0x231B),
    (0x2328, 0x2328),
    (0x2388, 0x2388),
    (0x23CF, 0x23CF),
    (0x23E9, 0x23F3),
    (0x23F8, 0x23FA),
    (0x24C2, 0x24C2),
    (0x25AA, 0x25AB),
    (0x25B6, 0x25B6),
    (0x25C0, 0x25C0),
    (0x25FB, 0x25FE),
    (0x2600, 0x27BF),
    (0x2934, 0x2935),
    (0x2B05, 0x2B07),
    (0x2B1B, 0x2B1C),
    (0x2B50, 0x2B50),
    (0x2B55, 0x2B55),
    (0x3030, 0x3030),
    (0x303D, 0x303D),
    (0x3297, 0x3297),
    (0x3299, 0x3299),
    (0x1F000, 0x1F0FF),
    (0x1F10D, 0x1F10F),
    (0x1F12F, 0x1F12F),
    (0x1F16C, 0x1F171),
    (0x1F17E, 0x1F17F),
    (0x1F18E, 0x1F18E),
    (0x1F191, 0x1F19A),
    (0x1F1AD, 0x1F1E5),
    (0x1F201, 0x1F20F),
    (0x1F21A, 0x1F21A),
    (0x1F22F, 0x1F22F),
    (0x1F232, 0x1F23A),
    (0x1F23C, 0x1F23F),
    (0x1F249, 0x1F3FA),
    (0x1F400, 0x1F53D),
    (0x1F546, 0x1F64F),
    (0x1F680, 0x1F6FF),
    (0x1F774, 0x1F77F),
    (0x1F7D5, 0x1F7FF),
    (0x1F80C, 0x1F80F),
    (0x1F848, 0x1F84F),
    (0x1F85A, 0x1F85F),
    (0x1F888, 0x1F88F),
    (0x1F8AE, 0x1F8FF),
    (0x1F90C, 0x1F93A),
    (0x1F93C, 0x1F945),
    (0x1F947, 0x1FAFF),
    (0x1FC00, 0x1FFFD),
];

pub(crate) const REGIONAL_INDICATOR: &[Range] = &[(0x1F1E6, 0x1F1FF)];

pub(crate) const HANGUL_L: &[Range] = &[(0x1100, 0x115F), (0xA960, 0xA97C)];
pub(crate) const HANGUL_V: &[Range] = &[(0x1160, 0x11A7), (0xD7B0, 0xD7C6)];
pub(crate) const HANGUL_T: &[Range] = &[(0x11A8, 0x11FF), (0xD7CB, 0xD7FB)];
pub(crate) const HANGUL_SYLLABLES: Range = (0xAC00, 0xD7A3);

pub(crate) const IDEOGRAPHIC: &[Range] = &[
    (0x3005, 0x3007),
    (0x3021, 0x3029),
    (0x3038, 0x303B),
    (0x3400, 0x4DBF),
    (0x4E00, 0x9FFF),
    (0xF900, 0xFAFF),
    (0x20000, 0x3FFFD),
];

pub(crate) const HIRAGANA: &[Range] = &[
    (0x3041, 0x3096),
    (0x309D, 0x309F),
    (0x1B001, 0x1B11F),
];

pub(crate) const KATAKANA: &[Range] = &[
    (0x3031, 0x3035),
    (0x309B, 0x309C),
    (0x30A0, 0x30FA),
    (0x30FC, 0x30FF),
    (0x31F0, 0x31FF),
    (0x32D0, 0x32FE),
    (0x3300, 0x3357),
    (0xFF66, 0xFF9D),
    (0x1B000, 0x1B000),
];

// Thai, Lao, Myanmar and Khmer letters
pub(crate) const COMPLEX_CONTEXT: &[Range] = &[
    (0x0E01, 0x0E30),
    (0x0E32, 0x0E33),
    (0x0E40, 0x0E46),
    (0x0E81, 0x0EB0),
    (0x0EB2, 0x0EB3),
    (0x0EBD, 0x0EC6),
    (0x1000, 0x109F),
    (0x1780, 0x17FF),
];

pub(crate) const HEBREW_LETTER: &[Range] = &[
    (0x05D0, 0x05EA),
    (0x05EF, 0x05F2),
    (0xFB1D, 0xFB1D),
    (0xFB1F, 0xFB28),
    (0xFB2A, 0xFB4F),
];

pub(crate) const FORMAT: &[Range] = &[
    (0x00AD, 0x00AD),
    (0x0600, 0x0605),
    (0x061C, 0x061C),
    (0x06DD, 0x06DD),
    (0x070F, 0x070F),
    (0x180E, 0x180E),
    (0x200E, 0x200F),
    (0x202A, 0x202E),
    (0x2060, 0x2064),
    (0x2066, 0x206F),
    (0xFEFF, 0xFEFF),
    (0xFFF9, 0xFFFB),
    (0xE0001, 0xE0001),
];

#[inline]
pub(crate) fn is_hangul_syllable(value: u32) -> bool {
    (HANGUL_SYLLABLES.0..=HANGUL_SYLLABLES.1).contains(&value)
}

/// LV syllables sit on multiples of 28 from the block start
#[inline]
pub(crate) fn is_hangul_lv(value: u32) -> bool {
    is_hangul_syllable(value) && (value - HANGUL_SYLLABLES.0) % 28 == 0
}

#[cfg(test)]
pub(crate) fn assert_sorted(name: &str, ranges: &[Range]) {
    for (lo, hi) in ranges {
        assert!(lo <= hi, "{name}: inverted range {lo:#X}..{hi:#X}");
    }
    for pair in ranges.windows(2) {
        assert!(
            pair[0].1 < pair[1].0,
            "{name}: ranges out of order at {:#X}",
            pair[1].0
        );
    }
}
