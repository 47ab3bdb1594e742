//! Word-likeness of word segments

use crate::properties::word_class;

/// Whether a word segment contains letters, digits or ideographs
///
/// Segments made only of spaces, punctuation or symbols are not word-like.
pub fn is_word_like(units: &[u16]) -> bool {
    char::decode_utf16(units.iter().copied())
        .filter_map(Result::ok)
        .any(|ch| word_class(u32::from(ch)).is_wordish())
}
