//! UTF-16 code unit decoding
//!
//! Offsets exposed to callers are measured in UTF-16 code units, so every
//! decoded scalar remembers where it started and how many units it used.
//! Unpaired surrogates are passed through as their own one-unit scalar.

use core::ops::Index;
use core::slice;

/// A decoded scalar value together with its code unit span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scalar {
    /// Scalar value (an unpaired surrogate keeps its code unit value)
    pub value: u32,
    /// Offset of the first code unit
    pub start: usize,
    /// Number of code units, 1 or 2
    pub width: usize,
}

impl Scalar {
    /// Create a scalar record
    pub fn new(value: u32, start: usize, width: usize) -> Self {
        Self {
            value,
            start,
            width,
        }
    }

    /// The scalar as a `char`, or `None` for an unpaired surrogate
    #[inline]
    pub fn as_char(&self) -> Option<char> {
        char::from_u32(self.value)
    }

    /// Offset one past the last code unit
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.width
    }

    /// Whether this scalar is an unpaired surrogate
    #[inline]
    pub fn is_lone_surrogate(&self) -> bool {
        (0xD800..=0xDFFF).contains(&self.value)
    }
}

/// Ordered scalar values of one input, with their code unit offsets
///
/// Built once per input and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScalarSequence {
    scalars: Vec<Scalar>,
    code_units: usize,
}

impl ScalarSequence {
    /// Decode a slice of UTF-16 code units
    pub fn decode(units: &[u16]) -> Self {
        let mut scalars = Vec::with_capacity(units.len());
        let mut start = 0;

        for decoded in char::decode_utf16(units.iter().copied()) {
            let (value, width) = match decoded {
                Ok(ch) => (u32::from(ch), ch.len_utf16()),
                Err(err) => (u32::from(err.unpaired_surrogate()), 1),
            };
            scalars.push(Scalar::new(value, start, width));
            start += width;
        }

        Self {
            scalars,
            code_units: units.len(),
        }
    }

    /// Decode a Rust string, measuring offsets in UTF-16 code units
    pub fn from_text(text: &str) -> Self {
        let mut scalars = Vec::with_capacity(text.len());
        let mut start = 0;

        for ch in text.chars() {
            let width = ch.len_utf16();
            scalars.push(Scalar::new(u32::from(ch), start, width));
            start += width;
        }

        Self {
            scalars,
            code_units: start,
        }
    }

    /// Number of scalars
    #[inline]
    pub fn len(&self) -> usize {
        self.scalars.len()
    }

    /// Whether the input was empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }

    /// Length of the input in code units
    #[inline]
    pub fn code_unit_len(&self) -> usize {
        self.code_units
    }

    /// All scalars in order
    #[inline]
    pub fn as_slice(&self) -> &[Scalar] {
        &self.scalars
    }

    /// Iterate over the scalars
    pub fn iter(&self) -> slice::Iter<'_, Scalar> {
        self.scalars.iter()
    }

    /// Scalar at `index`
    pub fn get(&self, index: usize) -> Option<&Scalar> {
        self.scalars.get(index)
    }

    /// Code unit offset where scalar `index` starts; `len()` maps to the end of input
    pub fn offset_of(&self, index: usize) -> usize {
        self.scalars
            .get(index)
            .map_or(self.code_units, |scalar| scalar.start)
    }

    /// Index of the scalar that starts exactly at `offset`
    ///
    /// Returns `None` when the offset falls inside a surrogate pair or past
    /// the end of the input.
    pub fn index_starting_at(&self, offset: usize) -> Option<usize> {
        self.scalars
            .binary_search_by_key(&offset, |scalar| scalar.start)
            .ok()
    }
}

impl Index<usize> for ScalarSequence {
    type Output = Scalar;

    fn index(&self, index: usize) -> &Scalar {
        &self.scalars[index]
    }
}

impl<'a> IntoIterator for &'a ScalarSequence {
    type Item = &'a Scalar;
    type IntoIter = slice::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.scalars.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16(text: &str) -> Vec<u16> {
        text.encode_utf16().collect()
    }

    #[test]
    fn test_decode_empty() {
        let seq = ScalarSequence::decode(&[]);
        assert!(seq.is_empty());
        assert_eq!(seq.code_unit_len(), 0);
    }

    #[test]
    fn test_decode_bmp_text() {
        let seq = ScalarSequence::decode(&utf16("abc"));
        assert_eq!(seq.len(), 3);
        assert_eq!(seq[2], Scalar::new('c' as u32, 2, 1));
    }

    #[test]
    fn test_decode_surrogate_pair() {
        let seq = ScalarSequence::decode(&utf16("\u{20BB7}野"));
        assert_eq!(seq.len(), 2);
        assert_eq!(seq[0], Scalar::new(0x20BB7, 0, 2));
        assert_eq!(seq[1].start, 2);
        assert_eq!(seq.code_unit_len(), 3);
    }

    #[test]
    fn test_decode_lone_surrogates() {
        // high surrogate followed by a letter, then a stray low surrogate
        let units = [0xD842, 0x0061, 0xDFB7];
        let seq = ScalarSequence::decode(&units);

        assert_eq!(seq.len(), 3);
        assert!(seq[0].is_lone_surrogate());
        assert_eq!(seq[0].as_char(), None);
        assert_eq!(seq[1].as_char(), Some('a'));
        assert_eq!(seq[2], Scalar::new(0xDFB7, 2, 1));
    }

    #[test]
    fn test_from_text_matches_decode() {
        let text = "Hé\u{1F600}!";
        assert_eq!(
            ScalarSequence::from_text(text),
            ScalarSequence::decode(&utf16(text))
        );
    }

    #[test]
    fn test_index_starting_at() {
        let seq = ScalarSequence::from_text("\u{1F600}a");
        assert_eq!(seq.index_starting_at(0), Some(0));
        assert_eq!(seq.index_starting_at(1), None);
        assert_eq!(seq.index_starting_at(2), Some(1));
        assert_eq!(seq.offset_of(2), 3);
    }
}
