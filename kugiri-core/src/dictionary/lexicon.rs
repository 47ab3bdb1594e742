//! Longest-match lexicon segmenter

use smallvec::SmallVec;

use super::{RunSegmenter, ScriptRun, Trie};
use crate::boundary::BoundarySet;
use crate::decode::Scalar;
use crate::properties::{word_class, WordClass};

/// Greedy longest-match segmenter over a word list
///
/// At each position the longest listed word wins; a scalar that starts no
/// listed word becomes a segment of its own.
#[derive(Debug, Clone, Default)]
pub struct DictionarySegmenter {
    words: Trie,
}

impl DictionarySegmenter {
    /// Empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lexicon from a word list
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: Trie::from_words(words, true),
        }
    }

    /// Add one word
    pub fn insert(&mut self, word: &str) {
        self.words.insert(word);
    }

    /// Whether `word` is listed
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of listed words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the lexicon is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl RunSegmenter for DictionarySegmenter {
    fn try_segment_run(&self, run: &ScriptRun<'_>) -> Option<BoundarySet> {
        if self.is_empty() || run.is_empty() {
            return None;
        }

        let chars: SmallVec<[char; 32]> = run.chars().collect();
        let mut offsets = Vec::with_capacity(chars.len() + 1);
        let mut index = 0;

        while index < chars.len() {
            offsets.push(run.relative_offset(index));
            let matched = self.words.longest_prefix(chars[index..].iter().copied());
            index += if matched > 0 {
                matched
            } else {
                unmatched_span(&run.scalars()[index..])
            };
            // Marks never start a word
            while index < chars.len() && is_mark(&run.scalars()[index]) {
                index += 1;
            }
        }
        offsets.push(run.len());

        BoundarySet::from_offsets(offsets, run.len()).ok()
    }
}

/// Scalars covered by an unlisted word: a katakana run stays whole
fn unmatched_span(scalars: &[Scalar]) -> usize {
    let is_katakana = |scalar: &Scalar| word_class(scalar.value) == WordClass::Katakana;
    match scalars.first() {
        Some(first) if is_katakana(first) => scalars
            .iter()
            .take_while(|scalar| is_katakana(scalar) || is_mark(scalar))
            .count(),
        _ => 1,
    }
}

#[inline]
fn is_mark(scalar: &Scalar) -> bool {
    matches!(
        word_class(scalar.value),
        WordClass::Extend | WordClass::ZWJ | WordClass::Format
    )
}
