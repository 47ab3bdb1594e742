//! Dictionary-based segmentation of space-less script runs
//!
//! Scripts such as Han, Hiragana, Thai or Khmer do not separate words with
//! spaces, so the word rules alone would cut them into single characters.
//! The classifier hands every such run to a [`RunSegmenter`], which may
//! propose word boundaries inside it.

pub mod lexicon;
pub mod router;
pub mod trie;

use crate::boundary::BoundarySet;
use crate::decode::Scalar;
use crate::properties::{word_class, WordClass};

pub use lexicon::DictionarySegmenter;
pub use router::ScriptRouter;
pub use trie::Trie;

/// Script family of a run handed to a [`RunSegmenter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunScript {
    /// Han ideographs, Hiragana and Katakana
    Cjk,
    /// Thai, Lao, Myanmar and Khmer
    SouthEastAsian,
}

impl RunScript {
    /// Script family a word class belongs to, if it is space-less
    pub fn of_class(class: WordClass) -> Option<Self> {
        match class {
            WordClass::Ideographic | WordClass::Hiragana | WordClass::Katakana => {
                Some(RunScript::Cjk)
            }
            WordClass::ComplexContext => Some(RunScript::SouthEastAsian),
            _ => None,
        }
    }

    /// Script family of a lexicon entry, taken from its first character
    pub fn of_word(word: &str) -> Option<Self> {
        word.chars()
            .next()
            .and_then(|ch| Self::of_class(word_class(u32::from(ch))))
    }
}

/// A maximal run of scalars from one space-less script family
#[derive(Debug, Clone, Copy)]
pub struct ScriptRun<'a> {
    script: RunScript,
    scalars: &'a [Scalar],
    offset: usize,
    len: usize,
}

impl<'a> ScriptRun<'a> {
    /// Wrap a non-empty slice of consecutive scalars
    pub fn new(script: RunScript, scalars: &'a [Scalar]) -> Self {
        let offset = scalars.first().map_or(0, |scalar| scalar.start);
        let end = scalars.last().map_or(offset, Scalar::end);
        Self {
            script,
            scalars,
            offset,
            len: end - offset,
        }
    }

    /// Script family of the run
    pub fn script(&self) -> RunScript {
        self.script
    }

    /// Scalars of the run, with offsets into the whole input
    pub fn scalars(&self) -> &'a [Scalar] {
        self.scalars
    }

    /// Code unit offset of the run within the input
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the run in code units
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the run is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Characters of the run
    pub fn chars(&self) -> impl Iterator<Item = char> + 'a {
        self.scalars
            .iter()
            .map(|scalar| scalar.as_char().unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    /// The run as a string
    pub fn text(&self) -> String {
        self.chars().collect()
    }

    /// Offset of scalar `index` relative to the start of the run
    pub fn relative_offset(&self, index: usize) -> usize {
        self.scalars
            .get(index)
            .map_or(self.len, |scalar| scalar.start - self.offset)
    }
}

/// Proposes word boundaries inside a space-less script run
///
/// Returned offsets are relative to the run, in code units, and must form a
/// valid [`BoundarySet`] over `run.len()`. Returning `None` leaves the
/// rule-based boundaries in place.
pub trait RunSegmenter: Send + Sync + std::fmt::Debug {
    fn try_segment_run(&self, run: &ScriptRun<'_>) -> Option<BoundarySet>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::ScalarSequence;

    #[test]
    fn test_run_script_of_word() {
        assert_eq!(RunScript::of_word("吾輩"), Some(RunScript::Cjk));
        assert_eq!(RunScript::of_word("です"), Some(RunScript::Cjk));
        assert_eq!(RunScript::of_word("テスト"), Some(RunScript::Cjk));
        assert_eq!(RunScript::of_word("ภาษา"), Some(RunScript::SouthEastAsian));
        assert_eq!(RunScript::of_word("word"), None);
        assert_eq!(RunScript::of_word(""), None);
    }

    #[test]
    fn test_script_run_offsets() {
        let seq = ScalarSequence::from_text("a\u{20BB7}野家");
        let run = ScriptRun::new(RunScript::Cjk, &seq.as_slice()[1..]);

        assert_eq!(run.offset(), 1);
        assert_eq!(run.len(), 4);
        assert_eq!(run.text(), "\u{20BB7}野家");
        assert_eq!(run.relative_offset(1), 2);
        assert_eq!(run.relative_offset(3), 4);
        assert_eq!(run.script(), RunScript::Cjk);
    }
}
