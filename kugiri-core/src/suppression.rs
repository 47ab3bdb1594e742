//! Sentence break suppression after known abbreviations
//!
//! A sentence break that follows `<abbreviation>. ` is removed when the
//! word before the full stop is listed, so "Mr. Smith" stays one sentence.

use crate::decode::ScalarSequence;
use crate::dictionary::Trie;
use crate::properties::SentenceClass;

/// Removes sentence breaks that follow listed abbreviations
#[derive(Debug, Clone)]
pub struct SentenceSuppressor {
    abbreviations: Trie,
}

impl SentenceSuppressor {
    /// Build from abbreviations written without their final full stop
    ///
    /// Matching ignores case; inner stops are kept, e.g. `"e.g"` or `"U.S"`.
    pub fn new<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let abbreviations = abbreviations
            .into_iter()
            .map(|abbr| abbr.as_ref().trim_end_matches('.').to_string())
            .collect::<Vec<_>>();
        Self {
            abbreviations: Trie::from_words(abbreviations, false),
        }
    }

    /// Whether `word` is a listed abbreviation
    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations.contains(word)
    }

    /// Number of listed abbreviations
    pub fn len(&self) -> usize {
        self.abbreviations.len()
    }

    /// Whether nothing is listed
    pub fn is_empty(&self) -> bool {
        self.abbreviations.is_empty()
    }

    /// Drop suppressed interior breaks from `breaks` (scalar indices)
    pub fn filter(&self, seq: &ScalarSequence, classes: &[SentenceClass], breaks: &mut Vec<usize>) {
        if self.is_empty() || breaks.len() <= 2 {
            return;
        }

        let last = classes.len();
        breaks.retain(|&at| at == 0 || at == last || !self.suppresses(seq, classes, at));
    }

    fn suppresses(&self, seq: &ScalarSequence, classes: &[SentenceClass], at: usize) -> bool {
        // Skip trailing spaces and closing punctuation
        let mut stop = at;
        while stop > 0
            && matches!(
                classes[stop - 1],
                SentenceClass::Sp | SentenceClass::Close | SentenceClass::Extend | SentenceClass::Format
            )
        {
            stop -= 1;
        }
        if stop == 0 || classes[stop - 1] != SentenceClass::ATerm {
            return false;
        }
        let stop = stop - 1;

        // Collect the word before the full stop
        let mut start = stop;
        while start > 0
            && matches!(
                classes[start - 1],
                SentenceClass::Upper
                    | SentenceClass::Lower
                    | SentenceClass::OLetter
                    | SentenceClass::ATerm
                    | SentenceClass::Extend
            )
        {
            start -= 1;
        }
        if start == stop {
            return false;
        }

        let word = seq.as_slice()[start..stop]
            .iter()
            .filter_map(|scalar| scalar.as_char());
        let suppressed = self.abbreviations.contains_chars(word);
        if suppressed {
            log::debug!("suppressed sentence break at scalar {at} after abbreviation");
        }
        suppressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::sentence_class;

    fn filtered(suppressor: &SentenceSuppressor, text: &str, breaks: Vec<usize>) -> Vec<usize> {
        let seq = ScalarSequence::from_text(text);
        let classes: Vec<_> = seq.iter().map(|scalar| sentence_class(scalar.value)).collect();
        let mut breaks = breaks;
        suppressor.filter(&seq, &classes, &mut breaks);
        breaks
    }

    #[test]
    fn test_abbreviation_lookup() {
        let suppressor = SentenceSuppressor::new(["Mr", "e.g.", "U.S"]);
        assert!(suppressor.is_abbreviation("mr"));
        assert!(suppressor.is_abbreviation("E.G"));
        assert!(suppressor.is_abbreviation("U.S"));
        assert!(!suppressor.is_abbreviation("Mrs"));
        assert_eq!(suppressor.len(), 3);
    }

    #[test]
    fn test_break_after_abbreviation_is_removed() {
        let suppressor = SentenceSuppressor::new(["Mr"]);
        // "Mr. Smith left. Bye" with breaks after "Mr. " and "left. "
        assert_eq!(
            filtered(&suppressor, "Mr. Smith left. Bye", vec![0, 4, 16, 19]),
            vec![0, 16, 19]
        );
    }

    #[test]
    fn test_longer_words_are_not_abbreviations() {
        let suppressor = SentenceSuppressor::new(["Mr"]);
        assert_eq!(
            filtered(&suppressor, "Humr. Next", vec![0, 6, 10]),
            vec![0, 6, 10]
        );
    }

    #[test]
    fn test_sterm_is_never_suppressed() {
        let suppressor = SentenceSuppressor::new(["Mr"]);
        assert_eq!(filtered(&suppressor, "Mr! Next", vec![0, 4, 8]), vec![0, 4, 8]);
    }

    #[test]
    fn test_multi_stop_abbreviation() {
        let suppressor = SentenceSuppressor::new(["U.S"]);
        assert_eq!(
            filtered(&suppressor, "The U.S. Army", vec![0, 9, 13]),
            vec![0, 13]
        );
    }
}
