//! Boundary classifier: decoded scalars in, boundary set out

use std::sync::Arc;

use crate::boundary::BoundarySet;
use crate::decode::ScalarSequence;
use crate::dictionary::{RunScript, RunSegmenter, ScriptRun};
use crate::properties::WordClass;
use crate::rules::{scan, GraphemeRules, SentenceRules, WordRules};
use crate::suppression::SentenceSuppressor;
use crate::types::Granularity;

/// Computes the boundaries of one granularity
///
/// Word classification may delegate space-less script runs to a
/// [`RunSegmenter`]; sentence classification may drop breaks that follow
/// known abbreviations. Both are optional, and without them the pure rule
/// tables decide.
#[derive(Debug, Clone)]
pub struct BoundaryClassifier {
    granularity: Granularity,
    run_segmenter: Option<Arc<dyn RunSegmenter>>,
    suppressor: Option<Arc<SentenceSuppressor>>,
}

impl BoundaryClassifier {
    /// Rule-only classifier for `granularity`
    pub fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            run_segmenter: None,
            suppressor: None,
        }
    }

    /// Use `segmenter` for space-less runs at word granularity
    pub fn with_run_segmenter(mut self, segmenter: Arc<dyn RunSegmenter>) -> Self {
        self.run_segmenter = Some(segmenter);
        self
    }

    /// Suppress sentence breaks after the listed abbreviations
    pub fn with_suppressions(mut self, suppressor: Arc<SentenceSuppressor>) -> Self {
        self.suppressor = Some(suppressor);
        self
    }

    /// Granularity this classifier computes
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Whether a run segmenter is attached
    pub fn has_run_segmenter(&self) -> bool {
        self.run_segmenter.is_some()
    }

    /// Whether abbreviation suppression is attached
    pub fn has_suppressions(&self) -> bool {
        self.suppressor.is_some()
    }

    /// Classify a decoded input
    pub fn classify(&self, seq: &ScalarSequence) -> BoundarySet {
        if seq.is_empty() {
            return BoundarySet::empty();
        }

        let breaks = match self.granularity {
            Granularity::Grapheme => scan::<GraphemeRules>(seq).breaks,
            Granularity::Word => {
                let scanned = scan::<WordRules>(seq);
                match &self.run_segmenter {
                    Some(segmenter) => {
                        refine_runs(segmenter.as_ref(), seq, &scanned.classes, scanned.breaks)
                    }
                    None => scanned.breaks,
                }
            }
            Granularity::Sentence => {
                let mut scanned = scan::<SentenceRules>(seq);
                if let Some(suppressor) = &self.suppressor {
                    suppressor.filter(seq, &scanned.classes, &mut scanned.breaks);
                }
                scanned.breaks
            }
        };

        log::trace!(
            "{} boundaries over {} scalars at {} granularity",
            breaks.len(),
            seq.len(),
            self.granularity
        );

        BoundarySet::from_scanned(breaks.into_iter().map(|index| seq.offset_of(index)).collect())
    }

    /// Classify UTF-16 code units
    pub fn classify_units(&self, units: &[u16]) -> BoundarySet {
        self.classify(&ScalarSequence::decode(units))
    }

    /// Classify a string; offsets are still UTF-16 code units
    pub fn classify_text(&self, text: &str) -> BoundarySet {
        self.classify(&ScalarSequence::from_text(text))
    }
}

#[inline]
fn is_mark(class: WordClass) -> bool {
    matches!(class, WordClass::Extend | WordClass::ZWJ | WordClass::Format)
}

/// Replace rule breaks inside space-less runs with the segmenter's proposal
fn refine_runs(
    segmenter: &dyn RunSegmenter,
    seq: &ScalarSequence,
    classes: &[WordClass],
    breaks: Vec<usize>,
) -> Vec<usize> {
    let mut refined = breaks;
    let mut index = 0;

    while index < classes.len() {
        let Some(script) = RunScript::of_class(classes[index]) else {
            index += 1;
            continue;
        };

        let start = index;
        let mut end = start + 1;
        while end < classes.len()
            && (RunScript::of_class(classes[end]) == Some(script) || is_mark(classes[end]))
        {
            end += 1;
        }
        index = end;

        if end - start < 2 {
            continue;
        }

        let run = ScriptRun::new(script, &seq.as_slice()[start..end]);
        match proposed_breaks(segmenter, seq, classes, &run, start, end) {
            Some(interior) => {
                refined.retain(|&at| at <= start || at >= end);
                refined.extend(interior);
            }
            None => log::trace!("run segmenter declined run at scalar {start}"),
        }
    }

    refined.sort_unstable();
    refined.dedup();
    refined
}

/// Interior scalar indices proposed for one run, or `None` if unusable
fn proposed_breaks(
    segmenter: &dyn RunSegmenter,
    seq: &ScalarSequence,
    classes: &[WordClass],
    run: &ScriptRun<'_>,
    start: usize,
    end: usize,
) -> Option<Vec<usize>> {
    let proposal = segmenter.try_segment_run(run)?;
    if proposal.text_len() != run.len() {
        log::warn!(
            "run segmenter returned {} code units for a run of {}; keeping rule boundaries",
            proposal.text_len(),
            run.len()
        );
        return None;
    }

    let mut interior = Vec::with_capacity(proposal.segment_count());
    for &offset in proposal.as_slice() {
        if offset == 0 || offset == run.len() {
            continue;
        }
        let Some(at) = seq.index_starting_at(run.offset() + offset) else {
            log::warn!(
                "run segmenter split a surrogate pair at offset {}; keeping rule boundaries",
                run.offset() + offset
            );
            return None;
        };
        debug_assert!(at > start && at < end);
        if !is_mark(classes[at]) {
            interior.push(at);
        }
    }

    Some(interior)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionarySegmenter;

    fn offsets(classifier: &BoundaryClassifier, text: &str) -> Vec<usize> {
        classifier.classify_text(text).as_slice().to_vec()
    }

    #[derive(Debug)]
    struct FixedSegmenter(Vec<usize>);

    impl RunSegmenter for FixedSegmenter {
        fn try_segment_run(&self, run: &ScriptRun<'_>) -> Option<BoundarySet> {
            BoundarySet::from_offsets(self.0.clone(), run.len()).ok()
        }
    }

    #[test]
    fn test_empty_input() {
        for granularity in Granularity::ALL {
            let classifier = BoundaryClassifier::new(granularity);
            assert!(classifier.classify_units(&[]).is_empty());
        }
    }

    #[test]
    fn test_offsets_are_code_units() {
        let classifier = BoundaryClassifier::new(Granularity::Grapheme);
        assert_eq!(offsets(&classifier, "\u{20BB7}野家"), vec![0, 2, 3, 4]);

        let classifier = BoundaryClassifier::new(Granularity::Sentence);
        assert_eq!(offsets(&classifier, "\u{20BB7}野家"), vec![0, 4]);
    }

    #[test]
    fn test_dictionary_refines_cjk_runs() {
        let lexicon = DictionarySegmenter::from_words(["吾輩", "ある"]);
        let classifier =
            BoundaryClassifier::new(Granularity::Word).with_run_segmenter(Arc::new(lexicon));
        assert_eq!(
            offsets(&classifier, "吾輩は猫である。"),
            vec![0, 2, 3, 4, 5, 7, 8]
        );
        assert!(classifier.has_run_segmenter());
    }

    #[test]
    fn test_runs_are_refined_independently() {
        let lexicon = DictionarySegmenter::from_words(["日本"]);
        let classifier =
            BoundaryClassifier::new(Granularity::Word).with_run_segmenter(Arc::new(lexicon));
        assert_eq!(offsets(&classifier, "日本 日本"), vec![0, 2, 3, 5]);
    }

    #[test]
    fn test_invalid_proposal_keeps_rule_boundaries() {
        // Splits the surrogate pair of the first ideograph
        let classifier = BoundaryClassifier::new(Granularity::Word)
            .with_run_segmenter(Arc::new(FixedSegmenter(vec![0, 1, 4])));
        assert_eq!(offsets(&classifier, "\u{20BB7}野家"), vec![0, 2, 3, 4]);
    }

    #[test]
    fn test_proposal_merges_run() {
        let classifier = BoundaryClassifier::new(Granularity::Word)
            .with_run_segmenter(Arc::new(FixedSegmenter(vec![0, 2, 4])));
        assert_eq!(offsets(&classifier, "\u{20BB7}野家"), vec![0, 2, 4]);
    }

    #[test]
    fn test_suppressions_apply_to_sentences() {
        let plain = BoundaryClassifier::new(Granularity::Sentence);
        assert_eq!(offsets(&plain, "Mr. Smith left."), vec![0, 4, 15]);

        let suppressing = BoundaryClassifier::new(Granularity::Sentence)
            .with_suppressions(Arc::new(SentenceSuppressor::new(["Mr"])));
        assert_eq!(offsets(&suppressing, "Mr. Smith left."), vec![0, 15]);
        assert!(suppressing.has_suppressions());
    }
}
