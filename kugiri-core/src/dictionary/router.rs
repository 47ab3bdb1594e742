//! Run segmenter selection by script family

use std::collections::HashMap;
use std::sync::Arc;

use super::{DictionarySegmenter, RunScript, RunSegmenter, ScriptRun};
use crate::boundary::BoundarySet;

/// Hands each run to the segmenter registered for its script family
///
/// Runs of a family without a segmenter are declined, which keeps the
/// rule boundaries for them.
#[derive(Debug, Clone, Default)]
pub struct ScriptRouter {
    routes: HashMap<RunScript, Arc<dyn RunSegmenter>>,
}

impl ScriptRouter {
    /// Router without any segmenter
    pub fn new() -> Self {
        Self::default()
    }

    /// One longest-match lexicon per script family found in `words`
    ///
    /// Words that do not start with a space-less script can never match a
    /// run and are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicons: HashMap<RunScript, DictionarySegmenter> = HashMap::new();
        for word in words {
            let word = word.as_ref();
            match RunScript::of_word(word) {
                Some(script) => lexicons.entry(script).or_default().insert(word),
                None => log::debug!("lexicon entry {word:?} is not in a space-less script"),
            }
        }

        let mut router = Self::new();
        for (script, lexicon) in lexicons {
            router.insert(script, Arc::new(lexicon));
        }
        router
    }

    /// Route runs of `script` to `segmenter`, replacing any previous route
    pub fn insert(&mut self, script: RunScript, segmenter: Arc<dyn RunSegmenter>) {
        self.routes.insert(script, segmenter);
    }

    /// Builder form of [`ScriptRouter::insert`]
    pub fn with_route(mut self, script: RunScript, segmenter: Arc<dyn RunSegmenter>) -> Self {
        self.insert(script, segmenter);
        self
    }

    /// Whether runs of `script` have a segmenter
    pub fn serves(&self, script: RunScript) -> bool {
        self.routes.contains_key(&script)
    }

    /// Whether no script family is served
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl RunSegmenter for ScriptRouter {
    fn try_segment_run(&self, run: &ScriptRun<'_>) -> Option<BoundarySet> {
        self.routes.get(&run.script())?.try_segment_run(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::ScalarSequence;

    fn segment(router: &ScriptRouter, script: RunScript, text: &str) -> Option<Vec<usize>> {
        let seq = ScalarSequence::from_text(text);
        let run = ScriptRun::new(script, seq.as_slice());
        router
            .try_segment_run(&run)
            .map(|set| set.as_slice().to_vec())
    }

    #[test]
    fn test_words_grouped_by_script() {
        let router = ScriptRouter::from_words(["吾輩", "ある", "ภาษา", "ไทย", "word"]);

        assert!(router.serves(RunScript::Cjk));
        assert!(router.serves(RunScript::SouthEastAsian));
        assert_eq!(
            segment(&router, RunScript::Cjk, "吾輩である"),
            Some(vec![0, 2, 3, 5])
        );
        assert_eq!(
            segment(&router, RunScript::SouthEastAsian, "ภาษาไทย"),
            Some(vec![0, 4, 7])
        );
    }

    #[test]
    fn test_unserved_script_declines() {
        let router = ScriptRouter::from_words(["日本"]);
        assert!(!router.serves(RunScript::SouthEastAsian));
        assert_eq!(segment(&router, RunScript::SouthEastAsian, "ภาษา"), None);
        assert!(ScriptRouter::new().is_empty());
    }

    #[test]
    fn test_explicit_route() {
        let router = ScriptRouter::new().with_route(
            RunScript::Cjk,
            Arc::new(DictionarySegmenter::from_words(["野家"])),
        );
        assert_eq!(
            segment(&router, RunScript::Cjk, "\u{20BB7}野家"),
            Some(vec![0, 2, 4])
        );
    }
}
