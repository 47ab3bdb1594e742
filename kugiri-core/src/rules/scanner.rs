//! Generic rule scanner
//!
//! One pass classifies the scalars, two backward passes precompute the
//! lookahead indices, and a forward pass evaluates the rule table at every
//! interior position. Total work is linear in the input length.

use super::window::{History, Window};
use super::{BreakRules, Verdict};
use crate::decode::ScalarSequence;

/// Result of scanning one input with one rule set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan<C> {
    /// Break class of every scalar
    pub classes: Vec<C>,
    /// Scalar indices where a segment starts, followed by the scalar count
    ///
    /// Empty for an empty input, otherwise begins with 0 and ends with
    /// `classes.len()`.
    pub breaks: Vec<usize>,
}

impl<C> Scan<C> {
    /// Number of segments found
    pub fn segment_count(&self) -> usize {
        self.breaks.len().saturating_sub(1)
    }
}

/// Scan `seq` with the rules of `R`
pub fn scan<R: BreakRules>(seq: &ScalarSequence) -> Scan<R::Class> {
    let classes: Vec<R::Class> = seq.iter().map(R::classify).collect();
    let count = classes.len();
    if count == 0 {
        return Scan {
            classes,
            breaks: Vec::new(),
        };
    }

    let next_resolved = next_matching(&classes, |class| !R::is_transparent(class));
    let next_anchor = next_matching(&classes, R::is_anchor);

    let mut breaks = Vec::with_capacity(count / 2 + 2);
    breaks.push(0);

    let mut history = History::new();
    let mut state = R::State::default();
    absorb::<R>(&mut history, &mut state, classes[0]);

    for pos in 1..count {
        let window = Window {
            classes: &classes,
            next_resolved: &next_resolved,
            next_anchor: &next_anchor,
            history: &history,
            state,
            pos,
        };

        let decided = R::rules().iter().find(|rule| rule.applies(&window));
        let verdict = decided.map_or_else(R::fallback, |rule| rule.verdict);
        if let Some(rule) = decided {
            log::trace!("position {pos}: {} -> {verdict:?}", rule.id);
        }

        if verdict == Verdict::Break {
            breaks.push(pos);
        }
        absorb::<R>(&mut history, &mut state, classes[pos]);
    }

    breaks.push(count);
    Scan { classes, breaks }
}

/// Fold the class at the next position into history and state
///
/// A transparent class is absorbed into the preceding resolved class unless
/// it opens the text or follows a hard class, in which case it stands for
/// itself.
fn absorb<R: BreakRules>(history: &mut History<R::Class>, state: &mut R::State, class: R::Class) {
    if R::is_transparent(class) {
        if let Some(previous) = history.get(0) {
            if !R::is_hard(previous) {
                return;
            }
        }
    }
    history.push(class);
    *state = R::advance(*state, class);
}

/// For every index, the first index at or after it whose class passes `keep`
///
/// The returned vector has one extra slot for the end of text.
fn next_matching<C: Copy>(classes: &[C], keep: impl Fn(C) -> bool) -> Vec<Option<usize>> {
    let mut next = vec![None; classes.len() + 1];
    for index in (0..classes.len()).rev() {
        next[index] = if keep(classes[index]) {
            Some(index)
        } else {
            next[index + 1]
        };
    }
    next
}
