//! Bounded context around a candidate boundary
//!
//! The scanner keeps the last few resolved classes in a shifting array and
//! hands rules a [`Window`] over it, so every lookup is O(1) no matter how
//! far apart the interesting scalars are in the input.

/// Number of resolved classes remembered behind the current position
pub const HISTORY_LEN: usize = 3;

/// Shifting history of resolved classes, most recent first
#[derive(Debug, Clone, Copy)]
pub struct History<C> {
    slots: [Option<C>; HISTORY_LEN],
}

impl<C: Copy> History<C> {
    /// Empty history at start of text
    pub fn new() -> Self {
        Self {
            slots: [None; HISTORY_LEN],
        }
    }

    /// Push a newly resolved class, dropping the oldest one
    pub fn push(&mut self, class: C) {
        self.slots.copy_within(0..HISTORY_LEN - 1, 1);
        self.slots[0] = Some(class);
    }

    /// Resolved class `back` steps behind the position (0 is the nearest)
    #[inline]
    pub fn get(&self, back: usize) -> Option<C> {
        self.slots.get(back).copied().flatten()
    }

    /// Whether nothing has been resolved yet
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots[0].is_none()
    }
}

impl<C: Copy> Default for History<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a rule may look at when deciding one position
///
/// `pos` is the scalar index right of the candidate boundary. Raw accessors
/// see the input as decoded; resolved accessors skip classes that were
/// absorbed into their predecessor.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a, C, S> {
    pub(crate) classes: &'a [C],
    pub(crate) next_resolved: &'a [Option<usize>],
    pub(crate) next_anchor: &'a [Option<usize>],
    pub(crate) history: &'a History<C>,
    pub(crate) state: S,
    pub(crate) pos: usize,
}

impl<'a, C: Copy, S: Copy> Window<'a, C, S> {
    /// Scalar index right of the boundary
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Raw class immediately left of the boundary
    #[inline]
    pub fn left_raw(&self) -> Option<C> {
        self.pos
            .checked_sub(1)
            .and_then(|index| self.classes.get(index))
            .copied()
    }

    /// Raw class immediately right of the boundary
    #[inline]
    pub fn right_raw(&self) -> Option<C> {
        self.classes.get(self.pos).copied()
    }

    /// Nearest resolved class on the left
    #[inline]
    pub fn left(&self) -> Option<C> {
        self.history.get(0)
    }

    /// Second resolved class on the left
    #[inline]
    pub fn left2(&self) -> Option<C> {
        self.history.get(1)
    }

    /// Nearest resolved class on the right
    #[inline]
    pub fn right(&self) -> Option<C> {
        self.resolved_from(self.pos)
    }

    /// Resolved class following [`Window::right`]
    pub fn right2(&self) -> Option<C> {
        let first = self.next_resolved.get(self.pos).copied().flatten()?;
        self.resolved_from(first + 1)
    }

    /// First anchor class at or after the boundary
    #[inline]
    pub fn anchor_ahead(&self) -> Option<C> {
        let index = self.next_anchor.get(self.pos).copied().flatten()?;
        self.classes.get(index).copied()
    }

    /// Rule state after everything left of the boundary
    #[inline]
    pub fn state(&self) -> S {
        self.state
    }

    fn resolved_from(&self, start: usize) -> Option<C> {
        let index = self.next_resolved.get(start).copied().flatten()?;
        self.classes.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_shifts() {
        let mut history = History::new();
        assert!(history.is_empty());

        history.push('a');
        history.push('b');
        history.push('c');
        history.push('d');

        assert_eq!(history.get(0), Some('d'));
        assert_eq!(history.get(1), Some('c'));
        assert_eq!(history.get(2), Some('b'));
        assert_eq!(history.get(3), None);
    }

    #[test]
    fn test_window_lookups() {
        // 'x' stands for a transparent class
        let classes = ['a', 'x', 'b', 'x', 'c'];
        let next_resolved = [Some(0), Some(2), Some(2), Some(4), Some(4), None];
        let next_anchor = [Some(4), Some(4), Some(4), Some(4), Some(4), None];
        let mut history = History::new();
        history.push('a');

        let window = Window {
            classes: &classes,
            next_resolved: &next_resolved,
            next_anchor: &next_anchor,
            history: &history,
            state: (),
            pos: 2,
        };

        assert_eq!(window.left_raw(), Some('x'));
        assert_eq!(window.right_raw(), Some('b'));
        assert_eq!(window.left(), Some('a'));
        assert_eq!(window.left2(), None);
        assert_eq!(window.right(), Some('b'));
        assert_eq!(window.right2(), Some('c'));
        assert_eq!(window.anchor_ahead(), Some('c'));
    }
}
