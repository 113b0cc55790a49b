//! # Navigation State
//!
//! A single bounded counter over the catalog positions `[1, N]`.
//!
//! ```text
//!   back ┌──┐      ┌──┐      ┌──┐ fwd
//!   ───▶ │ 1│ ◀──▶ │ 2│ ◀──▶ │ N│ ◀───
//!   (no-op)└──┘      └──┘      └──┘ (no-op)
//! ```
//!
//! Both steps saturate: at a boundary they leave the position untouched and
//! report `false`. Nothing here can fail.

use std::num::NonZeroUsize;

use crate::core::catalog::Catalog;

/// First position of every catalog. Positions are 1-based.
pub const MIN_INDEX: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    current_index: usize,
    max_index: usize,
}

impl NavigationState {
    /// Starts at the first position of a sequence of `len` items.
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            current_index: MIN_INDEX,
            max_index: len.get(),
        }
    }

    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.len())
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn min_index(&self) -> usize {
        MIN_INDEX
    }

    pub fn max_index(&self) -> usize {
        self.max_index
    }

    pub fn can_step_backward(&self) -> bool {
        self.current_index > MIN_INDEX
    }

    pub fn can_step_forward(&self) -> bool {
        self.current_index < self.max_index
    }

    /// Moves one position back. Returns whether the position changed.
    pub fn step_backward(&mut self) -> bool {
        if self.can_step_backward() {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    /// Moves one position forward. Returns whether the position changed.
    pub fn step_forward(&mut self) -> bool {
        if self.can_step_forward() {
            self.current_index += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav(len: usize) -> NavigationState {
        NavigationState::new(NonZeroUsize::new(len).unwrap())
    }

    fn assert_in_bounds(state: &NavigationState) {
        assert!(state.min_index() <= state.current_index());
        assert!(state.current_index() <= state.max_index());
    }

    #[test]
    fn test_starts_at_min_index() {
        let state = nav(3);
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.min_index(), 1);
        assert_eq!(state.max_index(), 3);
    }

    #[test]
    fn test_step_backward_at_start_is_noop() {
        let mut state = nav(3);
        assert!(!state.step_backward());
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn test_step_forward_stops_at_max() {
        let mut state = nav(3);
        assert!(state.step_forward());
        assert!(state.step_forward());
        assert!(!state.step_forward());
        assert_eq!(state.current_index(), 3);
    }

    #[test]
    fn test_single_item_never_moves() {
        let mut state = nav(1);
        assert!(!state.can_step_backward());
        assert!(!state.can_step_forward());
        assert!(!state.step_forward());
        assert!(!state.step_backward());
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn test_invariant_holds_over_mixed_walk() {
        let mut state = nav(5);
        // f = forward, b = backward
        for step in "ffbfffffbbbbbbbbffbf".chars() {
            match step {
                'f' => state.step_forward(),
                _ => state.step_backward(),
            };
            assert_in_bounds(&state);
        }
    }

    #[test]
    fn test_forward_then_backward_is_identity_off_boundary() {
        for len in 2..=6 {
            for start in 1..len {
                let mut state = nav(len);
                for _ in 1..start {
                    state.step_forward();
                }
                let before = state;
                assert!(state.step_forward());
                assert!(state.step_backward());
                assert_eq!(state, before);
            }
        }
    }

    #[test]
    fn test_flags_follow_position() {
        let mut state = nav(2);
        assert!(!state.can_step_backward());
        assert!(state.can_step_forward());
        state.step_forward();
        assert!(state.can_step_backward());
        assert!(!state.can_step_forward());
    }
}
