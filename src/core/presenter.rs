//! # Artwork Presenter
//!
//! Pure mapping from the navigation position and the catalog to what the
//! screen should show. No state, no I/O; call it after every change.

use crate::core::catalog::{Artwork, Catalog};
use crate::core::navigation::NavigationState;

/// Everything the rendering surface needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation<'a> {
    pub artwork: &'a Artwork,
    /// 1-based position of `artwork`.
    pub position: usize,
    pub total: usize,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

/// Look up the artwork under the current position.
///
/// # Panics
///
/// If `navigation` was not built for `catalog` (see
/// [`NavigationState::for_catalog`]). `App` owns both and keeps them paired.
pub fn present<'a>(navigation: &NavigationState, catalog: &'a Catalog) -> Presentation<'a> {
    let position = navigation.current_index();
    let artwork = catalog
        .get(position)
        .expect("navigation bounds match the catalog length");

    Presentation {
        artwork,
        position,
        total: catalog.len().get(),
        can_go_back: navigation.can_step_backward(),
        can_go_forward: navigation.can_step_forward(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_catalog;

    #[test]
    fn test_present_first_artwork_initially() {
        let catalog = test_catalog(3);
        let nav = NavigationState::for_catalog(&catalog);
        let view = present(&nav, &catalog);
        assert_eq!(view.artwork.id, 1);
        assert_eq!(view.position, 1);
        assert_eq!(view.total, 3);
        assert!(!view.can_go_back);
        assert!(view.can_go_forward);
    }

    #[test]
    fn test_present_middle_artwork_allows_both_directions() {
        let catalog = test_catalog(3);
        let mut nav = NavigationState::for_catalog(&catalog);
        nav.step_forward();
        let view = present(&nav, &catalog);
        assert_eq!(view.artwork.title, "Artwork 2");
        assert!(view.can_go_back);
        assert!(view.can_go_forward);
    }

    #[test]
    fn test_present_last_artwork_blocks_forward() {
        let catalog = test_catalog(3);
        let mut nav = NavigationState::for_catalog(&catalog);
        nav.step_forward();
        nav.step_forward();
        let view = present(&nav, &catalog);
        assert_eq!(view.artwork.id, 3);
        assert!(view.can_go_back);
        assert!(!view.can_go_forward);
    }

    #[test]
    fn test_present_single_artwork_blocks_both() {
        let catalog = test_catalog(1);
        let nav = NavigationState::for_catalog(&catalog);
        let view = present(&nav, &catalog);
        assert_eq!(view.artwork.id, 1);
        assert!(!view.can_go_back);
        assert!(!view.can_go_forward);
    }

    #[test]
    fn test_present_artwork_id_matches_position() {
        let catalog = test_catalog(4);
        let mut nav = NavigationState::for_catalog(&catalog);
        for _ in 0..6 {
            let view = present(&nav, &catalog);
            assert_eq!(view.artwork.id, view.position);
            assert_eq!(view.position, nav.current_index());
            nav.step_forward();
        }
    }

    #[test]
    #[should_panic(expected = "navigation bounds match the catalog length")]
    fn test_present_rejects_navigation_for_another_catalog() {
        let mut nav = NavigationState::for_catalog(&test_catalog(4));
        nav.step_forward();
        nav.step_forward();
        nav.step_forward();
        present(&nav, &test_catalog(2));
    }
}
