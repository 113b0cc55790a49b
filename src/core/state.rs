//! # Application State
//!
//! Core business state for Art Space. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Catalog              // immutable artwork list
//! ├── navigation: NavigationState   // current position, 1..=N
//! ├── button_policy: ButtonPolicy   // inert or dimmed at boundaries
//! └── show_position: bool           // "2/3" in the title bar
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::ButtonPolicy;
use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::navigation::NavigationState;
use crate::core::presenter::{Presentation, present};

pub struct App {
    catalog: Catalog,
    navigation: NavigationState,
    pub button_policy: ButtonPolicy,
    pub show_position: bool,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        let navigation = NavigationState::for_catalog(&catalog);
        Self {
            catalog,
            navigation,
            button_policy: ButtonPolicy::default(),
            show_position: true,
        }
    }

    pub fn from_config(catalog: Catalog, config: &ResolvedConfig) -> Self {
        Self {
            button_policy: config.button_policy,
            show_position: config.show_position,
            ..Self::new(catalog)
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Step one artwork back. `false` at the first artwork.
    pub fn step_backward(&mut self) -> bool {
        self.navigation.step_backward()
    }

    /// Step one artwork forward. `false` at the last artwork.
    pub fn step_forward(&mut self) -> bool {
        self.navigation.step_forward()
    }

    /// What to draw for the current position.
    pub fn presentation(&self) -> Presentation<'_> {
        present(&self.navigation, &self.catalog)
    }

    pub fn catalog_name(&self) -> &str {
        self.catalog.name().unwrap_or("Untitled catalog")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{ArtspaceConfig, CliOverrides, resolve};
    use crate::test_support::{test_app, test_catalog};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.navigation.current_index(), 1);
        assert_eq!(app.navigation.max_index(), 3);
        assert_eq!(app.button_policy, ButtonPolicy::Inert);
        assert!(app.show_position);
    }

    #[test]
    fn test_app_from_config_applies_display_settings() {
        let cli = CliOverrides {
            button_policy: Some(ButtonPolicy::Dim),
            ..Default::default()
        };
        let mut resolved = resolve(&ArtspaceConfig::default(), &cli);
        resolved.show_position = false;

        let app = App::from_config(test_catalog(2), &resolved);
        assert_eq!(app.button_policy, ButtonPolicy::Dim);
        assert!(!app.show_position);
        assert_eq!(app.navigation.max_index(), 2);
    }

    #[test]
    fn test_navigation_always_spans_the_catalog() {
        let mut app = App::new(test_catalog(2));
        assert_eq!(app.navigation().max_index(), app.catalog().len().get());
        assert!(app.step_forward());
        assert!(!app.step_forward());
        assert_eq!(app.presentation().artwork.id, 2);
        assert!(app.step_backward());
        assert!(!app.step_backward());
        assert_eq!(app.presentation().artwork.id, 1);
    }

    #[test]
    fn test_catalog_name_fallback() {
        let app = App::new(test_catalog(2));
        assert_eq!(app.catalog_name(), "Untitled catalog");
        let app = App::new(Catalog::builtin());
        assert_eq!(app.catalog_name(), "Art Space");
    }
}
