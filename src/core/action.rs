//! # Actions
//!
//! Everything that can happen in Art Space becomes an `Action`.
//! User presses →? That's `Action::StepForward`.
//! User clicks "Previous"? That's `Action::StepBackward`.
//!
//! The `update()` function applies an action to the state and tells the
//! caller what to do next via an `Effect`. No terminal I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! A step that hits a boundary is not an error: the state is left alone
//! and `Effect::None` tells the adapter there is nothing to redraw.

use log::debug;

use crate::core::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    StepBackward,
    StepForward,
    Quit,
}

/// What the adapter should do after an `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The position changed; dependent content must be drawn again.
    Redraw,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!(
        "Action {:?} at position {}/{}",
        action,
        app.navigation().current_index(),
        app.navigation().max_index()
    );

    let moved = match action {
        Action::StepBackward => app.step_backward(),
        Action::StepForward => app.step_forward(),
        Action::Quit => return Effect::Quit,
    };

    if moved {
        debug!("Now showing artwork {}", app.navigation().current_index());
        Effect::Redraw
    } else {
        debug!("{:?} ignored at boundary", action);
        Effect::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_app, test_catalog};

    #[test]
    fn test_step_forward_requests_redraw() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::StepForward), Effect::Redraw);
        assert_eq!(app.navigation().current_index(), 2);
    }

    #[test]
    fn test_step_backward_at_start_is_silent() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::StepBackward), Effect::None);
        assert_eq!(app.navigation().current_index(), 1);
    }

    #[test]
    fn test_quit_leaves_position_alone() {
        let mut app = test_app();
        update(&mut app, Action::StepForward);
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
        assert_eq!(app.navigation().current_index(), 2);
    }

    #[test]
    fn test_reference_walkthrough() {
        let mut app = test_app();
        assert_eq!(app.presentation().artwork.id, 1);

        assert_eq!(update(&mut app, Action::StepBackward), Effect::None);
        assert_eq!(app.presentation().artwork.id, 1);

        update(&mut app, Action::StepForward);
        update(&mut app, Action::StepForward);
        assert_eq!(app.presentation().artwork.id, 3);

        assert_eq!(update(&mut app, Action::StepForward), Effect::None);
        assert_eq!(app.presentation().artwork.id, 3);

        assert_eq!(update(&mut app, Action::StepBackward), Effect::Redraw);
        assert_eq!(app.presentation().artwork.id, 2);
    }

    #[test]
    fn test_forward_at_end_stays_put() {
        let mut app = App::new(test_catalog(4));
        for _ in 0..3 {
            update(&mut app, Action::StepForward);
        }
        for _ in 0..4 {
            assert_eq!(update(&mut app, Action::StepForward), Effect::None);
            assert_eq!(app.navigation().current_index(), 4);
        }
    }
}
