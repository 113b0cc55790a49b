//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing on screen moves on its own, so the loop only draws when an
//! `update()` returns `Effect::Redraw`, the terminal is resized, or on the
//! first frame. Between events it sleeps in `poll` for up to 500ms.

mod component;
mod components;
mod event;
pub mod plates;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::components::Control;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::plates::PlateLibrary;

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub plates: PlateLibrary,
}

impl TuiState {
    pub fn new(plates: PlateLibrary) -> Self {
        Self { plates }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Map a TUI event to the core actions it stands for.
///
/// `First`/`Last` are not single actions; they are expanded by the loop.
fn action_for(event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Previous => Some(Action::StepBackward),
        TuiEvent::Next => Some(Action::StepForward),
        TuiEvent::Quit => Some(Action::Quit),
        _ => None,
    }
}

fn action_for_control(control: Control) -> Action {
    match control {
        Control::Previous => Action::StepBackward,
        Control::Next => Action::StepForward,
    }
}

/// Step repeatedly until the boundary. Each step is an ordinary ±1 update.
/// Returns whether anything moved.
fn step_to_end(app: &mut App, action: Action) -> bool {
    let mut moved = false;
    while update(app, action) == Effect::Redraw {
        moved = true;
    }
    moved
}

pub fn run(config: ResolvedConfig, catalog: Catalog) -> std::io::Result<()> {
    let mut app = App::from_config(catalog, &config);
    let tui = TuiState::new(PlateLibrary::from_catalog(app.catalog()));
    info!(
        "Showing catalog '{}' ({} artworks, buttons {})",
        app.catalog_name(),
        app.navigation().max_index(),
        app.button_policy.label()
    );

    let mut terminal = ratatui::init();
    let terminal_mode_guard =
        TerminalModeGuard::new().inspect_err(|e| warn!("Failed to enable mouse capture: {}", e));

    let mut needs_redraw = true; // Force first frame

    'main: loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &tui))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event_timeout(IDLE_POLL);
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let action = match event {
                TuiEvent::Resize => {
                    needs_redraw = true;
                    continue;
                }
                TuiEvent::First => {
                    needs_redraw |= step_to_end(&mut app, Action::StepBackward);
                    continue;
                }
                TuiEvent::Last => {
                    needs_redraw |= step_to_end(&mut app, Action::StepForward);
                    continue;
                }
                TuiEvent::MouseClick(column, row) => {
                    let frame_area = terminal.get_frame().area();
                    let height = ui::descriptor_height(&app, frame_area.width);
                    match ui::hit_test_controls(column, row, frame_area, height) {
                        Some(control) => action_for_control(control),
                        None => continue,
                    }
                }
                other => match action_for(other) {
                    Some(action) => action,
                    None => continue,
                },
            };

            match update(&mut app, action) {
                Effect::Redraw => needs_redraw = true,
                Effect::Quit => break 'main,
                Effect::None => {}
            }
        }
    }

    debug!(
        "Leaving at artwork {}/{}",
        app.navigation().current_index(),
        app.navigation().max_index()
    );
    drop(terminal_mode_guard);
    ratatui::restore();
    Ok(())
}
