//! # Controller Component
//!
//! The two navigation buttons along the bottom of the screen.
//!
//! ```text
//! ┌──────────────────┐  ┌──────────────────┐
//! │    ◀ Previous    │  │      Next ▶      │
//! └──────────────────┘  └──────────────────┘
//! ```
//!
//! Pressing a button that cannot move is a silent no-op in the core. How
//! such a button *looks* depends on the `ButtonPolicy`: with `Inert` it is
//! drawn like any other, with `Dim` it is greyed out.
//!
//! Button geometry lives in [`Controller::button_areas`] so that mouse hit
//! testing uses exactly the rectangles that were drawn.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::ButtonPolicy;
use crate::tui::component::Component;

/// Height of the button row: label + top and bottom borders
pub const CONTROLLER_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Next,
}

impl Control {
    fn label(&self) -> &'static str {
        match self {
            Control::Previous => "◀ Previous",
            Control::Next => "Next ▶",
        }
    }
}

pub struct Controller {
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub policy: ButtonPolicy,
}

impl Controller {
    pub fn new(can_go_back: bool, can_go_forward: bool, policy: ButtonPolicy) -> Self {
        Self {
            can_go_back,
            can_go_forward,
            policy,
        }
    }

    /// Rectangles of the Previous and Next buttons inside `area`.
    ///
    /// One column of margin on each side, then two equal buttons with a
    /// gap a tenth of a button wide.
    pub fn button_areas(area: Rect) -> [(Control, Rect); 2] {
        let inner = Rect {
            x: area.x.saturating_add(1),
            width: area.width.saturating_sub(2),
            ..area
        };
        let [previous, _gap, next] = Layout::horizontal([
            Constraint::Fill(10),
            Constraint::Fill(1),
            Constraint::Fill(10),
        ])
        .areas(inner);
        [(Control::Previous, previous), (Control::Next, next)]
    }

    /// Which button, if any, covers the cell at `(column, row)`.
    pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Control> {
        Self::button_areas(area)
            .into_iter()
            .find(|(_, rect)| {
                column >= rect.x
                    && column < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height
            })
            .map(|(control, _)| control)
    }

    fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::Previous => self.can_go_back,
            Control::Next => self.can_go_forward,
        }
    }

    fn style_for(&self, control: Control) -> Style {
        let dimmed = self.policy == ButtonPolicy::Dim && !self.is_enabled(control);
        if dimmed {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        }
    }
}

impl Component for Controller {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        for (control, rect) in Self::button_areas(area) {
            let style = self.style_for(control);
            let button = Paragraph::new(control.label())
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::bordered().border_style(style));
            frame.render_widget(button, rect);
        }
    }
}
