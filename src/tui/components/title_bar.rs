//! # TitleBar Component
//!
//! Top status line: catalog name, position within the catalog, key hints.
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.catalog_name().to_string(), Some((2, 3)));
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **With position**: `"Art Space | Weekend gallery | 2/3"`
//! 2. **Without position**: `"Art Space | Weekend gallery"`
//!
//! The key hints are right-aligned and dropped first when the line is too
//! narrow to hold both.

use crate::tui::component::Component;
use crate::tui::components::cells;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

const APP_NAME: &str = "Art Space";
const KEY_HINTS: &str = "←/→ browse  q quit";

pub struct TitleBar {
    pub catalog_name: String,
    /// `(position, total)`, or `None` to hide the counter.
    pub position: Option<(usize, usize)>,
}

impl TitleBar {
    pub fn new(catalog_name: String, position: Option<(usize, usize)>) -> Self {
        Self {
            catalog_name,
            position,
        }
    }

    fn title_text(&self) -> String {
        let mut text = APP_NAME.to_string();
        if self.catalog_name != APP_NAME {
            text.push_str(" | ");
            text.push_str(&self.catalog_name);
        }
        if let Some((position, total)) = self.position {
            text.push_str(&format!(" | {position}/{total}"));
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = self.title_text();
        let title_width = title.width();
        let hints_width = KEY_HINTS.width();

        let title_line = Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        ));

        if title_width + hints_width + 2 > usize::from(area.width) {
            frame.render_widget(title_line, area);
            return;
        }

        let [title_area, hints_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(cells(hints_width))]).areas(area);
        frame.render_widget(title_line, title_area);
        frame.render_widget(
            Line::from(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))),
            hints_area,
        );
    }
}
