//! # Descriptor Component
//!
//! Bold centered title over a justified description, the caption under
//! the artwork wall.
//!
//! The height depends on the width (both texts wrap), so the layout asks
//! [`Descriptor::required_height`] before splitting the screen. Measuring
//! and rendering build the same lines.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::components::cells;

/// Blank columns kept on each side of the text
const HORIZONTAL_PADDING: u16 = 2;
/// Blank rows under the description, above the buttons
const BOTTOM_PADDING: u16 = 1;

pub struct Descriptor<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

impl<'a> Descriptor<'a> {
    pub fn new(title: &'a str, description: &'a str) -> Self {
        Self { title, description }
    }

    /// Rows needed to show everything at `width` columns.
    pub fn required_height(&self, width: u16) -> u16 {
        cells(self.lines(width).len()).saturating_add(BOTTOM_PADDING)
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let inner = inner_width(width);
        if inner == 0 {
            return Vec::new();
        }

        let title_style = Style::default().add_modifier(Modifier::BOLD);
        let mut lines: Vec<Line<'static>> = textwrap::wrap(self.title, wrap_options(inner))
            .into_iter()
            .map(|l| Line::styled(l.into_owned(), title_style).alignment(Alignment::Center))
            .collect();

        let description = justify(self.description, inner);
        if !description.is_empty() {
            lines.push(Line::default());
            lines.extend(description.into_iter().map(Line::raw));
        }
        lines
    }
}

impl Component for Descriptor<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text_area = Rect {
            x: area.x + HORIZONTAL_PADDING.min(area.width / 2),
            width: inner_width(area.width),
            ..area
        };
        frame.render_widget(Paragraph::new(self.lines(area.width)), text_area);
    }
}

fn inner_width(width: u16) -> u16 {
    width.saturating_sub(HORIZONTAL_PADDING * 2)
}

fn wrap_options(width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Wrap `text` to `width` columns and stretch every line but the last of
/// each paragraph to exactly `width` by widening the gaps between words.
/// Leftover spaces go to the leftmost gaps.
pub fn justify(text: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut out = Vec::new();
    for paragraph in text.lines() {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }
        let wrapped = textwrap::wrap(paragraph, wrap_options(width));
        let last = wrapped.len().saturating_sub(1);
        for (i, line) in wrapped.iter().enumerate() {
            if i == last {
                out.push(line.trim_end().to_string());
            } else {
                out.push(justify_line(line, width as usize));
            }
        }
    }
    out
}

fn justify_line(line: &str, width: usize) -> String {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.len() < 2 {
        return line.trim_end().to_string();
    }

    let used: usize = words.iter().map(|w| w.width()).sum();
    let gaps = words.len() - 1;
    let free = width.saturating_sub(used).max(gaps);
    let base = free / gaps;
    let extra = free % gaps;

    let mut justified = String::with_capacity(width);
    for (i, word) in words.iter().enumerate() {
        justified.push_str(word);
        if i < gaps {
            let spaces = base + usize::from(i < extra);
            justified.extend(std::iter::repeat_n(' ', spaces));
        }
    }
    justified
}
