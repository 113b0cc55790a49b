//! # ArtworkWall Component
//!
//! The plate in a thick white frame, centered in whatever space is left
//! after the text and buttons. Plates larger than the frame are cropped
//! from the bottom-right.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::components::cells;

pub struct ArtworkWall<'a> {
    pub plate: &'a str,
}

impl<'a> ArtworkWall<'a> {
    pub fn new(plate: &'a str) -> Self {
        Self { plate }
    }

    /// Width and height of the plate in cells, pinned at `u16::MAX`.
    fn plate_size(&self) -> (u16, u16) {
        let width = self.plate.lines().map(|l| l.width()).max().unwrap_or(0);
        let height = self.plate.lines().count();
        (cells(width), cells(height))
    }
}

impl Component for ArtworkWall<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (plate_width, plate_height) = self.plate_size();

        // Frame hugs the plate: border (2) + inner padding (2 wide, 0 tall)
        let frame_width = plate_width
            .saturating_add(4)
            .min(area.width.saturating_sub(2));
        let frame_height = plate_height
            .saturating_add(2)
            .min(area.height.saturating_sub(2));

        let [column] = Layout::horizontal([Constraint::Length(frame_width)])
            .flex(Flex::Center)
            .areas(area);
        let [framed] = Layout::vertical([Constraint::Length(frame_height)])
            .flex(Flex::Center)
            .areas(column);

        let block = Block::bordered()
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::White))
            .padding(Padding::horizontal(1));
        let inner = block.inner(framed);
        frame.render_widget(block, framed);
        frame.render_widget(Paragraph::new(self.plate), inner);
    }
}
