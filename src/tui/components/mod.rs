//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Every component here is stateless and props-based: it receives all data
//! as struct fields and renders into the `Rect` it is given.
//!
//! - `TitleBar`: Top status line with catalog name and position
//! - `ArtworkWall`: The framed plate standing in for the image
//! - `Descriptor`: Title and justified description
//! - `Controller`: Previous / Next buttons, plus their hit testing
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into `App`.
//! This makes dependencies explicit and components testable.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! Descriptor::new(&artwork.title, &artwork.description).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! Descriptor::render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Top status line)
//! ├── artwork_wall.rs   (Framed plate)
//! ├── descriptor.rs     (Title + justified description)
//! └── controller.rs     (Navigation buttons)
//! ```

pub mod artwork_wall;
pub mod controller;
pub mod descriptor;
mod title_bar;

pub use artwork_wall::ArtworkWall;
pub use controller::{CONTROLLER_HEIGHT, Control, Controller};
pub use descriptor::Descriptor;
pub use title_bar::TitleBar;

/// A cell count as `u16`, pinned at `u16::MAX` for content no terminal can hold.
pub(crate) fn cells(count: usize) -> u16 {
    u16::try_from(count).unwrap_or(u16::MAX)
}

/// Rows of a rendered buffer as plain strings.
#[cfg(test)]
pub(crate) fn buffer_lines(buffer: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// The whole buffer as one string, rows concatenated.
#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect::<String>()
}
