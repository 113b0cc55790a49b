use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    ArtworkWall, CONTROLLER_HEIGHT, Control, Controller, Descriptor, TitleBar,
};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

/// Where each part of the screen goes for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub title: Rect,
    pub wall: Rect,
    pub descriptor: Rect,
    pub controller: Rect,
}

/// Split the screen top to bottom: title bar, wall, descriptor, buttons.
/// The wall takes whatever the other three leave.
pub fn screen_areas(area: Rect, descriptor_height: u16) -> ScreenAreas {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([
        Length(1),
        Min(0),
        Length(descriptor_height),
        Length(CONTROLLER_HEIGHT),
    ]);
    let [title, wall, descriptor, controller] = layout.areas(area);
    ScreenAreas {
        title,
        wall,
        descriptor,
        controller,
    }
}

/// Rows the caption of the current artwork needs at `width` columns.
pub fn descriptor_height(app: &App, width: u16) -> u16 {
    let artwork = app.presentation().artwork;
    Descriptor::new(&artwork.title, &artwork.description).required_height(width)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &TuiState) {
    let view = app.presentation();
    let area = frame.area();
    let areas = screen_areas(area, descriptor_height(app, area.width));

    let position = app.show_position.then_some((view.position, view.total));
    TitleBar::new(app.catalog_name().to_string(), position).render(frame, areas.title);

    let plate = tui.plates.resolve(&view.artwork.image);
    ArtworkWall::new(&plate).render(frame, areas.wall);

    Descriptor::new(&view.artwork.title, &view.artwork.description)
        .render(frame, areas.descriptor);

    Controller::new(view.can_go_back, view.can_go_forward, app.button_policy)
        .render(frame, areas.controller);
}

/// Hit test: given a screen cell, find which navigation button (if any) is there.
pub fn hit_test_controls(
    column: u16,
    row: u16,
    frame_area: Rect,
    descriptor_height: u16,
) -> Option<Control> {
    let areas = screen_areas(frame_area, descriptor_height);
    Controller::hit_test(areas.controller, column, row)
}
