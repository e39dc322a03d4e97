//! Canvas input mapping: DOM events and toolbar tools to engine types.

#[cfg(feature = "csr")]
use crate::state::ui::ToolType;
#[cfg(feature = "csr")]
use crate::util::catalog::{self, Category, FixtureButton};

#[cfg(feature = "csr")]
use canvas::fixtures::Fixture;
#[cfg(feature = "csr")]
use canvas::input::{Button as CanvasButton, Modifiers as CanvasModifiers, Tool as CanvasTool};
#[cfg(feature = "csr")]
use canvas::viewport::Point as CanvasPoint;

#[cfg(feature = "csr")]
pub fn fixture_for(button: FixtureButton) -> Option<Fixture> {
    match (button.category, button.id) {
        (Category::Rooms, 1) => Some(Fixture::MeetingRoom),
        (Category::Rooms, 2) => Some(Fixture::Office),
        (Category::SharedDesks, 1) => Some(Fixture::SharedDesk),
        (Category::SharedDesks, 2) => Some(Fixture::RoundDesk),
        (Category::Chairs, 1) => Some(Fixture::Chair),
        _ => None,
    }
}

#[cfg(feature = "csr")]
pub fn button_for(fixture: Fixture) -> FixtureButton {
    match fixture {
        Fixture::MeetingRoom => catalog::MEETING_ROOM,
        Fixture::Office => catalog::OFFICE,
        Fixture::SharedDesk => catalog::SHARED_DESK,
        Fixture::RoundDesk => catalog::ROUND_DESK,
        Fixture::Chair => catalog::CHAIR,
    }
}

#[cfg(feature = "csr")]
pub fn map_tool(tool: ToolType) -> CanvasTool {
    match tool {
        ToolType::Select => CanvasTool::Select,
        ToolType::Place(button) => fixture_for(button).map_or(CanvasTool::Select, CanvasTool::Place),
        ToolType::Draw => CanvasTool::DrawPolygon,
    }
}

#[cfg(feature = "csr")]
pub fn tool_from_canvas(tool: CanvasTool) -> ToolType {
    match tool {
        CanvasTool::Select => ToolType::Select,
        CanvasTool::Place(fixture) => ToolType::Place(button_for(fixture)),
        CanvasTool::DrawPolygon => ToolType::Draw,
    }
}

#[cfg(feature = "csr")]
pub fn map_button(button: i16) -> CanvasButton {
    match button {
        1 => CanvasButton::Middle,
        2 => CanvasButton::Secondary,
        _ => CanvasButton::Primary,
    }
}

#[cfg(feature = "csr")]
pub fn map_modifiers(shift: bool, ctrl: bool, alt: bool, meta: bool) -> CanvasModifiers {
    CanvasModifiers { shift, ctrl, alt, meta }
}

#[cfg(feature = "csr")]
pub fn should_prevent_default_key(key: &str) -> bool {
    matches!(key, "Delete" | "Backspace" | "Escape")
}

/// Pointer position in client coordinates; the engine subtracts the canvas offset.
#[cfg(feature = "csr")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> CanvasPoint {
    CanvasPoint::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}
