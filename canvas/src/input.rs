//! Input model: tools, modifier keys, mouse buttons, and the gesture state machine.
//!
//! `Tool` and `Modifiers` capture the user's intent at the time of a pointer
//! event. `UiState` is the persistent editor state the renderer reads.
//! `InputState` is the gesture tracked between pointer-down and pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::ShapeId;
use crate::fixtures::Fixture;
use crate::hit::Bounds;
use crate::theme::Theme;
use crate::viewport::Point;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Pointer / selection tool (default).
    #[default]
    Select,
    /// The next click places this fixture.
    Place(Fixture),
    /// Clicks collect vertices of a freehand polygon.
    DrawPolygon,
}

impl Tool {
    /// Whether clicks on the canvas create shapes instead of selecting them.
    #[must_use]
    pub fn is_creating(self) -> bool {
        !matches!(self, Self::Select)
    }
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key as reported by the browser (e.g. `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Whether the key removes the current selection.
    #[must_use]
    pub fn is_delete(&self) -> bool {
        matches!(self.0.as_str(), "Delete" | "Backspace")
    }

    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Currently active tool.
    pub tool: Tool,
    /// Current color theme.
    pub theme: Theme,
    /// Selected shapes in selection order.
    pub selected_ids: Vec<ShapeId>,
    /// Rubber-band rectangle while a marquee drag is in progress.
    pub marquee: Option<Bounds>,
}

impl UiState {
    #[must_use]
    pub fn is_selected(&self, id: &ShapeId) -> bool {
        self.selected_ids.contains(id)
    }
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is dragging the selected shapes.
    DraggingSelection {
        /// Pointer position at pointer-down, where a cancelled drag returns to.
        origin: Point,
        /// Pointer position at the previous event, used to compute the move delta.
        last: Point,
        /// Whether any movement happened since pointer-down.
        moved: bool,
    },
    /// The user is rubber-band selecting from an anchor corner.
    Marquee {
        /// Where the drag started.
        anchor: Point,
    },
}
