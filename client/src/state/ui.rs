//! Local UI chrome state (theme, tips panel, armed tool, selection actions).
//!
//! DESIGN
//! ======
//! Mirrors just enough of the canvas engine for the chrome to render: which
//! tool is armed, whether the selection buttons apply, how many shapes exist.
//! Commands the engine must run once (delete, clone) are requested by bumping
//! a sequence counter the canvas host watches.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::catalog::FixtureButton;

/// UI state for the toolbar, tips panel, and active tool.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub tips_open: bool,
    pub tool: ToolType,
    pub has_selection: bool,
    pub shape_count: usize,
    pub delete_seq: u64,
    pub clone_seq: u64,
}

impl UiState {
    /// Arm `button`; pressing the armed button again disarms it.
    pub fn toggle_fixture(&mut self, button: FixtureButton) {
        self.tool = if self.tool == ToolType::Place(button) {
            ToolType::Select
        } else {
            ToolType::Place(button)
        };
    }

    /// Whether `button` is the armed fixture.
    pub fn is_active(&self, button: FixtureButton) -> bool {
        self.tool == ToolType::Place(button)
    }

    pub fn toggle_tips(&mut self) {
        self.tips_open = !self.tips_open;
    }

    /// Ask the canvas host to delete the selection.
    pub fn request_delete(&mut self) {
        self.delete_seq = self.delete_seq.saturating_add(1);
    }

    /// Ask the canvas host to clone the selection.
    pub fn request_clone(&mut self) {
        self.clone_seq = self.clone_seq.saturating_add(1);
    }
}

/// Available interaction tools.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToolType {
    #[default]
    Select,
    Place(FixtureButton),
    Draw,
}
