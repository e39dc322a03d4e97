//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render editor chrome and the canvas surface while reading and
//! writing the shared `UiState` from Leptos context.

pub mod canvas_host;
pub mod fixture_rail;
pub mod status_bar;
pub mod tips_panel;
pub mod toolbar;
