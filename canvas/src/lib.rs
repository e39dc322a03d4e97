//! Canvas rendering and input engine for the floor-plan editor.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! shapes on the floor plan: translating raw DOM input events into document
//! mutations, building fixtures and freehand polygons, hit-testing shapes for
//! selection, and rendering the scene. The host UI layer is responsible only
//! for wiring DOM events and toolbar buttons to the engine and reacting to the
//! resulting [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | In-memory document store and shape types |
//! | [`fixtures`] | Predefined rooms, desks and chairs |
//! | [`drawing`] | Freehand polygon draft and loop closure |
//! | [`viewport`] | Fixed canvas size and client-to-canvas conversion |
//! | [`input`] | Tools, input event types and the gesture state machine |
//! | [`hit`] | Bounding boxes and hit-testing against shapes |
//! | [`theme`] | Light/dark theme colors |
//! | [`render`] | Scene rendering |
//! | [`consts`] | Shared numeric constants (canvas size, tolerances, offsets) |

pub mod consts;
pub mod doc;
pub mod drawing;
pub mod engine;
pub mod fixtures;
pub mod hit;
pub mod input;
pub mod render;
pub mod theme;
pub mod viewport;
