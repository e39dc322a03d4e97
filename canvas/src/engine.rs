use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::CLONE_OFFSET_X;
use crate::doc::{DocStore, PartialShape, Shape, ShapeId, ShapeKind};
use crate::drawing::{DraftStep, PolygonDraft};
use crate::fixtures::{self, Fixture};
use crate::hit::{self, Bounds};
use crate::input::{Button, InputState, Key, Modifiers, Tool, UiState};
use crate::render;
use crate::theme::Theme;
use crate::viewport::{Point, Viewport};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone)]
pub enum Action {
    ObjectCreated(Shape),
    ObjectUpdated { id: ShapeId, fields: PartialShape },
    ObjectDeleted { id: ShapeId },
    SelectionChanged(Vec<ShapeId>),
    ToolChanged(Tool),
    ThemeChanged(Theme),
    SetCursor(String),
    RenderNeeded,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Default)]
pub struct EngineCore {
    pub doc: DocStore,
    pub viewport: Viewport,
    pub ui: UiState,
    pub input: InputState,
    pub draft: PolygonDraft,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Viewport ---

    /// Record where the canvas sits on the page and the device pixel ratio.
    pub fn set_viewport(&mut self, left: f64, top: f64, dpr: f64) {
        self.viewport.left = left;
        self.viewport.top = top;
        self.viewport.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    }

    // --- Tools ---

    /// Switch tools. Leaving polygon drawing discards the unfinished draft.
    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        if tool == Tool::DrawPolygon {
            return self.start_drawing();
        }
        let mut actions = Vec::new();
        if self.ui.tool == Tool::DrawPolygon {
            let stale = self.draft.cancel();
            self.remove_shapes(&stale, &mut actions);
        }
        self.ui.tool = tool;
        actions.push(Action::ToolChanged(tool));
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Arm a fixture for placement; arming the already armed fixture disarms it.
    pub fn toggle_fixture(&mut self, fixture: Fixture) -> Vec<Action> {
        let next = if self.ui.tool == Tool::Place(fixture) {
            Tool::Select
        } else {
            Tool::Place(fixture)
        };
        self.set_tool(next)
    }

    /// Begin a new freehand polygon, clearing markers of any unfinished one.
    pub fn start_drawing(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        let stale = self.draft.start();
        self.remove_shapes(&stale, &mut actions);
        self.ui.tool = Tool::DrawPolygon;
        actions.push(Action::ToolChanged(Tool::DrawPolygon));
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Shape creation ---

    /// Add every shape of `fixture` centered on `at`, stacked above existing shapes.
    pub fn place_fixture(&mut self, fixture: Fixture, at: Point) -> Vec<Action> {
        let mut actions = Vec::new();
        for shape in fixture.build(at, self.ui.theme, self.doc.next_z_index()) {
            self.add_shape(shape, &mut actions);
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    fn draw_click(&mut self, pt: Point) -> Vec<Action> {
        let mut actions = Vec::new();
        match self.draft.click(pt) {
            DraftStep::Ignored => {}
            DraftStep::Added(vertex) => {
                let marker = fixtures::marker(vertex, self.ui.theme);
                self.draft.track_marker(marker.id);
                self.add_shape(marker, &mut actions);
                actions.push(Action::RenderNeeded);
            }
            DraftStep::Closed(points) => {
                let markers = self.draft.take_markers();
                self.remove_shapes(&markers, &mut actions);
                self.add_shape(fixtures::polygon(&points, self.ui.theme), &mut actions);
                self.ui.tool = Tool::Select;
                actions.push(Action::ToolChanged(Tool::Select));
                actions.push(Action::RenderNeeded);
            }
        }
        actions
    }

    fn add_shape(&mut self, mut shape: Shape, actions: &mut Vec<Action>) {
        shape.z_index = shape.z_index.max(self.doc.next_z_index());
        actions.push(Action::ObjectCreated(shape.clone()));
        self.doc.insert(shape);
    }

    fn remove_shapes(&mut self, ids: &[ShapeId], actions: &mut Vec<Action>) {
        for id in ids {
            if self.doc.remove(id).is_some() {
                actions.push(Action::ObjectDeleted { id: *id });
            }
        }
    }

    // --- Pointer input ---

    /// Handle pointer-down at a canvas-space point.
    pub fn on_pointer_down(&mut self, pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        match self.ui.tool {
            Tool::DrawPolygon => self.draw_click(pt),
            Tool::Place(fixture) => {
                let mut actions = self.place_fixture(fixture, pt);
                self.ui.tool = Tool::Select;
                actions.push(Action::ToolChanged(Tool::Select));
                actions
            }
            Tool::Select => self.select_down(pt, modifiers),
        }
    }

    fn select_down(&mut self, pt: Point, modifiers: Modifiers) -> Vec<Action> {
        let before = self.ui.selected_ids.clone();

        if let Some(id) = hit::hit_test(pt, &self.doc) {
            if modifiers.shift && self.ui.is_selected(&id) {
                self.ui.selected_ids.retain(|s| *s != id);
            } else if modifiers.shift {
                self.ui.selected_ids.push(id);
            } else if !self.ui.is_selected(&id) {
                self.ui.selected_ids = vec![id];
            }
            if self.ui.is_selected(&id) {
                self.input = InputState::DraggingSelection { origin: pt, last: pt, moved: false };
            }
        } else {
            if !modifiers.shift {
                self.ui.selected_ids.clear();
            }
            self.input = InputState::Marquee { anchor: pt };
            self.ui.marquee = Some(Bounds::from_corners(pt, pt));
        }

        let mut actions = Vec::new();
        if self.ui.selected_ids != before {
            actions.push(Action::SelectionChanged(self.ui.selected_ids.clone()));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Handle pointer-move at a canvas-space point.
    pub fn on_pointer_move(&mut self, pt: Point, _modifiers: Modifiers) -> Vec<Action> {
        match self.input {
            InputState::DraggingSelection { origin, last, .. } => {
                let dx = pt.x - last.x;
                let dy = pt.y - last.y;
                if dx.abs() < f64::EPSILON && dy.abs() < f64::EPSILON {
                    return Vec::new();
                }
                self.translate_selection(dx, dy);
                self.input = InputState::DraggingSelection { origin, last: pt, moved: true };
                vec![Action::RenderNeeded]
            }
            InputState::Marquee { anchor } => {
                self.ui.marquee = Some(Bounds::from_corners(anchor, pt));
                vec![Action::RenderNeeded]
            }
            InputState::Idle => vec![Action::SetCursor(self.cursor_at(pt).to_owned())],
        }
    }

    /// Handle pointer-up at a canvas-space point.
    pub fn on_pointer_up(&mut self, pt: Point, _button: Button, modifiers: Modifiers) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle | InputState::DraggingSelection { moved: false, .. } => Vec::new(),
            InputState::DraggingSelection { moved: true, .. } => {
                let mut actions = self.selection_positions();
                actions.push(Action::RenderNeeded);
                actions
            }
            InputState::Marquee { anchor } => {
                self.ui.marquee = None;
                let before = self.ui.selected_ids.clone();
                let hits = hit::marquee_hits(Bounds::from_corners(anchor, pt), &self.doc);
                if modifiers.shift {
                    for id in hits {
                        if !self.ui.is_selected(&id) {
                            self.ui.selected_ids.push(id);
                        }
                    }
                } else {
                    self.ui.selected_ids = hits;
                }

                let mut actions = Vec::new();
                if self.ui.selected_ids != before {
                    actions.push(Action::SelectionChanged(self.ui.selected_ids.clone()));
                }
                actions.push(Action::RenderNeeded);
                actions
            }
        }
    }

    fn translate_selection(&mut self, dx: f64, dy: f64) {
        for id in &self.ui.selected_ids {
            let Some(shape) = self.doc.get(id) else {
                continue;
            };
            let fields = PartialShape { x: Some(shape.x + dx), y: Some(shape.y + dy), ..Default::default() };
            self.doc.apply_partial(id, &fields);
        }
    }

    /// One `ObjectUpdated` carrying the current position of each selected shape.
    fn selection_positions(&self) -> Vec<Action> {
        self.ui
            .selected_ids
            .iter()
            .filter_map(|id| self.doc.get(id))
            .map(|s| Action::ObjectUpdated {
                id: s.id,
                fields: PartialShape { x: Some(s.x), y: Some(s.y), ..Default::default() },
            })
            .collect()
    }

    /// CSS cursor for hovering `pt` while no gesture is active.
    #[must_use]
    pub fn cursor_at(&self, pt: Point) -> &'static str {
        if self.ui.tool.is_creating() {
            "crosshair"
        } else if hit::hit_test(pt, &self.doc).is_some() {
            "move"
        } else {
            "default"
        }
    }

    // --- Keyboard ---

    pub fn on_key_down(&mut self, key: &Key, _modifiers: Modifiers) -> Vec<Action> {
        if key.is_delete() {
            return self.remove_selected();
        }
        if key.is_escape() {
            return self.cancel();
        }
        Vec::new()
    }

    /// Drop any gesture, armed tool, unfinished polygon, and the selection.
    ///
    /// A drag in progress is undone: the dragged shapes return to where they
    /// were at pointer-down.
    pub fn cancel(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        if let InputState::DraggingSelection { origin, last, moved: true } = std::mem::take(&mut self.input) {
            self.translate_selection(origin.x - last.x, origin.y - last.y);
            actions.extend(self.selection_positions());
        }
        self.ui.marquee = None;

        if self.ui.tool != Tool::Select {
            actions.extend(self.set_tool(Tool::Select));
        }
        if !self.ui.selected_ids.is_empty() {
            self.ui.selected_ids.clear();
            actions.push(Action::SelectionChanged(Vec::new()));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Selection commands ---

    /// Discard the selection and remove every shape that was in it.
    pub fn remove_selected(&mut self) -> Vec<Action> {
        if self.ui.selected_ids.is_empty() {
            return Vec::new();
        }
        self.input = InputState::Idle;
        let ids = std::mem::take(&mut self.ui.selected_ids);
        let mut actions = vec![Action::SelectionChanged(Vec::new())];
        self.remove_shapes(&ids, &mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Add a copy of every selected shape, shifted right by [`CLONE_OFFSET_X`].
    ///
    /// Copies keep the relative stacking of their originals and land on top
    /// of everything. The selection stays on the originals.
    pub fn clone_selected(&mut self) -> Vec<Action> {
        let mut originals: Vec<&Shape> = self
            .ui
            .selected_ids
            .iter()
            .filter_map(|id| self.doc.get(id))
            .collect();
        if originals.is_empty() {
            return Vec::new();
        }
        originals.sort_by_key(|s| s.z_index);

        let base_z = self.doc.next_z_index();
        let copies: Vec<Shape> = (base_z..)
            .zip(originals)
            .map(|(z, s)| s.duplicate(CLONE_OFFSET_X, 0.0, z))
            .collect();

        let mut actions = Vec::new();
        for copy in copies {
            self.add_shape(copy, &mut actions);
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Theme ---

    /// Switch between light and dark theme.
    pub fn toggle_theme(&mut self) -> Vec<Action> {
        self.set_theme(self.ui.theme.toggled())
    }

    /// Apply `theme` and recolor every shape already on the canvas.
    pub fn set_theme(&mut self, theme: Theme) -> Vec<Action> {
        self.ui.theme = theme;
        let mut actions = Vec::new();
        for id in self.doc.ids() {
            let is_marker = self.doc.get(&id).is_some_and(|s| s.kind == ShapeKind::Marker);
            let props = if is_marker {
                serde_json::json!({ "stroke": theme.stroke(), "fill": theme.marker_fill() })
            } else {
                serde_json::json!({ "stroke": theme.stroke() })
            };
            let fields = PartialShape { props: Some(props), ..Default::default() };
            if self.doc.apply_partial(&id, &fields) {
                actions.push(Action::ObjectUpdated { id, fields });
            }
        }
        actions.push(Action::ThemeChanged(theme));
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Queries ---

    /// The currently selected shapes.
    #[must_use]
    pub fn selection(&self) -> &[ShapeId] {
        &self.ui.selected_ids
    }

    /// Whether the clone/delete actions apply to anything.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        !self.ui.selected_ids.is_empty()
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.ui.tool
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.ui.theme
    }

    /// Look up a shape by ID.
    #[must_use]
    pub fn object(&self, id: &ShapeId) -> Option<&Shape> {
        self.doc.get(id)
    }

    /// Number of shapes on the canvas, not counting polygon vertex markers.
    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.doc
            .sorted_objects()
            .iter()
            .filter(|s| s.kind != ShapeKind::Marker)
            .count()
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element and size its backing store.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas element's style cannot be updated.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let engine = Self { canvas, core: EngineCore::new() };
        engine.resize_backing_store()?;
        Ok(engine)
    }

    // --- Viewport ---

    /// Update the canvas page offset and device pixel ratio.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas element's style cannot be updated.
    pub fn set_viewport(&mut self, left: f64, top: f64, dpr: f64) -> Result<(), JsValue> {
        self.core.set_viewport(left, top, dpr);
        self.resize_backing_store()
    }

    fn resize_backing_store(&self) -> Result<(), JsValue> {
        let vp = self.core.viewport;
        let (w, h) = vp.device_size();
        if self.canvas.width() != w {
            self.canvas.set_width(w);
        }
        if self.canvas.height() != h {
            self.canvas.set_height(h);
        }
        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", vp.width))?;
        style.set_property("height", &format!("{}px", vp.height))?;
        Ok(())
    }

    // --- Delegated commands ---

    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        self.core.set_tool(tool)
    }

    pub fn remove_selected(&mut self) -> Vec<Action> {
        self.core.remove_selected()
    }

    pub fn clone_selected(&mut self) -> Vec<Action> {
        self.core.clone_selected()
    }

    pub fn set_theme(&mut self, theme: Theme) -> Vec<Action> {
        self.core.set_theme(theme)
    }

    // --- Input events (client coordinates) ---

    pub fn on_pointer_down(&mut self, client_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        let pt = self.core.viewport.client_to_canvas(client_pt);
        self.core.on_pointer_down(pt, button, modifiers)
    }

    pub fn on_pointer_move(&mut self, client_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        let pt = self.core.viewport.client_to_canvas(client_pt);
        self.core.on_pointer_move(pt, modifiers)
    }

    pub fn on_pointer_up(&mut self, client_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        let pt = self.core.viewport.client_to_canvas(client_pt);
        self.core.on_pointer_up(pt, button, modifiers)
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_key_down(key, modifiers)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a drawing call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        render::draw(&ctx, &self.core.doc, &self.core.ui, &self.core.viewport)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.core.has_selection()
    }

    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.core.shape_count()
    }
}
