//! Rendering: draws the floor plan to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of the document, the UI state and the viewport
//! and produces pixels. It does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{SELECTION_DASH_PX, SELECTION_PADDING_PX};
use crate::doc::{DocStore, Props, Shape, ShapeKind};
use crate::hit::{self, Bounds};
use crate::input::UiState;
use crate::viewport::Viewport;

const SELECTION_COLOR: &str = "#1E90FF";
const MARQUEE_FILL: &str = "rgba(30, 144, 255, 0.12)";

/// Draw the full scene: background, shapes, then selection UI.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, doc: &DocStore, ui: &UiState, viewport: &Viewport) -> Result<(), JsValue> {
    // Layer 1: background.
    ctx.set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    ctx.set_fill_style_str(ui.theme.background());
    ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);

    // Layer 2: shapes in z-order (bottom first).
    for shape in doc.sorted_objects() {
        draw_shape(ctx, shape)?;
    }

    // Layer 3: selection UI.
    for id in &ui.selected_ids {
        if let Some(shape) = doc.get(id) {
            draw_selection_box(ctx, Bounds::of_shape(shape))?;
        }
    }
    if ui.selected_ids.len() > 1 {
        if let Some(group) = hit::selection_bounds(&ui.selected_ids, doc) {
            draw_group_box(ctx, group);
        }
    }

    if let Some(m) = ui.marquee {
        draw_marquee(ctx, m)?;
    }

    Ok(())
}

// =============================================================
// Shape renderers
// =============================================================

fn draw_shape(ctx: &CanvasRenderingContext2d, shape: &Shape) -> Result<(), JsValue> {
    let props = Props::new(&shape.props);
    match shape.kind {
        ShapeKind::Rect => {
            draw_rect(ctx, shape, &props);
            Ok(())
        }
        ShapeKind::Circle => draw_circle(ctx, shape, &props),
        ShapeKind::Polygon => {
            draw_polygon(ctx, shape, &props);
            Ok(())
        }
        ShapeKind::Marker => draw_marker(ctx, shape, &props),
    }
}

fn draw_rect(ctx: &CanvasRenderingContext2d, shape: &Shape, props: &Props<'_>) {
    let (x, y) = (shape.left(), shape.top());

    ctx.set_fill_style_str(props.fill());
    ctx.fill_rect(x, y, shape.width, shape.height);

    apply_stroke_style(ctx, props);
    ctx.stroke_rect(x, y, shape.width, shape.height);
}

fn draw_circle(ctx: &CanvasRenderingContext2d, shape: &Shape, props: &Props<'_>) -> Result<(), JsValue> {
    let radius = shape.width.min(shape.height) / 2.0;
    if radius <= 0.0 {
        return Ok(());
    }
    ctx.begin_path();
    ctx.arc(shape.x, shape.y, radius, 0.0, 2.0 * PI)?;

    ctx.set_fill_style_str(props.fill());
    ctx.fill();

    apply_stroke_style(ctx, props);
    ctx.stroke();
    Ok(())
}

fn draw_polygon(ctx: &CanvasRenderingContext2d, shape: &Shape, props: &Props<'_>) {
    let points = props.points();
    let Some((first, rest)) = points.split_first() else {
        return;
    };

    ctx.save();
    ctx.begin_path();
    ctx.move_to(shape.x + first.x, shape.y + first.y);
    for p in rest {
        ctx.line_to(shape.x + p.x, shape.y + p.y);
    }
    ctx.close_path();

    ctx.set_fill_style_str(props.fill());
    ctx.fill();

    apply_stroke_style(ctx, props);
    ctx.set_line_join("round");
    ctx.stroke();
    ctx.restore();
}

fn draw_marker(ctx: &CanvasRenderingContext2d, shape: &Shape, props: &Props<'_>) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(shape.x, shape.y, shape.width / 2.0, 0.0, 2.0 * PI)?;
    ctx.set_fill_style_str(props.fill());
    ctx.fill();
    Ok(())
}

// =============================================================
// Selection UI
// =============================================================

fn draw_selection_box(ctx: &CanvasRenderingContext2d, bounds: Bounds) -> Result<(), JsValue> {
    let pad = SELECTION_PADDING_PX;
    ctx.save();
    set_dash(ctx, SELECTION_DASH_PX)?;
    ctx.set_stroke_style_str(SELECTION_COLOR);
    ctx.set_line_width(1.0);
    ctx.stroke_rect(bounds.x - pad, bounds.y - pad, bounds.width + pad * 2.0, bounds.height + pad * 2.0);
    ctx.set_line_dash(&js_sys::Array::new())?;
    ctx.restore();
    Ok(())
}

fn draw_group_box(ctx: &CanvasRenderingContext2d, bounds: Bounds) {
    let pad = SELECTION_PADDING_PX * 2.0;
    ctx.save();
    ctx.set_stroke_style_str(SELECTION_COLOR);
    ctx.set_line_width(1.0);
    ctx.stroke_rect(bounds.x - pad, bounds.y - pad, bounds.width + pad * 2.0, bounds.height + pad * 2.0);
    ctx.restore();
}

fn draw_marquee(ctx: &CanvasRenderingContext2d, marquee: Bounds) -> Result<(), JsValue> {
    ctx.save();
    set_dash(ctx, SELECTION_DASH_PX)?;
    ctx.set_stroke_style_str(SELECTION_COLOR);
    ctx.set_fill_style_str(MARQUEE_FILL);
    ctx.set_line_width(1.0);
    ctx.fill_rect(marquee.x, marquee.y, marquee.width, marquee.height);
    ctx.stroke_rect(marquee.x, marquee.y, marquee.width, marquee.height);
    ctx.set_line_dash(&js_sys::Array::new())?;
    ctx.restore();
    Ok(())
}

// =============================================================
// Helpers
// =============================================================

fn set_dash(ctx: &CanvasRenderingContext2d, dash: f64) -> Result<(), JsValue> {
    let dash_array = js_sys::Array::new();
    dash_array.push(&dash.into());
    dash_array.push(&dash.into());
    ctx.set_line_dash(&dash_array)
}

fn apply_stroke_style(ctx: &CanvasRenderingContext2d, props: &Props<'_>) {
    ctx.set_stroke_style_str(props.stroke());
    ctx.set_line_width(props.stroke_width());
}
