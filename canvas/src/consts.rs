//! Shared numeric constants for the canvas crate.

// ── Canvas ──────────────────────────────────────────────────────

/// Logical canvas width in CSS pixels.
pub const CANVAS_WIDTH: f64 = 1600.0;

/// Logical canvas height in CSS pixels.
pub const CANVAS_HEIGHT: f64 = 800.0;

/// Transparent fill shared by every outlined shape.
pub const TRANSPARENT_FILL: &str = "rgba(255, 255, 255, 0)";

// ── Fixtures ────────────────────────────────────────────────────

/// Stroke width of rooms, desks and chairs.
pub const FIXTURE_STROKE_WIDTH: f64 = 2.0;

/// Side length of a square room.
pub const ROOM_SIZE: f64 = 100.0;

/// Radius of a single chair.
pub const CHAIR_RADIUS: f64 = 5.0;

/// Radius of a round desk.
pub const ROUND_DESK_RADIUS: f64 = 25.0;

/// Distance from a round desk's center to the center of each chair.
pub const ROUND_DESK_CHAIR_DISTANCE: f64 = 32.0;

// ── Polygon drawing ─────────────────────────────────────────────

/// Maximum distance between a click and the first vertex that closes the loop.
pub const CLICK_TOLERANCE: f64 = 10.0;

/// Radius of the dot left at each collected vertex.
pub const MARKER_RADIUS: f64 = 3.0;

/// Stroke width of a finished polygon.
pub const POLYGON_STROKE_WIDTH: f64 = 6.0;

// ── Editing ─────────────────────────────────────────────────────

/// Horizontal offset applied to cloned shapes.
pub const CLONE_OFFSET_X: f64 = 200.0;

/// Selection dash segment length in pixels.
pub const SELECTION_DASH_PX: f64 = 4.0;

/// Padding between a selected shape and its selection box, in pixels.
pub const SELECTION_PADDING_PX: f64 = 3.0;
