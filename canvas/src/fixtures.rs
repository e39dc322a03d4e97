//! Predefined floor-plan fixtures and the shape builders behind them.
//!
//! Every fixture is centered on the point the user clicked. Shapes are
//! returned bottom-first: the room outline, then the furniture in it, then
//! the chairs, so stacking them in order keeps the chairs visible on top.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{
    CHAIR_RADIUS, FIXTURE_STROKE_WIDTH, MARKER_RADIUS, POLYGON_STROKE_WIDTH, ROOM_SIZE, ROUND_DESK_CHAIR_DISTANCE,
    ROUND_DESK_RADIUS, TRANSPARENT_FILL,
};
use crate::doc::{Shape, ShapeKind};
use crate::theme::Theme;
use crate::viewport::Point;

/// Chair offsets around the meeting-room table: three per long side, one per end.
const MEETING_CHAIR_OFFSETS: [(f64, f64); 8] = [
    (-20.0, 0.0),
    (-20.0, -15.0),
    (-20.0, 15.0),
    (20.0, 0.0),
    (20.0, 15.0),
    (20.0, -15.0),
    (0.0, -31.0),
    (0.0, 31.0),
];

/// Meeting-room table size.
const MEETING_TABLE_WIDTH: f64 = 25.0;
const MEETING_TABLE_HEIGHT: f64 = 50.0;

/// Angles (degrees) of the chairs around an office desk.
const OFFICE_CHAIR_ANGLES: [f64; 4] = [45.0, 135.0, 225.0, 315.0];

/// Shared desk size.
const SHARED_DESK_WIDTH: f64 = 50.0;
const SHARED_DESK_HEIGHT: f64 = 100.0;

/// Chair offsets along both long sides of a shared desk.
const SHARED_DESK_CHAIR_OFFSETS: [(f64, f64); 6] = [
    (-35.0, -30.0),
    (-35.0, 0.0),
    (-35.0, 30.0),
    (35.0, -30.0),
    (35.0, 0.0),
    (35.0, 30.0),
];

/// Angles (degrees) of the chairs around a free-standing round desk.
const ROUND_DESK_CHAIR_ANGLES: [f64; 4] = [0.0, 90.0, 180.0, 270.0];

/// A predefined piece of the floor plan that can be placed with one click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fixture {
    /// Square room with a rectangular table and eight chairs.
    MeetingRoom,
    /// Square room with a round desk and four diagonal chairs.
    Office,
    /// Rectangular desk with three chairs on each long side.
    SharedDesk,
    /// Round desk with four chairs on the axes.
    RoundDesk,
    /// A single chair.
    Chair,
}

impl Fixture {
    /// Build the shapes of this fixture centered on `at`, stacked from `base_z` upward.
    #[must_use]
    pub fn build(self, at: Point, theme: Theme, base_z: i64) -> Vec<Shape> {
        let mut shapes = match self {
            Self::MeetingRoom => meeting_room(at, theme),
            Self::Office => office(at, theme),
            Self::SharedDesk => shared_desk(at, theme),
            Self::RoundDesk => round_desk(at, theme),
            Self::Chair => vec![circle(at, CHAIR_RADIUS, theme)],
        };
        for (z, shape) in (base_z..).zip(shapes.iter_mut()) {
            shape.z_index = z;
        }
        shapes
    }
}

fn meeting_room(at: Point, theme: Theme) -> Vec<Shape> {
    let mut shapes = vec![
        rect(at, ROOM_SIZE, ROOM_SIZE, theme),
        rect(at, MEETING_TABLE_WIDTH, MEETING_TABLE_HEIGHT, theme),
    ];
    shapes.extend(
        MEETING_CHAIR_OFFSETS
            .iter()
            .map(|&(dx, dy)| circle(at.offset(dx, dy), CHAIR_RADIUS, theme)),
    );
    shapes
}

fn office(at: Point, theme: Theme) -> Vec<Shape> {
    let mut shapes = vec![rect(at, ROOM_SIZE, ROOM_SIZE, theme), circle(at, ROUND_DESK_RADIUS, theme)];
    shapes.extend(chairs_around(at, &OFFICE_CHAIR_ANGLES, theme));
    shapes
}

fn shared_desk(at: Point, theme: Theme) -> Vec<Shape> {
    let mut shapes = vec![rect(at, SHARED_DESK_WIDTH, SHARED_DESK_HEIGHT, theme)];
    shapes.extend(
        SHARED_DESK_CHAIR_OFFSETS
            .iter()
            .map(|&(dx, dy)| circle(at.offset(dx, dy), CHAIR_RADIUS, theme)),
    );
    shapes
}

fn round_desk(at: Point, theme: Theme) -> Vec<Shape> {
    let mut shapes = vec![circle(at, ROUND_DESK_RADIUS, theme)];
    shapes.extend(chairs_around(at, &ROUND_DESK_CHAIR_ANGLES, theme));
    shapes
}

fn chairs_around(center: Point, angles_deg: &[f64], theme: Theme) -> impl Iterator<Item = Shape> {
    angles_deg.iter().map(move |deg| {
        let rad = deg.to_radians();
        let at = center.offset(ROUND_DESK_CHAIR_DISTANCE * rad.cos(), ROUND_DESK_CHAIR_DISTANCE * rad.sin());
        circle(at, CHAIR_RADIUS, theme)
    })
}

fn outline_props(theme: Theme, stroke_width: f64) -> serde_json::Value {
    serde_json::json!({
        "fill": TRANSPARENT_FILL,
        "stroke": theme.stroke(),
        "stroke_width": stroke_width,
    })
}

/// Outlined rectangle centered on `at`.
#[must_use]
pub fn rect(at: Point, width: f64, height: f64, theme: Theme) -> Shape {
    Shape {
        id: Uuid::new_v4(),
        kind: ShapeKind::Rect,
        x: at.x,
        y: at.y,
        width,
        height,
        z_index: 0,
        props: outline_props(theme, FIXTURE_STROKE_WIDTH),
    }
}

/// Outlined circle centered on `at`.
#[must_use]
pub fn circle(at: Point, radius: f64, theme: Theme) -> Shape {
    Shape {
        id: Uuid::new_v4(),
        kind: ShapeKind::Circle,
        x: at.x,
        y: at.y,
        width: radius * 2.0,
        height: radius * 2.0,
        z_index: 0,
        props: outline_props(theme, FIXTURE_STROKE_WIDTH),
    }
}

/// Solid, non-selectable dot marking a collected polygon vertex.
#[must_use]
pub fn marker(at: Point, theme: Theme) -> Shape {
    Shape {
        id: Uuid::new_v4(),
        kind: ShapeKind::Marker,
        x: at.x,
        y: at.y,
        width: MARKER_RADIUS * 2.0,
        height: MARKER_RADIUS * 2.0,
        z_index: 0,
        props: serde_json::json!({
            "fill": theme.marker_fill(),
            "selectable": false,
        }),
    }
}

/// Closed outline through `points`, which are absolute canvas coordinates.
///
/// The shape is positioned at the center of the points' bounding box and
/// stores the vertices relative to that center.
#[must_use]
pub fn polygon(points: &[Point], theme: Theme) -> Shape {
    let (min_x, max_x) = bounds(points.iter().map(|p| p.x));
    let (min_y, max_y) = bounds(points.iter().map(|p| p.y));
    let cx = (min_x + max_x) / 2.0;
    let cy = (min_y + max_y) / 2.0;

    let relative: Vec<[f64; 2]> = points.iter().map(|p| [p.x - cx, p.y - cy]).collect();
    let mut props = outline_props(theme, POLYGON_STROKE_WIDTH);
    if let Some(map) = props.as_object_mut() {
        map.insert("points".to_owned(), serde_json::json!(relative));
    }

    Shape {
        id: Uuid::new_v4(),
        kind: ShapeKind::Polygon,
        x: cx,
        y: cy,
        width: max_x - min_x,
        height: max_y - min_y,
        z_index: 0,
        props,
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if lo.is_finite() && hi.is_finite() { (lo, hi) } else { (0.0, 0.0) }
}
