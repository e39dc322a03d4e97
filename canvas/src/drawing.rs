//! Freehand polygon drawing: point collection and proximity-based loop closure.
//!
//! The draft collects one vertex per click. A click within
//! [`CLICK_TOLERANCE`](crate::consts::CLICK_TOLERANCE) of the first vertex,
//! once more than two vertices exist, closes the loop and yields the finished
//! vertex list. The draft also remembers which marker shapes it put on the
//! canvas so the engine can clear them when the polygon is finalized.

#[cfg(test)]
#[path = "drawing_test.rs"]
mod drawing_test;

use crate::consts::CLICK_TOLERANCE;
use crate::doc::ShapeId;
use crate::viewport::Point;

/// Lifecycle of a polygon draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftState {
    /// Drawing was never started or was cancelled.
    #[default]
    Idle,
    /// Clicks add vertices.
    Collecting,
    /// A polygon was produced; clicks are ignored until the next `start`.
    Completed,
}

/// Outcome of feeding one click into the draft.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftStep {
    /// The draft is not collecting; nothing happened.
    Ignored,
    /// The point became a new vertex.
    Added(Point),
    /// The loop was closed; carries the polygon's vertices in click order.
    Closed(Vec<Point>),
}

/// In-progress polygon.
#[derive(Debug, Clone, Default)]
pub struct PolygonDraft {
    state: DraftState,
    points: Vec<Point>,
    markers: Vec<ShapeId>,
}

impl PolygonDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> DraftState {
        self.state
    }

    #[must_use]
    pub fn is_collecting(&self) -> bool {
        self.state == DraftState::Collecting
    }

    /// Vertices collected so far.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Begin a new polygon. Returns markers of an unfinished draft that must be removed.
    pub fn start(&mut self) -> Vec<ShapeId> {
        self.state = DraftState::Collecting;
        self.points.clear();
        self.take_markers()
    }

    /// Abandon the draft. Returns markers that must be removed.
    pub fn cancel(&mut self) -> Vec<ShapeId> {
        self.state = DraftState::Idle;
        self.points.clear();
        self.take_markers()
    }

    /// Feed a click at `pt` (canvas coordinates).
    pub fn click(&mut self, pt: Point) -> DraftStep {
        if self.state != DraftState::Collecting {
            return DraftStep::Ignored;
        }

        if self.points.len() > 2 && self.is_near_first_point(pt, CLICK_TOLERANCE) {
            self.state = DraftState::Completed;
            return DraftStep::Closed(std::mem::take(&mut self.points));
        }

        self.points.push(pt);
        DraftStep::Added(pt)
    }

    /// Whether `pt` lies within `tolerance` (inclusive) of the first vertex.
    #[must_use]
    pub fn is_near_first_point(&self, pt: Point, tolerance: f64) -> bool {
        self.points
            .first()
            .is_some_and(|first| first.distance(pt) <= tolerance)
    }

    /// Remember a marker shape placed for the most recent vertex.
    pub fn track_marker(&mut self, id: ShapeId) {
        self.markers.push(id);
    }

    /// Hand over every tracked marker, leaving none behind.
    pub fn take_markers(&mut self) -> Vec<ShapeId> {
        std::mem::take(&mut self.markers)
    }
}
