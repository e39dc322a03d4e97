#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::{DocStore, Props, Shape, ShapeId};
use crate::viewport::Point;

/// Axis-aligned rectangle in canvas coordinates, normalized to non-negative size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Rectangle spanned by two corners given in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    /// Bounding box of a shape, grown by half its stroke so the outline itself is hittable.
    #[must_use]
    pub fn of_shape(shape: &Shape) -> Self {
        let pad = Props::new(&shape.props).stroke_width().max(0.0) / 2.0;
        Self {
            x: shape.left() - pad,
            y: shape.top() - pad,
            width: shape.width + pad * 2.0,
            height: shape.height + pad * 2.0,
        }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.right() && pt.y >= self.y && pt.y <= self.bottom()
    }

    /// Whether the two rectangles overlap or touch.
    #[must_use]
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.x <= other.right() && other.x <= self.right() && self.y <= other.bottom() && other.y <= self.bottom()
    }
}

/// The top-most selectable shape whose bounding box contains `pt`.
///
/// Shapes are picked by bounding box rather than painted pixels, so the
/// transparent interior of a room still selects the room.
#[must_use]
pub fn hit_test(pt: Point, doc: &DocStore) -> Option<ShapeId> {
    doc.sorted_objects()
        .into_iter()
        .rev()
        .filter(|s| Props::new(&s.props).selectable())
        .find(|s| Bounds::of_shape(s).contains(pt))
        .map(|s| s.id)
}

/// Every selectable shape whose bounding box intersects `area`, in draw order.
#[must_use]
pub fn marquee_hits(area: Bounds, doc: &DocStore) -> Vec<ShapeId> {
    doc.sorted_objects()
        .into_iter()
        .filter(|s| Props::new(&s.props).selectable())
        .filter(|s| Bounds::of_shape(s).intersects(&area))
        .map(|s| s.id)
        .collect()
}

/// Union of the bounding boxes of `ids`, or `None` when none of them exist.
#[must_use]
pub fn selection_bounds(ids: &[ShapeId], doc: &DocStore) -> Option<Bounds> {
    let mut shapes = ids.iter().filter_map(|id| doc.get(id)).map(Bounds::of_shape);
    let first = shapes.next()?;
    Some(shapes.fold(first, |acc, b| {
        let x = acc.x.min(b.x);
        let y = acc.y.min(b.y);
        Bounds {
            x,
            y,
            width: acc.right().max(b.right()) - x,
            height: acc.bottom().max(b.bottom()) - y,
        }
    }))
}
