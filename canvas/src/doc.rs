//! Document model: shapes on the floor plan, their properties, and the in-memory store.
//!
//! This module defines what is on the canvas (`Shape`, `ShapeKind`), a
//! sparse-update type for incremental edits (`PartialShape`), a typed accessor
//! for the open-ended `props` JSON bag (`Props`), and the store that owns all
//! live shapes (`DocStore`).
//!
//! Shapes are created by the fixture catalog and the polygon drawer, mutated
//! by the input engine, and read by the renderer through `sorted_objects`.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::TRANSPARENT_FILL;
use crate::viewport::Point;

/// Unique identifier for a shape.
pub type ShapeId = Uuid;

/// The kind of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned rectangle (rooms, tables, shared desks).
    Rect,
    /// Circle inscribed in the bounding box (chairs, round desks).
    Circle,
    /// Closed outline through the vertices stored in `props.points`.
    Polygon,
    /// Vertex dot left behind while a polygon is being drawn.
    Marker,
}

/// A shape as stored in the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    /// Unique identifier for this shape.
    pub id: ShapeId,
    /// Geometry type.
    pub kind: ShapeKind,
    /// Horizontal center of the bounding box in canvas coordinates.
    pub x: f64,
    /// Vertical center of the bounding box in canvas coordinates.
    pub y: f64,
    /// Width of the bounding box.
    pub width: f64,
    /// Height of the bounding box.
    pub height: f64,
    /// Stacking order; lower values are drawn beneath higher values.
    pub z_index: i64,
    /// Open-ended style and geometry properties (stroke, fill, points, etc.).
    pub props: serde_json::Value,
}

impl Shape {
    /// Center of the bounding box.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Left edge of the bounding box.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.x - self.width / 2.0
    }

    /// Top edge of the bounding box.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.y - self.height / 2.0
    }

    /// Copy of this shape under a fresh id, moved by `(dx, dy)`.
    #[must_use]
    pub fn duplicate(&self, dx: f64, dy: f64, z_index: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            x: self.x + dx,
            y: self.y + dy,
            z_index,
            ..self.clone()
        }
    }
}

/// Sparse update for a shape. Only present fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialShape {
    /// New horizontal center, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// New vertical center, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// New z-index, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i64>,
    /// Props keys to merge or remove (null values delete keys).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<serde_json::Value>,
}

/// Typed access to common props fields from a `Shape.props` JSON value.
pub struct Props<'a> {
    value: &'a serde_json::Value,
}

impl<'a> Props<'a> {
    /// Wrap a reference to a `props` JSON value for typed access.
    #[must_use]
    pub fn new(value: &'a serde_json::Value) -> Self {
        Self { value }
    }

    /// Fill color as a CSS color string. Transparent when absent.
    #[must_use]
    pub fn fill(&self) -> &str {
        self.value
            .get("fill")
            .and_then(|v| v.as_str())
            .unwrap_or(TRANSPARENT_FILL)
    }

    /// Stroke color as a CSS color string. Defaults to `"black"` when absent.
    #[must_use]
    pub fn stroke(&self) -> &str {
        self.value
            .get("stroke")
            .and_then(|v| v.as_str())
            .unwrap_or("black")
    }

    /// Stroke width in pixels. Defaults to `1.0` when absent.
    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.value
            .get("stroke_width")
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(1.0)
    }

    /// Whether the shape can be picked by the pointer. Defaults to `true`.
    #[must_use]
    pub fn selectable(&self) -> bool {
        self.value
            .get("selectable")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(true)
    }

    /// Polygon vertices relative to the shape center. Malformed entries are skipped.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        let Some(items) = self.value.get("points").and_then(|v| v.as_array()) else {
            return Vec::new();
        };
        items
            .iter()
            .filter_map(|item| {
                let pair = item.as_array()?;
                let x = pair.first()?.as_f64()?;
                let y = pair.get(1)?.as_f64()?;
                Some(Point::new(x, y))
            })
            .collect()
    }
}

/// In-memory store of shapes.
pub struct DocStore {
    objects: HashMap<ShapeId, Shape>,
}

impl DocStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { objects: HashMap::new() }
    }

    /// Insert or replace a shape. If a shape with the same `id` already
    /// exists it is overwritten.
    pub fn insert(&mut self, obj: Shape) {
        self.objects.insert(obj.id, obj);
    }

    /// Remove a shape by id, returning it if it was present.
    pub fn remove(&mut self, id: &ShapeId) -> Option<Shape> {
        self.objects.remove(id)
    }

    /// Return a reference to a shape by id.
    #[must_use]
    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.objects.get(id)
    }

    /// Apply a partial update to an existing shape. Returns false if the shape
    /// doesn't exist or the props patch is not a JSON object.
    pub fn apply_partial(&mut self, id: &ShapeId, partial: &PartialShape) -> bool {
        let Some(obj) = self.objects.get_mut(id) else {
            return false;
        };
        if let Some(x) = partial.x {
            obj.x = x;
        }
        if let Some(y) = partial.y {
            obj.y = y;
        }
        if let Some(z) = partial.z_index {
            obj.z_index = z;
        }
        if let Some(ref props) = partial.props {
            let Some(incoming) = props.as_object() else {
                return false;
            };

            if !obj.props.is_object() {
                obj.props = serde_json::json!({});
            }

            if let Some(existing) = obj.props.as_object_mut() {
                for (k, v) in incoming {
                    if v.is_null() {
                        existing.remove(k);
                    } else {
                        existing.insert(k.clone(), v.clone());
                    }
                }
            }
        }
        true
    }

    /// Ids of every shape in draw order.
    #[must_use]
    pub fn ids(&self) -> Vec<ShapeId> {
        self.sorted_objects().into_iter().map(|s| s.id).collect()
    }

    /// Return all shapes sorted by `(z_index, id)` for draw-order.
    #[must_use]
    pub fn sorted_objects(&self) -> Vec<&Shape> {
        let mut objs: Vec<&Shape> = self.objects.values().collect();
        objs.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
        objs
    }

    /// The z-index that stacks a new shape above everything present.
    #[must_use]
    pub fn next_z_index(&self) -> i64 {
        self.objects
            .values()
            .map(|s| s.z_index)
            .max()
            .map_or(0, |z| z + 1)
    }

    /// Number of shapes currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the store contains no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for DocStore {
    fn default() -> Self {
        Self::new()
    }
}
