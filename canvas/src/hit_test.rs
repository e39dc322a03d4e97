#![allow(clippy::float_cmp)]

use serde_json::json;
use uuid::Uuid;

use super::*;
use crate::doc::ShapeKind;

fn make_shape(kind: ShapeKind, x: f64, y: f64, w: f64, h: f64, z: i64) -> Shape {
    Shape {
        id: Uuid::new_v4(),
        kind,
        x,
        y,
        width: w,
        height: h,
        z_index: z,
        props: json!({ "stroke_width": 2.0 }),
    }
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Bounds
// =============================================================

#[test]
fn from_corners_normalizes_any_drag_direction() {
    let b = Bounds::from_corners(pt(50.0, 10.0), pt(10.0, 40.0));
    assert_eq!(b, Bounds { x: 10.0, y: 10.0, width: 40.0, height: 30.0 });
}

#[test]
fn of_shape_pads_by_half_stroke() {
    let s = make_shape(ShapeKind::Rect, 50.0, 50.0, 100.0, 100.0, 0);
    let b = Bounds::of_shape(&s);
    assert_eq!(b, Bounds { x: -1.0, y: -1.0, width: 102.0, height: 102.0 });
}

#[test]
fn contains_is_edge_inclusive() {
    let b = Bounds { x: 0.0, y: 0.0, width: 10.0, height: 10.0 };
    assert!(b.contains(pt(0.0, 0.0)));
    assert!(b.contains(pt(10.0, 10.0)));
    assert!(!b.contains(pt(10.01, 5.0)));
}

#[test]
fn intersects_overlapping_touching_and_disjoint() {
    let a = Bounds { x: 0.0, y: 0.0, width: 10.0, height: 10.0 };
    assert!(a.intersects(&Bounds { x: 5.0, y: 5.0, width: 10.0, height: 10.0 }));
    assert!(a.intersects(&Bounds { x: 10.0, y: 0.0, width: 5.0, height: 5.0 }));
    assert!(a.intersects(&Bounds { x: 2.0, y: 2.0, width: 1.0, height: 1.0 }));
    assert!(!a.intersects(&Bounds { x: 11.0, y: 0.0, width: 5.0, height: 5.0 }));
}

// =============================================================
// hit_test
// =============================================================

#[test]
fn hit_test_empty_doc_returns_none() {
    assert!(hit_test(pt(0.0, 0.0), &DocStore::new()).is_none());
}

#[test]
fn hit_test_interior_of_transparent_room() {
    let mut doc = DocStore::new();
    let room = make_shape(ShapeKind::Rect, 100.0, 100.0, 100.0, 100.0, 0);
    let id = room.id;
    doc.insert(room);
    assert_eq!(hit_test(pt(120.0, 80.0), &doc), Some(id));
    assert_eq!(hit_test(pt(151.0, 100.0), &doc), Some(id));
    assert!(hit_test(pt(152.0, 100.0), &doc).is_none());
}

#[test]
fn hit_test_prefers_topmost_shape() {
    let mut doc = DocStore::new();
    let room = make_shape(ShapeKind::Rect, 100.0, 100.0, 100.0, 100.0, 0);
    let chair = make_shape(ShapeKind::Circle, 100.0, 100.0, 10.0, 10.0, 1);
    let (room_id, chair_id) = (room.id, chair.id);
    doc.insert(room);
    doc.insert(chair);
    assert_eq!(hit_test(pt(100.0, 100.0), &doc), Some(chair_id));
    assert_eq!(hit_test(pt(70.0, 70.0), &doc), Some(room_id));
}

#[test]
fn hit_test_skips_unselectable_markers() {
    let mut doc = DocStore::new();
    let room = make_shape(ShapeKind::Rect, 100.0, 100.0, 100.0, 100.0, 0);
    let mut marker = make_shape(ShapeKind::Marker, 100.0, 100.0, 6.0, 6.0, 5);
    marker.props = json!({ "selectable": false });
    let room_id = room.id;
    doc.insert(room);
    doc.insert(marker);
    assert_eq!(hit_test(pt(100.0, 100.0), &doc), Some(room_id));
}

// =============================================================
// marquee_hits
// =============================================================

#[test]
fn marquee_hits_collects_intersecting_selectable_shapes_in_draw_order() {
    let mut doc = DocStore::new();
    let a = make_shape(ShapeKind::Rect, 50.0, 50.0, 20.0, 20.0, 1);
    let b = make_shape(ShapeKind::Circle, 80.0, 50.0, 10.0, 10.0, 0);
    let far = make_shape(ShapeKind::Rect, 500.0, 500.0, 20.0, 20.0, 2);
    let mut marker = make_shape(ShapeKind::Marker, 60.0, 50.0, 6.0, 6.0, 3);
    marker.props = json!({ "selectable": false });
    let (id_a, id_b) = (a.id, b.id);
    for s in [a, b, far, marker] {
        doc.insert(s);
    }
    let hits = marquee_hits(Bounds::from_corners(pt(0.0, 0.0), pt(100.0, 100.0)), &doc);
    assert_eq!(hits, vec![id_b, id_a]);
}

#[test]
fn marquee_hits_empty_area_selects_nothing() {
    let mut doc = DocStore::new();
    doc.insert(make_shape(ShapeKind::Rect, 50.0, 50.0, 20.0, 20.0, 0));
    let hits = marquee_hits(Bounds::from_corners(pt(200.0, 200.0), pt(300.0, 300.0)), &doc);
    assert!(hits.is_empty());
}

// =============================================================
// selection_bounds
// =============================================================

#[test]
fn selection_bounds_unions_selected_shapes() {
    let mut doc = DocStore::new();
    let a = make_shape(ShapeKind::Rect, 10.0, 10.0, 20.0, 20.0, 0);
    let b = make_shape(ShapeKind::Rect, 100.0, 50.0, 20.0, 20.0, 1);
    let ids = vec![a.id, b.id];
    doc.insert(a);
    doc.insert(b);
    let bounds = selection_bounds(&ids, &doc).unwrap();
    assert_eq!(bounds, Bounds { x: -1.0, y: -1.0, width: 112.0, height: 62.0 });
}

#[test]
fn selection_bounds_none_for_missing_ids() {
    let doc = DocStore::new();
    assert!(selection_bounds(&[Uuid::new_v4()], &doc).is_none());
    assert!(selection_bounds(&[], &doc).is_none());
}
