#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Point
// =============================================================

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), pt(0.0, 0.0));
}

#[test]
fn point_delta_from() {
    assert_eq!(pt(15.0, 8.0).delta_from(pt(10.0, 10.0)), (5.0, -2.0));
}

#[test]
fn point_offset() {
    assert_eq!(pt(1.0, 2.0).offset(-3.0, 4.5), pt(-2.0, 6.5));
}

// =============================================================
// Bounds
// =============================================================

#[test]
fn bounds_edges_from_center() {
    let b = Bounds::centered(pt(10.0, 20.0), 40.0, 10.0);
    assert_eq!(b.left(), -10.0);
    assert_eq!(b.right(), 30.0);
    assert_eq!(b.top(), 15.0);
    assert_eq!(b.bottom(), 25.0);
    assert_eq!(b.width(), 40.0);
    assert_eq!(b.height(), 10.0);
}

#[test]
fn bounds_contains_interior() {
    let b = Bounds::centered(pt(0.0, 0.0), 20.0, 20.0);
    assert!(b.contains(pt(0.0, 0.0)));
    assert!(b.contains(pt(-9.9, 9.9)));
}

#[test]
fn bounds_contains_edges_and_corners() {
    let b = Bounds::centered(pt(0.0, 0.0), 20.0, 20.0);
    assert!(b.contains(pt(10.0, 0.0)));
    assert!(b.contains(pt(0.0, -10.0)));
    assert!(b.contains(pt(10.0, 10.0)));
    assert!(b.contains(pt(-10.0, -10.0)));
}

#[test]
fn bounds_rejects_outside() {
    let b = Bounds::centered(pt(0.0, 0.0), 20.0, 20.0);
    assert!(!b.contains(pt(10.01, 0.0)));
    assert!(!b.contains(pt(0.0, -10.01)));
    assert!(!b.contains(pt(50.0, 50.0)));
}

#[test]
fn zero_size_bounds_contains_only_center() {
    let b = Bounds::centered(pt(3.0, 4.0), 0.0, 0.0);
    assert!(b.contains(pt(3.0, 4.0)));
    assert!(!b.contains(pt(3.0, 4.1)));
}
