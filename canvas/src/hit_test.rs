use super::*;
use crate::color::Color;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Circle
// =============================================================

#[test]
fn circle_contains_center() {
    let c = Shape::circle(0.0, 0.0, 10.0, Color::RED);
    assert!(c.contains(pt(0.0, 0.0)));
}

#[test]
fn circle_contains_points_inside_radius() {
    let c = Shape::circle(5.0, 5.0, 10.0, Color::RED);
    assert!(c.contains(pt(12.0, 5.0)));
    assert!(c.contains(pt(5.0, -4.0)));
    assert!(c.contains(pt(10.0, 10.0)));
}

#[test]
fn circle_boundary_is_inclusive() {
    let c = Shape::circle(0.0, 0.0, 10.0, Color::RED);
    assert!(c.contains(pt(10.0, 0.0)));
    assert!(c.contains(pt(0.0, -10.0)));
    assert!(c.contains(pt(6.0, 8.0)));
}

#[test]
fn circle_rejects_points_beyond_radius() {
    let c = Shape::circle(0.0, 0.0, 10.0, Color::RED);
    assert!(!c.contains(pt(10.001, 0.0)));
    assert!(!c.contains(pt(6.0, 8.01)));
}

#[test]
fn circle_rejects_bounding_box_corner() {
    // Inside the box, outside the disc.
    let c = Shape::circle(0.0, 0.0, 10.0, Color::RED);
    assert!(!c.contains(pt(9.0, 9.0)));
}

#[test]
fn circle_contains_free_function() {
    assert!(circle_contains(pt(0.0, 0.0), 5.0, pt(3.0, 4.0)));
    assert!(!circle_contains(pt(0.0, 0.0), 5.0, pt(3.0, 4.1)));
}

#[test]
fn zero_radius_circle_hits_only_center() {
    let c = Shape::circle(2.0, 2.0, 0.0, Color::RED);
    assert!(c.contains(pt(2.0, 2.0)));
    assert!(!c.contains(pt(2.0, 2.001)));
}

// =============================================================
// Rectangle / Square
// =============================================================

#[test]
fn rectangle_box_inclusive() {
    let r = Shape::rectangle(0.0, 0.0, 40.0, 20.0, Color::RED);
    assert!(r.contains(pt(20.0, 10.0)));
    assert!(r.contains(pt(-20.0, -10.0)));
    assert!(!r.contains(pt(20.5, 0.0)));
    assert!(!r.contains(pt(0.0, 10.5)));
}

#[test]
fn square_box_inclusive() {
    let s = Shape::square(100.0, 100.0, 50.0, Color::RED);
    assert!(s.contains(pt(125.0, 75.0)));
    assert!(!s.contains(pt(126.0, 100.0)));
}

// =============================================================
// Triangle
// =============================================================

#[test]
fn triangle_uses_bounding_box() {
    // (19, 19) lies outside the drawn triangle but inside its box.
    let t = Shape::triangle(0.0, 0.0, 40.0, Color::RED);
    assert!(t.contains(pt(19.0, 19.0)));
    assert!(t.contains(pt(-19.0, -19.0)));
}

#[test]
fn triangle_top_corners_hit() {
    let t = Shape::triangle(0.0, 0.0, 40.0, Color::RED);
    assert!(t.contains(pt(-20.0, -20.0)));
    assert!(t.contains(pt(20.0, -20.0)));
}

#[test]
fn triangle_rejects_outside_box() {
    let t = Shape::triangle(0.0, 0.0, 40.0, Color::RED);
    assert!(!t.contains(pt(21.0, 0.0)));
    assert!(!t.contains(pt(0.0, 21.0)));
}

#[test]
fn shape_contains_matches_method() {
    let shapes = [
        Shape::circle(0.0, 0.0, 10.0, Color::RED),
        Shape::rectangle(0.0, 0.0, 10.0, 30.0, Color::RED),
        Shape::square(0.0, 0.0, 10.0, Color::RED),
        Shape::triangle(0.0, 0.0, 10.0, Color::RED),
    ];
    for shape in &shapes {
        for p in [pt(0.0, 0.0), pt(4.0, 4.0), pt(5.0, 12.0), pt(20.0, 0.0)] {
            assert_eq!(shape_contains(shape, p), shape.contains(p));
        }
    }
}
