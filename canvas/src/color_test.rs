#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

// =============================================================
// Construction
// =============================================================

#[test]
fn rgb_is_opaque() {
    let c = Color::rgb(0.1, 0.2, 0.3);
    assert_eq!(c.a, 1.0);
}

#[test]
fn rgba_keeps_alpha() {
    assert_eq!(Color::rgba(0.0, 0.0, 0.0, 0.25).a, 0.25);
}

#[test]
fn named_colors() {
    assert_eq!(Color::BLACK.to_rgb8(), (0, 0, 0));
    assert_eq!(Color::WHITE.to_rgb8(), (255, 255, 255));
    assert_eq!(Color::LIGHT_GRAY.to_rgb8(), (211, 211, 211));
    assert_eq!(Color::RED.to_rgb8(), (255, 0, 0));
}

// =============================================================
// Conversion
// =============================================================

#[test]
fn to_rgb8_rounds() {
    assert_eq!(Color::rgb(0.5, 0.0, 1.0).to_rgb8(), (128, 0, 255));
}

#[test]
fn to_rgb8_clamps_out_of_range() {
    assert_eq!(Color::rgb(-0.5, 2.0, 0.0).to_rgb8(), (0, 255, 0));
}

#[test]
fn to_css_format() {
    assert_eq!(Color::RED.to_css(), "rgba(255, 0, 0, 1)");
    assert_eq!(Color::rgba(0.0, 0.0, 1.0, 0.5).to_css(), "rgba(0, 0, 255, 0.5)");
}

// =============================================================
// Random
// =============================================================

#[test]
fn random_channels_in_unit_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let c = Color::random(&mut rng);
        for ch in [c.r, c.g, c.b] {
            assert!((0.0..1.0).contains(&ch));
        }
        assert_eq!(c.a, 1.0);
    }
}

#[test]
fn random_is_deterministic_for_seed() {
    let a = Color::random(&mut StdRng::seed_from_u64(42));
    let b = Color::random(&mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn random_varies_between_draws() {
    let mut rng = StdRng::seed_from_u64(1);
    let a = Color::random(&mut rng);
    let b = Color::random(&mut rng);
    assert_ne!(a, b);
}
