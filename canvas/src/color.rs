//! Fill and stroke colors.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use rand::Rng;
use serde::Serialize;

/// RGBA color with each channel normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    /// CSS `lightgray` (#D3D3D3).
    pub const LIGHT_GRAY: Color = Color::rgb(211.0 / 255.0, 211.0 / 255.0, 211.0 / 255.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);

    /// Opaque color.
    #[must_use]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[must_use]
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color with every channel drawn uniformly from `[0, 1)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::rgb(rng.random(), rng.random(), rng.random())
    }

    /// Channels as 0–255 integers, rounded and clamped.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (channel_to_u8(self.r), channel_to_u8(self.g), channel_to_u8(self.b))
    }

    /// CSS color string, e.g. `rgba(255, 0, 0, 1)`.
    #[must_use]
    pub fn to_css(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("rgba({r}, {g}, {b}, {})", self.a.clamp(0.0, 1.0))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
