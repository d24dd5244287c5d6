//! Color type and operations.
//!
//! Provides an 8-bit ARGB `Color`, alpha derivation helpers, and
//! `mix_color`, the per-channel linear blend used for outline shading.
//!
//! Blending truncates toward zero so that results are identical to the
//! low/high channel decomposition (`low + k * (high - low)` when rising,
//! `high + k * (low - high)` when falling) for every fraction in `(0, 1]`.
//! At exactly zero the blend returns `start`.

use crate::basics::uround;

// ============================================================================
// Color (8-bit per channel)
// ============================================================================

/// ARGB color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BASE_MASK: u32 = 255;

    pub const BLACK: Color = Color::from_argb(255, 0, 0, 0);
    pub const WHITE: Color = Color::from_argb(255, 255, 255, 255);
    pub const RED: Color = Color::from_argb(255, 255, 0, 0);
    /// Fully transparent white, the conventional "transparent" swatch.
    pub const TRANSPARENT: Color = Color::from_argb(0, 255, 255, 255);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// Same color with alpha replaced by `a`.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Same color with alpha replaced by `round(255 * opacity)`.
    ///
    /// `opacity` is clamped to `[0, 1]`; NaN counts as fully transparent.
    pub fn with_opacity(self, opacity: f64) -> Self {
        let opacity = if opacity.is_nan() {
            0.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
        self.with_alpha(uround(opacity * Self::BASE_MASK as f64) as u8)
    }

    pub fn opacity(&self) -> f64 {
        self.a as f64 / Self::BASE_MASK as f64
    }

    /// Interpolate between `self` and `c` by parameter `k` (0.0 to 1.0).
    pub fn gradient(&self, c: &Color, k: f64) -> Color {
        Color {
            a: Self::lerp(self.a, c.a, k),
            r: Self::lerp(self.r, c.r, k),
            g: Self::lerp(self.g, c.g, k),
            b: Self::lerp(self.b, c.b, k),
        }
    }

    #[inline]
    fn lerp(p: u8, q: u8, k: f64) -> u8 {
        let v = p as f64 + (q as f64 - p as f64) * k;
        v.clamp(0.0, Self::BASE_MASK as f64) as u8
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Blend `start` toward `end` by `fraction` on every channel, alpha included.
///
/// `fraction = 0` returns `start`, `fraction = 1` returns `end`.
pub fn mix_color(start: Color, end: Color, fraction: f64) -> Color {
    start.gradient(&end, fraction)
}

// ============================================================================
// Tests
// ============================================================================
