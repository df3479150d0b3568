//! Scalar to color mapping
//!
//! The false-color strategies place the normalized sample on a circle and
//! measure its distance to three anchors spaced 120° apart on the unit
//! circle, one per channel:
//!
//! - R at `(0, 1)`
//! - G at `(-√3/2, -1/2)`
//! - B at `(√3/2, -1/2)`
//!
//! The phase runs over the inverted unit `t = 1 - value / max`, so the
//! brightest readings sit at `t = 0`. Nearby intensities land on visibly
//! different hues instead of a monotonic ramp.

use crate::types::ColorTriple;
use clap::ValueEnum;
use std::f64::consts::PI;
use std::fmt;

const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

const ANCHOR_R: (f64, f64) = (0.0, 1.0);
const ANCHOR_G: (f64, f64) = (-HALF_SQRT_3, -0.5);
const ANCHOR_B: (f64, f64) = (HALF_SQRT_3, -0.5);

/// Radius of the high-frequency locus
const HIGH_FREQ_RADIUS: f64 = 0.2;
/// Phase multiplier of the high-frequency locus (8π/5)
const HIGH_FREQ_RATE: f64 = 8.0 * PI / 5.0;

/// Color mapping strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Colormap {
    /// Unit circle, `channel = 255·(1 - distance)`
    #[default]
    #[value(name = "false-color-low")]
    FalseColorLowFreq,
    /// Radius-1/5 circle at phase 8πt/5, `channel = 255·(1.5 - distance)`
    #[value(name = "false-color-high")]
    FalseColorHighFreq,
    /// `255·(1 - u)` on every channel
    Grayscale,
}

impl Colormap {
    /// Color for `value` given the plate maximum
    ///
    /// Samples at or below zero and non-finite samples are black.
    #[inline]
    #[must_use]
    pub fn map(self, value: f64, max_value: f64) -> ColorTriple {
        let Some(u) = normalized_unit(value, max_value) else {
            return ColorTriple::BLACK;
        };

        match self {
            Colormap::FalseColorLowFreq => {
                let t = 1.0 - u;
                triad_color((t.cos(), t.sin()), 1.0)
            }
            Colormap::FalseColorHighFreq => {
                let t = HIGH_FREQ_RATE * (1.0 - u);
                triad_color(
                    (t.sin() * HIGH_FREQ_RADIUS, t.cos() * HIGH_FREQ_RADIUS),
                    1.5,
                )
            }
            Colormap::Grayscale => ColorTriple::gray(channel(1.0 - u)),
        }
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Colormap::FalseColorLowFreq => "false-color-low",
            Colormap::FalseColorHighFreq => "false-color-high",
            Colormap::Grayscale => "grayscale",
        };
        f.write_str(name)
    }
}

/// Default false-color mapping
#[inline]
#[must_use]
pub fn map_to_color(value: f64, max_value: f64) -> ColorTriple {
    Colormap::FalseColorLowFreq.map(value, max_value)
}

/// Grayscale mapping, kept as its own entry point for callers that never want hue
#[inline]
#[must_use]
pub fn render_grayscale(value: f64, max_value: f64) -> ColorTriple {
    Colormap::Grayscale.map(value, max_value)
}

/// `value / max_value` clamped to `[0, 1]`, or `None` when there is no signal
///
/// A degenerate maximum (non-positive or non-finite) saturates to 1.
#[inline]
#[must_use]
pub fn normalized_unit(value: f64, max_value: f64) -> Option<f64> {
    // `!(value > 0.0)` also catches NaN
    if !(value > 0.0) || value.is_infinite() {
        return None;
    }

    if !(max_value > 0.0) || !max_value.is_finite() {
        return Some(1.0);
    }

    let u = value / max_value;
    Some(if u.is_finite() { u.clamp(0.0, 1.0) } else { 1.0 })
}

#[inline(always)]
fn distance((x1, y1): (f64, f64), (x2, y2): (f64, f64)) -> f64 {
    (x1 - x2).hypot(y1 - y2)
}

#[inline]
fn triad_color(point: (f64, f64), offset: f64) -> ColorTriple {
    ColorTriple::new(
        channel(offset - distance(point, ANCHOR_R)),
        channel(offset - distance(point, ANCHOR_G)),
        channel(offset - distance(point, ANCHOR_B)),
    )
}

/// Scale a unit intensity to a byte, rounding to nearest
#[inline(always)]
fn channel(intensity: f64) -> u8 {
    // Saturating cast after clamp; NaN would map to 0
    (intensity * 255.0).round().clamp(0.0, 255.0) as u8
}
