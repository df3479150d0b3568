//! Domain-specific types shared by the rendering stages

use image::Rgb;
use std::fmt;

/// A single output color, one byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorTriple {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorTriple {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Same intensity on every channel
    #[must_use]
    pub const fn gray(level: u8) -> Self {
        Self {
            r: level,
            g: level,
            b: level,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_black(&self) -> bool {
        *self == Self::BLACK
    }
}

impl From<ColorTriple> for Rgb<u8> {
    #[inline]
    fn from(c: ColorTriple) -> Self {
        Rgb([c.r, c.g, c.b])
    }
}

impl From<Rgb<u8>> for ColorTriple {
    #[inline]
    fn from(px: Rgb<u8>) -> Self {
        let [r, g, b] = px.0;
        Self { r, g, b }
    }
}

impl fmt::Display for ColorTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({r}, {g}, {b})", r = self.r, g = self.g, b = self.b)
    }
}

/// Side length of a square raster, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareSize(pub u32);

impl SquareSize {
    #[inline]
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.0 as usize * self.0 as usize
    }
}

impl fmt::Display for SquareSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{side}x{side}", side = self.0)
    }
}

/// Aggregate statistics of a loaded plate, used for verbose output and error reports
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateSummary {
    pub size: SquareSize,
    pub max_value: f64,
    pub sum: f64,
    /// Samples at or below zero (rendered black)
    pub empty_cells: usize,
}
