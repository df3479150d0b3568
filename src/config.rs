//! Render configuration

use crate::image::{Colormap, ResizeFilter};
use crate::integrity::REFERENCE_CHECKSUM;
use anyhow::{Result, bail};

/// Plate rendered when no file is given
pub const DEFAULT_PLATE: &str = "./Data/savedPlate";
/// Side length of the canonical plate
pub const DEFAULT_GRID_SIZE: u32 = 1000;
/// Side length of the saved/displayed image
pub const DEFAULT_WINDOW: u32 = 750;

/// Everything a render needs besides the samples
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub grid_size: u32,
    pub window: u32,
    pub colormap: Colormap,
    pub filter: ResizeFilter,
    pub expected_checksum: f64,
    pub checksum_tolerance: f64,
    /// Report checksum mismatches
    pub strict_checksum: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            window: DEFAULT_WINDOW,
            colormap: Colormap::default(),
            filter: ResizeFilter::default(),
            expected_checksum: REFERENCE_CHECKSUM,
            checksum_tolerance: 0.0,
            strict_checksum: true,
        }
    }
}

impl RenderConfig {
    /// # Errors
    ///
    /// Returns an error for zero sizes or a negative/NaN tolerance
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            bail!("Grid size must be positive");
        }
        if self.window == 0 {
            bail!("Output window must be positive");
        }
        // The full-size raster keeps grid_size² RGB pixels in one buffer
        let raster_bytes = usize::try_from(self.grid_size)
            .ok()
            .and_then(|side| side.checked_mul(side))
            .and_then(|pixels| pixels.checked_mul(3));
        if raster_bytes.is_none() {
            bail!(
                "Grid size {} is too large for an in-memory raster",
                self.grid_size
            );
        }
        if !(self.checksum_tolerance >= 0.0) {
            bail!(
                "Checksum tolerance must be non-negative, got {}",
                self.checksum_tolerance
            );
        }
        Ok(())
    }
}
