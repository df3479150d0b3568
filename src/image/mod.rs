mod assemble;
mod colormap;
mod normalization;

pub use assemble::{OutputRaster, RasterImage, ResizeFilter, assemble, resize};
pub use colormap::{Colormap, map_to_color, normalized_unit, render_grayscale};
pub use normalization::{NormalizationContext, compute_max};

use crate::plate::SampleGrid;

/// Color every sample of `grid` with `colormap`
#[must_use]
pub fn render_raster(
    grid: &SampleGrid,
    ctx: &NormalizationContext,
    colormap: Colormap,
) -> RasterImage {
    assemble(grid, ctx, |value, max_value| colormap.map(value, max_value))
}
