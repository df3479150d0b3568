//! Raster assembly and resampling

use super::normalization::NormalizationContext;
use crate::plate::SampleGrid;
use crate::types::ColorTriple;
use clap::ValueEnum;
use image::RgbImage;
use image::imageops::{self, FilterType};

/// Full-resolution raster, one pixel per plate sample
pub type RasterImage = RgbImage;

/// Resampled raster, the only artifact that is saved or shown
pub type OutputRaster = RgbImage;

/// Resampling filter used when scaling the raster to the output window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ResizeFilter {
    Nearest,
    /// Bilinear
    #[default]
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Lay out one color per sample into a `size × size` raster
///
/// Sample `i` lands on column `i % size`, row `i / size`. `color_fn` is called
/// exactly once per sample with the sample value and the plate maximum.
pub fn assemble<F>(grid: &SampleGrid, ctx: &NormalizationContext, mut color_fn: F) -> RasterImage
where
    F: FnMut(f64, f64) -> ColorTriple,
{
    let size = grid.size();
    let side = size as usize;
    let max_value = ctx.max_value();
    let mut raster = RgbImage::new(size, size);

    for (i, &value) in grid.values().iter().enumerate() {
        // Both fit in u32: i < size * size
        let x = (i % side) as u32;
        let y = (i / side) as u32;
        raster.put_pixel(x, y, color_fn(value, max_value).into());
    }

    raster
}

/// Scale `raster` to `target × target`
#[must_use]
pub fn resize(raster: &RasterImage, target: u32, filter: ResizeFilter) -> OutputRaster {
    imageops::resize(raster, target, target, filter.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    /// Encodes the sample index into the pixel so positions can be checked
    fn index_color(value: f64, _max: f64) -> ColorTriple {
        let i = value as u32;
        ColorTriple::new((i & 0xff) as u8, ((i >> 8) & 0xff) as u8, 1)
    }

    fn indexed_grid(size: u32) -> SampleGrid {
        let values = (0..size * size).map(f64::from).collect();
        SampleGrid::new(size, values).unwrap()
    }

    #[test]
    fn test_assemble_row_major_placement() {
        let size = 7;
        let grid = indexed_grid(size);
        let ctx = NormalizationContext::from_grid(&grid).unwrap();

        let raster = assemble(&grid, &ctx, index_color);

        assert_eq!(raster.dimensions(), (size, size));
        for y in 0..size {
            for x in 0..size {
                let expected: Rgb<u8> = index_color(f64::from(y * size + x), 0.0).into();
                assert_eq!(*raster.get_pixel(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_assemble_visits_each_sample_once() {
        let grid = indexed_grid(13);
        let ctx = NormalizationContext::from_grid(&grid).unwrap();
        let mut seen = vec![0u32; grid.len()];

        let raster = assemble(&grid, &ctx, |value, max| {
            assert_eq!(max, 168.0);
            seen[value as usize] += 1;
            ColorTriple::new(0, 0, 1)
        });

        assert!(seen.iter().all(|&n| n == 1));
        // Every cell was written: no pixel keeps the zeroed default
        assert!(raster.pixels().all(|px| px.0[2] == 1));
    }

    #[test]
    fn test_resize_dimensions() {
        let grid = SampleGrid::filled(40, 2.0).unwrap();
        let ctx = NormalizationContext::from_grid(&grid).unwrap();
        let raster = assemble(&grid, &ctx, |_, _| ColorTriple::new(10, 20, 30));

        let down = resize(&raster, 30, ResizeFilter::Triangle);
        let up = resize(&raster, 75, ResizeFilter::Nearest);

        assert_eq!(down.dimensions(), (30, 30));
        assert_eq!(up.dimensions(), (75, 75));
        assert!(down.pixels().all(|px| *px == Rgb([10, 20, 30])));
    }

    #[test]
    fn test_resize_is_deterministic() {
        let size = 32;
        let values = (0..size * size).map(|i| f64::from(i % 17)).collect();
        let grid = SampleGrid::new(size, values).unwrap();
        let ctx = NormalizationContext::from_grid(&grid).unwrap();
        let raster = assemble(&grid, &ctx, crate::image::map_to_color);

        for filter in [ResizeFilter::Triangle, ResizeFilter::Lanczos3] {
            let a = resize(&raster, 24, filter);
            let b = resize(&raster, 24, filter);
            assert_eq!(a, b);
        }
    }
}
