//! Render pipeline
//!
//! load → integrity check → normalize → assemble → resize → encode → persist

mod error;

pub use error::ProcessError;

use crate::config::RenderConfig;
use crate::image::{NormalizationContext, OutputRaster, RasterImage, render_raster, resize};
use crate::integrity::{self, IntegrityWarning};
use crate::output::{self, OutputSink};
use crate::plate::{self, SampleGrid};
use anyhow::{Result, bail};
use crate::types::PlateSummary;
use std::path::{Path, PathBuf};

/// Everything produced by one render
#[derive(Debug, Clone)]
pub struct Rendered {
    pub raster: RasterImage,
    pub output: OutputRaster,
    pub context: NormalizationContext,
    pub summary: PlateSummary,
    pub warning: Option<IntegrityWarning>,
}

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub path: PathBuf,
    pub rendered: Rendered,
}

/// Render a loaded plate into full-size and output rasters
///
/// An integrity mismatch is logged and returned, never fatal.
///
/// # Errors
///
/// Returns an error if `config` is invalid, the grid side differs from
/// `config.grid_size`, or the grid has no samples to normalize against
pub fn render(grid: &SampleGrid, config: &RenderConfig) -> Result<Rendered> {
    config.validate()?;
    if grid.size() != config.grid_size {
        bail!(
            "Plate is {} but the configured grid size is {}",
            grid.dimensions(),
            config.grid_size
        );
    }

    let warning = integrity::check(
        grid.values(),
        config.expected_checksum,
        config.checksum_tolerance,
        config.strict_checksum,
    );
    if let Some(w) = &warning {
        tracing::warn!("{w}");
    }

    let context = NormalizationContext::from_grid(grid)?;
    tracing::debug!("Normalizing against max value {}", context.max_value());

    let raster = render_raster(grid, &context, config.colormap);
    tracing::info!(
        "Assembled {} raster with {} colormap",
        grid.dimensions(),
        config.colormap
    );

    let output = resize(&raster, config.window, config.filter);
    tracing::debug!(
        "Resized to {}x{} using {:?} filter",
        output.width(),
        output.height(),
        config.filter
    );

    let summary = PlateSummary {
        size: grid.dimensions(),
        max_value: context.max_value(),
        sum: integrity::sample_sum(grid.values()),
        empty_cells: grid.empty_cells(),
    };

    Ok(Rendered {
        raster,
        output,
        context,
        summary,
        warning,
    })
}

/// Load, render and persist one plate file
///
/// The image lands at [`output::output_path`]`(output_dir, epoch_secs, tag)`.
/// Nothing is written unless the raster was fully rendered and encoded.
///
/// # Errors
///
/// Returns a [`ProcessError`] naming the stage that failed
pub fn run(
    path: &Path,
    config: &RenderConfig,
    output_dir: &Path,
    epoch_secs: u64,
    tag: Option<&str>,
    sink: &mut dyn OutputSink,
) -> Result<RunOutcome, ProcessError> {
    config
        .validate()
        .map_err(|e| ProcessError::InvalidConfig(format!("{e:#}")))?;

    // Stage 1: Load plate
    tracing::info!("Loading plate from {}", path.display());
    let grid = plate::load_plate(path, config.grid_size)
        .map_err(|e| ProcessError::LoadFailed(format!("{e:#}")))?;

    // Stage 2: Render
    let rendered =
        render(&grid, config).map_err(|e| ProcessError::RenderFailed(format!("{e:#}")))?;

    // Stage 3: Encode and persist
    let out_path = output::output_path(output_dir, epoch_secs, tag);
    output::encode_png(&rendered.output)
        .and_then(|bytes| sink.write(&out_path, &bytes))
        .map_err(|e| ProcessError::SaveFailed {
            summary: rendered.summary,
            error: format!("{e:#}"),
        })?;
    tracing::info!("Saved {}", out_path.display());

    Ok(RunOutcome {
        path: out_path,
        rendered,
    })
}
