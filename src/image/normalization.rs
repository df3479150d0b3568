//! Maximum-based normalization of plate samples

use crate::plate::{GridError, SampleGrid};

/// Largest sample in `values`
///
/// Non-finite samples are skipped, so one stray `inf` cannot flatten the
/// rest of the plate. A plate with no finite sample yields `-inf`.
///
/// # Errors
///
/// Returns [`GridError::Empty`] when `values` is empty
#[inline]
pub fn compute_max(values: &[f64]) -> Result<f64, GridError> {
    if values.is_empty() {
        return Err(GridError::Empty);
    }
    Ok(values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(f64::NEG_INFINITY, f64::max))
}

/// The per-render normalization reference, computed once and shared by every pixel lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationContext {
    max_value: f64,
}

impl NormalizationContext {
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] when the grid has no samples
    pub fn from_grid(grid: &SampleGrid) -> Result<Self, GridError> {
        compute_max(grid.values()).map(|max_value| Self { max_value })
    }

    #[inline(always)]
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.max_value
    }
}
