//! Square sample grid

use super::error::GridError;
use crate::types::SquareSize;

/// Row-major flattening of a square field of attenuation readings
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    size: SquareSize,
    values: Vec<f64>,
}

impl SampleGrid {
    /// Wrap `values` as a `size × size` grid
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] for a zero size or no samples and
    /// [`GridError::LengthMismatch`] when `values.len() != size * size`
    pub fn new(size: u32, values: Vec<f64>) -> Result<Self, GridError> {
        let size = SquareSize(size);
        if size.0 == 0 || values.is_empty() {
            return Err(GridError::Empty);
        }
        if values.len() != size.pixel_count() {
            return Err(GridError::LengthMismatch {
                expected: size.pixel_count(),
                actual: values.len(),
            });
        }
        Ok(Self { size, values })
    }

    /// Grid with every sample set to `value`
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] when `size` is zero
    pub fn filled(size: u32, value: f64) -> Result<Self, GridError> {
        let count = SquareSize(size).pixel_count();
        Self::new(size, vec![value; count])
    }

    #[inline(always)]
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size.0
    }

    #[inline(always)]
    #[must_use]
    pub fn dimensions(&self) -> SquareSize {
        self.size
    }

    #[inline(always)]
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed grid
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sample at column `x`, row `y`
    #[inline]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x >= self.size.0 || y >= self.size.0 {
            return None;
        }
        self.values
            .get(y as usize * self.size.0 as usize + x as usize)
            .copied()
    }

    /// Number of samples that carry no signal (value <= 0 or non-finite)
    #[must_use]
    pub fn empty_cells(&self) -> usize {
        self.values.iter().filter(|&&v| !(v > 0.0) || v.is_infinite()).count()
    }
}
