//! Checksum guard for the reference plate
//!
//! Purely advisory: a mismatch is reported, rendering always continues.

use std::fmt;

/// Sum of the canonical test plate
pub const REFERENCE_CHECKSUM: f64 = 14_365.942_363_022_965;

/// Sample sum did not match the expected reference
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrityWarning {
    pub actual: f64,
    pub expected: f64,
}

impl fmt::Display for IntegrityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Test trace fails checksum: {actual:.9} instead of {expected:.9}",
            actual = self.actual,
            expected = self.expected
        )
    }
}

/// Sum samples in storage order
#[inline]
#[must_use]
pub fn sample_sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Compare the sample sum against `expected`
///
/// Only reports when `strict` is set. A `tolerance` of zero demands an exact match.
#[must_use]
pub fn check(values: &[f64], expected: f64, tolerance: f64, strict: bool) -> Option<IntegrityWarning> {
    if !strict {
        return None;
    }
    check_sum(sample_sum(values), expected, tolerance)
}

/// Same as [`check`] for an already computed sum
#[must_use]
pub fn check_sum(actual: f64, expected: f64, tolerance: f64) -> Option<IntegrityWarning> {
    // Written so that a NaN sum is reported as a mismatch
    if (actual - expected).abs() <= tolerance {
        None
    } else {
        Some(IntegrityWarning { actual, expected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_matching_sum_is_silent() {
        let values = [1.5, 2.25, 0.25];
        assert_eq!(check(&values, 4.0, 0.0, true), None);
    }

    #[test]
    fn test_mismatch_reports_both_sums() {
        let values = [1.0, 2.0];
        let warning = check(&values, REFERENCE_CHECKSUM, 0.0, true).unwrap();

        assert_relative_eq!(warning.actual, 3.0);
        assert_eq!(
            warning.to_string(),
            "Test trace fails checksum: 3.000000000 instead of 14365.942363023"
        );
    }

    #[test]
    fn test_not_strict_never_warns() {
        assert_eq!(check(&[1.0], REFERENCE_CHECKSUM, 0.0, false), None);
    }

    #[test]
    fn test_tolerance() {
        assert_eq!(check_sum(10.0 + 1e-10, 10.0, 1e-9), None);
        assert!(check_sum(10.1, 10.0, 1e-9).is_some());
    }

    #[test]
    fn test_nan_sum_is_mismatch() {
        assert!(check(&[f64::NAN, 1.0], 1.0, 1.0, true).is_some());
    }
}
