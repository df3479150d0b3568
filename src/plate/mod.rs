//! Plate loading
//!
//! A plate is a text file of whitespace-separated floating-point readings,
//! `size * size` of them, in row-major order.

mod error;
mod grid;
mod parser;

pub use error::GridError;
pub use grid::SampleGrid;
pub use parser::parse_samples;

use anyhow::{Context, Result};
use std::path::Path;

/// Parse plate text into a `size × size` grid
///
/// # Errors
///
/// Returns an error if a token is not a number or the sample count does not
/// match `size * size`
pub fn parse_plate(text: &str, size: u32) -> Result<SampleGrid, GridError> {
    let values = parse_samples(text)?;
    SampleGrid::new(size, values)
}

/// Read and parse a plate file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents are not a
/// valid `size × size` plate
pub fn load_plate(path: &Path, size: u32) -> Result<SampleGrid> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read plate file: {}", path.display()))?;

    tracing::debug!("Read {} bytes from {}", text.len(), path.display());

    parse_plate(&text, size)
        .with_context(|| format!("Failed to parse plate file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_parse_plate_square() {
        let grid = parse_plate("1 2\n3 4\n", 2).unwrap();
        assert_eq!(grid.size(), 2);
        assert_eq!(grid.values(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_parse_plate_empty() {
        assert_matches!(parse_plate("", 2), Err(GridError::Empty));
    }

    #[test]
    fn test_load_plate_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0.5 1.5 2.5").unwrap();
        writeln!(file, "3.5 4.5 5.5").unwrap();
        writeln!(file, "6.5 7.5 8.5").unwrap();

        let grid = load_plate(file.path(), 3).unwrap();
        assert_eq!(grid.get(2, 2), Some(8.5));
    }

    #[test]
    fn test_load_plate_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_plate(&dir.path().join("savedPlate"), 3).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read plate file"));
    }

    #[test]
    fn test_load_plate_wrong_count_keeps_cause() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1 2 3").unwrap();

        let err = load_plate(file.path(), 2).unwrap_err();
        assert_matches!(
            err.downcast_ref::<GridError>(),
            Some(GridError::LengthMismatch { expected: 4, actual: 3 })
        );
    }
}
