use thiserror::Error;

/// Reasons a flat sample array cannot be turned into a square plate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// No samples at all (or a zero grid size); there is nothing to normalize against
    #[error("Plate contains no samples")]
    Empty,

    #[error("Plate has {actual} samples, expected {expected} for a square grid")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Invalid sample {token:?} on line {line}")]
    Parse { line: usize, token: String },
}
