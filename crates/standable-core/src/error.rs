//! Error types for standable-ground.

use thiserror::Error;

/// The main error type for standable-ground operations.
#[derive(Error, Debug)]
pub enum StandableError {
    /// No mesh object is targeted when the command runs.
    #[error("no active object selected")]
    NoActiveSelection,

    /// The mesh has no extractable vertex/face data.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A face normal could not be computed (zero area).
    #[error("face {face} is degenerate (zero area)")]
    DegenerateFace { face: usize },

    /// The expected marker material slot is absent on the target mesh.
    #[error("material slot {slot} is missing ({marked} faces already marked)")]
    MissingMaterialSlot { slot: usize, marked: usize },

    /// Steepness threshold outside `[0, 360)` degrees.
    #[error("steepness threshold {0} is outside [0, 360) degrees")]
    InvalidThreshold(f32),

    /// Reference up vector is zero or not finite.
    #[error("reference up vector must be finite and non-zero")]
    InvalidUpVector,

    /// A face index is past the end of the target mesh.
    #[error("face {face} is out of range ({count} faces)")]
    FaceOutOfRange { face: usize, count: usize },

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// An object with the given name already exists.
    #[error("object '{0}' already exists")]
    ObjectExists(String),

    /// An object with the given name was not found.
    #[error("object '{0}' not found")]
    ObjectNotFound(String),

    /// Failed to load a mesh file.
    #[error("mesh load error: {0}")]
    ObjLoad(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for standable-ground operations.
pub type Result<T> = std::result::Result<T, StandableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_slot_message_reports_progress() {
        let err = StandableError::MissingMaterialSlot { slot: 1, marked: 3 };
        assert_eq!(
            err.to_string(),
            "material slot 1 is missing (3 faces already marked)"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: StandableError = io.into();
        assert!(matches!(err, StandableError::IoError(_)));
    }
}
