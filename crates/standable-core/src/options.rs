//! Configuration options for standable-ground.

use std::path::Path;

use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::classify::DegenerateFacePolicy;
use crate::error::Result;
use crate::mesh::DEFAULT_DEGENERATE_EPSILON;
use crate::slope::{ReferenceUpVector, SteepnessThreshold};

/// Per-invocation configuration of the standable-ground command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Maximum steepness in degrees, compared against the global up axis.
    pub max_steepness_degrees: f32,

    /// The global up axis.
    pub up: Vec3,

    /// Handling of zero-area faces.
    pub degenerate_policy: DegenerateFacePolicy,

    /// Relative tolerance below which a face counts as zero-area; see
    /// [`DEFAULT_DEGENERATE_EPSILON`].
    pub degenerate_epsilon: f32,

    /// RGBA color of the standable marker material.
    pub standable_color: Vec4,

    /// RGBA color of the non-standable marker material.
    pub non_standable_color: Vec4,

    /// Name prefix of the marked duplicate.
    pub duplicate_prefix: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_steepness_degrees: SteepnessThreshold::DEFAULT_DEGREES,
            up: Vec3::Z,
            degenerate_policy: DegenerateFacePolicy::NonStandable,
            degenerate_epsilon: DEFAULT_DEGENERATE_EPSILON,
            standable_color: Vec4::new(0.0, 1.0, 0.0, 1.0),
            non_standable_color: Vec4::new(1.0, 0.0, 0.0, 1.0),
            duplicate_prefix: "Stand_".to_string(),
        }
    }
}

impl Options {
    /// Parses options from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serializes the options to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the threshold and up vector.
    pub fn validate(&self) -> Result<()> {
        self.threshold()?;
        self.up_vector()?;
        Ok(())
    }

    /// Returns the validated steepness threshold.
    pub fn threshold(&self) -> Result<SteepnessThreshold> {
        SteepnessThreshold::new(self.max_steepness_degrees)
    }

    /// Returns the validated up vector.
    pub fn up_vector(&self) -> Result<ReferenceUpVector> {
        ReferenceUpVector::new(self.up)
    }

    /// Sets the threshold in degrees.
    #[must_use]
    pub fn with_max_steepness(mut self, degrees: f32) -> Self {
        self.max_steepness_degrees = degrees;
        self
    }

    /// Sets the up axis.
    #[must_use]
    pub fn with_up(mut self, up: Vec3) -> Self {
        self.up = up;
        self
    }

    /// Sets the degenerate-face policy.
    #[must_use]
    pub fn with_degenerate_policy(mut self, policy: DegenerateFacePolicy) -> Self {
        self.degenerate_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StandableError;

    #[test]
    fn test_options_default() {
        let options = Options::default();
        assert_eq!(options.max_steepness_degrees, 45.0);
        assert_eq!(options.up, Vec3::Z);
        assert_eq!(options.degenerate_policy, DegenerateFacePolicy::NonStandable);
        assert_eq!(options.duplicate_prefix, "Stand_");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_options_partial_json() {
        let options =
            Options::from_json_str(r#"{ "max_steepness_degrees": 30.0, "degenerate_policy": "reject" }"#)
                .unwrap();
        assert_eq!(options.max_steepness_degrees, 30.0);
        assert_eq!(options.degenerate_policy, DegenerateFacePolicy::Reject);
        assert_eq!(options.up, Vec3::Z);
    }

    #[test]
    fn test_options_json_round_trip() {
        let options = Options::default()
            .with_max_steepness(60.0)
            .with_up(Vec3::Y);
        let json = options.to_json().unwrap();
        assert_eq!(Options::from_json_str(&json).unwrap(), options);
    }

    #[test]
    fn test_options_rejects_bad_threshold() {
        let err = Options::from_json_str(r#"{ "max_steepness_degrees": 360.0 }"#).unwrap_err();
        assert!(matches!(err, StandableError::InvalidThreshold(_)));
    }

    #[test]
    fn test_options_rejects_zero_up() {
        let err = Options::from_json_str(r#"{ "up": [0.0, 0.0, 0.0] }"#).unwrap_err();
        assert!(matches!(err, StandableError::InvalidUpVector));
    }

    #[test]
    fn test_options_malformed_json() {
        let err = Options::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, StandableError::JsonError(_)));
    }

    #[test]
    fn test_options_load_missing_file() {
        let err = Options::load("/nonexistent/standable.json").unwrap_err();
        assert!(matches!(err, StandableError::IoError(_)));
    }
}
