//! Slope primitives: the steepness threshold, the reference up vector, and the
//! angle between a face normal and "up".

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StandableError};

/// Maximum steepness, in degrees, that still counts as standable.
///
/// Valid values lie in `[0, 360)`. Anything at or above 180 makes every
/// non-degenerate face standable, since steepness never exceeds 180.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct SteepnessThreshold(f32);

impl SteepnessThreshold {
    /// Default threshold in degrees.
    pub const DEFAULT_DEGREES: f32 = 45.0;

    /// Creates a threshold, rejecting values outside `[0, 360)`.
    pub fn new(degrees: f32) -> Result<Self> {
        if degrees.is_finite() && (0.0..360.0).contains(&degrees) {
            Ok(Self(degrees))
        } else {
            Err(StandableError::InvalidThreshold(degrees))
        }
    }

    /// Returns the threshold in degrees.
    pub fn degrees(self) -> f32 {
        self.0
    }

    /// Returns whether a steepness angle (degrees) is within this threshold.
    ///
    /// The boundary is inclusive and exact: no slack is added, so a threshold
    /// below 180 never admits a downward-facing face.
    pub fn admits(self, steepness: f32) -> bool {
        steepness <= self.0
    }
}

impl Default for SteepnessThreshold {
    fn default() -> Self {
        Self(Self::DEFAULT_DEGREES)
    }
}

impl TryFrom<f32> for SteepnessThreshold {
    type Error = StandableError;

    fn try_from(degrees: f32) -> Result<Self> {
        Self::new(degrees)
    }
}

impl From<SteepnessThreshold> for f32 {
    fn from(threshold: SteepnessThreshold) -> Self {
        threshold.0
    }
}

/// Unit vector pointing "up" in the mesh's world frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec3", into = "Vec3")]
pub struct ReferenceUpVector(Vec3);

impl ReferenceUpVector {
    /// Global +Z, the up axis of a Z-up scene.
    pub const Z_UP: Self = Self(Vec3::Z);

    /// Global +Y, the up axis of a Y-up scene.
    pub const Y_UP: Self = Self(Vec3::Y);

    /// Creates an up vector, normalizing the input.
    ///
    /// Zero-length or non-finite vectors are rejected.
    pub fn new(up: Vec3) -> Result<Self> {
        let normalized = up.try_normalize().ok_or(StandableError::InvalidUpVector)?;
        Ok(Self(normalized))
    }

    /// Returns the unit vector.
    pub fn vector(self) -> Vec3 {
        self.0
    }
}

impl Default for ReferenceUpVector {
    fn default() -> Self {
        Self::Z_UP
    }
}

impl TryFrom<Vec3> for ReferenceUpVector {
    type Error = StandableError;

    fn try_from(up: Vec3) -> Result<Self> {
        Self::new(up)
    }
}

impl From<ReferenceUpVector> for Vec3 {
    fn from(up: ReferenceUpVector) -> Self {
        up.0
    }
}

/// Angle in degrees between a unit normal and the up vector, in `[0, 180]`.
///
/// Faces pointing downward come out above 90 degrees. The angle is evaluated in
/// `f64` and rounded once, so axis-aligned normals land exactly on 0, 90 and 180.
#[allow(clippy::cast_possible_truncation)]
pub fn steepness_degrees(normal: Vec3, up: ReferenceUpVector) -> f32 {
    let cos = f64::from(normal.dot(up.0)).clamp(-1.0, 1.0);
    cos.acos().to_degrees() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_default() {
        assert_eq!(SteepnessThreshold::default().degrees(), 45.0);
    }

    #[test]
    fn test_threshold_range() {
        assert!(SteepnessThreshold::new(0.0).is_ok());
        assert!(SteepnessThreshold::new(359.9).is_ok());
        assert!(matches!(
            SteepnessThreshold::new(360.0),
            Err(StandableError::InvalidThreshold(_))
        ));
        assert!(SteepnessThreshold::new(-0.5).is_err());
        assert!(SteepnessThreshold::new(f32::NAN).is_err());
    }

    #[test]
    fn test_threshold_inclusive() {
        let t = SteepnessThreshold::new(30.0).unwrap();
        assert!(t.admits(30.0));
        assert!(t.admits(29.0));
        assert!(!t.admits(30.001));
    }

    #[test]
    fn test_threshold_just_below_180_rejects_180() {
        let t = SteepnessThreshold::new(179.9999).unwrap();
        assert!(!t.admits(180.0));
        assert!(SteepnessThreshold::new(180.0).unwrap().admits(180.0));
    }

    #[test]
    fn test_up_vector_normalizes() {
        let up = ReferenceUpVector::new(Vec3::new(0.0, 0.0, 5.0)).unwrap();
        assert_eq!(up.vector(), Vec3::Z);
    }

    #[test]
    fn test_up_vector_rejects_zero() {
        assert!(matches!(
            ReferenceUpVector::new(Vec3::ZERO),
            Err(StandableError::InvalidUpVector)
        ));
        assert!(ReferenceUpVector::new(Vec3::new(f32::INFINITY, 0.0, 0.0)).is_err());
    }

    #[test]
    fn test_steepness_axes() {
        let up = ReferenceUpVector::default();
        assert_eq!(steepness_degrees(Vec3::Z, up), 0.0);
        assert_eq!(steepness_degrees(Vec3::X, up), 90.0);
        assert_eq!(steepness_degrees(Vec3::NEG_Z, up), 180.0);
    }

    #[test]
    fn test_steepness_clamps_overshoot() {
        // Slightly over-length normal must not produce NaN.
        let up = ReferenceUpVector::default();
        let angle = steepness_degrees(Vec3::new(0.0, 0.0, 1.000_001), up);
        assert!(angle.is_finite());
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn test_threshold_serde_validates() {
        let t: SteepnessThreshold = serde_json::from_str("30.0").unwrap();
        assert_eq!(t.degrees(), 30.0);
        assert!(serde_json::from_str::<SteepnessThreshold>("400.0").is_err());
    }
}
