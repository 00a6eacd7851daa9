//! Marker materials used to display a classification.

use glam::Vec4;
use serde::{Deserialize, Serialize};

use crate::classify::FaceClass;

/// A flat-colored material assigned to faces to show their class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerMaterial {
    /// Material name.
    pub name: String,
    /// RGBA diffuse color.
    pub diffuse_color: Vec4,
}

impl MarkerMaterial {
    /// Creates a new marker material.
    pub fn new(name: impl Into<String>, diffuse_color: Vec4) -> Self {
        Self {
            name: name.into(),
            diffuse_color,
        }
    }

    /// Creates the "standable" marker for an object (conventionally green).
    #[must_use]
    pub fn standable_for(object_name: &str, color: Vec4) -> Self {
        Self::new(format!("StandableGreen_{object_name}"), color)
    }

    /// Creates the "non-standable" marker for an object (conventionally red).
    #[must_use]
    pub fn non_standable_for(object_name: &str, color: Vec4) -> Self {
        Self::new(format!("NonstandableRed_{object_name}"), color)
    }
}

/// Material slot indices holding the two markers on the target mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerSlots {
    pub standable: usize,
    pub non_standable: usize,
}

impl Default for MarkerSlots {
    fn default() -> Self {
        Self {
            standable: 0,
            non_standable: 1,
        }
    }
}

impl MarkerSlots {
    /// Returns the slot for a face class.
    pub fn slot_for(&self, class: FaceClass) -> usize {
        match class {
            FaceClass::Standable => self.standable,
            FaceClass::NonStandable => self.non_standable,
        }
    }
}
