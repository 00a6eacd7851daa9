//! Slope classification of mesh faces.
//!
//! Every face is classified on its own: the angle between its normal and the
//! reference up vector is compared against the steepness threshold. There is no
//! connectivity or reachability analysis, so evaluation order never matters.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StandableError};
use crate::mesh::{Face, Mesh};
use crate::options::Options;
use crate::slope::{steepness_degrees, ReferenceUpVector, SteepnessThreshold};

/// What to do with faces whose normal cannot be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateFacePolicy {
    /// Classify as non-standable and report them in [`ClassificationResult::degenerate`].
    #[default]
    NonStandable,
    /// Abort with [`StandableError::DegenerateFace`] on the first one.
    Reject,
}

/// The class assigned to a single face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceClass {
    /// Steepness within the threshold.
    Standable,
    /// Too steep, facing down, or degenerate.
    NonStandable,
}

/// A partition of face indices into standable and non-standable sets.
///
/// Both sets are sorted ascending, disjoint, and together cover every face.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassificationResult {
    classes: Vec<FaceClass>,
    standable: Vec<usize>,
    non_standable: Vec<usize>,
    degenerate: Vec<usize>,
}

impl ClassificationResult {
    fn from_classes(classes: Vec<FaceClass>, degenerate: Vec<usize>) -> Self {
        let mut standable = Vec::new();
        let mut non_standable = Vec::new();
        for (face, class) in classes.iter().enumerate() {
            match class {
                FaceClass::Standable => standable.push(face),
                FaceClass::NonStandable => non_standable.push(face),
            }
        }

        Self {
            classes,
            standable,
            non_standable,
            degenerate,
        }
    }

    /// Returns the standable face indices.
    pub fn standable(&self) -> &[usize] {
        &self.standable
    }

    /// Returns the non-standable face indices, degenerate faces included.
    pub fn non_standable(&self) -> &[usize] {
        &self.non_standable
    }

    /// Returns the faces that were non-standable because their normal was undefined.
    pub fn degenerate(&self) -> &[usize] {
        &self.degenerate
    }

    /// Returns the class of a face, or `None` if the index is out of range.
    pub fn class_of(&self, face: usize) -> Option<FaceClass> {
        self.classes.get(face).copied()
    }

    /// Returns true if the face is standable.
    pub fn is_standable(&self, face: usize) -> bool {
        self.class_of(face) == Some(FaceClass::Standable)
    }

    /// Returns the per-face classes in face order.
    pub fn classes(&self) -> &[FaceClass] {
        &self.classes
    }

    /// Returns the total number of classified faces.
    pub fn face_count(&self) -> usize {
        self.classes.len()
    }

    pub fn standable_count(&self) -> usize {
        self.standable.len()
    }

    pub fn non_standable_count(&self) -> usize {
        self.non_standable.len()
    }
}

/// Classifies faces by steepness against a fixed up vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Classifier {
    threshold: SteepnessThreshold,
    up: ReferenceUpVector,
    degenerate_policy: DegenerateFacePolicy,
}

impl Classifier {
    /// Creates a classifier with the default degenerate-face policy.
    pub fn new(threshold: SteepnessThreshold, up: ReferenceUpVector) -> Self {
        Self {
            threshold,
            up,
            degenerate_policy: DegenerateFacePolicy::default(),
        }
    }

    /// Builds a classifier from validated options.
    pub fn from_options(options: &Options) -> Result<Self> {
        Ok(Self {
            threshold: options.threshold()?,
            up: options.up_vector()?,
            degenerate_policy: options.degenerate_policy,
        })
    }

    /// Sets the degenerate-face policy.
    #[must_use]
    pub fn with_degenerate_policy(mut self, policy: DegenerateFacePolicy) -> Self {
        self.degenerate_policy = policy;
        self
    }

    pub fn threshold(&self) -> SteepnessThreshold {
        self.threshold
    }

    pub fn up(&self) -> ReferenceUpVector {
        self.up
    }

    pub fn degenerate_policy(&self) -> DegenerateFacePolicy {
        self.degenerate_policy
    }

    /// Classifies a single face. `None` means the face is degenerate.
    pub fn classify_face(&self, face: &Face) -> Option<FaceClass> {
        let normal = face.normal()?;
        if self.threshold.admits(steepness_degrees(normal, self.up)) {
            Some(FaceClass::Standable)
        } else {
            Some(FaceClass::NonStandable)
        }
    }

    /// Classifies every face of a mesh.
    pub fn classify(&self, mesh: &Mesh) -> Result<ClassificationResult> {
        self.classify_faces(mesh.faces())
    }

    /// Classifies a slice of faces; indices in the result are slice positions.
    pub fn classify_faces(&self, faces: &[Face]) -> Result<ClassificationResult> {
        let mut classes = Vec::with_capacity(faces.len());
        let mut degenerate = Vec::new();

        for (idx, face) in faces.iter().enumerate() {
            let class = match self.classify_face(face) {
                Some(class) => class,
                None => match self.degenerate_policy {
                    DegenerateFacePolicy::Reject => {
                        return Err(StandableError::DegenerateFace { face: idx });
                    }
                    DegenerateFacePolicy::NonStandable => {
                        degenerate.push(idx);
                        FaceClass::NonStandable
                    }
                },
            };
            classes.push(class);
        }

        if !degenerate.is_empty() {
            log::warn!(
                "{} degenerate faces classified as non-standable",
                degenerate.len()
            );
        }

        let result = ClassificationResult::from_classes(classes, degenerate);
        log::debug!(
            "classified {} faces at {} degrees: {} standable, {} non-standable",
            result.face_count(),
            self.threshold.degrees(),
            result.standable_count(),
            result.non_standable_count()
        );
        Ok(result)
    }
}

/// Classifies a mesh with the given threshold and up vector.
///
/// Degenerate faces are classified non-standable.
pub fn classify(
    mesh: &Mesh,
    threshold: SteepnessThreshold,
    up: ReferenceUpVector,
) -> ClassificationResult {
    let classifier = Classifier::new(threshold, up)
        .with_degenerate_policy(DegenerateFacePolicy::NonStandable);
    match classifier.classify_faces(mesh.faces()) {
        Ok(result) => result,
        // Only the `Reject` policy can fail.
        Err(_) => ClassificationResult::default(),
    }
}
