//! Core abstractions for standable-ground.
//!
//! This crate provides the data model and the slope classification algorithm:
//! - [`Mesh`] world-space snapshots with per-face normals
//! - [`Classifier`] and [`classify`] for partitioning faces by steepness
//! - [`MeshSource`] / [`MeshSink`] traits at the host boundary
//! - Marker materials, configuration options, and errors

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod classify;
pub mod error;
pub mod marker;
pub mod mesh;
pub mod options;
pub mod slope;
pub mod structure;

pub use classify::{classify, ClassificationResult, Classifier, DegenerateFacePolicy, FaceClass};
pub use error::{Result, StandableError};
pub use marker::{MarkerMaterial, MarkerSlots};
pub use mesh::{Face, Mesh, DEFAULT_DEGENERATE_EPSILON};
pub use options::Options;
pub use slope::{steepness_degrees, ReferenceUpVector, SteepnessThreshold};
pub use structure::{MeshSink, MeshSource};

// Re-export glam types for convenience
pub use glam::{Mat4, Vec3, Vec4};
