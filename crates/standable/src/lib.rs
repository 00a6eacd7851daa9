//! standable-ground: classify mesh faces as standable or too steep.
//!
//! A face is *standable* when the angle between its normal and the global up
//! vector does not exceed a steepness threshold (45 degrees by default).
//! Downward-facing faces are always steeper than 90 degrees.
//!
//! # Quick Start
//!
//! ```no_run
//! use standable_ground::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let mut scene = Scene::new();
//!     let floor = SceneObject::new(
//!         "Floor",
//!         vec![Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::Y],
//!         vec![vec![0, 1, 2, 3]],
//!     );
//!     scene.add_active(floor)?;
//!
//!     let report = ShowStandableGround::default().execute(&mut scene)?;
//!     assert_eq!(report.standable, 1);
//!     Ok(())
//! }
//! ```
//!
//! # Pipeline
//!
//! 1. [`acquire`]: read the active object into a world-space [`Mesh`]
//! 2. [`Classifier`]: partition faces by steepness
//! 3. [`apply`]: write the two marker slots onto the faces
//!
//! [`ShowStandableGround`] runs all three on a copy of the active object and only
//! hides the original once the copy has been marked.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod acquire;
pub mod apply;
pub mod command;
pub mod io;

// Re-export core types
pub use standable_core::{
    classify, steepness_degrees, ClassificationResult, Classifier, DegenerateFacePolicy, Face,
    FaceClass, MarkerMaterial, MarkerSlots, Mesh, MeshSink, MeshSource, Options,
    ReferenceUpVector, Result, StandableError, SteepnessThreshold, Mat4, Vec3, Vec4,
};

// Re-export structures
pub use standable_structures::{ObjectKind, Scene, SceneObject};

pub use acquire::{acquire, acquire_from};
pub use apply::{apply, ApplyReport};
pub use command::{ShowStandableGround, StandableReport};
pub use io::{load_obj, read_obj};

/// Initializes `env_logger` if no logger is installed yet.
///
/// Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
