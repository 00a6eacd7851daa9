//! Host object model for standable-ground.
//!
//! This crate provides an in-memory stand-in for the host application:
//! - [`SceneObject`]: a polygon mesh with transform, visibility and material slots
//! - [`Scene`]: the object registry with an active selection
//!
//! `SceneObject` implements [`standable_core::MeshSource`] and
//! [`standable_core::MeshSink`], so the pipeline can read from and write to it.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod scene;
pub mod scene_object;

pub use scene::Scene;
pub use scene_object::{ObjectKind, SceneObject};
