//! Mesh acquisition: turning a host object into a world-space [`Mesh`] snapshot.

use standable_core::{Mesh, MeshSource, Result, StandableError};
use standable_structures::Scene;

/// Acquires the world-space mesh of the scene's active object.
///
/// Fails with `NoActiveSelection` if nothing is selected and with
/// `InvalidGeometry` if the object has no usable mesh data. An object with
/// zero faces yields an empty mesh.
pub fn acquire(scene: &Scene, epsilon: f32) -> Result<Mesh> {
    let object = scene.active().ok_or(StandableError::NoActiveSelection)?;
    acquire_from(object, epsilon)
}

/// Acquires the world-space mesh of any [`MeshSource`].
pub fn acquire_from<S: MeshSource + ?Sized>(source: &S, epsilon: f32) -> Result<Mesh> {
    let mesh = source.world_mesh(epsilon)?;
    log::debug!(
        "acquired '{}': {} vertices, {} faces",
        source.source_name(),
        mesh.num_vertices(),
        mesh.num_faces()
    );
    if let Some((min, max)) = mesh.bounding_box() {
        log::debug!("world bounds of '{}': {min} .. {max}", source.source_name());
    }
    Ok(mesh)
}
