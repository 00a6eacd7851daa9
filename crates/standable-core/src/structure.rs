//! Capability traits at the host boundary.
//!
//! The classifier never touches host objects directly. A host exposes its mesh
//! through [`MeshSource`] and accepts per-face marker assignments through
//! [`MeshSink`].

use crate::error::Result;
use crate::mesh::Mesh;

/// A host object that can produce a world-space mesh snapshot.
pub trait MeshSource {
    /// Returns the name of the host object.
    fn source_name(&self) -> &str;

    /// Materializes vertices and faces in world space.
    ///
    /// Faces whose relative cross-product length is at most `epsilon` get no normal.
    /// Fails with `InvalidGeometry` if the object has no usable face data.
    fn world_mesh(&self, epsilon: f32) -> Result<Mesh>;
}

/// A host mesh whose per-face display attribute can be written.
pub trait MeshSink {
    /// Returns the number of faces that can be marked.
    fn face_count(&self) -> usize;

    /// Returns the number of material slots on the mesh.
    fn material_slot_count(&self) -> usize;

    /// Assigns a material slot to a face.
    ///
    /// Callers check `slot < material_slot_count()` first. A face index at or
    /// beyond `face_count()` fails with `FaceOutOfRange` and writes nothing.
    fn set_face_material(&mut self, face: usize, slot: usize) -> Result<()>;
}
