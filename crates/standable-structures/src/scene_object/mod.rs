//! Scene object structure.

mod geometry;
mod materials;

use glam::{Mat4, Vec3};
use standable_core::MarkerMaterial;

/// What kind of data an object carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectKind {
    /// A polygon mesh.
    #[default]
    Mesh,
    /// An object without geometry (empty, camera, light).
    Empty,
}

/// A host-side object: a polygon mesh in object space, its world transform,
/// visibility, material slots, and per-face material indices.
#[derive(Debug, Clone)]
pub struct SceneObject {
    // Core data
    name: String,
    kind: ObjectKind,
    vertices: Vec<Vec3>,
    faces: Vec<Vec<u32>>, // Variable-length polygons
    transform: Mat4,
    hidden: bool,

    // Display data
    materials: Vec<MarkerMaterial>,
    face_materials: Vec<usize>,
}

impl SceneObject {
    /// Creates a new mesh object from object-space vertices and polygon faces.
    ///
    /// Each face is a variable-length list of vertex indices forming a polygon.
    /// Triangles have 3 indices, quads have 4, etc.
    pub fn new(name: impl Into<String>, vertices: Vec<Vec3>, faces: Vec<Vec<u32>>) -> Self {
        let face_materials = vec![0; faces.len()];
        Self {
            name: name.into(),
            kind: ObjectKind::Mesh,
            vertices,
            faces,
            transform: Mat4::IDENTITY,
            hidden: false,
            materials: Vec::new(),
            face_materials,
        }
    }

    /// Creates a new mesh object from triangles (convenience method).
    pub fn from_triangles(
        name: impl Into<String>,
        vertices: Vec<Vec3>,
        triangles: Vec<[u32; 3]>,
    ) -> Self {
        let faces: Vec<Vec<u32>> = triangles.into_iter().map(|t| t.to_vec()).collect();
        Self::new(name, vertices, faces)
    }

    /// Creates an object that carries no geometry.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            kind: ObjectKind::Empty,
            ..Self::new(name, Vec::new(), Vec::new())
        }
    }

    /// Returns the object name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the object.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the object kind.
    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Returns the object-space vertices.
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Returns the faces (polygon indices).
    pub fn faces(&self) -> &[Vec<u32>] {
        &self.faces
    }

    /// Returns the object-to-world transform.
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// Sets the object-to-world transform.
    pub fn set_transform(&mut self, transform: Mat4) {
        self.transform = transform;
    }

    /// Returns whether the object is hidden in the viewport.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Hides or shows the object.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Returns a full copy of this object under a new name.
    ///
    /// Geometry, transform, materials and face assignments are copied; the copy
    /// starts visible.
    #[must_use]
    pub fn duplicate(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hidden: false,
            ..self.clone()
        }
    }
}
