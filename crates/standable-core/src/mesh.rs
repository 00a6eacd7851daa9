//! World-space mesh snapshots.
//!
//! A [`Mesh`] is the pure-data input to the classifier: vertex positions in a single
//! world frame plus polygon faces with precomputed unit normals. It is detached from
//! whatever host object it was read from.

use glam::{Mat4, Vec3};

use crate::error::{Result, StandableError};

/// Default relative tolerance below which a face is considered degenerate.
///
/// Compared against the length of the summed fan cross product divided by the
/// sum of its edge-length products, i.e. the sine of the face's widest corner
/// spread. It does not depend on the scene's unit scale.
pub const DEFAULT_DEGENERATE_EPSILON: f32 = 1e-6;

/// A planar polygon of a mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    indices: Vec<u32>,
    normal: Option<Vec3>,
}

impl Face {
    /// Returns the vertex indices of this face, in winding order.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the number of corners.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the face has no corners. Never true for a validated face.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the unit normal, or `None` for a zero-area face.
    pub fn normal(&self) -> Option<Vec3> {
        self.normal
    }

    /// Returns true if the face normal could not be computed.
    pub fn is_degenerate(&self) -> bool {
        self.normal.is_none()
    }
}

/// A read-only mesh snapshot with world-space vertices and per-face normals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Creates a mesh from world-space vertices and polygon faces.
    ///
    /// Each face is a variable-length list of vertex indices (at least three)
    /// ordered counter-clockwise when seen from its front side.
    pub fn from_polygons(vertices: Vec<Vec3>, polygons: Vec<Vec<u32>>) -> Result<Self> {
        Self::build(vertices, polygons, DEFAULT_DEGENERATE_EPSILON)
    }

    /// Creates a mesh from object-space vertices and the object's world transform.
    ///
    /// The transform is applied to every vertex before normals are computed, so
    /// positions and normals are always in the same frame.
    pub fn from_polygons_with_transform(
        local_vertices: &[Vec3],
        polygons: Vec<Vec<u32>>,
        transform: Mat4,
        epsilon: f32,
    ) -> Result<Self> {
        let vertices = local_vertices
            .iter()
            .map(|&v| transform.transform_point3(v))
            .collect();
        Self::build(vertices, polygons, epsilon)
    }

    fn build(vertices: Vec<Vec3>, polygons: Vec<Vec<u32>>, epsilon: f32) -> Result<Self> {
        if let Some(i) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(StandableError::InvalidGeometry(format!(
                "vertex {i} has a non-finite coordinate"
            )));
        }

        let mut faces = Vec::with_capacity(polygons.len());
        for (face_idx, indices) in polygons.into_iter().enumerate() {
            if indices.len() < 3 {
                return Err(StandableError::InvalidGeometry(format!(
                    "face {face_idx} has {} vertices, need at least 3",
                    indices.len()
                )));
            }
            if let Some(&bad) = indices.iter().find(|&&vi| vi as usize >= vertices.len()) {
                return Err(StandableError::InvalidGeometry(format!(
                    "face {face_idx} references vertex {bad}, mesh has {}",
                    vertices.len()
                )));
            }

            let normal = polygon_normal(&vertices, &indices, epsilon);
            faces.push(Face { indices, normal });
        }

        Ok(Self { vertices, faces })
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no faces.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Returns the world-space vertices.
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Returns the faces.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the number of degenerate (zero-area) faces.
    pub fn num_degenerate_faces(&self) -> usize {
        self.faces.iter().filter(|f| f.is_degenerate()).count()
    }

    /// Returns the axis-aligned bounding box, or `None` for a mesh without vertices.
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(min, max), &v| (min.min(v), max.max(v))),
        )
    }
}

/// Computes a polygon's unit normal from its winding order.
///
/// Sums the cross products of the fan triangles around the first corner. For a
/// planar polygon this is twice the area times the normal, so a collinear first
/// corner or a concave outline still gives the right direction.
///
/// The face is degenerate when that sum is at most `epsilon` times the summed
/// edge-length products of the fan, so the cutoff scales with the face itself.
fn polygon_normal(vertices: &[Vec3], indices: &[u32], epsilon: f32) -> Option<Vec3> {
    let v0 = vertices[indices[0] as usize];
    let mut sum = Vec3::ZERO;
    let mut scale = 0.0;
    for pair in indices[1..].windows(2) {
        let e1 = vertices[pair[0] as usize] - v0;
        let e2 = vertices[pair[1] as usize] - v0;
        sum += e1.cross(e2);
        scale += e1.length() * e2.length();
    }

    if sum.length() <= epsilon * scale {
        None
    } else {
        sum.try_normalize()
    }
}
