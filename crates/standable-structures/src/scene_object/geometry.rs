//! World-space geometry of scene objects.

use standable_core::{Mesh, MeshSource, Result, StandableError};

use super::{ObjectKind, SceneObject};

impl MeshSource for SceneObject {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn world_mesh(&self, epsilon: f32) -> Result<Mesh> {
        if self.kind != ObjectKind::Mesh {
            return Err(StandableError::InvalidGeometry(format!(
                "object '{}' has no mesh data",
                self.name
            )));
        }

        Mesh::from_polygons_with_transform(
            &self.vertices,
            self.faces.clone(),
            self.transform,
            epsilon,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Mat4, Vec3};
    use standable_core::DEFAULT_DEGENERATE_EPSILON;

    fn quad() -> SceneObject {
        SceneObject::new(
            "quad",
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![vec![0, 1, 2, 3]],
        )
    }

    #[test]
    fn test_world_mesh_identity() {
        let mesh = quad().world_mesh(DEFAULT_DEGENERATE_EPSILON).unwrap();
        assert_eq!(mesh.num_faces(), 1);
        assert_eq!(mesh.vertices(), quad().vertices());
        assert!((mesh.faces()[0].normal().unwrap() - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_world_mesh_applies_rotation() {
        let mut obj = quad();
        // Flip the quad upside down.
        obj.set_transform(Mat4::from_rotation_y(std::f32::consts::PI));
        let mesh = obj.world_mesh(DEFAULT_DEGENERATE_EPSILON).unwrap();
        assert!((mesh.faces()[0].normal().unwrap() - Vec3::NEG_Z).length() < 1e-5);
        // Object data is left in object space.
        assert_eq!(obj.vertices()[1], Vec3::X);
    }

    #[test]
    fn test_world_mesh_of_empty_object_fails() {
        let err = SceneObject::empty("Empty")
            .world_mesh(DEFAULT_DEGENERATE_EPSILON)
            .unwrap_err();
        assert!(matches!(err, StandableError::InvalidGeometry(_)));
    }

    #[test]
    fn test_world_mesh_with_bad_index_fails() {
        let obj = SceneObject::new("bad", vec![Vec3::ZERO], vec![vec![0, 1, 2]]);
        let err = obj.world_mesh(DEFAULT_DEGENERATE_EPSILON).unwrap_err();
        assert!(matches!(err, StandableError::InvalidGeometry(_)));
    }

    #[test]
    fn test_mesh_without_faces_is_empty_not_error() {
        let obj = SceneObject::new("verts", vec![Vec3::ZERO, Vec3::X], Vec::new());
        let mesh = obj.world_mesh(DEFAULT_DEGENERATE_EPSILON).unwrap();
        assert!(mesh.is_empty());
    }
}
