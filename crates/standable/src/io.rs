//! Loading scene objects from Wavefront OBJ files.
//!
//! Polygon faces are kept as-is (no triangulation) and in file order, so face
//! indices match the file. Materials referenced by the file are ignored; marker slots are created
//! by the command.

use std::io::BufRead;
use std::path::Path;

use glam::Vec3;
use standable_core::{Result, StandableError};
use standable_structures::SceneObject;

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: false,
        triangulate: false,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    }
}

/// Loads every object in an OBJ file.
pub fn load_obj(path: impl AsRef<Path>) -> Result<Vec<SceneObject>> {
    let path = path.as_ref();
    let (models, _materials) =
        tobj::load_obj(path, &load_options()).map_err(|e| StandableError::ObjLoad(e.to_string()))?;
    log::info!("loaded {} objects from {}", models.len(), path.display());
    Ok(models.into_iter().map(model_to_object).collect())
}

/// Parses OBJ data from a reader. `mtllib` statements are ignored.
pub fn read_obj<R: BufRead>(reader: &mut R) -> Result<Vec<SceneObject>> {
    let (models, _materials) =
        tobj::load_obj_buf(reader, &load_options(), |_| Err(tobj::LoadError::OpenFileFailed))
            .map_err(|e| StandableError::ObjLoad(e.to_string()))?;
    Ok(models.into_iter().map(model_to_object).collect())
}

fn model_to_object(model: tobj::Model) -> SceneObject {
    let mesh = model.mesh;
    let vertices: Vec<Vec3> = mesh
        .positions
        .chunks_exact(3)
        .map(|p| Vec3::new(p[0], p[1], p[2]))
        .collect();

    // face_arities is empty when every face is a triangle
    let faces: Vec<Vec<u32>> = if mesh.face_arities.is_empty() {
        mesh.indices.chunks(3).map(<[u32]>::to_vec).collect()
    } else {
        let mut faces = Vec::with_capacity(mesh.face_arities.len());
        let mut start = 0;
        for &arity in &mesh.face_arities {
            let end = (start + arity as usize).min(mesh.indices.len());
            faces.push(mesh.indices[start..end].to_vec());
            start = end;
        }
        faces
    };

    log::debug!(
        "object '{}': {} vertices, {} faces",
        model.name,
        vertices.len(),
        faces.len()
    );
    SceneObject::new(model.name, vertices, faces)
}
