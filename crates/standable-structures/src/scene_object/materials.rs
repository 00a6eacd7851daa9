//! Material slots and per-face material assignment.

use standable_core::{MarkerMaterial, MeshSink, Result, StandableError};

use super::SceneObject;

impl SceneObject {
    /// Returns the material slots in order.
    pub fn materials(&self) -> &[MarkerMaterial] {
        &self.materials
    }

    /// Returns the number of material slots.
    pub fn num_materials(&self) -> usize {
        self.materials.len()
    }

    /// Appends a material slot and returns its index.
    pub fn append_material(&mut self, material: MarkerMaterial) -> usize {
        self.materials.push(material);
        self.materials.len() - 1
    }

    /// Removes every material slot. Face assignments fall back to slot 0.
    pub fn clear_materials(&mut self) {
        self.materials.clear();
        self.face_materials.fill(0);
    }

    /// Returns the material slot index of each face.
    pub fn face_materials(&self) -> &[usize] {
        &self.face_materials
    }

    /// Returns the material slot index of a face.
    pub fn face_material(&self, face: usize) -> Option<usize> {
        self.face_materials.get(face).copied()
    }

    /// Returns the material assigned to a face, if its slot exists.
    pub fn face_material_ref(&self, face: usize) -> Option<&MarkerMaterial> {
        self.materials.get(self.face_material(face)?)
    }
}

impl MeshSink for SceneObject {
    fn face_count(&self) -> usize {
        self.face_materials.len()
    }

    fn material_slot_count(&self) -> usize {
        self.materials.len()
    }

    fn set_face_material(&mut self, face: usize, slot: usize) -> Result<()> {
        let count = self.face_materials.len();
        let entry = self
            .face_materials
            .get_mut(face)
            .ok_or(StandableError::FaceOutOfRange { face, count })?;
        *entry = slot;
        Ok(())
    }
}
