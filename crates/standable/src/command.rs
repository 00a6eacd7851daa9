//! The "Show Standable Ground" command.
//!
//! Runs the full pipeline on the active object of a [`Scene`] without touching
//! the original: a working copy is classified and marked, and only once that has
//! succeeded is the copy added to the scene and the original hidden.

use standable_core::{Classifier, MarkerMaterial, MarkerSlots, Options, Result, StandableError};
use standable_structures::{Scene, SceneObject};

use crate::acquire::acquire_from;
use crate::apply::apply;

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandableReport {
    /// Name of the object that was analyzed.
    pub source: String,
    /// Name of the marked copy added to the scene.
    pub object: String,
    pub standable: usize,
    pub non_standable: usize,
    /// Faces counted as non-standable because their normal was undefined.
    pub degenerate: usize,
}

/// Classifies the active object's faces by slope and shows the result on a copy.
#[derive(Debug, Clone, Default)]
pub struct ShowStandableGround {
    options: Options,
}

impl ShowStandableGround {
    /// Label shown in host menus.
    pub const LABEL: &'static str = "Show Standable Ground";

    /// Creates the command with the given options.
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Returns the options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Runs the command on the scene's active object.
    ///
    /// On error the scene is left exactly as it was.
    pub fn execute(&self, scene: &mut Scene) -> Result<StandableReport> {
        let classifier = Classifier::from_options(&self.options)?;
        let original = scene.active().ok_or(StandableError::NoActiveSelection)?;
        let source = original.name().to_string();

        let copy_name = scene.unique_name(&format!("{}{source}", self.options.duplicate_prefix));
        let mut working = self.prepare_copy(original, &copy_name);

        let mesh = acquire_from(&working, self.options.degenerate_epsilon)?;
        let result = classifier.classify(&mesh)?;
        apply(&mut working, &result, MarkerSlots::default())?;

        log::info!("{} faces found standable.", result.standable_count());
        log::info!("{} faces found non-standable.", result.non_standable_count());

        // The copy name is unique, so from here on the scene only changes once.
        scene.add_active(working)?;
        if let Some(original) = scene.get_mut(&source) {
            original.set_hidden(true);
        }

        Ok(StandableReport {
            source,
            object: copy_name,
            standable: result.standable_count(),
            non_standable: result.non_standable_count(),
            degenerate: result.degenerate().len(),
        })
    }

    /// Builds the working copy with fresh standable / non-standable marker slots.
    fn prepare_copy(&self, original: &SceneObject, copy_name: &str) -> SceneObject {
        let mut copy = original.duplicate(copy_name);
        copy.clear_materials();

        let source = original.name();
        copy.append_material(MarkerMaterial::standable_for(
            source,
            self.options.standable_color,
        ));
        copy.append_material(MarkerMaterial::non_standable_for(
            source,
            self.options.non_standable_color,
        ));
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use standable_core::DegenerateFacePolicy;

    fn ramp() -> SceneObject {
        // Face 0 is flat, face 1 rises at 60 degrees.
        let h = 3.0f32.sqrt();
        SceneObject::new(
            "Ramp",
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(2.0, 0.0, h),
                Vec3::new(2.0, 1.0, h),
            ],
            vec![vec![0, 1, 2, 3], vec![1, 4, 5, 2]],
        )
    }

    #[test]
    fn test_threshold_changes_result() {
        let mut scene = Scene::new();
        scene.add_active(ramp()).unwrap();
        let report = ShowStandableGround::default().execute(&mut scene).unwrap();
        assert_eq!((report.standable, report.non_standable), (1, 1));

        let mut scene = Scene::new();
        scene.add_active(ramp()).unwrap();
        let relaxed = ShowStandableGround::new(Options::default().with_max_steepness(70.0));
        let report = relaxed.execute(&mut scene).unwrap();
        assert_eq!((report.standable, report.non_standable), (2, 0));
    }

    #[test]
    fn test_invalid_options_leave_scene_untouched() {
        let mut scene = Scene::new();
        scene.add_active(ramp()).unwrap();
        let command = ShowStandableGround::new(Options::default().with_max_steepness(-1.0));
        assert!(matches!(
            command.execute(&mut scene),
            Err(StandableError::InvalidThreshold(_))
        ));
        assert_eq!(scene.len(), 1);
        assert!(!scene.get("Ramp").unwrap().is_hidden());
    }

    #[test]
    fn test_reject_policy_aborts_without_mutation() {
        let ramp = ramp();
        let mut faces = ramp.faces().to_vec();
        faces.push(vec![0, 1, 0]);
        let broken = SceneObject::new("Broken", ramp.vertices().to_vec(), faces);

        let mut scene = Scene::new();
        scene.add_active(broken).unwrap();
        let command = ShowStandableGround::new(
            Options::default().with_degenerate_policy(DegenerateFacePolicy::Reject),
        );
        let err = command.execute(&mut scene).unwrap_err();
        assert!(matches!(err, StandableError::DegenerateFace { face: 2 }));
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.active_name(), Some("Broken"));
        assert!(!scene.get("Broken").unwrap().is_hidden());
    }

    #[test]
    fn test_label() {
        assert_eq!(ShowStandableGround::LABEL, "Show Standable Ground");
    }
}
