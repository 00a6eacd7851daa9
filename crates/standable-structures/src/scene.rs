//! Scene registry with an active selection.

use std::collections::HashMap;

use standable_core::{Result, StandableError};

use crate::scene_object::SceneObject;

/// Registry for all objects in a scene, keyed by unique name, plus the active object.
#[derive(Debug, Default, Clone)]
pub struct Scene {
    objects: HashMap<String, SceneObject>,
    active: Option<String>,
}

impl Scene {
    /// Creates a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object to the scene.
    ///
    /// Returns an error if an object with the same name already exists.
    pub fn add(&mut self, object: SceneObject) -> Result<()> {
        let name = object.name().to_string();
        if self.objects.contains_key(&name) {
            return Err(StandableError::ObjectExists(name));
        }
        log::debug!("adding object '{name}'");
        self.objects.insert(name, object);
        Ok(())
    }

    /// Adds an object and makes it the active one.
    pub fn add_active(&mut self, object: SceneObject) -> Result<()> {
        let name = object.name().to_string();
        self.add(object)?;
        self.active = Some(name);
        Ok(())
    }

    /// Gets an object by name.
    pub fn get(&self, name: &str) -> Option<&SceneObject> {
        self.objects.get(name)
    }

    /// Gets a mutable object by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut SceneObject> {
        self.objects.get_mut(name)
    }

    /// Checks if an object with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    /// Removes an object by name, clearing the selection if it was active.
    pub fn remove(&mut self, name: &str) -> Option<SceneObject> {
        if self.active.as_deref() == Some(name) {
            self.active = None;
        }
        self.objects.remove(name)
    }

    /// Returns the name of the active object.
    pub fn active_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Returns the active object.
    pub fn active(&self) -> Option<&SceneObject> {
        self.objects.get(self.active.as_deref()?)
    }

    /// Makes the named object active.
    pub fn set_active(&mut self, name: &str) -> Result<()> {
        if !self.objects.contains_key(name) {
            return Err(StandableError::ObjectNotFound(name.to_string()));
        }
        self.active = Some(name.to_string());
        Ok(())
    }

    /// Deselects the active object.
    pub fn clear_selection(&mut self) {
        self.active = None;
    }

    /// Returns a name based on `base` that no object uses yet.
    ///
    /// Taken names get a numeric suffix: `Cube`, `Cube.001`, `Cube.002`, ...
    pub fn unique_name(&self, base: &str) -> String {
        if !self.contains(base) {
            return base.to_string();
        }
        (1..)
            .map(|i| format!("{base}.{i:03}"))
            .find(|candidate| !self.contains(candidate))
            .unwrap_or_else(|| base.to_string())
    }

    /// Returns an iterator over all objects.
    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.values()
    }

    /// Returns the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn object(name: &str) -> SceneObject {
        SceneObject::from_triangles(name, vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![[0, 1, 2]])
    }

    #[test]
    fn test_add_and_get() {
        let mut scene = Scene::new();
        scene.add(object("a")).unwrap();
        assert!(scene.contains("a"));
        assert_eq!(scene.get("a").map(SceneObject::name), Some("a"));
        assert!(scene.get("b").is_none());
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut scene = Scene::new();
        scene.add(object("a")).unwrap();
        let err = scene.add(object("a")).unwrap_err();
        assert!(matches!(err, StandableError::ObjectExists(name) if name == "a"));
    }

    #[test]
    fn test_selection() {
        let mut scene = Scene::new();
        assert!(scene.active().is_none());

        scene.add(object("a")).unwrap();
        scene.add_active(object("b")).unwrap();
        assert_eq!(scene.active_name(), Some("b"));

        scene.set_active("a").unwrap();
        assert_eq!(scene.active().map(SceneObject::name), Some("a"));

        assert!(matches!(
            scene.set_active("missing"),
            Err(StandableError::ObjectNotFound(_))
        ));
        assert_eq!(scene.active_name(), Some("a"));

        scene.remove("a");
        assert!(scene.active().is_none());
    }

    #[test]
    fn test_unique_name() {
        let mut scene = Scene::new();
        assert_eq!(scene.unique_name("Stand_Cube"), "Stand_Cube");
        scene.add(object("Stand_Cube")).unwrap();
        assert_eq!(scene.unique_name("Stand_Cube"), "Stand_Cube.001");
        scene.add(object("Stand_Cube.001")).unwrap();
        assert_eq!(scene.unique_name("Stand_Cube"), "Stand_Cube.002");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn unique_name_is_never_taken(taken in 0usize..20) {
                let mut scene = Scene::new();
                scene.add(object("Obj")).unwrap();
                for i in 1..=taken {
                    scene.add(object(&format!("Obj.{i:03}"))).unwrap();
                }
                let name = scene.unique_name("Obj");
                prop_assert!(!scene.contains(&name));
                prop_assert_eq!(name, format!("Obj.{:03}", taken + 1));
            }
        }
    }
}
