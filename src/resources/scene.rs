use uuid::Uuid;

use crate::resources::{SceneCommand, SceneError, SceneObject};

/// Host-side scene the simulation places objects into.
pub trait SceneRegistry {
    fn insert(&mut self, object: SceneObject) -> Result<(), SceneError>;
    fn remove(&mut self, id: Uuid) -> Result<SceneObject, SceneError>;

    fn apply(&mut self, command: &SceneCommand) -> Result<(), SceneError> {
        match command {
            SceneCommand::Insert(object) => self.insert(object.clone()),
            SceneCommand::Remove(id) => self.remove(*id).map(|_| ()),
        }
    }
}

/// Scene objects in insertion order.
#[derive(Debug, Clone, Default)]
pub struct WorldList {
    objects: Vec<SceneObject>,
}

impl WorldList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: Uuid) -> Option<&SceneObject> {
        self.objects.iter().find(|object| object.id == id)
    }

    pub fn find_by_label(&self, label: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|object| object.label == label)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.objects.iter().map(|object| object.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }
}

impl SceneRegistry for WorldList {
    fn insert(&mut self, object: SceneObject) -> Result<(), SceneError> {
        if self.get(object.id).is_some() {
            return Err(SceneError::AlreadyExists(object.id));
        }
        self.objects.push(object);
        Ok(())
    }

    fn remove(&mut self, id: Uuid) -> Result<SceneObject, SceneError> {
        let index = self
            .objects
            .iter()
            .position(|object| object.id == id)
            .ok_or(SceneError::NotFound(id))?;
        Ok(self.objects.remove(index))
    }
}
