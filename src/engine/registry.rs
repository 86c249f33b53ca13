//! Built-in entity/component registry.
//!
//! Entities live in a `SlotMap`; each component kind gets its own
//! `SecondaryMap` pool keyed by [`EntityId`].

use std::sync::Arc;

use slotmap::{SecondaryMap, SlotMap};

use crate::engine::{DirectionalLight, EntityId, Model, Registry, Transform};

pub struct ComponentRegistry {
    entities: SlotMap<EntityId, ()>,
    transforms: SecondaryMap<EntityId, Transform>,
    lights: SecondaryMap<EntityId, DirectionalLight>,
    meshes: SecondaryMap<EntityId, Arc<Model>>,
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entities: SlotMap::with_key(),
            transforms: SecondaryMap::new(),
            lights: SecondaryMap::new(),
            meshes: SecondaryMap::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    #[must_use]
    pub fn contains(&self, entity: EntityId) -> bool {
        self.entities.contains_key(entity)
    }

    #[must_use]
    pub fn directional_light(&self, entity: EntityId) -> Option<DirectionalLight> {
        self.lights.get(entity).copied()
    }

    #[must_use]
    pub fn render_mesh(&self, entity: EntityId) -> Option<&Arc<Model>> {
        self.meshes.get(entity)
    }
}

impl Registry for ComponentRegistry {
    fn create_entity(&mut self) -> EntityId {
        self.entities.insert(())
    }

    fn destroy_entity(&mut self, entity: EntityId) {
        if self.entities.remove(entity).is_some() {
            self.transforms.remove(entity);
            self.lights.remove(entity);
            self.meshes.remove(entity);
        }
    }

    fn set_transform(&mut self, entity: EntityId, transform: Transform) {
        if self.entities.contains_key(entity) {
            self.transforms.insert(entity, transform);
        }
    }

    fn transform(&self, entity: EntityId) -> Option<Transform> {
        self.transforms.get(entity).copied()
    }

    fn set_directional_light(&mut self, entity: EntityId, light: DirectionalLight) {
        if self.entities.contains_key(entity) {
            self.lights.insert(entity, light);
        }
    }

    fn set_render_mesh(&mut self, entity: EntityId, model: Arc<Model>) {
        if self.entities.contains_key(entity) {
            self.meshes.insert(entity, model);
        }
    }
}
