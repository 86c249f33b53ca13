//! Built-in scene graph: lighting, camera matrices and the entity list.

use glam::{Mat4, Vec3};

use crate::engine::{CameraSpec, EntityId, GraphicsDevice, SceneGraph, Transform};

/// Camera state derived from a [`CameraSpec`].
///
/// View and projection are recomputed whenever the camera spec changes; the
/// renderer consumes the cached matrices.
#[derive(Debug, Clone, Copy)]
pub struct SceneCamera {
    pub spec: CameraSpec,
    pub view: Mat4,
    pub projection: Mat4,
    pub view_projection: Mat4,
}

impl SceneCamera {
    #[must_use]
    pub fn from_spec(spec: CameraSpec) -> Self {
        let view = Mat4::look_at_rh(spec.position, spec.target, spec.up);
        let projection = Mat4::perspective_rh(
            spec.fov_y_degrees.to_radians(),
            spec.aspect,
            spec.near,
            spec.far,
        );
        Self {
            spec,
            view,
            projection,
            view_projection: projection * view,
        }
    }
}

/// Built-in scene graph implementation.
///
/// Holds the data the controller manages through [`SceneGraph`]: ambient
/// light, the active camera and the registered entities. Rendering is
/// delegated to the device seam; no draw calls are recorded here.
pub struct AvatarSceneGraph {
    ambient_color: Vec3,
    ambient_intensity: f32,
    camera: Option<SceneCamera>,
    entities: Vec<(EntityId, Transform)>,
    elapsed: f32,
    rendered_frames: u64,
}

impl Default for AvatarSceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl AvatarSceneGraph {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ambient_color: Vec3::ZERO,
            ambient_intensity: 0.0,
            camera: None,
            entities: Vec::new(),
            elapsed: 0.0,
            rendered_frames: 0,
        }
    }

    #[must_use]
    pub fn ambient_light(&self) -> (Vec3, f32) {
        (self.ambient_color, self.ambient_intensity)
    }

    #[must_use]
    pub fn camera(&self) -> Option<&SceneCamera> {
        self.camera.as_ref()
    }

    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn contains_entity(&self, entity: EntityId) -> bool {
        self.entities.iter().any(|(id, _)| *id == entity)
    }

    /// Total scene time accumulated through `update`, in seconds.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[must_use]
    pub fn rendered_frames(&self) -> u64 {
        self.rendered_frames
    }
}

impl SceneGraph for AvatarSceneGraph {
    fn set_ambient_light(&mut self, color: Vec3, intensity: f32) {
        self.ambient_color = color;
        self.ambient_intensity = intensity;
    }

    fn set_camera(&mut self, camera: CameraSpec) {
        self.camera = Some(SceneCamera::from_spec(camera));
    }

    fn update(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    fn render(&mut self, _device: &mut dyn GraphicsDevice) {
        // Draw submission lives behind the device seam; the built-in scene
        // only tracks that a render cycle happened.
        self.rendered_frames += 1;
    }

    fn add_entity(&mut self, entity: EntityId, transform: Transform) {
        self.entities.push((entity, transform));
    }

    fn remove_entity(&mut self, entity: EntityId) {
        self.entities.retain(|(id, _)| *id != entity);
    }
}
