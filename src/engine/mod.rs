//! Engine Interface
//!
//! The controller drives an external rendering/animation engine through the
//! narrow, object-safe traits in this module. Each trait exposes exactly the
//! operations the lifecycle controller calls; everything behind them (GPU
//! command submission, skeletal math, mesh upload) is the engine's business.
//!
//! The crate ships one built-in implementation of every trait (see
//! [`headless::HeadlessEngine`]); embedders with a full renderer provide
//! their own [`EngineBackend`].

pub mod animator;
pub mod device;
pub mod headless;
pub mod loader;
pub mod registry;
pub mod scene;

use std::sync::Arc;

use glam::Vec3;

use crate::errors::Result;

slotmap::new_key_type! {
    /// Identifier of one renderable/logical object within a [`Registry`].
    pub struct EntityId;
}

/// Local transform component attached to an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler rotation in radians.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// A transform at the given position with identity rotation and scale.
    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}

/// Directional light component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: Vec3,
    pub intensity: f32,
}

/// Full camera description handed to the scene graph.
///
/// The controller owns position/target/FOV and recomputes the aspect ratio
/// from the canvas dimensions; the scene graph derives view and projection
/// matrices from this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSpec {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

/// Skeleton summary extracted from a parsed model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skeleton {
    pub joint_count: usize,
}

/// An in-memory model produced by a [`ModelLoader`].
///
/// Shared between the registry (render-mesh component) and the animator
/// (skeleton binding), hence the `Arc` at the loader boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub name: Option<String>,
    pub mesh_count: usize,
    pub clip_names: Vec<String>,
    pub skeleton: Option<Skeleton>,
}

/// Rendering backend handle: frame sequencing, viewport and frame pacing.
pub trait GraphicsDevice {
    fn set_viewport(&mut self, x: u32, y: u32, width: u32, height: u32);
    fn begin_frame(&mut self);
    fn end_frame(&mut self);
    fn present(&mut self);
    /// Measured frames per second, `0.0` until a measurement exists.
    fn frame_rate(&self) -> f32;
}

/// Scene graph handle: lighting, camera, per-frame logic and rendering.
pub trait SceneGraph {
    fn set_ambient_light(&mut self, color: Vec3, intensity: f32);
    fn set_camera(&mut self, camera: CameraSpec);
    /// Advances scene-level per-frame logic by `dt` seconds.
    fn update(&mut self, dt: f32);
    fn render(&mut self, device: &mut dyn GraphicsDevice);
    fn add_entity(&mut self, entity: EntityId, transform: Transform);
    fn remove_entity(&mut self, entity: EntityId);
}

/// Model loader handle: parses a model binary blob from memory.
pub trait ModelLoader {
    fn load_from_memory(&mut self, bytes: &[u8]) -> Result<Arc<Model>>;
}

/// Animator handle: clip playback against a bound skeleton.
pub trait Animator {
    fn set_speed(&mut self, speed: f32);
    /// Starts the named clip, looping when `looped` is set. Re-issuing the
    /// same clip restarts it; the animator treats this as idempotent.
    fn play(&mut self, clip: &str, looped: bool);
    fn bind_skeleton(&mut self, skeleton: &Skeleton);
    /// Advances playback by `dt` seconds.
    fn advance(&mut self, dt: f32);
}

/// Entity/component registry handle.
///
/// The controller attaches a closed set of components: transforms,
/// directional lights and render meshes.
pub trait Registry {
    fn create_entity(&mut self) -> EntityId;
    /// Removes the entity and every component attached to it. Unknown ids
    /// are ignored.
    fn destroy_entity(&mut self, entity: EntityId);
    fn set_transform(&mut self, entity: EntityId, transform: Transform);
    fn transform(&self, entity: EntityId) -> Option<Transform>;
    fn set_directional_light(&mut self, entity: EntityId, light: DirectionalLight);
    fn set_render_mesh(&mut self, entity: EntityId, model: Arc<Model>);
}

/// Factory for the five collaborator handles the controller owns.
///
/// Creation order during initialization is device, scene, loader, animator,
/// registry; the scene factory receives the freshly created device.
pub trait EngineBackend {
    fn create_device(&self) -> Result<Box<dyn GraphicsDevice>>;
    fn create_scene(&self, device: &dyn GraphicsDevice) -> Result<Box<dyn SceneGraph>>;
    fn create_model_loader(&self) -> Result<Box<dyn ModelLoader>>;
    fn create_animator(&self) -> Result<Box<dyn Animator>>;
    fn create_registry(&self) -> Result<Box<dyn Registry>>;
}
