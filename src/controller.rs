//! Scene Lifecycle Controller
//!
//! [`AvatarScene`] owns the five engine handles (device, scene graph, model
//! loader, animator, registry) and sequences every lifecycle operation:
//! initialize, model load, resize, frame advance, shutdown. One instance
//! drives one avatar scene for the lifetime of the hosting process.
//!
//! # Failure model
//!
//! Every fallible operation returns [`Result`]; nothing here logs-and-
//! swallows. The FFI boundary adapter is the single place errors are
//! converted into log entries for the host.
//!
//! # Handle presence
//!
//! Outside of `initialize` itself the handles are either all present or all
//! absent: a failed initialization releases whatever it had already created.
//! Operations still check each handle they touch independently, so a
//! controller in any state tolerates any call order.

#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

#[cfg(target_arch = "wasm32")]
use web_time::Instant;

use glam::Vec3;

use crate::animation::AnimationState;
use crate::engine::{
    Animator, CameraSpec, DirectionalLight, EngineBackend, EntityId, GraphicsDevice, ModelLoader,
    Registry, SceneGraph, Transform,
};
use crate::errors::{AvatarError, Result};

/// Default eye position, roughly head height facing the avatar.
const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 1.7, 2.5);
const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 1.5, 0.0);
const CAMERA_FOV_DEGREES: f32 = 50.0;
const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 100.0;

const LIGHT_POSITION: Vec3 = Vec3::new(2.0, 3.0, 2.0);
const LIGHT_COLOR: Vec3 = Vec3::ONE;
const LIGHT_INTENSITY: f32 = 1.0;

const AMBIENT_COLOR: Vec3 = Vec3::new(0.5, 0.5, 0.5);
const AMBIENT_INTENSITY: f32 = 0.5;

const DEFAULT_CANVAS_WIDTH: u32 = 1024;
const DEFAULT_CANVAS_HEIGHT: u32 = 768;

/// Timestep used for the very first frame, before any elapsed-time sample
/// exists.
const NOMINAL_FRAME_DT: f32 = 1.0 / 60.0;

/// Upper bound on a single frame step. A suspended tab or halted render
/// loop resumes with one long wall-clock gap; the animation must not jump
/// by that much.
const MAX_FRAME_DT: f32 = 0.25;

/// The avatar scene lifecycle controller.
///
/// Owns the engine handles and the animation state sub-machine. Constructed
/// over an [`EngineBackend`] which supplies the concrete collaborators.
pub struct AvatarScene {
    backend: Box<dyn EngineBackend>,

    device: Option<Box<dyn GraphicsDevice>>,
    scene: Option<Box<dyn SceneGraph>>,
    loader: Option<Box<dyn ModelLoader>>,
    animator: Option<Box<dyn Animator>>,
    registry: Option<Box<dyn Registry>>,

    avatar_entity: Option<EntityId>,
    light_entity: Option<EntityId>,

    camera_position: Vec3,
    camera_target: Vec3,
    camera_fov: f32,

    animation_state: AnimationState,

    canvas_width: u32,
    canvas_height: u32,

    last_frame: Option<Instant>,
}

impl AvatarScene {
    /// Creates a controller with default camera and canvas settings. No
    /// engine resources are allocated until [`initialize`](Self::initialize).
    #[must_use]
    pub fn new(backend: Box<dyn EngineBackend>) -> Self {
        Self {
            backend,
            device: None,
            scene: None,
            loader: None,
            animator: None,
            registry: None,
            avatar_entity: None,
            light_entity: None,
            camera_position: CAMERA_POSITION,
            camera_target: CAMERA_TARGET,
            camera_fov: CAMERA_FOV_DEGREES,
            animation_state: AnimationState::default(),
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            last_frame: None,
        }
    }

    /// Creates the engine handles and assembles the scene: directional
    /// light, ambient light, camera, idle animation.
    ///
    /// Re-initializing an already initialized controller releases the
    /// previous handles first. On any failure the controller is left with
    /// all handles absent; already created collaborators are released in
    /// reverse acquisition order.
    pub fn initialize(&mut self) -> Result<()> {
        log::info!("Initializing avatar scene");
        self.shutdown();

        // Locals drop in reverse declaration order on an early return,
        // which is exactly the release order the handles require.
        let device = self.backend.create_device()?;
        let mut scene = self.backend.create_scene(device.as_ref())?;
        let loader = self.backend.create_model_loader()?;
        let animator = self.backend.create_animator()?;
        let mut registry = self.backend.create_registry()?;

        let light = registry.create_entity();
        registry.set_transform(light, Transform::from_position(LIGHT_POSITION));
        registry.set_directional_light(
            light,
            DirectionalLight {
                color: LIGHT_COLOR,
                intensity: LIGHT_INTENSITY,
            },
        );

        scene.set_ambient_light(AMBIENT_COLOR, AMBIENT_INTENSITY);
        scene.set_camera(self.camera_spec());

        self.device = Some(device);
        self.scene = Some(scene);
        self.loader = Some(loader);
        self.animator = Some(animator);
        self.registry = Some(registry);
        self.light_entity = Some(light);

        self.enter_state(AnimationState::Idle);

        log::info!("Avatar scene initialized");
        Ok(())
    }

    /// Parses a model buffer and installs it as the avatar entity.
    ///
    /// Requires the loader and registry handles. A previously loaded avatar
    /// is retired first: destroyed in the registry and removed from the
    /// scene graph.
    pub fn load_model(&mut self, bytes: &[u8]) -> Result<()> {
        log::info!("Loading avatar model ({} bytes)", bytes.len());

        if self.registry.is_none() {
            return Err(AvatarError::NotInitialized("entity registry"));
        }
        let loader = self
            .loader
            .as_mut()
            .ok_or(AvatarError::NotInitialized("model loader"))?;

        let model = loader.load_from_memory(bytes)?;

        if let Some(previous) = self.avatar_entity.take() {
            if let Some(scene) = self.scene.as_mut() {
                scene.remove_entity(previous);
            }
            if let Some(registry) = self.registry.as_mut() {
                registry.destroy_entity(previous);
            }
        }

        let transform = Transform::default();
        let entity = {
            let registry = self
                .registry
                .as_mut()
                .ok_or(AvatarError::NotInitialized("entity registry"))?;
            let entity = registry.create_entity();
            registry.set_transform(entity, transform);
            registry.set_render_mesh(entity, model.clone());
            entity
        };

        if let (Some(animator), Some(skeleton)) = (self.animator.as_mut(), model.skeleton.as_ref())
        {
            animator.bind_skeleton(skeleton);
        }

        if let Some(scene) = self.scene.as_mut() {
            scene.add_entity(entity, transform);
        }

        self.avatar_entity = Some(entity);
        log::info!("Avatar model loaded");
        Ok(())
    }

    /// Transitions the animation state machine.
    ///
    /// Unknown names are rejected and leave the current state unchanged.
    /// Known names update the stored state and, when the animator exists,
    /// re-issue the playback profile; a self-transition restarts the clip.
    pub fn set_animation_state(&mut self, name: &str) -> Result<()> {
        let state: AnimationState = name.parse()?;
        self.enter_state(state);
        Ok(())
    }

    /// Updates canvas dimensions, the device viewport and the camera
    /// projection. A zero dimension makes the call a silent no-op.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.canvas_width = width;
        self.canvas_height = height;

        if let Some(device) = self.device.as_mut() {
            device.set_viewport(0, 0, width, height);
        }

        let spec = self.camera_spec();
        if let Some(scene) = self.scene.as_mut() {
            scene.set_camera(spec);
        }
    }

    /// Advances the scene by the wall-clock time elapsed since the previous
    /// call and performs one render cycle.
    ///
    /// The first call after initialization (or after a shutdown) uses a
    /// nominal 1/60 s step; later steps are clamped so a stalled host loop
    /// cannot produce a runaway jump.
    pub fn update_frame(&mut self) {
        let dt = self.tick();
        self.step(dt);
    }

    /// Advances by an explicit timestep in seconds. Hosts with their own
    /// clock (and tests) call this directly instead of
    /// [`update_frame`](Self::update_frame).
    ///
    /// Each stage is skipped silently when its handle is absent; calling
    /// before initialization does nothing.
    pub fn step(&mut self, dt: f32) {
        if let Some(animator) = self.animator.as_mut() {
            animator.advance(dt);
        }

        if let Some(scene) = self.scene.as_mut() {
            scene.update(dt);
        }

        if let (Some(device), Some(scene)) = (self.device.as_mut(), self.scene.as_mut()) {
            device.begin_frame();
            scene.render(&mut **device);
            device.end_frame();
            device.present();
        }
    }

    /// Releases every handle in reverse acquisition order: registry,
    /// animator, loader, scene graph, device. Safe to call repeatedly;
    /// releasing an absent handle does nothing.
    pub fn shutdown(&mut self) {
        drop(self.registry.take());
        drop(self.animator.take());
        drop(self.loader.take());
        drop(self.scene.take());
        drop(self.device.take());

        self.avatar_entity = None;
        self.light_entity = None;
        self.last_frame = None;
    }

    /// The current animation state. Never fails; defined before
    /// initialization and after shutdown.
    #[must_use]
    pub fn animation_state(&self) -> AnimationState {
        self.animation_state
    }

    /// Measured frames per second, `0.0` while no device exists.
    #[must_use]
    pub fn frame_rate(&self) -> f32 {
        self.device.as_ref().map_or(0.0, |device| device.frame_rate())
    }

    /// Stored canvas dimensions as `(width, height)`.
    #[must_use]
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.canvas_width, self.canvas_height)
    }

    /// The currently installed avatar entity, if a model has been loaded.
    #[must_use]
    pub fn avatar_entity(&self) -> Option<EntityId> {
        self.avatar_entity
    }

    /// Whether all five engine handles are present.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.device.is_some()
            && self.scene.is_some()
            && self.loader.is_some()
            && self.animator.is_some()
            && self.registry.is_some()
    }

    fn enter_state(&mut self, state: AnimationState) {
        self.animation_state = state;

        // The stored state may run ahead of the animator while the scene is
        // uninitialized; initialize() re-applies Idle once the animator
        // exists.
        if let Some(animator) = self.animator.as_mut() {
            let playback = state.playback();
            animator.set_speed(playback.speed);
            animator.play(playback.clip, playback.looped);
        }

        log::info!("Animation state changed to: {state}");
    }

    fn camera_spec(&self) -> CameraSpec {
        CameraSpec {
            position: self.camera_position,
            target: self.camera_target,
            up: Vec3::Y,
            fov_y_degrees: self.camera_fov,
            aspect: self.canvas_width as f32 / self.canvas_height as f32,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }

    fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = match self.last_frame {
            Some(previous) => (now - previous).as_secs_f32().min(MAX_FRAME_DT),
            None => NOMINAL_FRAME_DT,
        };
        self.last_frame = Some(now);
        dt
    }
}
