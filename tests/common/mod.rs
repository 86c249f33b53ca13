//! Shared test doubles: a recording engine backend whose collaborators
//! append every call (and their own release) to a shared log, plus helpers
//! for building model buffers.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use glam::Vec3;
use slotmap::SlotMap;

use avatar_scene::engine::{
    Animator, CameraSpec, DirectionalLight, EngineBackend, EntityId, GraphicsDevice, Model,
    ModelLoader, Registry, SceneGraph, Skeleton, Transform,
};
use avatar_scene::errors::{AvatarError, Result};

/// One observed call on a mock collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateDevice,
    CreateScene,
    CreateLoader,
    CreateAnimator,
    CreateRegistry,

    SetViewport(u32, u32, u32, u32),
    BeginFrame,
    EndFrame,
    Present,

    SetAmbient(Vec3, f32),
    SetCamera(CameraSpec),
    SceneUpdate(f32),
    Render,
    AddEntity(EntityId),
    RemoveEntity(EntityId),

    Parse(usize),

    SetSpeed(f32),
    Play(String, bool),
    BindSkeleton(usize),
    Advance(f32),

    CreateEntity(EntityId),
    DestroyEntity(EntityId),
    SetTransform(EntityId, Transform),
    SetLight(EntityId, DirectionalLight),
    SetRenderMesh(EntityId),

    DropDevice,
    DropScene,
    DropLoader,
    DropAnimator,
    DropRegistry,
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

/// Which factory step of the mock backend should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailPoint {
    Device,
    Scene,
    Loader,
    Animator,
    Registry,
}

pub struct MockBackend {
    pub log: CallLog,
    pub fail: Option<FailPoint>,
    /// When false the mock loader rejects every buffer.
    pub parse_ok: bool,
    /// Whether parsed models carry a skeleton.
    pub with_skeleton: bool,
    /// Frame rate reported by created devices.
    pub frame_rate: f32,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
            fail: None,
            parse_ok: true,
            with_skeleton: true,
            frame_rate: 60.0,
        }
    }

    pub fn log(&self) -> CallLog {
        Rc::clone(&self.log)
    }
}

impl EngineBackend for MockBackend {
    fn create_device(&self) -> Result<Box<dyn GraphicsDevice>> {
        if self.fail == Some(FailPoint::Device) {
            return Err(AvatarError::DeviceCreation(
                "mock device unavailable".to_string(),
            ));
        }
        self.log.borrow_mut().push(Call::CreateDevice);
        Ok(Box::new(MockDevice {
            log: self.log(),
            frame_rate: self.frame_rate,
        }))
    }

    fn create_scene(&self, _device: &dyn GraphicsDevice) -> Result<Box<dyn SceneGraph>> {
        if self.fail == Some(FailPoint::Scene) {
            return Err(AvatarError::Backend("mock scene failure".to_string()));
        }
        self.log.borrow_mut().push(Call::CreateScene);
        Ok(Box::new(MockScene { log: self.log() }))
    }

    fn create_model_loader(&self) -> Result<Box<dyn ModelLoader>> {
        if self.fail == Some(FailPoint::Loader) {
            return Err(AvatarError::Backend("mock loader failure".to_string()));
        }
        self.log.borrow_mut().push(Call::CreateLoader);
        Ok(Box::new(MockLoader {
            log: self.log(),
            parse_ok: self.parse_ok,
            with_skeleton: self.with_skeleton,
        }))
    }

    fn create_animator(&self) -> Result<Box<dyn Animator>> {
        if self.fail == Some(FailPoint::Animator) {
            return Err(AvatarError::Backend("mock animator failure".to_string()));
        }
        self.log.borrow_mut().push(Call::CreateAnimator);
        Ok(Box::new(MockAnimator { log: self.log() }))
    }

    fn create_registry(&self) -> Result<Box<dyn Registry>> {
        if self.fail == Some(FailPoint::Registry) {
            return Err(AvatarError::Backend("mock registry failure".to_string()));
        }
        self.log.borrow_mut().push(Call::CreateRegistry);
        Ok(Box::new(MockRegistry {
            log: self.log(),
            entities: SlotMap::with_key(),
        }))
    }
}

struct MockDevice {
    log: CallLog,
    frame_rate: f32,
}

impl GraphicsDevice for MockDevice {
    fn set_viewport(&mut self, x: u32, y: u32, width: u32, height: u32) {
        self.log
            .borrow_mut()
            .push(Call::SetViewport(x, y, width, height));
    }

    fn begin_frame(&mut self) {
        self.log.borrow_mut().push(Call::BeginFrame);
    }

    fn end_frame(&mut self) {
        self.log.borrow_mut().push(Call::EndFrame);
    }

    fn present(&mut self) {
        self.log.borrow_mut().push(Call::Present);
    }

    fn frame_rate(&self) -> f32 {
        self.frame_rate
    }
}

impl Drop for MockDevice {
    fn drop(&mut self) {
        self.log.borrow_mut().push(Call::DropDevice);
    }
}

struct MockScene {
    log: CallLog,
}

impl SceneGraph for MockScene {
    fn set_ambient_light(&mut self, color: Vec3, intensity: f32) {
        self.log.borrow_mut().push(Call::SetAmbient(color, intensity));
    }

    fn set_camera(&mut self, camera: CameraSpec) {
        self.log.borrow_mut().push(Call::SetCamera(camera));
    }

    fn update(&mut self, dt: f32) {
        self.log.borrow_mut().push(Call::SceneUpdate(dt));
    }

    fn render(&mut self, _device: &mut dyn GraphicsDevice) {
        self.log.borrow_mut().push(Call::Render);
    }

    fn add_entity(&mut self, entity: EntityId, _transform: Transform) {
        self.log.borrow_mut().push(Call::AddEntity(entity));
    }

    fn remove_entity(&mut self, entity: EntityId) {
        self.log.borrow_mut().push(Call::RemoveEntity(entity));
    }
}

impl Drop for MockScene {
    fn drop(&mut self) {
        self.log.borrow_mut().push(Call::DropScene);
    }
}

struct MockLoader {
    log: CallLog,
    parse_ok: bool,
    with_skeleton: bool,
}

impl ModelLoader for MockLoader {
    fn load_from_memory(&mut self, bytes: &[u8]) -> Result<Arc<Model>> {
        self.log.borrow_mut().push(Call::Parse(bytes.len()));
        if !self.parse_ok {
            return Err(AvatarError::ModelParse("mock parse failure".to_string()));
        }
        Ok(Arc::new(Model {
            name: Some("MockAvatar".to_string()),
            mesh_count: 1,
            clip_names: vec![
                "Armature|ArmatureAction".to_string(),
                "HeadTilt".to_string(),
                "Talking".to_string(),
            ],
            skeleton: self
                .with_skeleton
                .then_some(Skeleton { joint_count: 4 }),
        }))
    }
}

impl Drop for MockLoader {
    fn drop(&mut self) {
        self.log.borrow_mut().push(Call::DropLoader);
    }
}

struct MockAnimator {
    log: CallLog,
}

impl Animator for MockAnimator {
    fn set_speed(&mut self, speed: f32) {
        self.log.borrow_mut().push(Call::SetSpeed(speed));
    }

    fn play(&mut self, clip: &str, looped: bool) {
        self.log
            .borrow_mut()
            .push(Call::Play(clip.to_owned(), looped));
    }

    fn bind_skeleton(&mut self, skeleton: &Skeleton) {
        self.log
            .borrow_mut()
            .push(Call::BindSkeleton(skeleton.joint_count));
    }

    fn advance(&mut self, dt: f32) {
        self.log.borrow_mut().push(Call::Advance(dt));
    }
}

impl Drop for MockAnimator {
    fn drop(&mut self) {
        self.log.borrow_mut().push(Call::DropAnimator);
    }
}

struct MockRegistry {
    log: CallLog,
    entities: SlotMap<EntityId, ()>,
}

impl Registry for MockRegistry {
    fn create_entity(&mut self) -> EntityId {
        let entity = self.entities.insert(());
        self.log.borrow_mut().push(Call::CreateEntity(entity));
        entity
    }

    fn destroy_entity(&mut self, entity: EntityId) {
        self.entities.remove(entity);
        self.log.borrow_mut().push(Call::DestroyEntity(entity));
    }

    fn set_transform(&mut self, entity: EntityId, transform: Transform) {
        self.log
            .borrow_mut()
            .push(Call::SetTransform(entity, transform));
    }

    fn transform(&self, _entity: EntityId) -> Option<Transform> {
        None
    }

    fn set_directional_light(&mut self, entity: EntityId, light: DirectionalLight) {
        self.log.borrow_mut().push(Call::SetLight(entity, light));
    }

    fn set_render_mesh(&mut self, entity: EntityId, _model: Arc<Model>) {
        self.log.borrow_mut().push(Call::SetRenderMesh(entity));
    }
}

impl Drop for MockRegistry {
    fn drop(&mut self) {
        self.log.borrow_mut().push(Call::DropRegistry);
    }
}

/// Wraps a JSON glTF document in a GLB container (JSON chunk only).
pub fn glb_from_json(json: &str) -> Vec<u8> {
    let mut json_bytes = json.as_bytes().to_vec();
    while json_bytes.len() % 4 != 0 {
        json_bytes.push(b' ');
    }

    let total_len = (12 + 8 + json_bytes.len()) as u32;
    let mut glb = Vec::with_capacity(total_len as usize);
    glb.extend_from_slice(&0x4654_6C67_u32.to_le_bytes()); // "glTF"
    glb.extend_from_slice(&2_u32.to_le_bytes());
    glb.extend_from_slice(&total_len.to_le_bytes());
    glb.extend_from_slice(&(json_bytes.len() as u32).to_le_bytes());
    glb.extend_from_slice(&0x4E4F_534A_u32.to_le_bytes()); // "JSON"
    glb.extend_from_slice(&json_bytes);
    glb
}

/// Minimal valid glTF document with one mesh.
pub const MINIMAL_AVATAR_GLTF: &str = r#"{
    "asset": {"version": "2.0"},
    "buffers": [{"byteLength": 36}],
    "bufferViews": [{"buffer": 0, "byteLength": 36}],
    "accessors": [
        {"bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3", "min": [0, 0, 0], "max": [1, 1, 0]}
    ],
    "meshes": [{"name": "Avatar", "primitives": [{"attributes": {"POSITION": 0}}]}],
    "nodes": [{"mesh": 0}],
    "scenes": [{"name": "AvatarScene", "nodes": [0]}],
    "scene": 0
}"#;

pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}
