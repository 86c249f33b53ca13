//! The built-in [`EngineBackend`] assembling the crate's own collaborator
//! implementations. Used by the exported wasm class and by hosts that drive
//! the controller without a GPU renderer attached.

use crate::engine::animator::ClipAnimator;
use crate::engine::device::FrameDevice;
use crate::engine::loader::GlbLoader;
use crate::engine::registry::ComponentRegistry;
use crate::engine::scene::AvatarSceneGraph;
use crate::engine::{Animator, EngineBackend, GraphicsDevice, ModelLoader, Registry, SceneGraph};
use crate::errors::Result;

#[derive(Debug, Default)]
pub struct HeadlessEngine;

impl HeadlessEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EngineBackend for HeadlessEngine {
    fn create_device(&self) -> Result<Box<dyn GraphicsDevice>> {
        Ok(Box::new(FrameDevice::new()))
    }

    fn create_scene(&self, _device: &dyn GraphicsDevice) -> Result<Box<dyn SceneGraph>> {
        Ok(Box::new(AvatarSceneGraph::new()))
    }

    fn create_model_loader(&self) -> Result<Box<dyn ModelLoader>> {
        Ok(Box::new(GlbLoader::new()))
    }

    fn create_animator(&self) -> Result<Box<dyn Animator>> {
        Ok(Box::new(ClipAnimator::new()))
    }

    fn create_registry(&self) -> Result<Box<dyn Registry>> {
        Ok(Box::new(ComponentRegistry::new()))
    }
}
