//! Host Boundary
//!
//! wasm-bindgen surface exported to the browser host. The host constructs
//! one `AvatarScene` object and drives it from its render loop; method
//! names match what the host binds to (`initScene`, `updateFrame`, ...).
//!
//! This is the single catch-log-suppress point: controller errors are
//! logged to the browser console and the call returns normally, because the
//! host has no way to recover from a failure crossing this boundary. Reads
//! never fail.

use wasm_bindgen::prelude::*;

use crate::controller::AvatarScene;
use crate::engine::headless::HeadlessEngine;
use crate::errors::Result;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// The scene controller as seen from JavaScript.
#[wasm_bindgen(js_name = "AvatarScene")]
pub struct AvatarSceneHandle {
    inner: AvatarScene,
}

#[wasm_bindgen(js_class = "AvatarScene")]
impl AvatarSceneHandle {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: AvatarScene::new(Box::new(HeadlessEngine::new())),
        }
    }

    #[wasm_bindgen(js_name = "initScene")]
    pub fn init_scene(&mut self) {
        report("initScene", self.inner.initialize());
    }

    #[wasm_bindgen(js_name = "loadAvatarModel")]
    pub fn load_avatar_model(&mut self, buffer: &[u8]) {
        report("loadAvatarModel", self.inner.load_model(buffer));
    }

    #[wasm_bindgen(js_name = "setAnimationState")]
    pub fn set_animation_state(&mut self, name: &str) {
        report("setAnimationState", self.inner.set_animation_state(name));
    }

    #[wasm_bindgen(js_name = "updateFrame")]
    pub fn update_frame(&mut self) {
        self.inner.update_frame();
    }

    #[wasm_bindgen(js_name = "setCanvasSize")]
    pub fn set_canvas_size(&mut self, width: u32, height: u32) {
        self.inner.resize(width, height);
    }

    #[wasm_bindgen(js_name = "getAnimationState")]
    #[must_use]
    pub fn get_animation_state(&self) -> String {
        self.inner.animation_state().as_str().to_owned()
    }

    #[wasm_bindgen(js_name = "getFrameRate")]
    #[must_use]
    pub fn get_frame_rate(&self) -> f32 {
        self.inner.frame_rate()
    }

    pub fn cleanup(&mut self) {
        self.inner.shutdown();
    }
}

impl Default for AvatarSceneHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a controller outcome into a non-signaling return, logging the
/// error exactly once under the entry point's name.
fn report(entry_point: &str, result: Result<()>) {
    if let Err(err) = result {
        log::error!("{entry_point}: {err}");
    }
}
