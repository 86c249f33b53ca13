#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod controller;
pub mod engine;
pub mod errors;
#[cfg(target_arch = "wasm32")]
pub mod ffi;

pub use animation::{AnimationState, Playback};
pub use controller::AvatarScene;
pub use engine::headless::HeadlessEngine;
pub use errors::{AvatarError, Result};
