//! Error Types
//!
//! This module defines the error types used throughout the controller.
//!
//! # Overview
//!
//! The main error type [`AvatarError`] covers all failure modes including:
//! - Graphics device creation failures
//! - Operations invoked before the scene is initialized
//! - Malformed or unparseable avatar model buffers
//! - Unrecognized animation state names
//!
//! # Usage
//!
//! All fallible operations return [`Result<T>`] which is an alias for
//! `std::result::Result<T, AvatarError>`. Errors never cross the host
//! boundary as values; the FFI adapter logs them and returns normally.

use thiserror::Error;

/// The main error type for the avatar scene controller.
///
/// Each variant provides specific context about what went wrong. The
/// host never observes these directly: the boundary adapter converts
/// them into log entries.
#[derive(Error, Debug)]
pub enum AvatarError {
    /// The rendering backend could not be created.
    #[error("Failed to create graphics device: {0}")]
    DeviceCreation(String),

    /// An operation was invoked before the handles it requires exist.
    #[error("Scene not initialized: {0} is absent")]
    NotInitialized(&'static str),

    /// The model buffer was malformed or yielded no usable model.
    #[error("Failed to parse avatar model: {0}")]
    ModelParse(String),

    /// A requested animation state name is not in the known set.
    #[error("Unknown animation state: {0:?}")]
    UnknownAnimationState(String),

    /// A collaborator factory other than device creation failed.
    #[error("Engine backend error: {0}")]
    Backend(String),
}

impl From<gltf::Error> for AvatarError {
    fn from(err: gltf::Error) -> Self {
        AvatarError::ModelParse(err.to_string())
    }
}

/// Alias for `Result<T, AvatarError>`.
pub type Result<T> = std::result::Result<T, AvatarError>;
