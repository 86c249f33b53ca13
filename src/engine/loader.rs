//! Built-in model loader over the `gltf` crate.
//!
//! Parses GLB or JSON glTF bytes at the document level: mesh count, clip
//! names and skeleton presence. Vertex/texture payload decoding is the
//! renderer's concern and is not performed here.

use std::sync::Arc;

use crate::engine::{Model, ModelLoader, Skeleton};
use crate::errors::{AvatarError, Result};

/// Loader accepting GLB containers as well as plain JSON glTF.
#[derive(Debug, Default)]
pub struct GlbLoader;

impl GlbLoader {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ModelLoader for GlbLoader {
    fn load_from_memory(&mut self, bytes: &[u8]) -> Result<Arc<Model>> {
        let gltf = gltf::Gltf::from_slice(bytes)?;

        let mesh_count = gltf.meshes().count();
        if mesh_count == 0 {
            return Err(AvatarError::ModelParse(
                "document contains no meshes".to_string(),
            ));
        }

        let clip_names = gltf
            .animations()
            .map(|anim| {
                anim.name()
                    .map_or_else(|| format!("clip_{}", anim.index()), str::to_owned)
            })
            .collect();

        // The avatar rig is the first skin; multi-skin files keep working,
        // the animator just binds to the primary one.
        let skeleton = gltf.skins().next().map(|skin| Skeleton {
            joint_count: skin.joints().count(),
        });

        let name = gltf
            .default_scene()
            .and_then(|scene| scene.name().map(str::to_owned));

        Ok(Arc::new(Model {
            name,
            mesh_count,
            clip_names,
            skeleton,
        }))
    }
}
