//! Built-in clip animator.
//!
//! A reduced single-action playback clock: one active clip name, a speed
//! multiplier and a playhead advanced by `dt * speed`. Sampling keyframes
//! against the bound skeleton is the engine's business.

use crate::engine::{Animator, Skeleton};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    Once,
    Loop,
}

/// The clip currently scheduled for playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveClip {
    pub name: String,
    pub loop_mode: LoopMode,
}

pub struct ClipAnimator {
    speed: f32,
    playhead: f32,
    active: Option<ActiveClip>,
    bound_joints: Option<usize>,
}

impl Default for ClipAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipAnimator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            speed: 1.0,
            playhead: 0.0,
            active: None,
            bound_joints: None,
        }
    }

    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Playback position of the active clip in clip-local seconds.
    #[must_use]
    pub fn playhead(&self) -> f32 {
        self.playhead
    }

    #[must_use]
    pub fn active_clip(&self) -> Option<&ActiveClip> {
        self.active.as_ref()
    }

    /// Joint count of the bound skeleton, if any.
    #[must_use]
    pub fn bound_joints(&self) -> Option<usize> {
        self.bound_joints
    }
}

impl Animator for ClipAnimator {
    fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    fn play(&mut self, clip: &str, looped: bool) {
        self.playhead = 0.0;
        self.active = Some(ActiveClip {
            name: clip.to_owned(),
            loop_mode: if looped { LoopMode::Loop } else { LoopMode::Once },
        });
    }

    fn bind_skeleton(&mut self, skeleton: &Skeleton) {
        self.bound_joints = Some(skeleton.joint_count);
    }

    fn advance(&mut self, dt: f32) {
        if self.active.is_some() {
            self.playhead += dt * self.speed;
        }
    }
}
