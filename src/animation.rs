//! Animation State Machine
//!
//! The avatar plays one of a closed set of states. Each state carries a
//! fixed playback profile (clip name, speed multiplier, loop flag) that the
//! controller dispatches to the animator on every transition, including
//! self-transitions. Unknown state names are rejected without touching the
//! current state.

use std::fmt;
use std::str::FromStr;

use crate::errors::AvatarError;

/// The closed set of avatar animation states.
///
/// All states are mutually reachable; none is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AnimationState {
    /// Subtle breathing cycle, slight swaying.
    #[default]
    Idle,
    /// Head tilt, attention pose.
    Listening,
    /// Talking loop, prepared for lip-sync.
    Speaking,
}

/// Animator configuration issued when a state is entered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playback {
    pub clip: &'static str,
    pub speed: f32,
    pub looped: bool,
}

impl AnimationState {
    /// The host-facing name of this state.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationState::Idle => "idle",
            AnimationState::Listening => "listening",
            AnimationState::Speaking => "speaking",
        }
    }

    /// The playback profile dispatched to the animator for this state.
    #[must_use]
    pub fn playback(self) -> Playback {
        match self {
            AnimationState::Idle => Playback {
                clip: "Armature|ArmatureAction",
                speed: 0.3,
                looped: true,
            },
            AnimationState::Listening => Playback {
                clip: "HeadTilt",
                speed: 0.5,
                looped: false,
            },
            AnimationState::Speaking => Playback {
                clip: "Talking",
                speed: 1.0,
                looped: true,
            },
        }
    }
}

impl FromStr for AnimationState {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle" => Ok(AnimationState::Idle),
            "listening" => Ok(AnimationState::Listening),
            "speaking" => Ok(AnimationState::Speaking),
            other => Err(AvatarError::UnknownAnimationState(other.to_string())),
        }
    }
}

impl fmt::Display for AnimationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
