//! Events emitted by the simulation for audio and visual feedback.

use serde::{Deserialize, Serialize};

use crate::enums::ThreatKind;
use crate::types::Position;

/// Sound assets the renderer plays in response to events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioCue {
    MissileLaunch,
    Explosion,
}

impl AudioCue {
    pub const ALL: [AudioCue; 2] = [AudioCue::MissileLaunch, AudioCue::Explosion];

    /// File name of the sound asset for this cue.
    pub fn file_name(&self) -> &'static str {
        match self {
            AudioCue::MissileLaunch => "missile_launch.mp3",
            AudioCue::Explosion => "explosion.mp3",
        }
    }
}

/// Audio events for the frontend sound system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A threat entered the world.
    ThreatLaunched { threat_id: u32, kind: ThreatKind },
    /// The radar launched an interceptor.
    InterceptorAway { interceptor_id: u32, threat_id: u32 },
    /// A threat was destroyed.
    Explosion { threat_id: u32, position: Position },
}

impl AudioEvent {
    pub fn cue(&self) -> AudioCue {
        match self {
            AudioEvent::ThreatLaunched { .. } | AudioEvent::InterceptorAway { .. } => {
                AudioCue::MissileLaunch
            }
            AudioEvent::Explosion { .. } => AudioCue::Explosion,
        }
    }
}
