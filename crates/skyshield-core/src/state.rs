//! Snapshots: the complete visible state handed to a renderer after each tick.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, MarkerState, ThreatKind};
use crate::events::AudioEvent;
use crate::types::{Position, SimTime};

/// Window caption shared by both variants.
pub const TITLE_PREFIX: &str = "Air Defense Simulation";

/// Interactive variant state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub threats: Vec<ThreatView>,
    pub interceptors: Vec<InterceptorView>,
    /// Positions of threats destroyed during this tick.
    pub explosions: Vec<Position>,
    pub radar: RadarView,
    pub audio_events: Vec<AudioEvent>,
    pub score: ScoreView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatView {
    pub id: u32,
    pub kind: ThreatKind,
    pub position: Position,
    /// Direction of travel, `atan2(dy, dx)`.
    pub heading: f64,
    pub color: [u8; 3],
    pub size: f64,
    pub engaged: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterceptorView {
    pub id: u32,
    pub target_threat: u32,
    pub position: Position,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RadarView {
    pub position: Position,
    pub detection_range: f64,
    /// Current sweep angle (radians) for the sweep line.
    pub sweep_angle: f64,
}

/// Running score for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub interceptions: u32,
    pub threats_launched: u32,
    pub interceptors_fired: u32,
    /// Threats that reached their target.
    pub impacts: u32,
}

impl ScoreView {
    /// On-screen counter text.
    pub fn label(&self) -> String {
        format!("Interceptions: {}", self.interceptions)
    }
}

/// Scripted variant state after each frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSnapshot {
    pub frame: u32,
    pub projectile: Position,
    pub marker: MarkerState,
    pub zone: Position,
    pub zone_radius: f64,
    pub interception_count: u32,
    pub headline: Headline,
}

/// Status line shown above the scripted plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Headline {
    Tracking,
    Neutralized { total: u32 },
}

impl fmt::Display for Headline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Headline::Tracking => write!(f, "Tracking Threat"),
            Headline::Neutralized { total } => write!(f, "Target Neutralized! (Total: {total})"),
        }
    }
}

impl ScenarioSnapshot {
    /// Full window title.
    pub fn title(&self) -> String {
        format!("{TITLE_PREFIX} - {}", self.headline)
    }
}
