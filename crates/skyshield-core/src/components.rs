//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::ThreatKind;
use crate::types::Position;

/// Marks an entity as an incoming threat.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Threat;

/// Marks an entity as a friendly interceptor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Interceptor;

/// Threat identity, destination and engagement status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatProfile {
    /// Stable id, never reused within a run.
    pub id: u32,
    pub kind: ThreatKind,
    /// Point this threat is flying toward.
    pub target: Position,
    /// Interceptor launched against this threat. Set at most once.
    pub assigned_interceptor: Option<u32>,
}

/// Interceptor identity and its single-shot aim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterceptorState {
    /// Stable id, never reused within a run.
    pub id: u32,
    /// Threat this interceptor was launched against.
    pub target_threat: u32,
    /// Threat position at launch time. Never updated.
    pub aim_point: Position,
}

/// Render attributes carried by a threat.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Appearance {
    pub color: [u8; 3],
    /// Marker radius in screen units.
    pub size: f64,
}
