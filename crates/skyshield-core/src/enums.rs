//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Threat variant selectable from the launch buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreatKind {
    /// Fast, small.
    Swift,
    /// Slow, large.
    Heavy,
}

/// Top-level state of the interactive loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Running,
    /// Stop signal received; no further ticks run.
    Stopped,
}

/// Display state of the scripted projectile marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerState {
    #[default]
    Inbound,
    Neutralized,
}
