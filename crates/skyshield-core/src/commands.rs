//! Operator commands fed into the interactive simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::ThreatKind;

/// All possible operator actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Mouse click in screen coordinates; hit-tested against launch buttons.
    Click { x: f64, y: f64 },
    /// Spawn a threat of the given kind directly.
    LaunchThreat { kind: ThreatKind },
    /// Window-close equivalent. Stops the loop.
    Quit,
}
