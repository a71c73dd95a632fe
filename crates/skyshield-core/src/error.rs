//! Error type shared by the simulation crates.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    /// Start and target coincide, so no direction of travel exists.
    #[error("degenerate trajectory: start and target coincide at ({x}, {y})")]
    DegenerateTrajectory { x: f64, y: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Every spawn attempt produced a degenerate trajectory.
    #[error("no valid spawn point after {attempts} attempts")]
    SpawnExhausted { attempts: u32 },
}
