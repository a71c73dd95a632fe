//! Straight-line motion model.
//!
//! Every moving object keeps the velocity it was created with and advances
//! by exactly one velocity step per tick. There is no acceleration.

use crate::types::{Position, Velocity};

/// Advance a position by one tick.
pub fn step(position: &mut Position, velocity: &Velocity) {
    *position = position.advanced(velocity);
}

/// Whether an object at `position` counts as having reached `target`.
///
/// Strictly less than: an object exactly `threshold` away has not arrived.
pub fn arrived(position: &Position, target: &Position, threshold: f64) -> bool {
    position.range_to(target) < threshold
}
