//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity.
//! Threats and interceptors move at different points of the tick, so each
//! call only moves entities carrying the marker `M`.

use hecs::{Component, World};

use skyshield_core::motion;
use skyshield_core::types::{Position, Velocity};

/// Advance every entity with Position + Velocity + `M` by one tick.
pub fn run<M: Component>(world: &mut World) {
    for (_entity, (pos, vel, _marker)) in world.query_mut::<(&mut Position, &Velocity, &M)>() {
        motion::step(pos, vel);
    }
}
