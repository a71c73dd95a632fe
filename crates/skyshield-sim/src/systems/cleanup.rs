//! Cleanup systems: arrivals and out-of-bounds removal.

use hecs::{Entity, World};
use tracing::debug;

use skyshield_core::components::{Interceptor, InterceptorState, Threat, ThreatProfile};
use skyshield_core::config::BatteryConfig;
use skyshield_core::motion;
use skyshield_core::types::Position;

use crate::score::ScoreState;

/// Remove threats that reached their target point. Returns the number removed.
pub fn remove_arrived_threats(
    world: &mut World,
    threshold: f64,
    score: &mut ScoreState,
    despawn_buffer: &mut Vec<Entity>,
) -> u32 {
    despawn_buffer.clear();

    for (entity, (_threat, pos, profile)) in
        world.query_mut::<(&Threat, &Position, &ThreatProfile)>()
    {
        if motion::arrived(pos, &profile.target, threshold) {
            debug!(threat_id = profile.id, "threat reached target");
            despawn_buffer.push(entity);
        }
    }

    let arrived = despawn_buffer.len() as u32;
    score.impacts += arrived;
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    arrived
}

/// Remove interceptors that reached their aim point and anything that left
/// the world rectangle plus its margin.
pub fn run(world: &mut World, config: &BatteryConfig, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_interceptor, pos, state)) in
        world.query_mut::<(&Interceptor, &Position, &InterceptorState)>()
    {
        if motion::arrived(pos, &state.aim_point, config.arrival_threshold)
            || !in_bounds(pos, config)
        {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (_threat, pos)) in world.query_mut::<(&Threat, &Position)>() {
        if !in_bounds(pos, config) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

fn in_bounds(pos: &Position, config: &BatteryConfig) -> bool {
    let m = config.oob_margin;
    pos.x >= -m
        && pos.x <= config.world_width + m
        && pos.y >= -m
        && pos.y <= config.world_height + m
}
