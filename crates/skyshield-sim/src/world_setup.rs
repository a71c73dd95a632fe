//! Entity spawn factories for the battery world.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyshield_core::components::*;
use skyshield_core::config::{BatteryConfig, ThreatKindParams};
use skyshield_core::enums::ThreatKind;
use skyshield_core::error::SimError;
use skyshield_core::types::{Heading, Position, Velocity};

/// Spawn a threat of `kind` at a random point on the spawn edge, aimed at the radar.
pub fn spawn_threat(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &BatteryConfig,
    id: u32,
    kind: ThreatKind,
) -> Result<hecs::Entity, SimError> {
    let params = config.kind_params(kind);
    let x = rng.gen_range(0..=config.world_width as i64) as f64;
    let speed = rng.gen_range(params.speed_min..=params.speed_max);
    let start = Position::new(x, config.spawn_y);
    spawn_threat_at(world, id, kind, params, start, config.radar, speed)
}

/// Spawn a threat at an exact position flying toward `target`.
///
/// The heading is fixed here and never recomputed.
pub fn spawn_threat_at(
    world: &mut World,
    id: u32,
    kind: ThreatKind,
    params: &ThreatKindParams,
    start: Position,
    target: Position,
    speed: f64,
) -> Result<hecs::Entity, SimError> {
    let velocity = Heading::toward(&start, &target, speed)?.to_velocity();

    let profile = ThreatProfile {
        id,
        kind,
        target,
        assigned_interceptor: None,
    };
    let appearance = Appearance {
        color: params.color,
        size: params.size,
    };

    Ok(world.spawn((Threat, start, velocity, profile, appearance)))
}

/// Spawn an interceptor at `origin` flying toward `aim_point`.
pub fn spawn_interceptor(
    world: &mut World,
    id: u32,
    target_threat: u32,
    origin: Position,
    aim_point: Position,
    speed: f64,
) -> Result<hecs::Entity, SimError> {
    let velocity = Velocity::toward(&origin, &aim_point, speed)?;
    let state = InterceptorState {
        id,
        target_threat,
        aim_point,
    };
    Ok(world.spawn((Interceptor, origin, velocity, state)))
}
