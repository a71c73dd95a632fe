//! Snapshot system: queries the ECS world and builds a GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use skyshield_core::components::*;
use skyshield_core::detector::{Detector, RadarSweep};
use skyshield_core::enums::GamePhase;
use skyshield_core::events::AudioEvent;
use skyshield_core::state::*;
use skyshield_core::types::{Position, SimTime, Velocity};

use crate::score::ScoreState;

/// Per-tick inputs that live outside the world.
pub struct FrameContext<'a> {
    pub time: SimTime,
    pub phase: GamePhase,
    pub radar: &'a Detector,
    pub sweep: &'a RadarSweep,
    pub score: &'a ScoreState,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    ctx: &FrameContext<'_>,
    audio_events: Vec<AudioEvent>,
    explosions: Vec<Position>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: ctx.time,
        phase: ctx.phase,
        threats: build_threats(world),
        interceptors: build_interceptors(world),
        explosions,
        radar: RadarView {
            position: ctx.radar.position,
            detection_range: ctx.radar.radius,
            sweep_angle: ctx.sweep.angle,
        },
        audio_events,
        score: ctx.score.to_view(),
    }
}

/// Threat views, ordered by id.
fn build_threats(world: &World) -> Vec<ThreatView> {
    let mut threats: Vec<ThreatView> = world
        .query::<(&Threat, &Position, &Velocity, &ThreatProfile, &Appearance)>()
        .iter()
        .map(|(_, (_, pos, vel, profile, look))| ThreatView {
            id: profile.id,
            kind: profile.kind,
            position: *pos,
            heading: vel.heading().angle,
            color: look.color,
            size: look.size,
            engaged: profile.assigned_interceptor.is_some(),
        })
        .collect();
    threats.sort_by_key(|t| t.id);
    threats
}

/// Interceptor views, ordered by id.
fn build_interceptors(world: &World) -> Vec<InterceptorView> {
    let mut interceptors: Vec<InterceptorView> = world
        .query::<(&Interceptor, &Position, &InterceptorState)>()
        .iter()
        .map(|(_, (_, pos, state))| InterceptorView {
            id: state.id,
            target_threat: state.target_threat,
            position: *pos,
        })
        .collect();
    interceptors.sort_by_key(|i| i.id);
    interceptors
}
