//! Detect & launch system.
//!
//! Every threat inside the radar's detection radius that has no interceptor
//! yet gets exactly one, aimed at the threat's position at this instant.
//! The assignment is recorded on the threat by interceptor id, so a threat
//! that keeps moving inside the radius is never engaged twice.

use hecs::World;
use tracing::{debug, warn};

use skyshield_core::components::{Threat, ThreatProfile};
use skyshield_core::detector::Detector;
use skyshield_core::events::AudioEvent;
use skyshield_core::types::Position;

use crate::score::ScoreState;
use crate::world_setup;

/// Run detection and launch interceptors. Returns the number launched.
pub fn run(
    world: &mut World,
    radar: &Detector,
    interceptor_speed: f64,
    next_interceptor_id: &mut u32,
    audio_events: &mut Vec<AudioEvent>,
    score: &mut ScoreState,
) -> u32 {
    // Pass 1: collect unassigned threats inside the radius.
    let mut pending: Vec<(hecs::Entity, u32, Position)> = Vec::new();
    {
        let mut query = world.query::<(&Threat, &Position, &ThreatProfile)>();
        for (entity, (_threat, pos, profile)) in query.iter() {
            if profile.assigned_interceptor.is_none() && radar.detects(pos) {
                pending.push((entity, profile.id, *pos));
            }
        }
    }
    pending.sort_by_key(|&(_, threat_id, _)| threat_id);

    // Pass 2: launch and record assignments.
    let mut launched = 0;
    for (threat_entity, threat_id, aim_point) in pending {
        let interceptor_id = *next_interceptor_id;
        if let Err(err) = world_setup::spawn_interceptor(
            world,
            interceptor_id,
            threat_id,
            radar.position,
            aim_point,
            interceptor_speed,
        ) {
            // Threat sits exactly on the radar; retried next tick.
            warn!(threat_id, %err, "interceptor launch skipped");
            continue;
        }
        *next_interceptor_id += 1;

        if let Ok(mut profile) = world.get::<&mut ThreatProfile>(threat_entity) {
            profile.assigned_interceptor = Some(interceptor_id);
        }

        score.interceptors_fired += 1;
        audio_events.push(AudioEvent::InterceptorAway {
            interceptor_id,
            threat_id,
        });
        debug!(
            interceptor_id,
            threat_id,
            aim_x = aim_point.x,
            aim_y = aim_point.y,
            "interceptor launched"
        );
        launched += 1;
    }
    launched
}
