//! Intercept resolution system: checks every interceptor against every threat.

use hecs::World;
use tracing::info;

use skyshield_core::components::{Interceptor, Threat, ThreatProfile};
use skyshield_core::events::AudioEvent;
use skyshield_core::types::Position;

use crate::score::ScoreState;

/// Resolve collisions after interceptors have moved this tick.
///
/// Hits are collected first and applied afterwards. A threat reached by
/// several interceptors in the same tick is removed and scored once; every
/// interceptor that reached any threat is removed. Returns the number of
/// threats destroyed.
pub fn run(
    world: &mut World,
    threshold: f64,
    score: &mut ScoreState,
    audio_events: &mut Vec<AudioEvent>,
    explosions: &mut Vec<Position>,
    despawn_buffer: &mut Vec<hecs::Entity>,
) -> u32 {
    despawn_buffer.clear();

    let threats: Vec<(hecs::Entity, u32, Position)> = world
        .query::<(&Threat, &Position, &ThreatProfile)>()
        .iter()
        .map(|(entity, (_, pos, profile))| (entity, profile.id, *pos))
        .collect();
    let interceptors: Vec<(hecs::Entity, Position)> = world
        .query::<(&Interceptor, &Position)>()
        .iter()
        .map(|(entity, (_, pos))| (entity, *pos))
        .collect();

    let mut hits: Vec<(hecs::Entity, u32, Position)> = Vec::new();
    for &(interceptor_entity, interceptor_pos) in &interceptors {
        let mut collided = false;
        for &(threat_entity, threat_id, threat_pos) in &threats {
            if interceptor_pos.range_to(&threat_pos) < threshold {
                hits.push((threat_entity, threat_id, threat_pos));
                collided = true;
            }
        }
        if collided {
            despawn_buffer.push(interceptor_entity);
        }
    }

    // Deduplicate by threat id, not by position.
    hits.sort_by_key(|&(_, threat_id, _)| threat_id);
    hits.dedup_by_key(|hit| hit.1);

    let destroyed = hits.len() as u32;
    for (threat_entity, threat_id, position) in hits {
        score.interceptions += 1;
        explosions.push(position);
        audio_events.push(AudioEvent::Explosion {
            threat_id,
            position,
        });
        info!(
            threat_id,
            x = position.x,
            y = position.y,
            total = score.interceptions,
            "threat intercepted"
        );
        despawn_buffer.push(threat_entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    destroyed
}
