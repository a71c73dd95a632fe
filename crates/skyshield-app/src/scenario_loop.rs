//! Scripted scenario loop: one snapshot line per frame at a fixed interval.

use std::io::{self, Write};

use tracing::info;

use skyshield_sim::ScenarioEngine;

use crate::error::AppError;

/// Outcome of a scripted run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioSummary {
    pub frames: u32,
    pub interceptions: u32,
}

/// Run every frame of the scenario, writing snapshots to `out`.
pub fn run_scenario<W: Write>(
    engine: &mut ScenarioEngine,
    out: &mut W,
    no_throttle: bool,
) -> Result<ScenarioSummary, AppError> {
    let interval = engine.frame_interval();
    let mut frames = 0;
    let mut last_title = None;

    while let Some(snapshot) = engine.tick() {
        frames += 1;

        let title = snapshot.title();
        if last_title.as_ref() != Some(&title) {
            info!(frame = snapshot.frame, "{title}");
            last_title = Some(title);
        }

        serde_json::to_writer(&mut *out, &snapshot).map_err(io::Error::from)?;
        writeln!(out)?;

        if !no_throttle && !engine.is_finished() {
            std::thread::sleep(interval);
        }
    }
    out.flush()?;

    let interceptions = engine.state().interception_count;
    info!(frames, interceptions, "scenario complete");
    Ok(ScenarioSummary {
        frames,
        interceptions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyshield_core::config::ScenarioConfig;
    use skyshield_core::enums::MarkerState;
    use skyshield_core::state::{Headline, ScenarioSnapshot};

    #[test]
    fn test_full_run_emits_every_frame() {
        let mut engine = ScenarioEngine::new(ScenarioConfig {
            seed: 3,
            ..Default::default()
        })
        .unwrap();
        let mut out = Vec::new();
        let summary = run_scenario(&mut engine, &mut out, true).unwrap();

        assert_eq!(summary.frames, 150);
        assert_eq!(summary.interceptions, 1);

        let text = String::from_utf8(out).unwrap();
        let snaps: Vec<ScenarioSnapshot> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(snaps.len(), 150);
        assert_eq!(snaps[0].headline, Headline::Tracking);
        let last = snaps.last().unwrap();
        assert_eq!(last.marker, MarkerState::Neutralized);
        assert_eq!(last.headline, Headline::Neutralized { total: 1 });
    }

    #[test]
    fn test_short_budget() {
        let mut engine = ScenarioEngine::new(ScenarioConfig {
            frame_budget: 5,
            ..Default::default()
        })
        .unwrap();
        let mut out = Vec::new();
        let summary = run_scenario(&mut engine, &mut out, true).unwrap();
        assert_eq!(summary.frames, 5);
        assert_eq!(summary.interceptions, 0);
    }
}
