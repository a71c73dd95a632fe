//! Scripted scenario: one projectile against one protected zone.
//!
//! All mutable state lives in `ScenarioState`, which `step_frame` takes by
//! reference and returns updated. `ScenarioEngine` adds the frame budget and
//! snapshot production on top.

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use skyshield_core::config::ScenarioConfig;
use skyshield_core::constants::MAX_SPAWN_ATTEMPTS;
use skyshield_core::detector::{Boundary, Detector};
use skyshield_core::enums::MarkerState;
use skyshield_core::error::SimError;
use skyshield_core::motion;
use skyshield_core::state::{Headline, ScenarioSnapshot};
use skyshield_core::types::{Position, Velocity};

/// The incoming projectile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub position: Position,
    /// Normalized direction scaled to speed; fixed at spawn.
    pub velocity: Velocity,
}

impl Projectile {
    /// Projectile at `start` flying toward `target` at `speed`.
    pub fn aimed(start: Position, target: &Position, speed: f64) -> Result<Self, SimError> {
        Ok(Self {
            position: start,
            velocity: Velocity::toward(&start, target, speed)?,
        })
    }
}

/// Everything that changes between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioState {
    /// Index of the next frame to run.
    pub frame: u32,
    pub projectile: Projectile,
    pub intercepted: bool,
    pub interception_count: u32,
    pub headline: Headline,
}

impl ScenarioState {
    pub fn new(projectile: Projectile) -> Self {
        Self {
            frame: 0,
            projectile,
            intercepted: false,
            interception_count: 0,
            headline: Headline::Tracking,
        }
    }
}

/// Run one frame: move the projectile unless already neutralized, then test
/// it against the zone perimeter.
pub fn step_frame(state: &ScenarioState, zone: &Detector) -> ScenarioState {
    let mut next = state.clone();
    next.frame += 1;

    if next.intercepted {
        return next;
    }

    motion::step(&mut next.projectile.position, &next.projectile.velocity);

    if zone.detects(&next.projectile.position) {
        next.intercepted = true;
        next.interception_count += 1;
        next.headline = Headline::Neutralized {
            total: next.interception_count,
        };
        info!(
            "Target neutralized at coordinates ({:.2}, {:.2})!",
            next.projectile.position.x, next.projectile.position.y
        );
    } else {
        next.headline = Headline::Tracking;
    }
    next
}

/// Spawn the projectile on the spawn column, retrying degenerate draws.
pub fn spawn_projectile(
    config: &ScenarioConfig,
    rng: &mut ChaCha8Rng,
) -> Result<Projectile, SimError> {
    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let y = rng.gen_range(config.spawn_y_min..=config.spawn_y_max) as f64;
        let speed = rng.gen_range(config.speed_min..=config.speed_max);
        let start = Position::new(config.spawn_x, y);
        match Projectile::aimed(start, &config.zone, speed) {
            Ok(projectile) => return Ok(projectile),
            Err(err) => warn!(%err, "respawning projectile"),
        }
    }
    Err(SimError::SpawnExhausted {
        attempts: MAX_SPAWN_ATTEMPTS,
    })
}

/// Fixed-length scripted run.
pub struct ScenarioEngine {
    config: ScenarioConfig,
    zone: Detector,
    state: ScenarioState,
}

impl ScenarioEngine {
    /// Create a scenario with a randomly spawned projectile.
    pub fn new(config: ScenarioConfig) -> Result<Self, SimError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let projectile = spawn_projectile(&config, &mut rng)?;
        Self::with_projectile(config, projectile)
    }

    /// Create a scenario with an explicit projectile.
    pub fn with_projectile(config: ScenarioConfig, projectile: Projectile) -> Result<Self, SimError> {
        config.validate()?;
        let zone = Detector::new(config.zone, config.zone_radius, Boundary::Exclusive);
        info!(
            x = projectile.position.x,
            y = projectile.position.y,
            speed = projectile.velocity.speed(),
            "projectile inbound"
        );
        Ok(Self {
            config,
            zone,
            state: ScenarioState::new(projectile),
        })
    }

    /// Run the next frame. Returns `None` once the frame budget is spent.
    pub fn tick(&mut self) -> Option<ScenarioSnapshot> {
        if self.is_finished() {
            return None;
        }
        let frame = self.state.frame;
        self.state = step_frame(&self.state, &self.zone);
        Some(self.snapshot(frame))
    }

    pub fn is_finished(&self) -> bool {
        self.state.frame >= self.config.frame_budget
    }

    pub fn state(&self) -> &ScenarioState {
        &self.state
    }

    pub fn zone(&self) -> &Detector {
        &self.zone
    }

    /// Delay between frames.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.config.frame_interval_ms)
    }

    fn snapshot(&self, frame: u32) -> ScenarioSnapshot {
        ScenarioSnapshot {
            frame,
            projectile: self.state.projectile.position,
            marker: if self.state.intercepted {
                MarkerState::Neutralized
            } else {
                MarkerState::Inbound
            },
            zone: self.zone.position,
            zone_radius: self.zone.radius,
            interception_count: self.state.interception_count,
            headline: self.state.headline,
        }
    }
}
