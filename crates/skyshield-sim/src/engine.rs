//! Battery engine: the interactive variant.
//!
//! `SimulationEngine` owns the hecs ECS world, processes operator commands,
//! runs all systems in a fixed order, and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace, warn};

use skyshield_core::commands::PlayerCommand;
use skyshield_core::components::{Interceptor, Threat};
use skyshield_core::config::BatteryConfig;
use skyshield_core::controls;
use skyshield_core::detector::{Boundary, Detector, RadarSweep};
use skyshield_core::enums::{GamePhase, ThreatKind};
use skyshield_core::error::SimError;
use skyshield_core::events::AudioEvent;
use skyshield_core::state::GameStateSnapshot;
use skyshield_core::types::{Position, SimTime};

use crate::score::ScoreState;
use crate::systems;
use crate::systems::snapshot::FrameContext;
use crate::world_setup;

/// The battery engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    config: BatteryConfig,
    radar: Detector,
    sweep: RadarSweep,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    next_threat_id: u32,
    next_interceptor_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
    explosions: Vec<Position>,
    score: ScoreState,
}

impl SimulationEngine {
    /// Create a new engine. Fails if the config does not validate.
    pub fn new(config: BatteryConfig) -> Result<Self, SimError> {
        config.validate()?;

        let radar = Detector::new(config.radar, config.detection_range, Boundary::Inclusive);
        let sweep = RadarSweep::new(config.sweep_speed);
        let rng = ChaCha8Rng::seed_from_u64(config.seed);

        Ok(Self {
            world: World::new(),
            config,
            radar,
            sweep,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng,
            next_threat_id: 0,
            next_interceptor_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            explosions: Vec::new(),
            score: ScoreState::default(),
        })
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Once stopped, further calls only return the final state.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            self.run_systems();
            self.time.advance(self.config.tick_rate);
        }

        let ctx = FrameContext {
            time: self.time,
            phase: self.phase,
            radar: &self.radar,
            sweep: &self.sweep,
            score: &self.score,
        };
        systems::snapshot::build_snapshot(
            &self.world,
            &ctx,
            std::mem::take(&mut self.audio_events),
            std::mem::take(&mut self.explosions),
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &BatteryConfig {
        &self.config
    }

    pub fn radar(&self) -> &Detector {
        &self.radar
    }

    pub fn score(&self) -> ScoreState {
        self.score
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Number of live threats.
    pub fn threat_count(&self) -> usize {
        self.world.query::<&Threat>().iter().count()
    }

    /// Number of live interceptors.
    pub fn interceptor_count(&self) -> usize {
        self.world.query::<&Interceptor>().iter().count()
    }

    /// Spawn a threat at an exact point with an exact target (for tests).
    #[cfg(test)]
    pub fn spawn_threat_at(
        &mut self,
        kind: ThreatKind,
        start: Position,
        target: Position,
        speed: f64,
    ) -> u32 {
        let id = self.next_threat_id;
        let params = *self.config.kind_params(kind);
        world_setup::spawn_threat_at(&mut self.world, id, kind, &params, start, target, speed)
            .expect("test threat must not be degenerate");
        self.next_threat_id += 1;
        self.score.threats_launched += 1;
        id
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single operator command.
    fn handle_command(&mut self, command: PlayerCommand) {
        if self.phase == GamePhase::Stopped {
            return;
        }
        match command {
            PlayerCommand::Click { x, y } => match controls::hit_test(&self.config.buttons, x, y) {
                Some(kind) => self.launch_threat(kind),
                None => trace!(x, y, "click outside launch buttons"),
            },
            PlayerCommand::LaunchThreat { kind } => self.launch_threat(kind),
            PlayerCommand::Quit => {
                info!(tick = self.time.tick, "stop requested");
                self.phase = GamePhase::Stopped;
            }
        }
    }

    /// Spawn one threat of `kind` on the spawn edge.
    fn launch_threat(&mut self, kind: ThreatKind) {
        let id = self.next_threat_id;
        match world_setup::spawn_threat(&mut self.world, &mut self.rng, &self.config, id, kind) {
            Ok(_) => {
                self.next_threat_id += 1;
                self.score.threats_launched += 1;
                self.audio_events
                    .push(AudioEvent::ThreatLaunched { threat_id: id, kind });
                debug!(threat_id = id, ?kind, "threat launched");
            }
            Err(err) => warn!(?kind, %err, "threat spawn discarded"),
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Threat movement
        systems::movement::run::<Threat>(&mut self.world);
        // 2. Threats that reached the radar
        systems::cleanup::remove_arrived_threats(
            &mut self.world,
            self.config.arrival_threshold,
            &mut self.score,
            &mut self.despawn_buffer,
        );
        // 3. Detection and interceptor launch
        systems::launch::run(
            &mut self.world,
            &self.radar,
            self.config.interceptor_speed,
            &mut self.next_interceptor_id,
            &mut self.audio_events,
            &mut self.score,
        );
        // 4. Interceptor movement
        systems::movement::run::<Interceptor>(&mut self.world);
        // 5. Interceptor/threat collisions
        systems::intercept::run(
            &mut self.world,
            self.config.intercept_threshold,
            &mut self.score,
            &mut self.audio_events,
            &mut self.explosions,
            &mut self.despawn_buffer,
        );
        // 6. Spent interceptors and out-of-bounds entities
        systems::cleanup::run(&mut self.world, &self.config, &mut self.despawn_buffer);
        // 7. Sweep line
        self.sweep.advance();
    }
}
