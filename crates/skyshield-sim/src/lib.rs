//! Simulation engines for SKYSHIELD.
//!
//! `SimulationEngine` runs the interactive battery over a hecs ECS world.
//! `ScenarioEngine` runs the scripted single-projectile scenario.
//! Both are headless and deterministic for a given seed.

pub mod engine;
pub mod scenario;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use scenario::ScenarioEngine;
pub use skyshield_core as core;
