//! SKYSHIELD command-line application.
//!
//! This crate wires the simulation engines to the terminal: commands are read
//! from stdin, snapshots are written to stdout as JSON lines and logs go to
//! stderr.

pub mod assets;
pub mod config;
pub mod error;
pub mod game_loop;
pub mod logging;
pub mod scenario_loop;

pub use skyshield_core as core;
