//! Core types and definitions for the SKYSHIELD simulations.
//!
//! This crate defines the vocabulary shared across the other crates:
//! geometry, the motion and detection models, components, commands,
//! snapshots, events, configuration and constants.
//! It has no dependency on any runtime or rendering framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod controls;
pub mod detector;
pub mod enums;
pub mod error;
pub mod events;
pub mod motion;
pub mod state;
pub mod types;
