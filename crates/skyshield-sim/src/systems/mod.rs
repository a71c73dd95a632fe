//! ECS systems that operate on the battery world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They do not own state; all entity state lives in components.

pub mod cleanup;
pub mod intercept;
pub mod launch;
pub mod movement;
pub mod snapshot;
