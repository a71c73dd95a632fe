//! Default tuning parameters.
//!
//! These seed the `Default` impls in `config`; any of them can be overridden
//! from a config file at startup.

// --- Battery (interactive) ---

/// Target tick rate of the interactive loop (Hz).
pub const TICK_RATE: u32 = 60;

/// World width in screen units.
pub const WORLD_WIDTH: f64 = 800.0;

/// World height in screen units.
pub const WORLD_HEIGHT: f64 = 600.0;

/// Entities further than this outside the world rectangle are removed.
pub const OOB_MARGIN: f64 = 200.0;

/// Radar site, which is also the point every threat is aimed at.
pub const RADAR_X: f64 = 400.0;
pub const RADAR_Y: f64 = 500.0;

/// Radar detection radius.
pub const DETECTION_RANGE: f64 = 150.0;

/// Radar sweep line rotation (radians per tick).
pub const RADAR_SWEEP_SPEED: f64 = 0.05;

/// Interceptor speed (units per tick).
pub const INTERCEPTOR_SPEED: f64 = 10.0;

/// Distance below which an object has reached its target point.
pub const ARRIVAL_THRESHOLD: f64 = 5.0;

/// Distance below which an interceptor and a threat collide.
pub const INTERCEPT_THRESHOLD: f64 = 5.0;

/// Threats spawn on this edge row.
pub const THREAT_SPAWN_Y: f64 = 0.0;

// --- Threat kinds ---

pub const SWIFT_COLOR: [u8; 3] = [255, 165, 0];
pub const SWIFT_SPEED_MIN: f64 = 6.0;
pub const SWIFT_SPEED_MAX: f64 = 10.0;
pub const SWIFT_SIZE: f64 = 5.0;

pub const HEAVY_COLOR: [u8; 3] = [128, 0, 128];
pub const HEAVY_SPEED_MIN: f64 = 2.0;
pub const HEAVY_SPEED_MAX: f64 = 5.0;
pub const HEAVY_SIZE: f64 = 7.0;

// --- Launch buttons: (x, y, width, height) ---

pub const SWIFT_BUTTON: (f64, f64, f64, f64) = (50.0, 50.0, 100.0, 40.0);
pub const HEAVY_BUTTON: (f64, f64, f64, f64) = (200.0, 50.0, 100.0, 40.0);

// --- Scenario (scripted) ---

/// Center of the protected zone.
pub const ZONE_X: f64 = 60.0;
pub const ZONE_Y: f64 = 60.0;

/// Defense perimeter radius around the protected zone.
pub const ZONE_RADIUS: f64 = 20.0;

/// Projectile spawn column (left edge).
pub const PROJECTILE_SPAWN_X: f64 = 0.0;

/// Projectile spawn row range, inclusive integers.
pub const PROJECTILE_SPAWN_Y_MIN: i64 = 10;
pub const PROJECTILE_SPAWN_Y_MAX: i64 = 110;

/// Projectile speed range (units per frame).
pub const PROJECTILE_SPEED_MIN: f64 = 0.8;
pub const PROJECTILE_SPEED_MAX: f64 = 1.2;

/// Number of frames in a scenario run.
pub const SCENARIO_FRAMES: u32 = 150;

/// Delay between scenario frames (milliseconds).
pub const SCENARIO_FRAME_INTERVAL_MS: u64 = 200;

/// Spawn retries before a degenerate scenario is reported.
pub const MAX_SPAWN_ATTEMPTS: u32 = 16;
