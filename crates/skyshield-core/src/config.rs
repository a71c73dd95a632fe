//! Runtime configuration for both simulation variants.
//!
//! Every field has a default from `constants`; config files only need to name
//! the values they override.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::controls::LaunchButton;
use crate::enums::ThreatKind;
use crate::error::SimError;
use crate::types::Position;

/// Kinematic and visual parameters of one threat kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThreatKindParams {
    pub color: [u8; 3],
    /// Speed is drawn uniformly from `speed_min..=speed_max` at spawn.
    pub speed_min: f64,
    pub speed_max: f64,
    pub size: f64,
}

/// Interactive variant configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatteryConfig {
    /// RNG seed. Same seed and same commands give the same run.
    pub seed: u64,
    pub tick_rate: u32,
    pub world_width: f64,
    pub world_height: f64,
    pub oob_margin: f64,
    pub radar: Position,
    pub detection_range: f64,
    pub sweep_speed: f64,
    pub interceptor_speed: f64,
    pub arrival_threshold: f64,
    pub intercept_threshold: f64,
    pub spawn_y: f64,
    pub swift: ThreatKindParams,
    pub heavy: ThreatKindParams,
    pub buttons: Vec<LaunchButton>,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_rate: TICK_RATE,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            oob_margin: OOB_MARGIN,
            radar: Position::new(RADAR_X, RADAR_Y),
            detection_range: DETECTION_RANGE,
            sweep_speed: RADAR_SWEEP_SPEED,
            interceptor_speed: INTERCEPTOR_SPEED,
            arrival_threshold: ARRIVAL_THRESHOLD,
            intercept_threshold: INTERCEPT_THRESHOLD,
            spawn_y: THREAT_SPAWN_Y,
            swift: ThreatKindParams {
                color: SWIFT_COLOR,
                speed_min: SWIFT_SPEED_MIN,
                speed_max: SWIFT_SPEED_MAX,
                size: SWIFT_SIZE,
            },
            heavy: ThreatKindParams {
                color: HEAVY_COLOR,
                speed_min: HEAVY_SPEED_MIN,
                speed_max: HEAVY_SPEED_MAX,
                size: HEAVY_SIZE,
            },
            buttons: vec![
                LaunchButton {
                    kind: ThreatKind::Swift,
                    rect: SWIFT_BUTTON.into(),
                },
                LaunchButton {
                    kind: ThreatKind::Heavy,
                    rect: HEAVY_BUTTON.into(),
                },
            ],
        }
    }
}

impl BatteryConfig {
    pub fn kind_params(&self, kind: ThreatKind) -> &ThreatKindParams {
        match kind {
            ThreatKind::Swift => &self.swift,
            ThreatKind::Heavy => &self.heavy,
        }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.tick_rate == 0 {
            return Err(invalid("tick_rate must be positive"));
        }
        require_positive("world_width", self.world_width)?;
        require_positive("world_height", self.world_height)?;
        require_non_negative("oob_margin", self.oob_margin)?;
        require_positive("detection_range", self.detection_range)?;
        require_non_negative("sweep_speed", self.sweep_speed)?;
        require_positive("interceptor_speed", self.interceptor_speed)?;
        require_positive("arrival_threshold", self.arrival_threshold)?;
        require_positive("intercept_threshold", self.intercept_threshold)?;
        for (name, params) in [("swift", &self.swift), ("heavy", &self.heavy)] {
            require_positive(name, params.speed_min)?;
            if params.speed_max < params.speed_min {
                return Err(invalid(&format!("{name}: speed_max below speed_min")));
            }
            require_positive(name, params.size)?;
        }
        Ok(())
    }
}

/// Scripted variant configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub seed: u64,
    pub zone: Position,
    pub zone_radius: f64,
    pub spawn_x: f64,
    /// Spawn row is an integer drawn from `spawn_y_min..=spawn_y_max`.
    pub spawn_y_min: i64,
    pub spawn_y_max: i64,
    pub speed_min: f64,
    pub speed_max: f64,
    pub frame_budget: u32,
    pub frame_interval_ms: u64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            zone: Position::new(ZONE_X, ZONE_Y),
            zone_radius: ZONE_RADIUS,
            spawn_x: PROJECTILE_SPAWN_X,
            spawn_y_min: PROJECTILE_SPAWN_Y_MIN,
            spawn_y_max: PROJECTILE_SPAWN_Y_MAX,
            speed_min: PROJECTILE_SPEED_MIN,
            speed_max: PROJECTILE_SPEED_MAX,
            frame_budget: SCENARIO_FRAMES,
            frame_interval_ms: SCENARIO_FRAME_INTERVAL_MS,
        }
    }
}

impl ScenarioConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        require_positive("zone_radius", self.zone_radius)?;
        if self.spawn_y_max < self.spawn_y_min {
            return Err(invalid("spawn_y_max below spawn_y_min"));
        }
        require_positive("speed_min", self.speed_min)?;
        if self.speed_max < self.speed_min {
            return Err(invalid("speed_max below speed_min"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> SimError {
    SimError::InvalidConfig(message.to_string())
}

fn require_positive(name: &str, value: f64) -> Result<(), SimError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(&format!("{name} must be positive, got {value}")))
    }
}

fn require_non_negative(name: &str, value: f64) -> Result<(), SimError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(&format!("{name} must not be negative, got {value}")))
    }
}
