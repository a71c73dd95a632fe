//! Fundamental geometric and simulation types.
//!
//! Screen-space coordinates: x grows to the right, y grows downward.
//! Velocities are expressed in units per tick, not per second.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// 2D position in simulation space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity (units per tick).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Direction-plus-speed form of a velocity.
///
/// `angle` is `atan2(dy, dx)` in radians; `speed` is units per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub angle: f64,
    pub speed: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds at the nominal tick rate.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn range_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Angle from this position to another, `atan2(dy, dx)`.
    pub fn angle_to(&self, other: &Position) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// This position displaced by one tick of `velocity`.
    pub fn advanced(&self, velocity: &Velocity) -> Position {
        Position::new(self.x + velocity.x, self.y + velocity.y)
    }

    fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Velocity of magnitude `speed` pointing from `from` toward `to`.
    ///
    /// Fails when the two points coincide, since no direction exists.
    pub fn toward(from: &Position, to: &Position, speed: f64) -> Result<Velocity, SimError> {
        let direction = (to.as_dvec2() - from.as_dvec2())
            .try_normalize()
            .ok_or(SimError::DegenerateTrajectory {
                x: from.x,
                y: from.y,
            })?;
        let scaled = direction * speed;
        Ok(Velocity::new(scaled.x, scaled.y))
    }

    /// Speed magnitude (units per tick).
    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Convert to direction-plus-speed form.
    pub fn heading(&self) -> Heading {
        Heading {
            angle: self.y.atan2(self.x),
            speed: self.speed(),
        }
    }
}

impl Heading {
    pub fn new(angle: f64, speed: f64) -> Self {
        Self { angle, speed }
    }

    /// Heading of magnitude `speed` pointing from `from` toward `to`.
    pub fn toward(from: &Position, to: &Position, speed: f64) -> Result<Heading, SimError> {
        if from == to {
            return Err(SimError::DegenerateTrajectory {
                x: from.x,
                y: from.y,
            });
        }
        Ok(Heading::new(from.angle_to(to), speed))
    }

    /// Convert to vector form via cosine/sine decomposition.
    pub fn to_velocity(&self) -> Velocity {
        Velocity::new(self.speed * self.angle.cos(), self.speed * self.angle.sin())
    }
}

impl From<Heading> for Velocity {
    fn from(heading: Heading) -> Self {
        heading.to_velocity()
    }
}

impl From<Velocity> for Heading {
    fn from(velocity: Velocity) -> Self {
        velocity.heading()
    }
}

impl SimTime {
    /// Advance by one tick at the given tick rate.
    pub fn advance(&mut self, tick_rate: u32) {
        self.tick += 1;
        self.elapsed_secs += 1.0 / tick_rate as f64;
    }
}
