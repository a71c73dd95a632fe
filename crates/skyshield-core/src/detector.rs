//! Fixed-position radius detector and the radar sweep animation.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// How a detector treats a point lying exactly on its radius.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Boundary {
    /// `distance <= radius` counts as detected.
    #[default]
    Inclusive,
    /// Only `distance < radius` counts as detected.
    Exclusive,
}

/// A sensor at a fixed point with a fixed detection radius.
///
/// Holds no per-tick state; every query is independent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Detector {
    pub position: Position,
    pub radius: f64,
    pub boundary: Boundary,
}

impl Detector {
    pub fn new(position: Position, radius: f64, boundary: Boundary) -> Self {
        Self {
            position,
            radius,
            boundary,
        }
    }

    /// Whether `point` lies inside the detection radius.
    pub fn detects(&self, point: &Position) -> bool {
        let distance = self.position.range_to(point);
        match self.boundary {
            Boundary::Inclusive => distance <= self.radius,
            Boundary::Exclusive => distance < self.radius,
        }
    }
}

/// Rotating sweep line drawn over the radar. Visual only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RadarSweep {
    /// Current sweep angle in radians, in `[0, TAU)`.
    pub angle: f64,
    /// Radians advanced per tick.
    pub speed: f64,
}

impl RadarSweep {
    pub fn new(speed: f64) -> Self {
        Self { angle: 0.0, speed }
    }

    /// Advance one tick. Restarts from zero once a full turn is reached.
    pub fn advance(&mut self) {
        self.angle += self.speed;
        if self.angle >= std::f64::consts::TAU {
            self.angle = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_boundary_detects_on_radius() {
        let radar = Detector::new(Position::new(400.0, 500.0), 150.0, Boundary::Inclusive);
        assert!(radar.detects(&Position::new(400.0, 350.0)));
        assert!(radar.detects(&Position::new(400.0, 351.0)));
        assert!(!radar.detects(&Position::new(400.0, 349.0)));
    }

    #[test]
    fn test_exclusive_boundary_rejects_on_radius() {
        let zone = Detector::new(Position::new(60.0, 60.0), 20.0, Boundary::Exclusive);
        assert!(!zone.detects(&Position::new(40.0, 60.0)));
        assert!(zone.detects(&Position::new(40.5, 60.0)));
    }

    #[test]
    fn test_detection_by_distance() {
        let zone = Detector::new(Position::new(60.0, 60.0), 20.0, Boundary::Inclusive);
        // 25 units out, then 15 units out
        assert!(!zone.detects(&Position::new(35.0, 60.0)));
        assert!(zone.detects(&Position::new(45.0, 60.0)));
    }

    #[test]
    fn test_sweep_wraps_to_zero() {
        let mut sweep = RadarSweep::new(0.05);
        let mut wrapped = false;
        for _ in 0..200 {
            let before = sweep.angle;
            sweep.advance();
            assert!(sweep.angle < std::f64::consts::TAU);
            if sweep.angle < before {
                assert_eq!(sweep.angle, 0.0);
                wrapped = true;
            }
        }
        assert!(wrapped, "200 ticks at 0.05 rad should complete a turn");
    }
}
