//! Launch button layout and click hit-testing.

use serde::{Deserialize, Serialize};

use crate::enums::ThreatKind;

/// Axis-aligned screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Point-in-rectangle test with inclusive edges.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

impl From<(f64, f64, f64, f64)> for Rect {
    fn from((x, y, width, height): (f64, f64, f64, f64)) -> Self {
        Rect::new(x, y, width, height)
    }
}

/// A clickable button that spawns one threat kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchButton {
    pub kind: ThreatKind,
    pub rect: Rect,
}

/// Which button, if any, a click lands on. First match wins.
pub fn hit_test(buttons: &[LaunchButton], x: f64, y: f64) -> Option<ThreatKind> {
    buttons
        .iter()
        .find(|button| button.rect.contains(x, y))
        .map(|button| button.kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HEAVY_BUTTON, SWIFT_BUTTON};

    fn default_buttons() -> Vec<LaunchButton> {
        vec![
            LaunchButton {
                kind: ThreatKind::Swift,
                rect: SWIFT_BUTTON.into(),
            },
            LaunchButton {
                kind: ThreatKind::Heavy,
                rect: HEAVY_BUTTON.into(),
            },
        ]
    }

    #[test]
    fn test_hit_test_edges_inclusive() {
        let buttons = default_buttons();
        assert_eq!(hit_test(&buttons, 50.0, 50.0), Some(ThreatKind::Swift));
        assert_eq!(hit_test(&buttons, 150.0, 90.0), Some(ThreatKind::Swift));
        assert_eq!(hit_test(&buttons, 200.0, 90.0), Some(ThreatKind::Heavy));
        assert_eq!(hit_test(&buttons, 300.0, 50.0), Some(ThreatKind::Heavy));
    }

    #[test]
    fn test_hit_test_misses() {
        let buttons = default_buttons();
        assert_eq!(hit_test(&buttons, 175.0, 70.0), None);
        assert_eq!(hit_test(&buttons, 100.0, 90.5), None);
        assert_eq!(hit_test(&buttons, 400.0, 300.0), None);
    }
}
