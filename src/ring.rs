//! Circular drag control mapping.
//!
//! The ring's visual origin is rotated -90° so 0% sits at twelve o'clock and
//! values grow clockwise: right is 25%, bottom 50%, left 75%. Screen
//! coordinates are assumed (y grows downward).
//!
//! ## Example
//! ```rust
//! use pace_planner::ring::percentage_from_offset;
//!
//! assert!(percentage_from_offset(0.0, -1.0).abs() < 1e-9);
//! assert!((percentage_from_offset(1.0, 0.0) - 25.0).abs() < 1e-9);
//! assert!((percentage_from_offset(0.0, 1.0) - 50.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::PlannerConfig;

/// A pointer or touch position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding box of the ring control on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct RingBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl RingBounds {
    /// Center of the box.
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Percentage (0-100) for a pointer offset from the ring center.
pub fn percentage_from_offset(dx: f64, dy: f64) -> f64 {
    let angle = dy.atan2(dx).to_degrees();

    let mut normalized = angle + 90.0;
    if normalized < 0.0 {
        normalized += 360.0;
    }

    let percentage = normalized / 360.0 * 100.0;
    if percentage.is_nan() {
        return 0.0;
    }
    percentage.clamp(0.0, 100.0)
}

/// Percentage (0-100) for a pointer position over a ring's bounding box.
pub fn percentage_from_pointer(pointer: Point, bounds: &RingBounds) -> f64 {
    let center = bounds.center();
    percentage_from_offset(pointer.x - center.x, pointer.y - center.y)
}

/// Fill percentage for rendering `value` on a ring whose full turn is `max`.
pub fn ring_percentage(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max * 100.0).min(100.0)
}

/// Distance selected by a drag on the distance ring.
pub fn distance_from_percentage(percentage: f64, config: &PlannerConfig) -> f64 {
    (percentage / 100.0 * config.ring_max_distance).max(config.min_drag_distance)
}

/// Total seconds selected by a drag on the time ring.
pub fn seconds_from_percentage(percentage: f64, config: &PlannerConfig) -> f64 {
    (percentage / 100.0 * config.ring_max_hours * 3600.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_directions() {
        assert!(percentage_from_offset(0.0, -1.0).abs() < 1e-9);
        assert!((percentage_from_offset(1.0, 0.0) - 25.0).abs() < 1e-9);
        assert!((percentage_from_offset(0.0, 1.0) - 50.0).abs() < 1e-9);
        assert!((percentage_from_offset(-1.0, 0.0) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_upper_left_quadrant_wraps() {
        // atan2 gives -135°, +90 is -45°, wrapped to 315° = 87.5%
        assert!((percentage_from_offset(-1.0, -1.0) - 87.5).abs() < 1e-9);
    }

    #[test]
    fn test_scale_invariant() {
        let a = percentage_from_offset(3.0, 4.0);
        let b = percentage_from_offset(300.0, 400.0);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_center_and_nan() {
        // atan2(0, 0) is 0°, so the exact center reads as a quarter turn
        assert!((percentage_from_offset(0.0, 0.0) - 25.0).abs() < 1e-9);
        assert_eq!(percentage_from_offset(f64::NAN, 1.0), 0.0);
    }

    #[test]
    fn test_pointer_over_bounds() {
        let bounds = RingBounds {
            left: 100.0,
            top: 50.0,
            width: 200.0,
            height: 200.0,
        };
        assert_eq!(bounds.center(), Point::new(200.0, 150.0));
        let pct = percentage_from_pointer(Point::new(200.0, 250.0), &bounds);
        assert!((pct - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_ring_percentage() {
        assert_eq!(ring_percentage(25.0, 50.0), 50.0);
        assert_eq!(ring_percentage(80.0, 50.0), 100.0);
        assert_eq!(ring_percentage(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_domain_mapping() {
        let config = PlannerConfig::default();
        assert_eq!(distance_from_percentage(50.0, &config), 25.0);
        assert_eq!(distance_from_percentage(0.0, &config), 0.001);
        assert_eq!(seconds_from_percentage(50.0, &config), 9000.0);
        assert_eq!(seconds_from_percentage(0.0, &config), 0.0);
    }
}
