//! Time of day mapping that drives the model's orientation

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

/// Time of day in hours on a wrapping 24-hour cycle.
///
/// Owned by the host UI; the viewer only ever reads it. Values outside
/// `[0, 24)` wrap, so `23.9 + 0.2` lands at `0.1` and negative input counts
/// back from midnight.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TimeOfDay {
    time_hours: f32,
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self { time_hours: 12.0 }
    }
}

impl TimeOfDay {
    /// Create with a specific starting time.
    pub fn new(hours: f32) -> Self {
        Self {
            time_hours: hours.rem_euclid(24.0),
        }
    }

    /// Set the time directly.
    pub fn set(&mut self, hours: f32) {
        self.time_hours = hours.rem_euclid(24.0);
    }

    /// Current time in hours, always in `[0, 24)`.
    pub fn hours(&self) -> f32 {
        self.time_hours
    }

    /// Rotation about the vertical axis for the current time.
    pub fn rotation_angle(&self) -> f32 {
        rotation_angle(self.time_hours)
    }
}

/// Map a time in hours to a rotation angle about the vertical axis.
///
/// A full day is one revolution; midnight maps to zero. Out-of-range input
/// wraps on the 24-hour cycle before the angle is computed.
pub fn rotation_angle(hours: f32) -> f32 {
    hours.rem_euclid(24.0) / 24.0 * TAU
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_key_times() {
        assert_eq!(rotation_angle(0.0), 0.0);
        assert!((rotation_angle(12.0) - PI).abs() < 1e-6);
        assert_eq!(rotation_angle(24.0), 0.0);
        assert!((rotation_angle(6.0) - PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_negative_time_wraps() {
        assert!((rotation_angle(-1.0) - rotation_angle(23.0)).abs() < 1e-5);
    }

    #[test]
    fn test_monotonic_over_day() {
        let mut prev = rotation_angle(0.0);
        for step in 1..240 {
            let angle = rotation_angle(step as f32 * 0.1);
            assert!(angle > prev);
            prev = angle;
        }
    }

    #[test]
    fn test_time_of_day_wraps() {
        let mut tod = TimeOfDay::new(23.9);
        tod.set(23.9 + 0.2);
        assert!((tod.hours() - 0.1).abs() < 1e-5);

        let tod = TimeOfDay::new(-1.0);
        assert!((tod.hours() - 23.0).abs() < 1e-5);
    }
}
