//! Shot state shared between the flight model and its callers

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Lifecycle of a single flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightPhase {
    /// Ball is in the air
    Flying,
    /// Ball has met the ground; terminal
    Resting,
}

/// Kinematic state of the ball plus statistics of the current (or last) shot.
///
/// Units are yards and milliseconds throughout. `x`, `v` and `s` are set by
/// the caller before a shot; every other field is derived by the flight model.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShotStatus {
    /// Position (yd)
    pub x: Vec3,
    /// Velocity (yd/ms)
    pub v: Vec3,
    /// Spin, axis-angle angular velocity
    pub s: Vec3,

    /// Angle between launch velocity and the horizontal (rad)
    pub launch_angle: f32,
    /// Angle between current velocity and the horizontal (rad)
    pub land_angle: f32,
    /// Greatest height above the starting point (yd)
    pub apex: f32,
    /// Carry at the moment the apex was reached (yd)
    pub apex_distance: f32,
    /// Lateral deviation from the launch heading, positive to the left (yd)
    pub curve: f32,
    /// Horizontal distance from the starting point (yd)
    pub carry: f32,
    /// Time in the air (ms)
    pub hang_time: u32,
}

impl ShotStatus {
    /// A ball at rest at `x`
    pub fn at_rest(x: Vec3) -> Self {
        Self { x, ..Self::default() }
    }

    /// Zero every derived statistic, keeping position, velocity and spin
    pub fn clear_statistics(&mut self) {
        *self = Self {
            x: self.x,
            v: self.v,
            s: self.s,
            ..Self::default()
        };
    }
}
