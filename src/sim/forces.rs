//! Forces acting on a ball in flight
//!
//! The model keeps three empirically calibrated terms on top of gravity:
//!
//! ```text
//! a  = g + K_SPIN (s × v) - K_DRAG |s| v
//! s' = -K_SPIN_DECAY s
//! ```
//!
//! The Magnus term bends the flight perpendicular to both spin and velocity:
//! backspin on a rising shot lifts it, counter-clockwise sidespin hooks it.
//! Drag scales with spin because a faster spinning ball drags a wider wake.
//! The constants fold mass, air density and ball geometry together and are
//! tuned against reference trajectories rather than derived.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Calibration of the flight model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightTuning {
    /// Magnus coefficient
    pub k_spin: f32,
    /// Spin-proportional drag coefficient
    pub k_drag: f32,
    /// Spin decay rate (1/ms)
    pub k_spin_decay: f32,
    /// Downward gravitational acceleration (yd/ms²)
    pub gravity: f32,
    /// Fixed integration step (ms)
    pub numeric_dt_ms: f32,
}

impl Default for FlightTuning {
    fn default() -> Self {
        Self {
            k_spin: K_SPIN,
            k_drag: K_DRAG,
            k_spin_decay: K_SPIN_DECAY,
            gravity: GRAVITY,
            numeric_dt_ms: NUMERIC_DT_MS,
        }
    }
}

impl FlightTuning {
    /// Gravity alone, for checking against closed-form projectile motion
    pub fn vacuum() -> Self {
        Self {
            k_spin: 0.0,
            k_drag: 0.0,
            k_spin_decay: 0.0,
            ..Self::default()
        }
    }

    /// Check that every coefficient is finite, and that gravity and the
    /// integration step are positive so a flight always advances and lands
    pub fn validate(&self) -> Result<(), String> {
        let coefficients = [
            ("k_spin", self.k_spin),
            ("k_drag", self.k_drag),
            ("k_spin_decay", self.k_spin_decay),
        ];
        for (name, value) in coefficients {
            if !value.is_finite() {
                return Err(format!("{name} must be finite, got {value}"));
            }
        }
        for (name, value) in [("gravity", self.gravity), ("numeric_dt_ms", self.numeric_dt_ms)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{name} must be positive, got {value}"));
            }
        }
        Ok(())
    }

    pub fn gravity_vector(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, -self.gravity)
    }

    /// Linear acceleration for velocity `v` and spin `s`
    #[inline]
    pub fn acceleration(&self, v: Vec3, s: Vec3) -> Vec3 {
        let magnus = self.k_spin * s.cross(v);
        let drag = -self.k_drag * s.length() * v;
        self.gravity_vector() + magnus + drag
    }

    /// Rate of change of spin
    #[inline]
    pub fn spin_rate(&self, s: Vec3) -> Vec3 {
        -self.k_spin_decay * s
    }
}
