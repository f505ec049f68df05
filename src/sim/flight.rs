//! Fixed-step ball flight integration
//!
//! Callers advance a flight by whatever time elapsed since their last frame.
//! Internally the elapsed time is cut into fixed `numeric_dt_ms` sub-steps
//! (the last one possibly shorter), so the trajectory does not depend on the
//! caller's frame rate. Ground contact is checked after every sub-step.

use glam::Vec3;

use super::forces::FlightTuning;
use super::state::{FlightPhase, ShotStatus};
use crate::terrain::Heightfield;
use crate::{elevation_angle, horizontal};

/// One shot in the air.
///
/// Owns the ball's [`ShotStatus`] for the duration of the flight, so a status
/// can never drive two flights at once. Once [`FlightSimulator::step`] reports
/// the ball at rest the flight is over; recover the status with
/// [`FlightSimulator::into_status`].
#[derive(Debug, Clone)]
pub struct FlightSimulator {
    status: ShotStatus,
    /// Position at launch
    start: Vec3,
    /// Unit launch heading in the XY plane (zero for a vertical launch)
    target: Vec3,
    tuning: FlightTuning,
    phase: FlightPhase,
}

impl FlightSimulator {
    /// Launch from `status.x` with velocity `status.v` and spin `status.s`
    pub fn new(status: ShotStatus) -> Self {
        Self::with_tuning(status, FlightTuning::default())
    }

    /// # Panics
    /// If `tuning` fails [`FlightTuning::validate`]; such a flight could
    /// never land.
    pub fn with_tuning(mut status: ShotStatus, tuning: FlightTuning) -> Self {
        if let Err(e) = tuning.validate() {
            panic!("invalid flight tuning: {e}");
        }
        status.clear_statistics();
        status.launch_angle = elevation_angle(status.v);

        Self {
            start: status.x,
            target: horizontal(status.v).normalize_or_zero(),
            status,
            tuning,
            phase: FlightPhase::Flying,
        }
    }

    pub fn status(&self) -> &ShotStatus {
        &self.status
    }

    pub fn into_status(self) -> ShotStatus {
        self.status
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    pub fn is_flying(&self) -> bool {
        self.phase == FlightPhase::Flying
    }

    pub fn start(&self) -> Vec3 {
        self.start
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn tuning(&self) -> &FlightTuning {
        &self.tuning
    }

    /// Advance the flight by `dt_ms` milliseconds.
    ///
    /// Returns `true` while the ball is still in the air and `false` once it
    /// has come to rest, at which point `status().x.z` sits exactly on the
    /// terrain (or at 0 off the edge of the course). A zero `dt_ms` changes
    /// nothing.
    ///
    /// # Panics
    /// If the ball has already come to rest.
    pub fn step(&mut self, terrain: &Heightfield, dt_ms: u32) -> bool {
        assert!(self.is_flying(), "step called on a ball already at rest");
        if dt_ms == 0 {
            return true;
        }

        let flying = self.integrate(terrain, dt_ms as f32);
        self.update_statistics(dt_ms);
        log::trace!(
            "Flight +{dt_ms}ms: x={:?} v={:?}",
            self.status.x,
            self.status.v
        );

        if !flying {
            self.phase = FlightPhase::Resting;
            log::info!(
                "Ball at rest after {}ms: carry {:.1}yd, apex {:.1}yd, curve {:.1}yd",
                self.status.hang_time,
                self.status.carry,
                self.status.apex,
                self.status.curve
            );
        }
        flying
    }

    /// Explicit Euler over fixed sub-steps. Returns `false` on ground contact.
    fn integrate(&mut self, terrain: &Heightfield, mut t: f32) -> bool {
        let tuning = self.tuning;
        let ball = &mut self.status;

        loop {
            let dt = t.min(tuning.numeric_dt_ms);
            t -= dt;

            // Position moves with the velocity from the previous sub-step
            ball.x += ball.v * dt;

            let a = tuning.acceleration(ball.v, ball.s);
            let alpha = tuning.spin_rate(ball.s);
            ball.v += a * dt;
            ball.s += alpha * dt;

            if terrain.contains(ball.x.x, ball.x.y) {
                let ground = terrain.sample_height(ball.x.x, ball.x.y);
                if ball.x.z <= ground {
                    ball.x.z = ground;
                    return false;
                }
            } else if ball.x.z <= 0.0 {
                // Off the course the ball keeps flying until it reaches z = 0
                ball.x.z = 0.0;
                return false;
            }

            if t <= 0.0 {
                return true;
            }
        }
    }

    fn update_statistics(&mut self, dt_ms: u32) {
        let ball = &mut self.status;
        ball.hang_time = ball.hang_time.saturating_add(dt_ms);

        let carry = horizontal(ball.x - self.start);
        ball.carry = carry.length();

        let height = ball.x.z - self.start.z;
        if height > ball.apex {
            ball.apex = height;
            ball.apex_distance = ball.carry;
        }

        // Both vectors are unit (or zero) and horizontal, so the z-component
        // of their cross product is the sine of the angle between them
        let heading = carry.normalize_or_zero();
        ball.curve = ball.carry * self.target.cross(heading).z;

        ball.land_angle = elevation_angle(ball.v);
    }
}
