//! A round of golf: one ball, either at rest or in flight, on one course

use glam::{Vec2, Vec3};

use super::flight::FlightSimulator;
use super::forces::FlightTuning;
use super::state::ShotStatus;
use crate::terrain::Heightfield;

/// Where the ball is in its shot cycle
#[derive(Debug, Clone)]
enum Ball {
    /// Ready to be struck
    Resting(ShotStatus),
    /// Shot in progress
    Flying(FlightSimulator),
}

/// Round state: the course, the ball, and the shot in progress (if any)
#[derive(Debug, Clone)]
pub struct Round {
    terrain: Heightfield,
    tuning: FlightTuning,
    ball: Ball,
}

impl Round {
    /// Begin a round on `terrain` with the ball at rest at the origin
    pub fn start(terrain: Heightfield) -> Self {
        Self::with_tuning(terrain, FlightTuning::default())
    }

    pub fn with_tuning(terrain: Heightfield, tuning: FlightTuning) -> Self {
        Self {
            terrain,
            tuning,
            ball: Ball::Resting(ShotStatus::default()),
        }
    }

    pub fn terrain(&self) -> &Heightfield {
        &self.terrain
    }

    /// Mutable access for the course editor. Edits apply to a shot in flight
    /// from its next step on.
    pub fn terrain_mut(&mut self) -> &mut Heightfield {
        &mut self.terrain
    }

    pub fn tuning(&self) -> &FlightTuning {
        &self.tuning
    }

    pub fn is_shot_in_progress(&self) -> bool {
        matches!(self.ball, Ball::Flying(_))
    }

    fn status(&self) -> &ShotStatus {
        match &self.ball {
            Ball::Resting(status) => status,
            Ball::Flying(sim) => sim.status(),
        }
    }

    /// Strike the ball from where it lies with velocity `v` and spin `s`.
    ///
    /// Ignored while a shot is still in progress.
    pub fn swing(&mut self, v: Vec3, s: Vec3) {
        let Ball::Resting(status) = &self.ball else {
            log::warn!("Ignoring swing, shot is in progress");
            return;
        };

        let mut status = *status;
        status.v = v;
        status.s = s;
        log::info!("Swing from {:?}: v={:?} s={:?}", status.x, v, s);
        self.ball = Ball::Flying(FlightSimulator::with_tuning(status, self.tuning));
    }

    /// Advance the shot in progress by `dt_ms` milliseconds of real time
    pub fn step(&mut self, dt_ms: u32) {
        if let Ball::Flying(sim) = &mut self.ball {
            if !sim.step(&self.terrain, dt_ms) {
                let status = *sim.status();
                self.ball = Ball::Resting(status);
            }
        }
    }

    /// Place the ball at rest on the terrain surface at `xy`, cancelling any
    /// shot in progress. Statistics of the last shot are kept.
    ///
    /// # Panics
    /// If `xy` lies outside the terrain.
    pub fn set_ball_position(&mut self, xy: Vec2) {
        if self.is_shot_in_progress() {
            log::debug!("Cancelling shot in progress");
        }

        let z = self.terrain.sample_height(xy.x, xy.y);
        let mut status = *self.status();
        status.x = Vec3::new(xy.x, xy.y, z);
        status.v = Vec3::ZERO;
        status.s = Vec3::ZERO;
        log::debug!("Ball placed at {:?}", status.x);
        self.ball = Ball::Resting(status);
    }

    pub fn ball_position(&self) -> Vec3 {
        self.status().x
    }

    /// Statistics of the shot in progress, or of the last completed shot
    pub fn shot_statistics(&self) -> ShotStatus {
        *self.status()
    }
}
