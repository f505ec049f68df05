//! Golf Sim - shot flight over an editable heightfield course
//!
//! Core modules:
//! - `terrain`: Heightfield of quadrilateral faces, materials, hole routing
//! - `sim`: Fixed-step ball flight model and the round state machine
//! - `settings`: Data-driven terrain size and flight tuning

pub mod settings;
pub mod sim;
pub mod terrain;

pub use settings::{Settings, TerrainSettings};
pub use sim::{FlightPhase, FlightSimulator, FlightTuning, Round, ShotStatus};
pub use terrain::{Corner, Face, FaceCoord, Heightfield, Hole, Material, Par, VertexCoord};

use glam::Vec3;

/// Simulation configuration constants
pub mod consts {
    /// Fixed integration timestep in milliseconds
    pub const NUMERIC_DT_MS: f32 = 5.0;

    /// Gravitational acceleration, 9.8 m/s² expressed in yd/ms²
    pub const GRAVITY: f32 = 1.07e-5;

    /// Magnus coefficient: how much spin bends the trajectory.
    /// Raising it makes every shot climb higher and land steeper.
    pub const K_SPIN: f32 = 0.00525;
    /// Spin-proportional drag. Raising it shortens every shot.
    pub const K_DRAG: f32 = 0.0065;
    /// Exponential decay rate of spin (1/ms). Raising it flattens the descent.
    pub const K_SPIN_DECAY: f32 = 0.0027;

    /// Number of hole slots on a course
    pub const MAX_HOLES: usize = 18;

    /// Default course dimensions (faces) and face edge length (yards)
    pub const DEFAULT_TERRAIN_WIDTH: u16 = 50;
    pub const DEFAULT_TERRAIN_HEIGHT: u16 = 50;
    pub const DEFAULT_XY_RESOLUTION: f32 = 10.0;
}

/// Project a vector onto the XY plane
#[inline]
pub fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, 0.0)
}

/// Angle between `v` and its horizontal projection, in radians.
///
/// A purely vertical vector has no horizontal projection; it is reported as
/// `π/2` rather than NaN.
#[inline]
pub fn elevation_angle(v: Vec3) -> f32 {
    let run = horizontal(v).length();
    if run == 0.0 {
        return std::f32::consts::FRAC_PI_2;
    }
    v.z.abs().atan2(run)
}
