//! Deterministic shot simulation
//!
//! Flight is integrated at a fixed internal step regardless of how real time
//! is sliced into frames:
//! - Fixed timestep only (`numeric_dt_ms`)
//! - Terrain is read, never written, while a ball is in flight
//! - No rendering or platform dependencies

pub mod flight;
pub mod forces;
pub mod round;
pub mod state;

pub use flight::FlightSimulator;
pub use forces::FlightTuning;
pub use round::Round;
pub use state::{FlightPhase, ShotStatus};
