//! Course terrain
//!
//! The heightfield is the only mutable course state: the editor raises and
//! paints faces, the flight model samples heights, the renderer reads
//! triangles back out after each edit.

pub mod heightfield;
pub mod hole;
pub mod material;

pub use heightfield::{Corner, Face, FaceCoord, Heightfield, VertexCoord};
pub use hole::{Hole, Par};
pub use material::Material;
