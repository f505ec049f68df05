//! Hole routing: par and the ordered shot points from tee to pin

use serde::{Deserialize, Serialize};

use super::heightfield::FaceCoord;

/// Par of a hole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Par {
    Three,
    Four,
    Five,
}

impl Par {
    pub fn strokes(&self) -> u8 {
        match self {
            Par::Three => 3,
            Par::Four => 4,
            Par::Five => 5,
        }
    }

    /// Number of shot points routing a hole of this par (tee, landing areas, pin)
    pub fn shot_points(&self) -> usize {
        self.strokes() as usize - 1
    }

    pub fn from_strokes(strokes: u8) -> Option<Self> {
        match strokes {
            3 => Some(Par::Three),
            4 => Some(Par::Four),
            5 => Some(Par::Five),
            _ => None,
        }
    }
}

/// A routed hole
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub par: Par,
    /// Face coordinates from tee to pin; always `par.shot_points()` long
    pub shot_points: Vec<FaceCoord>,
}

impl Hole {
    /// # Panics
    /// If `shot_points.len()` does not match `par`.
    pub fn new(par: Par, shot_points: &[FaceCoord]) -> Self {
        assert_eq!(
            shot_points.len(),
            par.shot_points(),
            "par {} hole takes {} shot points",
            par.strokes(),
            par.shot_points()
        );
        Self {
            par,
            shot_points: shot_points.to_vec(),
        }
    }

    /// Length of the routing polyline in yards
    pub fn length(&self, xy_resolution: f32) -> f32 {
        self.shot_points
            .windows(2)
            .map(|w| {
                let dr = w[1].row as f32 - w[0].row as f32;
                let dc = w[1].col as f32 - w[0].col as f32;
                (dr * dr + dc * dc).sqrt()
            })
            .sum::<f32>()
            * xy_resolution
    }

    /// The last shot point
    pub fn pin(&self) -> FaceCoord {
        self.shot_points[self.shot_points.len() - 1]
    }
}
