//! Heightfield terrain: a grid of quadrilateral faces over shared vertices
//!
//! Face `(row, col)` covers world `x ∈ [col·res, (col+1)·res]` and
//! `y ∈ [row·res, (row+1)·res]`, where `res` is the heightfield's
//! `xy_resolution` in yards. Rows grow along +y, columns along +x:
//!
//! ```text
//!      TopLeft (row+1, col)      TopRight (row+1, col+1)
//!             o------------------o
//!             |              ,`  |
//!             |   A       ,`     |
//!             |        ,`        |
//!             |     ,`      B    |
//!             |  ,`              |
//!             o------------------o
//!      BottomLeft (row, col)     BottomRight (row, col+1)
//! ```
//!
//! Elevations live once per vertex, so every face touching a vertex observes
//! the same value. Faces are split along the BottomLeft-TopRight diagonal for
//! both sampling and rendering.

use std::ops::RangeInclusive;

use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

use super::hole::{Hole, Par};
use super::material::Material;
use crate::consts::MAX_HOLES;

/// Grid coordinate of a face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceCoord {
    pub row: u16,
    pub col: u16,
}

impl FaceCoord {
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Vertex at the given corner of this face
    pub fn corner(&self, corner: Corner) -> VertexCoord {
        let (dr, dc) = corner.offset();
        VertexCoord::new(self.row + dr, self.col + dc)
    }
}

/// Grid coordinate of a vertex (grid-line intersection)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VertexCoord {
    pub row: u16,
    pub col: u16,
}

impl VertexCoord {
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}

/// Corner of a face, in storage order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft = 0,
    TopRight = 1,
    BottomRight = 2,
    BottomLeft = 3,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// (row, col) offset of this corner's vertex from the face's own coordinate
    pub const fn offset(self) -> (u16, u16) {
        match self {
            Corner::TopLeft => (1, 0),
            Corner::TopRight => (1, 1),
            Corner::BottomRight => (0, 1),
            Corner::BottomLeft => (0, 0),
        }
    }
}

/// Snapshot of one face: its four corner elevations and its surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    /// Indexed by `Corner as usize`
    pub corners: [u16; 4],
    pub material: Material,
}

impl Face {
    #[inline]
    pub fn elevation(&self, corner: Corner) -> u16 {
        self.corners[corner as usize]
    }

    pub fn min_elevation(&self) -> u16 {
        self.corners.iter().copied().min().unwrap_or(0)
    }

    pub fn max_elevation(&self) -> u16 {
        self.corners.iter().copied().max().unwrap_or(0)
    }

    /// All four corners at the same elevation
    pub fn is_level(&self) -> bool {
        self.min_elevation() == self.max_elevation()
    }
}

/// Editable course terrain
#[derive(Debug, Clone)]
pub struct Heightfield {
    /// Number of faces along x
    width: u16,
    /// Number of faces along y
    height: u16,
    /// World length of one face edge (yards)
    xy_resolution: f32,
    /// `(height + 1) x (width + 1)` elevations, row-major
    elevations: Vec<u16>,
    /// `height x width` surfaces, row-major
    materials: Vec<Material>,
    holes: Vec<Option<Hole>>,
}

impl Heightfield {
    /// Create a flat course of rough, every elevation 0
    ///
    /// # Panics
    /// If either dimension is zero or `xy_resolution` is not a positive finite number.
    pub fn new(width: u16, height: u16, xy_resolution: f32) -> Self {
        assert!(width > 0 && height > 0, "terrain must have at least one face");
        assert!(
            xy_resolution.is_finite() && xy_resolution > 0.0,
            "xy_resolution must be positive, got {xy_resolution}"
        );

        let num_vertices = (width as usize + 1) * (height as usize + 1);
        let num_faces = width as usize * height as usize;
        log::debug!("Terrain {width}x{height} faces at {xy_resolution} yd/face");

        Self {
            width,
            height,
            xy_resolution,
            elevations: vec![0; num_vertices],
            materials: vec![Material::Rough; num_faces],
            holes: vec![None; MAX_HOLES],
        }
    }

    // === Dimensions ===

    /// Width in faces (edges along the bottom boundary)
    #[inline]
    pub fn face_width(&self) -> u16 {
        self.width
    }

    /// Height in faces (edges along the left boundary)
    #[inline]
    pub fn face_height(&self) -> u16 {
        self.height
    }

    #[inline]
    pub fn vertex_width(&self) -> u16 {
        self.width + 1
    }

    #[inline]
    pub fn vertex_height(&self) -> u16 {
        self.height + 1
    }

    pub fn num_faces(&self) -> usize {
        self.materials.len()
    }

    pub fn num_vertices(&self) -> usize {
        self.elevations.len()
    }

    #[inline]
    pub fn xy_resolution(&self) -> f32 {
        self.xy_resolution
    }

    /// World extent along x, in yards
    pub fn world_width(&self) -> f32 {
        self.width as f32 * self.xy_resolution
    }

    /// World extent along y, in yards
    pub fn world_height(&self) -> f32 {
        self.height as f32 * self.xy_resolution
    }

    /// Whether a world point lies over the grid (half-open on the far edges)
    pub fn contains(&self, x: f32, y: f32) -> bool {
        (0.0..self.world_width()).contains(&x) && (0.0..self.world_height()).contains(&y)
    }

    fn face_index(&self, row: u16, col: u16) -> usize {
        assert!(
            row < self.height && col < self.width,
            "face ({row}, {col}) out of range for {}x{} terrain",
            self.height,
            self.width
        );
        row as usize * self.width as usize + col as usize
    }

    fn vertex_index(&self, row: u16, col: u16) -> usize {
        assert!(
            row <= self.height && col <= self.width,
            "vertex ({row}, {col}) out of range for {}x{} vertices",
            self.vertex_height(),
            self.vertex_width()
        );
        row as usize * self.vertex_width() as usize + col as usize
    }

    // === Queries ===

    pub fn vertex_elevation(&self, row: u16, col: u16) -> u16 {
        self.elevations[self.vertex_index(row, col)]
    }

    pub fn face(&self, row: u16, col: u16) -> Face {
        let material = self.materials[self.face_index(row, col)];
        let coord = FaceCoord::new(row, col);
        let corners = Corner::ALL.map(|c| {
            let v = coord.corner(c);
            self.elevations[self.vertex_index(v.row, v.col)]
        });
        Face { corners, material }
    }

    /// Every face in row-major order
    pub fn faces(&self) -> impl Iterator<Item = (FaceCoord, Face)> + '_ {
        (0..self.height).flat_map(move |row| {
            (0..self.width).map(move |col| (FaceCoord::new(row, col), self.face(row, col)))
        })
    }

    pub fn material(&self, row: u16, col: u16) -> Material {
        self.materials[self.face_index(row, col)]
    }

    // === Editing ===

    pub fn set_material(&mut self, row: u16, col: u16, material: Material) {
        let i = self.face_index(row, col);
        self.materials[i] = material;
    }

    /// Set the material of every face in an inclusive rectangle
    pub fn fill_material(
        &mut self,
        rows: RangeInclusive<u16>,
        cols: RangeInclusive<u16>,
        material: Material,
    ) {
        for row in rows {
            for col in cols.clone() {
                self.set_material(row, col, material);
            }
        }
    }

    /// Raise (or lower) one vertex, clamping at 0.
    ///
    /// Every face sharing the vertex sees the change.
    pub fn raise_vertex(&mut self, row: u16, col: u16, delta: i32) {
        let i = self.vertex_index(row, col);
        let old = self.elevations[i];
        let new = (old as i32).saturating_add(delta).clamp(0, u16::MAX as i32) as u16;
        self.elevations[i] = new;
        log::trace!("Vertex ({row}, {col}): {old} -> {new}");
    }

    /// Raise (or lower) a whole face.
    ///
    /// A non-level face is leveled first: when raising, each corner climbs
    /// at most to the face's highest corner, and only the budget left once
    /// the lowest corner has caught up is applied to all four corners.
    /// Lowering mirrors this, bringing the highest corners down to the
    /// lowest first. Edits go through [`Self::raise_vertex`], so neighbors
    /// sharing a corner move with it.
    pub fn raise_face(&mut self, row: u16, col: u16, delta: i32) {
        let face = self.face(row, col);
        let lo = face.min_elevation() as i32;
        let hi = face.max_elevation() as i32;
        let span = hi - lo;
        let coord = FaceCoord::new(row, col);

        for corner in Corner::ALL {
            let z = face.elevation(corner) as i32;
            let step = if delta > 0 {
                delta.min(hi - z) + (delta - span).max(0)
            } else {
                delta.max(lo - z) + (delta + span).min(0)
            };
            if step != 0 {
                let v = coord.corner(corner);
                self.raise_vertex(v.row, v.col, step);
            }
        }
        log::debug!("Raised face ({row}, {col}) by {delta}");
    }

    /// [`Self::raise_face`] over an inclusive rectangle of faces, row by row
    pub fn bulk_raise_face(&mut self, rows: RangeInclusive<u16>, cols: RangeInclusive<u16>, delta: i32) {
        for row in rows {
            for col in cols.clone() {
                self.raise_face(row, col, delta);
            }
        }
    }

    /// [`Self::raise_vertex`] over an inclusive rectangle of vertices
    pub fn bulk_raise_vertex(
        &mut self,
        rows: RangeInclusive<u16>,
        cols: RangeInclusive<u16>,
        delta: i32,
    ) {
        for row in rows {
            for col in cols.clone() {
                self.raise_vertex(row, col, delta);
            }
        }
    }

    // === Sampling ===

    /// Continuous terrain height at world point `(x, y)`.
    ///
    /// Picks the triangle of the containing face on the appropriate side of
    /// its diagonal and interpolates its three corners barycentrically.
    /// Points on the far edges of the grid are accepted.
    ///
    /// # Panics
    /// If `(x, y)` lies outside the grid.
    pub fn sample_height(&self, x: f32, y: f32) -> f32 {
        assert!(
            (0.0..=self.world_width()).contains(&x) && (0.0..=self.world_height()).contains(&y),
            "sample ({x}, {y}) outside {}x{} yd terrain",
            self.world_width(),
            self.world_height()
        );

        let u = x / self.xy_resolution;
        let v = y / self.xy_resolution;
        let col = (u.floor() as u16).min(self.width - 1);
        let row = (v.floor() as u16).min(self.height - 1);
        let fx = u - col as f32;
        let fy = v - row as f32;

        let face = self.face(row, col);
        let z = |c: Corner| face.elevation(c) as f32;

        if fy >= fx {
            // Triangle A: BottomLeft, TopLeft, TopRight
            (1.0 - fy) * z(Corner::BottomLeft) + (fy - fx) * z(Corner::TopLeft) + fx * z(Corner::TopRight)
        } else {
            // Triangle B: BottomLeft, BottomRight, TopRight
            (1.0 - fx) * z(Corner::BottomLeft)
                + (fx - fy) * z(Corner::BottomRight)
                + fy * z(Corner::TopRight)
        }
    }

    /// Unit surface normal at a vertex.
    ///
    /// Sums the normals of the four triangles spanned by the vertex and its
    /// axis-aligned neighbors. A neighbor missing at the grid boundary is
    /// treated as level with the vertex.
    pub fn vertex_normal(&self, row: u16, col: u16) -> Vec3 {
        let z = self.vertex_elevation(row, col) as f32;
        let neighbor = |dr: i32, dc: i32| -> f32 {
            let r = row as i32 + dr;
            let c = col as i32 + dc;
            if (0..=self.height as i32).contains(&r) && (0..=self.width as i32).contains(&c) {
                self.vertex_elevation(r as u16, c as u16) as f32
            } else {
                z
            }
        };

        let res = self.xy_resolution;
        let north = Vec3::new(0.0, res, neighbor(1, 0) - z);
        let east = Vec3::new(res, 0.0, neighbor(0, 1) - z);
        let south = Vec3::new(0.0, -res, neighbor(-1, 0) - z);
        let west = Vec3::new(-res, 0.0, neighbor(0, -1) - z);

        (north.cross(west) + east.cross(north) + south.cross(east) + west.cross(south)).normalize()
    }

    // === Render export ===

    /// World-space positions, two triangles (six vertices) per face in row-major
    /// face order. Triangle A is TopLeft, BottomLeft, TopRight; triangle B is
    /// BottomRight, TopRight, BottomLeft.
    pub fn triangle_positions(&self) -> Vec<Vec3> {
        let res = self.xy_resolution;
        let mut positions = Vec::with_capacity(self.num_faces() * 6);
        for (coord, face) in self.faces() {
            let point = |corner: Corner| {
                let v = coord.corner(corner);
                Vec3::new(
                    v.col as f32 * res,
                    v.row as f32 * res,
                    face.elevation(corner) as f32,
                )
            };
            positions.extend([
                point(Corner::TopLeft),
                point(Corner::BottomLeft),
                point(Corner::TopRight),
                point(Corner::BottomRight),
                point(Corner::TopRight),
                point(Corner::BottomLeft),
            ]);
        }
        positions
    }

    /// Material color for each vertex emitted by [`Self::triangle_positions`]
    pub fn triangle_colors(&self) -> Vec<Vec4> {
        self.materials
            .iter()
            .flat_map(|m| std::iter::repeat_n(m.color(), 6))
            .collect()
    }

    // === Holes ===

    /// Route hole `index` (0-based) through the given shot points, replacing
    /// any previous routing.
    ///
    /// # Panics
    /// If `index >= MAX_HOLES`, a shot point is off the grid, or the number of
    /// shot points does not match `par`.
    pub fn define_hole(&mut self, index: usize, par: Par, shot_points: &[FaceCoord]) {
        assert!(index < MAX_HOLES, "hole index {index} out of range");
        for p in shot_points {
            assert!(
                p.row < self.height && p.col < self.width,
                "shot point ({}, {}) out of range",
                p.row,
                p.col
            );
        }
        let hole = Hole::new(par, shot_points);
        log::debug!(
            "Hole {}: par {}, {:.0} yd",
            index + 1,
            par.strokes(),
            hole.length(self.xy_resolution)
        );
        self.holes[index] = Some(hole);
    }

    pub fn hole(&self, index: usize) -> Option<&Hole> {
        assert!(index < MAX_HOLES, "hole index {index} out of range");
        self.holes[index].as_ref()
    }

    /// Defined holes with their 0-based index
    pub fn holes(&self) -> impl Iterator<Item = (usize, &Hole)> {
        self.holes
            .iter()
            .enumerate()
            .filter_map(|(i, h)| h.as_ref().map(|h| (i, h)))
    }

    /// Length of a hole's routing in yards
    pub fn hole_length(&self, hole: &Hole) -> f32 {
        hole.length(self.xy_resolution)
    }

    /// Each shot point at the center of its face, on the terrain surface
    pub fn shot_point_positions(&self, hole: &Hole) -> Vec<Vec3> {
        let res = self.xy_resolution;
        hole.shot_points
            .iter()
            .map(|p| {
                let x = p.col as f32 * res + res / 2.0;
                let y = p.row as f32 * res + res / 2.0;
                Vec3::new(x, y, self.sample_height(x, y))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Every vertex seen through every face touching it reports the same elevation
    fn assert_shared_vertices_agree(t: &Heightfield) {
        for (coord, face) in t.faces() {
            for corner in Corner::ALL {
                let v = coord.corner(corner);
                assert_eq!(
                    face.elevation(corner),
                    t.vertex_elevation(v.row, v.col),
                    "face ({}, {}) {:?} disagrees with vertex ({}, {})",
                    coord.row,
                    coord.col,
                    corner,
                    v.row,
                    v.col
                );
            }
        }
    }

    #[test]
    fn test_new_terrain_is_flat_rough() {
        let t = Heightfield::new(3, 2, 10.0);
        assert_eq!(t.num_faces(), 6);
        assert_eq!(t.num_vertices(), 12);
        assert_eq!(t.vertex_width(), 4);
        assert_eq!(t.vertex_height(), 3);
        for (_, face) in t.faces() {
            assert_eq!(face.corners, [0; 4]);
            assert_eq!(face.material, Material::Rough);
        }
        assert!(t.holes().next().is_none());
    }

    #[test]
    fn test_raise_vertex_updates_all_adjacent_faces() {
        let mut t = Heightfield::new(2, 2, 10.0);
        t.raise_vertex(1, 1, 5);

        assert_eq!(t.face(0, 0).elevation(Corner::TopRight), 5);
        assert_eq!(t.face(0, 1).elevation(Corner::TopLeft), 5);
        assert_eq!(t.face(1, 1).elevation(Corner::BottomLeft), 5);
        assert_eq!(t.face(1, 0).elevation(Corner::BottomRight), 5);
        assert_shared_vertices_agree(&t);
    }

    #[test]
    fn test_raise_vertex_clamps_at_zero() {
        let mut t = Heightfield::new(1, 1, 10.0);
        t.raise_vertex(0, 0, 3);
        t.raise_vertex(0, 0, -10);
        assert_eq!(t.vertex_elevation(0, 0), 0);
        t.raise_vertex(0, 0, i32::MIN);
        assert_eq!(t.vertex_elevation(0, 0), 0);
    }

    #[test]
    fn test_raise_face_levels_low_corners_first() {
        let mut t = Heightfield::new(1, 1, 10.0);
        t.raise_vertex(1, 1, 10); // TopRight

        t.raise_face(0, 0, 3);
        assert_eq!(t.face(0, 0).corners, [3, 10, 3, 3]);

        t.raise_face(0, 0, 10);
        assert_eq!(t.face(0, 0).corners, [13, 13, 13, 13]);
    }

    #[test]
    fn test_lower_face_brings_high_corners_down_first() {
        let mut t = Heightfield::new(1, 1, 10.0);
        t.raise_face(0, 0, 10);
        t.raise_vertex(0, 0, -10); // BottomLeft back to 0

        t.raise_face(0, 0, -3);
        assert_eq!(t.face(0, 0).corners, [7, 7, 7, 0]);

        t.raise_face(0, 0, -10);
        assert_eq!(t.face(0, 0).corners, [0, 0, 0, 0]);
    }

    #[test]
    fn test_raise_face_perturbs_neighbors() {
        let mut t = Heightfield::new(3, 3, 10.0);
        t.raise_face(1, 1, 4);

        let center = t.face(1, 1);
        assert_eq!(center.corners, [4; 4]);
        // Left neighbor shares its right edge
        let left = t.face(1, 0);
        assert_eq!(left.elevation(Corner::TopRight), 4);
        assert_eq!(left.elevation(Corner::BottomRight), 4);
        assert_eq!(left.elevation(Corner::TopLeft), 0);
        // Diagonal neighbor shares one corner
        assert_eq!(t.face(2, 2).corners, [0, 0, 0, 4]);
        assert_shared_vertices_agree(&t);
    }

    #[test]
    fn test_raise_face_zero_delta_is_noop() {
        let mut t = Heightfield::new(1, 1, 10.0);
        t.raise_vertex(0, 1, 6);
        let before = t.face(0, 0);
        t.raise_face(0, 0, 0);
        assert_eq!(t.face(0, 0), before);
    }

    #[test]
    fn test_sample_height_at_vertices() {
        let mut t = Heightfield::new(2, 2, 10.0);
        t.raise_vertex(0, 1, 2);
        t.raise_vertex(1, 1, 7);
        t.raise_vertex(2, 2, 4);
        t.raise_vertex(2, 0, 9);

        for row in 0..t.vertex_height() {
            for col in 0..t.vertex_width() {
                let x = col as f32 * 10.0;
                let y = row as f32 * 10.0;
                assert_eq!(
                    t.sample_height(x, y),
                    t.vertex_elevation(row, col) as f32,
                    "vertex ({row}, {col})"
                );
            }
        }
    }

    #[test]
    fn test_sample_height_triangles() {
        let mut t = Heightfield::new(1, 1, 10.0);
        t.raise_vertex(1, 0, 10); // TopLeft only

        // Above the diagonal, the TopLeft corner contributes
        assert!((t.sample_height(0.0, 5.0) - 5.0).abs() < 1e-5);
        assert!((t.sample_height(2.0, 8.0) - 6.0).abs() < 1e-5);
        // On and below the diagonal it does not
        assert!(t.sample_height(5.0, 5.0).abs() < 1e-5);
        assert!(t.sample_height(8.0, 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_sample_height_continuous_across_face_edge() {
        let mut t = Heightfield::new(2, 1, 10.0);
        t.raise_vertex(0, 1, 6);
        t.raise_vertex(1, 1, 2);
        t.raise_vertex(1, 2, 8);

        let y = 4.0;
        let eps = 1e-3;
        let left = t.sample_height(10.0 - eps, y);
        let right = t.sample_height(10.0 + eps, y);
        assert!((left - right).abs() < 0.01, "{left} vs {right}");
        // On the shared edge the height is the linear blend of its endpoints
        let on_edge = t.sample_height(10.0, y);
        assert!((on_edge - (6.0 * 0.6 + 2.0 * 0.4)).abs() < 1e-4);
    }

    #[test]
    fn test_sample_height_far_edge() {
        let mut t = Heightfield::new(2, 2, 5.0);
        t.raise_vertex(2, 2, 3);
        assert_eq!(t.sample_height(10.0, 10.0), 3.0);
        assert!(!t.contains(10.0, 10.0));
        assert!(t.contains(9.99, 0.0));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_sample_height_out_of_bounds() {
        let t = Heightfield::new(2, 2, 10.0);
        t.sample_height(-1.0, 5.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_raise_vertex_out_of_range() {
        let mut t = Heightfield::new(2, 2, 10.0);
        t.raise_vertex(3, 0, 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_raise_face_out_of_range() {
        let mut t = Heightfield::new(2, 2, 10.0);
        t.raise_face(0, 2, 1);
    }

    #[test]
    fn test_materials() {
        let mut t = Heightfield::new(4, 4, 10.0);
        t.set_material(0, 0, Material::Tee);
        t.fill_material(1..=2, 1..=3, Material::Fairway);

        assert_eq!(t.material(0, 0), Material::Tee);
        assert_eq!(t.material(2, 3), Material::Fairway);
        assert_eq!(t.material(1, 0), Material::Rough);
        assert_eq!(t.material(3, 3), Material::Rough);
        assert_eq!(t.faces().filter(|(_, f)| f.material == Material::Fairway).count(), 6);
    }

    #[test]
    fn test_bulk_raise() {
        let mut t = Heightfield::new(4, 4, 10.0);
        t.bulk_raise_face(1..=2, 1..=2, 2);
        // Later faces find their shared corners already up and level them
        assert_eq!(t.vertex_elevation(2, 2), 2);
        assert_eq!(t.vertex_elevation(3, 3), 2);
        assert!(t.face(1, 1).is_level());
        assert!(t.face(2, 2).is_level());

        t.bulk_raise_vertex(0..=0, 0..=4, 1);
        for col in 0..=4 {
            assert_eq!(t.vertex_elevation(0, col), 1);
        }
        assert_shared_vertices_agree(&t);
    }

    #[test]
    fn test_vertex_normal() {
        let mut t = Heightfield::new(2, 2, 10.0);
        assert!((t.vertex_normal(1, 1) - Vec3::Z).length() < 1e-6);
        assert!((t.vertex_normal(0, 0) - Vec3::Z).length() < 1e-6);

        // Slope rising toward +x tilts the normal toward -x
        t.bulk_raise_vertex(0..=2, 2..=2, 10);
        let n = t.vertex_normal(1, 1);
        assert!(n.x < 0.0);
        assert!(n.y.abs() < 1e-6);
        assert!(n.z > 0.0);
        assert!((n.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_triangle_export() {
        let mut t = Heightfield::new(2, 1, 10.0);
        t.raise_vertex(1, 1, 3);
        t.set_material(0, 1, Material::Water);

        let positions = t.triangle_positions();
        let colors = t.triangle_colors();
        assert_eq!(positions.len(), 12);
        assert_eq!(colors.len(), 12);

        // Face (0, 0), triangle A starts at its TopLeft corner
        assert_eq!(positions[0], Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(positions[2], Vec3::new(10.0, 10.0, 3.0));
        // Face (0, 1), triangle A starts at the shared raised vertex
        assert_eq!(positions[6], Vec3::new(10.0, 10.0, 3.0));
        assert_eq!(colors[0], Material::Rough.color());
        assert_eq!(colors[6], Material::Water.color());
    }

    #[test]
    fn test_define_hole() {
        let mut t = Heightfield::new(20, 20, 10.0);
        t.define_hole(
            0,
            Par::Four,
            &[FaceCoord::new(0, 0), FaceCoord::new(10, 0), FaceCoord::new(10, 10)],
        );
        t.define_hole(17, Par::Three, &[FaceCoord::new(5, 5), FaceCoord::new(8, 9)]);

        let hole = t.hole(0).unwrap();
        assert_eq!(hole.par, Par::Four);
        assert!((t.hole_length(hole) - 200.0).abs() < 1e-3);
        assert!((t.hole_length(t.hole(17).unwrap()) - 50.0).abs() < 1e-3);
        assert!(t.hole(1).is_none());
        assert_eq!(t.holes().map(|(i, _)| i).collect::<Vec<_>>(), vec![0, 17]);

        let points = t.shot_point_positions(hole);
        assert_eq!(points[0], Vec3::new(5.0, 5.0, 0.0));
        assert_eq!(points[2], Vec3::new(105.0, 105.0, 0.0));
    }

    #[test]
    fn test_redefine_hole_replaces_routing() {
        let mut t = Heightfield::new(10, 10, 10.0);
        t.define_hole(3, Par::Three, &[FaceCoord::new(0, 0), FaceCoord::new(0, 9)]);
        t.define_hole(
            3,
            Par::Five,
            &[
                FaceCoord::new(0, 0),
                FaceCoord::new(3, 0),
                FaceCoord::new(6, 0),
                FaceCoord::new(9, 0),
            ],
        );
        assert_eq!(t.hole(3).unwrap().par, Par::Five);
        assert_eq!(t.holes().count(), 1);
    }

    #[test]
    #[should_panic(expected = "hole index 18 out of range")]
    fn test_define_hole_index_out_of_range() {
        let mut t = Heightfield::new(10, 10, 10.0);
        t.define_hole(18, Par::Three, &[FaceCoord::new(0, 0), FaceCoord::new(1, 1)]);
    }

    #[test]
    #[should_panic(expected = "shot point (0, 10) out of range")]
    fn test_define_hole_point_out_of_range() {
        let mut t = Heightfield::new(10, 10, 10.0);
        t.define_hole(0, Par::Three, &[FaceCoord::new(0, 0), FaceCoord::new(0, 10)]);
    }

    #[derive(Debug, Clone)]
    enum Edit {
        Face(u16, u16, i32),
        Vertex(u16, u16, i32),
    }

    const GRID: u16 = 4;

    fn edit_strategy() -> impl Strategy<Value = Edit> {
        prop_oneof![
            (0..GRID, 0..GRID, -20i32..20).prop_map(|(r, c, d)| Edit::Face(r, c, d)),
            (0..=GRID, 0..=GRID, -20i32..20).prop_map(|(r, c, d)| Edit::Vertex(r, c, d)),
        ]
    }

    proptest! {
        #[test]
        fn prop_shared_vertices_stay_equal(edits in prop::collection::vec(edit_strategy(), 1..60)) {
            let mut t = Heightfield::new(GRID, GRID, 10.0);
            for edit in edits {
                match edit {
                    Edit::Face(r, c, d) => t.raise_face(r, c, d),
                    Edit::Vertex(r, c, d) => t.raise_vertex(r, c, d),
                }
            }
            assert_shared_vertices_agree(&t);
        }

        #[test]
        fn prop_raise_vertex_clamps(start in 0i32..50, delta in -100i32..100) {
            let mut t = Heightfield::new(1, 1, 10.0);
            t.raise_vertex(0, 0, start);
            t.raise_vertex(0, 0, delta);
            prop_assert_eq!(t.vertex_elevation(0, 0) as i32, (start + delta).max(0));
        }

        #[test]
        fn prop_raise_face_is_monotonic(
            corners in prop::array::uniform4(0i32..30),
            delta in -40i32..40,
        ) {
            let mut t = Heightfield::new(1, 1, 10.0);
            for (corner, z) in Corner::ALL.into_iter().zip(corners) {
                let v = FaceCoord::new(0, 0).corner(corner);
                t.raise_vertex(v.row, v.col, z);
            }
            let before = t.face(0, 0);
            t.raise_face(0, 0, delta);
            let after = t.face(0, 0);

            for corner in Corner::ALL {
                let (b, a) = (before.elevation(corner) as i32, after.elevation(corner) as i32);
                if delta >= 0 {
                    prop_assert!(a >= b && a - b <= delta);
                } else {
                    prop_assert!(a <= b && b - a <= -delta);
                }
            }

            let span = (before.max_elevation() - before.min_elevation()) as i32;
            if delta.abs() >= span {
                prop_assert!(after.is_level());
                let expected = if delta >= 0 {
                    before.min_elevation() as i32 + delta
                } else {
                    (before.max_elevation() as i32 + delta).max(0)
                };
                prop_assert_eq!(after.min_elevation() as i32, expected);
            }
        }
    }
}
