//! The S2 cell value type.
//!
//! A [`Cell`] is an immutable `(face, i, j, level)` tuple identifying one
//! region of the cube-sphere grid. Identity uses the raw fields rather
//! than a packed Hilbert-position integer: two cells are equal iff face,
//! i, j, and level all match, and the canonical string key doubles as the
//! map key callers group points under.
//!
//! All derived data (center, corners, neighbors, bounds) is computed
//! fresh from the three immutable fields; there is no cached state.

use crate::geometry::{self, LatLng, LatLngBounds};
use crate::hilbert;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grid-axis neighbor deltas: left, up, right, down (j decreases upward).
pub const AXIS_DELTAS: [(i32, i32); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// A cell of the cube-sphere grid at a subdivision level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    /// Cube face, in `[0, 6)`.
    pub face: u8,
    /// Grid column, in `[0, 2^level)`.
    pub i: u32,
    /// Grid row, in `[0, 2^level)`.
    pub j: u32,
    /// Subdivision level; level 0 is the whole face.
    pub level: u8,
}

impl Cell {
    /// The cell containing a geographic point at the given level.
    pub fn from_latlng(point: LatLng, level: u8) -> Self {
        let xyz = geometry::latlng_to_xyz(point);
        let (face, uv) = geometry::xyz_to_face_uv(xyz);
        let st = geometry::uv_to_st(uv);
        let (i, j) = geometry::st_to_ij(st, level);

        Self { face, i, j, level }
    }

    /// Construct directly from grid coordinates.
    pub fn from_face_ij(face: u8, i: u32, j: u32, level: u8) -> Self {
        Self { face, i, j, level }
    }

    /// Canonical string key, `"F{face}ij[{i},{j}]@{level}"`.
    ///
    /// Stable across runs; callers use it to bucket points into cells.
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Point at a fractional (i, j) offset within the cell.
    fn latlng_at(&self, offsets: (f64, f64)) -> LatLng {
        let st = geometry::ij_to_st(self.i as i64, self.j as i64, self.level, offsets);
        let uv = geometry::st_to_uv(st);
        let xyz = geometry::face_uv_to_xyz(self.face, uv);

        geometry::xyz_to_latlng(xyz)
    }

    /// Center of the cell.
    pub fn center(&self) -> LatLng {
        self.latlng_at((0.5, 0.5))
    }

    /// The four corner points, in fixed winding order around the cell
    /// boundary in (s, t) space.
    pub fn corners(&self) -> [LatLng; 4] {
        [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)].map(|offsets| self.latlng_at(offsets))
    }

    /// Lat/lng-aligned bounding box of the corner points.
    pub fn bounds(&self) -> LatLngBounds {
        let corners = self.corners();
        let mut bounds = LatLngBounds::point(corners[0]);
        for corner in &corners[1..] {
            bounds.extend(*corner);
        }
        bounds
    }

    /// The four cells adjacent along the grid axes.
    pub fn neighbors(&self) -> [Cell; 4] {
        AXIS_DELTAS.map(|(di, dj)| self.neighbor_at(di, dj))
    }

    /// Neighbors at caller-supplied (di, dj) deltas.
    ///
    /// Always returns exactly as many cells as deltas supplied.
    pub fn neighbors_with(&self, deltas: &[(i32, i32)]) -> Vec<Cell> {
        deltas
            .iter()
            .map(|&(di, dj)| self.neighbor_at(di, dj))
            .collect()
    }

    fn neighbor_at(&self, di: i32, dj: i32) -> Cell {
        Self::from_face_ij_wrap(
            self.face,
            self.i as i64 + di as i64,
            self.j as i64 + dj as i64,
            self.level,
        )
    }

    /// Resolve possibly out-of-range grid coordinates to a cell.
    ///
    /// In range, this is a plain constructor. Out of range, the position
    /// lies on an adjacent cube face: treat the candidate center as a
    /// point just beyond this face's edge, embed it through the current
    /// face into XYZ, re-derive the face by the dominant-axis rule, and
    /// re-quantize in the new face's frame. This avoids a hardcoded
    /// face-adjacency table; it assumes the coordinates are only slightly
    /// past the border, which holds for unit-step deltas.
    fn from_face_ij_wrap(face: u8, i: i64, j: i64, level: u8) -> Cell {
        let max_size = 1i64 << level;
        if i >= 0 && j >= 0 && i < max_size && j < max_size {
            return Cell::from_face_ij(face, i as u32, j as u32, level);
        }

        let st = geometry::ij_to_st(i, j, level, (0.5, 0.5));
        let uv = geometry::st_to_uv(st);
        let xyz = geometry::face_uv_to_xyz(face, uv);
        let (face, uv) = geometry::xyz_to_face_uv(xyz);
        let st = geometry::uv_to_st(uv);
        let (i, j) = geometry::st_to_ij(st, level);

        Cell { face, i, j, level }
    }

    /// Face plus Hilbert quadrant digits, the traditional position-along-
    /// curve form. Diagnostic; identity does not depend on it.
    pub fn quad_path(&self) -> (u8, Vec<u8>) {
        (self.face, hilbert::quad_path(self.i, self.j, self.level))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}ij[{},{}]@{}", self.face, self.i, self.j, self.level)
    }
}
