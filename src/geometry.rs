//! Coordinate transforms for the cube-sphere projection.
//!
//! The forward pipeline runs a geographic point through successive
//! coordinate spaces:
//!
//! ```text
//! LatLng -> XYZ (unit sphere) -> (face, UV) -> ST -> IJ (integer grid)
//! ```
//!
//! and the inverse runs the same spaces backwards for cell centers and
//! corners. The per-face UV embedding tables are a fixed contract: the
//! cube-edge wraparound in neighbor computation depends on the forward and
//! inverse tables being exact algebraic inverses of one another, so they
//! must not be re-derived with different sign conventions.
//!
//! All transforms are pure and total. Out-of-range input produces
//! geometrically meaningless output rather than an error.

use serde::{Deserialize, Serialize};

/// A geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees, nominally [-90, 90].
    pub lat: f64,
    /// Longitude in degrees, nominally [-180, 180].
    pub lng: f64,
}

impl LatLng {
    /// Create a new point.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A lat/lng-aligned bounding rectangle.
///
/// No longitude wrapping: a box spanning the antimeridian is not
/// representable, matching the map-view bounds this type stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl LatLngBounds {
    /// Create a new bounding rectangle.
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    /// Degenerate bounds covering a single point.
    pub fn point(p: LatLng) -> Self {
        Self {
            south: p.lat,
            west: p.lng,
            north: p.lat,
            east: p.lng,
        }
    }

    /// Grow the bounds to include a point.
    pub fn extend(&mut self, p: LatLng) {
        self.south = self.south.min(p.lat);
        self.north = self.north.max(p.lat);
        self.west = self.west.min(p.lng);
        self.east = self.east.max(p.lng);
    }

    /// Check if the bounds contain a point.
    pub fn contains(&self, p: LatLng) -> bool {
        p.lat >= self.south && p.lat <= self.north && p.lng >= self.west && p.lng <= self.east
    }

    /// Check if the bounds intersect another.
    pub fn intersects(&self, other: &LatLngBounds) -> bool {
        self.south <= other.north
            && self.north >= other.south
            && self.west <= other.east
            && self.east >= other.west
    }

    /// Midpoint of the bounds.
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }
}

/// Convert a geographic point to a unit-sphere Cartesian vector.
pub(crate) fn latlng_to_xyz(p: LatLng) -> [f64; 3] {
    let phi = p.lat.to_radians();
    let theta = p.lng.to_radians();
    let cos_phi = phi.cos();

    [theta.cos() * cos_phi, theta.sin() * cos_phi, phi.sin()]
}

/// Convert a Cartesian vector back to a geographic point.
pub(crate) fn xyz_to_latlng(xyz: [f64; 3]) -> LatLng {
    let lat = xyz[2].atan2((xyz[0] * xyz[0] + xyz[1] * xyz[1]).sqrt());
    let lng = xyz[1].atan2(xyz[0]);

    LatLng::new(lat.to_degrees(), lng.to_degrees())
}

/// Index of the axis with the largest absolute value.
///
/// Ties resolve to the later axis, matching the strict comparisons below.
fn largest_abs_component(xyz: [f64; 3]) -> usize {
    let t = [xyz[0].abs(), xyz[1].abs(), xyz[2].abs()];

    if t[0] > t[1] {
        if t[0] > t[2] {
            return 0;
        }
        return 2;
    }

    if t[1] > t[2] {
        return 1;
    }

    2
}

/// Project a vector onto a face's local (u, v) plane.
///
/// One case per face; the sign conventions here and in [`face_uv_to_xyz`]
/// are a matched pair.
fn face_xyz_to_uv(face: u8, xyz: [f64; 3]) -> (f64, f64) {
    let [x, y, z] = xyz;

    match face {
        0 => (y / x, z / x),
        1 => (-x / y, z / y),
        2 => (-x / z, -y / z),
        3 => (z / x, y / x),
        4 => (z / y, -x / y),
        _ => (-y / z, -x / z),
    }
}

/// Pick the face containing a vector and project onto it.
///
/// The face is the dominant axis, offset by 3 when that component is
/// negative (3 positive-axis faces plus 3 negative-axis faces).
pub(crate) fn xyz_to_face_uv(xyz: [f64; 3]) -> (u8, (f64, f64)) {
    let mut face = largest_abs_component(xyz) as u8;

    if xyz[face as usize] < 0.0 {
        face += 3;
    }

    (face, face_xyz_to_uv(face, xyz))
}

/// Embed face-local (u, v) back into Cartesian space.
///
/// Exact algebraic inverse of [`face_xyz_to_uv`] (up to the dominant-axis
/// scale, which the lat/lng conversion normalizes away).
pub(crate) fn face_uv_to_xyz(face: u8, uv: (f64, f64)) -> [f64; 3] {
    let (u, v) = uv;

    match face {
        0 => [1.0, u, v],
        1 => [-u, 1.0, v],
        2 => [-u, -v, 1.0],
        3 => [-1.0, -v, -u],
        4 => [v, -1.0, -u],
        _ => [v, u, -1.0],
    }
}

/// Quadratic warp from the unit square to face coordinates, one axis.
pub(crate) fn st_to_uv_1d(st: f64) -> f64 {
    if st >= 0.5 {
        (1.0 / 3.0) * (4.0 * st * st - 1.0)
    } else {
        (1.0 / 3.0) * (1.0 - 4.0 * (1.0 - st) * (1.0 - st))
    }
}

/// Inverse warp from face coordinates to the unit square, one axis.
///
/// Closed-form inverse of [`st_to_uv_1d`]; the pair must round-trip to
/// within 1e-9 for quantization to stay consistent.
pub(crate) fn uv_to_st_1d(uv: f64) -> f64 {
    if uv >= 0.0 {
        0.5 * (1.0 + 3.0 * uv).sqrt()
    } else {
        1.0 - 0.5 * (1.0 - 3.0 * uv).sqrt()
    }
}

/// Warp both axes of an ST pair to UV.
pub(crate) fn st_to_uv(st: (f64, f64)) -> (f64, f64) {
    (st_to_uv_1d(st.0), st_to_uv_1d(st.1))
}

/// Warp both axes of a UV pair to ST.
pub(crate) fn uv_to_st(uv: (f64, f64)) -> (f64, f64) {
    (uv_to_st_1d(uv.0), uv_to_st_1d(uv.1))
}

/// Quantize ST to the integer grid at a level.
///
/// Clamping handles the s = 1.0 boundary, which would otherwise land one
/// past the last row.
pub(crate) fn st_to_ij(st: (f64, f64), level: u8) -> (u32, u32) {
    let max_size = 1i64 << level;

    let quantize = |st: f64| -> u32 {
        let ij = (st * max_size as f64).floor() as i64;
        ij.clamp(0, max_size - 1) as u32
    };

    (quantize(st.0), quantize(st.1))
}

/// Reconstruct ST from grid coordinates plus a fractional offset.
///
/// Takes signed coordinates: neighbor wraparound probes positions one step
/// outside the `[0, 2^level)` range.
pub(crate) fn ij_to_st(i: i64, j: i64, level: u8, offsets: (f64, f64)) -> (f64, f64) {
    let max_size = (1i64 << level) as f64;

    (
        (i as f64 + offsets.0) / max_size,
        (j as f64 + offsets.1) / max_size,
    )
}
