//! S2 cell geometry for lat/lng map overlays.
//!
//! This crate implements the cube-sphere cell grid used to overlay game
//! metadata on a map: a geographic point is projected onto one of six
//! cube faces, warped toward equal cell areas, and quantized onto an
//! integer grid at a subdivision level. Cells know their canonical string
//! key, center, corner polygon, and axis neighbors, with cube-edge
//! wraparound handled by reprojection rather than a face-adjacency table.
//!
//! # Pipeline
//!
//! ```text
//! LatLng -> XYZ -> (face, UV) -> ST -> IJ ──────────────┐
//!                                                       ▼
//!                       Cell { face, i, j, level } ── key "F{f}ij[{i},{j}]@{l}"
//!                                                       │
//!            center / corners (inverse pipeline) ◄──────┤
//!            neighbors (face-wrap aware)         ◄──────┤
//!            Hilbert quadrant path (diagnostic)  ◄──────┘
//! ```
//!
//! On top of the pure geometry sit two thin consumers: [`cover_bounds`]
//! flood-fills the cells intersecting a map view, and [`PortalStore`]
//! buckets classified points per cell for aggregation.
//!
//! The geometry is total and stateless: no validation, no errors, no
//! shared state, safe to call from any number of threads. Errors exist
//! only at the store and configuration boundary.
//!
//! # Modules
//!
//! - [`geometry`]: coordinate transforms and bounding boxes
//! - [`cell`]: the `Cell` value type
//! - [`hilbert`]: quadrant-path automaton
//! - [`covering`]: bounding-box flood fill
//! - [`store`]: portal repository and per-cell grouping
//! - [`config`]: covering and grid configuration
//! - [`error`]: error types

pub mod cell;
pub mod config;
pub mod covering;
pub mod error;
pub mod geometry;
pub mod hilbert;
pub mod store;

pub use cell::{Cell, AXIS_DELTAS};
pub use config::{CoveringConfig, GridConfig, MAX_LEVEL};
pub use covering::cover_bounds;
pub use error::{CellGridError, Result};
pub use geometry::{LatLng, LatLngBounds};
pub use store::{CellGroup, Classification, Portal, PortalRecord, PortalStore};
