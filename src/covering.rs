//! Bounding-box covering generation.
//!
//! Flood-fills the cell grid outward from the cell containing the center
//! of a bounding box, keeping every cell whose corner bbox intersects the
//! query bounds. Because intersecting cells form a connected region on
//! the grid (neighbor expansion crosses cube-face edges transparently),
//! the traversal visits each boundary cell once and stops one ring past
//! the box.

use crate::cell::Cell;
use crate::config::CoveringConfig;
use crate::geometry::LatLngBounds;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Collect the cells at `config.level` that intersect `bounds`.
///
/// Cells come back in breadth-first discovery order from the center
/// outward. With `config.max_cells` nonzero, traversal stops once that
/// many cells have been collected; 0 means unlimited.
pub fn cover_bounds(bounds: &LatLngBounds, config: &CoveringConfig) -> Vec<Cell> {
    let seed = Cell::from_latlng(bounds.center(), config.level);

    let mut seen = FxHashSet::default();
    let mut queue = VecDeque::new();
    let mut kept = Vec::new();
    let mut visited = 0usize;

    seen.insert(seed);
    queue.push_back(seed);

    while let Some(cell) = queue.pop_front() {
        if config.max_cells != 0 && kept.len() >= config.max_cells {
            break;
        }
        visited += 1;

        if !cell.bounds().intersects(bounds) {
            continue;
        }
        kept.push(cell);

        for neighbor in cell.neighbors() {
            if seen.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!(
        level = config.level,
        visited,
        kept = kept.len(),
        "covered bounds"
    );

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::LatLng;

    fn nyc_bounds() -> LatLngBounds {
        LatLngBounds::new(40.744, -73.992, 40.753, -73.979)
    }

    #[test]
    fn test_covering_contains_center_cell() {
        let bounds = nyc_bounds();
        let config = CoveringConfig::new(14);
        let cells = cover_bounds(&bounds, &config);

        let center_cell = Cell::from_latlng(bounds.center(), 14);
        assert!(cells.contains(&center_cell));
    }

    #[test]
    fn test_covering_cells_intersect_and_are_unique() {
        let bounds = nyc_bounds();
        let config = CoveringConfig::new(15);
        let cells = cover_bounds(&bounds, &config);

        assert!(!cells.is_empty());
        let mut keys = FxHashSet::default();
        for cell in &cells {
            assert!(cell.bounds().intersects(&bounds), "{cell} misses bounds");
            assert!(keys.insert(cell.key()), "duplicate cell {cell}");
        }
    }

    #[test]
    fn test_finer_level_yields_more_cells() {
        let bounds = nyc_bounds();
        let coarse = cover_bounds(&bounds, &CoveringConfig::new(13));
        let fine = cover_bounds(&bounds, &CoveringConfig::new(16));
        assert!(fine.len() > coarse.len());
    }

    #[test]
    fn test_max_cells_limits_output() {
        let bounds = nyc_bounds();
        let config = CoveringConfig::new(17).with_max_cells(5);
        let cells = cover_bounds(&bounds, &config);
        assert_eq!(cells.len(), 5);
    }

    #[test]
    fn test_tiny_bounds_single_cell() {
        // A box well inside one level-10 cell covers exactly that cell.
        let p = LatLng::new(40.7484, -73.9857);
        let cell = Cell::from_latlng(p, 10);
        let center = cell.center();
        let bounds = LatLngBounds::new(
            center.lat - 1e-6,
            center.lng - 1e-6,
            center.lat + 1e-6,
            center.lng + 1e-6,
        );

        let cells = cover_bounds(&bounds, &CoveringConfig::new(10));
        assert_eq!(cells, vec![cell]);
    }

    #[test]
    fn test_covering_spans_face_edges() {
        // Bounds straddling lng 45 on the equator sit on a cube-face
        // edge; the flood fill must cross onto multiple faces.
        let bounds = LatLngBounds::new(-0.5, 44.5, 0.5, 45.5);
        let cells = cover_bounds(&bounds, &CoveringConfig::new(8));

        let faces: FxHashSet<u8> = cells.iter().map(|c| c.face).collect();
        assert!(faces.len() > 1, "expected multiple faces, got {faces:?}");
    }
}
