//! Grid configuration types.
//!
//! Defines configuration for covering generation and multi-level grid
//! rendering.

use crate::error::{CellGridError, Result};
use serde::{Deserialize, Serialize};

/// Highest subdivision level representable in the integer grid.
pub const MAX_LEVEL: u8 = 30;

/// Configuration for bounding-box covering generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoveringConfig {
    /// S2 cell level (0-30). Higher = finer cells.
    /// Default: 14 (roughly one city block per cell)
    pub level: u8,

    /// Maximum number of cells in a covering; 0 means unlimited.
    /// Traversal stops once this many cells have been collected.
    /// Default: 0
    pub max_cells: usize,
}

impl Default for CoveringConfig {
    fn default() -> Self {
        Self {
            level: 14,
            max_cells: 0,
        }
    }
}

impl CoveringConfig {
    /// Create a config for the given level with no cell limit.
    pub fn new(level: u8) -> Self {
        Self {
            level,
            max_cells: 0,
        }
    }

    /// Set the cell level.
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    /// Set the maximum cell count (0 = unlimited).
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// Check that the level fits the integer grid.
    ///
    /// The geometry itself performs no validation; this is the boundary
    /// check for callers that accept levels from configuration.
    pub fn validate(&self) -> Result<()> {
        if self.level > MAX_LEVEL {
            return Err(CellGridError::InvalidLevel { level: self.level });
        }
        Ok(())
    }
}

/// Configuration for rendering several grid levels at once.
///
/// Callers that draw more than one overlay (e.g. a coarse and a fine grid)
/// hold one of these instead of hardcoding levels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Levels to render, coarsest first.
    pub levels: Vec<u8>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            levels: vec![14, 17],
        }
    }
}

impl GridConfig {
    /// Check that every level fits the integer grid.
    pub fn validate(&self) -> Result<()> {
        for &level in &self.levels {
            if level > MAX_LEVEL {
                return Err(CellGridError::InvalidLevel { level });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CoveringConfig::default();
        assert_eq!(config.level, 14);
        assert_eq!(config.max_cells, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = CoveringConfig::new(17).with_max_cells(64);
        assert_eq!(config.level, 17);
        assert_eq!(config.max_cells, 64);
    }

    #[test]
    fn test_invalid_level() {
        let config = CoveringConfig::new(31);
        assert!(matches!(
            config.validate(),
            Err(CellGridError::InvalidLevel { level: 31 })
        ));

        let grid = GridConfig {
            levels: vec![14, 40],
        };
        assert!(grid.validate().is_err());
    }
}
