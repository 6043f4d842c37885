//! Error types for the cell grid.
//!
//! The geometry core is a total function library and never fails; errors
//! exist only at the store and configuration boundary.

use thiserror::Error;

/// Cell grid errors.
#[derive(Error, Debug)]
pub enum CellGridError {
    /// No portal with the given GUID in the store.
    #[error("portal not found: {guid}")]
    PortalNotFound { guid: String },

    /// A portal with the given GUID is already in the store.
    #[error("duplicate portal: {guid}")]
    DuplicatePortal { guid: String },

    /// Cell level outside the supported S2 range.
    #[error("invalid cell level: {level} (S2 levels are 0-30)")]
    InvalidLevel { level: u8 },

    /// Snapshot serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for cell grid operations.
pub type Result<T> = std::result::Result<T, CellGridError>;
