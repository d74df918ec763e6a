// error.rs - Error types for the grid and its configuration

use std::path::PathBuf;
use thiserror::Error;

/// Grid access outside `[0, rows) x [0, cols)`.
///
/// Valid callers never see this: pointer positions are mapped through
/// `Settings::cell_at`, which clamps to the grid extents.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Settings that cannot produce a grid. Fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cell size must be greater than zero")]
    ZeroCellSize,

    #[error("window dimensions must be non-zero (got {width}x{height})")]
    ZeroDimension { width: u32, height: u32 },

    #[error("cell size {cell_size} does not evenly divide the window {axis} of {extent} px")]
    CellSizeMismatch {
        axis: &'static str,
        extent: u32,
        cell_size: u32,
    },

    #[error("border thickness must be a finite, non-negative number (got {0})")]
    InvalidBorderThickness(f32),

    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
