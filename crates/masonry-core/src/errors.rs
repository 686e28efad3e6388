//! Error types for the masonry engine.

use thiserror::Error;

/// Top-level error type for the masonry engine.
#[derive(Debug, Error)]
pub enum MasonryError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Errors in layout configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Gap must be a finite, non-negative number of pixels, got {value}")]
    InvalidGap { value: f64 },

    #[error("Padding must be a finite, non-negative number of pixels, got {value}")]
    InvalidPadding { value: f64 },

    #[error("Default height for {platform} must be positive, got {value}")]
    InvalidDefaultHeight { platform: String, value: f64 },

    #[error("Column count must be at least 1, got {value}")]
    InvalidColumnCount { value: i32 },

    #[error("Breakpoint list is empty")]
    EmptyBreakpoints,

    #[error("Breakpoint at {min_width}px has invalid column count {columns}")]
    InvalidBreakpoint { min_width: f64, columns: i32 },

    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Caller contract violations detected by checked layout entry points.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Container width must be finite and positive, got {width}")]
    InvalidContainerWidth { width: f64 },

    #[error("Container width {container_width}px leaves a column width of {column_width}px for {columns} columns")]
    ContainerTooNarrow {
        container_width: f64,
        column_width: f64,
        columns: i32,
    },
}
