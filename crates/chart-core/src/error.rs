// File: crates/chart-core/src/error.rs
// Summary: Error type shared by the core crate.

use thiserror::Error;

/// Errors surfaced by chart construction and export.
///
/// Degenerate data (fewer than two samples, flat series) is not an error;
/// it is handled by the placeholder frame and the scale padding rules.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("sample {index} has a non-finite value ({value})")]
    NonFiniteValue { index: usize, value: f64 },

    #[error("invalid surface size {width}x{height}")]
    InvalidSurface { width: f64, height: f64 },

    #[error("failed to write chart output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
