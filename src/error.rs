//! Error types for distviz operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in distviz operations.
///
/// Degenerate *data* states (empty sample set, zero variance, out-of-range
/// inputs) are recovered locally with defined fallbacks and never surface
/// here; these variants cover caller parameters that have no neutral reading.
#[derive(Error, Debug)]
pub enum Error {
    /// Scale domain error (e.g., zero-width domain).
    #[error("Scale domain error: {0}")]
    ScaleDomain(String),

    /// Non-positive or out-of-range grid step for a density curve.
    #[error("Invalid grid step: {step} (must be in (0, 1])")]
    InvalidGridStep {
        /// The rejected step value.
        step: f32,
    },

    /// Band count of zero requested from the band encoder.
    #[error("Invalid band count: at least one band is required")]
    InvalidBandCount,

    /// Non-positive mark radius for a packing layout.
    #[error("Invalid mark radius: {radius} (must be positive)")]
    InvalidRadius {
        /// The rejected radius in pixels.
        radius: f32,
    },
}
