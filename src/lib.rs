//! # distviz
//!
//! Incremental distribution model with layout-ready statistical
//! representations for `[0, 1]` samples.
//!
//! One sample at a time is absorbed into a growing [`Distribution`]; from it
//! the crate derives, on demand, everything a renderer needs to draw the
//! classic small-multiples of a distribution: a bandwidth-adaptive kernel
//! density curve, quantile/histogram summaries, a greedy dot-plot packing, a
//! force-relaxed beeswarm packing, and a quantized two-tone band encoding.
//! The rendering itself (SVG, canvas, terminal) is deliberately not here —
//! display geometry is passed into each layout call and nothing about a
//! windowing system leaks in.
//!
//! ## Quick Start
//!
//! ```rust
//! use distviz::prelude::*;
//!
//! let mut dist = Distribution::new();
//! for v in [0.21, 0.35, 0.34, 0.8] {
//!     dist.add_sample(v);
//! }
//!
//! let scale = LinearScale::unit(640.0)?;
//! let summary = dist.summary();
//! let dots = dist.dot_plot(&DotPlot::new(), 100.0, &scale)?;
//! let swarm = dist.swarm(&Swarm::new(), &scale, 50.0, (640.0, 100.0))?;
//! let bands = dist.bands(&BandEncoder::new())?;
//! # assert_eq!(swarm.len(), 4);
//! # Ok::<(), distviz::Error>(())
//! ```
//!
//! ## Design
//!
//! - A new sample retunes the smoothing bandwidth of *every* kernel, not
//!   just its own: the bandwidth lives once on the model and evolves with
//!   the whole set, so previously computed curves go stale on each insert.
//! - Every derived representation is recomputed whole per request; nothing
//!   is cached, and empty or zero-spread sample sets resolve to defined
//!   neutral results instead of errors.
//!
//! ## Academic References
//!
//! - Silverman, B. W. (1986). *Density Estimation for Statistics and Data
//!   Analysis* (rule-of-thumb bandwidth).
//! - Sturges, H. A. (1926). "The Choice of a Class Interval" (histogram bins).
//! - Wilkinson, L. (1999). "Dot Plots." *The American Statistician* (greedy
//!   dot-plot binning).

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in layout/statistics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Append-only sample storage.
pub mod samples;

/// Kernel density estimation with a shared bandwidth.
pub mod kde;

/// Quantile, mean, confidence-interval, and histogram snapshots.
pub mod summary;

/// Value-to-pixel scale passed into layout calls.
pub mod scale;

// ============================================================================
// Layout Modules
// ============================================================================

/// Packing and encoding layouts (dot plot, swarm, bands).
pub mod layout;

/// The distribution facade tying samples, density, and layouts together.
pub mod distribution;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for distviz operations.
pub mod error;

pub use distribution::Distribution;
pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```rust
/// use distviz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::distribution::Distribution;
    pub use crate::error::{Error, Result};
    pub use crate::kde::{DensityModel, Kernel, SilvermanBandwidth};
    pub use crate::layout::{Band, BandEncoder, DotBin, DotPlot, DotPlotLayout, Swarm, SwarmPoint};
    pub use crate::samples::SampleSet;
    pub use crate::scale::LinearScale;
    pub use crate::summary::{HistogramBins, Quartiles, Summary};
}
