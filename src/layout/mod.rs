//! Packing and encoding layouts derived from the distribution.
//!
//! Everything in this family is ephemeral: produced fresh per layout request
//! from the current samples and geometry, handed to the renderer, discarded.

mod band;
mod dotplot;
mod swarm;

pub use band::{Band, BandEncoder};
pub use dotplot::{pack, DotBin, DotPlot, DotPlotLayout};
pub use swarm::{Swarm, SwarmPoint};
