//! Beeswarm packing by fixed-budget force relaxation.
//!
//! Each sample wants its x at the pixel projection of its value and its y on
//! a shared baseline; a pairwise separation pass pushes apart any two marks
//! whose centers sit closer than one diameter. The simulation runs a fixed
//! number of ticks with a cooling attraction, so the output is an approximate
//! packing: overlap is minimized, not forbidden.

use crate::error::{Error, Result};
use crate::scale::LinearScale;

/// Attraction cooling applied per tick.
const COOLING: f32 = 0.95;

/// Cap on the per-tick attraction fraction. A fraction of 1.0 would snap a
/// point exactly onto its target, erasing the same tick's separation
/// displacement (and the initial jitter that breaks ties between identical
/// values), so separation could never win on the x axis.
const MAX_PULL: f32 = 0.9;

/// Separation sweeps per tick. One sweep resolves each overlapping pair
/// once but can re-violate pairs it already visited; a few extra sweeps let
/// larger clusters reach non-overlap inside the fixed tick budget.
const SEPARATION_PASSES: usize = 3;

/// One sample's working and final state in the swarm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwarmPoint {
    /// Target position on the value axis, in pixels.
    pub target_x: f32,
    /// Resolved horizontal position, in pixels.
    pub x: f32,
    /// Resolved vertical position, in pixels.
    pub y: f32,
}

/// Force-relaxation policy for the swarm layout.
#[derive(Debug, Clone, Copy)]
pub struct Swarm {
    radius_px: f32,
    iterations: usize,
    x_strength: f32,
    y_strength: f32,
}

impl Default for Swarm {
    fn default() -> Self {
        Self::new()
    }
}

impl Swarm {
    /// Create a swarm with the default policy: 7 px marks, 120 ticks,
    /// x pull at strength 1.0 and baseline pull at strength 0.1.
    #[must_use]
    pub fn new() -> Self {
        Self { radius_px: 7.0, iterations: 120, x_strength: 1.0, y_strength: 0.1 }
    }

    /// Set the mark radius in pixels.
    #[must_use]
    pub fn radius(mut self, radius_px: f32) -> Self {
        self.radius_px = radius_px;
        self
    }

    /// Set the tick budget. The simulation always runs the full budget;
    /// there is no convergence check.
    #[must_use]
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the pull strength toward each sample's value projection.
    #[must_use]
    pub fn x_strength(mut self, strength: f32) -> Self {
        self.x_strength = strength;
        self
    }

    /// Set the pull strength toward the shared baseline.
    #[must_use]
    pub fn y_strength(mut self, strength: f32) -> Self {
        self.y_strength = strength;
        self
    }

    /// Relax `values` into 2-D positions, one per sample, in input order.
    ///
    /// `baseline_y` is the resting row; `extent` is the drawable
    /// `(width, height)` both axes are clamped into during relaxation so no
    /// tick can push a mark off the canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if the mark radius is not positive.
    pub fn layout(
        &self,
        values: &[f32],
        scale: &LinearScale,
        baseline_y: f32,
        extent: (f32, f32),
    ) -> Result<Vec<SwarmPoint>> {
        if self.radius_px <= 0.0 {
            return Err(Error::InvalidRadius { radius: self.radius_px });
        }

        let (width, height) = extent;
        let mut points: Vec<SwarmPoint> = values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let target_x = scale.scale(value);
                // Deterministic pseudo-random jitter to break ties between
                // identical values; no RNG dependency needed.
                let seed = i.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                let jx = (seed % 1000) as f32 / 1000.0 - 0.5;
                let jy = ((seed / 1000) % 1000) as f32 / 1000.0 - 0.5;
                SwarmPoint { target_x, x: target_x + jx, y: baseline_y + jy }
            })
            .collect();

        let min_dist = 2.0 * self.radius_px;
        let mut alpha = 1.0_f32;

        for _ in 0..self.iterations {
            // Attraction toward the value projection and the baseline,
            // cooled so late ticks are dominated by separation. The pull
            // fraction is capped below 1.0 so the separation displacement
            // of the previous tick is never erased outright.
            let pull_x = (self.x_strength * alpha).min(MAX_PULL);
            let pull_y = (self.y_strength * alpha).min(MAX_PULL);
            for point in &mut points {
                point.x += (point.target_x - point.x) * pull_x;
                point.y += (baseline_y - point.y) * pull_y;
            }

            // Pairwise separation: any two centers closer than one diameter
            // are pushed apart along their connecting line, split evenly.
            // Swept a few times per tick so dense clusters converge.
            for _ in 0..SEPARATION_PASSES {
                for i in 0..points.len() {
                    for j in (i + 1)..points.len() {
                        let dx = points[j].x - points[i].x;
                        let dy = points[j].y - points[i].y;
                        let dist = (dx * dx + dy * dy).sqrt();
                        if dist >= min_dist {
                            continue;
                        }
                        let (ux, uy) = if dist > 1e-6 {
                            (dx / dist, dy / dist)
                        } else {
                            // coincident centers: separate along a fixed axis
                            (0.0, 1.0)
                        };
                        let push = (min_dist - dist) / 2.0;
                        points[i].x -= ux * push;
                        points[i].y -= uy * push;
                        points[j].x += ux * push;
                        points[j].y += uy * push;
                    }
                }
            }

            // Keep marks on the canvas while forces are active.
            for point in &mut points {
                point.x = point.x.clamp(0.0, width);
                point.y = point.y.clamp(0.0, height);
            }

            alpha *= COOLING;
        }

        Ok(points)
    }
}
