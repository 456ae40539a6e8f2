//! Per-tether tuning: segment length, length budget, solver effort.

use crate::error::TetherError;
use crate::float::Float;

/// What happens to the free end's velocity when the tether goes taut.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TautPolicy {
    /// Zero the whole velocity.
    #[default]
    Arrest,
    /// Remove only the outward radial component, keeping tangential motion
    /// so the body can swing around the anchor.
    Radial,
}

/// Configuration for a single tether.
///
/// `segment_length` and the particle count it implies are fixed when a chain
/// is built. `max_length` can only grow, through [`TetherConfig::extend`].
///
/// # Builder Pattern
/// ```
/// use tether::config::{TautPolicy, TetherConfig};
///
/// let config: TetherConfig<f32> = TetherConfig::new()
///     .with_segment_length(20.0)
///     .with_max_length(320.0)
///     .with_relax_iterations(4)
///     .with_pull_strength(0.02)
///     .with_taut_policy(TautPolicy::Radial);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TetherConfig<F: Float> {
    /// Rest separation between neighbouring particles. Default: 20.
    pub segment_length: F,
    /// Longest allowed anchor-to-free-end distance. Default: 320.
    pub max_length: F,
    /// Relaxation passes per tick. More = stiffer rope. Default: 4.
    pub relax_iterations: usize,
    /// Coefficient of the reeling-in nudge added to the free end's velocity. Default: 0.02.
    pub pull_strength: F,
    /// Velocity handling when the length clamp engages. Default: `Arrest`.
    pub taut_policy: TautPolicy,
    /// Length added per upgrade level. Default: 150.
    pub upgrade_step: F,
}

impl<F: Float> TetherConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        TetherConfig {
            segment_length: F::from_f32(20.0),
            max_length: F::from_f32(320.0),
            relax_iterations: 4,
            pull_strength: F::from_f32(0.02),
            taut_policy: TautPolicy::Arrest,
            upgrade_step: F::from_f32(150.0),
        }
    }

    /// Set the rest length of each segment.
    pub fn with_segment_length(mut self, segment_length: F) -> Self {
        self.segment_length = segment_length;
        self
    }

    /// Set the length budget.
    pub fn with_max_length(mut self, max_length: F) -> Self {
        self.max_length = max_length;
        self
    }

    /// Set the number of relaxation passes.
    pub fn with_relax_iterations(mut self, iterations: usize) -> Self {
        self.relax_iterations = iterations;
        self
    }

    /// Set the pull coefficient.
    pub fn with_pull_strength(mut self, pull_strength: F) -> Self {
        self.pull_strength = pull_strength;
        self
    }

    /// Set the taut velocity policy.
    pub fn with_taut_policy(mut self, policy: TautPolicy) -> Self {
        self.taut_policy = policy;
        self
    }

    /// Set the length granted per upgrade level.
    pub fn with_upgrade_step(mut self, step: F) -> Self {
        self.upgrade_step = step;
        self
    }

    /// Reject values the solver cannot recover from.
    pub fn validate(&self) -> Result<(), TetherError> {
        if !positive_finite(self.segment_length) {
            return Err(TetherError::InvalidSegmentLength);
        }
        if !positive_finite(self.max_length) {
            return Err(TetherError::InvalidMaxLength);
        }
        if self.relax_iterations == 0 {
            return Err(TetherError::InvalidIterations);
        }
        if !self.pull_strength.is_finite() || self.pull_strength < F::zero() {
            return Err(TetherError::InvalidPullStrength);
        }
        Ok(())
    }

    /// Grow the length budget by `delta` and return the new budget.
    ///
    /// Zero, negative and non-finite deltas are ignored: the budget never
    /// shrinks.
    pub fn extend(&mut self, delta: F) -> F {
        if delta.is_finite() && delta > F::zero() {
            self.max_length = self.max_length + delta;
        }
        self.max_length
    }

    /// Extend by `levels` upgrade steps.
    pub fn upgrade(&mut self, levels: u32) -> F {
        self.extend(self.upgrade_step * F::from_usize(levels as usize))
    }
}

impl<F: Float> Default for TetherConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

fn positive_finite<F: Float>(v: F) -> bool {
    v.is_finite() && v > F::zero()
}
