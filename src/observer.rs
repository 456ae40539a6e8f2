//! Step observer trait for monitoring tether simulation progress.

use crate::chain::ParticleChain;
use crate::float::Float;
use crate::solver::RelaxOutcome;

/// Trait for observing tether lifecycle and solver steps.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver<F: Float> {
    /// Called when a chain has been laid out for a new tether.
    fn on_attach(&mut self, _particle_count: usize) {}

    /// Called after all particles have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called after each relaxation pass, length clamp included.
    fn on_relax_iteration(&mut self, _iteration: usize, _chain: &ParticleChain<F>) {}

    /// Called when the length clamp pulls the free end back to `max_length`.
    fn on_clamp(&mut self, _distance: F, _max_length: F) {}

    /// Called when a tick is fully complete.
    fn on_step_complete(&mut self, _outcome: &RelaxOutcome<F>) {}

    /// Called when a tether is discarded.
    fn on_detach(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}

/// Forwards observer hooks to `tracing`: lifecycle and clamps at debug
/// level, per-pass residuals at trace level.
#[cfg(feature = "tracing")]
#[derive(Debug, Default)]
pub struct TracingObserver {
    segment_length: Option<f32>,
}

#[cfg(feature = "tracing")]
impl TracingObserver {
    pub fn new() -> Self {
        TracingObserver { segment_length: None }
    }

    /// Also report the worst segment error after every pass.
    pub fn with_segment_error(segment_length: f32) -> Self {
        TracingObserver { segment_length: Some(segment_length) }
    }
}

#[cfg(feature = "tracing")]
impl<F: Float> StepObserver<F> for TracingObserver {
    fn on_attach(&mut self, particle_count: usize) {
        tracing::debug!(particle_count, "tether attached");
    }

    fn on_relax_iteration(&mut self, iteration: usize, chain: &ParticleChain<F>) {
        match self.segment_length {
            Some(len) => {
                let err = chain.max_segment_error(F::from_f32(len));
                tracing::trace!(iteration, max_segment_error = ?err, "relax pass");
            }
            None => tracing::trace!(iteration, "relax pass"),
        }
    }

    fn on_clamp(&mut self, distance: F, max_length: F) {
        tracing::debug!(?distance, ?max_length, "tether taut, free end clamped");
    }

    fn on_detach(&mut self) {
        tracing::debug!("tether detached");
    }
}
