//! Tether lifecycle and the per-tick contract with the host game loop.

use crate::chain::ParticleChain;
use crate::config::{TautPolicy, TetherConfig};
use crate::error::TetherError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::solver::ConstraintSolver;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Position and velocity of an externally simulated body.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyState<F: Float> {
    pub position: Vec2<F>,
    pub velocity: Vec2<F>,
}

impl<F: Float> BodyState<F> {
    pub fn new(position: Vec2<F>, velocity: Vec2<F>) -> Self {
        BodyState { position, velocity }
    }

    /// A body at `position` with no velocity.
    pub fn at_rest(position: Vec2<F>) -> Self {
        BodyState { position, velocity: Vec2::zero() }
    }
}

/// What the host must write back into the free-end body after a tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CorrectedFreeEnd<F: Float> {
    /// New position for the free-end body.
    pub position: Vec2<F>,
    /// Replacement velocity, present only when the tether went taut.
    pub velocity_override: Option<Vec2<F>>,
    /// Reeling-in nudge to add to the body's velocity. Zero when taut.
    pub pull_delta: Vec2<F>,
    /// True if the length clamp engaged this tick.
    pub taut: bool,
}

impl<F: Float> CorrectedFreeEnd<F> {
    /// The velocity the host should store for the free end from now on.
    pub fn apply(&self, velocity: Vec2<F>) -> Vec2<F> {
        match self.velocity_override {
            Some(v) => v,
            None => velocity + self.pull_delta,
        }
    }
}

/// A live tether: the chain plus the config it was built and is ticked with.
#[derive(Clone, Debug, PartialEq)]
pub struct Tether<F: Float> {
    chain: ParticleChain<F>,
    config: TetherConfig<F>,
}

impl<F: Float> Tether<F> {
    /// Build a straight chain at rest between `anchor` and `free_end`.
    ///
    /// The particle count is fixed here from the initial separation and
    /// `config.segment_length`.
    pub fn attach(
        anchor: Vec2<F>,
        free_end: Vec2<F>,
        config: TetherConfig<F>,
    ) -> Result<Self, TetherError> {
        config.validate()?;
        if !anchor.is_finite() || !free_end.is_finite() {
            return Err(TetherError::NonFinitePosition);
        }
        let chain = ParticleChain::layout(anchor, free_end, config.segment_length);
        Ok(Tether { chain, config })
    }

    /// Advance the rope one simulation step.
    ///
    /// Must be called exactly once per step while the tether exists.
    /// Skipped or doubled calls corrupt the Verlet history.
    pub fn tick<O: StepObserver<F>>(
        &mut self,
        anchor: Vec2<F>,
        free_end: BodyState<F>,
        observer: &mut O,
    ) -> CorrectedFreeEnd<F> {
        self.chain.integrate();
        observer.on_integrate();

        let solver = ConstraintSolver::from_config(&self.config);
        let outcome = solver.relax(&mut self.chain, anchor, free_end.position, observer);

        let corrected = if outcome.clamped {
            CorrectedFreeEnd {
                position: outcome.free_end,
                velocity_override: Some(self.taut_velocity(anchor, outcome.free_end, free_end.velocity)),
                pull_delta: Vec2::zero(),
                taut: true,
            }
        } else {
            CorrectedFreeEnd {
                position: outcome.free_end,
                velocity_override: None,
                pull_delta: self.pull(anchor, outcome.free_end),
                taut: false,
            }
        };

        observer.on_step_complete(&outcome);
        corrected
    }

    /// `normalize(anchor - free_end) * pull_strength * clamp(dist / max_length, 0, 1)`
    fn pull(&self, anchor: Vec2<F>, free_end: Vec2<F>) -> Vec2<F> {
        let to_anchor = anchor - free_end;
        let slack_fraction = (to_anchor.length() / self.config.max_length).clamp(F::zero(), F::one());
        to_anchor
            .normalize()
            .scale(self.config.pull_strength * slack_fraction)
    }

    fn taut_velocity(&self, anchor: Vec2<F>, free_end: Vec2<F>, velocity: Vec2<F>) -> Vec2<F> {
        match self.config.taut_policy {
            TautPolicy::Arrest => Vec2::zero(),
            TautPolicy::Radial => {
                let outward = (free_end - anchor).normalize();
                let radial = velocity.dot(outward);
                if radial > F::zero() {
                    velocity - outward.scale(radial)
                } else {
                    velocity
                }
            }
        }
    }

    /// Grow this tether's length budget. Takes effect on the next tick.
    pub fn extend(&mut self, delta: F) -> F {
        self.config.extend(delta)
    }

    pub fn chain(&self) -> &ParticleChain<F> {
        &self.chain
    }

    pub fn config(&self) -> &TetherConfig<F> {
        &self.config
    }

    /// Render snapshot, anchor first.
    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.chain.positions()
    }
}

/// Whether an entity currently trails a tether.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AttachmentState {
    Detached,
    Tethered,
}

/// Owns at most one tether for one entity, plus that entity's tether config.
///
/// The config outlives individual tethers, so upgrades bought while docked
/// apply to the next rope.
#[derive(Clone, Debug, PartialEq)]
pub struct TetherController<F: Float> {
    config: TetherConfig<F>,
    tether: Option<Tether<F>>,
}

impl<F: Float> TetherController<F> {
    pub fn new(config: TetherConfig<F>) -> Self {
        TetherController { config, tether: None }
    }

    /// Detached → Tethered. Attaching while tethered replaces the rope.
    pub fn attach<O: StepObserver<F>>(
        &mut self,
        anchor: Vec2<F>,
        free_end: Vec2<F>,
        observer: &mut O,
    ) -> Result<&Tether<F>, TetherError> {
        let tether = Tether::attach(anchor, free_end, self.config.clone())?;
        observer.on_attach(tether.chain().len());
        Ok(&*self.tether.insert(tether))
    }

    /// Tick the tether if there is one. Returns `None` while detached.
    pub fn tick<O: StepObserver<F>>(
        &mut self,
        anchor: Vec2<F>,
        free_end: BodyState<F>,
        observer: &mut O,
    ) -> Option<CorrectedFreeEnd<F>> {
        self.tether
            .as_mut()
            .map(|tether| tether.tick(anchor, free_end, observer))
    }

    /// Tethered → Detached. Returns whether a tether was discarded.
    pub fn detach<O: StepObserver<F>>(&mut self, observer: &mut O) -> bool {
        let had_tether = self.tether.take().is_some();
        if had_tether {
            observer.on_detach();
        }
        had_tether
    }

    /// The entity died: its tether goes with it.
    pub fn on_death<O: StepObserver<F>>(&mut self, observer: &mut O) -> bool {
        self.detach(observer)
    }

    /// Grow the length budget for this and every future tether.
    pub fn extend(&mut self, delta: F) -> F {
        if let Some(tether) = self.tether.as_mut() {
            tether.extend(delta);
        }
        self.config.extend(delta)
    }

    /// Extend by whole upgrade levels.
    pub fn upgrade(&mut self, levels: u32) -> F {
        let delta = self.config.upgrade_step * F::from_usize(levels as usize);
        self.extend(delta)
    }

    pub fn state(&self) -> AttachmentState {
        match self.tether {
            Some(_) => AttachmentState::Tethered,
            None => AttachmentState::Detached,
        }
    }

    pub fn is_tethered(&self) -> bool {
        self.tether.is_some()
    }

    pub fn tether(&self) -> Option<&Tether<F>> {
        self.tether.as_ref()
    }

    pub fn config(&self) -> &TetherConfig<F> {
        &self.config
    }
}

impl<F: Float> Default for TetherController<F> {
    fn default() -> Self {
        Self::new(TetherConfig::default())
    }
}
