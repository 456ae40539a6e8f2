//! Tethers addressed by entity id, one independent controller per entity.

use crate::config::TetherConfig;
use crate::controller::{BodyState, CorrectedFreeEnd, Tether, TetherController};
use crate::error::TetherError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::vec::Vec2;
use alloc::collections::BTreeMap;

/// Every tether in a world, keyed by the id of the entity at its free end.
///
/// Controllers never interact. Iteration order follows the key order, so a
/// host that ticks through [`TetherRegistry::ids`] gets the same order every run.
#[derive(Clone, Debug)]
pub struct TetherRegistry<K: Ord, F: Float> {
    controllers: BTreeMap<K, TetherController<F>>,
    default_config: TetherConfig<F>,
}

impl<K: Ord, F: Float> TetherRegistry<K, F> {
    /// Entities seen for the first time start from `default_config`.
    pub fn new(default_config: TetherConfig<F>) -> Self {
        TetherRegistry {
            controllers: BTreeMap::new(),
            default_config,
        }
    }

    /// Register `id` with its own config, replacing any previous controller.
    pub fn insert(&mut self, id: K, config: TetherConfig<F>) {
        self.controllers.insert(id, TetherController::new(config));
    }

    /// Controller for `id`, created from the default config if missing.
    pub fn entry(&mut self, id: K) -> &mut TetherController<F> {
        self.controllers
            .entry(id)
            .or_insert_with(|| TetherController::new(self.default_config.clone()))
    }

    pub fn attach<O: StepObserver<F>>(
        &mut self,
        id: K,
        anchor: Vec2<F>,
        free_end: Vec2<F>,
        observer: &mut O,
    ) -> Result<&Tether<F>, TetherError> {
        self.entry(id).attach(anchor, free_end, observer)
    }

    /// Tick one entity's tether. `None` if it is unknown or detached.
    pub fn tick<O: StepObserver<F>>(
        &mut self,
        id: &K,
        anchor: Vec2<F>,
        free_end: BodyState<F>,
        observer: &mut O,
    ) -> Option<CorrectedFreeEnd<F>> {
        self.controllers.get_mut(id)?.tick(anchor, free_end, observer)
    }

    pub fn detach<O: StepObserver<F>>(&mut self, id: &K, observer: &mut O) -> bool {
        self.controllers
            .get_mut(id)
            .is_some_and(|c| c.detach(observer))
    }

    pub fn on_death<O: StepObserver<F>>(&mut self, id: &K, observer: &mut O) -> bool {
        self.controllers
            .get_mut(id)
            .is_some_and(|c| c.on_death(observer))
    }

    /// Grow `id`'s length budget, registering it first if needed.
    pub fn extend(&mut self, id: K, delta: F) -> F {
        self.entry(id).extend(delta)
    }

    /// Forget an entity entirely, config included.
    pub fn remove(&mut self, id: &K) -> Option<TetherController<F>> {
        self.controllers.remove(id)
    }

    pub fn get(&self, id: &K) -> Option<&TetherController<F>> {
        self.controllers.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &K> {
        self.controllers.keys()
    }

    /// Entities that currently trail a tether, with their tethers.
    pub fn tethered(&self) -> impl Iterator<Item = (&K, &Tether<F>)> {
        self.controllers
            .iter()
            .filter_map(|(id, c)| c.tether().map(|t| (id, t)))
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}

impl<K: Ord, F: Float> Default for TetherRegistry<K, F> {
    fn default() -> Self {
        Self::new(TetherConfig::default())
    }
}
