//! The rope itself: an ordered run of Verlet particles from anchor to free end.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Fewest segments a chain is ever built with.
pub const MIN_SEGMENTS: usize = 3;

/// Most segments a chain is ever built with, whatever the separation.
pub const MAX_SEGMENTS: usize = 1 << 16;

/// Separations below this are treated as coincident endpoints.
const COINCIDENT_EPSILON: f32 = 1e-6;

/// Fixed-size particle chain. Slot 0 is the anchor, the last slot the free end.
///
/// The particle count is chosen once, in [`ParticleChain::layout`], and never
/// changes for the lifetime of the chain.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleChain<F: Float> {
    particles: AllocVec<Particle<F>>,
}

impl<F: Float> ParticleChain<F> {
    /// Number of segments for a rope spanning `separation`:
    /// `max(3, ceil(separation / segment_length))`, capped at [`MAX_SEGMENTS`].
    ///
    /// Past the cap the chain keeps [`MAX_SEGMENTS`] segments and each one is
    /// laid out longer than `segment_length`. The solver then shortens them.
    pub fn segments_for(separation: F, segment_length: F) -> usize {
        let wanted = (separation / segment_length).ceil().to_usize();
        wanted.clamp(MIN_SEGMENTS, MAX_SEGMENTS)
    }

    /// Lay a straight chain at rest from `anchor` to `free_end`.
    ///
    /// The particle count is `segments_for(..) + 1`, so it never exceeds
    /// `MAX_SEGMENTS + 1`.
    ///
    /// Coincident endpoints get a minimal chain of [`MIN_SEGMENTS`] segments
    /// at rest length, laid along +x from the anchor.
    pub fn layout(anchor: Vec2<F>, free_end: Vec2<F>, segment_length: F) -> Self {
        let separation = anchor.distance(free_end);

        if separation.is_near_zero(F::from_f32(COINCIDENT_EPSILON)) {
            let step = Vec2::new(segment_length, F::zero());
            let particles = (0..=MIN_SEGMENTS)
                .map(|i| Particle::new(anchor + step.scale(F::from_usize(i))))
                .collect();
            return ParticleChain { particles };
        }

        let segments = Self::segments_for(separation, segment_length);
        let mut particles = AllocVec::with_capacity(segments + 1);
        for i in 0..segments {
            let t = F::from_usize(i) / F::from_usize(segments);
            particles.push(Particle::new(anchor.lerp(free_end, t)));
        }
        particles.push(Particle::new(free_end));

        ParticleChain { particles }
    }

    /// Verlet-advance every particle, endpoints included.
    ///
    /// Endpoints must be integrated too and only then re-pinned, otherwise
    /// their stale history leaks into the next step as momentum.
    pub fn integrate(&mut self) {
        for p in self.particles.iter_mut() {
            p.integrate();
        }
    }

    /// Overwrite both endpoint slots with live entity positions.
    pub fn pin_ends(&mut self, anchor: Vec2<F>, free_end: Vec2<F>) {
        let last = self.particles.len() - 1;
        self.particles[0].move_to(anchor);
        self.particles[last].move_to(free_end);
    }

    /// Snapshot of all positions, anchor first, for rendering as a polyline.
    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    pub fn particles(&self) -> &[Particle<F>] {
        &self.particles
    }

    pub(crate) fn particles_mut(&mut self) -> &mut [Particle<F>] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.particles.len() - 1
    }

    pub fn particle(&self, index: usize) -> &Particle<F> {
        &self.particles[index]
    }

    pub fn particle_mut(&mut self, index: usize) -> &mut Particle<F> {
        &mut self.particles[index]
    }

    /// Anchor slot position.
    pub fn first(&self) -> Vec2<F> {
        self.particles[0].pos
    }

    /// Free-end slot position.
    pub fn last(&self) -> Vec2<F> {
        self.particles[self.particles.len() - 1].pos
    }

    /// Straight-line distance from anchor slot to free-end slot.
    pub fn span(&self) -> F {
        self.first().distance(self.last())
    }

    /// Length of the rope at rest: `segment_count * segment_length`.
    pub fn rest_length(&self, segment_length: F) -> F {
        F::from_usize(self.segment_count()) * segment_length
    }

    /// Largest deviation of any neighbour distance from `segment_length`.
    pub fn max_segment_error(&self, segment_length: F) -> F {
        self.particles
            .windows(2)
            .map(|w| (w[0].pos.distance(w[1].pos) - segment_length).abs())
            .fold(F::zero(), F::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_for_uses_ceiling_with_floor_of_three() {
        assert_eq!(ParticleChain::<f32>::segments_for(100.0, 20.0), 5);
        assert_eq!(ParticleChain::<f32>::segments_for(101.0, 20.0), 6);
        assert_eq!(ParticleChain::<f32>::segments_for(10.0, 20.0), 3);
        assert_eq!(ParticleChain::<f64>::segments_for(1e30, 1.0), MAX_SEGMENTS);
    }

    #[test]
    fn layout_endpoints_are_exact() {
        let anchor = Vec2::new(0.3f32, -7.1);
        let free_end = Vec2::new(91.7f32, 44.9);
        let chain = ParticleChain::layout(anchor, free_end, 20.0);
        assert_eq!(chain.first(), anchor);
        assert_eq!(chain.last(), free_end);
    }

    #[test]
    fn layout_starts_at_rest() {
        let chain = ParticleChain::layout(Vec2::new(0.0f64, 0.0), Vec2::new(0.0, 70.0), 20.0);
        for p in chain.particles() {
            assert_eq!(p.velocity(), Vec2::zero());
        }
    }

    #[test]
    fn max_segment_error_of_straight_layout() {
        let chain = ParticleChain::layout(Vec2::new(0.0f64, 0.0), Vec2::new(90.0, 0.0), 20.0);
        // five segments of 18
        assert_eq!(chain.segment_count(), 5);
        assert!((chain.max_segment_error(20.0) - 2.0).abs() < 1e-9);
        assert!((chain.rest_length(20.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn pin_ends_keeps_history() {
        let mut chain = ParticleChain::layout(Vec2::new(0.0f32, 0.0), Vec2::new(60.0, 0.0), 20.0);
        chain.pin_ends(Vec2::new(1.0, 0.0), Vec2::new(61.0, 0.0));
        assert_eq!(chain.particle(0).prev_pos, Vec2::new(0.0, 0.0));
        assert_eq!(chain.last(), Vec2::new(61.0, 0.0));
    }
}
