//! Constraints acting on a tether chain: neighbour spacing and length budget.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;

/// Stand-in length for coincident neighbours, so the correction stays finite.
const DEGENERATE_LENGTH: f32 = 1e-4;

/// Pulls every pair of neighbours toward `rest_length`.
///
/// Each pair splits the correction evenly, except that particle 0 (the
/// anchor) never moves. Pairs are visited anchor-first, and each correction
/// sees the previous ones (Gauss-Seidel). The free end is corrected like
/// any other particle, which feeds rope tension back into it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentConstraint<F: Float> {
    pub rest_length: F,
}

impl<F: Float> SegmentConstraint<F> {
    pub fn new(rest_length: F) -> Self {
        SegmentConstraint { rest_length }
    }

    /// Correct the pair `(a, a + 1)`.
    pub fn solve_pair(&self, particles: &mut [Particle<F>], a: usize) {
        let b = a + 1;
        let delta = particles[b].pos - particles[a].pos;
        let mut dist = delta.length();
        if dist.is_near_zero(F::from_f32(1e-10)) {
            dist = F::from_f32(DEGENERATE_LENGTH);
        }

        let error = (dist - self.rest_length) / dist;
        let correction = delta.scale(F::half() * error);

        if a != 0 {
            particles[a].pos += correction;
        }
        particles[b].pos -= correction;
    }

    /// One left-to-right pass over every neighbour pair.
    pub fn solve(&self, particles: &mut [Particle<F>]) {
        for a in 0..particles.len().saturating_sub(1) {
            self.solve_pair(particles, a);
        }
    }
}

/// Keeps the free end within `max_length` of the anchor, in a straight line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LengthLimit<F: Float> {
    pub max_length: F,
}

/// Result of a length clamp.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Clamp<F: Float> {
    /// Free-end position on the `max_length` circle.
    pub position: Vec2<F>,
    /// Anchor distance before clamping.
    pub distance: F,
}

impl<F: Float> LengthLimit<F> {
    pub fn new(max_length: F) -> Self {
        LengthLimit { max_length }
    }

    /// Where the free end must go, or `None` if it is within budget.
    pub fn check(&self, anchor: Vec2<F>, free_end: Vec2<F>) -> Option<Clamp<F>> {
        let offset = free_end - anchor;
        let distance = offset.length();
        if distance > self.max_length {
            let position = anchor + offset.scale(self.max_length / distance);
            Some(Clamp { position, distance })
        } else {
            None
        }
    }

    /// Clamp the last particle against the first. Empty slices are left alone.
    pub fn solve(&self, particles: &mut [Particle<F>]) -> Option<Clamp<F>> {
        let last = particles.len().checked_sub(1)?;
        let clamp = self.check(particles[0].pos, particles[last].pos)?;
        particles[last].pos = clamp.position;
        Some(clamp)
    }
}
