//! Verlet point mass with implicit velocity.

use crate::float::Float;
use crate::vec::Vec2;

/// A Verlet particle. Velocity is never stored: it is `pos - prev_pos`.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
}

impl<F: Float> Particle<F> {
    /// A particle at rest at `pos`.
    pub fn new(pos: Vec2<F>) -> Self {
        Particle { pos, prev_pos: pos }
    }

    /// Advance one step: `pos += pos - prev_pos`. No damping, no forces.
    pub fn integrate(&mut self) {
        let new_pos = self.pos + self.velocity();
        self.prev_pos = self.pos;
        self.pos = new_pos;
    }

    /// Per-step displacement carried into the next integration.
    pub fn velocity(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    /// Overwrite the position, keeping `prev_pos` so the jump is seen as
    /// velocity on the next integration.
    pub fn move_to(&mut self, pos: Vec2<F>) {
        self.pos = pos;
    }

    /// Place the particle at `pos` with zero velocity.
    pub fn teleport(&mut self, pos: Vec2<F>) {
        self.pos = pos;
        self.prev_pos = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_rest_stays_put() {
        let mut p = Particle::new(Vec2::new(5.0f32, 5.0));
        for _ in 0..10 {
            p.integrate();
        }
        assert_eq!(p.pos, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn drifts_with_implicit_velocity() {
        let mut p = Particle::new(Vec2::new(0.0f64, 0.0));
        p.move_to(Vec2::new(1.0, 2.0));
        p.integrate();
        p.integrate();
        assert_eq!(p.pos, Vec2::new(3.0, 6.0));
        assert_eq!(p.velocity(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn teleport_clears_velocity() {
        let mut p = Particle::new(Vec2::new(0.0f32, 0.0));
        p.move_to(Vec2::new(4.0, 0.0));
        p.teleport(Vec2::new(10.0, 10.0));
        p.integrate();
        assert_eq!(p.pos, Vec2::new(10.0, 10.0));
    }
}
