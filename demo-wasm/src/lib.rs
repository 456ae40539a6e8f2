use tether::{BodyState, NoOpStepObserver, TetherConfig, TetherController, Vec2};
use wasm_bindgen::prelude::*;

const THRUST: f32 = 0.08;
const DRAG: f32 = 0.998;
const DOCK_OFFSET: f32 = 20.0;
const DOCK_RADIUS: f32 = 60.0;
const EXIT_OFFSET: f32 = 60.0;
// 1.2 s at 60 Hz
const RESPAWN_FRAMES: u32 = 72;

// ---- Tether Demo ----

#[wasm_bindgen]
pub struct TetherDemo {
    ship: BodyState<f32>,
    player: BodyState<f32>,
    thrust: Vec2<f32>,
    docked: bool,
    respawn_in: Option<u32>,
    controller: TetherController<f32>,
}

#[wasm_bindgen]
impl TetherDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f32, y: f32) -> Self {
        let ship = BodyState::new(Vec2::new(x, y), Vec2::new(0.15, 0.05));
        TetherDemo {
            ship,
            player: BodyState::at_rest(ship.position + Vec2::new(DOCK_OFFSET, 0.0)),
            thrust: Vec2::zero(),
            docked: true,
            respawn_in: None,
            controller: TetherController::new(TetherConfig::new()),
        }
    }

    /// Thruster input, each axis in [-1, 1].
    pub fn set_thrust(&mut self, x: f32, y: f32) {
        self.thrust = Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0)).scale(THRUST);
    }

    /// Leave the ship on a fresh tether, or climb back in when close enough.
    /// Returns whether the player is now docked.
    pub fn toggle_dock(&mut self) -> bool {
        if self.respawn_in.is_some() {
            return self.docked;
        }
        if self.docked {
            self.player = BodyState::at_rest(self.ship.position + Vec2::new(EXIT_OFFSET, 0.0));
            if self
                .controller
                .attach(self.ship.position, self.player.position, &mut NoOpStepObserver)
                .is_ok()
            {
                self.docked = false;
            }
        } else if self.player.position.distance(self.ship.position) < DOCK_RADIUS {
            self.controller.detach(&mut NoOpStepObserver);
            self.docked = true;
        }
        self.docked
    }

    /// Spend gems on rope upgrades. Each gem buys two levels.
    pub fn upgrade_rope(&mut self, gems: u32) -> f32 {
        self.controller.upgrade(gems.saturating_mul(2))
    }

    /// Oxygen ran out: lose the rope and respawn docked after a pause.
    pub fn kill(&mut self) {
        if self.respawn_in.is_none() {
            self.controller.on_death(&mut NoOpStepObserver);
            self.respawn_in = Some(RESPAWN_FRAMES);
        }
    }

    pub fn update(&mut self) {
        self.ship.position += self.ship.velocity;

        if let Some(frames) = self.respawn_in {
            self.respawn_in = frames.checked_sub(1).filter(|f| *f > 0);
            if self.respawn_in.is_none() {
                self.docked = true;
            }
            return;
        }

        if self.docked {
            self.player = BodyState::at_rest(self.ship.position + Vec2::new(DOCK_OFFSET, 0.0));
            return;
        }

        self.player.velocity = (self.player.velocity + self.thrust).scale(DRAG);
        self.player.position += self.player.velocity;

        if let Some(out) = self
            .controller
            .tick(self.ship.position, self.player, &mut NoOpStepObserver)
        {
            self.player.position = out.position;
            self.player.velocity = out.apply(self.player.velocity);
        }
    }

    /// Returns flat [x0, y0, x1, y1, ...] rope positions, ship end first.
    /// Empty while docked.
    pub fn rope_positions(&self) -> Vec<f32> {
        let Some(tether) = self.controller.tether() else {
            return Vec::new();
        };
        let pos = tether.positions();
        let mut out = Vec::with_capacity(pos.len() * 2);
        for p in &pos {
            out.push(p.x);
            out.push(p.y);
        }
        out
    }

    /// Returns [ship_x, ship_y, player_x, player_y]
    pub fn bodies(&self) -> Vec<f32> {
        vec![
            self.ship.position.x,
            self.ship.position.y,
            self.player.position.x,
            self.player.position.y,
        ]
    }

    pub fn is_docked(&self) -> bool {
        self.docked
    }

    pub fn is_alive(&self) -> bool {
        self.respawn_in.is_none()
    }

    pub fn is_taut(&self) -> bool {
        self.controller
            .tether()
            .is_some_and(|t| t.chain().span() >= t.config().max_length - 1e-3)
    }

    pub fn max_rope_length(&self) -> f32 {
        self.controller.config().max_length
    }
}
