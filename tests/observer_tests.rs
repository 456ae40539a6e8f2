use tether::{
    BodyState, ParticleChain, RelaxOutcome, StepObserver, TetherConfig, TetherController, Vec2,
};

#[derive(Default)]
struct Counts {
    attaches: usize,
    integrates: usize,
    iterations: usize,
    clamps: usize,
    completes: usize,
    taut_completes: usize,
    detaches: usize,
}

impl StepObserver<f32> for Counts {
    fn on_attach(&mut self, particle_count: usize) {
        assert!(particle_count >= 4);
        self.attaches += 1;
    }
    fn on_integrate(&mut self) {
        self.integrates += 1;
    }
    fn on_relax_iteration(&mut self, _iteration: usize, _chain: &ParticleChain<f32>) {
        self.iterations += 1;
    }
    fn on_clamp(&mut self, _distance: f32, _max_length: f32) {
        self.clamps += 1;
    }
    fn on_step_complete(&mut self, outcome: &RelaxOutcome<f32>) {
        self.completes += 1;
        if outcome.clamped {
            self.taut_completes += 1;
        }
    }
    fn on_detach(&mut self) {
        self.detaches += 1;
    }
}

#[test]
fn hooks_fire_once_per_event() {
    let mut counts = Counts::default();
    let mut controller: TetherController<f32> =
        TetherController::new(TetherConfig::new().with_relax_iterations(3));

    controller.attach(Vec2::zero(), Vec2::new(100.0, 0.0), &mut counts).expect("valid config");
    for _ in 0..4 {
        controller.tick(Vec2::zero(), BodyState::at_rest(Vec2::new(100.0, 0.0)), &mut counts);
    }
    controller.tick(Vec2::zero(), BodyState::at_rest(Vec2::new(900.0, 0.0)), &mut counts);
    controller.detach(&mut counts);
    controller.detach(&mut counts);

    assert_eq!(counts.attaches, 1);
    assert_eq!(counts.integrates, 5);
    assert_eq!(counts.iterations, 15);
    assert_eq!(counts.completes, 5);
    assert_eq!(counts.taut_completes, 1);
    assert!(counts.clamps >= 1);
    assert_eq!(counts.detaches, 1);
}
