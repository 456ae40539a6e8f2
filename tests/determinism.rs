use tether::{BodyState, NoOpStepObserver, Tether, TetherConfig, Vec2};

fn run() -> Vec<Vec2<f32>> {
    let mut tether = Tether::attach(
        Vec2::new(0.0, 0.0),
        Vec2::new(100.0, 0.0),
        TetherConfig::new(),
    ).expect("default config is valid");

    let mut player = BodyState::new(Vec2::new(100.0, 0.0), Vec2::new(1.5, 0.8));
    for t in 0..240 {
        let ship = Vec2::new(t as f32 * 0.5, 0.0);
        player.position += player.velocity;
        let out = tether.tick(ship, player, &mut NoOpStepObserver);
        player.position = out.position;
        player.velocity = out.apply(player.velocity);
    }
    tether.positions()
}

#[test]
fn tether_deterministic() {
    let results: Vec<_> = (0..5).map(|_| run()).collect();

    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }
}
