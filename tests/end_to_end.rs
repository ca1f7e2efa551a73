// Headless runs of the whole tick: resize check, iterate, draw.

use doods::{
    tick, CommandRecorder, DrawCommand, FixedViewport, FrameLoop, Game, SimulationParams, Species,
    Viewport,
};

fn seeded(queens: usize, beasts: usize, seed: u64) -> Game {
    let params = SimulationParams {
        queen_count: queens,
        beast_count: beasts,
        seed: Some(seed),
        ..Default::default()
    };
    Game::new(params).unwrap()
}

#[test]
fn one_tick_on_a_1000_by_800_canvas() {
    let mut game = seeded(8, 1900, 2024);
    let mut viewport = Viewport::default();
    let mut surface = CommandRecorder::new();

    let plotted = tick(&mut game, &mut viewport, &FixedViewport::new(1000.0, 800.0), &mut surface);

    assert_eq!(game.queens().len(), 8);
    assert_eq!(game.beasts().len(), 1900);

    let params = game.params().clone();
    for dood in game.queens().iter().chain(game.beasts()) {
        let slack = dood.species.constants(&params).max_speed;
        assert!(dood.x.is_finite() && dood.y.is_finite());
        assert!(dood.x >= -slack && dood.x < 1000.0 + slack, "x {}", dood.x);
        assert!(dood.y >= -slack && dood.y < 800.0 + slack, "y {}", dood.y);
    }

    assert_eq!(plotted, 1900);
    assert_eq!(surface.pixel_count(), 1900);
    assert_eq!(surface.commands[1], DrawCommand::FillRect { x: 0, y: 0, w: 1000, h: 800 });
}

#[test]
fn long_run_keeps_invariants() {
    let mut game = seeded(8, 400, 99);
    let mut viewport = Viewport::default();
    let mut surface = CommandRecorder::new();
    let provider = FixedViewport::new(640.0, 480.0);

    let mut frame_loop = FrameLoop::new();
    frame_loop.start();
    let ran = frame_loop.run(Some(600), |_| {
        surface.clear();
        tick(&mut game, &mut viewport, &provider, &mut surface);
    });
    assert_eq!(ran, 600);
    assert_eq!(game.ticks(), 600);

    let params = game.params().clone();
    for dood in game.queens().iter().chain(game.beasts()) {
        assert!(dood.speed() <= dood.species.constants(&params).max_speed + 1e-9);
        let target = dood.target.unwrap();
        assert_eq!(game.queens()[target].species, Species::Queen);
    }

    // Edge avoidance keeps the swarm near the canvas
    let inside = game
        .beasts()
        .iter()
        .filter(|b| b.x > -100.0 && b.x < 740.0 && b.y > -100.0 && b.y < 580.0)
        .count();
    let total = game.beasts().len();
    assert!(inside * 10 >= total * 9, "{} of {} near canvas", inside, total);
}

#[test]
fn resize_mid_run_moves_the_edges() {
    let mut game = seeded(2, 50, 5);
    let mut viewport = Viewport::default();
    let mut surface = CommandRecorder::new();

    tick(&mut game, &mut viewport, &FixedViewport::new(800.0, 600.0), &mut surface);
    assert_eq!(viewport, Viewport::new(800.0, 600.0));

    surface.clear();
    tick(&mut game, &mut viewport, &FixedViewport::new(400.0, 300.0), &mut surface);
    assert_eq!(viewport, Viewport::new(400.0, 300.0));
    assert_eq!(surface.commands[1], DrawCommand::FillRect { x: 0, y: 0, w: 400, h: 300 });
    // Collections never change size on resize
    assert_eq!(game.beasts().len(), 50);
}

#[test]
fn stopping_the_loop_halts_the_simulation() {
    let mut game = seeded(3, 30, 1);
    let mut viewport = Viewport::default();
    let mut surface = CommandRecorder::new();
    let provider = FixedViewport::new(300.0, 300.0);

    let mut frame_loop = FrameLoop::new();
    frame_loop.start();
    let handle = frame_loop.stop_handle();
    frame_loop.run(None, |frame| {
        tick(&mut game, &mut viewport, &provider, &mut surface);
        if frame == 9 {
            handle.stop();
        }
    });

    assert_eq!(game.ticks(), 10);
    assert!(!frame_loop.frame(|_| unreachable!()));
}
