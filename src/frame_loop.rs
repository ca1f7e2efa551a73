/*
 * Frame Loop Module
 *
 * Drives ticks. In the windowed app nannou calls us once per display
 * refresh and the FrameLoop only decides whether the tick runs (pause and
 * stop). Headless callers use `run` to pump ticks themselves until stopped.
 */

use std::cell::Cell;
use std::rc::Rc;

use crate::game::Game;
use crate::surface::Surface;
use crate::viewport::{Viewport, ViewportProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Paused,
    Stopped,
}

// Cancels a FrameLoop from inside a frame callback
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

#[derive(Debug)]
pub struct FrameLoop {
    state: LoopState,
    frames: u64,
    stop: StopHandle,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Idle,
            frames: 0,
            stop: StopHandle::default(),
        }
    }

    pub fn state(&self) -> LoopState {
        if self.stop.is_stopped() {
            LoopState::Stopped
        } else {
            self.state
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn start(&mut self) {
        if self.state() == LoopState::Idle {
            self.state = LoopState::Running;
        }
    }

    pub fn pause(&mut self) {
        if self.state() == LoopState::Running {
            self.state = LoopState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state() == LoopState::Paused {
            self.state = LoopState::Running;
        }
    }

    // Stopping is final
    pub fn stop(&mut self) {
        self.stop.stop();
        self.state = LoopState::Stopped;
    }

    pub fn set_paused(&mut self, paused: bool) {
        if paused {
            self.pause();
        } else {
            self.resume();
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == LoopState::Running
    }

    // Run one frame if the loop is running. Returns whether it ran.
    pub fn frame(&mut self, f: impl FnOnce(u64)) -> bool {
        if !self.is_running() {
            return false;
        }
        f(self.frames);
        self.frames += 1;
        true
    }

    // Pump frames until stopped, paused, or `limit` frames have run.
    // Returns the number of frames run by this call.
    pub fn run(&mut self, limit: Option<u64>, mut f: impl FnMut(u64)) -> u64 {
        let mut ran = 0;
        while limit.map_or(true, |limit| ran < limit) {
            if !self.frame(&mut f) {
                break;
            }
            ran += 1;
        }
        ran
    }
}

// One full tick: resize check, move everything, draw. Returns pixels plotted.
pub fn tick(
    game: &mut Game,
    viewport: &mut Viewport,
    provider: &impl ViewportProvider,
    surface: &mut impl Surface,
) -> usize {
    viewport.refresh(provider);
    game.iterate(*viewport);
    game.draw(*viewport, surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SimulationParams;
    use crate::surface::CommandRecorder;
    use crate::viewport::FixedViewport;

    #[test]
    fn idle_loop_runs_nothing() {
        let mut frame_loop = FrameLoop::new();
        assert!(!frame_loop.frame(|_| panic!("should not run")));
        assert_eq!(frame_loop.run(Some(10), |_| {}), 0);
    }

    #[test]
    fn run_honours_limit() {
        let mut frame_loop = FrameLoop::new();
        frame_loop.start();
        let mut seen = Vec::new();
        assert_eq!(frame_loop.run(Some(3), |n| seen.push(n)), 3);
        assert_eq!(seen, vec![0, 1, 2]);
        assert_eq!(frame_loop.frames(), 3);
    }

    #[test]
    fn stop_handle_cancels_from_inside_a_frame() {
        let mut frame_loop = FrameLoop::new();
        frame_loop.start();
        let handle = frame_loop.stop_handle();
        let ran = frame_loop.run(None, |n| {
            if n == 4 {
                handle.stop();
            }
        });
        assert_eq!(ran, 5);
        assert_eq!(frame_loop.state(), LoopState::Stopped);
    }

    #[test]
    fn pause_and_resume() {
        let mut frame_loop = FrameLoop::new();
        frame_loop.start();
        frame_loop.set_paused(true);
        assert_eq!(frame_loop.state(), LoopState::Paused);
        assert!(!frame_loop.frame(|_| {}));
        frame_loop.set_paused(false);
        assert!(frame_loop.frame(|_| {}));
    }

    #[test]
    fn stopped_loop_cannot_restart() {
        let mut frame_loop = FrameLoop::new();
        frame_loop.start();
        frame_loop.stop();
        frame_loop.start();
        frame_loop.resume();
        assert!(!frame_loop.is_running());
    }

    #[test]
    fn tick_resizes_before_moving() {
        let params = SimulationParams {
            queen_count: 2,
            beast_count: 30,
            seed: Some(11),
            ..Default::default()
        };
        let mut game = Game::new(params).unwrap();
        let mut viewport = Viewport::default();
        let mut surface = CommandRecorder::new();

        let provider = FixedViewport::new(400.0, 300.0);
        let plotted = tick(&mut game, &mut viewport, &provider, &mut surface);

        assert_eq!(viewport, Viewport::new(400.0, 300.0));
        assert_eq!(plotted, 30);
        // Doods were spawned inside the refreshed viewport, not a 0x0 one
        assert!(game.beasts().iter().any(|b| b.x > 50.0));
    }
}
