/*
 * Doods - Module Definitions
 *
 * The simulation core (dood, physics, game, frame_loop, surface, viewport)
 * has no dependency on the window; the nannou glue lives in app, renderer,
 * input and ui.
 */

// Re-export key components for easier access
pub use dood::{Dood, DoodId, Species};
pub use error::{SimError, SimResult};
pub use frame_loop::{tick, FrameLoop, LoopState, StopHandle};
pub use game::Game;
pub use params::{SimulationParams, SpeciesParams};
pub use physics::unit_vector;
pub use surface::{CommandRecorder, DrawCommand, Surface};
pub use viewport::{FixedViewport, Viewport, ViewportProvider};

// Define modules
pub mod app;
pub mod config;
pub mod debug;
pub mod dood;
pub mod error;
pub mod frame_loop;
pub mod game;
pub mod input;
pub mod params;
pub mod physics;
pub mod renderer;
pub mod surface;
pub mod ui;
pub mod viewport;

// Constants
pub const MARGIN: f64 = 50.0;
pub const DEFAULT_EDGE_PUSH: f64 = 2.0;
