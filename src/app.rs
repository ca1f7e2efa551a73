/*
 * Application Module
 *
 * This module defines the nannou model and its per-frame update. nannou's
 * event loop is the frame scheduler: every refresh runs update (resize check
 * and one simulation tick, unless paused) and then the view (draw).
 */

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::config;
use crate::debug::DebugInfo;
use crate::dood::Species;
use crate::error::SimError;
use crate::frame_loop::FrameLoop;
use crate::game::Game;
use crate::input::{key_pressed, mouse_pressed, raw_window_event};
use crate::params::SimulationParams;
use crate::renderer::view;
use crate::ui;
use crate::viewport::Viewport;

// Fallback window size when no monitor can be queried
const DEFAULT_WINDOW_SIZE: (u32, u32) = (1000, 800);

// Main model for the application
pub struct Model {
    pub game: Game,
    pub viewport: Viewport,
    pub frame_loop: FrameLoop,
    pub egui: Egui,
    pub debug_info: DebugInfo,
}

// Hand control to nannou
pub fn launch() {
    nannou::app(model).update(update).run();
}

fn fail(err: SimError) -> ! {
    log::error!("{}", err);
    std::process::exit(1)
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Parameters come from the file named on the command line or in DOODS_CONFIG
    let game = match config::load_for_run(std::env::args().nth(1)).and_then(Game::new) {
        Ok(game) => game,
        Err(e) => fail(e),
    };

    // Calculate window size based on monitor size (80% of monitor size)
    let (window_width, window_height) = app
        .primary_monitor()
        .map(|monitor| {
            let size = monitor.size();
            ((size.width as f32 * 0.8) as u32, (size.height as f32 * 0.8) as u32)
        })
        .unwrap_or(DEFAULT_WINDOW_SIZE);

    let window_id = match app
        .new_window()
        .title("Doods")
        .size(window_width, window_height)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .raw_event(raw_window_event)
        .build()
    {
        Ok(id) => id,
        Err(e) => fail(SimError::SurfaceUnavailable(format!("{:?}", e))),
    };

    let window = match app.window(window_id) {
        Some(window) => window,
        None => fail(SimError::SurfaceUnavailable("window closed during startup".to_string())),
    };
    let egui = Egui::from_window(&window);

    let mut frame_loop = FrameLoop::new();
    frame_loop.start();
    frame_loop.set_paused(game.params().pause_simulation);

    Model {
        game,
        viewport: Viewport::default(),
        frame_loop,
        egui,
        debug_info: DebugInfo::default(),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let seed = model.game.seed();
    let mut edited = model.game.params().clone();
    if ui::update_ui(&mut model.egui, &mut edited, &model.debug_info, seed) {
        apply_panel_edits(&mut model.game, &edited);
    }
    model.frame_loop.set_paused(model.game.params().pause_simulation);

    let viewport = &mut model.viewport;
    let game = &mut model.game;
    model.frame_loop.frame(|_| {
        viewport.refresh(app);
        game.iterate(*viewport);
    });

    model.debug_info.ticks = model.game.ticks();
}

// Push panel edits into the game. Species constants are validated; anything
// rejected keeps its previous value.
pub fn apply_panel_edits(game: &mut Game, edited: &SimulationParams) {
    for species in [Species::Queen, Species::Beast] {
        let constants = *species.constants(edited);
        if constants != *species.constants(game.params()) {
            if let Err(e) = game.update_species(species, constants) {
                log::warn!("Ignoring panel edit: {}", e);
            }
        }
    }

    game.set_draw_queens(edited.draw_queens);
    game.set_show_debug(edited.show_debug);
    game.set_paused(edited.pause_simulation);
}
