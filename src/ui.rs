/*
 * UI Module
 *
 * Control panel built with nannou_egui. Species constants are tuned live;
 * entity counts are shown but fixed once the simulation has started.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::{SimulationParams, SpeciesParams};

// Update the UI and return whether any parameter changed
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
    seed: u64,
) -> bool {
    let before = params.clone();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Queens", |ui| {
                ui.label(format!("Count: {}", params.queen_count));
                species_sliders(ui, &mut params.queen);
            });

            ui.collapsing("Beasts", |ui| {
                ui.label(format!("Count: {}", params.beast_count));
                species_sliders(ui, &mut params.beast);
            });

            ui.checkbox(&mut params.draw_queens, "Draw Queens");
            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");

            if params.show_debug {
                ui.separator();
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                let frame_ms = debug_info.frame_time.as_secs_f64() * 1000.0;
                ui.label(format!("Frame time: {:.2} ms", frame_ms));
                ui.label(format!("Ticks: {}", debug_info.ticks));
                ui.label(format!("Pixels plotted: {}", debug_info.plotted.get()));
                ui.label(format!("Seed: {}", seed));
            }
        });

    *params != before
}

fn species_sliders(ui: &mut egui::Ui, species: &mut SpeciesParams) {
    ui.add(
        egui::Slider::new(&mut species.max_speed, SimulationParams::get_max_speed_range())
            .text("Max Speed"),
    );
    ui.add(
        egui::Slider::new(&mut species.accel_modifier, SimulationParams::get_accel_modifier_range())
            .text("Accel Modifier"),
    );
    ui.add(
        egui::Slider::new(
            &mut species.turn_probability,
            SimulationParams::get_turn_probability_range(),
        )
        .text("Turn Probability"),
    );
}
