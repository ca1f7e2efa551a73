/*
 * Input Module
 *
 * Keyboard and mouse handlers. Input never steers the simulation; events are
 * only logged for diagnostics.
 */

use nannou::prelude::*;
use nannou::winit::event::MouseButton;

use crate::app::Model;

// Key pressed event handler
pub fn key_pressed(_app: &App, _model: &mut Model, key: Key) {
    log::info!("Key down: {:?}", key);
}

// Mouse pressed event handler
pub fn mouse_pressed(app: &App, _model: &mut Model, button: MouseButton) {
    let (x, y) = canvas_position(app.window_rect(), pt2(app.mouse.x, app.mouse.y));
    log::info!("Mouse click ({:?}) at {}, {}", button, x, y);
}

// Window space (origin centre, y up) to canvas space (origin top-left, y down)
pub fn canvas_position(window_rect: Rect, pos: Point2) -> (f32, f32) {
    (pos.x - window_rect.left(), window_rect.top() - pos.y)
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
