/*
 * Renderer Module
 *
 * Host side of drawing. NannouSurface maps canvas coordinates (origin
 * top-left, y down) onto nannou's window space (origin centre, y up), and
 * the nannou App reports the window size as the simulation viewport.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::params::Color;
use crate::surface::Surface;
use crate::viewport::ViewportProvider;

impl ViewportProvider for App {
    fn size(&self) -> (f64, f64) {
        let rect = self.window_rect();
        (rect.w() as f64, rect.h() as f64)
    }
}

pub struct NannouSurface<'a> {
    draw: &'a Draw,
    window_rect: Rect,
    fill: Rgb<u8>,
}

impl<'a> NannouSurface<'a> {
    pub fn new(draw: &'a Draw, window_rect: Rect) -> Self {
        Self {
            draw,
            window_rect,
            fill: rgb(0, 0, 0),
        }
    }

    // Centre of a canvas-space rectangle in window space
    fn to_window(&self, x: i64, y: i64, w: i64, h: i64) -> Point2 {
        pt2(
            self.window_rect.left() + x as f32 + w as f32 / 2.0,
            self.window_rect.top() - y as f32 - h as f32 / 2.0,
        )
    }
}

impl Surface for NannouSurface<'_> {
    fn set_fill(&mut self, color: Color) {
        self.fill = rgb(color[0], color[1], color[2]);
    }

    fn fill_rect(&mut self, x: i64, y: i64, w: i64, h: i64) {
        // Normalise so negative extents still cover the right area
        let (x, w) = if w < 0 { (x + w, -w) } else { (x, w) };
        let (y, h) = if h < 0 { (y + h, -h) } else { (y, h) };

        self.draw
            .rect()
            .xy(self.to_window(x, y, w, h))
            .w_h(w as f32, h as f32)
            .color(self.fill);
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let mut surface = NannouSurface::new(&draw, app.window_rect());

    let plotted = model.game.draw(model.viewport, &mut surface);
    model.debug_info.plotted.set(plotted);

    if let Err(e) = draw.to_frame(app, &frame) {
        log::error!("Failed to render frame: {:?}", e);
    }

    if let Err(e) = model.egui.draw_to_frame(&frame) {
        log::error!("Failed to render UI: {:?}", e);
    }
}
