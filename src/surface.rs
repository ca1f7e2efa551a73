/*
 * Surface Module
 *
 * The three drawing primitives the simulation renders with. Coordinates are
 * canvas coordinates: origin at the top-left corner, y growing downward.
 * CommandRecorder keeps every call in memory for headless runs.
 */

use crate::params::Color;

pub trait Surface {
    fn set_fill(&mut self, color: Color);
    fn fill_rect(&mut self, x: i64, y: i64, w: i64, h: i64);

    // A 1x1 square in the current fill colour
    fn fill_pixel(&mut self, x: i64, y: i64) {
        self.fill_rect(x, y, 1, 1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    SetFill(Color),
    FillRect { x: i64, y: i64, w: i64, h: i64 },
    FillPixel { x: i64, y: i64 },
}

#[derive(Debug, Default)]
pub struct CommandRecorder {
    pub commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn pixels(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.commands.iter().filter_map(|cmd| match *cmd {
            DrawCommand::FillPixel { x, y } => Some((x, y)),
            _ => None,
        })
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels().count()
    }
}

impl Surface for CommandRecorder {
    fn set_fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetFill(color));
    }

    fn fill_rect(&mut self, x: i64, y: i64, w: i64, h: i64) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h });
    }

    fn fill_pixel(&mut self, x: i64, y: i64) {
        self.commands.push(DrawCommand::FillPixel { x, y });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_counts_only_pixels() {
        let mut surface = CommandRecorder::new();
        surface.set_fill([0, 0, 0]);
        surface.fill_rect(0, 0, 10, 10);
        surface.fill_pixel(1, 2);
        surface.fill_pixel(3, 4);
        assert_eq!(surface.commands.len(), 4);
        assert_eq!(surface.pixel_count(), 2);
        assert_eq!(surface.pixels().collect::<Vec<_>>(), vec![(1, 2), (3, 4)]);
    }
}
