/*
 * Viewport Module
 *
 * Current drawing area dimensions. The host is queried once per tick through
 * a ViewportProvider; the movement rule only ever sees the resulting
 * Viewport value, never the host itself.
 */

// Anything that can report the current drawable size
pub trait ViewportProvider {
    fn size(&self) -> (f64, f64);
}

// A provider with a constant size, for headless runs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedViewport {
    pub width: f64,
    pub height: f64,
}

impl FixedViewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl ViewportProvider for FixedViewport {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: sanitize(width, "width"),
            height: sanitize(height, "height"),
        }
    }

    // Resize check. Returns true when the dimensions changed.
    pub fn refresh(&mut self, provider: &impl ViewportProvider) -> bool {
        let (width, height) = provider.size();
        let width = sanitize(width, "width");
        let height = sanitize(height, "height");

        if width == self.width && height == self.height {
            return false;
        }

        self.width = width;
        self.height = height;
        log::info!("Canvas resized to {} * {}", width as i64, height as i64);
        true
    }
}

fn sanitize(value: f64, axis: &str) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        log::warn!("Ignoring invalid viewport {} {}, using 0", axis, value);
        0.0
    }
}
