/*
 * Debug Information Module
 *
 * Frame metrics shown in the UI panel when debug output is enabled.
 */

use std::cell::Cell;
use std::time::Duration;

#[derive(Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks: u64,
    // Written by the view, which only gets a shared reference
    pub plotted: Cell<usize>,
}
