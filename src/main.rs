/*
 * Doods
 *
 * A handful of queens wander the window while a swarm of beasts chases
 * them. Every dood steers toward a randomly chosen queen, occasionally
 * switches target, shies away from the window edges and is drawn as a
 * single pixel.
 *
 * Usage: doods [config.toml]   (or set DOODS_CONFIG)
 * Logging is controlled through RUST_LOG and defaults to `info`.
 */

use doods::app;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    app::launch();
}
