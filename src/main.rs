/*
 * Particle Background
 *
 * Opens a window with the animated particle field behind it: slowly
 * drifting points, linked by faint lines when they come close, that
 * brighten and glow as the mouse approaches.
 *
 * Space mounts/unmounts the background, D toggles the debug overlay.
 * Set RUST_LOG=debug for resize and lifecycle logging.
 */

use particle_field::app::{model, update};

fn main() {
    tracing_subscriber::fmt::init();

    nannou::app(model)
        .update(update)
        .run();
}
