/*
 * Particle Field - Module Definitions
 *
 * A decorative particle-field background: drifting points joined by
 * proximity lines, glowing near the pointer. The simulation and its
 * lifecycle are host-agnostic; the nannou host lives in `app`,
 * `input` and `renderer`.
 */

// Re-export key components for easier access
pub use background::ParticleBackground;
pub use error::FieldError;
pub use field::{FrameStats, ParticleField};
pub use host::{EventHub, EventKind, HostEvent};
pub use params::FieldParams;
pub use particle::Particle;
pub use scheduler::{FrameLoop, FrameTicket};
pub use surface::{DrawCommand, DrawList, Surface, SurfaceSize};

// Define modules
pub mod app;
pub mod background;
pub mod debug;
pub mod error;
pub mod field;
pub mod glow;
pub mod host;
pub mod input;
pub mod params;
pub mod particle;
pub mod renderer;
pub mod scheduler;
pub mod surface;
