/*
 * Background Component Module
 *
 * ParticleBackground is the mountable element. Mounting seeds the field,
 * subscribes to resize and pointer-move events and requests the first
 * frame. Each frame callback steps the field and requests the next one.
 * Unmounting removes both listeners and cancels the frame loop, so the
 * chain stops even if a request is still pending with the host.
 *
 * Each piece of state has a single writer: resize events write the
 * surface size, pointer events write the pointer, frames write the
 * particles.
 */

use rand::Rng;
use tracing::{debug, info, trace};

use crate::error::FieldError;
use crate::field::{FrameStats, ParticleField};
use crate::host::{EventHub, EventKind, HostEvent, ListenerId};
use crate::params::FieldParams;
use crate::scheduler::{FrameLoop, FrameTicket};
use crate::surface::{Surface, SurfaceSize};

pub struct ParticleBackground {
    field: ParticleField,
    frame_loop: FrameLoop,
    resize_listener: ListenerId,
    pointer_listener: ListenerId,
}

impl ParticleBackground {
    // `viewport` is None when the host could not provide a drawing surface.
    // In that case nothing is registered and no frame is requested.
    pub fn mount<R: Rng + ?Sized>(
        hub: &mut EventHub,
        viewport: Option<SurfaceSize>,
        params: FieldParams,
        rng: &mut R,
    ) -> Result<Self, FieldError> {
        let size = match viewport {
            Some(size) if size.is_drawable() => size,
            _ => return Err(FieldError::SurfaceUnavailable),
        };
        params.validate()?;

        let field = ParticleField::seed(size, params, rng);
        let frame_loop = FrameLoop::start();
        let resize_listener = hub.subscribe(EventKind::Resize);
        let pointer_listener = hub.subscribe(EventKind::PointerMove);
        hub.request_frame(frame_loop.ticket());

        info!(
            particles = field.len(),
            width = size.width,
            height = size.height,
            "particle background mounted"
        );

        Ok(Self {
            field,
            frame_loop,
            resize_listener,
            pointer_listener,
        })
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    pub fn frames(&self) -> u64 {
        self.frame_loop.frames()
    }

    // Apply a host event. Returns false if no listener wants it.
    pub fn dispatch(&mut self, hub: &EventHub, event: HostEvent) -> bool {
        if !self.is_running() || !hub.wants(&event) {
            return false;
        }
        match event {
            HostEvent::Resized(size) => {
                debug!(width = size.width, height = size.height, "surface resized");
                self.field.resize(size);
            }
            HostEvent::PointerMoved(position) => self.field.pointer_moved(position),
        }
        true
    }

    // Frame callback: step the field and ask for the next frame.
    // A dead or foreign ticket draws nothing and schedules nothing.
    pub fn on_frame<S: Surface + ?Sized>(
        &mut self,
        hub: &mut EventHub,
        ticket: FrameTicket,
        surface: &mut S,
    ) -> Option<FrameStats> {
        let mut stats = None;
        let field = &mut self.field;
        let ran = self.frame_loop.run_frame(&ticket, || {
            stats = Some(field.step(surface));
        });
        if !ran {
            return None;
        }

        hub.request_frame(self.frame_loop.ticket());
        if let Some(stats) = stats {
            trace!(edges = stats.edges, particles = stats.particles, "frame");
        }
        stats
    }

    // Take the host's pending frame, if any, and run it
    pub fn pump<S: Surface + ?Sized>(&mut self, hub: &mut EventHub, surface: &mut S) -> Option<FrameStats> {
        let ticket = hub.take_frame()?;
        self.on_frame(hub, ticket, surface)
    }

    pub fn unmount(self, hub: &mut EventHub) {
        hub.unsubscribe(self.resize_listener);
        hub.unsubscribe(self.pointer_listener);
        self.frame_loop.cancel();
        info!(frames = self.frame_loop.frames(), "particle background unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::DrawList;
    use nannou::prelude::vec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn mounted(hub: &mut EventHub) -> ParticleBackground {
        let mut rng = StdRng::seed_from_u64(42);
        ParticleBackground::mount(hub, Some(SurfaceSize::new(1024.0, 768.0)), FieldParams::default(), &mut rng)
            .expect("mount should succeed")
    }

    #[test]
    fn mount_registers_two_listeners_and_a_frame() {
        let mut hub = EventHub::new();
        let background = mounted(&mut hub);

        assert_eq!(hub.listener_count(), 2);
        assert!(hub.is_subscribed(EventKind::Resize));
        assert!(hub.is_subscribed(EventKind::PointerMove));
        assert!(hub.has_pending_frame());
        assert!(background.is_running());
        assert_eq!(background.field().len(), 80);
    }

    #[test]
    fn missing_surface_mounts_nothing() {
        let mut hub = EventHub::new();
        let mut rng = StdRng::seed_from_u64(1);

        let result = ParticleBackground::mount(&mut hub, None, FieldParams::default(), &mut rng);

        assert!(matches!(result, Err(FieldError::SurfaceUnavailable)));
        assert_eq!(hub.listener_count(), 0);
        assert!(hub.take_frame().is_none());
    }

    #[test]
    fn zero_sized_viewport_counts_as_missing() {
        let mut hub = EventHub::new();
        let mut rng = StdRng::seed_from_u64(1);

        let result =
            ParticleBackground::mount(&mut hub, Some(SurfaceSize::new(0.0, 0.0)), FieldParams::default(), &mut rng);

        assert!(matches!(result, Err(FieldError::SurfaceUnavailable)));
    }

    #[test]
    fn invalid_params_mount_nothing() {
        let mut hub = EventHub::new();
        let mut rng = StdRng::seed_from_u64(1);
        let params = FieldParams {
            glow_radius: -1.0,
            ..FieldParams::default()
        };

        let result = ParticleBackground::mount(&mut hub, Some(SurfaceSize::new(10.0, 10.0)), params, &mut rng);

        assert!(matches!(result, Err(FieldError::InvalidParams(_))));
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn each_frame_requests_the_next() {
        let mut hub = EventHub::new();
        let mut background = mounted(&mut hub);
        let mut list = DrawList::new();

        for _ in 0..3 {
            let stats = background.pump(&mut hub, &mut list).expect("frame should run");
            assert_eq!(stats.particles, 80);
            assert!(hub.has_pending_frame());
        }
        assert_eq!(background.frames(), 3);
    }

    #[test]
    fn pointer_event_updates_the_pointer() {
        let mut hub = EventHub::new();
        let mut background = mounted(&mut hub);

        assert!(background.dispatch(&hub, HostEvent::PointerMoved(vec2(12.0, 34.0))));
        assert_eq!(background.field().pointer(), vec2(12.0, 34.0));
    }

    #[test]
    fn unmount_stops_frames_and_listeners() {
        let mut hub = EventHub::new();
        let background = mounted(&mut hub);

        background.unmount(&mut hub);

        assert_eq!(hub.listener_count(), 0);
        assert!(hub.take_frame().is_none());
    }
}
