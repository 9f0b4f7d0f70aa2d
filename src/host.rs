/*
 * Host Module
 *
 * EventHub stands in for the host environment the background is mounted
 * into: it keeps the registry of event listeners and the single pending
 * frame request. The host calls take_frame() once per display refresh;
 * a request whose loop has been cancelled is dropped there, so a torn
 * down component never receives another frame.
 */

use nannou::prelude::*;

use crate::scheduler::FrameTicket;
use crate::surface::SurfaceSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Resize,
    PointerMove,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    Resized(SurfaceSize),
    // Surface-space pointer position
    PointerMoved(Vec2),
}

impl HostEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            HostEvent::Resized(_) => EventKind::Resize,
            HostEvent::PointerMoved(_) => EventKind::PointerMove,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
pub struct EventHub {
    next_id: u64,
    listeners: Vec<(ListenerId, EventKind)>,
    pending_frame: Option<FrameTicket>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, kind: EventKind) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, kind));
        id
    }

    // Returns false if the listener was not registered
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener, _)| *listener != id);
        self.listeners.len() != before
    }

    pub fn is_subscribed(&self, kind: EventKind) -> bool {
        self.listeners.iter().any(|(_, k)| *k == kind)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // Events nobody listens to are not delivered
    pub fn wants(&self, event: &HostEvent) -> bool {
        self.is_subscribed(event.kind())
    }

    // Schedule the next frame; a newer request replaces an older one
    pub fn request_frame(&mut self, ticket: FrameTicket) {
        self.pending_frame = Some(ticket);
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending_frame.as_ref().is_some_and(FrameTicket::is_live)
    }

    // Hand out the pending frame for this refresh, if its loop is still alive
    pub fn take_frame(&mut self) -> Option<FrameTicket> {
        self.pending_frame.take().filter(FrameTicket::is_live)
    }
}
