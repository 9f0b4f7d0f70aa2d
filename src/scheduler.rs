/*
 * Frame Scheduler Module
 *
 * The field animates with a cooperative frame loop: every frame callback
 * asks the host for the next one. FrameLoop models that chain as a
 * cancellable repeating task. It hands out FrameTickets which share its
 * liveness flag; once the loop is cancelled (explicitly or by being
 * dropped) every outstanding ticket is dead and no further frame runs.
 *
 * Everything here lives on the host UI thread, so the flag is a plain
 * Rc<Cell<bool>>. Neither type is Send.
 */

use std::cell::Cell;
use std::rc::Rc;

// A request for one frame, valid while its loop is alive
#[derive(Debug, Clone)]
pub struct FrameTicket {
    alive: Rc<Cell<bool>>,
}

impl FrameTicket {
    pub fn is_live(&self) -> bool {
        self.alive.get()
    }

    fn belongs_to(&self, frame_loop: &FrameLoop) -> bool {
        Rc::ptr_eq(&self.alive, &frame_loop.alive)
    }
}

#[derive(Debug)]
pub struct FrameLoop {
    alive: Rc<Cell<bool>>,
    frames: u64,
}

impl FrameLoop {
    pub fn start() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
            frames: 0,
        }
    }

    pub fn ticket(&self) -> FrameTicket {
        FrameTicket {
            alive: Rc::clone(&self.alive),
        }
    }

    pub fn is_running(&self) -> bool {
        self.alive.get()
    }

    // Frames that actually ran
    pub fn frames(&self) -> u64 {
        self.frames
    }

    // Run `frame` if the ticket is live and was issued by this loop.
    // Returns whether the frame ran.
    pub fn run_frame<F: FnOnce()>(&mut self, ticket: &FrameTicket, frame: F) -> bool {
        if !self.is_running() || !ticket.belongs_to(self) {
            return false;
        }
        frame();
        self.frames += 1;
        true
    }

    pub fn cancel(&self) {
        self.alive.set(false);
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
