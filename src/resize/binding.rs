//! Event plumbing around a [`ResizeController`].
//!
//! The controller only knows about gestures. Tracking a drag also means
//! listening for move/up events page-wide for exactly as long as a session is
//! active: nothing on an ignored pointer-down, one registration per session,
//! and nothing left behind after pointer-up. [`GestureBinding`] owns that
//! decision; a [`ListenerHost`] performs the actual registration.

#[cfg(test)]
#[path = "binding_test.rs"]
mod binding_test;

use crate::error::UiError;
use crate::resize::controller::ResizeController;
use crate::resize::layout::{LayoutTree, PointerSample};
use crate::resize::session::SizeUpdate;

/// Registers the session-scoped move/up listeners.
pub trait ListenerHost {
    /// Live registration; dropping it removes the listeners.
    type Registration;

    fn register(&self) -> Result<Self::Registration, UiError>;
}

/// A controller plus the listener registration of its active session.
pub struct GestureBinding<T: LayoutTree, H: ListenerHost> {
    controller: ResizeController<T>,
    host: H,
    registration: Option<H::Registration>,
}

impl<T: LayoutTree, H: ListenerHost> GestureBinding<T, H> {
    pub fn new(controller: ResizeController<T>, host: H) -> Self {
        Self {
            controller,
            host,
            registration: None,
        }
    }

    #[must_use]
    pub fn controller(&self) -> &ResizeController<T> {
        &self.controller
    }

    /// Whether move/up listeners are currently registered.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.registration.is_some()
    }

    /// Forward a pointer-down. Returns whether a session started, in which
    /// case the event's default action should be suppressed.
    pub fn pointer_down(&mut self, target: &T::Node, at: PointerSample) -> bool {
        if !self.controller.pointer_down(target, at).is_started() {
            return false;
        }

        // Release the previous session's listeners before adding new ones.
        self.registration = None;
        match self.host.register() {
            Ok(registration) => self.registration = Some(registration),
            Err(err) => {
                leptos::logging::error!("resizer listener registration failed: {err}");
                self.controller.pointer_up();
            }
        }
        true
    }

    pub fn pointer_move(&mut self, at: PointerSample) -> Option<SizeUpdate> {
        self.controller.pointer_move(at)
    }

    /// Forward a pointer-up: ends the session and removes its listeners.
    pub fn pointer_up(&mut self) -> bool {
        self.registration = None;
        self.controller.pointer_up()
    }
}
