//! Control event queue for the Kiln engine.
//!
//! Top-level control signals (quit, resize, focus changes) are pushed by the
//! platform layer during event pumping and drained by the main loop once per
//! frame. Rendering work does not flow through here; per-frame draw commands
//! go through the push buffer in `kiln-command`.

use serde::{Deserialize, Serialize};
use tracing::error;

/// A top-level control event.
///
/// Events are small fixed-size values; anything larger belongs in a
/// dedicated channel, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// The user or platform asked the application to exit.
    Quit,
    /// The window surface changed size.
    Resize {
        /// New surface width in pixels.
        width: u32,
        /// New surface height in pixels.
        height: u32,
    },
    /// The window gained or lost input focus.
    FocusChanged {
        /// True when focus was gained.
        focused: bool,
    },
}

/// Queue of pending control events.
///
/// Named a queue for historical reasons, but [`consume`](Self::consume) pops
/// the most recently pushed event first (LIFO). Control events are rare
/// enough per frame that the order has never mattered in practice; the
/// behavior is kept as-is rather than silently switched to FIFO.
///
/// Capacity grows by doubling (2, 4, 8, ...). If a growth reservation fails
/// the event is dropped and the failure logged; losing a control event under
/// memory pressure is an accepted degradation, not a fatal error.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<Event>,
}

impl EventQueue {
    /// Create an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event.
    ///
    /// On allocation failure the event is dropped and an error is logged.
    pub fn push(&mut self, event: Event) {
        if self.events.len() == self.events.capacity() {
            let target = (self.events.capacity() * 2).max(2);
            let additional = target - self.events.len();
            if let Err(err) = self.events.try_reserve_exact(additional) {
                error!(?event, %err, "event queue growth failed, dropping event");
                return;
            }
        }
        self.events.push(event);
    }

    /// Pop the most recently pushed event (LIFO).
    ///
    /// Returns `None` when the queue is empty, leaving it unchanged.
    pub fn consume(&mut self) -> Option<Event> {
        self.events.pop()
    }

    /// Number of pending events.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether any events are pending.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consume_pops_lifo() {
        let mut queue = EventQueue::new();
        queue.push(Event::Quit);
        queue.push(Event::Resize {
            width: 800,
            height: 600,
        });
        queue.push(Event::FocusChanged { focused: false });

        assert_eq!(queue.consume(), Some(Event::FocusChanged { focused: false }));
        assert_eq!(
            queue.consume(),
            Some(Event::Resize {
                width: 800,
                height: 600
            })
        );
        assert_eq!(queue.consume(), Some(Event::Quit));
        assert_eq!(queue.consume(), None);
    }

    #[test]
    fn consume_on_empty_leaves_state_unchanged() {
        let mut queue = EventQueue::new();
        assert!(queue.consume().is_none());
        assert!(queue.is_empty());

        queue.push(Event::Quit);
        queue.consume();
        assert!(queue.consume().is_none());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn capacity_doubles_from_two() {
        let mut queue = EventQueue::new();
        queue.push(Event::Quit);
        assert!(queue.events.capacity() >= 2);
        queue.push(Event::Quit);
        queue.push(Event::Quit);
        assert!(queue.events.capacity() >= 4);
        assert_eq!(queue.len(), 3);
    }
}
