#![forbid(unsafe_code)]

//! Trigger events to open requests.
//!
//! Pointer hover is debounced: entering schedules an open after
//! `enter_delay`, leaving schedules a close after `leave_delay`, and any
//! newer event replaces the pending one. Focus and click act immediately.
//! The controller never owns visibility; it only emits requests that the
//! open-state machine decides on.

use std::time::{Duration, Instant};

use bitflags::bitflags;

bitflags! {
    /// Interactions that toggle the overlay.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TriggerActions: u8 {
        const HOVER        = 0b0001;
        const FOCUS        = 0b0010;
        const CLICK        = 0b0100;
        const CONTEXT_MENU = 0b1000;
    }
}

impl Default for TriggerActions {
    fn default() -> Self {
        Self::HOVER
    }
}

/// An interaction on the trigger element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    PointerEnter,
    PointerLeave,
    Focus,
    Blur,
    Click,
    ContextMenu,
}

/// Hover delays. Both default to 100ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerDelays {
    pub enter: Duration,
    pub leave: Duration,
}

impl Default for TriggerDelays {
    fn default() -> Self {
        Self {
            enter: Duration::from_millis(100),
            leave: Duration::from_millis(100),
        }
    }
}

/// Turns trigger events into (possibly delayed) open requests.
#[derive(Debug, Clone)]
pub struct TriggerController {
    actions: TriggerActions,
    delays: TriggerDelays,
    pending: Option<(bool, Instant)>,
}

impl TriggerController {
    pub fn new(actions: TriggerActions, delays: TriggerDelays) -> Self {
        Self {
            actions,
            delays,
            pending: None,
        }
    }

    /// Update configuration from new props. A pending request survives.
    pub fn configure(&mut self, actions: TriggerActions, delays: TriggerDelays) {
        self.actions = actions;
        self.delays = delays;
    }

    /// Feed an event. `open` is the current rendered visibility, used by
    /// toggling actions.
    ///
    /// Returns a request that is due immediately; delayed requests are
    /// returned later by [`poll`](Self::poll).
    pub fn handle(&mut self, event: TriggerEvent, open: bool, now: Instant) -> Option<bool> {
        let (action, request) = match event {
            TriggerEvent::PointerEnter => (TriggerActions::HOVER, true),
            TriggerEvent::PointerLeave => (TriggerActions::HOVER, false),
            TriggerEvent::Focus => (TriggerActions::FOCUS, true),
            TriggerEvent::Blur => (TriggerActions::FOCUS, false),
            TriggerEvent::Click => (TriggerActions::CLICK, !open),
            TriggerEvent::ContextMenu => (TriggerActions::CONTEXT_MENU, !open),
        };
        if !self.actions.contains(action) {
            return None;
        }
        self.pending = None;

        let delay = match event {
            TriggerEvent::PointerEnter => self.delays.enter,
            TriggerEvent::PointerLeave => self.delays.leave,
            _ => Duration::ZERO,
        };
        if delay.is_zero() {
            return Some(request);
        }
        match now.checked_add(delay) {
            Some(due) => {
                tracing::trace!(?event, ?delay, "scheduled open request");
                self.pending = Some((request, due));
            }
            // Beyond the clock's range: the request can never come due.
            None => tracing::debug!(?event, ?delay, "open request delay out of range; dropped"),
        }
        None
    }

    /// Return the pending request if its delay has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<bool> {
        match self.pending {
            Some((request, due)) if now >= due => {
                self.pending = None;
                Some(request)
            }
            _ => None,
        }
    }

    /// When the pending request becomes due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, due)| due)
    }

    /// Drop any pending request.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl Default for TriggerController {
    fn default() -> Self {
        Self::new(TriggerActions::default(), TriggerDelays::default())
    }
}
