// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss timer holder.
//!
//! [`DismissTimer`] owns at most one pending scheduled action. Scheduling a
//! new action always replaces the previous one, so there is no window in
//! which both an old and a new deadline could fire. The timer is a polled
//! deadline slot rather than a spawned task: the overlay's tick subscription
//! calls [`DismissTimer::poll`] and everything stays on the UI thread,
//! cancellable by plain ownership.

use std::time::{Duration, Instant};

/// What to do when the pending deadline elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Dismiss an alert/toast/floater after its autohide delay.
    AutoDismiss,
    /// Start the edge toast's return-to-hidden slide.
    EdgeRetract,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    fire_at: Instant,
    action: TimerAction,
}

/// Holder for the single pending dismiss action.
#[derive(Debug, Clone, Copy, Default)]
pub struct DismissTimer {
    pending: Option<Pending>,
}

impl DismissTimer {
    /// An empty timer with nothing scheduled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `action` to fire `delay` after `now`, replacing any pending
    /// action.
    ///
    /// A zero delay fires on the next poll rather than erroring.
    pub fn schedule(&mut self, now: Instant, delay: Duration, action: TimerAction) {
        log::trace!("scheduling {action:?} in {delay:?}");
        self.pending = Some(Pending {
            fire_at: now + delay,
            action,
        });
    }

    /// Cancels the pending action, if any.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            log::trace!("cancelled pending dismiss action");
        }
    }

    /// Fires the pending action if its deadline has passed.
    ///
    /// Returns the action at most once; the slot is cleared on fire.
    pub fn poll(&mut self, now: Instant) -> Option<TimerAction> {
        match self.pending {
            Some(pending) if now >= pending.fire_at => {
                self.pending = None;
                Some(pending.action)
            }
            _ => None,
        }
    }

    /// Whether an action is scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The pending deadline, if any.
    #[must_use]
    pub fn fire_at(&self) -> Option<Instant> {
        self.pending.map(|pending| pending.fire_at)
    }
}
