// SPDX-License-Identifier: MPL-2.0
//! Show/hide lifecycle state machine.
//!
//! [`Lifecycle`] drives one overlay through
//! `Hidden → Appearing → Shown → Disappearing → Hidden`, reconciling the
//! competing dismiss triggers (auto-dismiss deadline, taps, external state
//! changes) so that whichever fires first wins and the rest become no-ops.
//! It animates a single scalar offset: the vertical slide for
//! alert/toast/floater kinds, or the lateral slide for edge toasts (whose
//! vertical placement is fixed).
//!
//! The machine is clock-agnostic: every entry point takes the current
//! [`Instant`], so tests drive it with synthetic time.

use crate::animation::{Animation, Slide};
use crate::timer::{DismissTimer, TimerAction};
use std::time::{Duration, Instant};

/// Length of the fixed edge toast slide-in/slide-out.
pub const EDGE_SLIDE_DURATION: Duration = Duration::from_millis(500);

/// Where the overlay is in its show/hide cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Parked off screen.
    Hidden,
    /// Sliding toward the displayed offset.
    Appearing,
    /// Resting at the displayed offset.
    Shown,
    /// Sliding back toward the hidden offset.
    Disappearing,
}

/// What triggered a dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The autohide deadline elapsed.
    Timeout,
    /// The overlay content was tapped.
    Tap,
    /// The area outside the overlay content was tapped.
    TapOutside,
    /// The host flipped the presented flag.
    External,
}

/// The offsets the controller slides between on its animated axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlideTargets {
    /// Resting offset while presented.
    pub displayed: f32,
    /// Parked offset while hidden.
    pub hidden: f32,
}

/// Transition produced by a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The slide-in completed; the overlay is now resting.
    BecameShown,
    /// The autohide deadline fired and the presented flag dropped; the
    /// slide-out has started.
    TimedOut,
    /// The slide-out completed and the overlay settled hidden. Emitted at
    /// most once per show/hide cycle.
    DismissalComplete,
}

/// State machine for one overlay attachment.
#[derive(Debug)]
pub struct Lifecycle {
    animation: Animation,
    autohide: Option<Duration>,
    edge: bool,
    phase: Phase,
    presented: bool,
    targets: SlideTargets,
    offset: f32,
    slide: Option<Slide>,
    timer: DismissTimer,
    dismiss_notified: bool,
    /// Set while the edge auto-retract is in flight: the presented flag only
    /// drops once the retract slide completes.
    defer_presented_drop: bool,
}

impl Lifecycle {
    /// A hidden lifecycle.
    ///
    /// `edge` selects the edge toast choreography: a fixed
    /// [`EDGE_SLIDE_DURATION`] ease-in-out slide and a deferred presented
    /// drop on auto-retract.
    #[must_use]
    pub fn new(animation: Animation, autohide: Option<Duration>, edge: bool) -> Self {
        let animation = if edge {
            Animation::ease_in_out(EDGE_SLIDE_DURATION)
        } else {
            animation
        };

        Self {
            animation,
            autohide,
            edge,
            phase: Phase::Hidden,
            presented: false,
            targets: SlideTargets::default(),
            offset: 0.0,
            slide: None,
            timer: DismissTimer::new(),
            dismiss_notified: false,
            defer_presented_drop: false,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current presented flag.
    #[must_use]
    pub fn is_presented(&self) -> bool {
        self.presented
    }

    /// Current offset on the animated axis.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Whether ticks are needed: a slide is in flight or a deadline is
    /// pending.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Appearing | Phase::Disappearing) || self.timer.is_pending()
    }

    /// Updates the slide targets after a geometry change.
    ///
    /// A resting overlay snaps to the new target; an in-flight slide chases
    /// it.
    pub fn retarget(&mut self, now: Instant, targets: SlideTargets) {
        self.targets = targets;
        match self.phase {
            Phase::Hidden => self.offset = targets.hidden,
            Phase::Shown => self.offset = targets.displayed,
            Phase::Appearing => {
                if let Some(slide) = &mut self.slide {
                    slide.retarget(now, targets.displayed);
                }
            }
            Phase::Disappearing => {
                if let Some(slide) = &mut self.slide {
                    slide.retarget(now, targets.hidden);
                }
            }
        }
    }

    /// Starts (or restarts) presentation.
    ///
    /// Pre-empts an in-flight disappearance: the pending dismiss deadline is
    /// cancelled first and the slide-in starts from the overlay's current
    /// position, so a pre-empted cycle never reports a dismissal. Returns
    /// `false` when the overlay is already appearing or shown.
    pub fn present(&mut self, now: Instant) -> bool {
        if self.presented && matches!(self.phase, Phase::Appearing | Phase::Shown) {
            return false;
        }

        self.timer.cancel();
        self.dismiss_notified = false;
        self.defer_presented_drop = false;
        self.presented = true;

        let start = if self.phase == Phase::Hidden {
            self.targets.hidden
        } else {
            self.offset
        };
        self.offset = start;
        self.slide = Some(Slide::new(
            start,
            self.targets.displayed,
            now,
            self.animation,
        ));
        self.phase = Phase::Appearing;
        log::debug!("presenting: sliding {start} -> {}", self.targets.displayed);
        true
    }

    /// Requests dismissal.
    ///
    /// Drops the presented flag immediately and starts the slide-out. Once
    /// the flag is down further requests are no-ops, which is how competing
    /// triggers are reconciled: the first one wins. Returns whether the
    /// request took effect.
    pub fn request_dismiss(&mut self, now: Instant, reason: DismissReason) -> bool {
        if !self.presented || self.phase == Phase::Hidden {
            return false;
        }

        log::debug!("dismiss requested: {reason:?}");
        self.presented = false;
        self.defer_presented_drop = false;
        self.timer.cancel();

        if matches!(self.phase, Phase::Appearing | Phase::Shown) {
            self.slide = Some(Slide::new(
                self.offset,
                self.targets.hidden,
                now,
                self.animation,
            ));
            self.phase = Phase::Disappearing;
        }
        true
    }

    /// Advances deadlines and the in-flight slide.
    ///
    /// At most one transition is performed per tick; with the 16 ms tick
    /// pump a deadline fire and the resulting slide-out completion land on
    /// separate ticks.
    pub fn tick(&mut self, now: Instant) -> Option<Event> {
        if let Some(action) = self.timer.poll(now) {
            return Some(self.fire(action, now));
        }

        let slide = self.slide?;
        self.offset = slide.value(now);
        if !slide.is_done(now) {
            return None;
        }
        self.slide = None;

        match self.phase {
            Phase::Appearing => {
                self.phase = Phase::Shown;
                self.offset = self.targets.displayed;
                if let Some(delay) = self.autohide {
                    let action = if self.edge {
                        TimerAction::EdgeRetract
                    } else {
                        TimerAction::AutoDismiss
                    };
                    self.timer.schedule(now, delay, action);
                }
                log::debug!("shown at offset {}", self.offset);
                Some(Event::BecameShown)
            }
            Phase::Disappearing => {
                self.phase = Phase::Hidden;
                self.offset = self.targets.hidden;
                if self.defer_presented_drop {
                    self.defer_presented_drop = false;
                    self.presented = false;
                }
                if self.dismiss_notified {
                    None
                } else {
                    self.dismiss_notified = true;
                    log::debug!("hidden; dismissal complete");
                    Some(Event::DismissalComplete)
                }
            }
            Phase::Hidden | Phase::Shown => None,
        }
    }

    fn fire(&mut self, action: TimerAction, now: Instant) -> Event {
        match action {
            TimerAction::AutoDismiss => {
                self.presented = false;
                self.slide = Some(Slide::new(
                    self.offset,
                    self.targets.hidden,
                    now,
                    self.animation,
                ));
                self.phase = Phase::Disappearing;
                log::debug!("autohide deadline fired");
                Event::TimedOut
            }
            TimerAction::EdgeRetract => {
                // The presented flag stays up until the retract slide lands.
                self.defer_presented_drop = true;
                self.slide = Some(Slide::new(
                    self.offset,
                    self.targets.hidden,
                    now,
                    self.animation,
                ));
                self.phase = Phase::Disappearing;
                log::debug!("edge retract started");
                Event::TimedOut
            }
        }
    }
}
