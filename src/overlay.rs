// SPDX-License-Identifier: MPL-2.0
//! The message overlay component and its attachment API.
//!
//! `MessageView` follows the Elm-style "state down, messages up" pattern:
//! the host owns the component state, forwards [`Message`]s through
//! [`MessageView::update`], renders with [`MessageView::attach`], and reacts
//! to the returned [`Effect`]s. One `MessageView` drives one overlay; to
//! replace the configuration, replace the component.
//!
//! # Usage
//!
//! ```ignore
//! use iced_message::{MessageKind, MessageView, OverlayConfig, Position};
//!
//! // In the host state:
//! let overlay = MessageView::new(
//!     OverlayConfig::new()
//!         .kind(MessageKind::Toast)
//!         .position(Position::Bottom),
//! );
//!
//! // In the host update:
//! match overlay.update(message) {
//!     iced_message::Effect::Closed(_) => self.show_toast = false,
//!     _ => {}
//! }
//!
//! // In the host view:
//! overlay.attach(host_content, toast_content, AppMessage::Overlay)
//! ```

use crate::config::{MessageKind, OverlayConfig};
use crate::geometry::RectTracker;
use crate::lifecycle::{DismissReason, Event, Lifecycle, Phase, SlideTargets};
use crate::offset;
use crate::viewport::Viewport;
use crate::widget::{BoundsObserver, Translate};
use iced::widget::{mouse_area, Container, Space, Stack};
use iced::{alignment, Element, Length, Rectangle, Size, Subscription, Vector};
use std::time::{Duration, Instant};

/// Tick cadence while a slide or deadline is live.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Messages driving one overlay attachment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// The host flipped its presented flag.
    SetPresented(bool),
    /// The overlay content was tapped.
    ContentTapped,
    /// The area outside the overlay content was tapped.
    OutsideTapped,
    /// Animation/deadline tick.
    Tick,
    /// Measured bounds of the host container changed.
    HostBounds(Rectangle),
    /// Measured bounds of the overlay content changed.
    ContentBounds(Rectangle),
    /// The hosting window was resized.
    ViewportResized(Size),
}

/// State changes the host may need to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing the host needs to know about.
    None,
    /// The overlay dropped its own presented flag (tap, outside tap, or
    /// timeout); hosts mirroring the flag should sync to `false`. The
    /// slide-out is still running.
    Closed(DismissReason),
    /// The slide-in completed.
    Shown,
    /// The slide-out completed and the dismiss callback ran; the presented
    /// flag is down.
    Dismissed,
}

/// One overlay attachment: configuration, measured geometry, and the
/// show/hide lifecycle.
///
/// Everything, including the pending auto-dismiss deadline, is plain owned
/// state: dropping the component when the host detaches the overlay cancels
/// all pending work.
#[derive(Debug)]
pub struct MessageView {
    config: OverlayConfig,
    lifecycle: Lifecycle,
    host_rect: RectTracker,
    content_rect: RectTracker,
    viewport: Viewport,
}

impl MessageView {
    /// Creates a hidden overlay with the given configuration.
    #[must_use]
    pub fn new(config: OverlayConfig) -> Self {
        let lifecycle = Lifecycle::new(
            config.slide_animation(),
            config.autohide_duration(),
            config.message_kind().is_edge(),
        );

        let mut view = Self {
            config,
            lifecycle,
            host_rect: RectTracker::new(),
            content_rect: RectTracker::new(),
            viewport: Viewport::default(),
        };
        view.refresh_targets(Instant::now());
        view
    }

    /// Sets the initial viewport (size and chrome clearance).
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self.refresh_targets(Instant::now());
        self
    }

    /// The attachment configuration.
    #[must_use]
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Whether the overlay is presented.
    #[must_use]
    pub fn is_presented(&self) -> bool {
        self.lifecycle.is_presented()
    }

    /// Where the overlay is in its show/hide cycle.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    /// Last measured bounds of the host container.
    #[must_use]
    pub fn host_bounds(&self) -> Rectangle {
        self.host_rect.rect()
    }

    /// Last measured bounds of the overlay content.
    #[must_use]
    pub fn content_bounds(&self) -> Rectangle {
        self.content_rect.rect()
    }

    /// The current screen-space translation of the overlay content relative
    /// to its centered position inside the host.
    ///
    /// Edge toasts move on the horizontal axis over a fixed vertical inset;
    /// every other kind moves vertically.
    #[must_use]
    pub fn translation(&self) -> Vector {
        if self.config.message_kind().is_edge() {
            let vertical = offset::displayed_offset(
                self.config.message_kind(),
                self.config.anchor(),
                self.host_rect.rect(),
                self.content_rect.rect(),
            );
            Vector::new(self.lifecycle.offset(), vertical)
        } else {
            Vector::new(0.0, self.lifecycle.offset())
        }
    }

    /// Handles a message using the wall clock.
    pub fn update(&mut self, message: Message) -> Effect {
        self.update_at(message, Instant::now())
    }

    /// Handles a message at an explicit instant.
    ///
    /// This is the deterministic entry point: tests (and hosts with their
    /// own clock) drive the whole lifecycle through it.
    pub fn update_at(&mut self, message: Message, now: Instant) -> Effect {
        match message {
            Message::SetPresented(true) => {
                self.refresh_targets(now);
                self.lifecycle.present(now);
                Effect::None
            }
            Message::SetPresented(false) => {
                self.lifecycle.request_dismiss(now, DismissReason::External);
                Effect::None
            }
            Message::ContentTapped => {
                if self.config.closes_on_tap()
                    && self.lifecycle.request_dismiss(now, DismissReason::Tap)
                {
                    // The dismissal request is issued first so the callback
                    // may re-present without being clobbered.
                    if let Some(on_tap) = self.config.tap_callback() {
                        on_tap();
                    }
                    return Effect::Closed(DismissReason::Tap);
                }
                Effect::None
            }
            Message::OutsideTapped => {
                if self.config.closes_on_tap_outside()
                    && self
                        .lifecycle
                        .request_dismiss(now, DismissReason::TapOutside)
                {
                    return Effect::Closed(DismissReason::TapOutside);
                }
                Effect::None
            }
            Message::Tick => self.advance(now),
            Message::HostBounds(rect) => {
                if self.host_rect.submit(rect) {
                    self.refresh_targets(now);
                }
                Effect::None
            }
            Message::ContentBounds(rect) => {
                if self.content_rect.submit(rect) {
                    self.refresh_targets(now);
                }
                Effect::None
            }
            Message::ViewportResized(size) => {
                self.viewport.resize(size);
                self.refresh_targets(now);
                Effect::None
            }
        }
    }

    /// The tick pump, active only while a slide or deadline is live.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.lifecycle.is_active() {
            iced::time::every(TICK_INTERVAL).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Decorates `host` with the overlay layer.
    ///
    /// Layers, bottom to top: the bounds-observed host content, a
    /// transparent outside-tap catcher (only while presented, and only when
    /// configured), and the overlay content — tap-area-wrapped, bounds
    /// observed, centered in the host and shifted by the current
    /// translation. `lift` maps overlay messages into the host's message
    /// type.
    pub fn attach<'a, M>(
        &'a self,
        host: impl Into<Element<'a, M>>,
        content: impl Into<Element<'a, M>>,
        lift: impl Fn(Message) -> M + Clone + 'a,
    ) -> Element<'a, M>
    where
        M: Clone + 'a,
    {
        let host_lift = lift.clone();
        let observed_host =
            BoundsObserver::new(host, move |rect| host_lift(Message::HostBounds(rect)));

        let mut body: Element<'a, M> = content.into();
        if self.config.closes_on_tap() {
            body = mouse_area(body)
                .on_press(lift(Message::ContentTapped))
                .into();
        }
        let content_lift = lift.clone();
        body = BoundsObserver::new(body, move |rect| {
            content_lift(Message::ContentBounds(rect))
        })
        .into();

        if !self.config.message_kind().is_edge() {
            if let Some(padding) = self.config.content_horizontal_padding() {
                let width = (self.effective_viewport_width() - padding).max(0.0);
                if width > 0.0 {
                    body = Container::new(body).width(Length::Fixed(width)).into();
                }
            }
        }

        let overlay_layer = Container::new(Translate::new(body, self.translation()))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        let mut stack = Stack::new().push(observed_host);
        if self.config.closes_on_tap_outside() && self.lifecycle.is_presented() {
            stack = stack.push(
                mouse_area(Space::new().width(Length::Fill).height(Length::Fill))
                    .on_press(lift(Message::OutsideTapped)),
            );
        }
        stack.push(overlay_layer).into()
    }

    fn advance(&mut self, now: Instant) -> Effect {
        match self.lifecycle.tick(now) {
            Some(Event::BecameShown) => Effect::Shown,
            Some(Event::TimedOut) => {
                if self.lifecycle.is_presented() {
                    // Edge retract in flight: the flag only drops when the
                    // slide lands, so there is nothing to sync yet.
                    Effect::None
                } else {
                    Effect::Closed(DismissReason::Timeout)
                }
            }
            Some(Event::DismissalComplete) => {
                if let Some(on_dismiss) = self.config.dismiss_callback() {
                    on_dismiss();
                }
                Effect::Dismissed
            }
            None => Effect::None,
        }
    }

    fn effective_viewport_width(&self) -> f32 {
        if self.viewport.width() > 0.0 {
            self.viewport.width()
        } else {
            self.host_rect.rect().width
        }
    }

    fn refresh_targets(&mut self, now: Instant) {
        let kind = self.config.message_kind();
        let targets = if let MessageKind::EdgeToast { side } = kind {
            let width = self.effective_viewport_width();
            SlideTargets {
                displayed: offset::edge_resting_offset(
                    side,
                    width,
                    self.content_rect.rect().width,
                ),
                hidden: offset::edge_hidden_offset(side, width),
            }
        } else {
            SlideTargets {
                displayed: offset::displayed_offset(
                    kind,
                    self.config.anchor(),
                    self.host_rect.rect(),
                    self.content_rect.rect(),
                ),
                hidden: offset::hidden_offset(
                    self.config.anchor(),
                    self.host_rect.rect(),
                    self.content_rect.rect(),
                    &self.viewport,
                ),
            }
        };
        self.lifecycle.retarget(now, targets);
    }
}
