// SPDX-License-Identifier: MPL-2.0
//! Per-attachment overlay configuration.
//!
//! An [`OverlayConfig`] is built once when a host attaches an overlay and is
//! immutable for the attachment's lifetime; replacing the attachment replaces
//! the configuration. The plain data enums derive serde so hosts can persist
//! presentation preferences alongside their own settings.

use crate::animation::Animation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default configuration values.
pub mod defaults {
    use std::time::Duration;

    /// Auto-dismiss delay applied when none is set explicitly.
    pub const AUTOHIDE: Duration = Duration::from_secs(3);

    /// Tapping the overlay content dismisses it.
    pub const CLOSE_ON_TAP: bool = true;

    /// Tapping outside the overlay content does not dismiss it.
    pub const CLOSE_ON_TAP_OUTSIDE: bool = false;

    /// Vertical inset of a floater from the screen edge.
    pub const FLOATER_VERTICAL_PADDING: f32 = 50.0;
}

/// Horizontal screen edge an edge toast slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Vertical anchor edge for toast and floater kinds.
///
/// For alerts the position only determines the slide direction; the
/// displayed placement is always centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Position {
    Top,
    #[default]
    Bottom,
}

/// The visual kind of a message overlay.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum MessageKind {
    /// Centered modal message.
    #[default]
    Alert,
    /// Message flush against the anchored edge.
    Toast,
    /// Toast inset from the anchored edge by a vertical padding.
    Floater {
        /// Distance between the screen edge and the floater.
        vertical_padding: f32,
    },
    /// Toast that slides in horizontally from a screen edge.
    EdgeToast {
        /// Edge the toast enters from and retreats to.
        side: Side,
    },
}

impl MessageKind {
    /// A floater with the default vertical padding.
    #[must_use]
    pub fn floater() -> Self {
        Self::Floater {
            vertical_padding: defaults::FLOATER_VERTICAL_PADDING,
        }
    }

    /// Whether this kind is displayed centered regardless of position.
    #[must_use]
    pub fn is_centered(self) -> bool {
        matches!(self, Self::Alert)
    }

    /// Whether this kind slides horizontally from a screen edge.
    #[must_use]
    pub fn is_edge(self) -> bool {
        matches!(self, Self::EdgeToast { .. })
    }
}

type Callback = Box<dyn Fn()>;

/// Immutable configuration for one overlay attachment.
///
/// Built with the builder methods; unset fields keep the defaults from
/// [`defaults`]:
///
/// ```
/// use iced_message::{MessageKind, OverlayConfig, Position};
/// use std::time::Duration;
///
/// let config = OverlayConfig::new()
///     .kind(MessageKind::Toast)
///     .position(Position::Bottom)
///     .autohide(Some(Duration::from_secs(3)));
/// assert!(config.closes_on_tap());
/// ```
pub struct OverlayConfig {
    kind: MessageKind,
    position: Position,
    animation: Animation,
    autohide: Option<Duration>,
    horizontal_padding: Option<f32>,
    close_on_tap: bool,
    close_on_tap_outside: bool,
    on_tap: Option<Callback>,
    on_dismiss: Option<Callback>,
}

impl OverlayConfig {
    /// A configuration with all defaults: centered alert, bottom slide
    /// direction, ease-out animation, 3 s autohide, close on tap.
    #[must_use]
    pub fn new() -> Self {
        Self {
            kind: MessageKind::default(),
            position: Position::default(),
            animation: Animation::default(),
            autohide: Some(defaults::AUTOHIDE),
            horizontal_padding: None,
            close_on_tap: defaults::CLOSE_ON_TAP,
            close_on_tap_outside: defaults::CLOSE_ON_TAP_OUTSIDE,
            on_tap: None,
            on_dismiss: None,
        }
    }

    /// Sets the message kind.
    #[must_use]
    pub fn kind(mut self, kind: MessageKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the anchor edge.
    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Sets the slide animation.
    #[must_use]
    pub fn animation(mut self, animation: Animation) -> Self {
        self.animation = animation;
        self
    }

    /// Sets the auto-dismiss delay. `None` disables auto-dismiss.
    #[must_use]
    pub fn autohide(mut self, autohide: Option<Duration>) -> Self {
        self.autohide = autohide;
        self
    }

    /// Narrows the overlay content to the viewport width minus `padding`.
    /// Negative values clamp to zero.
    #[must_use]
    pub fn horizontal_padding(mut self, padding: f32) -> Self {
        self.horizontal_padding = Some(padding.max(0.0));
        self
    }

    /// Whether tapping the overlay content dismisses it.
    #[must_use]
    pub fn close_on_tap(mut self, close: bool) -> Self {
        self.close_on_tap = close;
        self
    }

    /// Whether tapping outside the overlay content dismisses it.
    #[must_use]
    pub fn close_on_tap_outside(mut self, close: bool) -> Self {
        self.close_on_tap_outside = close;
        self
    }

    /// Callback invoked when the content is tapped (after the dismissal
    /// request, so the callback may re-present).
    #[must_use]
    pub fn on_tap(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_tap = Some(Box::new(callback));
        self
    }

    /// Callback invoked once per show/hide cycle when the slide-out
    /// completes.
    #[must_use]
    pub fn on_dismiss(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_dismiss = Some(Box::new(callback));
        self
    }

    /// The configured message kind.
    #[must_use]
    pub fn message_kind(&self) -> MessageKind {
        self.kind
    }

    /// The configured anchor edge.
    #[must_use]
    pub fn anchor(&self) -> Position {
        self.position
    }

    /// The configured slide animation.
    #[must_use]
    pub fn slide_animation(&self) -> Animation {
        self.animation
    }

    /// The configured auto-dismiss delay, if any.
    #[must_use]
    pub fn autohide_duration(&self) -> Option<Duration> {
        self.autohide
    }

    /// The configured horizontal padding, if any.
    #[must_use]
    pub fn content_horizontal_padding(&self) -> Option<f32> {
        self.horizontal_padding
    }

    /// Whether tapping the content dismisses the overlay.
    #[must_use]
    pub fn closes_on_tap(&self) -> bool {
        self.close_on_tap
    }

    /// Whether tapping outside the content dismisses the overlay.
    #[must_use]
    pub fn closes_on_tap_outside(&self) -> bool {
        self.close_on_tap_outside
    }

    pub(crate) fn tap_callback(&self) -> Option<&Callback> {
        self.on_tap.as_ref()
    }

    pub(crate) fn dismiss_callback(&self) -> Option<&Callback> {
        self.on_dismiss.as_ref()
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OverlayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayConfig")
            .field("kind", &self.kind)
            .field("position", &self.position)
            .field("animation", &self.animation)
            .field("autohide", &self.autohide)
            .field("horizontal_padding", &self.horizontal_padding)
            .field("close_on_tap", &self.close_on_tap)
            .field("close_on_tap_outside", &self.close_on_tap_outside)
            .field("on_tap", &self.on_tap.is_some())
            .field("on_dismiss", &self.on_dismiss.is_some())
            .finish()
    }
}
