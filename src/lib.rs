// SPDX-License-Identifier: MPL-2.0
//! `iced_message` provides attachable message overlays for the Iced GUI
//! toolkit: alerts, toasts, floaters, and edge toasts that slide in and out,
//! auto-dismiss after a timeout, and respond to tap gestures.
//!
//! # Components
//!
//! - [`config`] - per-attachment `OverlayConfig` and the message kind enums
//! - [`overlay`] - the `MessageView` component and the attachment API
//! - [`lifecycle`] - the show/hide state machine
//! - [`offset`] - the pure placement calculator
//! - [`timer`] - the single-slot auto-dismiss timer
//! - [`geometry`] - integral-rectangle change detection
//! - [`animation`] - easing curves and the slide tween
//! - [`viewport`] - host-supplied screen size snapshot
//! - [`widget`] - the bounds-observer and translate wrapper widgets
//!
//! # Design Considerations
//!
//! - One overlay per attachment point; stacking is unsupported by design.
//! - All state mutation happens in `update` on the UI thread; widgets report
//!   measurements as messages instead of writing state mid-render.
//! - Rect updates are suppressed unless the pixel-rounded value changes,
//!   which prevents measurement feedback loops.

#![doc(html_root_url = "https://docs.rs/iced_message/0.1.0")]

pub mod animation;
pub mod config;
pub mod geometry;
pub mod lifecycle;
pub mod offset;
pub mod overlay;
pub mod timer;
pub mod viewport;
pub mod widget;

pub use animation::{Animation, Easing};
pub use config::{MessageKind, OverlayConfig, Position, Side};
pub use lifecycle::{DismissReason, Phase};
pub use overlay::{Effect, Message, MessageView};
pub use viewport::Viewport;
