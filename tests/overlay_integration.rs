// SPDX-License-Identifier: MPL-2.0
//! End-to-end overlay lifecycle checks through the public API, driven by a
//! synthetic clock.

use iced::{Point, Rectangle, Size};
use iced_message::{
    Animation, DismissReason, Effect, Message, MessageKind, MessageView, OverlayConfig, Phase,
    Position, Side, Viewport,
};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

fn rect(x: f32, y: f32, width: f32, height: f32) -> Rectangle {
    Rectangle::new(Point::new(x, y), Size::new(width, height))
}

/// Pumps ticks every 16 ms until `until`, collecting non-trivial effects.
fn run_until(view: &mut MessageView, from: Instant, until: Instant) -> Vec<Effect> {
    let mut effects = Vec::new();
    let mut now = from;
    while now <= until {
        let effect = view.update_at(Message::Tick, now);
        if effect != Effect::None {
            effects.push(effect);
        }
        now += Duration::from_millis(16);
    }
    effects
}

#[test]
fn attached_toast_presents_holds_and_dismisses_once() {
    let dismissals = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&dismissals);

    let mut view = MessageView::new(
        OverlayConfig::new()
            .kind(MessageKind::Toast)
            .position(Position::Bottom)
            .animation(Animation::ease_out(Duration::from_millis(300)))
            .autohide(Some(Duration::from_secs(3)))
            .on_dismiss(move || counter.set(counter.get() + 1)),
    )
    .with_viewport(Viewport::new(Size::new(400.0, 800.0)));

    let start = Instant::now();
    view.update_at(Message::HostBounds(rect(0.0, 0.0, 400.0, 800.0)), start);
    view.update_at(Message::ContentBounds(rect(150.0, 350.0, 100.0, 100.0)), start);
    view.update_at(Message::SetPresented(true), start);

    // The slide-in settles at 800 - 400 - 50 == 350.
    let effects = run_until(&mut view, start, start + Duration::from_secs(1));
    assert_eq!(effects, vec![Effect::Shown]);
    assert_eq!(view.phase(), Phase::Shown);
    assert!((view.translation().y - 350.0).abs() < f32::EPSILON);

    // Three seconds later the overlay closes by itself and the dismiss
    // callback fires exactly once.
    let effects = run_until(
        &mut view,
        start + Duration::from_secs(1),
        start + Duration::from_secs(5),
    );
    assert_eq!(
        effects,
        vec![Effect::Closed(DismissReason::Timeout), Effect::Dismissed]
    );
    assert!(!view.is_presented());
    assert_eq!(dismissals.get(), 1);
}

#[test]
fn represent_before_timeout_dismisses_at_the_new_deadline_only() {
    let dismissals = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&dismissals);

    let mut view = MessageView::new(
        OverlayConfig::new()
            .kind(MessageKind::Toast)
            .animation(Animation::linear(Duration::from_millis(100)))
            .autohide(Some(Duration::from_secs(2)))
            .on_dismiss(move || counter.set(counter.get() + 1)),
    )
    .with_viewport(Viewport::new(Size::new(400.0, 800.0)));

    let start = Instant::now();
    view.update_at(Message::HostBounds(rect(0.0, 0.0, 400.0, 800.0)), start);
    view.update_at(Message::ContentBounds(rect(150.0, 350.0, 100.0, 100.0)), start);

    view.update_at(Message::SetPresented(true), start);
    run_until(&mut view, start, start + Duration::from_millis(500));

    // Withdraw and re-present half-way through the first deadline: the old
    // deadline is cancelled and only the new cycle dismisses.
    let flip = start + Duration::from_secs(1);
    view.update_at(Message::SetPresented(false), flip);
    view.update_at(Message::SetPresented(true), flip);

    let effects = run_until(&mut view, flip, flip + Duration::from_secs(4));
    let dismissed_count = effects
        .iter()
        .filter(|effect| **effect == Effect::Dismissed)
        .count();
    assert_eq!(dismissed_count, 1);
    assert_eq!(dismissals.get(), 1);
}

#[test]
fn floater_rests_above_the_toast_position() {
    let mut toast = MessageView::new(
        OverlayConfig::new()
            .kind(MessageKind::Toast)
            .autohide(None)
            .animation(Animation::linear(Duration::from_millis(100))),
    )
    .with_viewport(Viewport::new(Size::new(400.0, 800.0)));
    let mut floater = MessageView::new(
        OverlayConfig::new()
            .kind(MessageKind::Floater {
                vertical_padding: 50.0,
            })
            .autohide(None)
            .animation(Animation::linear(Duration::from_millis(100))),
    )
    .with_viewport(Viewport::new(Size::new(400.0, 800.0)));

    let start = Instant::now();
    for view in [&mut toast, &mut floater] {
        view.update_at(Message::HostBounds(rect(0.0, 0.0, 400.0, 800.0)), start);
        view.update_at(Message::ContentBounds(rect(150.0, 350.0, 100.0, 100.0)), start);
        view.update_at(Message::SetPresented(true), start);
        run_until(view, start, start + Duration::from_secs(1));
    }

    assert!((toast.translation().y - floater.translation().y - 50.0).abs() < f32::EPSILON);
}

#[test]
fn edge_toast_full_cycle_crosses_the_screen() {
    let dismissals = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&dismissals);

    let mut view = MessageView::new(
        OverlayConfig::new()
            .kind(MessageKind::EdgeToast { side: Side::Left })
            .autohide(Some(Duration::from_secs(2)))
            .on_dismiss(move || counter.set(counter.get() + 1)),
    )
    .with_viewport(Viewport::new(Size::new(1280.0, 800.0)));

    let start = Instant::now();
    view.update_at(Message::HostBounds(rect(0.0, 0.0, 1280.0, 800.0)), start);
    view.update_at(Message::ContentBounds(rect(0.0, 0.0, 200.0, 100.0)), start);
    view.update_at(Message::SetPresented(true), start);

    // Off screen on the left.
    assert!((view.translation().x + 1280.0).abs() < f32::EPSILON);

    // Slides to the resting inset: -(640 - 100 - 10) == -530.
    run_until(&mut view, start, start + Duration::from_secs(1));
    assert_eq!(view.phase(), Phase::Shown);
    assert!((view.translation().x + 530.0).abs() < f32::EPSILON);
    assert!(view.is_presented());

    // Holds for the duration, retracts, and settles hidden with exactly one
    // dismissal.
    run_until(
        &mut view,
        start + Duration::from_secs(1),
        start + Duration::from_secs(4),
    );
    assert_eq!(view.phase(), Phase::Hidden);
    assert!(!view.is_presented());
    assert!((view.translation().x + 1280.0).abs() < f32::EPSILON);
    assert_eq!(dismissals.get(), 1);
}

#[test]
fn tap_dismisses_first_and_represent_is_not_clobbered() {
    // The dismissal request is issued before the tap callback runs, so a
    // callback-driven re-present is not clobbered by the dismissal.
    let tap_seen = Rc::new(Cell::new(false));
    let flag = Rc::clone(&tap_seen);

    let mut view = MessageView::new(
        OverlayConfig::new()
            .kind(MessageKind::Toast)
            .animation(Animation::linear(Duration::from_millis(100)))
            .autohide(None)
            .on_tap(move || flag.set(true)),
    )
    .with_viewport(Viewport::new(Size::new(400.0, 800.0)));

    let start = Instant::now();
    view.update_at(Message::HostBounds(rect(0.0, 0.0, 400.0, 800.0)), start);
    view.update_at(Message::ContentBounds(rect(150.0, 350.0, 100.0, 100.0)), start);
    view.update_at(Message::SetPresented(true), start);
    run_until(&mut view, start, start + Duration::from_secs(1));

    let at = start + Duration::from_secs(1);
    let effect = view.update_at(Message::ContentTapped, at);
    assert_eq!(effect, Effect::Closed(DismissReason::Tap));
    assert!(tap_seen.get());
    assert!(!view.is_presented());

    // Re-presenting right away (as the callback's host reaction would)
    // pre-empts the slide-out.
    view.update_at(Message::SetPresented(true), at);
    let effects = run_until(&mut view, at, at + Duration::from_secs(1));
    assert_eq!(effects, vec![Effect::Shown]);
    assert!(view.is_presented());
}

#[test]
fn zero_size_host_degrades_to_bootstrap_placement() {
    let mut view = MessageView::new(OverlayConfig::new().kind(MessageKind::Toast));

    let start = Instant::now();
    view.update_at(Message::HostBounds(rect(0.0, 0.0, 0.0, 0.0)), start);
    view.update_at(Message::SetPresented(true), start);

    // No crash, and the hidden side of the slide starts at the bootstrap
    // constant.
    assert!(view.translation().y <= 1000.0);
    run_until(&mut view, start, start + Duration::from_secs(1));
    assert_eq!(view.phase(), Phase::Shown);
}
