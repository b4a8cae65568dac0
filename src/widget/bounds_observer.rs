// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that reports its content's measured bounds.
//!
//! Measuring during the widget pass and writing state synchronously would
//! mutate state the in-progress render depends on, so the observer publishes
//! a message instead: the write lands in the host's `update` on the next
//! cycle. Publishes are limited to redraw events whose integral bounds
//! differ from the last reported ones, which keeps the
//! measure/store/re-render cycle from looping.

use crate::geometry::IntegralRect;
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{window, Element, Event, Length, Rectangle, Size};

/// A widget that wraps content and publishes its bounds when they change.
pub struct BoundsObserver<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_change: Box<dyn Fn(Rectangle) -> Message + 'a>,
}

/// Last integral bounds reported, kept in the widget tree.
#[derive(Debug, Clone, Copy, Default)]
struct Memo {
    last: Option<IntegralRect>,
}

impl<'a, Message, Theme, Renderer> BoundsObserver<'a, Message, Theme, Renderer> {
    /// Creates a new `BoundsObserver` wrapping the given content.
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        on_change: impl Fn(Rectangle) -> Message + 'a,
    ) -> Self {
        Self {
            content: content.into(),
            on_change: Box::new(on_change),
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for BoundsObserver<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<Memo>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(Memo::default())
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if let Event::Window(window::Event::RedrawRequested(_)) = event {
            let bounds = layout.bounds();
            let integral = IntegralRect::from_rectangle(bounds);
            let memo = tree.state.downcast_mut::<Memo>();
            if memo.last != Some(integral) {
                memo.last = Some(integral);
                shell.publish((self.on_change)(bounds));
            }
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<BoundsObserver<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(observer: BoundsObserver<'a, Message, Theme, Renderer>) -> Self {
        Self::new(observer)
    }
}

/// Helper function to create a bounds observer wrapper.
pub fn bounds_observer<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    on_change: impl Fn(Rectangle) -> Message + 'a,
) -> BoundsObserver<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    BoundsObserver::new(content, on_change)
}
