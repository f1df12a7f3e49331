// SPDX-License-Identifier: MPL-2.0
//! Keeps the slide track from scrolling on user input.
//!
//! The track only moves through the carousel's `snap_to` operations. Wheel and
//! touch events never reach the inner scrollable; presses and moves still
//! reach the enclosing mouse area, which drives the swipe gesture.

use iced::advanced::layout::{self, Layout};
use iced::advanced::widget::{self, Widget};
use iced::advanced::{mouse, renderer, Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Renderer, Size, Theme};

pub struct TrackLock<'a, Message> {
    track: Element<'a, Message>,
}

/// Locks `track` against wheel and touch scrolling.
pub fn track_lock<'a, Message>(track: impl Into<Element<'a, Message>>) -> TrackLock<'a, Message> {
    TrackLock {
        track: track.into(),
    }
}

impl<Message> Widget<Message, Theme, Renderer> for TrackLock<'_, Message> {
    fn size(&self) -> Size<Length> {
        self.track.as_widget().size()
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.track)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.track]);
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.track
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
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
        self.track.as_widget().draw(
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
        if scrolls_track(event) {
            return;
        }
        self.track.as_widget_mut().update(
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

    // Scroll operations from `snap_to` must reach the scrollable.
    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.track
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }
}

impl<'a, Message: 'a> From<TrackLock<'a, Message>> for Element<'a, Message> {
    fn from(lock: TrackLock<'a, Message>) -> Self {
        Self::new(lock)
    }
}

/// Events the inner scrollable would turn into scrolling.
fn scrolls_track(event: &Event) -> bool {
    matches!(
        event,
        Event::Mouse(mouse::Event::WheelScrolled { .. }) | Event::Touch(_)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{touch, Point};

    #[test]
    fn wheel_and_touch_are_withheld() {
        let wheel = Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Pixels { x: -40.0, y: 0.0 },
        });
        let finger = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(1),
            position: Point::new(12.0, 8.0),
        });
        assert!(scrolls_track(&wheel));
        assert!(scrolls_track(&finger));
    }

    #[test]
    fn pointer_and_window_events_reach_the_track() {
        assert!(!scrolls_track(&Event::Mouse(mouse::Event::ButtonPressed(
            mouse::Button::Left
        ))));
        assert!(!scrolls_track(&Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(3.0, 4.0),
        })));
        assert!(!scrolls_track(&Event::Window(
            iced::window::Event::Resized(Size::new(100.0, 50.0))
        )));
    }
}
