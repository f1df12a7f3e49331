// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are routed to the carousel. Keyboard events only reach it
//! when no widget captured them; pointer, touch and window events always do,
//! since a swipe keeps going after the track's mouse area handled the press.

use super::Message;
use crate::ui::carousel;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the native event subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        // Handle window close request for cleanup
        if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }

        let routed = match &event {
            event::Event::Keyboard(..) => status == event::Status::Ignored,
            event::Event::Mouse(iced::mouse::Event::WheelScrolled { .. }) => false,
            event::Event::Mouse(..) | event::Event::Touch(..) => true,
            event::Event::Window(iced::window::Event::Resized(_)) => true,
            _ => false,
        };

        routed.then(|| {
            Message::Carousel(carousel::Message::RawEvent {
                window: window_id,
                event: event.clone(),
            })
        })
    })
}

/// Creates the periodic tick subscription, or none when the carousel is idle.
pub fn create_tick_subscription(interval: Option<Duration>) -> Subscription<Message> {
    match interval {
        Some(interval) => time::every(interval).map(Message::Tick),
        None => Subscription::none(),
    }
}
