// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::carousel;
use iced::widget::Container;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub carousel: &'a carousel::State,
}

/// Renders the carousel filling the window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    Container::new(ctx.carousel.view(ctx.i18n).map(Message::Carousel))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
