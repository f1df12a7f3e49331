// SPDX-License-Identifier: MPL-2.0
//! Tooltips for the carousel controls.
//!
//! Tooltips invert the theme (dark tip on a light window and the other way
//! round) so the label stays readable above slide images.

use crate::ui::design_tokens::{radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Style for the tooltip container.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let bg = theme.extended_palette().background.base.color;
    let is_dark = (bg.r + bg.g + bg.b) / 3.0 < 0.5;

    let (bg_color, text_color) = if is_dark {
        (
            Color::from_rgba(0.95, 0.95, 0.95, 0.98),
            Color::from_rgb(0.1, 0.1, 0.1),
        )
    } else {
        (
            Color::from_rgba(0.15, 0.15, 0.15, 0.98),
            Color::from_rgb(0.95, 0.95, 0.95),
        )
    };

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: Color { a: 0.3, ..text_color },
        },
        shadow: shadow::SM,
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip`.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn background(theme: &Theme) -> Color {
        match tooltip_container(theme).background {
            Some(Background::Color(color)) => color,
            other => panic!("expected color background, got {other:?}"),
        }
    }

    #[test]
    fn light_theme_uses_dark_tooltip() {
        assert!(background(&Theme::Light).r < 0.5);
    }

    #[test]
    fn dark_theme_uses_light_tooltip() {
        assert!(background(&Theme::Dark).r > 0.5);
    }
}
