// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Round previous/next buttons beside the track.
pub fn nav(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_HOVER,
        button::Status::Pressed => opacity::OVERLAY_PRESSED,
        button::Status::Disabled => opacity::OVERLAY_SUBTLE,
        button::Status::Active => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Pagination dot. The dot for the current slide is filled with the brand color.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let idle = if matches!(theme, Theme::Light) {
            palette::GRAY_400
        } else {
            palette::GRAY_200
        };
        let color = match (active, status) {
            (true, _) => palette::PRIMARY_500,
            (false, button::Status::Hovered | button::Status::Pressed) => palette::PRIMARY_400,
            (false, _) => idle,
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: color,
            border: Border {
                color: if active {
                    palette::PRIMARY_600
                } else {
                    Color::TRANSPARENT
                },
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Close button in the corner of the zoom modal.
pub fn modal_close(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_SUBTLE,
        _ => opacity::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..WHITE })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
