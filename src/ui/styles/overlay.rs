// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the zoom modal backdrop and its caption.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius, MODAL_BACKDROP,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed layer covering the whole window while the modal is open.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(MODAL_BACKDROP)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Pill behind the modal caption.
pub fn caption(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..BLACK
        })),
        text_color: Some(WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
