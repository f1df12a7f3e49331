// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// One slide panel on the track.
///
/// The color is derived from the active Iced `Theme` background so panels
/// read well in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Frame around the zoomed image.
pub fn modal_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::BLACK)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}
