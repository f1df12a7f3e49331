// SPDX-License-Identifier: MPL-2.0
//! Carousel rendering.
//!
//! The track is a horizontal scrollable holding one empty gutter panel, the
//! slide panels, and a second gutter. The component moves it with scroll
//! operations; the widget itself never scrolls on user input. Controls and the
//! caption sit below the track, and the zoom modal is stacked on top. Only the
//! track, controls and caption count as hovering the carousel.

use super::component::{Message, State, TRACK_ID};
use super::subcomponents::layout::scaled_size;
use super::subcomponents::slides::Slide;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming;
use crate::ui::widgets::track_lock;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    button, mouse_area, tooltip, Button, Column, Container, Id, Image, Row, Scrollable, Space,
    Stack, Text,
};
use iced::{mouse, ContentFit, Element, Length, Theme};

/// Height of the track before any image has loaded.
const PLACEHOLDER_HEIGHT: f32 = 240.0;

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let body: Element<'a, Message> = if state.slide_count() == 0 {
        empty_state(state, i18n)
    } else {
        let carousel = Column::new()
            .push(track(state, i18n))
            .push(controls(state, i18n))
            .push(caption(state, i18n))
            .spacing(spacing::MD)
            .align_x(Horizontal::Center);

        // Auto-advance pauses while the pointer is over the carousel itself,
        // not the window margins around it.
        mouse_area(carousel)
            .on_enter(Message::PointerEntered)
            .on_exit(Message::PointerLeft)
            .into()
    };

    let content = Container::new(body)
        .padding(state.margin())
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    match modal_layer(state, i18n) {
        Some(modal) => Stack::new().push(content).push(modal).into(),
        None => content.into(),
    }
}

fn empty_state<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let key = if state.is_settled() {
        "carousel-empty"
    } else {
        "carousel-loading"
    };
    Text::new(i18n.tr(key)).size(typography::BODY_LG).into()
}

fn track<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let width = state.panel_width();
    let height = state
        .panel_layout()
        .map_or(PLACEHOLDER_HEIGHT, |layout| layout.panel_height);

    let gutter = || Space::new().width(Length::Fixed(width));
    let panels = state
        .slides()
        .iter()
        .fold(Row::new().push(gutter()), |row, slide| {
            row.push(panel(state, slide, width, height, i18n))
        })
        .push(gutter());

    let scrollable = Scrollable::new(panels)
        .id(Id::new(TRACK_ID))
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .direction(Direction::Horizontal(Scrollbar::hidden()));

    let interaction = if state.is_dragging() {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Pointer
    };

    mouse_area(track_lock(scrollable))
        .on_press(Message::TrackPressed)
        .interaction(interaction)
        .into()
}

fn panel<'a>(
    state: &'a State,
    slide: &'a Slide,
    width: f32,
    height: f32,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match slide.image() {
        Some(image) => {
            let size = scaled_size(
                (image.width, image.height),
                &state.metrics(),
                state.layout_params(),
            );
            Image::new(image.handle.clone())
                .width(Length::Fixed(size.width))
                .height(Length::Fixed(size.height))
                .into()
        }
        None => Text::new(i18n.tr("carousel-loading"))
            .size(typography::BODY)
            .into(),
    };

    Container::new(content)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::panel)
        .into()
}

fn controls<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let current = state.current_index();

    let dots = (0..state.slide_count()).fold(
        Row::new().spacing(spacing::XS).align_y(Vertical::Center),
        |row, index| {
            let active = index == current;
            let diameter = if active {
                sizing::DOT_ACTIVE
            } else {
                sizing::DOT
            };
            let dot = button(Space::new())
                .width(Length::Fixed(diameter))
                .height(Length::Fixed(diameter))
                .padding(0)
                .on_press(Message::GoTo(index))
                .style(styles::button::dot(active));
            let label = i18n.tr_with_args(
                "carousel-go-to-slide",
                &[("index", (index + 1).to_string().as_str())],
            );
            row.push(styles::tooltip::styled(dot, label, tooltip::Position::Top))
        },
    );

    Row::new()
        .push(nav_button("‹", Message::Previous, i18n.tr("carousel-previous")))
        .push(dots)
        .push(nav_button("›", Message::Next, i18n.tr("carousel-next")))
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .into()
}

fn nav_button<'a>(glyph: &'a str, message: Message, label: String) -> Element<'a, Message> {
    let button: Button<'a, Message> = button(
        Text::new(glyph)
            .size(typography::TITLE_SM)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fixed(sizing::NAV_BUTTON))
    .height(Length::Fixed(sizing::NAV_BUTTON))
    .padding(0)
    .on_press(message)
    .style(styles::button::nav);

    styles::tooltip::styled(button, label, tooltip::Position::Top).into()
}

fn caption<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center);

    if let Some(slide) = state.current_slide() {
        if let Some(title) = &slide.descriptor.title {
            column = column.push(Text::new(title.as_str()).size(typography::TITLE_SM));
        }
        if let Some(description) = &slide.descriptor.description {
            column = column.push(
                Text::new(description.as_str())
                    .size(typography::BODY)
                    .style(|theme: &Theme| iced::widget::text::Style {
                        color: Some(theming::muted_text(theme)),
                    }),
            );
        }
    }

    let current = (state.current_index() + 1).to_string();
    let total = state.slide_count().to_string();
    let counter = i18n.tr_with_args(
        "carousel-counter",
        &[("current", current.as_str()), ("total", total.as_str())],
    );

    column
        .push(Text::new(counter).size(typography::CAPTION))
        .into()
}

fn modal_layer<'a>(state: &'a State, i18n: &'a I18n) -> Option<Element<'a, Message>> {
    let modal = state.modal();
    if !modal.is_shown() {
        return None;
    }
    let image = modal.image()?;

    let close = button(
        Text::new("×")
            .size(typography::TITLE_SM)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fixed(sizing::CLOSE_BUTTON))
    .height(Length::Fixed(sizing::CLOSE_BUTTON))
    .padding(0)
    .on_press(Message::CloseModal)
    .style(styles::button::modal_close);

    let header = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(styles::tooltip::styled(
            close,
            i18n.tr("carousel-close"),
            tooltip::Position::Left,
        ));

    let picture = mouse_area(
        Container::new(
            Image::new(image.handle.clone())
                .content_fit(ContentFit::ScaleDown)
                .width(Length::Shrink)
                .height(Length::Shrink),
        )
        .style(styles::container::modal_frame),
    )
    .on_press(Message::ModalImagePressed);

    let mut body = Column::new()
        .push(header)
        .push(
            Container::new(picture)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .spacing(spacing::SM)
        .align_x(Horizontal::Center);

    if !modal.alt().is_empty() {
        body = body.push(
            Container::new(Text::new(modal.alt()).size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::overlay::caption),
        );
    }

    let backdrop = Container::new(body)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::backdrop);

    Some(
        mouse_area(backdrop)
            .on_press(Message::CloseModal)
            .interaction(mouse::Interaction::Pointer)
            .into(),
    )
}
