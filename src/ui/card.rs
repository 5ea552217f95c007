//! Picture card widget

use iced::widget::{button, column, container, image, row, text, Space};
use iced::{Alignment, Background, Border, ContentFit, Element, Length, Padding};

use super::theme::DarkTheme;
use crate::gallery::display::Card;

const PICTURE_HEIGHT: f32 = 260.0;

/// One card: picture (or placeholder until it arrives), heading, date, text and toggle
pub fn view<'a, Message: Clone + 'a>(
    card: &'a Card,
    picture: Option<&image::Handle>,
    on_toggle: Message,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match picture {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(PICTURE_HEIGHT)
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(text("Loading image...").size(12).color(DarkTheme::TEXT_MUTED))
            .width(Length::Fill)
            .height(PICTURE_HEIGHT)
            .center_x(Length::Fill)
            .center_y(PICTURE_HEIGHT)
            .into(),
    };

    let mut header = row![
        text(&card.title).size(18).color(DarkTheme::TEXT),
        Space::with_width(Length::Fill),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    if card.is_latest {
        header = header.push(
            container(text("Latest picture").size(11).color(DarkTheme::BACKGROUND))
                .padding(Padding::from([2.0, 8.0]))
                .style(|_theme| container::Style {
                    background: Some(Background::Color(DarkTheme::PRIMARY)),
                    border: Border::default().rounded(8),
                    ..Default::default()
                }),
        );
    }

    let mut byline = row![text(&card.formatted_date).size(12).color(DarkTheme::TEXT_MUTED)].spacing(12);
    if let Some(credit) = &card.credit {
        byline = byline.push(text(credit).size(12).color(DarkTheme::TEXT_MUTED));
    }

    let body = column![
        header,
        byline,
        text(&card.displayed_text).size(14).color(DarkTheme::TEXT),
        button(text(card.toggle_label).size(13).color(DarkTheme::PRIMARY))
            .padding(0)
            .style(button::text)
            .on_press(on_toggle),
    ]
    .spacing(8)
    .padding(16);

    container(column![picture, body])
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(DarkTheme::SURFACE)),
            border: Border {
                color: DarkTheme::BORDER,
                width: 1.0,
                radius: 12.0.into(),
            },
            ..Default::default()
        })
        .into()
}
