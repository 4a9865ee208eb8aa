use iced::widget::{button, text};
use iced::{alignment, Length};

pub fn primary_button<'a, Message: Clone>(label: &'a str) -> button::Button<'a, Message> {
    button(text(label).horizontal_alignment(alignment::Horizontal::Center))
        .padding([12, 24])
        .style(iced::theme::Button::Primary)
}

pub fn secondary_button<'a, Message: Clone>(label: &'a str) -> button::Button<'a, Message> {
    button(text(label).horizontal_alignment(alignment::Horizontal::Center))
        .padding([12, 24])
        .style(iced::theme::Button::Secondary)
}

/// Square toggle for the slide-out panel; points left while open
pub fn arrow_button<'a, Message: Clone + 'a>(
    is_open: bool,
    size: f32,
    on_press: Message,
) -> button::Button<'a, Message> {
    let glyph = if is_open { "\u{2190}" } else { "\u{2192}" };

    button(
        text(glyph)
            .size(size * 0.5)
            .width(Length::Fill)
            .horizontal_alignment(alignment::Horizontal::Center)
            .vertical_alignment(alignment::Vertical::Center),
    )
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .style(iced::theme::Button::Primary)
    .on_press(on_press)
}
