//! Labeled form controls for picking one [`OptionType`]

use article_core::OptionType;
use iced::widget::{column, horizontal_rule, pick_list, radio, row, text, Space};
use iced::{Element, Length};

fn label<'a>(title: &str) -> iced::widget::Text<'a> {
    text(title.to_uppercase())
        .size(12)
        .style(iced::theme::Text::Color(iced::Color::from_rgb(
            0.2, 0.2, 0.2,
        )))
}

/// Title above a drop-down list
///
/// `selected` is shown even when it is not one of `options`.
pub fn labeled_select<'a, Message: Clone + 'a>(
    title: &str,
    options: Vec<OptionType>,
    selected: &OptionType,
    on_change: impl Fn(OptionType) -> Message + 'a,
) -> Element<'a, Message> {
    let list = pick_list(options, Some(selected.clone()), on_change).width(Length::Fill);

    column![label(title), list].spacing(8).into()
}

/// Title above a horizontal row of radio buttons
pub fn radio_group<'a, Message: Clone + 'a>(
    title: &str,
    options: Vec<OptionType>,
    selected: &OptionType,
    on_change: impl Fn(OptionType) -> Message + 'a,
) -> Element<'a, Message> {
    let selected_index = options.iter().position(|o| o == selected);

    let buttons = options
        .into_iter()
        .enumerate()
        .fold(row![].spacing(16), |buttons, (index, option)| {
            let message = on_change(option.clone());
            buttons.push(radio(option.title, index, selected_index, |_| message).size(16))
        });

    column![label(title), buttons].spacing(8).into()
}

pub fn separator<'a, Message: 'a>() -> Element<'a, Message> {
    column![Space::with_height(8), horizontal_rule(1), Space::with_height(8)].into()
}

pub fn heading<'a>(content: &str) -> iced::widget::Text<'a> {
    text(content.to_uppercase())
        .size(31)
        .font(iced::Font {
            weight: iced::font::Weight::ExtraBold,
            ..iced::Font::DEFAULT
        })
        .style(iced::theme::Text::Color(iced::Color::BLACK))
}
