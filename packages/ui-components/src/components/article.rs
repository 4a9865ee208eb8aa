//! Article preview rendered with the applied settings

use article_core::options::{parse_hex_color, parse_px};
use article_core::{ArticleSettings, OptionType};
use iced::widget::{column, container, text};
use iced::{Element, Font, Length, Theme};

const TITLE: &str = "Human beings and their tools";

const PARAGRAPHS: [&str; 3] = [
    "Every tool changes the hand that holds it. The first sharpened stone \
     was not only a way to cut; it was a new way of thinking about what \
     could be cut, and by whom.",
    "Writing did the same for memory. Once words could outlive the voice \
     that spoke them, stories became texts, and texts became something to \
     argue with across centuries.",
    "Typography is the quietest of these tools. Nobody notices a good \
     typeface, yet the size of a letter, its color and the width of a line \
     decide whether a page is read or merely looked at.",
];

/// Map an option's hex value onto an iced color
pub fn to_iced_color(option: &OptionType, fallback: iced::Color) -> iced::Color {
    parse_hex_color(&option.value)
        .map(|[r, g, b]| iced::Color::from_rgb8(r, g, b))
        .unwrap_or(fallback)
}

/// Font for a family option; unknown families use the default font
pub fn to_iced_font(option: &OptionType) -> Font {
    let name = match option.value.as_str() {
        "Open Sans" => "Open Sans",
        "Ubuntu" => "Ubuntu",
        "Cormorant Garamond" => "Cormorant Garamond",
        "Days One" => "Days One",
        "Merriweather" => "Merriweather",
        _ => return Font::DEFAULT,
    };
    Font::with_name(name)
}

/// The article body styled by `settings`
pub fn article_view<'a, Message: 'a>(settings: &ArticleSettings) -> Element<'a, Message> {
    let font = to_iced_font(&settings.font_family);
    let font_size = parse_px(&settings.font_size.value).unwrap_or(18.0);
    let font_color = to_iced_color(&settings.font_color, iced::Color::BLACK);
    let background = to_iced_color(&settings.background_color, iced::Color::WHITE);
    let max_width = parse_px(&settings.content_width.value).unwrap_or(1394.0);

    let title = text(TITLE.to_uppercase())
        .font(font)
        .size(font_size * 2.0)
        .style(iced::theme::Text::Color(font_color));

    let body = PARAGRAPHS.iter().fold(
        column![title].spacing(font_size),
        |body, paragraph| {
            body.push(
                text(*paragraph)
                    .font(font)
                    .size(font_size)
                    .style(iced::theme::Text::Color(font_color)),
            )
        },
    );

    let page = container(body).max_width(max_width).padding(48);

    container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .style(iced::theme::Container::Custom(Box::new(PageStyle {
            background,
        })))
        .into()
}

struct PageStyle {
    background: iced::Color,
}

impl iced::widget::container::StyleSheet for PageStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> iced::widget::container::Appearance {
        iced::widget::container::Appearance {
            background: Some(iced::Background::Color(self.background)),
            ..Default::default()
        }
    }
}
