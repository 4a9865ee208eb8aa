//! Slide-out article params form
//!
//! An arrow button toggles an aside holding one control per settings field.
//! Applying or resetting hands the settings back to the owner from
//! [`ArticleParamsForm::update`].

use article_core::options;
use article_core::{
    ArticleSettings, Bounds, ClickListeners, DocumentClick, OptionType, Outbox, PanelLayout,
    ParamsForm, SettingsField, SubmitEvent,
};
use iced::widget::{column, container, row, Space};
use iced::{Element, Length, Padding, Theme};

use super::button::{arrow_button, primary_button, secondary_button};
use super::fields::{heading, labeled_select, radio_group, separator};

/// Messages from the params form
#[derive(Debug, Clone)]
pub enum FormMessage {
    /// Arrow button pressed
    Toggle,
    /// A control picked a new option
    FieldChanged(SettingsField, OptionType),
    /// Apply button pressed
    Submit,
    /// Reset button pressed
    Reset,
}

pub struct ArticleParamsForm {
    form: ParamsForm<Outbox>,
    layout: PanelLayout,
}

impl ArticleParamsForm {
    pub fn new(default_settings: ArticleSettings) -> Self {
        Self::with_layout(default_settings, PanelLayout::default(), ClickListeners::new())
    }

    pub fn with_layout(
        default_settings: ArticleSettings,
        layout: PanelLayout,
        listeners: ClickListeners,
    ) -> Self {
        Self {
            form: ParamsForm::with_listeners(default_settings, Outbox::new(), listeners),
            layout,
        }
    }

    pub fn is_open(&self) -> bool {
        self.form.is_open()
    }

    pub fn draft(&self) -> &ArticleSettings {
        self.form.draft()
    }

    pub fn listeners(&self) -> &ClickListeners {
        self.form.listeners()
    }

    pub fn layout(&self) -> PanelLayout {
        self.layout
    }

    /// Handle a form message, returning the settings to apply if the form
    /// committed any
    pub fn update(&mut self, message: FormMessage) -> Option<ArticleSettings> {
        match message {
            FormMessage::Toggle => self.form.toggle(),
            FormMessage::FieldChanged(field, option) => self.form.set_field(field, option),
            FormMessage::Submit => {
                let mut event = SubmitEvent::new();
                self.form.submit(&mut event);
            }
            FormMessage::Reset => self.form.reset(),
        }
        self.form.gateway_mut().take()
    }

    /// Panel root region within `viewport`
    pub fn root_bounds(&self, viewport: Bounds) -> Bounds {
        self.layout.root_bounds(self.is_open(), viewport)
    }

    /// Forward a window click; returns true if it dismissed the panel
    pub fn on_document_click(&mut self, click: DocumentClick, viewport: Bounds) -> bool {
        let root = self.root_bounds(viewport);
        self.form.handle_document_click(click, root, viewport)
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, FormMessage> {
        let offset = self.layout.arrow_offset;
        let arrow = container(arrow_button(
            self.is_open(),
            self.layout.arrow_size,
            FormMessage::Toggle,
        ))
        .padding(Padding {
            top: offset,
            right: 0.0,
            bottom: 0.0,
            left: offset,
        });

        if !self.is_open() {
            return arrow.into();
        }

        let aside = container(self.form_content())
            .width(Length::Fixed(self.layout.panel_width))
            .height(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(AsideStyle)));

        row![aside, arrow].into()
    }

    fn form_content(&self) -> Element<'_, FormMessage> {
        let draft = self.form.draft();
        let field_changed =
            |field: SettingsField| move |option: OptionType| FormMessage::FieldChanged(field, option);

        let buttons = row![
            Space::with_width(Length::Fill),
            secondary_button("Reset").on_press(FormMessage::Reset),
            primary_button("Apply").on_press(FormMessage::Submit),
        ]
        .spacing(12);

        column![
            heading("Set parameters"),
            labeled_select(
                &SettingsField::FontFamily.to_string(),
                options::font_family_options(),
                &draft.font_family,
                field_changed(SettingsField::FontFamily),
            ),
            radio_group(
                &SettingsField::FontSize.to_string(),
                options::font_size_options(),
                &draft.font_size,
                field_changed(SettingsField::FontSize),
            ),
            labeled_select(
                &SettingsField::FontColor.to_string(),
                options::font_colors(),
                &draft.font_color,
                field_changed(SettingsField::FontColor),
            ),
            separator(),
            labeled_select(
                &SettingsField::BackgroundColor.to_string(),
                options::background_colors(),
                &draft.background_color,
                field_changed(SettingsField::BackgroundColor),
            ),
            labeled_select(
                &SettingsField::ContentWidth.to_string(),
                options::content_width_options(),
                &draft.content_width,
                field_changed(SettingsField::ContentWidth),
            ),
            Space::with_height(Length::Fill),
            buttons,
        ]
        .spacing(32)
        .padding(48)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

/// White sheet behind the form
struct AsideStyle;

impl iced::widget::container::StyleSheet for AsideStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> iced::widget::container::Appearance {
        iced::widget::container::Appearance {
            text_color: Some(iced::Color::BLACK),
            background: Some(iced::Background::Color(iced::Color::WHITE)),
            shadow: iced::Shadow {
                color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.25),
                offset: iced::Vector::new(4.0, 0.0),
                blur_radius: 16.0,
            },
            ..Default::default()
        }
    }
}
