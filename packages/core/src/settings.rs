//! The five-field article styling record

use serde::{Deserialize, Serialize};

use crate::options::{default_article_state, OptionType};

/// Text and background styling of the article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSettings {
    pub font_family: OptionType,
    pub font_size: OptionType,
    pub font_color: OptionType,
    pub background_color: OptionType,
    pub content_width: OptionType,
}

impl Default for ArticleSettings {
    fn default() -> Self {
        default_article_state()
    }
}

/// Names one field of [`ArticleSettings`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingsField {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl SettingsField {
    /// Form order
    pub const ALL: [SettingsField; 5] = [
        SettingsField::FontFamily,
        SettingsField::FontSize,
        SettingsField::FontColor,
        SettingsField::BackgroundColor,
        SettingsField::ContentWidth,
    ];
}

impl std::fmt::Display for SettingsField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsField::FontFamily => write!(f, "Font"),
            SettingsField::FontSize => write!(f, "Font size"),
            SettingsField::FontColor => write!(f, "Font color"),
            SettingsField::BackgroundColor => write!(f, "Background color"),
            SettingsField::ContentWidth => write!(f, "Content width"),
        }
    }
}

impl ArticleSettings {
    /// Option currently held by `field`
    pub fn get(&self, field: SettingsField) -> &OptionType {
        match field {
            SettingsField::FontFamily => &self.font_family,
            SettingsField::FontSize => &self.font_size,
            SettingsField::FontColor => &self.font_color,
            SettingsField::BackgroundColor => &self.background_color,
            SettingsField::ContentWidth => &self.content_width,
        }
    }

    /// Copy of `self` with `field` replaced by `option`
    pub fn with_field(&self, field: SettingsField, option: OptionType) -> Self {
        let mut next = self.clone();
        match field {
            SettingsField::FontFamily => next.font_family = option,
            SettingsField::FontSize => next.font_size = option,
            SettingsField::FontColor => next.font_color = option,
            SettingsField::BackgroundColor => next.background_color = option,
            SettingsField::ContentWidth => next.content_width = option,
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_field_leaves_source_untouched() {
        let base = ArticleSettings::default();
        let next = base.with_field(SettingsField::FontSize, OptionType::new("25px", "25px"));

        assert_eq!(base.font_size.value, "18px");
        assert_eq!(next.font_size.value, "25px");
        for field in SettingsField::ALL {
            if field != SettingsField::FontSize {
                assert_eq!(base.get(field), next.get(field));
            }
        }
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(ArticleSettings::default()).unwrap();
        assert_eq!(json["font_size"]["value"], "18px");
        assert_eq!(json["content_width"]["title"], "Wide");
        assert_eq!(json["font_family"].as_object().unwrap().len(), 2);
    }
}
