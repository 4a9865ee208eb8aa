//! Selectable options and the static candidate sets for every settings field

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::settings::{ArticleSettings, SettingsField};

/// A single selectable labeled value
///
/// Two options are equal when their `value` identifiers match; the label is
/// presentation only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionType {
    /// Display label
    pub title: String,
    /// Internal identifier
    pub value: String,
}

impl OptionType {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

impl PartialEq for OptionType {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for OptionType {}

impl Hash for OptionType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

pub fn font_family_options() -> Vec<OptionType> {
    ["Open Sans", "Ubuntu", "Cormorant Garamond", "Days One", "Merriweather"]
        .into_iter()
        .map(|family| OptionType::new(family, family))
        .collect()
}

pub fn font_size_options() -> Vec<OptionType> {
    ["18px", "25px", "38px"]
        .into_iter()
        .map(|size| OptionType::new(size, size))
        .collect()
}

/// (label, hex) shared by font and background colors
const PALETTE: [(&str, &str); 9] = [
    ("Black", "#000000"),
    ("White", "#FFFFFF"),
    ("Gray", "#C4C4C4"),
    ("Pink", "#FEAFE8"),
    ("Bright Pink", "#FD24AF"),
    ("Yellow", "#FFC802"),
    ("Green", "#80D994"),
    ("Light Blue", "#6FC1FD"),
    ("Purple", "#5F00AF"),
];

pub fn font_colors() -> Vec<OptionType> {
    PALETTE
        .iter()
        .map(|(title, hex)| OptionType::new(*title, *hex))
        .collect()
}

pub fn background_colors() -> Vec<OptionType> {
    // White first: it is the default page background
    [1, 0, 2, 3, 5, 6, 7, 8]
        .into_iter()
        .map(|i| {
            let (title, hex) = PALETTE[i];
            OptionType::new(title, hex)
        })
        .collect()
}

pub fn content_width_options() -> Vec<OptionType> {
    vec![
        OptionType::new("Wide", "1394px"),
        OptionType::new("Narrow", "948px"),
    ]
}

/// Candidate set offered for a field
pub fn candidates(field: SettingsField) -> Vec<OptionType> {
    match field {
        SettingsField::FontFamily => font_family_options(),
        SettingsField::FontSize => font_size_options(),
        SettingsField::FontColor => font_colors(),
        SettingsField::BackgroundColor => background_colors(),
        SettingsField::ContentWidth => content_width_options(),
    }
}

/// Look up a candidate by identifier
pub fn find(field: SettingsField, value: &str) -> Option<OptionType> {
    candidates(field).into_iter().find(|o| o.value == value)
}

/// The article's initial look
pub fn default_article_state() -> ArticleSettings {
    ArticleSettings {
        font_family: font_family_options().swap_remove(0),
        font_size: font_size_options().swap_remove(0),
        font_color: font_colors().swap_remove(0),
        background_color: background_colors().swap_remove(0),
        content_width: content_width_options().swap_remove(0),
    }
}

/// Parse a pixel length such as `"18px"`
pub fn parse_px(value: &str) -> Option<f32> {
    value.trim().strip_suffix("px")?.trim().parse().ok()
}

/// Parse a `#RRGGBB` color
pub fn parse_hex_color(value: &str) -> Option<[u8; 3]> {
    let hex = value.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}
