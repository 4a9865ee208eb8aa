//! Application configuration
//!
//! Read once at startup from `config.json` in the platform config directory.
//! Nothing the user does in the panel is written back.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{ArticleError, ArticleResult};
use crate::geometry::PanelLayout;
use crate::options;
use crate::settings::{ArticleSettings, SettingsField};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default option of every field, stored by identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSettings {
    pub font_family: String,
    pub font_size: String,
    pub font_color: String,
    pub background_color: String,
    pub content_width: String,
}

impl Default for StoredSettings {
    fn default() -> Self {
        Self::from(&ArticleSettings::default())
    }
}

impl From<&ArticleSettings> for StoredSettings {
    fn from(settings: &ArticleSettings) -> Self {
        Self {
            font_family: settings.font_family.value.clone(),
            font_size: settings.font_size.value.clone(),
            font_color: settings.font_color.value.clone(),
            background_color: settings.background_color.value.clone(),
            content_width: settings.content_width.value.clone(),
        }
    }
}

impl StoredSettings {
    fn value(&self, field: SettingsField) -> &str {
        match field {
            SettingsField::FontFamily => &self.font_family,
            SettingsField::FontSize => &self.font_size,
            SettingsField::FontColor => &self.font_color,
            SettingsField::BackgroundColor => &self.background_color,
            SettingsField::ContentWidth => &self.content_width,
        }
    }

    /// Resolve every stored identifier against the field's candidates
    pub fn resolve(&self) -> ArticleResult<ArticleSettings> {
        let mut settings = ArticleSettings::default();
        for field in SettingsField::ALL {
            let value = self.value(field);
            let option =
                options::find(field, value).ok_or_else(|| ArticleError::UnknownOption {
                    field,
                    value: value.to_string(),
                })?;
            settings = settings.with_field(field, option);
        }
        Ok(settings)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Width of the slide-out panel in logical pixels
    pub panel_width: f32,
    /// `tracing` filter directive, e.g. `info,article=debug`
    pub log_filter: Option<String>,
    /// Settings the panel starts from and resets to
    pub defaults: StoredSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            panel_width: PanelLayout::default().panel_width,
            log_filter: None,
            defaults: StoredSettings::default(),
        }
    }
}

impl AppConfig {
    /// Platform config file location
    pub fn default_path() -> ArticleResult<PathBuf> {
        directories::ProjectDirs::from("app", "article", "Article")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .ok_or(ArticleError::NoConfigDir)
    }

    pub fn load_from(path: &Path) -> ArticleResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load from the platform location; any failure yields the defaults
    pub fn load_or_default() -> Self {
        let path = match Self::default_path() {
            Ok(path) => path,
            Err(e) => {
                warn!("{}, using default config", e);
                return Self::default();
            }
        };
        Self::load_or_default_from(&path)
    }

    pub fn load_or_default_from(path: &Path) -> Self {
        if !path.exists() {
            debug!("No config at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config from {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Defaults resolved against the options catalog, falling back to the
    /// built-in article state when an identifier is unknown
    pub fn default_settings(&self) -> ArticleSettings {
        self.defaults.resolve().unwrap_or_else(|e| {
            warn!("Invalid default settings in config: {}", e);
            ArticleSettings::default()
        })
    }

    pub fn panel_layout(&self) -> PanelLayout {
        if self.panel_width.is_finite() && self.panel_width > 0.0 {
            PanelLayout::with_panel_width(self.panel_width)
        } else {
            warn!("Ignoring panel width {}", self.panel_width);
            PanelLayout::default()
        }
    }
}
