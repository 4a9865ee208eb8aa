//! In-progress settings held while the user edits the form

use tracing::debug;

use crate::options::OptionType;
use crate::settings::{ArticleSettings, SettingsField};

/// Uncommitted settings plus the snapshot they were seeded from
///
/// The draft is never mutated in place: every edit swaps in a new value
/// built with [`ArticleSettings::with_field`].
#[derive(Debug, Clone)]
pub struct FormDraft {
    defaults: ArticleSettings,
    current: ArticleSettings,
}

impl FormDraft {
    pub fn new(defaults: ArticleSettings) -> Self {
        Self {
            current: defaults.clone(),
            defaults,
        }
    }

    pub fn current(&self) -> &ArticleSettings {
        &self.current
    }

    /// Snapshot captured at construction
    pub fn defaults(&self) -> &ArticleSettings {
        &self.defaults
    }

    /// Replace one field. Any option is accepted, listed in the field's
    /// candidates or not.
    pub fn set_field(&mut self, field: SettingsField, option: OptionType) {
        debug!("Draft {} -> {}", field, option.value);
        self.current = self.current.with_field(field, option);
    }

    pub fn reset_to_defaults(&mut self) -> &ArticleSettings {
        self.current = self.defaults.clone();
        &self.current
    }
}
