pub mod commit;
pub mod config;
pub mod draft;
pub mod error;
pub mod form;
pub mod geometry;
pub mod listeners;
pub mod options;
pub mod panel;
pub mod settings;

pub use commit::{CommitGateway, Outbox, SubmitEvent};
pub use config::{AppConfig, StoredSettings};
pub use draft::FormDraft;
pub use error::{ArticleError, ArticleResult};
pub use form::ParamsForm;
pub use geometry::{Bounds, PanelLayout, Point};
pub use listeners::{ClickListeners, ClickPlacement, ClickSubscription, DocumentClick, ListenerToken};
pub use options::OptionType;
pub use panel::PanelController;
pub use settings::{ArticleSettings, SettingsField};
