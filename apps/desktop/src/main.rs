use article_core::AppConfig;
use iced::{Application, Settings, Size};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod ui;

use app::{ArticleApp, WINDOW_HEIGHT, WINDOW_WIDTH};

const DEFAULT_LOG_FILTER: &str = "info,article=debug";

fn main() -> iced::Result {
    let config = AppConfig::load_or_default();

    // RUST_LOG wins over the config file
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER))
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting Article v{}", env!("CARGO_PKG_VERSION"));

    ArticleApp::run(Settings {
        window: iced::window::Settings {
            size: Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            min_size: Some(Size::new(800.0, 600.0)),
            position: iced::window::Position::Centered,
            ..Default::default()
        },
        ..Settings::with_flags(config)
    })?;

    Ok(())
}
