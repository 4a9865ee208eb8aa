//! Main application: the article preview and its params panel

use crate::ui::main_view;
use article_core::{AppConfig, ArticleSettings, Bounds, ClickListeners, DocumentClick, Point};
use article_ui::{ArticleParamsForm, FormMessage};
use iced::{
    event, executor, mouse, touch, window, Application, Command, Element, Event, Subscription,
    Theme,
};
use tracing::{debug, info};

/// Initial window size, also the viewport until the first resize event
pub const WINDOW_WIDTH: f32 = 1200.0;
pub const WINDOW_HEIGHT: f32 = 800.0;

pub struct ArticleApp {
    /// Settings the article is currently rendered with
    pub applied: ArticleSettings,
    pub form: ArticleParamsForm,
    pub listeners: ClickListeners,
    pub viewport: Bounds,
    /// Last known cursor position; `None` while the cursor is outside
    pub cursor: Option<Point>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Form(FormMessage),
    CursorMoved(Point),
    CursorLeft,
    WindowResized { width: f32, height: f32 },
    /// Left button pressed at the last tracked cursor position
    MousePressed,
    FingerPressed(Point),
}

impl ArticleApp {
    fn with_config(config: &AppConfig) -> Self {
        let defaults = config.default_settings();
        let listeners = ClickListeners::new();
        let form =
            ArticleParamsForm::with_layout(defaults.clone(), config.panel_layout(), listeners.clone());

        Self {
            applied: defaults,
            form,
            listeners,
            viewport: Bounds::with_size(WINDOW_WIDTH, WINDOW_HEIGHT),
            cursor: None,
        }
    }

    fn document_click(&mut self, click: DocumentClick) {
        // Presses only matter while the panel holds a listener
        if !self.listeners.is_listening() {
            return;
        }
        if self.form.on_document_click(click, self.viewport) {
            debug!("Panel dismissed by outside click");
        }
    }
}

impl Application for ArticleApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppConfig;

    fn new(config: AppConfig) -> (Self, Command<Message>) {
        info!("Initializing Article application");
        (Self::with_config(&config), Command::none())
    }

    fn title(&self) -> String {
        if self.form.is_open() {
            "Article - Set parameters".to_string()
        } else {
            "Article".to_string()
        }
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::Form(message) => {
                debug!("Form message: {:?}", message);
                if let Some(settings) = self.form.update(message) {
                    info!(
                        "Applied {} {} on {}",
                        settings.font_family.value,
                        settings.font_size.value,
                        settings.background_color.value
                    );
                    self.applied = settings;
                }
            }
            Message::CursorMoved(position) => {
                self.cursor = Some(position);
            }
            Message::CursorLeft => {
                self.cursor = None;
            }
            Message::WindowResized { width, height } => {
                self.viewport = Bounds::with_size(width, height);
            }
            Message::MousePressed => {
                let click = match self.cursor {
                    Some(position) => DocumentClick::at(position),
                    None => DocumentClick::detached(),
                };
                self.document_click(click);
            }
            Message::FingerPressed(position) => {
                self.document_click(DocumentClick::at(position));
            }
        }
        Command::none()
    }

    fn view(&self) -> Element<Message> {
        main_view(self)
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        // One stream keeps cursor moves and presses in arrival order
        event::listen_with(window_event)
    }
}

fn window_event(event: Event, _status: event::Status) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(Point::new(position.x, position.y)))
        }
        Event::Mouse(mouse::Event::CursorLeft) => Some(Message::CursorLeft),
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::MousePressed)
        }
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::FingerPressed(Point::new(position.x, position.y)))
        }
        Event::Window(_, window::Event::Resized { width, height }) => Some(Message::WindowResized {
            width: width as f32,
            height: height as f32,
        }),
        _ => None,
    }
}

impl Default for ArticleApp {
    fn default() -> Self {
        Self::with_config(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use article_core::{OptionType, SettingsField};

    #[test]
    fn test_apply_updates_article() {
        let mut app = ArticleApp::default();
        let _ = app.update(Message::Form(FormMessage::Toggle));
        let _ = app.update(Message::Form(FormMessage::FieldChanged(
            SettingsField::FontSize,
            OptionType::new("38px", "38px"),
        )));
        assert_eq!(app.applied.font_size.value, "18px");

        let _ = app.update(Message::Form(FormMessage::Submit));
        assert_eq!(app.applied.font_size.value, "38px");
        assert!(app.form.is_open());
    }

    #[test]
    fn test_click_outside_dismisses() {
        let mut app = ArticleApp::default();
        let _ = app.update(Message::Form(FormMessage::Toggle));
        assert!(app.listeners.is_listening());

        let _ = app.update(Message::CursorMoved(Point::new(1100.0, 400.0)));
        let _ = app.update(Message::MousePressed);
        assert!(!app.form.is_open());
        assert!(!app.listeners.is_listening());
    }

    #[test]
    fn test_click_without_cursor_ignored() {
        let mut app = ArticleApp::default();
        let _ = app.update(Message::Form(FormMessage::Toggle));
        let _ = app.update(Message::CursorMoved(Point::new(1100.0, 400.0)));
        let _ = app.update(Message::CursorLeft);
        let _ = app.update(Message::MousePressed);
        assert!(app.form.is_open());
    }

    #[test]
    fn test_resize_moves_outside_region() {
        let mut app = ArticleApp::default();
        let _ = app.update(Message::Form(FormMessage::Toggle));
        let _ = app.update(Message::WindowResized {
            width: 600.0,
            height: 400.0,
        });

        // Beyond the shrunken window: not part of the document any more
        let _ = app.update(Message::CursorMoved(Point::new(1100.0, 300.0)));
        let _ = app.update(Message::MousePressed);
        assert!(app.form.is_open());
    }

    #[test]
    fn test_press_while_closed_ignored() {
        let mut app = ArticleApp::default();
        let _ = app.update(Message::CursorMoved(Point::new(1100.0, 400.0)));
        let _ = app.update(Message::MousePressed);
        let _ = app.update(Message::FingerPressed(Point::new(900.0, 500.0)));
        assert!(!app.form.is_open());
        assert!(!app.listeners.is_listening());

        let _ = app.update(Message::Form(FormMessage::Toggle));
        assert!(app.form.is_open());
        assert!(app.listeners.is_listening());
    }

    #[test]
    fn test_press_on_arrow_after_move_keeps_panel_open() {
        let mut app = ArticleApp::default();
        let _ = app.update(Message::Form(FormMessage::Toggle));

        // Quick move from the article onto the arrow, then press
        let arrow = app.form.layout().arrow_bounds(true);
        let _ = app.update(Message::CursorMoved(Point::new(1100.0, 400.0)));
        let _ = app.update(Message::CursorMoved(Point::new(
            arrow.x + arrow.width / 2.0,
            arrow.y + arrow.height / 2.0,
        )));
        let _ = app.update(Message::MousePressed);
        assert!(app.form.is_open());
        assert!(app.listeners.is_listening());

        // The arrow's own message is the only close
        let _ = app.update(Message::Form(FormMessage::Toggle));
        assert!(!app.form.is_open());
        assert!(!app.listeners.is_listening());
    }

    #[test]
    fn test_window_event_mapping() {
        let press = window_event(
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            event::Status::Ignored,
        );
        assert!(matches!(press, Some(Message::MousePressed)));

        let right = window_event(
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right)),
            event::Status::Ignored,
        );
        assert!(right.is_none());

        let tap = window_event(
            Event::Touch(touch::Event::FingerPressed {
                id: touch::Finger(0),
                position: iced::Point::new(900.0, 300.0),
            }),
            event::Status::Captured,
        );
        match tap {
            Some(Message::FingerPressed(position)) => assert_eq!(position, Point::new(900.0, 300.0)),
            other => panic!("expected FingerPressed, got {:?}", other),
        }
    }

    #[test]
    fn test_tap_outside_dismisses() {
        let mut app = ArticleApp::default();
        let _ = app.update(Message::Form(FormMessage::Toggle));

        // Taps carry their own position; no cursor is tracked
        let _ = app.update(Message::FingerPressed(Point::new(200.0, 300.0)));
        assert!(app.form.is_open());

        let _ = app.update(Message::FingerPressed(Point::new(1100.0, 300.0)));
        assert!(!app.form.is_open());
        assert!(!app.listeners.is_listening());
    }
}
