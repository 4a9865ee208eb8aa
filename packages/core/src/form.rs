//! The article params form: panel, draft and commit gateway wired together

use tracing::info;

use crate::commit::{CommitGateway, SubmitEvent};
use crate::draft::FormDraft;
use crate::geometry::Bounds;
use crate::listeners::{ClickListeners, DocumentClick};
use crate::options::OptionType;
use crate::panel::PanelController;
use crate::settings::{ArticleSettings, SettingsField};

pub struct ParamsForm<G: CommitGateway> {
    panel: PanelController,
    draft: FormDraft,
    gateway: G,
}

impl<G: CommitGateway> ParamsForm<G> {
    /// Closed form seeded from `default_settings`, committing through `gateway`
    pub fn new(default_settings: ArticleSettings, gateway: G) -> Self {
        Self::with_listeners(default_settings, gateway, ClickListeners::new())
    }

    /// Same as [`ParamsForm::new`] but registering clicks with a shared registry
    pub fn with_listeners(
        default_settings: ArticleSettings,
        gateway: G,
        listeners: ClickListeners,
    ) -> Self {
        Self {
            panel: PanelController::new(listeners),
            draft: FormDraft::new(default_settings),
            gateway,
        }
    }

    pub fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    pub fn toggle(&mut self) {
        self.panel.toggle();
    }

    pub fn draft(&self) -> &ArticleSettings {
        self.draft.current()
    }

    pub fn defaults(&self) -> &ArticleSettings {
        self.draft.defaults()
    }

    pub fn listeners(&self) -> &ClickListeners {
        self.panel.listeners()
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut G {
        &mut self.gateway
    }

    pub fn set_field(&mut self, field: SettingsField, option: OptionType) {
        self.draft.set_field(field, option);
    }

    /// Commit the current draft
    pub fn submit(&mut self, event: &mut SubmitEvent) {
        event.prevent_default();
        info!("Applying article settings");
        self.gateway.commit(self.draft.current());
    }

    /// Restore and commit the defaults. The panel stays open.
    pub fn reset(&mut self) {
        info!("Resetting article settings to defaults");
        let defaults = self.draft.reset_to_defaults();
        self.gateway.commit(defaults);
    }

    /// Returns true when the click dismissed the panel
    pub fn handle_document_click(
        &mut self,
        click: DocumentClick,
        root: Bounds,
        viewport: Bounds,
    ) -> bool {
        self.panel.handle_document_click(click, root, viewport)
    }

    pub fn unmount(&mut self) {
        self.panel.unmount();
    }
}

impl<G: CommitGateway + std::fmt::Debug> std::fmt::Debug for ParamsForm<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParamsForm")
            .field("panel", &self.panel)
            .field("draft", &self.draft)
            .field("gateway", &self.gateway)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commit::Outbox;
    use crate::geometry::Point;

    #[derive(Debug, Default)]
    struct Recorder(Vec<ArticleSettings>);

    impl CommitGateway for Recorder {
        fn commit(&mut self, settings: &ArticleSettings) {
            self.0.push(settings.clone());
        }
    }

    fn form() -> ParamsForm<Recorder> {
        ParamsForm::new(ArticleSettings::default(), Recorder::default())
    }

    #[test]
    fn test_submit_commits_draft_once() {
        let mut form = form();
        form.set_field(SettingsField::FontSize, OptionType::new("38px", "38px"));

        let mut event = SubmitEvent::new();
        form.submit(&mut event);

        assert!(event.default_prevented());
        assert_eq!(form.gateway().0.len(), 1);
        assert_eq!(form.gateway().0[0].font_size.value, "38px");
    }

    #[test]
    fn test_reset_keeps_panel_open() {
        let mut form = form();
        form.toggle();
        form.set_field(SettingsField::FontColor, OptionType::new("Pink", "#FEAFE8"));
        form.reset();

        assert!(form.is_open());
        assert_eq!(form.draft(), form.defaults());
        assert_eq!(form.gateway().0.as_slice(), &[ArticleSettings::default()]);
    }

    #[test]
    fn test_edits_after_reset_start_from_defaults() {
        let mut form = ParamsForm::new(ArticleSettings::default(), Outbox::new());
        form.set_field(SettingsField::FontColor, OptionType::new("Pink", "#FEAFE8"));
        form.reset();
        form.gateway_mut().take();

        form.set_field(SettingsField::ContentWidth, OptionType::new("Narrow", "948px"));
        form.submit(&mut SubmitEvent::new());

        let applied = form.gateway_mut().take().unwrap();
        assert_eq!(applied.font_color.value, "#000000");
        assert_eq!(applied.content_width.value, "948px");
    }

    #[test]
    fn test_document_click_dismisses() {
        let mut form = form();
        form.toggle();
        let viewport = Bounds::with_size(1200.0, 800.0);
        let root = Bounds::new(0.0, 0.0, 700.0, 800.0);

        assert!(!form.handle_document_click(DocumentClick::at(Point::new(10.0, 10.0)), root, viewport));
        assert!(form.is_open());
        assert!(form.handle_document_click(DocumentClick::at(Point::new(1000.0, 10.0)), root, viewport));
        assert!(!form.is_open());
        assert!(form.gateway().0.is_empty());
    }
}
