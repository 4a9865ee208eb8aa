//! Outward notification of finalized settings

use crate::settings::ArticleSettings;

/// Receives settings the user applied
///
/// Called synchronously, once per submit or reset, with no retry.
pub trait CommitGateway {
    fn commit(&mut self, settings: &ArticleSettings);
}

impl<F> CommitGateway for F
where
    F: FnMut(&ArticleSettings),
{
    fn commit(&mut self, settings: &ArticleSettings) {
        self(settings)
    }
}

/// Gateway holding the latest commit until the owner collects it
#[derive(Debug, Clone, Default)]
pub struct Outbox {
    pending: Option<ArticleSettings>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Option<ArticleSettings> {
        self.pending.take()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}

impl CommitGateway for Outbox {
    fn commit(&mut self, settings: &ArticleSettings) {
        self.pending = Some(settings.clone());
    }
}

/// Submission of the form; the host's default action (navigation, reload)
/// runs only if nobody prevented it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_gateway() {
        let mut seen = Vec::new();
        let mut gateway = |s: &ArticleSettings| seen.push(s.clone());
        gateway.commit(&ArticleSettings::default());
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn test_outbox_take() {
        let mut outbox = Outbox::new();
        assert!(outbox.is_empty());
        outbox.commit(&ArticleSettings::default());
        assert_eq!(outbox.take(), Some(ArticleSettings::default()));
        assert!(outbox.take().is_none());
    }
}
