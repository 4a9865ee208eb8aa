//! Open/closed state of the slide-out panel and its outside-click listener

use tracing::debug;

use crate::geometry::Bounds;
use crate::listeners::{ClickListeners, ClickPlacement, ClickSubscription, DocumentClick};

/// Owns the `open` flag and the document click subscription that exists
/// exactly while the panel is open
#[derive(Debug)]
pub struct PanelController {
    listeners: ClickListeners,
    subscription: Option<ClickSubscription>,
}

impl PanelController {
    /// Create a closed panel that will listen through `listeners` when open
    pub fn new(listeners: ClickListeners) -> Self {
        Self {
            listeners,
            subscription: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn listeners(&self) -> &ClickListeners {
        &self.listeners
    }

    pub fn toggle(&mut self) {
        let open = !self.is_open();
        self.set_open(open);
    }

    pub fn set_open(&mut self, open: bool) {
        match (open, self.subscription.take()) {
            (true, None) => {
                self.subscription = Some(self.listeners.subscribe());
                debug!("Panel opened");
            }
            (false, Some(subscription)) => {
                subscription.release();
                debug!("Panel closed");
            }
            (_, current) => self.subscription = current,
        }
    }

    /// React to a click anywhere in the document
    ///
    /// Returns true when the click closed the panel.
    pub fn handle_document_click(
        &mut self,
        click: DocumentClick,
        root: Bounds,
        viewport: Bounds,
    ) -> bool {
        let listening = self
            .subscription
            .as_ref()
            .is_some_and(|s| self.listeners.is_active(s.token()));
        if !listening {
            return false;
        }

        match click.placement(root, viewport) {
            ClickPlacement::Outside => {
                debug!("Click outside panel at {:?}", click.position);
                self.set_open(false);
                true
            }
            ClickPlacement::Inside | ClickPlacement::Foreign => false,
        }
    }

    /// Tear down, releasing the listener if still open
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.release();
            debug!("Panel unmounted while open");
        }
    }
}

impl Drop for PanelController {
    fn drop(&mut self) {
        self.unmount();
    }
}
