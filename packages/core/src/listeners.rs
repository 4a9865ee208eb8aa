//! Document-level click listener registry
//!
//! Listening for clicks anywhere in the window is an explicit resource:
//! [`ClickListeners::subscribe`] hands out a [`ClickSubscription`] token and
//! [`ClickSubscription::release`] gives it back. The host only forwards
//! document clicks while at least one subscription is live.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::{Rc, Weak};
use tracing::{debug, warn};

use crate::geometry::{Bounds, Point};

/// Identifies a live subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerToken(u64);

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    active: BTreeSet<ListenerToken>,
}

impl Registry {
    fn release(&mut self, token: ListenerToken) -> bool {
        self.active.remove(&token)
    }
}

/// Shared registry of document click subscriptions
#[derive(Debug, Clone, Default)]
pub struct ClickListeners {
    inner: Rc<RefCell<Registry>>,
}

impl ClickListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire a new subscription
    pub fn subscribe(&self) -> ClickSubscription {
        let mut registry = self.inner.borrow_mut();
        let token = ListenerToken(registry.next_id);
        registry.next_id += 1;
        registry.active.insert(token);
        debug!("Document click listener {:?} attached", token);

        ClickSubscription {
            token,
            registry: Rc::downgrade(&self.inner),
            released: false,
        }
    }

    /// Whether any subscription is live
    pub fn is_listening(&self) -> bool {
        !self.inner.borrow().active.is_empty()
    }

    pub fn is_active(&self, token: ListenerToken) -> bool {
        self.inner.borrow().active.contains(&token)
    }

    pub fn active_count(&self) -> usize {
        self.inner.borrow().active.len()
    }
}

/// Handle for one live subscription
#[derive(Debug)]
pub struct ClickSubscription {
    token: ListenerToken,
    registry: Weak<RefCell<Registry>>,
    released: bool,
}

impl ClickSubscription {
    pub fn token(&self) -> ListenerToken {
        self.token
    }

    /// Give the subscription back to its registry
    pub fn release(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if let Some(registry) = self.registry.upgrade() {
            if registry.borrow_mut().release(self.token) {
                debug!("Document click listener {:?} detached", self.token);
            }
        }
    }
}

impl Drop for ClickSubscription {
    fn drop(&mut self) {
        if !self.released {
            warn!(
                "Document click listener {:?} dropped without release",
                self.token
            );
            self.detach();
        }
    }
}

/// A click observed anywhere in the window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentClick {
    /// Cursor position at the time of the press; `None` when the cursor was
    /// not over the window
    pub position: Option<Point>,
}

impl DocumentClick {
    pub fn at(position: Point) -> Self {
        Self {
            position: Some(position),
        }
    }

    pub fn detached() -> Self {
        Self { position: None }
    }

    /// Where the click landed relative to `root` within `viewport`
    pub fn placement(&self, root: Bounds, viewport: Bounds) -> ClickPlacement {
        match self.position {
            Some(p) if !viewport.contains(p) => ClickPlacement::Foreign,
            Some(p) if root.contains(p) => ClickPlacement::Inside,
            Some(_) => ClickPlacement::Outside,
            None => ClickPlacement::Foreign,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickPlacement {
    Inside,
    Outside,
    /// No usable target in the document
    Foreign,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_release() {
        let listeners = ClickListeners::new();
        assert!(!listeners.is_listening());

        let sub = listeners.subscribe();
        let token = sub.token();
        assert!(listeners.is_active(token));
        assert_eq!(listeners.active_count(), 1);

        sub.release();
        assert!(!listeners.is_active(token));
        assert!(!listeners.is_listening());
    }

    #[test]
    fn test_tokens_are_unique() {
        let listeners = ClickListeners::new();
        let a = listeners.subscribe();
        let b = listeners.subscribe();
        assert_ne!(a.token(), b.token());
        assert_eq!(listeners.active_count(), 2);
        a.release();
        assert!(listeners.is_active(b.token()));
        b.release();
    }

    #[test]
    fn test_drop_releases() {
        let listeners = ClickListeners::new();
        {
            let _sub = listeners.subscribe();
            assert!(listeners.is_listening());
        }
        assert!(!listeners.is_listening());
    }

    #[test]
    fn test_release_after_registry_gone() {
        let listeners = ClickListeners::new();
        let sub = listeners.subscribe();
        drop(listeners);
        sub.release();
    }

    #[test]
    fn test_placement() {
        let viewport = Bounds::with_size(1000.0, 800.0);
        let root = Bounds::new(0.0, 0.0, 300.0, 800.0);

        assert_eq!(
            DocumentClick::at(Point::new(100.0, 100.0)).placement(root, viewport),
            ClickPlacement::Inside
        );
        assert_eq!(
            DocumentClick::at(Point::new(500.0, 100.0)).placement(root, viewport),
            ClickPlacement::Outside
        );
        assert_eq!(
            DocumentClick::at(Point::new(-5.0, 100.0)).placement(root, viewport),
            ClickPlacement::Foreign
        );
        assert_eq!(
            DocumentClick::detached().placement(root, viewport),
            ClickPlacement::Foreign
        );
    }
}
