//! Document-level pointer-down subscriptions.
//!
//! Widgets that need to observe pointer-down events anywhere on the screen
//! (to dismiss a popup on an outside click, for instance) register here
//! while they need them. The returned [`Subscription`] unregisters itself
//! when dropped.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
struct Registry {
    next_id: AtomicU64,
    owners: RwLock<BTreeMap<u64, String>>,
}

/// Shared registry of active pointer-down listeners.
///
/// Cloning is cheap and every clone refers to the same registry.
#[derive(Debug, Clone, Default)]
pub struct PointerDownListeners {
    inner: Arc<Registry>,
}

impl PointerDownListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `owner` as a pointer-down listener.
    pub fn subscribe(&self, owner: impl Into<String>) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let owner = owner.into();
        log::debug!("[listeners] subscribe #{} ({})", id, owner);
        if let Ok(mut owners) = self.inner.owners.write() {
            owners.insert(id, owner);
        }
        Subscription {
            id,
            registry: Arc::clone(&self.inner),
        }
    }

    /// Whether `owner` currently holds at least one subscription.
    pub fn is_subscribed(&self, owner: &str) -> bool {
        self.inner
            .owners
            .read()
            .map(|owners| owners.values().any(|o| o == owner))
            .unwrap_or(false)
    }

    /// Owners of all active subscriptions, in subscription order.
    pub fn subscribers(&self) -> Vec<String> {
        self.inner
            .owners
            .read()
            .map(|owners| owners.values().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner.owners.read().map(|o| o.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An active pointer-down subscription. Dropping it unsubscribes.
#[derive(Debug)]
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    registry: Arc<Registry>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Unsubscribe now. Equivalent to dropping.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Ok(mut owners) = self.registry.owners.write() {
            if let Some(owner) = owners.remove(&self.id) {
                log::debug!("[listeners] unsubscribe #{} ({})", self.id, owner);
            }
        }
    }
}
