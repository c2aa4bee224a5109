use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cart::TripCart;
use arcova_shared::TripItem;
use arcova_store::{StorageBackend, StorageError};

/// Persistence allow-list for the trip cart. `show_auth_gate` is transient
/// UI state and is deliberately absent from this document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TripDocument {
    items: Vec<TripItem>,
    pending_item: Option<TripItem>,
}

/// Serialize-on-mutate / hydrate-on-init wrapper around [`TripCart`]. Every
/// mutation lands in durable storage before the call returns, so a reload
/// observes either the old cart or the new one, never a half-applied add.
pub struct TripStore {
    cart: TripCart,
    backend: Arc<dyn StorageBackend>,
}

impl TripStore {
    pub const STORE_KEY: &'static str = "arcova-trip";

    /// Hydrate from storage. An absent or unreadable document starts an
    /// empty cart; the auth gate always comes back hidden.
    pub fn hydrate(backend: Arc<dyn StorageBackend>) -> Result<Self, StorageError> {
        let document: TripDocument = match backend.load(Self::STORE_KEY)? {
            Some(raw) => serde_json::from_value(raw).unwrap_or_else(|err| {
                tracing::warn!(%err, "discarding unreadable trip document");
                TripDocument::default()
            }),
            None => TripDocument::default(),
        };

        Ok(Self {
            cart: TripCart::with_items(document.items, document.pending_item),
            backend,
        })
    }

    pub fn add_item(&mut self, item: TripItem) -> Result<bool, StorageError> {
        let added = self.cart.add_item(item);
        if added {
            self.persist()?;
        }
        Ok(added)
    }

    pub fn remove_item(&mut self, id: &str) -> Result<bool, StorageError> {
        let removed = self.cart.remove_item(id);
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    pub fn clear_trip(&mut self) -> Result<(), StorageError> {
        self.cart.clear_trip();
        self.persist()
    }

    pub fn set_pending_item(&mut self, item: Option<TripItem>) -> Result<(), StorageError> {
        self.cart.set_pending_item(item);
        self.persist()
    }

    /// Transient: no persistence.
    pub fn set_show_auth_gate(&mut self, show: bool) {
        self.cart.set_show_auth_gate(show);
    }

    pub fn cart(&self) -> &TripCart {
        &self.cart
    }

    /// Escape hatch for coordinator logic that applies several cart changes
    /// as one persisted step.
    pub(crate) fn mutate<R>(
        &mut self,
        f: impl FnOnce(&mut TripCart) -> R,
    ) -> Result<R, StorageError> {
        let out = f(&mut self.cart);
        self.persist()?;
        Ok(out)
    }

    fn persist(&self) -> Result<(), StorageError> {
        let document = TripDocument {
            items: self.cart.items().to_vec(),
            pending_item: self.cart.pending_item().cloned(),
        };
        self.backend
            .save(Self::STORE_KEY, &serde_json::to_value(&document)?)
    }
}
