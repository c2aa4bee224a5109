use arcova_shared::TripItem;

/// The traveller's in-progress trip: a deduplicated, insertion-ordered
/// collection of cart lines plus the transient auth-gate signals.
#[derive(Debug, Default, Clone)]
pub struct TripCart {
    items: Vec<TripItem>,
    pending_item: Option<TripItem>,
    /// UI signal only. Never persisted; always false after hydration.
    show_auth_gate: bool,
}

impl TripCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<TripItem>, pending_item: Option<TripItem>) -> Self {
        Self {
            items,
            pending_item,
            show_auth_gate: false,
        }
    }

    /// Append unless an item with the same id is already present. Dedup is
    /// by id, not value: a second add with a different price is dropped.
    /// Returns whether the item was inserted.
    pub fn add_item(&mut self, item: TripItem) -> bool {
        if self.is_in_trip(&item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Returns whether anything was removed; removing an absent id is a
    /// no-op, not an error.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn clear_trip(&mut self) {
        self.items.clear();
    }

    pub fn is_in_trip(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn items(&self) -> &[TripItem] {
        &self.items
    }

    pub fn total_cents(&self) -> i64 {
        self.items.iter().map(|item| item.price_cents).sum()
    }

    pub fn pending_item(&self) -> Option<&TripItem> {
        self.pending_item.as_ref()
    }

    pub fn set_pending_item(&mut self, item: Option<TripItem>) {
        self.pending_item = item;
    }

    pub fn take_pending_item(&mut self) -> Option<TripItem> {
        self.pending_item.take()
    }

    pub fn show_auth_gate(&self) -> bool {
        self.show_auth_gate
    }

    pub fn set_show_auth_gate(&mut self, show: bool) {
        self.show_auth_gate = show;
    }
}
