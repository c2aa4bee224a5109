use std::sync::Arc;

use crate::store::TripStore;
use arcova_core::SessionProvider;
use arcova_shared::TripItem;
use arcova_store::StorageError;

/// Where a pending add-to-trip action currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// No pending item, gate hidden.
    Idle,
    /// An unauthenticated add was intercepted; the item waits on sign-in.
    Gated,
    /// A session appeared and the pending add was replayed.
    Resolved,
    /// The visitor closed the gate; the add was abandoned.
    Dismissed,
}

/// Gates add-to-trip behind authentication without losing the visitor's
/// intent. A failed sign-in attempt calls none of these methods, so the
/// machine stays Gated and the pending item survives for a retry.
pub struct AuthGateCoordinator {
    sessions: Arc<dyn SessionProvider>,
}

impl AuthGateCoordinator {
    pub fn new(sessions: Arc<dyn SessionProvider>) -> Self {
        Self { sessions }
    }

    /// Add directly when a session is present; otherwise stash the item and
    /// raise the gate without touching the cart items.
    pub fn request_add(
        &self,
        trip: &mut TripStore,
        item: TripItem,
    ) -> Result<GateState, StorageError> {
        if self.sessions.current_session().is_some() {
            trip.add_item(item)?;
            return Ok(GateState::Idle);
        }

        tracing::debug!(item_id = %item.id, "add gated pending authentication");
        trip.mutate(|cart| {
            cart.set_pending_item(Some(item));
            cart.set_show_auth_gate(true);
        })?;
        Ok(GateState::Gated)
    }

    /// Reactive hook: call on every authentication state change, not just a
    /// login click, so sign-in completed elsewhere still replays the add.
    pub fn session_changed(&self, trip: &mut TripStore) -> Result<GateState, StorageError> {
        if self.sessions.current_session().is_none() {
            return Ok(self.state(trip));
        }

        let replayed = trip.mutate(|cart| match cart.take_pending_item() {
            Some(pending) => {
                tracing::info!(item_id = %pending.id, "replaying gated add");
                cart.add_item(pending);
                cart.set_show_auth_gate(false);
                true
            }
            None => false,
        })?;

        Ok(if replayed {
            GateState::Resolved
        } else {
            self.state(trip)
        })
    }

    /// Abandon the pending add; it is not retried later.
    pub fn dismiss(&self, trip: &mut TripStore) -> Result<GateState, StorageError> {
        trip.mutate(|cart| {
            cart.set_pending_item(None);
            cart.set_show_auth_gate(false);
        })?;
        Ok(GateState::Dismissed)
    }

    pub fn state(&self, trip: &TripStore) -> GateState {
        if trip.cart().pending_item().is_some() {
            GateState::Gated
        } else {
            GateState::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcova_shared::{AuthSession, TripItemKind, UserRole};
    use arcova_store::{MemoryStore, StorageBackend};
    use std::sync::Mutex;

    struct ToggleSessions(Mutex<Option<AuthSession>>);

    impl ToggleSessions {
        fn signed_out() -> Arc<Self> {
            Arc::new(Self(Mutex::new(None)))
        }

        fn sign_in(&self) {
            *self.0.lock().unwrap() = Some(AuthSession {
                user_id: "usr-1".to_string(),
                role: UserRole::Traveller,
                display_name: None,
            });
        }
    }

    impl SessionProvider for ToggleSessions {
        fn current_session(&self) -> Option<AuthSession> {
            self.0.lock().unwrap().clone()
        }
    }

    fn item(id: &str) -> TripItem {
        TripItem {
            id: id.to_string(),
            kind: TripItemKind::Hotel,
            name: format!("Item {id}"),
            subtitle: String::new(),
            price_cents: 45000,
            image_url: None,
        }
    }

    fn trip() -> TripStore {
        let backend: Arc<dyn StorageBackend> = Arc::new(MemoryStore::new());
        TripStore::hydrate(backend).unwrap()
    }

    #[test]
    fn test_authenticated_add_skips_gate() {
        let sessions = ToggleSessions::signed_out();
        sessions.sign_in();
        let gate = AuthGateCoordinator::new(sessions);
        let mut trip = trip();

        let state = gate.request_add(&mut trip, item("prop-1")).unwrap();
        assert_eq!(state, GateState::Idle);
        assert!(trip.cart().is_in_trip("prop-1"));
        assert!(trip.cart().pending_item().is_none());
    }

    #[test]
    fn test_gated_add_then_replay_on_login() {
        let sessions = ToggleSessions::signed_out();
        let gate = AuthGateCoordinator::new(sessions.clone());
        let mut trip = trip();

        // Unauthenticated: item is stashed, cart untouched
        let state = gate.request_add(&mut trip, item("prop-1")).unwrap();
        assert_eq!(state, GateState::Gated);
        assert!(trip.cart().items().is_empty());
        assert!(trip.cart().pending_item().is_some());
        assert!(trip.cart().show_auth_gate());

        // Session appears (any flow): the add replays
        sessions.sign_in();
        let state = gate.session_changed(&mut trip).unwrap();
        assert_eq!(state, GateState::Resolved);
        assert!(trip.cart().is_in_trip("prop-1"));
        assert!(trip.cart().pending_item().is_none());
        assert!(!trip.cart().show_auth_gate());
    }

    #[test]
    fn test_failed_auth_leaves_gated() {
        let sessions = ToggleSessions::signed_out();
        let gate = AuthGateCoordinator::new(sessions);
        let mut trip = trip();

        gate.request_add(&mut trip, item("prop-1")).unwrap();

        // Still signed out (e.g. bad credentials): the pending item survives
        let state = gate.session_changed(&mut trip).unwrap();
        assert_eq!(state, GateState::Gated);
        assert!(trip.cart().pending_item().is_some());
    }

    #[test]
    fn test_dismiss_abandons_the_add() {
        let sessions = ToggleSessions::signed_out();
        let gate = AuthGateCoordinator::new(sessions.clone());
        let mut trip = trip();

        gate.request_add(&mut trip, item("prop-1")).unwrap();
        let state = gate.dismiss(&mut trip).unwrap();
        assert_eq!(state, GateState::Dismissed);
        assert!(trip.cart().pending_item().is_none());
        assert!(!trip.cart().show_auth_gate());

        // Later sign-in must not resurrect the abandoned add
        sessions.sign_in();
        let state = gate.session_changed(&mut trip).unwrap();
        assert_eq!(state, GateState::Idle);
        assert!(trip.cart().items().is_empty());
    }

    #[test]
    fn test_session_change_without_pending_is_idle() {
        let sessions = ToggleSessions::signed_out();
        let gate = AuthGateCoordinator::new(sessions.clone());
        let mut trip = trip();

        sessions.sign_in();
        assert_eq!(gate.session_changed(&mut trip).unwrap(), GateState::Idle);
    }
}
