use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::storage::{StorageBackend, StorageError};
use arcova_core::SessionProvider;
use arcova_shared::{AuthSession, User};

/// Persisted identity document. The token is opaque to the engine; it is
/// carried for the transport layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct AuthDocument {
    user: Option<User>,
    token: Option<String>,
}

/// Durable session holder backed by client storage. Both fields persist
/// across sessions; logout clears both.
pub struct AuthStore {
    backend: Arc<dyn StorageBackend>,
    state: Mutex<AuthDocument>,
}

impl AuthStore {
    pub const STORE_KEY: &'static str = "arcova-auth";

    /// Hydrate from storage; an absent or unreadable document starts a
    /// signed-out session.
    pub fn hydrate(backend: Arc<dyn StorageBackend>) -> Result<Self, StorageError> {
        let state = match backend.load(Self::STORE_KEY)? {
            Some(document) => serde_json::from_value(document).unwrap_or_else(|err| {
                tracing::warn!(%err, "discarding unreadable auth document");
                AuthDocument::default()
            }),
            None => AuthDocument::default(),
        };

        Ok(Self {
            backend,
            state: Mutex::new(state),
        })
    }

    pub fn set_auth(&self, user: User, token: String) -> Result<(), StorageError> {
        let mut state = self.state.lock().map_err(|_| StorageError::Poisoned)?;
        tracing::info!(user_id = %user.id, "session established");
        state.user = Some(user);
        state.token = Some(token);
        self.persist(&state)
    }

    pub fn logout(&self) -> Result<(), StorageError> {
        let mut state = self.state.lock().map_err(|_| StorageError::Poisoned)?;
        tracing::info!("session cleared");
        state.user = None;
        state.token = None;
        self.persist(&state)
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.lock().ok()?.user.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state.lock().ok()?.token.clone()
    }

    fn persist(&self, state: &AuthDocument) -> Result<(), StorageError> {
        let document = serde_json::to_value(state)?;
        self.backend.save(Self::STORE_KEY, &document)
    }
}

impl SessionProvider for AuthStore {
    fn current_session(&self) -> Option<AuthSession> {
        let state = self.state.lock().ok()?;
        state.user.as_ref().map(AuthSession::for_user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use arcova_shared::UserRole;
    use chrono::Utc;

    fn user() -> User {
        User {
            id: "usr-1".to_string(),
            email: "ines@example.com".to_string(),
            role: UserRole::Traveller,
            full_name: Some("Ines Aubert".to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_session_survives_rehydrate() {
        let backend: Arc<dyn StorageBackend> = Arc::new(MemoryStore::new());

        let store = AuthStore::hydrate(backend.clone()).unwrap();
        assert!(store.current_session().is_none());
        store.set_auth(user(), "tok-1".to_string()).unwrap();

        let rehydrated = AuthStore::hydrate(backend).unwrap();
        let session = rehydrated.current_session().unwrap();
        assert_eq!(session.user_id, "usr-1");
        assert_eq!(rehydrated.token().as_deref(), Some("tok-1"));
    }

    #[test]
    fn test_logout_clears_both_fields() {
        let backend: Arc<dyn StorageBackend> = Arc::new(MemoryStore::new());
        let store = AuthStore::hydrate(backend.clone()).unwrap();
        store.set_auth(user(), "tok-1".to_string()).unwrap();
        store.logout().unwrap();

        assert!(store.current_session().is_none());
        assert!(store.token().is_none());

        let rehydrated = AuthStore::hydrate(backend).unwrap();
        assert!(rehydrated.current_session().is_none());
    }
}
