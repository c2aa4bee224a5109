use arcova_shared::AuthSession;

/// Synchronous read of ambient identity state. The engine never issues or
/// validates tokens; it only asks whether a session is present.
pub trait SessionProvider: Send + Sync {
    fn current_session(&self) -> Option<AuthSession>;
}
