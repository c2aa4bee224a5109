use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Traveller,
    Host,
    Admin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub full_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Ambient identity state read by the engine. Token issuance lives elsewhere;
/// the engine only cares that a session is present and who it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub user_id: String,
    pub role: UserRole,
    pub display_name: Option<String>,
}

impl AuthSession {
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            role: user.role,
            display_name: user.full_name.clone(),
        }
    }
}
