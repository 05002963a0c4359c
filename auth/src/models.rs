use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Username/password pair presented at login.
///
/// Lives only for the duration of a login call.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Identity record as held by the user store.
///
/// The only type carrying `password_hash`. Not `Serialize`: convert to
/// [`AuthenticatedIdentity`] before exposing it.
#[derive(Clone, PartialEq, Eq)]
pub struct StoredIdentity {
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password_hash: String,
    pub active: bool,
}

impl fmt::Debug for StoredIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredIdentity")
            .field("username", &self.username)
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password_hash", &"[redacted]")
            .field("active", &self.active)
            .finish()
    }
}

/// Public view of an identity, safe to return to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedIdentity {
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub active: bool,
}

impl From<StoredIdentity> for AuthenticatedIdentity {
    fn from(identity: StoredIdentity) -> Self {
        Self {
            username: identity.username,
            full_name: identity.full_name,
            email: identity.email,
            active: identity.active,
        }
    }
}
