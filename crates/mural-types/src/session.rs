use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Session key holding the authenticated user, if any.
pub const USER_KEY: &str = "user";

/// Session key holding flash validation errors for the registration form.
pub const ERRORS_KEY: &str = "errors";

/// The authenticated identity attached to a session. Absent for anonymous
/// sessions; written on successful login, dropped when the session is
/// destroyed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub last_login: DateTime<Utc>,
}

/// Per-field validation messages for the registration form. Stored in the
/// session on a failed submission and consumed by the next render of the
/// form (flash semantics: visible exactly once).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationErrors {
    pub username: Option<String>,
    pub data: Option<String>,
    pub nickname: Option<String>,
}

impl RegistrationErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.data.is_none() && self.nickname.is_none()
    }
}
