use axum::Form;
use axum::extract::State;
use axum::response::{Html, Response};
use chrono::Utc;
use tower_sessions::Session;
use tracing::{info, warn};

use mural_types::forms::LoginForm;
use mural_types::session::{SessionUser, USER_KEY};

use crate::error::AppError;
use crate::{AppState, found, middleware::LOGIN_PATH};

/// Decides whether a submitted credential pair grants access. The demo
/// ships a single fixed account, but the check sits behind this trait so a
/// real verifier can be dropped in.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

pub struct FixedCredentials {
    username: String,
    password: String,
}

impl FixedCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The only account the demo knows about.
    pub fn admin() -> Self {
        Self::new("admin", "admin")
    }
}

impl CredentialVerifier for FixedCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

pub async fn login_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let user: Option<SessionUser> = session.get(USER_KEY).await?;
    Ok(Html(state.pages.login(user.as_ref())?))
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    if state.verifier.verify(&form.username, &form.password) {
        let user = SessionUser {
            username: form.username,
            last_login: Utc::now(),
        };
        session.insert(USER_KEY, &user).await?;
        info!(username = %user.username, "login accepted");
        return Ok(found("/"));
    }

    // No error feedback on bad credentials, just back to the form.
    warn!(username = %form.username, "login rejected");
    Ok(found(LOGIN_PATH))
}

pub async fn logout(session: Session) -> Result<Response, AppError> {
    session.flush().await.map_err(AppError::SessionDestroy)?;
    Ok(found(LOGIN_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_credentials_accept_only_the_exact_pair() {
        let verifier = FixedCredentials::admin();
        assert!(verifier.verify("admin", "admin"));
        assert!(!verifier.verify("admin", "wrong"));
        assert!(!verifier.verify("Admin", "admin"));
        assert!(!verifier.verify("", ""));
    }
}
