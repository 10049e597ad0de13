use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tower_sessions::Session;

use mural_types::session::{SessionUser, USER_KEY};

use crate::error::AppError;
use crate::found;

pub const LOGIN_PATH: &str = "/login";

/// The login gate: every request to a path other than `/login` needs an
/// authenticated session, anonymous ones are redirected to the login page.
/// Applies to the 404 fallback as well.
pub async fn require_login(
    session: Session,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if req.uri().path() != LOGIN_PATH {
        let user: Option<SessionUser> = session.get(USER_KEY).await?;
        if user.is_none() {
            return Ok(found(LOGIN_PATH));
        }
    }

    Ok(next.run(req).await)
}
