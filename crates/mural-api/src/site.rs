use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use tower_sessions::Session;

use mural_types::session::{SessionUser, USER_KEY};

use crate::AppState;
use crate::error::AppError;

pub async fn home(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let user: Option<SessionUser> = session.get(USER_KEY).await?;
    Ok(Html(state.pages.home(user.as_ref())?))
}

/// Fallback for unmatched paths. The login gate runs first, so anonymous
/// requests to unknown paths redirect instead of reaching this.
pub async fn not_found(
    State(state): State<AppState>,
    session: Session,
) -> Result<(StatusCode, Html<String>), AppError> {
    let user: Option<SessionUser> = session.get(USER_KEY).await?;
    Ok((StatusCode::NOT_FOUND, Html(state.pages.not_found(user.as_ref())?)))
}
