use axum::Form;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use chrono::Utc;
use tower_sessions::Session;
use tracing::debug;

use mural_types::forms::ChatForm;
use mural_types::models::Message;
use mural_types::session::{SessionUser, USER_KEY};

use crate::error::AppError;
use crate::{AppState, found};

pub async fn chat_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    // Chat needs at least one registered participant to populate the
    // username selector.
    if state.users.is_empty()? {
        return Ok(found("/cadastro"));
    }

    let user: Option<SessionUser> = session.get(USER_KEY).await?;
    let users = state.users.list()?;
    let messages = state.messages.list()?;

    Ok(Html(state.pages.chat(user.as_ref(), &users, &messages)?).into_response())
}

pub async fn post_message(
    State(state): State<AppState>,
    Form(form): Form<ChatForm>,
) -> Result<Response, AppError> {
    // Incomplete posts are dropped silently. The selected username is not
    // checked against the registered users.
    if form.message.is_empty() || form.username.is_empty() {
        debug!("chat post dropped: missing message or username");
        return Ok(found("/batepapo"));
    }

    state.messages.add(Message {
        username: form.username,
        message: form.message,
        date: Utc::now(),
    })?;

    Ok(found("/batepapo"))
}
