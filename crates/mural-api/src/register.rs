use axum::Form;
use axum::extract::State;
use axum::response::{Html, Response};
use tower_sessions::Session;
use tracing::{debug, info};

use mural_types::forms::RegisterForm;
use mural_types::session::{ERRORS_KEY, RegistrationErrors, SessionUser, USER_KEY};

use crate::error::AppError;
use crate::{AppState, found};

pub async fn register_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let user: Option<SessionUser> = session.get(USER_KEY).await?;

    // Flash semantics: errors survive exactly one render.
    let errors: Option<RegistrationErrors> = session.remove(ERRORS_KEY).await?;

    let users = state.users.list()?;
    Ok(Html(state.pages.register(user.as_ref(), &users, errors.as_ref())?))
}

pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    match form.validate() {
        Ok(user) => {
            info!(username = %user.username, "user registered");
            state.users.add(user)?;
        }
        Err(errors) => {
            debug!("registration rejected: {errors:?}");
            session.insert(ERRORS_KEY, &errors).await?;
        }
    }

    Ok(found("/cadastro"))
}
