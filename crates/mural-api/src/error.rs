use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use mural_store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("erro na sessão: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Erro ao encerrar a sessão")]
    SessionDestroy(#[source] tower_sessions::session::Error),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("erro ao renderizar página: {0}")]
    Render(#[from] minijinja::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("{self}");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
