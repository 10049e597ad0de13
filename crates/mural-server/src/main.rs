use std::net::SocketAddr;
use std::sync::Arc;

use sha2::{Digest, Sha512};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::time::Duration;
use tower_sessions::cookie::{Key, SameSite};
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};
use tracing::info;

use mural_api::auth::FixedCredentials;
use mural_api::{AppState, AppStateInner};
use mural_pages::Pages;
use mural_store::memory::{MemoryMessages, MemoryUsers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mural=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let secret = std::env::var("SUPER_SECRET_KEY")
        .map_err(|_| anyhow::anyhow!("SUPER_SECRET_KEY must be set"))?;
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()?;
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into());

    // Cookie signing key derived from the configured secret; Sha512 yields
    // exactly the 64 bytes Key::from requires.
    let key = Key::from(Sha512::digest(secret.as_bytes()).as_slice());

    // Sessions live in process memory only, with a 30-minute rolling expiry.
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_same_site(SameSite::Strict)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(30)))
        .with_signed(key);

    // Shared state
    let state: AppState = Arc::new(AppStateInner {
        users: Arc::new(MemoryUsers::default()),
        messages: Arc::new(MemoryMessages::default()),
        verifier: Arc::new(FixedCredentials::admin()),
        pages: Pages::new()?,
    });

    // Static assets are mounted outside the session layer and the login
    // gate, so the stylesheet loads on the login page too.
    let app = mural_api::router(state)
        .layer(session_layer)
        .nest_service("/static", ServeDir::new(&static_dir))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Mural listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
