//! # HTTP Layer
//!
//! The axum surface consumed by the admin UI. This is the outermost layer,
//! analogous to a CLI front-end: it owns routing, the session cookie, and
//! status-code mapping, and delegates everything else to [`FolioApi`].
//!
//! All `/api/*` routes and `/logout` sit behind the session guard
//! ([`session::require_session`]); `/login` and `/api/health` are open.
//! The store lives behind one `tokio::sync::Mutex`, so each
//! read-modify-write sequence is mutually exclusive across requests.

use crate::api::FolioApi;
use crate::auth::{CredentialProvider, SessionStore};
use crate::error::{FolioError, Result};
use crate::store::fs::FileStore;
use crate::upload::MAX_UPLOAD_BYTES;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post, put};
use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

pub mod handlers;
pub mod session;

/// Shared state behind every handler.
pub struct AppState {
    pub api: Mutex<FolioApi<FileStore>>,
    pub sessions: Mutex<SessionStore>,
    pub credentials: Arc<dyn CredentialProvider + Send + Sync>,
    pub images_dir: PathBuf,
    pub cookie_name: String,
}

impl AppState {
    pub fn new(
        data_dir: PathBuf,
        images_dir: PathBuf,
        credentials: Arc<dyn CredentialProvider + Send + Sync>,
        cookie_name: String,
    ) -> Arc<Self> {
        Arc::new(Self {
            api: Mutex::new(FolioApi::new(FileStore::new(data_dir))),
            sessions: Mutex::new(SessionStore::new()),
            credentials,
            images_dir,
            cookie_name,
        })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let guarded = Router::new()
        .route("/api/stats", get(handlers::stats))
        .route(
            "/api/projects",
            get(handlers::list_projects).post(handlers::create_project),
        )
        .route(
            "/api/projects/:id",
            put(handlers::update_project).delete(handlers::delete_project),
        )
        .route(
            "/api/skills",
            get(handlers::get_skills).post(handlers::replace_skills),
        )
        .route(
            "/api/profile",
            get(handlers::get_profile).post(handlers::replace_profile),
        )
        .route(
            "/api/settings",
            get(handlers::get_settings).post(handlers::replace_settings),
        )
        .route("/api/upload", post(handlers::upload))
        .route("/logout", post(handlers::logout))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session::require_session,
        ));

    Router::new()
        .route("/login", post(handlers::login))
        .route("/api/health", get(handlers::health))
        .merge(guarded)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// Bind and run the server until the process is stopped.
pub async fn serve(state: Arc<AppState>, bind: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(FolioError::Io)?;
    let local_addr = listener.local_addr().map_err(FolioError::Io)?;
    log::info!("listening on http://{local_addr}");

    axum::serve(listener, router(state))
        .await
        .map_err(FolioError::Io)?;
    Ok(())
}
