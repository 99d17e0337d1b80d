//! Route handlers: JSON envelopes, status mapping, and multipart upload
//! extraction. Business logic stays in the repository layer; handlers only
//! lock the state, delegate, and shape responses.

use super::{session, AppState};
use crate::error::FolioError;
use crate::upload::{self, UploadKind};
use axum::extract::{Multipart, Path, State};
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Error wrapper mapping [`FolioError`] onto HTTP statuses with the
/// `{success:false, message}` body every endpoint uses.
pub struct ApiError(FolioError);

impl From<FolioError> for ApiError {
    fn from(err: FolioError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            FolioError::ProjectNotFound(_) => StatusCode::NOT_FOUND,
            FolioError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            FolioError::Unauthorized => StatusCode::UNAUTHORIZED,
            // Storage failures surface their message verbatim; acceptable
            // in a trusted single-admin deployment.
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error_body(status, &self.0.to_string())
    }
}

pub(crate) fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({"success": false, "message": message}))).into_response()
}

fn success(message: &str) -> Json<Value> {
    Json(json!({"success": true, "message": message}))
}

pub async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Response {
    if !state.credentials.verify(&req.username, &req.password) {
        log::warn!("failed login attempt for {:?}", req.username);
        return error_body(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }

    let token = state.sessions.lock().await.create(&req.username);
    log::info!("{} logged in", req.username);

    with_cookie(
        success("Login successful").into_response(),
        &session::session_cookie(&state.cookie_name, &token),
    )
}

pub async fn logout(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    if let Some(token) = session::session_token(&headers, &state.cookie_name) {
        state.sessions.lock().await.remove(token);
    }
    with_cookie(
        success("You have been logged out").into_response(),
        &session::clear_cookie(&state.cookie_name),
    )
}

fn with_cookie(mut response: Response, cookie: &str) -> Response {
    match HeaderValue::from_str(cookie) {
        Ok(value) => {
            response.headers_mut().insert(SET_COOKIE, value);
            response
        }
        Err(_) => error_body(StatusCode::INTERNAL_SERVER_ERROR, "Invalid cookie value"),
    }
}

pub async fn stats(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let stats = state.api.lock().await.dashboard_stats()?;
    Ok(Json(stats).into_response())
}

pub async fn list_projects(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let projects = state.api.lock().await.list_projects()?;
    Ok(Json(Value::Array(projects)))
}

pub async fn create_project(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let project = state.api.lock().await.create_project(body)?;
    Ok(Json(json!({
        "success": true,
        "message": "Project added successfully",
        "project": project
    })))
}

pub async fn update_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    state.api.lock().await.update_project(&id, body)?;
    Ok(success("Project updated successfully"))
}

pub async fn delete_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.api.lock().await.delete_project(&id)?;
    Ok(success("Project deleted successfully"))
}

pub async fn get_skills(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.api.lock().await.get_skills()?))
}

pub async fn replace_skills(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    state.api.lock().await.replace_skills(&body)?;
    Ok(success("Skills updated successfully"))
}

pub async fn get_profile(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.api.lock().await.get_profile()?))
}

pub async fn replace_profile(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    state.api.lock().await.replace_profile(&body)?;
    Ok(success("Profile updated successfully"))
}

pub async fn get_settings(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.api.lock().await.get_settings()?))
}

pub async fn replace_settings(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    state.api.lock().await.replace_settings(&body)?;
    Ok(success("Settings updated successfully"))
}

pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut kind_raw: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| FolioError::InvalidInput(e.to_string()))?
    {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("file") => {
                let name = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| FolioError::InvalidInput(e.to_string()))?;
                file = Some((name, bytes.to_vec()));
            }
            Some("type") => {
                kind_raw = field.text().await.ok();
            }
            _ => {}
        }
    }

    let Some((name, bytes)) = file else {
        return Err(FolioError::InvalidInput("No file provided".to_string()).into());
    };

    let kind = UploadKind::parse(kind_raw.as_deref());
    let stored = upload::store_image(&state.images_dir, &name, &bytes, kind)?;
    log::info!("stored upload {} ({} bytes)", stored.filename, bytes.len());

    Ok(Json(json!({
        "success": true,
        "message": "File uploaded successfully",
        "filename": stored.filename,
        "path": stored.web_path
    })))
}
