//! Profile page handlers.
//!
//! `/`, `/{username}` and `/api/profile` share one handler core. They differ
//! only in where the username comes from and in what happens when it is empty.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use myportfolio_core::{PUBLIC_CACHE_CONTROL, ProfileView, normalize_username};
use serde::Deserialize;

use super::resolve_base_url;
use crate::config::MissingUsername;
use crate::error::PagesError;
use crate::render;
use crate::state::AppState;

/// `?username=` query parameter.
#[derive(Debug, Default, Deserialize)]
pub struct UsernameQuery {
    pub username: Option<String>,
}

/// `GET /`: a profile when `?username=` is given, otherwise the landing page.
pub async fn home_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<UsernameQuery>,
) -> Result<Response, PagesError> {
    serve_profile(
        &state,
        &headers,
        query.username.as_deref(),
        MissingUsername::Landing,
    )
    .await
}

/// `GET /{username}`.
pub async fn path_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(username): Path<String>,
) -> Result<Response, PagesError> {
    serve_profile(&state, &headers, Some(&username), MissingUsername::Landing).await
}

/// `GET /api/profile?username=`. A missing username follows configuration.
pub async fn api_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<UsernameQuery>,
) -> Result<Response, PagesError> {
    let policy = state.config.missing_username;
    serve_profile(&state, &headers, query.username.as_deref(), policy).await
}

async fn serve_profile(
    state: &AppState,
    headers: &HeaderMap,
    raw_username: Option<&str>,
    on_missing: MissingUsername,
) -> Result<Response, PagesError> {
    let username = normalize_username(raw_username.unwrap_or_default());
    if username.is_empty() {
        return match on_missing {
            MissingUsername::Landing => Ok(render::landing_page().into_response()),
            MissingUsername::Reject => Err(PagesError::MissingUsername),
        };
    }

    let record = state
        .store
        .find_by_username(&username)
        .await?
        .ok_or_else(|| PagesError::NotFound(username.clone()))?;

    tracing::debug!(username = %username, "profile found");

    if let Some(Err(err)) = record.birthday_date() {
        tracing::warn!(username = %username, error = %err, "ignoring unreadable birthday");
    }

    let base_url = resolve_base_url(&state.config, headers);
    let view = ProfileView::new(&record, &username, &base_url);

    let template = state.template.load().await.map_err(PagesError::Template)?;
    let html = render::render_profile(&template, &view)?;

    Ok(build_response(html))
}

/// Build the HTML response with cache and security headers.
fn build_response(html: String) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(PUBLIC_CACHE_CONTROL),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );

    (StatusCode::OK, headers, html).into_response()
}
