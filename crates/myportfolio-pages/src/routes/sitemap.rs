//! `GET /sitemap.xml`.

use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use myportfolio_core::{PUBLIC_CACHE_CONTROL, build_sitemap};

use super::resolve_base_url;
use crate::error::PagesError;
use crate::state::AppState;

/// List every public profile page in sitemap XML.
pub async fn sitemap_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, PagesError> {
    let entries = state
        .store
        .list_sitemap_entries()
        .await
        .map_err(PagesError::Sitemap)?;

    let base_url = resolve_base_url(&state.config, &headers);
    let xml = build_sitemap(&base_url, &entries, Utc::now().date_naive());

    tracing::debug!(records = entries.len(), "sitemap generated");

    Ok((
        [
            (header::CONTENT_TYPE, "application/xml; charset=utf-8"),
            (header::CACHE_CONTROL, PUBLIC_CACHE_CONTROL),
        ],
        xml,
    )
        .into_response())
}
