//! Route definitions for the pages service.
//!
//! ## Routes
//!
//! - `GET /` - Landing page, or a profile with `?username=`
//! - `GET /api/profile?username=` - Profile page
//! - `GET /sitemap.xml` - Sitemap of all profile pages
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions
//! - `GET /{username}` - Profile page

mod health;
mod profile;
mod sitemap;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::IntoResponse;
use axum::routing::get;

use crate::config::Config;
use crate::state::AppState;

/// Build the complete pages service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(profile::home_handler))
        .route("/api/profile", get(profile::api_handler))
        .route("/sitemap.xml", get(sitemap::sitemap_handler))
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .route("/{username}", get(profile::path_handler))
        .with_state(state)
}

/// Serve robots.txt allowing all crawlers and pointing them at the sitemap.
async fn robots_txt(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let base_url = resolve_base_url(&state.config, &headers);
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        format!("User-agent: *\nAllow: /\nSitemap: {base_url}/sitemap.xml\n"),
    )
}

/// Base URL for absolute links in a response.
///
/// `SITE_BASE_URL` wins when configured. Otherwise the URL is rebuilt from the
/// first `x-forwarded-proto` value (default `https`) and the `Host` header
/// (default `localhost`).
pub(crate) fn resolve_base_url(config: &Config, headers: &HeaderMap) -> String {
    if let Some(base) = &config.site_base_url {
        return base.clone();
    }

    let proto = header_str(headers, "x-forwarded-proto")
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("https");
    let host = header_str(headers, header::HOST.as_str())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("localhost");

    format!("{proto}://{host}")
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
