//! Health check endpoint.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    /// Which profile store backs the service (`firestore`, `fixture`, ...).
    store: &'static str,
    /// Whether canonical URLs come from `SITE_BASE_URL` or request headers.
    base_url: &'static str,
}

/// Load balancer probe. Reports the configured store without contacting it,
/// so a slow Firestore never fails the probe.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let config = &state.config;
    Json(HealthResponse {
        status: "ok",
        service: "myportfolio-pages",
        version: env!("CARGO_PKG_VERSION"),
        store: config.store.kind(),
        base_url: if config.site_base_url.is_some() {
            "configured"
        } else {
            "request"
        },
    })
}
