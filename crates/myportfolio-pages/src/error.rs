//! Error types for the pages service.
//!
//! Errors are answered with short plain-text bodies. Internal failures are
//! logged with their cause and reach the client only as a generic message.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::store::StoreError;

/// Pages service error type.
#[derive(Debug, thiserror::Error)]
pub enum PagesError {
    /// The request carried no username and the route rejects that.
    #[error("missing username")]
    MissingUsername,

    /// No profile matches the requested username.
    #[error("profile not found: {0}")]
    NotFound(String),

    /// The record store failed while rendering a profile.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The profile template could not be read.
    #[error("template error: {0}")]
    Template(#[source] std::io::Error),

    /// Page data could not be derived or serialized.
    #[error("render error: {0}")]
    Core(#[from] myportfolio_core::Error),

    /// The record store failed while generating the sitemap.
    #[error("sitemap error: {0}")]
    Sitemap(#[source] StoreError),
}

impl PagesError {
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            Self::MissingUsername => (StatusCode::BAD_REQUEST, "Missing username"),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "Profile not found"),
            Self::Sitemap(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Sitemap error"),
            Self::Store(_) | Self::Template(_) | Self::Core(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error")
            }
        }
    }
}

impl IntoResponse for PagesError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            message,
        )
            .into_response()
    }
}
