//! Read-only access to the `profiles` collection.
//!
//! Two lookups are needed: a point lookup by username for profile pages and a
//! `username`/`updatedAt` projection of every profile for the sitemap.

mod firestore;
mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use myportfolio_core::{ProfileRecord, SitemapEntry};

pub use self::firestore::FirestoreStore;
pub use self::memory::MemoryStore;

use crate::config::StoreConfig;

/// Name of the collection holding profile documents.
pub const PROFILES_COLLECTION: &str = "profiles";

/// Errors raised by a record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request to the store failed.
    #[error("store request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service account credentials could not be used to sign a token.
    #[error("invalid service account credentials: {0}")]
    Credentials(#[from] jsonwebtoken::errors::Error),

    /// The store answered with a non-success status.
    #[error("store returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned.
        body: String,
    },

    /// A response or fixture could not be decoded.
    #[error("could not decode store data: {0}")]
    Decode(#[from] serde_json::Error),

    /// A fixture file could not be read.
    #[error("could not read fixture: {0}")]
    Io(#[from] std::io::Error),
}

/// Read access to profile records.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Find the profile whose username equals `username`.
    ///
    /// `username` is already normalized (trimmed, lowercase).
    async fn find_by_username(&self, username: &str) -> Result<Option<ProfileRecord>, StoreError>;

    /// List the `username`/`updatedAt` projection of every profile.
    async fn list_sitemap_entries(&self) -> Result<Vec<SitemapEntry>, StoreError>;
}

/// Build the store selected by configuration.
///
/// Called once at startup; the returned handle is shared by all requests.
pub fn connect(config: &StoreConfig) -> Result<Arc<dyn ProfileStore>, StoreError> {
    let store: Arc<dyn ProfileStore> = match config {
        StoreConfig::Firestore(fs) => Arc::new(FirestoreStore::new(fs)?),
        StoreConfig::Fixture(path) => Arc::new(MemoryStore::from_json_file(path)?),
    };
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display() {
        let err = StoreError::Status {
            status: 403,
            body: "permission denied".to_string(),
        };
        assert_eq!(err.to_string(), "store returned 403: permission denied");
    }

    #[test]
    fn connect_fixture_missing_file_is_io_error() {
        let config = StoreConfig::Fixture("/nonexistent/profiles.json".into());
        let err = connect(&config).err().unwrap();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
