//! In-memory profile store, used for local development and tests.

use std::path::Path;

use async_trait::async_trait;
use myportfolio_core::{ProfileRecord, SitemapEntry, normalize_username};

use super::{ProfileStore, StoreError};

/// Profiles held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    profiles: Vec<ProfileRecord>,
}

impl MemoryStore {
    /// Create a store holding `profiles`.
    pub fn new(profiles: Vec<ProfileRecord>) -> Self {
        Self { profiles }
    }

    /// Load a JSON array of profile records (camelCase field names).
    pub fn from_json_file(path: &Path) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path)?;
        let profiles: Vec<ProfileRecord> = serde_json::from_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            profiles = profiles.len(),
            "loaded profile fixture"
        );
        Ok(Self::new(profiles))
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<ProfileRecord>, StoreError> {
        Ok(self
            .profiles
            .iter()
            .find(|p| normalize_username(&p.username) == username)
            .cloned())
    }

    async fn list_sitemap_entries(&self) -> Result<Vec<SitemapEntry>, StoreError> {
        Ok(self
            .profiles
            .iter()
            .map(|p| SitemapEntry {
                username: Some(p.username.clone()).filter(|u| !u.is_empty()),
                updated_at: p.updated_at,
            })
            .collect())
    }
}
