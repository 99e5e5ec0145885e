//! Cloud Firestore store over the REST API.
//!
//! Both lookups are `documents:runQuery` calls against the `profiles`
//! collection. Requests authenticate with an OAuth access token obtained by
//! exchanging a service-account JWT; the token is fetched on first use and
//! reused until shortly before it expires.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use myportfolio_core::{ProfileRecord, SitemapEntry, SocialHandles, normalize_username};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use super::{PROFILES_COLLECTION, ProfileStore, StoreError};
use crate::config::FirestoreConfig;

const FIRESTORE_API: &str = "https://firestore.googleapis.com";
const TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const DATASTORE_SCOPE: &str = "https://www.googleapis.com/auth/datastore";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime requested for the signed assertion.
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Tokens are refreshed this long before Google says they expire.
const TOKEN_REFRESH_MARGIN: Duration = Duration::from_secs(60);

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Firestore-backed profile store.
pub struct FirestoreStore {
    http: reqwest::Client,
    run_query_url: String,
    auth: Auth,
}

enum Auth {
    /// The emulator accepts any bearer token.
    Emulator,
    ServiceAccount {
        client_email: String,
        key: EncodingKey,
        token: Mutex<Option<AccessToken>>,
    },
}

struct AccessToken {
    value: String,
    refresh_at: Instant,
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

impl FirestoreStore {
    /// Build the store. Fails if the private key is not a usable RSA PEM key.
    pub fn new(config: &FirestoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        let (base, auth) = match (&config.emulator_host, &config.service_account) {
            (Some(host), _) => (format!("http://{host}"), Auth::Emulator),
            (None, Some(account)) => (
                FIRESTORE_API.to_string(),
                Auth::ServiceAccount {
                    client_email: account.client_email.clone(),
                    key: EncodingKey::from_rsa_pem(account.private_key.as_bytes())?,
                    token: Mutex::new(None),
                },
            ),
            (None, None) => {
                return Err(StoreError::Credentials(
                    jsonwebtoken::errors::ErrorKind::InvalidKeyFormat.into(),
                ));
            }
        };

        tracing::info!(
            project_id = %config.project_id,
            base = %base,
            emulator = matches!(auth, Auth::Emulator),
            "firestore store initialized"
        );

        Ok(Self {
            http,
            run_query_url: run_query_url(&base, &config.project_id),
            auth,
        })
    }

    /// A bearer token for the next request.
    async fn access_token(&self) -> Result<String, StoreError> {
        let Auth::ServiceAccount {
            client_email,
            key,
            token,
        } = &self.auth
        else {
            return Ok("owner".to_string());
        };

        let mut cached = token.lock().await;
        if let Some(current) = cached.as_ref()
            && Instant::now() < current.refresh_at
        {
            return Ok(current.value.clone());
        }

        let fresh = self.exchange_assertion(client_email, key).await?;
        let value = fresh.value.clone();
        *cached = Some(fresh);
        Ok(value)
    }

    /// Exchange a signed service-account assertion for an access token.
    async fn exchange_assertion(
        &self,
        client_email: &str,
        key: &EncodingKey,
    ) -> Result<AccessToken, StoreError> {
        let now = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: client_email,
            scope: DATASTORE_SCOPE,
            aud: TOKEN_URI,
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };
        let assertion = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, key)?;

        let resp = self
            .http
            .post(TOKEN_URI)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;
        let resp = ensure_success(resp).await?;
        let token: TokenResponse = resp.json().await?;

        tracing::debug!(expires_in = token.expires_in, "obtained firestore access token");

        Ok(AccessToken {
            value: token.access_token,
            refresh_at: Instant::now()
                + Duration::from_secs(token.expires_in).saturating_sub(TOKEN_REFRESH_MARGIN),
        })
    }

    async fn run_query(&self, query: &serde_json::Value) -> Result<Vec<Document>, StoreError> {
        let token = self.access_token().await?;
        let resp = self
            .http
            .post(&self.run_query_url)
            .bearer_auth(token)
            .json(query)
            .send()
            .await?;
        let resp = ensure_success(resp).await?;
        let bytes = resp.bytes().await?;
        Ok(decode_run_query(&bytes)?)
    }
}

#[async_trait]
impl ProfileStore for FirestoreStore {
    /// Exact match first. On a miss, the username projection is scanned for a
    /// record stored with different casing, which is then fetched by its
    /// stored spelling.
    async fn find_by_username(&self, username: &str) -> Result<Option<ProfileRecord>, StoreError> {
        let documents = self.run_query(&lookup_query(username)).await?;
        tracing::debug!(username = %username, found = !documents.is_empty(), "profile lookup");
        if let Some(document) = documents.into_iter().next() {
            return Ok(Some(document.into_profile()));
        }

        let names = self.run_query(&username_scan_query()).await?;
        let Some(stored) = stored_spelling(names, username) else {
            return Ok(None);
        };

        tracing::debug!(username = %username, stored = %stored, "matched mixed-case username");
        let documents = self.run_query(&lookup_query(&stored)).await?;
        Ok(documents.into_iter().next().map(Document::into_profile))
    }

    async fn list_sitemap_entries(&self) -> Result<Vec<SitemapEntry>, StoreError> {
        let documents = self.run_query(&sitemap_query()).await?;
        tracing::debug!(count = documents.len(), "listed profiles for sitemap");
        Ok(documents.into_iter().map(Document::into_sitemap_entry).collect())
    }
}

fn run_query_url(base: &str, project_id: &str) -> String {
    format!("{base}/v1/projects/{project_id}/databases/(default)/documents:runQuery")
}

/// Turn a non-success response into [`StoreError::Status`].
async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(StoreError::Status {
        status: status.as_u16(),
        body,
    })
}

/// Point lookup: `username == ?`, limit 1.
fn lookup_query(username: &str) -> serde_json::Value {
    serde_json::json!({
        "structuredQuery": {
            "from": [{ "collectionId": PROFILES_COLLECTION }],
            "where": {
                "fieldFilter": {
                    "field": { "fieldPath": "username" },
                    "op": "EQUAL",
                    "value": { "stringValue": username },
                }
            },
            "limit": 1,
        }
    })
}

/// Full enumeration projected to `username` and `updatedAt`.
fn sitemap_query() -> serde_json::Value {
    serde_json::json!({
        "structuredQuery": {
            "from": [{ "collectionId": PROFILES_COLLECTION }],
            "select": {
                "fields": [
                    { "fieldPath": "username" },
                    { "fieldPath": "updatedAt" },
                ]
            },
        }
    })
}

/// Full enumeration projected to `username` only.
fn username_scan_query() -> serde_json::Value {
    serde_json::json!({
        "structuredQuery": {
            "from": [{ "collectionId": PROFILES_COLLECTION }],
            "select": { "fields": [{ "fieldPath": "username" }] },
        }
    })
}

/// The stored username that normalizes to `username` but differs from it.
fn stored_spelling(documents: Vec<Document>, username: &str) -> Option<String> {
    documents
        .into_iter()
        .filter_map(|doc| doc.text("username"))
        .find(|stored| stored != username && normalize_username(stored) == username)
}

/// One element of a `runQuery` response array.
///
/// Elements without a document only carry progress metadata.
#[derive(Debug, Deserialize)]
struct RunQueryItem {
    #[serde(default)]
    document: Option<Document>,
}

/// A Firestore document.
#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    fields: HashMap<String, Value>,
}

/// A typed Firestore field value.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
enum Value {
    NullValue(()),
    BooleanValue(bool),
    /// 64-bit integers are transmitted as decimal strings.
    IntegerValue(String),
    DoubleValue(f64),
    TimestampValue(String),
    StringValue(String),
    BytesValue(String),
    ReferenceValue(String),
    GeoPointValue(serde_json::Value),
    ArrayValue(serde_json::Value),
    MapValue(serde_json::Value),
}

impl Value {
    /// The value as display text, for string-like and numeric values.
    fn as_text(&self) -> Option<String> {
        match self {
            Self::StringValue(s) | Self::IntegerValue(s) | Self::TimestampValue(s) => {
                Some(s.clone())
            }
            Self::DoubleValue(d) => Some(d.to_string()),
            _ => None,
        }
    }

    fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::TimestampValue(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|ts| ts.with_timezone(&Utc)),
            _ => None,
        }
    }
}

impl Document {
    fn text(&self, field: &str) -> Option<String> {
        self.fields.get(field).and_then(Value::as_text)
    }

    fn timestamp(&self, field: &str) -> Option<DateTime<Utc>> {
        self.fields.get(field).and_then(Value::as_timestamp)
    }

    fn into_profile(self) -> ProfileRecord {
        ProfileRecord {
            username: self.text("username").unwrap_or_default(),
            name: self.text("name"),
            bio: self.text("bio"),
            image_url: self.text("imageUrl"),
            location: self.text("location"),
            birthday: self.text("birthday"),
            social: SocialHandles {
                instagram: self.text("instagram"),
                snapchat: self.text("snapchat"),
                youtube_channel: self.text("youtubeChannel"),
                twitter: self.text("twitter"),
                facebook: self.text("facebook"),
                linkedin: self.text("linkedin"),
                github: self.text("github"),
                telegram: self.text("telegram"),
                whatsapp: self.text("whatsapp"),
            },
            updated_at: self.timestamp("updatedAt"),
        }
    }

    fn into_sitemap_entry(self) -> SitemapEntry {
        SitemapEntry {
            username: self.text("username"),
            updated_at: self.timestamp("updatedAt"),
        }
    }
}

fn decode_run_query(body: &[u8]) -> Result<Vec<Document>, serde_json::Error> {
    let items: Vec<RunQueryItem> = serde_json::from_slice(body)?;
    Ok(items.into_iter().filter_map(|item| item.document).collect())
}
