//! Profile records as stored, and the display view derived from them.

use chrono::{DateTime, NaiveDate, Utc};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Deserializer};

use crate::date::parse_calendar_date;
use crate::error::Result;
use crate::social::social_urls;
use crate::text::summarize;
use crate::{BIO_MAX_CHARS, DEFAULT_BIO, PLACEHOLDER_IMAGE};

/// Characters left unescaped in a path segment (the `encodeURIComponent` set).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A profile document from the `profiles` collection.
///
/// Field names follow the stored camelCase names. Handles are bare account
/// names, not URLs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    /// Unique lowercase username.
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Calendar date or timestamp, as stored.
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(flatten)]
    pub social: SocialHandles,
    /// Last modification time, used for sitemap freshness.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Optional social account handles.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialHandles {
    #[serde(default, deserialize_with = "string_or_number")]
    pub instagram: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub snapchat: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub youtube_channel: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub twitter: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub facebook: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub linkedin: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub github: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub telegram: Option<String>,
    /// Phone number; often stored as a number.
    #[serde(default, deserialize_with = "string_or_number")]
    pub whatsapp: Option<String>,
}

/// Accept a handle stored either as a string or as a JSON number.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    }))
}

/// Return the value if it holds anything besides whitespace.
pub(crate) fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.trim().is_empty())
}

impl ProfileRecord {
    /// The birthday as a calendar date.
    ///
    /// `None` when no birthday is stored; `Some(Err(_))` when one is stored but
    /// cannot be read as a date.
    pub fn birthday_date(&self) -> Option<Result<NaiveDate>> {
        present(self.birthday.as_ref()).map(|raw| parse_calendar_date("birthday", raw))
    }
}

/// Normalize a candidate username for lookup: trim and lowercase.
pub fn normalize_username(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Percent-encode a single URL path segment like `encodeURIComponent`.
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Build the canonical page URL for a username under `base_url`.
pub fn page_url(base_url: &str, username: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        encode_path_segment(username)
    )
}

/// Display-ready values for one profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    /// Normalized username the page was requested for.
    pub username: String,
    /// Display name, falling back to the username.
    pub name: String,
    /// Summarized bio, falling back to [`DEFAULT_BIO`].
    pub bio: String,
    /// Image URL, falling back to [`PLACEHOLDER_IMAGE`].
    pub image: String,
    pub location: Option<String>,
    /// Birthday, when stored and readable as a date.
    pub birthday: Option<NaiveDate>,
    /// Canonical absolute URL of the page.
    pub page_url: String,
    /// Social profile URLs in platform order.
    pub same_as: Vec<String>,
}

impl ProfileView {
    /// Derive the display view of `record` as served under `base_url`.
    pub fn new(record: &ProfileRecord, username: &str, base_url: &str) -> Self {
        let name = present(record.name.as_ref()).unwrap_or(username).to_string();
        let bio = summarize(
            present(record.bio.as_ref()).unwrap_or(DEFAULT_BIO),
            BIO_MAX_CHARS,
        );
        let image = present(record.image_url.as_ref())
            .unwrap_or(PLACEHOLDER_IMAGE)
            .to_string();

        Self {
            username: username.to_string(),
            name,
            bio,
            image,
            location: present(record.location.as_ref()).map(str::to_string),
            birthday: record.birthday_date().and_then(|date| date.ok()),
            page_url: page_url(base_url, username),
            same_as: social_urls(&record.social),
        }
    }
}
