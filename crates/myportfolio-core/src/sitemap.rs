//! Sitemap protocol XML generation.
//!
//! Produces a `<urlset>` with one `<url>` per public profile. Usernames that
//! collide with application routes are never listed.

use std::fmt::Write as _;

use chrono::{DateTime, NaiveDate, Utc};

use crate::date::iso_date;
use crate::profile::{normalize_username, page_url};
use crate::text::escape_html;

/// Username-shaped path segments that are application routes, not profiles.
pub const RESERVED_USERNAMES: [&str; 3] = ["api", "signup", "sitemap.xml"];

/// Sitemap protocol namespace.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Change frequency advertised for every profile.
pub const CHANGEFREQ: &str = "weekly";

/// Priority advertised for every profile.
pub const PRIORITY: &str = "0.8";

/// The two-field projection of a profile used for the sitemap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitemapEntry {
    pub username: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Whether a (normalized) username is a reserved application route.
pub fn is_reserved(username: &str) -> bool {
    RESERVED_USERNAMES.contains(&username)
}

/// Render the sitemap for `entries` under `base_url`.
///
/// Entries without a username and reserved usernames are skipped. `lastmod` is
/// the UTC date of `updated_at`, or `today` when the entry has no timestamp.
pub fn build_sitemap(base_url: &str, entries: &[SitemapEntry], today: NaiveDate) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(xml, "<urlset xmlns=\"{SITEMAP_NAMESPACE}\">");

    for entry in entries {
        let Some(raw) = entry.username.as_deref() else {
            continue;
        };
        let username = normalize_username(raw);
        if username.is_empty() || is_reserved(&username) {
            continue;
        }

        let loc = escape_html(&page_url(base_url, &username));
        let lastmod = entry
            .updated_at
            .map(|ts| ts.date_naive())
            .unwrap_or(today);

        let _ = write!(
            xml,
            "  <url>\n    <loc>{loc}</loc>\n    <lastmod>{}</lastmod>\n    \
             <changefreq>{CHANGEFREQ}</changefreq>\n    <priority>{PRIORITY}</priority>\n  </url>\n",
            iso_date(lastmod),
        );
    }

    xml.push_str("</urlset>\n");
    xml
}
