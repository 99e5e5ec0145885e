//! Core types and pure rendering helpers for MyPortfolio profile pages.
//!
//! This crate provides:
//! - The profile record model and username normalization
//! - HTML escaping and bio summarization
//! - Social profile URL construction for the supported platforms
//! - The schema.org `Person` structured-data builder
//! - The sitemap XML builder
//! - Shared error types
//!
//! Nothing here performs I/O; the HTTP service lives in `myportfolio-pages`.

pub mod date;
mod error;
pub mod profile;
pub mod schema;
pub mod sitemap;
pub mod social;
pub mod text;

// ═══════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════

/// Product name shown on pages and in default copy.
pub const SITE_NAME: &str = "MyPortfolio";

/// Bio used when a profile has none.
pub const DEFAULT_BIO: &str = "Profile on MyPortfolio";

/// Image used when a profile has no `imageUrl`.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/1200x630.png?text=MyPortfolio";

/// Maximum number of characters of bio shown on a page, ellipsis included.
pub const BIO_MAX_CHARS: usize = 160;

/// `Cache-Control` value for rendered profiles and the sitemap.
pub const PUBLIC_CACHE_CONTROL: &str = "public, max-age=300, s-maxage=600";

pub use error::{Error, Result};
pub use profile::{
    ProfileRecord, ProfileView, SocialHandles, encode_path_segment, normalize_username, page_url,
};
pub use schema::PersonSchema;
pub use sitemap::{RESERVED_USERNAMES, SitemapEntry, build_sitemap, is_reserved};
pub use social::{SocialPlatform, social_urls};
pub use text::{escape_html, summarize};
