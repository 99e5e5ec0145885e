//! MyPortfolio Pages - server-rendered public profile pages.
//!
//! This crate serves the public "link-in-bio" page of every MyPortfolio user
//! as a complete HTML document, so that search engines and link-preview
//! crawlers see the profile without running any JavaScript.
//!
//! # Architecture
//!
//! - **Store**: Reads profile records from Firestore (REST) or a JSON fixture
//! - **Render**: Fills the profile HTML template with escaped values and
//!   schema.org structured data; the landing page is built with maud
//! - **Cache**: No in-process cache; `Cache-Control` headers let a CDN cache
//!   pages and the sitemap
//!
//! # URL Pattern
//!
//! ```text
//! GET /{username}
//! GET /?username={username}
//! GET /api/profile?username={username}
//! GET /sitemap.xml
//! ```
//!
//! # Security
//!
//! - Every stored string is HTML-escaped before it reaches the page
//! - Structured data is emitted with `<`, `>` and `&` as JSON unicode escapes
//! - Internal errors reach the client only as a generic message

pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;
pub mod store;
pub mod template;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
