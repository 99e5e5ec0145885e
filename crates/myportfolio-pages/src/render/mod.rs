//! HTML rendering for profile pages and the landing page.
//!
//! Profile pages are produced by filling the on-disk template with values
//! derived from a [`ProfileView`](myportfolio_core::ProfileView). The landing
//! page is built with maud and needs no template.

pub mod landing;
pub mod profile;

pub use landing::landing_page;
pub use profile::{profile_placeholders, render_profile};
