//! schema.org `Person` structured data (JSON-LD).

use serde::Serialize;

use crate::date::iso_date;
use crate::error::Result;
use crate::profile::ProfileView;

/// A schema.org `Person` describing one profile page.
///
/// Optional keys are omitted entirely when their source field is absent.
#[derive(Debug, Clone, Serialize)]
pub struct PersonSchema<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    description: &'a str,
    url: &'a str,
    image: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<PostalAddress<'a>>,
    #[serde(rename = "sameAs", skip_serializing_if = "no_links")]
    same_as: &'a [String],
    #[serde(rename = "birthDate", skip_serializing_if = "Option::is_none")]
    birth_date: Option<String>,
}

fn no_links(links: &&[String]) -> bool {
    links.is_empty()
}

/// A `PostalAddress` carrying only the locality.
#[derive(Debug, Clone, Serialize)]
struct PostalAddress<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "addressLocality")]
    address_locality: &'a str,
}

impl<'a> PersonSchema<'a> {
    /// Build the structured data for a profile view.
    pub fn from_view(view: &'a ProfileView) -> Self {
        Self {
            context: "https://schema.org",
            kind: "Person",
            name: &view.name,
            description: &view.bio,
            url: &view.page_url,
            image: &view.image,
            address: view.location.as_deref().map(|locality| PostalAddress {
                kind: "PostalAddress",
                address_locality: locality,
            }),
            same_as: &view.same_as,
            birth_date: view.birthday.map(iso_date),
        }
    }

    /// Serialize to compact JSON that is safe inside a `<script>` element.
    ///
    /// `<`, `>` and `&` are written as `\u` escapes, so the output can never
    /// close the surrounding script element and is still the same JSON value.
    pub fn to_script_json(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(json
            .replace('<', "\\u003c")
            .replace('>', "\\u003e")
            .replace('&', "\\u0026"))
    }
}
