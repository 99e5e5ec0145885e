//! Profile page placeholder values.

use myportfolio_core::date::human_date;
use myportfolio_core::{PersonSchema, ProfileView, escape_html};

use crate::template::{Placeholders, substitute, tokens};

/// Compute the value of every template token for `view`.
///
/// Display text is HTML-escaped here; the page URL is inserted raw and the
/// structured data is already safe for an inline `<script>` block.
pub fn profile_placeholders(view: &ProfileView) -> myportfolio_core::Result<Placeholders> {
    let json_ld = PersonSchema::from_view(view).to_script_json()?;

    let location_html = view
        .location
        .as_deref()
        .map(|location| meta_line("Location", location))
        .unwrap_or_default();
    let birthday_html = view
        .birthday
        .map(|date| meta_line("Birthday", &human_date(date)))
        .unwrap_or_default();

    let mut values = Placeholders::new();
    values
        .set(tokens::NAME, escape_html(&view.name))
        .set(tokens::BIO, escape_html(&view.bio))
        .set(tokens::IMAGE, escape_html(&view.image))
        .set(tokens::PAGE_URL, view.page_url.as_str())
        .set(tokens::LOCATION_HTML, location_html)
        .set(tokens::BIRTHDAY_HTML, birthday_html)
        .set(tokens::JSON_LD, json_ld);
    Ok(values)
}

/// Fill `template` with the values for `view`.
pub fn render_profile(template: &str, view: &ProfileView) -> myportfolio_core::Result<String> {
    Ok(substitute(template, &profile_placeholders(view)?))
}

fn meta_line(label: &str, value: &str) -> String {
    format!(
        r#"<p class="meta"><strong>{label}:</strong> {}</p>"#,
        escape_html(value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use myportfolio_core::ProfileRecord;

    fn view(json: serde_json::Value) -> ProfileView {
        let record: ProfileRecord = serde_json::from_value(json).unwrap();
        ProfileView::new(&record, "alice", "https://example.com")
    }

    #[test]
    fn display_values_are_escaped() {
        let v = view(serde_json::json!({
            "username": "alice",
            "name": "<script>alert(1)</script>",
            "bio": "Tom & \"Jerry\"",
        }));
        let values = profile_placeholders(&v).unwrap();
        assert_eq!(
            values.get(tokens::NAME),
            Some("&lt;script&gt;alert(1)&lt;/script&gt;")
        );
        assert_eq!(values.get(tokens::BIO), Some("Tom &amp; &quot;Jerry&quot;"));
        assert_eq!(values.get(tokens::PAGE_URL), Some("https://example.com/alice"));
    }

    #[test]
    fn optional_blocks_empty_when_absent() {
        let values = profile_placeholders(&view(serde_json::json!({"username": "alice"}))).unwrap();
        assert_eq!(values.get(tokens::LOCATION_HTML), Some(""));
        assert_eq!(values.get(tokens::BIRTHDAY_HTML), Some(""));
        assert_eq!(values.get(tokens::NAME), Some("alice"));
        assert_eq!(
            values.get(tokens::IMAGE),
            Some(myportfolio_core::PLACEHOLDER_IMAGE)
        );
    }

    #[test]
    fn location_and_birthday_blocks() {
        let v = view(serde_json::json!({
            "username": "alice",
            "location": "Paris <FR>",
            "birthday": "1990-01-15",
        }));
        let values = profile_placeholders(&v).unwrap();
        assert_eq!(
            values.get(tokens::LOCATION_HTML),
            Some(r#"<p class="meta"><strong>Location:</strong> Paris &lt;FR&gt;</p>"#)
        );
        assert_eq!(
            values.get(tokens::BIRTHDAY_HTML),
            Some(r#"<p class="meta"><strong>Birthday:</strong> Mon Jan 15 1990</p>"#)
        );
    }

    #[test]
    fn unparseable_birthday_omits_block() {
        let v = view(serde_json::json!({"username": "alice", "birthday": "someday"}));
        let values = profile_placeholders(&v).unwrap();
        assert_eq!(values.get(tokens::BIRTHDAY_HTML), Some(""));
        assert!(!values.get(tokens::JSON_LD).unwrap().contains("birthDate"));
    }

    #[test]
    fn rendered_page_has_no_raw_script_from_data() {
        let v = view(serde_json::json!({
            "username": "alice",
            "name": "</script><script>alert(1)</script>",
        }));
        let html = render_profile(
            "<h1>{{NAME}}</h1><script type=\"application/ld+json\">{{JSON_LD}}</script>",
            &v,
        )
        .unwrap();
        assert_eq!(html.matches("<script").count(), 1);
        assert!(!html.contains("alert(1)</script>"));
    }
}
