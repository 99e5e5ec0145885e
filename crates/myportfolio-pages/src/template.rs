//! Profile page template loading and placeholder substitution.
//!
//! The template is plain HTML containing `{{TOKEN}}` placeholders. Every
//! occurrence of a known token is replaced in a single pass over the template,
//! so text inserted for one token is never scanned for further tokens.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Matches `{{TOKEN}}` placeholders.
static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Z][A-Z0-9_]*)\}\}").expect("placeholder regex should compile")
});

/// Placeholder tokens understood by the profile template.
pub mod tokens {
    pub const NAME: &str = "NAME";
    pub const BIO: &str = "BIO";
    pub const IMAGE: &str = "IMAGE";
    pub const PAGE_URL: &str = "PAGE_URL";
    pub const LOCATION_HTML: &str = "LOCATION_HTML";
    pub const BIRTHDAY_HTML: &str = "BIRTHDAY_HTML";
    pub const JSON_LD: &str = "JSON_LD";
}

/// Values to substitute, keyed by token name (without braces).
#[derive(Debug, Clone, Default)]
pub struct Placeholders {
    values: HashMap<&'static str, String>,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value of `token`, replacing any previous value.
    pub fn set(&mut self, token: &'static str, value: impl Into<String>) -> &mut Self {
        self.values.insert(token, value.into());
        self
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.values.get(token).map(String::as_str)
    }
}

/// Substitute every known placeholder in `template`.
///
/// Unknown tokens are left as they are.
pub fn substitute(template: &str, values: &Placeholders) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures<'_>| match values.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Reads the profile template from disk.
///
/// The file is read on every render so edits are picked up without a restart.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    path: PathBuf,
}

impl TemplateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the template.
    pub async fn load(&self) -> std::io::Result<String> {
        tokio::fs::read_to_string(&self.path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn values(pairs: &[(&'static str, &str)]) -> Placeholders {
        let mut p = Placeholders::new();
        for (k, v) in pairs {
            p.set(k, *v);
        }
        p
    }

    #[test]
    fn replaces_every_occurrence() {
        let out = substitute(
            "<title>{{NAME}}</title><h1>{{NAME}}</h1>",
            &values(&[(tokens::NAME, "Alice")]),
        );
        assert_eq!(out, "<title>Alice</title><h1>Alice</h1>");
    }

    #[test]
    fn inserted_values_are_not_rescanned() {
        let out = substitute(
            "<p>{{BIO}}</p><script>{{JSON_LD}}</script>",
            &values(&[(tokens::BIO, "I like {{JSON_LD}}"), (tokens::JSON_LD, "{}")]),
        );
        assert_eq!(out, "<p>I like {{JSON_LD}}</p><script>{}</script>");
    }

    #[test]
    fn unknown_tokens_untouched() {
        let out = substitute("{{NAME}} {{UNKNOWN}} {{ lower }}", &values(&[(tokens::NAME, "x")]));
        assert_eq!(out, "x {{UNKNOWN}} {{ lower }}");
    }

    #[test]
    fn empty_value_removes_token() {
        let out = substitute(
            "<div>{{LOCATION_HTML}}</div>",
            &values(&[(tokens::LOCATION_HTML, "")]),
        );
        assert_eq!(out, "<div></div>");
    }

    #[test]
    fn replacement_text_is_literal() {
        // `$` has meaning in regex replacement strings; it must pass through.
        let out = substitute("{{NAME}}", &values(&[(tokens::NAME, "$1 ${NAME} $$")]));
        assert_eq!(out, "$1 ${NAME} $$");
    }

    #[tokio::test]
    async fn loads_template_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<h1>{{{{NAME}}}}</h1>").unwrap();

        let store = TemplateStore::new(file.path());
        assert_eq!(store.load().await.unwrap(), "<h1>{{NAME}}</h1>");
    }

    #[tokio::test]
    async fn missing_template_is_an_error() {
        let store = TemplateStore::new("/nonexistent/profile.html");
        assert!(store.load().await.is_err());
    }
}
