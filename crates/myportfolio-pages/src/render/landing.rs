//! Landing page, served when a request names no profile.

use maud::{DOCTYPE, Markup, PreEscaped, html};
use myportfolio_core::SITE_NAME;

/// Render the landing page.
///
/// The output is fixed; it does not depend on the request or any stored data.
pub fn landing_page() -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (SITE_NAME) " | One link for everything you are" }
                meta name="description" content="Create a single page for your bio, photo and social profiles, and share it anywhere with one link.";
                meta property="og:title" content=(SITE_NAME);
                meta property="og:description" content="One link for your bio, photo and social profiles.";
                meta property="og:type" content="website";
                style { (PreEscaped(LANDING_CSS)) }
            }
            body {
                main class="landing" {
                    h1 class="landing-title" { (SITE_NAME) }
                    p class="landing-tagline" {
                        "One link for everything you are."
                    }

                    ul class="landing-features" {
                        li { "Your name, photo and bio on a clean, fast page" }
                        li { "Instagram, YouTube, GitHub, LinkedIn and more in one place" }
                        li { "Previews that look right when you share your link" }
                    }

                    div class="landing-example" {
                        span class="landing-label" { "Your page" }
                        code { "myportfolio/" span class="landing-highlight" { "yourname" } }
                    }

                    a class="landing-cta" href="/signup" { "Create your page" }
                }
                footer class="footer" {
                    (SITE_NAME) " pages are public and free to share."
                }
            }
        }
    }
}

const LANDING_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fafafa;--fg:#111;--fg2:#555;--fg3:#999;--accent:#2563eb;--border:rgba(37,99,235,.18);--mono:"SF Mono",SFMono-Regular,ui-monospace,Menlo,monospace}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
.landing{display:flex;flex-direction:column;align-items:center;justify-content:center;min-height:70vh;text-align:center;max-width:520px;width:100%;flex:1}
.landing-title{font-size:3.25rem;font-weight:800;letter-spacing:-.04em}
.landing-tagline{font-size:1.2rem;color:var(--fg2);margin-top:.5rem}
.landing-features{list-style:none;margin-top:2rem;display:flex;flex-direction:column;gap:.5rem;color:var(--fg2)}
.landing-example{margin-top:2rem;display:flex;align-items:center;gap:.75rem;padding:.5rem .9rem;border-radius:6px;border:1px solid var(--border)}
.landing-label{font-size:.75rem;font-weight:600;color:var(--fg3);text-transform:uppercase;letter-spacing:.05em}
.landing-example code{font-family:var(--mono);font-size:.9rem;color:var(--fg2)}
.landing-highlight{color:var(--accent);font-weight:600}
.landing-cta{margin-top:2rem;padding:.7rem 1.4rem;border-radius:8px;background:var(--accent);color:#fff;font-weight:600;text-decoration:none}
.landing-cta:hover{opacity:.9}
.footer{margin-top:2rem;font-size:.8rem;color:var(--fg3)}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_is_deterministic() {
        assert_eq!(landing_page().into_string(), landing_page().into_string());
    }

    #[test]
    fn landing_is_a_full_document() {
        let html = landing_page().into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>MyPortfolio | One link for everything you are</title>"));
        assert!(html.contains("<style>"));
    }
}
