//! Extraction of profile candidates from the people-search HTML.
//!
//! The page is not parsed as a DOM. A single pattern keyed to the legacy
//! result-card markup pulls the display name, profile URL, and avatar URL out
//! of each result anchor through named capture groups. The markup is
//! undocumented and may change without notice.

use std::sync::LazyLock;

use regex::Regex;

/// Characters accepted in a display name (mirrors the `title`/`alt` attributes).
const NAME_CLASS: &str = r"[a-zA-ZÀ-ÿ0-9_ ,]+";

static ACCOUNT_ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        concat!(
            r#"<a title="(?P<fullname>{name})" class="_2ial" aria-label="{name}" "#,
            r#"aria-hidden="true" tabindex="-1" role="presentation" "#,
            r#"href="(?P<url>https?://[a-zA-Z0-9.-]+\.facebook\.com/[a-z]+\.[a-z]+\.?[0-9]*)">"#,
            r#"<img class="_1glk _6phc img" "#,
            r#"src="(?P<image>https?://[a-zA-Z0-9.-]+\.[a-zA-Z]{{2,4}}/[^"\s]+\.jpg\?[^"\s]+)" "#,
            r#"width="72" height="72" alt="{name}" /></a>"#,
        ),
        name = NAME_CLASS,
    );
    Regex::new(&pattern).expect("valid account anchor regex")
});

/// Phrases shown instead of results when the search is login-walled.
const LOGIN_WALL_PHRASES: [&str; 4] = [
    "Vous devez vous connecter pour continuer.",
    "You must log in to continue.",
    "Debes iniciar sesión para continuar.",
    "Melde dich an, um fortzufahren.",
];

/// One search hit, straight from the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub fullname: String,
    pub url: String,
    pub image: String,
}

/// Extracts every well-formed result anchor from `html`, in document order.
///
/// A hit missing any of the three fields is skipped and logged; it never
/// aborts the rest of the page.
#[must_use]
pub fn extract_candidates(html: &str) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for caps in ACCOUNT_ANCHOR_RE.captures_iter(html) {
        let field = |name: &str| {
            caps.name(name)
                .map(|m| m.as_str())
                .filter(|s| !s.trim().is_empty())
        };
        let (Some(fullname), Some(url), Some(image)) =
            (field("fullname"), field("url"), field("image"))
        else {
            tracing::debug!(
                fragment = caps.get(0).map_or("", |m| m.as_str()),
                "skipping malformed search result anchor"
            );
            continue;
        };

        candidates.push(Candidate {
            fullname: fullname.to_owned(),
            url: url.to_owned(),
            image: image.to_owned(),
        });
    }

    candidates
}

/// Whether `html` is the "log in to continue" interstitial.
#[must_use]
pub fn is_login_walled(html: &str) -> bool {
    LOGIN_WALL_PHRASES.iter().any(|phrase| html.contains(phrase))
}

/// Case-insensitive match of `fullname` against "first last" or "last first".
#[must_use]
pub fn matches_name(fullname: &str, firstname: &str, lastname: &str) -> bool {
    let fullname = fullname.trim().to_lowercase();
    let firstname = firstname.trim();
    let lastname = lastname.trim();
    fullname == format!("{firstname} {lastname}").to_lowercase()
        || fullname == format!("{lastname} {firstname}").to_lowercase()
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
