//! The people-search lookup: fetch, extract, filter.

use crate::client::{FacebookClient, SearchPage};
use crate::error::FacebookError;
use crate::parse::{extract_candidates, is_login_walled, matches_name, Candidate};

/// Per-call lookup settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupOptions {
    /// Keep only candidates named exactly "first last" or "last first".
    pub strict: bool,
}

/// A completed lookup. An empty `candidates` list is a successful answer;
/// transport failures are reported as `Err` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupResult {
    pub candidates: Vec<Candidate>,
    /// Anchors found in the page before strict filtering.
    pub raw_matches: usize,
    /// The page was the "log in to continue" interstitial rather than results.
    pub login_walled: bool,
}

/// Lists Facebook accounts matching `firstname` and `lastname`.
///
/// # Errors
///
/// Returns the [`FacebookError`] from [`FacebookClient::fetch_search_page`]
/// after logging it: a blank name as a warning, anything else as a fatal
/// error. A login wall or a page without results is not an error.
pub async fn list_accounts(
    client: &FacebookClient,
    firstname: &str,
    lastname: &str,
    options: LookupOptions,
) -> Result<LookupResult, FacebookError> {
    let page = client
        .fetch_search_page(firstname, lastname)
        .await
        .inspect_err(|e| match e {
            FacebookError::EmptyName { field } => {
                tracing::warn!(field = *field, "Facebook lookup skipped: blank name");
            }
            _ => tracing::error!(fatal = true, error = %e, "Facebook request failed"),
        })?;

    Ok(evaluate_page(&page, firstname, lastname, options))
}

/// Turns a fetched page into a [`LookupResult`].
#[must_use]
pub fn evaluate_page(
    page: &SearchPage,
    firstname: &str,
    lastname: &str,
    options: LookupOptions,
) -> LookupResult {
    let matched = extract_candidates(&page.body);
    let raw_matches = matched.len();

    if page.status == 200 && raw_matches == 0 && is_login_walled(&page.body) {
        tracing::warn!(
            url = %page.url,
            "Facebook listing accounts is unavailable due to too many requests"
        );
        return LookupResult {
            candidates: Vec::new(),
            raw_matches,
            login_walled: true,
        };
    }

    let candidates: Vec<Candidate> = if options.strict {
        matched
            .into_iter()
            .filter(|c| matches_name(&c.fullname, firstname, lastname))
            .collect()
    } else {
        matched
    };

    if options.strict {
        let n = candidates.len();
        tracing::debug!(
            "Strict mode activated. Only {n} {} match.",
            pluralize(n, "account", "accounts")
        );
    } else {
        tracing::debug!(
            "Found {raw_matches} {} in source code.",
            pluralize(raw_matches, "match", "matches")
        );
    }

    LookupResult {
        candidates,
        raw_matches,
        login_walled: false,
    }
}

fn pluralize<'a>(n: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if n == 1 {
        singular
    } else {
        plural
    }
}
