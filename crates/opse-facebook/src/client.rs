//! HTTP client for Facebook's public people-search page.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;

use opse_core::AppConfig;

use crate::error::FacebookError;
use crate::retry::retry_with_backoff;

/// One fetched search page. Any non-5xx status is returned as-is so the
/// caller can tell an ordinary miss from a login wall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    pub url: String,
    pub status: u16,
    pub body: String,
}

/// HTTP client for `https://www.facebook.com/public/<first>%20<last>`.
///
/// Timeouts, connect failures, and 5xx responses are retried with
/// exponential back-off up to `max_retries` additional attempts.
pub struct FacebookClient {
    client: Client,
    base_url: String,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay for back-off: `backoff_base_ms * 2^(n-1)` before the n-th retry.
    backoff_base_ms: u64,
}

impl FacebookClient {
    /// Creates a client with configured timeout, `User-Agent`, and retry policy.
    ///
    /// # Errors
    ///
    /// - [`FacebookError::InvalidBaseUrl`] if `base_url` is not an http(s) URL.
    /// - [`FacebookError::Http`] if the underlying `reqwest::Client` cannot be built.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, FacebookError> {
        let base_url = validate_base_url(base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url,
            max_retries,
            backoff_base_ms,
        })
    }

    /// Builds a client from the `OPSE_HTTP_*` and `OPSE_FACEBOOK_BASE_URL` settings.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, FacebookError> {
        Self::new(
            &config.facebook_base_url,
            config.http_timeout_secs,
            &config.http_user_agent,
            config.http_max_retries,
            config.http_retry_backoff_ms,
        )
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the people-search URL, percent-encoding each name.
    ///
    /// The two names are joined by a literal `%20` inside a single path
    /// segment, matching the layout the search page expects.
    ///
    /// # Errors
    ///
    /// Returns [`FacebookError::EmptyName`] if either name is blank.
    pub fn search_url(&self, firstname: &str, lastname: &str) -> Result<String, FacebookError> {
        let firstname = non_blank(firstname, "firstname")?;
        let lastname = non_blank(lastname, "lastname")?;
        Ok(format!(
            "{}/public/{}%20{}",
            self.base_url,
            utf8_percent_encode(firstname, NON_ALPHANUMERIC),
            utf8_percent_encode(lastname, NON_ALPHANUMERIC),
        ))
    }

    /// Fetches the search page for a name pair.
    ///
    /// # Errors
    ///
    /// - [`FacebookError::EmptyName`] if either name is blank (no request made).
    /// - [`FacebookError::Http`] on network or TLS failure after all retries.
    /// - [`FacebookError::UnexpectedStatus`] on a 5xx after all retries.
    pub async fn fetch_search_page(
        &self,
        firstname: &str,
        lastname: &str,
    ) -> Result<SearchPage, FacebookError> {
        let url = self.search_url(firstname, lastname)?;

        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            let url = url.clone();
            async move {
                let response = self
                    .client
                    .get(&url)
                    .header(
                        reqwest::header::ACCEPT,
                        "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
                    )
                    .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
                    .send()
                    .await?;
                let status = response.status();

                if status.is_server_error() {
                    return Err(FacebookError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                let bytes = response.bytes().await?;
                let body = String::from_utf8_lossy(&bytes).into_owned();
                tracing::debug!(
                    status = status.as_u16(),
                    bytes = bytes.len(),
                    "Facebook request succeeded"
                );

                Ok(SearchPage {
                    url,
                    status: status.as_u16(),
                    body,
                })
            }
        })
        .await
    }
}

fn validate_base_url(base_url: &str) -> Result<String, FacebookError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let parsed = reqwest::Url::parse(trimmed).map_err(|e| FacebookError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(FacebookError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: format!("unsupported scheme \"{}\"", parsed.scheme()),
        });
    }
    Ok(trimmed.to_owned())
}

fn non_blank<'a>(value: &'a str, field: &'static str) -> Result<&'a str, FacebookError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FacebookError::EmptyName { field });
    }
    Ok(trimmed)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
