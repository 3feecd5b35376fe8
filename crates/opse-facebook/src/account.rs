use serde::Serialize;
use serde_json::Value;

use opse_core::Account;

use crate::parse::Candidate;

/// A Facebook profile found through people search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacebookAccount {
    username: String,
    url: String,
    image_url: String,
}

impl FacebookAccount {
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        url: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            url: url.into(),
            image_url: image_url.into(),
        }
    }

    /// Avatar shown next to the search result.
    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }
}

impl From<Candidate> for FacebookAccount {
    fn from(candidate: Candidate) -> Self {
        Self::new(candidate.fullname, candidate.url, candidate.image)
    }
}

impl Account for FacebookAccount {
    fn service(&self) -> &'static str {
        "facebook"
    }

    fn username(&self) -> &str {
        &self.username
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn to_json(&self) -> Value {
        let mut value = serde_json::to_value(self).unwrap_or(Value::Null);
        if let Value::Object(map) = &mut value {
            map.insert("service".to_owned(), Value::from(self.service()));
        }
        value
    }
}
