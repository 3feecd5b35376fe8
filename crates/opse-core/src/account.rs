use std::fmt::Debug;

use serde_json::{json, Value};

/// An account discovered on an external service.
///
/// Implementations are immutable value objects; profiles share them behind
/// an `Arc`.
pub trait Account: Debug + Send + Sync {
    /// Short lowercase service identifier, e.g. `"facebook"`.
    fn service(&self) -> &'static str;

    fn username(&self) -> &str;

    fn url(&self) -> &str;

    /// JSON representation used by output formatters.
    fn to_json(&self) -> Value {
        json!({
            "service": self.service(),
            "username": self.username(),
            "url": self.url(),
        })
    }
}
