#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime settings shared by the CLI and every registered tool.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Only keep accounts whose display name is exactly the queried name.
    pub strict: bool,
    pub http_timeout_secs: u64,
    pub http_user_agent: String,
    /// Additional attempts after the first failed request.
    pub http_max_retries: u32,
    pub http_retry_backoff_ms: u64,
    pub facebook_base_url: String,
}
