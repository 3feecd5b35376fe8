use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

pub const DEFAULT_FACEBOOK_BASE_URL: &str = "https://www.facebook.com";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can feed a `HashMap` instead
/// of mutating process state.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("OPSE_ENV", "development"))?;
    let log_level = or_default("OPSE_LOG_LEVEL", "info");
    let strict = parse_bool("OPSE_STRICT", &or_default("OPSE_STRICT", "false"))?;

    let http_timeout_secs = parse_u64("OPSE_HTTP_TIMEOUT_SECS", "30")?;
    let http_user_agent = or_default("OPSE_HTTP_USER_AGENT", DEFAULT_USER_AGENT);
    let http_max_retries = parse_u32("OPSE_HTTP_MAX_RETRIES", "1")?;
    let http_retry_backoff_ms = parse_u64("OPSE_HTTP_RETRY_BACKOFF_MS", "500")?;

    let facebook_base_url = or_default("OPSE_FACEBOOK_BASE_URL", DEFAULT_FACEBOOK_BASE_URL)
        .trim_end_matches('/')
        .to_string();
    if facebook_base_url.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "OPSE_FACEBOOK_BASE_URL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        strict,
        http_timeout_secs,
        http_user_agent,
        http_max_retries,
        http_retry_backoff_ms,
        facebook_base_url,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "OPSE_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean, got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
