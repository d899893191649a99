use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
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
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// `HashMap` lookup instead of `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        match lookup(var) {
            Ok(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(ConfigError::MissingEnvVar(var.to_string())),
        }
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let store_url = require("QUICKVIEW_STORE_URL")?;
    if !(store_url.starts_with("http://") || store_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "QUICKVIEW_STORE_URL".to_string(),
            reason: format!("\"{store_url}\" must start with http:// or https://"),
        });
    }
    let bonus_product_handle = require("QUICKVIEW_BONUS_PRODUCT_HANDLE")?;

    let env = parse_environment(&or_default("QUICKVIEW_ENV", "development"));
    let log_level = or_default("QUICKVIEW_LOG_LEVEL", "info");

    let request_timeout_secs = parse_u64("QUICKVIEW_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("QUICKVIEW_USER_AGENT", "quickview/0.1 (storefront-widget)");
    let success_label_ms = parse_u64("QUICKVIEW_SUCCESS_LABEL_MS", "2000")?;
    let auto_close_ms = parse_u64("QUICKVIEW_AUTO_CLOSE_MS", "1500")?;
    let currency_symbol = or_default("QUICKVIEW_CURRENCY_SYMBOL", "$");

    Ok(AppConfig {
        env,
        log_level,
        store_url,
        bonus_product_handle: bonus_product_handle.trim().to_string(),
        request_timeout_secs,
        user_agent,
        success_label_ms,
        auto_close_ms,
        currency_symbol,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
