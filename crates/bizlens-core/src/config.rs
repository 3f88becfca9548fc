use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// demo-ready config. Tests drive this through a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            other => Err(invalid(var, format!("expected a boolean, got '{other}'"))),
        }
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let env = parse_environment(&or_default("BIZLENS_ENV", "development"))?;
    let log_level = or_default("BIZLENS_LOG_LEVEL", "info");
    let locations_path = PathBuf::from(or_default(
        "BIZLENS_LOCATIONS_PATH",
        "./config/locations.yaml",
    ));
    let export_dir = PathBuf::from(or_default("BIZLENS_EXPORT_DIR", "./exports"));
    let demo_mode = parse_bool("BIZLENS_DEMO_MODE", "false")?;
    let demo_seed = parse_u64("BIZLENS_DEMO_SEED", "42")?;
    let account_id = optional("BIZLENS_ACCOUNT_ID");
    let access_token = optional("BIZLENS_ACCESS_TOKEN");
    let api_base_url = or_default("BIZLENS_API_BASE_URL", "https://mybusiness.googleapis.com/");
    let performance_base_url = or_default(
        "BIZLENS_PERFORMANCE_BASE_URL",
        "https://businessprofileperformance.googleapis.com/",
    );
    let request_timeout_secs = parse_u64("BIZLENS_REQUEST_TIMEOUT_SECS", "30")?;
    let default_range_days = parse_u32("BIZLENS_DEFAULT_RANGE_DAYS", "30")?;

    if default_range_days == 0 {
        return Err(invalid(
            "BIZLENS_DEFAULT_RANGE_DAYS",
            "must be at least 1".to_string(),
        ));
    }

    Ok(AppConfig {
        env,
        log_level,
        locations_path,
        export_dir,
        demo_mode,
        demo_seed,
        account_id,
        access_token,
        api_base_url,
        performance_base_url,
        request_timeout_secs,
        default_range_days,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "BIZLENS_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
