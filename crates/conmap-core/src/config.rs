use crate::app_config::AppConfig;
use crate::geo::CircleStyle;
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

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the real environment so it
/// can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
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

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_base_url = require("CONMAP_API_BASE_URL")?;
    let api_token = require("CONMAP_API_TOKEN")?;

    let log_level = or_default("CONMAP_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("CONMAP_REQUEST_TIMEOUT_SECS", "30")?;
    let cities_path = PathBuf::from(or_default("CONMAP_CITIES_PATH", "./config/cities.yaml"));

    let cell_size_deg = parse_f64("CONMAP_CELL_SIZE_DEG", "0.009")?;
    // Cell keys carry 6 decimal places; finer cells would collide on keys.
    if !(cell_size_deg >= 1e-6) {
        return Err(ConfigError::InvalidEnvVar {
            var: "CONMAP_CELL_SIZE_DEG".to_string(),
            reason: "cell size must be at least 1e-6 degrees".to_string(),
        });
    }

    let food_style = CircleStyle {
        color: or_default("CONMAP_FOOD_COLOR", "#FF0000"),
        radius_m: parse_u32("CONMAP_FOOD_RADIUS_M", "100")?,
    };
    let lifestyle_style = CircleStyle {
        color: or_default("CONMAP_LIFESTYLE_COLOR", "#FFFF00"),
        radius_m: parse_u32("CONMAP_LIFESTYLE_RADIUS_M", "200")?,
    };

    Ok(AppConfig {
        api_base_url,
        api_token,
        log_level,
        request_timeout_secs,
        cell_size_deg,
        cities_path,
        food_style,
        lifestyle_style,
    })
}
