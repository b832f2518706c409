use crate::app_config::{AppConfig, Environment};
use crate::{ConfigError, ScoringWeights};

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
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_count = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        let value = raw
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(value)
    };

    let parse_weight = |var: &str, default: f64| -> Result<f64, ConfigError> {
        let Ok(raw) = lookup(var) else {
            return Ok(default);
        };
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
        if !value.is_finite() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be a finite number".to_string(),
            });
        }
        Ok(value)
    };

    let env = parse_environment(&or_default("TITLEFIT_ENV", "development"))?;
    let log_level = or_default("TITLEFIT_LOG_LEVEL", "info");
    let dataset_path = PathBuf::from(or_default("TITLEFIT_DATASET_PATH", "./data/training.csv"));
    let profiles_path = PathBuf::from(or_default(
        "TITLEFIT_PROFILES_PATH",
        "./artifacts/channel_profiles.json",
    ));
    let default_num_titles = parse_count("TITLEFIT_DEFAULT_NUM_TITLES", "5")?;
    let max_candidates = parse_count("TITLEFIT_MAX_CANDIDATES", "10")?;

    let defaults = ScoringWeights::default();
    let weights = ScoringWeights {
        length_penalty: parse_weight("TITLEFIT_WEIGHT_LENGTH_PENALTY", defaults.length_penalty)?,
        digit_bonus: parse_weight("TITLEFIT_WEIGHT_DIGIT_BONUS", defaults.digit_bonus)?,
        question_penalty: parse_weight(
            "TITLEFIT_WEIGHT_QUESTION_PENALTY",
            defaults.question_penalty,
        )?,
        exclamation_penalty: parse_weight(
            "TITLEFIT_WEIGHT_EXCLAMATION_PENALTY",
            defaults.exclamation_penalty,
        )?,
        top_keyword_bonus: parse_weight(
            "TITLEFIT_WEIGHT_TOP_KEYWORD_BONUS",
            defaults.top_keyword_bonus,
        )?,
        low_keyword_penalty: parse_weight(
            "TITLEFIT_WEIGHT_LOW_KEYWORD_PENALTY",
            defaults.low_keyword_penalty,
        )?,
    };

    Ok(AppConfig {
        env,
        log_level,
        dataset_path,
        profiles_path,
        default_num_titles,
        max_candidates,
        weights,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TITLEFIT_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
