use crate::applications::EvaluationConfig;
use std::env;
use std::fmt;
use std::str::FromStr;

/// Distinguishes runtime behavior for different stages of the embedding service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the evaluator.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub evaluation: EvaluationConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let decision_log_level = env::var("APP_DECISION_LOG_LEVEL")
            .ok()
            .filter(|level| !level.trim().is_empty());

        let defaults = EvaluationConfig::default();
        let evaluation = EvaluationConfig {
            high_income_threshold: read_number(
                "CARD_HIGH_INCOME_THRESHOLD",
                defaults.high_income_threshold,
            )?,
            low_income_threshold: read_number(
                "CARD_LOW_INCOME_THRESHOLD",
                defaults.low_income_threshold,
            )?,
            auto_referral_max_age: read_number(
                "CARD_AUTO_REFERRAL_MAX_AGE",
                defaults.auto_referral_max_age,
            )?,
            detailed_lookup_min_age: read_number(
                "CARD_DETAILED_LOOKUP_MIN_AGE",
                defaults.detailed_lookup_min_age,
            )?,
        };

        if evaluation.low_income_threshold >= evaluation.high_income_threshold {
            return Err(ConfigError::InvertedIncomeBands {
                low: evaluation.low_income_threshold,
                high: evaluation.high_income_threshold,
            });
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig {
                log_level,
                decision_log_level,
            },
            evaluation,
        })
    }
}

fn read_number<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    /// Level for evaluator decision events, overriding `log_level` for that target.
    pub decision_log_level: Option<String>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
    InvertedIncomeBands { low: i64, high: i64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be an integer, got '{value}'")
            }
            ConfigError::InvertedIncomeBands { low, high } => write!(
                f,
                "low income threshold {low} must be below high income threshold {high}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_DECISION_LOG_LEVEL");
        env::remove_var("CARD_HIGH_INCOME_THRESHOLD");
        env::remove_var("CARD_LOW_INCOME_THRESHOLD");
        env::remove_var("CARD_AUTO_REFERRAL_MAX_AGE");
        env::remove_var("CARD_DETAILED_LOOKUP_MIN_AGE");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.telemetry.decision_log_level, None);
        assert_eq!(config.evaluation, EvaluationConfig::default());
        assert_eq!(config.evaluation.high_income_threshold, 100_000);
        assert_eq!(config.evaluation.low_income_threshold, 20_000);
        assert_eq!(config.evaluation.auto_referral_max_age, 20);
    }

    #[test]
    fn overrides_thresholds_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "CI");
        env::set_var("CARD_HIGH_INCOME_THRESHOLD", " 150000 ");
        env::set_var("CARD_DETAILED_LOOKUP_MIN_AGE", "45");
        env::set_var("APP_DECISION_LOG_LEVEL", "debug");
        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.telemetry.decision_log_level.as_deref(), Some("debug"));

        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.evaluation.high_income_threshold, 150_000);
        assert_eq!(config.evaluation.detailed_lookup_min_age, 45);
        assert_eq!(config.evaluation.low_income_threshold, 20_000);
    }

    #[test]
    fn rejects_non_numeric_threshold() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("CARD_AUTO_REFERRAL_MAX_AGE", "twenty");
        let result = AppConfig::load();
        reset_env();

        match result {
            Err(ConfigError::InvalidNumber { key, value }) => {
                assert_eq!(key, "CARD_AUTO_REFERRAL_MAX_AGE");
                assert_eq!(value, "twenty");
            }
            other => panic!("expected invalid number, got {other:?}"),
        }
    }

    #[test]
    fn rejects_inverted_income_bands() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("CARD_LOW_INCOME_THRESHOLD", "120000");
        let result = AppConfig::load();
        reset_env();

        assert!(matches!(
            result,
            Err(ConfigError::InvertedIncomeBands {
                low: 120_000,
                high: 100_000
            })
        ));
    }
}
