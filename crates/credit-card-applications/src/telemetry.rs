use crate::config::TelemetryConfig;
use tracing_subscriber::filter::{Directive, ParseError};
use tracing_subscriber::EnvFilter;

/// Target of the rule and lookup-mode events emitted during evaluation.
pub const DECISION_TARGET: &str = "credit_card_applications::applications";

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{value}'")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("invalid decision log level '{value}'")]
    DecisionLevel {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("subscriber already installed: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Filter from `RUST_LOG` (or the configured level), with decision events raised or
/// lowered independently when a decision level is configured.
pub fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::EnvFilter {
                value: config.log_level.clone(),
                source,
            })?
        }
    };

    match &config.decision_log_level {
        Some(level) => Ok(filter.add_directive(decision_directive(level)?)),
        None => Ok(filter),
    }
}

fn decision_directive(level: &str) -> Result<Directive, TelemetryError> {
    format!("{DECISION_TARGET}={}", level.trim())
        .parse::<Directive>()
        .map_err(|source| TelemetryError::DecisionLevel {
            value: level.to_string(),
            source,
        })
}

pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = env_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(config.decision_log_level.is_some())
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(decision_log_level: Option<&str>) -> TelemetryConfig {
        TelemetryConfig {
            log_level: "info".to_string(),
            decision_log_level: decision_log_level.map(str::to_string),
        }
    }

    #[test]
    fn decision_directive_targets_the_evaluator() {
        let directive = decision_directive(" debug ").expect("level parses");
        assert_eq!(
            directive.to_string(),
            "credit_card_applications::applications=debug"
        );
    }

    #[test]
    fn rejects_unknown_decision_level() {
        match env_filter(&config(Some("chatty"))) {
            Err(TelemetryError::DecisionLevel { value, .. }) => assert_eq!(value, "chatty"),
            other => panic!("expected decision level error, got {other:?}"),
        }
    }

    #[test]
    fn builds_filter_without_decision_level() {
        assert!(env_filter(&config(None)).is_ok());
    }
}
