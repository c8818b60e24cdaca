pub mod applications;
pub mod config;
pub mod error;
pub mod telemetry;

use std::sync::Arc;

use applications::{
    CreditCardApplicationEvaluator, EvaluatorBuilder, FrequentFlyerNumberValidator,
};
use config::AppConfig;
use error::AppError;

/// Load configuration from the environment and install the tracing subscriber.
pub fn bootstrap() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    tracing::info!(
        environment = ?config.environment,
        high_income_threshold = config.evaluation.high_income_threshold,
        "credit card evaluator configured"
    );
    Ok(config)
}

/// Build an evaluator with thresholds taken from the environment.
///
/// Fails when no validator is supplied, before any application is evaluated.
pub fn evaluator_from_env<V>(
    validator: Option<Arc<V>>,
) -> Result<CreditCardApplicationEvaluator<V>, AppError>
where
    V: FrequentFlyerNumberValidator + ?Sized,
{
    let config = AppConfig::load()?;
    let evaluator = EvaluatorBuilder::from_config(&config)
        .maybe_validator(validator)
        .build()?;
    Ok(evaluator)
}
