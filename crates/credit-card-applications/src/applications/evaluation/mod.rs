mod config;
mod policy;

pub use config::EvaluationConfig;

use std::sync::Arc;

use tracing::{debug, warn};

use super::domain::{CreditCardApplication, CreditCardApplicationDecision};
use super::validator::FrequentFlyerNumberValidator;
use crate::config::AppConfig;
use policy::DecidingRule;

/// Error raised while assembling an evaluator.
#[derive(Debug, thiserror::Error)]
pub enum EvaluatorError {
    #[error("a frequent flyer number validator is required")]
    MissingValidator,
}

/// Rule engine deciding applications against an injected validator.
pub struct CreditCardApplicationEvaluator<V: ?Sized> {
    validator: Arc<V>,
    config: EvaluationConfig,
}

impl<V> CreditCardApplicationEvaluator<V>
where
    V: FrequentFlyerNumberValidator + ?Sized,
{
    pub fn new(validator: Arc<V>) -> Self {
        Self::with_config(validator, EvaluationConfig::default())
    }

    pub fn with_config(validator: Arc<V>, config: EvaluationConfig) -> Self {
        Self { validator, config }
    }

    pub fn builder() -> EvaluatorBuilder<V> {
        EvaluatorBuilder::new()
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    pub fn validator(&self) -> &Arc<V> {
        &self.validator
    }

    /// Decide an application, gating on the validator's license before the lookup.
    pub fn evaluate(&self, application: &CreditCardApplication) -> CreditCardApplicationDecision {
        if policy::is_high_income(application, &self.config) {
            return conclude(DecidingRule::HighIncome);
        }

        let license = self.validator.service_information().license;
        if license.is_expired() {
            warn!("frequent flyer validator license expired; referring application");
            return conclude(DecidingRule::ExpiredLicense);
        }

        self.select_lookup_mode(application);

        if !self
            .validator
            .is_valid(&application.frequent_flyer_number)
        {
            return conclude(DecidingRule::InvalidFrequentFlyerNumber);
        }

        conclude(policy::decide_after_lookup(application, &self.config))
    }

    /// Decide an application through the output-parameter lookup.
    ///
    /// Unlike [`evaluate`](Self::evaluate) this path never reads the license key.
    pub fn evaluate_using_out(
        &self,
        application: &CreditCardApplication,
    ) -> CreditCardApplicationDecision {
        if policy::is_high_income(application, &self.config) {
            return conclude(DecidingRule::HighIncome);
        }

        self.select_lookup_mode(application);

        let mut is_valid_frequent_flyer_number = false;
        self.validator.is_valid_out(
            &application.frequent_flyer_number,
            &mut is_valid_frequent_flyer_number,
        );

        if !is_valid_frequent_flyer_number {
            return conclude(DecidingRule::InvalidFrequentFlyerNumber);
        }

        conclude(policy::decide_after_lookup(application, &self.config))
    }

    fn select_lookup_mode(&self, application: &CreditCardApplication) {
        let mode = policy::lookup_mode(application, &self.config);
        debug!(age = application.age, ?mode, "selecting validation mode");
        self.validator.set_validation_mode(mode);
    }
}

fn conclude(rule: DecidingRule) -> CreditCardApplicationDecision {
    let decision = rule.decision();
    debug!(rule = rule.name(), decision = decision.label(), "application evaluated");
    decision
}

/// Builder that refuses to produce an evaluator without a validator.
pub struct EvaluatorBuilder<V: ?Sized> {
    validator: Option<Arc<V>>,
    config: EvaluationConfig,
}

impl<V> EvaluatorBuilder<V>
where
    V: FrequentFlyerNumberValidator + ?Sized,
{
    pub fn new() -> Self {
        Self {
            validator: None,
            config: EvaluationConfig::default(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new().config(config.evaluation.clone())
    }

    pub fn validator(mut self, validator: Arc<V>) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn maybe_validator(mut self, validator: Option<Arc<V>>) -> Self {
        self.validator = validator;
        self
    }

    pub fn config(mut self, config: EvaluationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<CreditCardApplicationEvaluator<V>, EvaluatorError> {
        let validator = self.validator.ok_or(EvaluatorError::MissingValidator)?;
        Ok(CreditCardApplicationEvaluator::with_config(
            validator,
            self.config,
        ))
    }
}

impl<V> Default for EvaluatorBuilder<V>
where
    V: FrequentFlyerNumberValidator + ?Sized,
{
    fn default() -> Self {
        Self::new()
    }
}
