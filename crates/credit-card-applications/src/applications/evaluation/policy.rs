use super::super::domain::{CreditCardApplication, CreditCardApplicationDecision};
use super::super::validator::ValidationMode;
use super::config::EvaluationConfig;

/// Rule that produced a decision, recorded on the trace event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DecidingRule {
    HighIncome,
    ExpiredLicense,
    InvalidFrequentFlyerNumber,
    AutoReferralAge,
    LowIncome,
    Default,
}

impl DecidingRule {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            DecidingRule::HighIncome => "high_income",
            DecidingRule::ExpiredLicense => "expired_license",
            DecidingRule::InvalidFrequentFlyerNumber => "invalid_frequent_flyer_number",
            DecidingRule::AutoReferralAge => "auto_referral_age",
            DecidingRule::LowIncome => "low_income",
            DecidingRule::Default => "default_referral",
        }
    }

    pub(crate) fn decision(&self) -> CreditCardApplicationDecision {
        match self {
            DecidingRule::HighIncome => CreditCardApplicationDecision::AutoAccepted,
            DecidingRule::LowIncome => CreditCardApplicationDecision::AutoDeclined,
            DecidingRule::ExpiredLicense
            | DecidingRule::InvalidFrequentFlyerNumber
            | DecidingRule::AutoReferralAge
            | DecidingRule::Default => CreditCardApplicationDecision::ReferredToHuman,
        }
    }
}

pub(crate) fn is_high_income(
    application: &CreditCardApplication,
    config: &EvaluationConfig,
) -> bool {
    application.gross_annual_income >= config.high_income_threshold
}

/// Mode the validator must be in for this applicant's lookup.
pub(crate) fn lookup_mode(
    application: &CreditCardApplication,
    config: &EvaluationConfig,
) -> ValidationMode {
    if application.age >= config.detailed_lookup_min_age {
        ValidationMode::Detailed
    } else {
        ValidationMode::Quick
    }
}

/// Rules applied once the frequent flyer number is known to be valid.
pub(crate) fn decide_after_lookup(
    application: &CreditCardApplication,
    config: &EvaluationConfig,
) -> DecidingRule {
    if application.age <= config.auto_referral_max_age {
        return DecidingRule::AutoReferralAge;
    }

    if application.gross_annual_income < config.low_income_threshold {
        return DecidingRule::LowIncome;
    }

    DecidingRule::Default
}
