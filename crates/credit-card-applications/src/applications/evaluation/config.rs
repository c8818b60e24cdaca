use serde::{Deserialize, Serialize};

/// Thresholds driving the decision rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Income at or above which applications are accepted without a lookup.
    pub high_income_threshold: i64,
    /// Income below which eligible applications are declined.
    pub low_income_threshold: i64,
    /// Applicants at or under this age are always referred after the lookup.
    pub auto_referral_max_age: i32,
    /// Applicants at or over this age get a detailed lookup.
    pub detailed_lookup_min_age: i32,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            high_income_threshold: 100_000,
            low_income_threshold: 20_000,
            auto_referral_max_age: 20,
            detailed_lookup_min_age: 30,
        }
    }
}
