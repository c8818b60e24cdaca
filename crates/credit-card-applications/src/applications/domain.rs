use serde::{Deserialize, Serialize};

/// Applicant-declared data submitted for a credit card decision.
///
/// Fields are signed so that out-of-range submissions reach the rule chain unchanged; the
/// evaluator does not validate them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCardApplication {
    #[serde(default)]
    pub gross_annual_income: i64,
    #[serde(default)]
    pub age: i32,
    /// Empty when the applicant did not supply one.
    #[serde(default)]
    pub frequent_flyer_number: String,
}

impl CreditCardApplication {
    pub fn new(
        gross_annual_income: i64,
        age: i32,
        frequent_flyer_number: impl Into<String>,
    ) -> Self {
        Self {
            gross_annual_income,
            age,
            frequent_flyer_number: frequent_flyer_number.into(),
        }
    }
}

/// Outcome of evaluating a single application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditCardApplicationDecision {
    AutoAccepted,
    AutoDeclined,
    ReferredToHuman,
}

impl CreditCardApplicationDecision {
    pub fn label(&self) -> &'static str {
        match self {
            CreditCardApplicationDecision::AutoAccepted => "auto_accepted",
            CreditCardApplicationDecision::AutoDeclined => "auto_declined",
            CreditCardApplicationDecision::ReferredToHuman => "referred_to_human",
        }
    }

    pub fn summary(&self) -> String {
        match self {
            CreditCardApplicationDecision::AutoAccepted => "application accepted".to_string(),
            CreditCardApplicationDecision::AutoDeclined => "application declined".to_string(),
            CreditCardApplicationDecision::ReferredToHuman => {
                "application referred for manual review".to_string()
            }
        }
    }
}
