//! Credit card application intake types, the frequent flyer validator contract, and the
//! decision evaluator that combines them.
//!
//! The evaluator never builds its own validator. Callers inject one (a live service client,
//! an in-memory fake, or a mock) and keep a handle to it so that side effects such as the
//! selected validation mode stay observable after evaluation.

pub mod domain;
pub(crate) mod evaluation;
pub mod validator;

#[cfg(test)]
mod tests;

pub use domain::{CreditCardApplication, CreditCardApplicationDecision};
pub use evaluation::{
    CreditCardApplicationEvaluator, EvaluationConfig, EvaluatorBuilder, EvaluatorError,
};
pub use validator::{
    FrequentFlyerNumberValidator, LicenseData, ServiceInformation, ValidationMode,
    EXPIRED_LICENSE_KEY,
};
