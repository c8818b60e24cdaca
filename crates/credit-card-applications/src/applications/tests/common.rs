use std::sync::{Arc, Mutex};

use crate::applications::validator::MockFrequentFlyerNumberValidator;
use crate::applications::{
    CreditCardApplication, CreditCardApplicationEvaluator, ServiceInformation, ValidationMode,
};

pub(super) type MockEvaluator = CreditCardApplicationEvaluator<MockFrequentFlyerNumberValidator>;

pub(super) fn evaluator(validator: MockFrequentFlyerNumberValidator) -> MockEvaluator {
    CreditCardApplicationEvaluator::new(Arc::new(validator))
}

/// Strict mock: any call without an expectation fails the test.
pub(super) fn unconfigured_validator() -> MockFrequentFlyerNumberValidator {
    MockFrequentFlyerNumberValidator::new()
}

pub(super) fn validator_with_license(license_key: &str) -> MockFrequentFlyerNumberValidator {
    let mut validator = MockFrequentFlyerNumberValidator::new();
    validator
        .expect_service_information()
        .return_const(ServiceInformation::with_license_key(license_key));
    validator
}

/// Loose validator: valid license, every number valid, mode writes accepted.
pub(super) fn permissive_validator() -> MockFrequentFlyerNumberValidator {
    let mut validator = validator_with_license("OK");
    validator.expect_is_valid().return_const(true);
    validator.expect_is_valid_out().returning(|_, is_valid| {
        *is_valid = true;
    });
    validator.expect_set_validation_mode().return_const(());
    validator
}

/// Wire the mode getter and setter to shared state so writes can be read back.
pub(super) fn remember_validation_mode(
    validator: &mut MockFrequentFlyerNumberValidator,
) -> Arc<Mutex<ValidationMode>> {
    let mode = Arc::new(Mutex::new(ValidationMode::default()));

    let written = mode.clone();
    validator
        .expect_set_validation_mode()
        .returning(move |next| *written.lock().expect("mode mutex poisoned") = next);

    let read = mode.clone();
    validator
        .expect_validation_mode()
        .returning(move || *read.lock().expect("mode mutex poisoned"));

    mode
}

pub(super) fn application(gross_annual_income: i64, age: i32) -> CreditCardApplication {
    CreditCardApplication {
        gross_annual_income,
        age,
        ..CreditCardApplication::default()
    }
}
