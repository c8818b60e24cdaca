use serde::{Deserialize, Serialize};

/// License key reported by a validator whose backing service can no longer be trusted.
pub const EXPIRED_LICENSE_KEY: &str = "EXPIRED";

/// Depth of the lookup performed by the validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    #[default]
    Quick,
    Detailed,
}

/// Licensing metadata published by the validation service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseData {
    pub license_key: String,
}

impl LicenseData {
    pub fn new(license_key: impl Into<String>) -> Self {
        Self {
            license_key: license_key.into(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.license_key == EXPIRED_LICENSE_KEY
    }
}

/// Service metadata exposed alongside validity checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInformation {
    pub license: LicenseData,
}

impl ServiceInformation {
    pub fn with_license_key(license_key: impl Into<String>) -> Self {
        Self {
            license: LicenseData::new(license_key),
        }
    }
}

/// External frequent flyer number lookup consumed by the evaluator.
///
/// The validation mode is shared state: the evaluator writes it through `&self`, so
/// implementations keep it behind interior mutability and callers can read it back after
/// an evaluation returns.
#[cfg_attr(test, mockall::automock)]
pub trait FrequentFlyerNumberValidator: Send + Sync {
    fn service_information(&self) -> ServiceInformation;

    fn is_valid(&self, frequent_flyer_number: &str) -> bool;

    /// Same check as [`is_valid`](Self::is_valid), reporting through `is_valid` instead of
    /// a return value.
    fn is_valid_out(&self, frequent_flyer_number: &str, is_valid: &mut bool);

    fn validation_mode(&self) -> ValidationMode;

    fn set_validation_mode(&self, mode: ValidationMode);
}
