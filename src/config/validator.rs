//! Configuration validation rules.
//!
//! - Tier thresholds must be finite and non-negative
//! - Driver minimums must not be blank
//! - Package names and the interpreter name must not be blank

use crate::config::schema::RigcheckConfig;
use crate::error::{Result, RigcheckError};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &RigcheckConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_thresholds(config));
    errors.extend(validate_drivers(config));
    errors.extend(validate_install(config));

    errors
}

/// Validate, folding every error into one `ConfigValidationError`.
pub fn ensure_valid(config: &RigcheckConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }
    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(RigcheckError::ConfigValidationError { message })
}

fn validate_thresholds(config: &RigcheckConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (id, tier) in config.tier_overrides() {
        for (field, value) in [("ram_gb", tier.ram_gb), ("disk_gb", tier.disk_gb)] {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    errors.push(ValidationError::new(
                        "invalid-threshold",
                        format!("Tier '{}' has invalid {}: {}", id, field, value),
                    ));
                }
            }
        }
    }

    errors
}

fn validate_drivers(config: &RigcheckConfig) -> Vec<ValidationError> {
    [
        ("nvidia", &config.drivers.nvidia),
        ("amd", &config.drivers.amd),
        ("intel", &config.drivers.intel),
    ]
    .into_iter()
    .filter(|(_, version)| version.as_deref().is_some_and(|v| v.trim().is_empty()))
    .map(|(vendor, _)| {
        ValidationError::new(
            "blank-driver-version",
            format!("Driver minimum for '{}' must not be blank", vendor),
        )
    })
    .collect()
}

fn validate_install(config: &RigcheckConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config
        .install
        .python
        .as_deref()
        .is_some_and(|p| p.trim().is_empty())
    {
        errors.push(ValidationError::new(
            "blank-interpreter",
            "install.python must not be blank",
        ));
    }

    if let Some(packages) = &config.install.ml_packages {
        if packages.iter().any(|p| p.trim().is_empty()) {
            errors.push(ValidationError::new(
                "blank-package",
                "install.ml_packages contains a blank package name",
            ));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> RigcheckConfig {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&RigcheckConfig::default()).is_empty());
        assert!(ensure_valid(&RigcheckConfig::default()).is_ok());
    }

    #[test]
    fn negative_threshold_rejected() {
        let config = parse("tiers:\n  unreal4:\n    minimum:\n      disk_gb: -5\n");
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "invalid-threshold");
        assert!(errors[0].message.contains("unreal4-minimum"));
    }

    #[test]
    fn non_finite_threshold_rejected() {
        let config = parse("tiers:\n  unreal5:\n    recommended:\n      ram_gb: .nan\n");
        assert_eq!(validate_config(&config)[0].rule, "invalid-threshold");
    }

    #[test]
    fn blank_package_rejected() {
        let config = parse("install:\n  ml_packages: [numpy, \"  \"]\n");
        let errors = validate_config(&config);
        assert_eq!(errors[0].rule, "blank-package");
    }

    #[test]
    fn blank_driver_rejected() {
        let config = parse("drivers:\n  intel: \"\"\n");
        assert_eq!(validate_config(&config)[0].rule, "blank-driver-version");
    }

    #[test]
    fn errors_are_collected() {
        let config = parse(
            "tiers:\n  unreal5:\n    minimum:\n      ram_gb: -1\n      disk_gb: -1\ninstall:\n  python: \"\"\n",
        );
        assert_eq!(validate_config(&config).len(), 3);

        match ensure_valid(&config) {
            Err(RigcheckError::ConfigValidationError { message }) => {
                assert!(message.contains("ram_gb"));
                assert!(message.contains("install.python"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
