//! Spec validation.
//!
//! Compares a host reading against one [`RequirementTier`] and returns every
//! deficiency as a human-readable message. All four checks always run, in
//! the order CPU, RAM, disk space, GPU. An empty result means the tier is
//! satisfied.
//!
//! # Example
//!
//! ```
//! use rigcheck::hardware::RawSnapshot;
//! use rigcheck::requirements::{validate, RequirementTier};
//!
//! let snapshot = RawSnapshot::new("4 cores", "8 GB", "100 GB free", "Linux", "Dedicated GPU");
//! let tier = RequirementTier { cpu_cores: 4, ram_gb: 8.0, disk_gb: 100.0, dedicated_gpu: true };
//! assert!(validate(&snapshot, &tier).is_empty());
//! ```

use crate::hardware::{HostReading, RawSnapshot};

use super::tier::RequirementTier;

/// Message emitted when a dedicated GPU is required but missing.
pub const GPU_REQUIRED_MESSAGE: &str = "No dedicated GPU found (required for Unreal Engine).";

/// Validate an encoded snapshot against a tier.
pub fn validate(snapshot: &RawSnapshot, tier: &RequirementTier) -> Vec<String> {
    validate_reading(&snapshot.read(), tier)
}

/// Validate an already parsed reading against a tier.
pub fn validate_reading(reading: &HostReading, tier: &RequirementTier) -> Vec<String> {
    let mut deficiencies = Vec::new();

    match &reading.cpu_cores {
        Ok(cores) if *cores < tier.cpu_cores => deficiencies.push(format!(
            "CPU does not meet the requirement ({} cores).",
            tier.cpu_cores
        )),
        Ok(_) => {}
        Err(e) => deficiencies.push(e.to_string()),
    }

    match &reading.ram_gb {
        Ok(ram) if *ram < tier.ram_gb => deficiencies.push(format!(
            "Not enough RAM (at least {} GB required).",
            tier.ram_gb
        )),
        Ok(_) => {}
        Err(e) => deficiencies.push(e.to_string()),
    }

    match &reading.disk_free_gb {
        Ok(free) if *free < tier.disk_gb => deficiencies.push(format!(
            "Not enough disk space (at least {} GB required).",
            tier.disk_gb
        )),
        Ok(_) => {}
        Err(e) => deficiencies.push(e.to_string()),
    }

    if tier.dedicated_gpu && !reading.dedicated_gpu {
        deficiencies.push(GPU_REQUIRED_MESSAGE.to_string());
    }

    tracing::debug!(count = deficiencies.len(), "Validated snapshot against {}", tier);
    deficiencies
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIER: RequirementTier = RequirementTier {
        cpu_cores: 4,
        ram_gb: 8.0,
        disk_gb: 100.0,
        dedicated_gpu: true,
    };

    fn snapshot(cpu: &str, ram: &str, disk: &str, gpu: &str) -> RawSnapshot {
        RawSnapshot::new(cpu, ram, disk, "Linux 6.8.0", gpu)
    }

    #[test]
    fn meeting_every_threshold_is_empty() {
        let s = snapshot("4 cores", "8 GB", "100 GB free", "Dedicated GPU");
        assert!(validate(&s, &TIER).is_empty());
    }

    #[test]
    fn exceeding_every_threshold_is_empty() {
        let s = snapshot(
            "AMD Ryzen 9 7950X (16 cores)",
            "64 GB",
            "1800.25 GB free",
            "Dedicated GPU found: NVIDIA GeForce RTX 4090 (driver 551.23)",
        );
        assert!(validate(&s, &TIER).is_empty());
    }

    #[test]
    fn all_four_deficiencies_in_check_order() {
        let s = snapshot("2 cores", "4 GB", "20 GB free", "No dedicated GPU found");
        let result = validate(&s, &TIER);
        assert_eq!(
            result,
            vec![
                "CPU does not meet the requirement (4 cores).",
                "Not enough RAM (at least 8 GB required).",
                "Not enough disk space (at least 100 GB required).",
                "No dedicated GPU found (required for Unreal Engine).",
            ]
        );
    }

    #[test]
    fn low_cpu_gives_exactly_one_cpu_message() {
        let s = snapshot("Intel Celeron (2 cores)", "4 GB", "5 GB free", "No dedicated GPU found");
        let result = validate(&s, &TIER);
        let cpu_messages = result.iter().filter(|m| m.starts_with("CPU")).count();
        assert_eq!(cpu_messages, 1);
    }

    #[test]
    fn checks_do_not_short_circuit() {
        let s = snapshot("8 cores", "4 GB", "500 GB free", "No dedicated GPU found");
        let result = validate(&s, &TIER);
        assert_eq!(result.len(), 2);
        assert!(result[0].contains("RAM"));
        assert_eq!(result[1], GPU_REQUIRED_MESSAGE);
    }

    #[test]
    fn gpu_ignored_when_not_required() {
        let tier = RequirementTier {
            dedicated_gpu: false,
            ..TIER
        };
        let without = snapshot("2 cores", "16 GB", "100 GB free", "No dedicated GPU found");
        let with = snapshot(
            "2 cores",
            "16 GB",
            "100 GB free",
            "Dedicated GPU found: AMD Radeon RX 6800",
        );
        assert_eq!(validate(&without, &tier), validate(&with, &tier));
        assert_eq!(validate(&without, &tier).len(), 1);
    }

    #[test]
    fn sentinel_match_is_case_sensitive() {
        let s = snapshot("4 cores", "8 GB", "100 GB free", "no dedicated gpu found");
        assert!(validate(&s, &TIER).is_empty());
    }

    #[test]
    fn malformed_ram_is_reported_not_fatal() {
        let s = snapshot("4 cores", "abc GB", "100 GB free", "Dedicated GPU");
        assert_eq!(
            validate(&s, &TIER),
            vec!["Unable to parse RAM from 'abc GB'."]
        );
    }

    #[test]
    fn malformed_fields_each_report_once() {
        let s = snapshot("many cores", "?", "lots free", "No dedicated GPU found");
        let result = validate(&s, &TIER);
        assert_eq!(result.len(), 4);
        assert_eq!(result[0], "Unable to parse CPU core count from 'many cores'.");
        assert_eq!(result[1], "Unable to parse RAM from '?'.");
        assert_eq!(result[2], "Unable to parse disk space from 'lots free'.");
    }

    #[test]
    fn fractional_thresholds_compare_as_floats() {
        let tier = RequirementTier {
            ram_gb: 7.5,
            ..TIER
        };
        let s = snapshot("4 cores", "7.49 GB", "100 GB free", "Dedicated GPU");
        assert_eq!(
            validate(&s, &tier),
            vec!["Not enough RAM (at least 7.5 GB required)."]
        );
    }

    #[test]
    fn typed_reading_matches_encoded_reading() {
        use crate::hardware::{GpuStatus, SystemSnapshot};

        let typed = SystemSnapshot {
            cpu_name: "Intel Core i5".to_string(),
            cpu_cores: 2,
            ram_gb: 16.0,
            disk_free_gb: 40.0,
            os: "Windows 10".to_string(),
            gpu: GpuStatus::NotFound,
        };
        assert_eq!(
            validate_reading(&typed.reading(), &TIER),
            validate(&typed.to_raw(), &TIER)
        );
    }
}
