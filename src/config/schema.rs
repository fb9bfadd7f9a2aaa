//! Configuration schema definitions for rigcheck.
//!
//! Every field is optional: an absent value keeps the built-in default.
//!
//! ```yaml
//! tiers:
//!   unreal5:
//!     minimum:
//!       disk_gb: 80
//! drivers:
//!   nvidia: "470.00"
//! install:
//!   python: python3.11
//!   ml_packages: [numpy, torch]
//! probe:
//!   disk_path: /home
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::hardware::default_disk_path;
use crate::requirements::{
    DriverMinimums, Engine, RequirementTier, TierCatalog, TierId, TierLevel,
};

/// AI/ML packages installed when the config does not name any.
pub const DEFAULT_ML_PACKAGES: &[&str] = &["numpy", "pandas", "scikit-learn", "torch"];

/// Root configuration structure for config.yml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigcheckConfig {
    /// Threshold overrides for the tier catalog
    pub tiers: TiersConfig,

    /// Minimum driver version overrides
    pub drivers: DriversConfig,

    /// Environment bootstrap settings
    pub install: InstallConfig,

    /// Host probe settings
    pub probe: ProbeConfig,
}

/// Per-engine tier overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiersConfig {
    pub unreal5: EngineTiersConfig,
    pub unreal4: EngineTiersConfig,
}

/// Minimum and recommended overrides for one engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineTiersConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<TierOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended: Option<TierOverride>,
}

/// Individual threshold overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_cores: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram_gb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_gb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedicated_gpu: Option<bool>,
}

impl TierOverride {
    /// Apply the set fields on top of `tier`.
    pub fn apply(&self, tier: &mut RequirementTier) {
        if let Some(cores) = self.cpu_cores {
            tier.cpu_cores = cores;
        }
        if let Some(ram) = self.ram_gb {
            tier.ram_gb = ram;
        }
        if let Some(disk) = self.disk_gb {
            tier.disk_gb = disk;
        }
        if let Some(gpu) = self.dedicated_gpu {
            tier.dedicated_gpu = gpu;
        }
    }
}

/// Minimum driver version overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriversConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nvidia: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intel: Option<String>,
}

/// Environment bootstrap settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Interpreter to use instead of searching for `python`/`python3`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python: Option<String>,

    /// AI/ML package set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ml_packages: Option<Vec<String>>,
}

/// Host probe settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Path whose filesystem free space is measured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_path: Option<PathBuf>,
}

impl RigcheckConfig {
    /// Tier catalog with overrides applied.
    pub fn catalog(&self) -> TierCatalog {
        let mut catalog = TierCatalog::builtin();
        for (id, tier_override) in self.tier_overrides() {
            tier_override.apply(catalog.get_mut(id));
        }
        catalog
    }

    /// Every configured override, keyed by tier.
    pub fn tier_overrides(&self) -> Vec<(TierId, TierOverride)> {
        [
            (Engine::Unreal5, &self.tiers.unreal5),
            (Engine::Unreal4, &self.tiers.unreal4),
        ]
        .into_iter()
        .flat_map(|(engine, cfg)| {
            [
                (TierLevel::Minimum, cfg.minimum),
                (TierLevel::Recommended, cfg.recommended),
            ]
            .into_iter()
            .filter_map(move |(level, o)| o.map(|o| (TierId::new(engine, level), o)))
        })
        .collect()
    }

    /// Driver minimums with overrides applied.
    pub fn driver_minimums(&self) -> DriverMinimums {
        let defaults = DriverMinimums::default();
        DriverMinimums {
            nvidia: self.drivers.nvidia.clone().unwrap_or(defaults.nvidia),
            amd: self.drivers.amd.clone().unwrap_or(defaults.amd),
            intel: self.drivers.intel.clone().unwrap_or(defaults.intel),
        }
    }

    /// Configured AI/ML packages, or the default set.
    pub fn ml_packages(&self) -> Vec<String> {
        match &self.install.ml_packages {
            Some(packages) => packages.clone(),
            None => DEFAULT_ML_PACKAGES.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Free-space probe path, or the system root.
    pub fn disk_path(&self) -> PathBuf {
        self.probe.disk_path.clone().unwrap_or_else(default_disk_path)
    }
}
