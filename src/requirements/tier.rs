//! Requirement tiers and the built-in catalog.
//!
//! A tier is a set of minimum hardware thresholds. The catalog holds one
//! minimum and one recommended tier per engine version; every threshold can
//! be overridden from configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RigcheckError;

/// Minimum hardware thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RequirementTier {
    /// Minimum physical core count.
    pub cpu_cores: u32,
    /// Minimum total memory in gigabytes.
    pub ram_gb: f64,
    /// Minimum free disk space in gigabytes.
    pub disk_gb: f64,
    /// Whether a dedicated GPU is mandatory.
    pub dedicated_gpu: bool,
}

impl fmt::Display for RequirementTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPU: {} cores, RAM: {} GB, Disk Space: {} GB free, GPU: {}",
            self.cpu_cores,
            self.ram_gb,
            self.disk_gb,
            if self.dedicated_gpu {
                "dedicated required"
            } else {
                "not required"
            }
        )
    }
}

pub const UNREAL5_MINIMUM: RequirementTier = RequirementTier {
    cpu_cores: 2,
    ram_gb: 4.0,
    disk_gb: 100.0,
    dedicated_gpu: false,
};

pub const UNREAL5_RECOMMENDED: RequirementTier = RequirementTier {
    cpu_cores: 4,
    ram_gb: 8.0,
    disk_gb: 100.0,
    dedicated_gpu: true,
};

pub const UNREAL4_MINIMUM: RequirementTier = RequirementTier {
    cpu_cores: 2,
    ram_gb: 4.0,
    disk_gb: 50.0,
    dedicated_gpu: false,
};

pub const UNREAL4_RECOMMENDED: RequirementTier = RequirementTier {
    cpu_cores: 4,
    ram_gb: 8.0,
    disk_gb: 50.0,
    dedicated_gpu: true,
};

/// Engine version a tier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    Unreal5,
    Unreal4,
}

impl Engine {
    /// Config and CLI key (`unreal5`).
    pub fn key(&self) -> &'static str {
        match self {
            Engine::Unreal5 => "unreal5",
            Engine::Unreal4 => "unreal4",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Engine::Unreal5 => "Unreal Engine 5",
            Engine::Unreal4 => "Unreal Engine 4",
        })
    }
}

/// Minimum or recommended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierLevel {
    Minimum,
    Recommended,
}

impl TierLevel {
    pub fn key(&self) -> &'static str {
        match self {
            TierLevel::Minimum => "minimum",
            TierLevel::Recommended => "recommended",
        }
    }
}

/// Name of a catalog entry, written `<engine>-<level>` (`unreal5-minimum`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TierId {
    pub engine: Engine,
    pub level: TierLevel,
}

impl TierId {
    pub const fn new(engine: Engine, level: TierLevel) -> Self {
        Self { engine, level }
    }

    /// All catalog entries in display order.
    pub const ALL: [TierId; 4] = [
        TierId::new(Engine::Unreal5, TierLevel::Minimum),
        TierId::new(Engine::Unreal5, TierLevel::Recommended),
        TierId::new(Engine::Unreal4, TierLevel::Minimum),
        TierId::new(Engine::Unreal4, TierLevel::Recommended),
    ];
}

impl fmt::Display for TierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.engine.key(), self.level.key())
    }
}

impl FromStr for TierId {
    type Err = RigcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        TierId::ALL
            .into_iter()
            .find(|id| id.to_string() == lower)
            .ok_or_else(|| RigcheckError::UnknownTier {
                name: s.to_string(),
            })
    }
}

/// The four named tiers.
#[derive(Debug, Clone, PartialEq)]
pub struct TierCatalog {
    unreal5_minimum: RequirementTier,
    unreal5_recommended: RequirementTier,
    unreal4_minimum: RequirementTier,
    unreal4_recommended: RequirementTier,
}

impl Default for TierCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TierCatalog {
    /// Catalog with the built-in thresholds.
    pub fn builtin() -> Self {
        Self {
            unreal5_minimum: UNREAL5_MINIMUM,
            unreal5_recommended: UNREAL5_RECOMMENDED,
            unreal4_minimum: UNREAL4_MINIMUM,
            unreal4_recommended: UNREAL4_RECOMMENDED,
        }
    }

    pub fn get(&self, id: TierId) -> &RequirementTier {
        match (id.engine, id.level) {
            (Engine::Unreal5, TierLevel::Minimum) => &self.unreal5_minimum,
            (Engine::Unreal5, TierLevel::Recommended) => &self.unreal5_recommended,
            (Engine::Unreal4, TierLevel::Minimum) => &self.unreal4_minimum,
            (Engine::Unreal4, TierLevel::Recommended) => &self.unreal4_recommended,
        }
    }

    pub fn get_mut(&mut self, id: TierId) -> &mut RequirementTier {
        match (id.engine, id.level) {
            (Engine::Unreal5, TierLevel::Minimum) => &mut self.unreal5_minimum,
            (Engine::Unreal5, TierLevel::Recommended) => &mut self.unreal5_recommended,
            (Engine::Unreal4, TierLevel::Minimum) => &mut self.unreal4_minimum,
            (Engine::Unreal4, TierLevel::Recommended) => &mut self.unreal4_recommended,
        }
    }

    /// Look up a tier by its `<engine>-<level>` name.
    pub fn resolve(&self, name: &str) -> crate::error::Result<(TierId, RequirementTier)> {
        let id: TierId = name.parse()?;
        Ok((id, *self.get(id)))
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = (TierId, &RequirementTier)> {
        TierId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables() {
        let catalog = TierCatalog::builtin();
        let ue5_min = catalog.get(TierId::new(Engine::Unreal5, TierLevel::Minimum));
        assert_eq!(ue5_min.cpu_cores, 2);
        assert_eq!(ue5_min.ram_gb, 4.0);
        assert_eq!(ue5_min.disk_gb, 100.0);
        assert!(!ue5_min.dedicated_gpu);

        let ue4_rec = catalog.get(TierId::new(Engine::Unreal4, TierLevel::Recommended));
        assert_eq!(ue4_rec.disk_gb, 50.0);
        assert!(ue4_rec.dedicated_gpu);
    }

    #[test]
    fn tier_id_round_trips_through_name() {
        for id in TierId::ALL {
            assert_eq!(id.to_string().parse::<TierId>().unwrap(), id);
        }
    }

    #[test]
    fn tier_id_parse_is_case_insensitive() {
        let id: TierId = "Unreal4-Minimum".parse().unwrap();
        assert_eq!(id, TierId::new(Engine::Unreal4, TierLevel::Minimum));
    }

    #[test]
    fn unknown_tier_name_is_an_error() {
        let err = "unreal6-minimum".parse::<TierId>().unwrap_err();
        assert!(matches!(err, RigcheckError::UnknownTier { .. }));
    }

    #[test]
    fn resolve_returns_current_thresholds() {
        let mut catalog = TierCatalog::builtin();
        catalog
            .get_mut(TierId::new(Engine::Unreal5, TierLevel::Recommended))
            .ram_gb = 32.0;

        let (id, tier) = catalog.resolve("unreal5-recommended").unwrap();
        assert_eq!(id.engine, Engine::Unreal5);
        assert_eq!(tier.ram_gb, 32.0);
    }

    #[test]
    fn iter_in_display_order() {
        let names: Vec<String> = TierCatalog::builtin()
            .iter()
            .map(|(id, _)| id.to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "unreal5-minimum",
                "unreal5-recommended",
                "unreal4-minimum",
                "unreal4-recommended"
            ]
        );
    }

    #[test]
    fn tier_display_names_thresholds() {
        let text = UNREAL5_RECOMMENDED.to_string();
        assert_eq!(
            text,
            "CPU: 4 cores, RAM: 8 GB, Disk Space: 100 GB free, GPU: dedicated required"
        );
    }
}
