//! Tier selection policy.
//!
//! Walks an ordered plan of tiers and reports the first one the host
//! satisfies. When none is satisfied, the deficiencies reported are those of
//! the last tier in the plan, which is the most permissive one attempted.

use serde::Serialize;

use crate::hardware::HostReading;

use super::tier::{Engine, RequirementTier, TierCatalog, TierId, TierLevel};
use super::validator::validate_reading;

/// Reported outcome category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Primary engine's recommended tier satisfied.
    FullyCapable,
    /// Only the primary engine's minimum tier satisfied.
    CapableSuboptimal,
    /// Only the fallback engine's minimum tier satisfied.
    FallbackEngineOnly,
    /// Nothing in the plan satisfied.
    Incapable,
}

impl Outcome {
    /// One-line narration shown to the user.
    pub fn narration(&self) -> &'static str {
        match self {
            Outcome::FullyCapable => "Yes, your system can run Unreal Engine 5!",
            Outcome::CapableSuboptimal => {
                "Your system meets the minimum requirements for Unreal Engine 5, but may not perform optimally."
            }
            Outcome::FallbackEngineOnly => {
                "Your system can run Unreal Engine 4, but not Unreal Engine 5."
            }
            Outcome::Incapable => "No, your system cannot run Unreal Engine 4 or 5.",
        }
    }

    /// Whether any engine can run.
    pub fn is_capable(&self) -> bool {
        !matches!(self, Outcome::Incapable)
    }
}

/// One entry of a selection plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanStep {
    pub tier_id: TierId,
    pub tier: RequirementTier,
    /// Outcome reported when this step is the first satisfied one.
    pub outcome: Outcome,
}

/// Result of running a plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub outcome: Outcome,
    /// Tier that was satisfied, if any.
    #[serde(serialize_with = "serialize_tier_id")]
    pub satisfied: Option<TierId>,
    /// Deficiencies relative to the last tier attempted; empty on success.
    pub deficiencies: Vec<String>,
}

fn serialize_tier_id<S: serde::Serializer>(
    id: &Option<TierId>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match id {
        Some(id) => serializer.serialize_some(&id.to_string()),
        None => serializer.serialize_none(),
    }
}

/// The standard plan: UE5 recommended, UE5 minimum, then UE4 minimum.
pub fn default_plan(catalog: &TierCatalog) -> Vec<PlanStep> {
    [
        (Engine::Unreal5, TierLevel::Recommended, Outcome::FullyCapable),
        (Engine::Unreal5, TierLevel::Minimum, Outcome::CapableSuboptimal),
        (Engine::Unreal4, TierLevel::Minimum, Outcome::FallbackEngineOnly),
    ]
    .into_iter()
    .map(|(engine, level, outcome)| {
        let tier_id = TierId::new(engine, level);
        PlanStep {
            tier_id,
            tier: *catalog.get(tier_id),
            outcome,
        }
    })
    .collect()
}

/// Evaluate `plan` in order and stop at the first satisfied tier.
pub fn select(reading: &HostReading, plan: &[PlanStep]) -> Selection {
    let mut last_failures = Vec::new();

    for step in plan {
        let deficiencies = validate_reading(reading, &step.tier);
        if deficiencies.is_empty() {
            tracing::debug!("Satisfied {}", step.tier_id);
            return Selection {
                outcome: step.outcome,
                satisfied: Some(step.tier_id),
                deficiencies,
            };
        }
        tracing::debug!(
            "{} not satisfied ({} deficiencies)",
            step.tier_id,
            deficiencies.len()
        );
        last_failures = deficiencies;
    }

    Selection {
        outcome: Outcome::Incapable,
        satisfied: None,
        deficiencies: last_failures,
    }
}
