//! Detailed check report.
//!
//! Plain-text block shown by `check --details`: the host specs, the Unreal
//! Engine 5 tier tables, the deficiencies of the reported outcome, a note when
//! the host falls back to Unreal Engine 4, and driver guidance.

use crate::hardware::RawSnapshot;

use super::drivers::DriverGuidance;
use super::selector::{Outcome, Selection};
use super::tier::{Engine, TierCatalog, TierId, TierLevel};

/// Render the detailed report.
pub fn detailed_report(
    snapshot: &RawSnapshot,
    catalog: &TierCatalog,
    selection: &Selection,
    guidance: Option<&DriverGuidance>,
) -> String {
    let mut out = String::from("--- Current System Specs ---\n");
    for (key, value) in snapshot.entries() {
        out.push_str(&format!("{}: {}\n", key, value));
    }

    out.push_str("\n--- Unreal Engine 5 Requirements ---\n");
    out.push_str(&format!(
        "Minimum Requirements: {}\n",
        catalog.get(TierId::new(Engine::Unreal5, TierLevel::Minimum))
    ));
    out.push_str(&format!(
        "Recommended Requirements: {}\n",
        catalog.get(TierId::new(Engine::Unreal5, TierLevel::Recommended))
    ));

    if !selection.deficiencies.is_empty() {
        out.push_str("\n--- Validation Errors ---\n");
        for deficiency in &selection.deficiencies {
            out.push_str(deficiency);
            out.push('\n');
        }
    }

    if selection.outcome == Outcome::FallbackEngineOnly {
        out.push_str("\n--- Unreal Engine 4 Fallback ---\n");
        out.push_str("Your system cannot run Unreal Engine 5, but it can run Unreal Engine 4.\n");
    }

    if let Some(guidance) = guidance {
        out.push_str(&guidance.detail);
    }

    out
}
