//! Hardware requirement evaluation.
//!
//! This module compares a host snapshot against the engine requirement
//! tiers and decides which engine the host can run.
//!
//! # Modules
//!
//! - [`tier`] - Requirement tiers and the built-in catalog
//! - [`validator`] - Per-tier deficiency checks
//! - [`selector`] - Ordered tier selection policy
//! - [`drivers`] - GPU driver guidance
//! - [`report`] - Detailed plain-text report

pub mod drivers;
pub mod report;
pub mod selector;
pub mod tier;
pub mod validator;

pub use drivers::{driver_guidance, DriverGuidance, DriverMinimums, GuidanceKind};
pub use report::detailed_report;
pub use selector::{default_plan, select, Outcome, PlanStep, Selection};
pub use tier::{Engine, RequirementTier, TierCatalog, TierId, TierLevel};
pub use validator::{validate, validate_reading, GPU_REQUIRED_MESSAGE};
