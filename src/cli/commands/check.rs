//! Check command implementation.
//!
//! The `rigcheck check` command evaluates a hardware snapshot against the
//! Unreal Engine requirement tiers and reports which engine the machine can
//! run. It is also what runs when no subcommand is given.

use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::config::RigcheckConfig;
use crate::error::{Result, RigcheckError};
use crate::hardware::RawSnapshot;
use crate::requirements::{
    default_plan, detailed_report, driver_guidance, select, validate, DriverGuidance, Outcome,
    Selection, TierCatalog,
};
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::source::SnapshotSource;

/// The check command implementation.
pub struct CheckCommand {
    config: RigcheckConfig,
    args: CheckArgs,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    snapshot: &'a RawSnapshot,
    #[serde(flatten)]
    selection: &'a Selection,
    narration: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    drivers: Option<&'a DriverGuidance>,
}

#[derive(Serialize)]
struct TierReport<'a> {
    snapshot: &'a RawSnapshot,
    tier: String,
    satisfied: bool,
    deficiencies: &'a [String],
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(config: RigcheckConfig, args: CheckArgs) -> Self {
        Self { config, args }
    }

    /// Evaluate an already resolved snapshot.
    pub fn evaluate(
        &self,
        source: &SnapshotSource,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let catalog = self.config.catalog();
        let guidance = source.live.then(|| {
            driver_guidance(
                source.snapshot.gpu_info().as_ref(),
                &self.config.driver_minimums(),
            )
        });

        if let Some(name) = &self.args.tier {
            return self.check_tier(name, &catalog, source, guidance.as_ref(), ui);
        }

        let selection = select(&source.snapshot.read(), &default_plan(&catalog));
        tracing::debug!(outcome = ?selection.outcome, "Tier selection finished");

        if self.args.json {
            let report = CheckReport {
                snapshot: &source.snapshot,
                selection: &selection,
                narration: selection.outcome.narration(),
                drivers: guidance.as_ref(),
            };
            ui.message(&to_json(&report)?);
            return Ok(exit_for(selection.outcome.is_capable()));
        }

        let narration = selection.outcome.narration();
        match selection.outcome {
            Outcome::FullyCapable => ui.success(narration),
            Outcome::CapableSuboptimal | Outcome::FallbackEngineOnly => ui.warning(narration),
            Outcome::Incapable => {
                ui.error(narration);
                for deficiency in &selection.deficiencies {
                    ui.message(&format!("  - {}", deficiency));
                }
            }
        }

        if let Some(guidance) = &guidance {
            if shows_hints(ui) {
                show_guidance(guidance, ui);
            }
        }

        if self.args.details || ui.output_mode() == OutputMode::Verbose {
            ui.message("");
            ui.message(&detailed_report(
                &source.snapshot,
                &catalog,
                &selection,
                guidance.as_ref(),
            ));
        }

        Ok(exit_for(selection.outcome.is_capable()))
    }

    fn check_tier(
        &self,
        name: &str,
        catalog: &TierCatalog,
        source: &SnapshotSource,
        guidance: Option<&DriverGuidance>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let (id, tier) = catalog.resolve(name)?;
        let deficiencies = validate(&source.snapshot, &tier);
        tracing::debug!(tier = %id, count = deficiencies.len(), "Validated single tier");

        if self.args.json {
            let report = TierReport {
                snapshot: &source.snapshot,
                tier: id.to_string(),
                satisfied: deficiencies.is_empty(),
                deficiencies: &deficiencies,
            };
            ui.message(&to_json(&report)?);
            return Ok(exit_for(deficiencies.is_empty()));
        }

        if deficiencies.is_empty() {
            ui.success(&format!("Your system meets the {} requirements.", id));
        } else {
            ui.error(&format!("Your system does not meet the {} requirements:", id));
            for deficiency in &deficiencies {
                ui.message(&format!("  - {}", deficiency));
            }
        }

        if let Some(guidance) = guidance {
            if shows_hints(ui) {
                show_guidance(guidance, ui);
            }
        }

        if self.args.details || ui.output_mode() == OutputMode::Verbose {
            ui.message("");
            ui.message(&format!("{} requirements: {}", id, tier));
        }

        Ok(exit_for(deficiencies.is_empty()))
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let source = SnapshotSource::resolve(self.args.snapshot.as_deref(), &self.config)?;
        self.evaluate(&source, ui)
    }
}

pub(crate) fn show_guidance(guidance: &DriverGuidance, ui: &mut dyn UserInterface) {
    if guidance.needs_attention() {
        ui.warning(&guidance.summary);
    } else {
        ui.message(&guidance.summary);
    }
}

fn shows_hints(ui: &dyn UserInterface) -> bool {
    !matches!(ui.output_mode(), OutputMode::Quiet | OutputMode::Silent)
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| RigcheckError::Other(e.into()))
}

fn exit_for(ok: bool) -> CommandResult {
    if ok {
        CommandResult::success()
    } else {
        CommandResult::failure(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use crate::ui::MockUI;
    use std::path::Path;

    const GPU: &str = "Dedicated GPU found: NVIDIA GeForce RTX 3070 (driver 535.54)";
    const NO_GPU: &str = "No dedicated GPU found";

    fn snapshot(cpu: &str, ram: &str, disk: &str, gpu: &str) -> SnapshotSource {
        SnapshotSource::recorded(RawSnapshot::new(cpu, ram, disk, "Linux 6.8.0", gpu))
    }

    fn run(source: &SnapshotSource, args: CheckArgs) -> (CommandResult, MockUI) {
        run_with(RigcheckConfig::default(), source, args)
    }

    fn run_with(
        config: RigcheckConfig,
        source: &SnapshotSource,
        args: CheckArgs,
    ) -> (CommandResult, MockUI) {
        let mut ui = MockUI::new();
        let result = CheckCommand::new(config, args)
            .evaluate(source, &mut ui)
            .unwrap();
        (result, ui)
    }

    #[test]
    fn fully_capable() {
        let source = snapshot("Ryzen 7 (8 cores)", "16 GB", "200 GB free", GPU);
        let (result, ui) = run(&source, CheckArgs::default());

        assert!(result.success);
        assert!(ui.has_success("Yes, your system can run Unreal Engine 5!"));
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn capable_suboptimal_without_gpu() {
        let source = snapshot("Ryzen 7 (8 cores)", "16 GB", "200 GB free", NO_GPU);
        let (result, ui) = run(&source, CheckArgs::default());

        assert!(result.success);
        assert!(ui.has_warning("may not perform optimally"));
    }

    #[test]
    fn fallback_to_unreal4() {
        let source = snapshot("Ryzen 7 (8 cores)", "16 GB", "60 GB free", NO_GPU);
        let (result, ui) = run(&source, CheckArgs::default());

        assert!(result.success);
        assert!(ui.has_warning("Your system can run Unreal Engine 4, but not Unreal Engine 5."));
    }

    #[test]
    fn incapable_lists_deficiencies() {
        let source = snapshot("Old CPU (1 cores)", "2 GB", "10 GB free", NO_GPU);
        let (result, ui) = run(&source, CheckArgs::default());

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("No, your system cannot run Unreal Engine 4 or 5."));
        assert!(ui.has_message("  - CPU does not meet the requirement (2 cores)."));
        assert!(ui.has_message("  - Not enough RAM (at least 4 GB required)."));
        assert!(ui.has_message("  - Not enough disk space (at least 50 GB required)."));
    }

    #[test]
    fn recorded_snapshot_has_no_driver_summary() {
        let source = snapshot("Ryzen 7 (8 cores)", "16 GB", "200 GB free", GPU);
        let (_, ui) = run(&source, CheckArgs::default());

        assert!(ui.messages().is_empty());
    }

    #[test]
    fn details_print_report() {
        let source = snapshot("Ryzen 7 (8 cores)", "16 GB", "60 GB free", NO_GPU);
        let args = CheckArgs {
            details: true,
            ..Default::default()
        };
        let (_, ui) = run(&source, args);

        assert!(ui.has_message("--- Current System Specs ---"));
        assert!(ui.has_message("--- Unreal Engine 5 Requirements ---"));
    }

    #[test]
    fn json_output_flattens_selection() {
        let source = snapshot("Ryzen 7 (8 cores)", "16 GB", "60 GB free", NO_GPU);
        let args = CheckArgs {
            json: true,
            ..Default::default()
        };
        let (result, ui) = run(&source, args);

        assert!(result.success);
        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["outcome"], "fallback_engine_only");
        assert_eq!(value["satisfied"], "unreal4-minimum");
        assert_eq!(value["snapshot"]["Disk Space"], "60 GB free");
        assert!(value.get("drivers").is_none());
    }

    #[test]
    fn single_tier_pass() {
        let source = snapshot("Ryzen 7 (8 cores)", "16 GB", "60 GB free", NO_GPU);
        let args = CheckArgs {
            tier: Some("unreal4-minimum".to_string()),
            ..Default::default()
        };
        let (result, ui) = run(&source, args);

        assert!(result.success);
        assert!(ui.has_success("unreal4-minimum"));
    }

    #[test]
    fn single_tier_failure() {
        let source = snapshot("Ryzen 7 (8 cores)", "16 GB", "60 GB free", NO_GPU);
        let args = CheckArgs {
            tier: Some("unreal5-recommended".to_string()),
            ..Default::default()
        };
        let (result, ui) = run(&source, args);

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_message("Not enough disk space (at least 100 GB required)."));
        assert!(ui.has_message("No dedicated GPU found (required for Unreal Engine)."));
    }

    #[test]
    fn unknown_tier_is_an_error() {
        let source = snapshot("Ryzen 7 (8 cores)", "16 GB", "60 GB free", NO_GPU);
        let args = CheckArgs {
            tier: Some("unreal3-minimum".to_string()),
            ..Default::default()
        };
        let mut ui = MockUI::new();
        let result = CheckCommand::new(RigcheckConfig::default(), args).evaluate(&source, &mut ui);

        assert!(matches!(result, Err(RigcheckError::UnknownTier { .. })));
    }

    #[test]
    fn config_overrides_change_outcome() {
        let config = parse_config(
            "tiers:\n  unreal5:\n    minimum:\n      disk_gb: 50\n",
            Path::new("rig.yml"),
        )
        .unwrap();
        let source = snapshot("Ryzen 7 (8 cores)", "16 GB", "60 GB free", NO_GPU);
        let (_, ui) = run_with(config, &source, CheckArgs::default());

        assert!(ui.has_warning("may not perform optimally"));
    }

    #[test]
    fn unparseable_fields_are_deficiencies() {
        let source = snapshot("Mystery CPU", "lots", "200 GB free", GPU);
        let (result, ui) = run(&source, CheckArgs::default());

        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.messages().len(), 2);
    }

    #[test]
    fn live_host_shows_driver_summary() {
        let source = SnapshotSource {
            live: true,
            ..snapshot("Ryzen 7 (8 cores)", "16 GB", "200 GB free", NO_GPU)
        };
        let (_, ui) = run(&source, CheckArgs::default());

        assert!(ui.has_message("No GPU detected"));
    }

    #[test]
    fn quiet_mode_hides_driver_summary() {
        let source = SnapshotSource {
            live: true,
            ..snapshot("Ryzen 7 (8 cores)", "16 GB", "200 GB free", NO_GPU)
        };
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        CheckCommand::new(RigcheckConfig::default(), CheckArgs::default())
            .evaluate(&source, &mut ui)
            .unwrap();

        assert!(ui.messages().is_empty());
        assert_eq!(ui.warnings().len(), 1);
    }
}
