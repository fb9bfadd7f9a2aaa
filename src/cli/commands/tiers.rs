//! Tiers command implementation.
//!
//! The `rigcheck tiers` command prints the requirement tiers in effect after
//! configuration overrides.

use serde::Serialize;

use crate::cli::args::TiersArgs;
use crate::config::RigcheckConfig;
use crate::error::Result;
use crate::requirements::RequirementTier;
use crate::ui::{Table, UserInterface};

use super::check::to_json;
use super::dispatcher::{Command, CommandResult};

/// The tiers command implementation.
pub struct TiersCommand {
    config: RigcheckConfig,
    args: TiersArgs,
}

#[derive(Serialize)]
struct TierEntry<'a> {
    name: String,
    #[serde(flatten)]
    tier: &'a RequirementTier,
}

impl TiersCommand {
    /// Create a new tiers command.
    pub fn new(config: RigcheckConfig, args: TiersArgs) -> Self {
        Self { config, args }
    }
}

impl Command for TiersCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let catalog = self.config.catalog();

        if self.args.json {
            let entries: Vec<_> = catalog
                .iter()
                .map(|(id, tier)| TierEntry {
                    name: id.to_string(),
                    tier,
                })
                .collect();
            ui.message(&to_json(&entries)?);
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(&["Tier", "CPU cores", "RAM", "Disk free", "Dedicated GPU"]);
        for (id, tier) in catalog.iter() {
            table.add_row(&[
                id.to_string(),
                tier.cpu_cores.to_string(),
                format!("{} GB", tier.ram_gb),
                format!("{} GB", tier.disk_gb),
                if tier.dedicated_gpu { "yes" } else { "no" }.to_string(),
            ]);
        }

        ui.show_header("Requirement tiers");
        ui.message(&table.render());

        let overridden = self.config.tier_overrides();
        if !overridden.is_empty() {
            let names: Vec<_> = overridden.iter().map(|(id, _)| id.to_string()).collect();
            ui.message(&format!("Overridden by config: {}", names.join(", ")));
        }

        Ok(CommandResult::success())
    }
}
