//! Drivers command implementation.

use crate::cli::args::DriversArgs;
use crate::config::RigcheckConfig;
use crate::error::Result;
use crate::requirements::driver_guidance;
use crate::ui::UserInterface;

use super::check::show_guidance;
use super::dispatcher::{Command, CommandResult};
use super::source::SnapshotSource;

/// Prints GPU driver guidance.
pub struct DriversCommand {
    config: RigcheckConfig,
    args: DriversArgs,
}

impl DriversCommand {
    pub fn new(config: RigcheckConfig, args: DriversArgs) -> Self {
        Self { config, args }
    }

    pub fn show(&self, source: &SnapshotSource, ui: &mut dyn UserInterface) -> CommandResult {
        let gpu = source.snapshot.gpu_info();
        let guidance = driver_guidance(gpu.as_ref(), &self.config.driver_minimums());

        ui.message(guidance.detail.trim());
        ui.message("");
        show_guidance(&guidance, ui);
        CommandResult::success()
    }
}

impl Command for DriversCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let source = SnapshotSource::resolve(self.args.snapshot.as_deref(), &self.config)?;
        Ok(self.show(&source, ui))
    }
}
