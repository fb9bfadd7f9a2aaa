//! Specs command implementation.

use crate::cli::args::SpecsArgs;
use crate::config::RigcheckConfig;
use crate::error::Result;
use crate::ui::UserInterface;

use super::check::to_json;
use super::dispatcher::{Command, CommandResult};
use super::source::SnapshotSource;

/// Prints the hardware snapshot.
pub struct SpecsCommand {
    config: RigcheckConfig,
    args: SpecsArgs,
}

impl SpecsCommand {
    pub fn new(config: RigcheckConfig, args: SpecsArgs) -> Self {
        Self { config, args }
    }

    pub fn show(&self, source: &SnapshotSource, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            ui.message(&to_json(&source.snapshot)?);
            return Ok(CommandResult::success());
        }

        ui.show_header("Current System Specs");
        for (key, value) in source.snapshot.entries() {
            ui.message(&format!("{}: {}", key, value));
        }
        Ok(CommandResult::success())
    }
}

impl Command for SpecsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let source = SnapshotSource::resolve(self.args.snapshot.as_deref(), &self.config)?;
        self.show(&source, ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::RawSnapshot;
    use crate::ui::MockUI;

    fn source() -> SnapshotSource {
        SnapshotSource::recorded(RawSnapshot::new(
            "Intel Core i5-9400F (6 cores)",
            "15.55 GB",
            "87.2 GB free",
            "Windows 10",
            "Dedicated GPU found: NVIDIA GeForce GTX 1660",
        ))
    }

    #[test]
    fn lists_fields_in_order() {
        let mut ui = MockUI::new();
        SpecsCommand::new(RigcheckConfig::default(), SpecsArgs::default())
            .show(&source(), &mut ui)
            .unwrap();

        assert_eq!(ui.headers(), ["Current System Specs"]);
        assert_eq!(
            ui.messages(),
            [
                "CPU: Intel Core i5-9400F (6 cores)",
                "RAM: 15.55 GB",
                "Disk Space: 87.2 GB free",
                "OS: Windows 10",
                "GPU: Dedicated GPU found: NVIDIA GeForce GTX 1660",
            ]
        );
    }

    #[test]
    fn json_uses_snapshot_keys() {
        let mut ui = MockUI::new();
        let args = SpecsArgs {
            json: true,
            ..Default::default()
        };
        SpecsCommand::new(RigcheckConfig::default(), args)
            .show(&source(), &mut ui)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["CPU"], "Intel Core i5-9400F (6 cores)");
        assert_eq!(value["Disk Space"], "87.2 GB free");
    }
}
