//! Install command implementation.
//!
//! The `rigcheck install` command bootstraps a Python game-development
//! environment: it checks for Python, then installs PyGame and the AI/ML
//! package set with pip.

use crate::cli::args::InstallArgs;
use crate::config::RigcheckConfig;
use crate::error::{Result, RigcheckError};
use crate::installer::{
    default_context, run_install, InstallOptions, InstallTarget, InstallerContext,
};
use crate::ui::{Prompt, PromptOption, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand {
    config: RigcheckConfig,
    args: InstallArgs,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(config: RigcheckConfig, args: InstallArgs) -> Self {
        Self { config, args }
    }

    fn options(&self) -> InstallOptions {
        InstallOptions {
            assume_yes: self.args.yes,
            dry_run: self.args.dry_run,
            python: self.config.install.python.clone(),
            ml_packages: self.config.ml_packages(),
        }
    }

    fn target(&self, ui: &mut dyn UserInterface) -> Result<InstallTarget> {
        if let Some(target) = self.args.target {
            return Ok(target);
        }

        let prompt = Prompt::select(
            "install_target",
            "What would you like to set up?",
            vec![
                PromptOption::new("Everything", InstallTarget::All.key()),
                PromptOption::new("Check Python only", InstallTarget::Python.key()),
                PromptOption::new("PyGame", InstallTarget::Pygame.key()),
                PromptOption::new("AI/ML packages", InstallTarget::Ml.key()),
            ],
            InstallTarget::All.key(),
        );
        let answer = ui.prompt(&prompt)?.as_string();
        InstallTarget::from_key(&answer).ok_or_else(|| RigcheckError::ConfigValidationError {
            message: format!("Unknown install target '{}'", answer),
        })
    }

    /// Run the bootstrap against the given host context.
    pub fn execute_with(
        &self,
        ui: &mut dyn UserInterface,
        ctx: &InstallerContext<'_>,
    ) -> Result<CommandResult> {
        let target = self.target(ui)?;

        let summary = match run_install(target, ui, ctx, &self.options()) {
            Ok(summary) => summary,
            Err(RigcheckError::RequirementMissing { requirement, .. }) => {
                tracing::debug!(requirement = %requirement, "Install stopped");
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        if !summary.steps.is_empty() {
            ui.show_header("Summary");
            for (step, status) in &summary.steps {
                ui.message(&format!("{}: {}", step, status));
            }
        }

        if summary.has_failures() {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = default_context(ui.output_mode().shows_command_output());
        self.execute_with(ui, &ctx)
    }
}
