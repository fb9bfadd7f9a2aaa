//! pip-based package installs.

use crate::shell::display_command;
use crate::ui::UserInterface;

use super::python::{show_link, PythonInstall};
use super::{confirm, InstallOptions, InstallerContext, StepStatus};

pub const PYGAME_GUIDE_URL: &str = "https://www.pygame.org/wiki/GettingStarted";
pub const PYGAME_SUCCESS_MESSAGE: &str = "PyGame has been successfully installed!";
pub const PYGAME_FAILURE_MESSAGE: &str = "Failed to install PyGame. Please try manually.";

/// Arguments for `<python> -m pip install <packages...>`.
pub fn pip_install_args(packages: &[String]) -> Vec<String> {
    ["-m", "pip", "install"]
        .iter()
        .map(|s| s.to_string())
        .chain(packages.iter().cloned())
        .collect()
}

/// Shell-style rendering of the pip command, for messages.
pub fn pip_install_command(python: &PythonInstall, packages: &[String]) -> String {
    let args = pip_install_args(packages);
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    display_command(&python.program, &args)
}

/// Confirm, then run pip for `packages`.
///
/// Returns `Declined` before touching the host when the user says no and
/// `DryRun` after printing the command in dry-run mode.
fn pip_install(
    python: &PythonInstall,
    packages: &[String],
    prompt_key: &str,
    question: &str,
    ui: &mut dyn UserInterface,
    ctx: &InstallerContext<'_>,
    options: &InstallOptions,
) -> crate::error::Result<StepStatus> {
    let command = pip_install_command(python, packages);

    if options.dry_run {
        ui.message(&format!("Would run: {}", command));
        return Ok(StepStatus::DryRun);
    }

    if !confirm(prompt_key, question, ui, options)? {
        ui.warning(&format!("Skipped: {}", command));
        return Ok(StepStatus::Declined);
    }

    let args = pip_install_args(packages);
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    tracing::info!(command = %command, "Installing packages");
    let mut spinner = ui.start_spinner(&format!("Running {}", command));
    if (ctx.run_command)(&python.program, &args) {
        spinner.finish_success(&format!("Installed {}", packages.join(", ")));
        Ok(StepStatus::Installed)
    } else {
        spinner.finish_error(&format!("{} failed", command));
        Ok(StepStatus::Failed)
    }
}

/// Install PyGame.
pub fn install_pygame(
    python: &PythonInstall,
    ui: &mut dyn UserInterface,
    ctx: &InstallerContext<'_>,
    options: &InstallOptions,
) -> crate::error::Result<StepStatus> {
    let status = pip_install(
        python,
        &["pygame".to_string()],
        "install_pygame",
        "Install PyGame?",
        ui,
        ctx,
        options,
    )?;

    match status {
        StepStatus::Installed => ui.success(PYGAME_SUCCESS_MESSAGE),
        StepStatus::Failed => {
            ui.error(PYGAME_FAILURE_MESSAGE);
            show_link(PYGAME_GUIDE_URL, ui, ctx, true);
        }
        StepStatus::Declined | StepStatus::DryRun => {}
    }
    Ok(status)
}

/// Install the AI/ML package set.
pub fn install_ml(
    python: &PythonInstall,
    packages: &[String],
    ui: &mut dyn UserInterface,
    ctx: &InstallerContext<'_>,
    options: &InstallOptions,
) -> crate::error::Result<StepStatus> {
    if packages.is_empty() {
        ui.warning("No AI/ML packages configured.");
        return Ok(StepStatus::Declined);
    }

    let question = format!("Install AI/ML packages ({})?", packages.join(", "));
    let status = pip_install(python, packages, "install_ml", &question, ui, ctx, options)?;

    match status {
        StepStatus::Installed => ui.success("AI/ML packages have been successfully installed!"),
        StepStatus::Failed => {
            ui.error("Failed to install AI/ML packages. Please try manually:");
            ui.message(&format!("  {}", pip_install_command(python, packages)));
        }
        StepStatus::Declined | StepStatus::DryRun => {}
    }
    Ok(status)
}
