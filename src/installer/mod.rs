//! Development environment bootstrap.
//!
//! Checks for a Python interpreter, then installs PyGame and the AI/ML
//! package set with pip. Every side effect goes through an
//! [`InstallerContext`], so tests can script the host.

pub mod packages;
pub mod python;
#[cfg(test)]
pub(crate) mod testing;

use std::fmt;

use crate::error::Result;
use crate::shell::{execute, execute_output, open_url, CommandOptions};
use crate::ui::{Prompt, UserInterface};

pub use packages::{install_ml, install_pygame, pip_install_args, pip_install_command};
pub use python::{find_python, parse_python_version, require_python, PythonInstall};

/// Mockable host operations for the installer.
pub struct InstallerContext<'a> {
    /// Run a program to completion, returning true on success.
    pub run_command: Box<dyn Fn(&str, &[&str]) -> bool + 'a>,
    /// Run a program and return its output if it succeeded.
    pub capture_output: Box<dyn Fn(&str, &[&str]) -> Option<String> + 'a>,
    /// Open a URL in the browser, returning true if a browser was launched.
    pub open_url: Box<dyn Fn(&str) -> bool + 'a>,
}

/// Build the `InstallerContext` that acts on the real host.
///
/// With `show_output` the output of pip is passed through to the terminal.
pub fn default_context(show_output: bool) -> InstallerContext<'static> {
    InstallerContext {
        run_command: Box::new(move |program: &str, args: &[&str]| {
            let options = CommandOptions {
                capture: !show_output,
                ..Default::default()
            };
            match execute(program, args, &options) {
                Ok(result) => {
                    if !result.success {
                        tracing::debug!(
                            code = ?result.exit_code,
                            output = %result.combined_output(),
                            "Install command failed"
                        );
                    }
                    result.success
                }
                Err(e) => {
                    tracing::debug!(error = %e, "Install command could not start");
                    false
                }
            }
        }),
        capture_output: Box::new(execute_output),
        open_url: Box::new(open_url),
    }
}

/// What `rigcheck install` should set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InstallTarget {
    /// Only check that Python is available
    Python,
    /// Install PyGame
    Pygame,
    /// Install the AI/ML package set
    Ml,
    /// Everything above
    All,
}

impl InstallTarget {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Pygame => "pygame",
            Self::Ml => "ml",
            Self::All => "all",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        [Self::Python, Self::Pygame, Self::Ml, Self::All]
            .into_iter()
            .find(|t| t.key() == key)
    }

    fn includes_pygame(&self) -> bool {
        matches!(self, Self::Pygame | Self::All)
    }

    fn includes_ml(&self) -> bool {
        matches!(self, Self::Ml | Self::All)
    }
}

/// Installer behavior switches.
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Answer yes to every confirmation.
    pub assume_yes: bool,
    /// Print commands without running them.
    pub dry_run: bool,
    /// Interpreter to use instead of searching.
    pub python: Option<String>,
    /// AI/ML packages to install.
    pub ml_packages: Vec<String>,
}

/// Result of one bootstrap step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Installed,
    Declined,
    DryRun,
    Failed,
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Installed => "installed",
            Self::Declined => "skipped",
            Self::DryRun => "dry run",
            Self::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Outcome of a bootstrap run.
#[derive(Debug, Clone, PartialEq)]
pub struct InstallSummary {
    pub python: PythonInstall,
    pub steps: Vec<(&'static str, StepStatus)>,
}

impl InstallSummary {
    pub fn has_failures(&self) -> bool {
        self.steps.iter().any(|(_, s)| *s == StepStatus::Failed)
    }
}

/// Ask a yes/no question unless `--yes` was given.
pub(crate) fn confirm(
    key: &str,
    question: &str,
    ui: &mut dyn UserInterface,
    options: &InstallOptions,
) -> Result<bool> {
    if options.assume_yes {
        return Ok(true);
    }
    let answer = ui.prompt(&Prompt::confirm(key, question, true))?;
    Ok(answer.as_bool().unwrap_or(false))
}

/// Run the bootstrap for `target`.
///
/// # Errors
///
/// Returns `RequirementMissing` when no Python interpreter is found.
pub fn run_install(
    target: InstallTarget,
    ui: &mut dyn UserInterface,
    ctx: &InstallerContext<'_>,
    options: &InstallOptions,
) -> Result<InstallSummary> {
    tracing::debug!(target = target.key(), dry_run = options.dry_run, "Starting install");

    let python = require_python(options.python.as_deref(), ui, ctx, !options.dry_run)?;
    let mut steps = Vec::new();

    if target.includes_pygame() {
        steps.push(("pygame", install_pygame(&python, ui, ctx, options)?));
    }
    if target.includes_ml() {
        steps.push(("ml", install_ml(&python, &options.ml_packages, ui, ctx, options)?));
    }

    Ok(InstallSummary { python, steps })
}
