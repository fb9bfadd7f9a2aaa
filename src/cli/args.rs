//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::installer::InstallTarget;

/// rigcheck - Unreal Engine hardware check and dev environment bootstrap.
#[derive(Debug, Parser)]
#[command(name = "rigcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ~/.rigcheck/config.yml field by field)
    #[arg(short, long, global = true, env = "RIGCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output (twice: errors only)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check which Unreal Engine version this machine can run (default)
    Check(CheckArgs),

    /// Show the hardware snapshot
    Specs(SpecsArgs),

    /// Show the effective requirement tiers
    Tiers(TiersArgs),

    /// Show GPU driver guidance
    Drivers(DriversArgs),

    /// Set up Python, PyGame and AI/ML packages
    Install(InstallArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Evaluate a recorded snapshot (JSON or YAML) instead of this machine
    #[arg(short, long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Validate against a single tier (e.g. unreal5-minimum)
    #[arg(short, long, value_name = "NAME")]
    pub tier: Option<String>,

    /// Print the detailed report
    #[arg(short, long)]
    pub details: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `specs` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SpecsArgs {
    /// Show a recorded snapshot (JSON or YAML) instead of this machine
    #[arg(short, long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `tiers` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TiersArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `drivers` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DriversArgs {
    /// Read the GPU from a recorded snapshot instead of this machine
    #[arg(short, long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// What to set up (prompts when omitted)
    #[arg(value_enum)]
    pub target: Option<InstallTarget>,

    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Print the commands without running them
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["rigcheck"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn check_flags() {
        let cli = Cli::try_parse_from([
            "rigcheck",
            "check",
            "--snapshot",
            "host.json",
            "--tier",
            "unreal4-minimum",
            "--details",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Check(args)) => {
                assert_eq!(args.snapshot, Some(PathBuf::from("host.json")));
                assert_eq!(args.tier.as_deref(), Some("unreal4-minimum"));
                assert!(args.details);
                assert!(args.json);
            }
            other => panic!("expected check, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["rigcheck", "tiers", "--config", "rig.yml", "-qq"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("rig.yml")));
        assert_eq!(cli.quiet, 2);
    }

    #[test]
    fn install_target_parses() {
        let cli = Cli::try_parse_from(["rigcheck", "install", "pygame", "-y", "--dry-run"]).unwrap();
        match cli.command {
            Some(Commands::Install(args)) => {
                assert_eq!(args.target, Some(InstallTarget::Pygame));
                assert!(args.yes);
                assert!(args.dry_run);
            }
            other => panic!("expected install, got {:?}", other),
        }
    }

    #[test]
    fn unknown_install_target_is_rejected() {
        assert!(Cli::try_parse_from(["rigcheck", "install", "numpy"]).is_err());
    }

    #[test]
    fn completions_shell_parses() {
        let cli = Cli::try_parse_from(["rigcheck", "completions", "zsh"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completions(CompletionsArgs { shell: Shell::Zsh }))
        ));
    }
}
