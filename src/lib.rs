//! rigcheck - Unreal Engine hardware check and dev environment bootstrap.
//!
//! rigcheck reads the local hardware, compares it against the Unreal
//! Engine 5 and Unreal Engine 4 requirement tiers, and reports which engine
//! the machine can run. It can also set up a Python game-development
//! environment (PyGame and an AI/ML package set).
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and validation
//! - [`error`] - Error types and result aliases
//! - [`hardware`] - Host probing and the snapshot wire format
//! - [`installer`] - Python, PyGame and AI/ML package bootstrap
//! - [`requirements`] - Requirement tiers, validation and tier selection
//! - [`shell`] - Process execution and platform helpers
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use rigcheck::hardware::RawSnapshot;
//! use rigcheck::requirements::{default_plan, select, Outcome, TierCatalog};
//!
//! let snapshot = RawSnapshot::new(
//!     "AMD Ryzen 5 3600 (6 cores)",
//!     "16 GB",
//!     "250 GB free",
//!     "Linux 6.8.0",
//!     "Dedicated GPU found: NVIDIA GeForce RTX 2060",
//! );
//! let selection = select(&snapshot.read(), &default_plan(&TierCatalog::builtin()));
//! assert_eq!(selection.outcome, Outcome::FullyCapable);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod hardware;
pub mod installer;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{Result, RigcheckError};
