//! Configuration loading, parsing, and validation for rigcheck.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use rigcheck::config::parse_config;
//! use std::path::Path;
//!
//! let config = parse_config(
//!     "tiers:\n  unreal5:\n    minimum:\n      disk_gb: 80\n",
//!     Path::new("config.yml"),
//! )
//! .unwrap();
//! assert_eq!(config.catalog().resolve("unreal5-minimum").unwrap().1.disk_gb, 80.0);
//! ```
//!
//! # Configuration File Locations
//!
//! 1. User global config (`~/.rigcheck/config.yml`)
//! 2. Explicit file (`--config <FILE>`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{
    load_config, load_config_file, load_config_value, load_from_paths, parse_config, ConfigPaths,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{
    DriversConfig, EngineTiersConfig, InstallConfig, ProbeConfig, RigcheckConfig, TierOverride,
    TiersConfig, DEFAULT_ML_PACKAGES,
};
pub use validator::{ensure_valid, validate_config, ValidationError};
