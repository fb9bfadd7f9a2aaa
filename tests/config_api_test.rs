//! Integration tests for config module public API.

use rigcheck::config::{
    load_from_paths, validate_config, ConfigPaths, RigcheckConfig, DEFAULT_ML_PACKAGES,
};
use rigcheck::requirements::TierCatalog;
use rigcheck::RigcheckError;
use std::fs;
use tempfile::TempDir;

#[test]
fn public_api_is_accessible() {
    let config = RigcheckConfig::default();
    assert_eq!(config.catalog(), TierCatalog::builtin());
    assert_eq!(config.ml_packages().len(), DEFAULT_ML_PACKAGES.len());
    assert!(validate_config(&config).is_empty());
}

#[test]
fn config_merge_workflow() {
    let temp = TempDir::new().unwrap();
    let global = temp.path().join("global.yml");
    let explicit = temp.path().join("rig.yml");

    fs::write(
        &global,
        r#"
tiers:
  unreal5:
    minimum:
      cpu_cores: 4
      disk_gb: 120
drivers:
  nvidia: "470.00"
install:
  python: python3
"#,
    )
    .unwrap();

    fs::write(
        &explicit,
        r#"
tiers:
  unreal5:
    minimum:
      disk_gb: 90
install:
  python: ~
  ml_packages: [numpy]
"#,
    )
    .unwrap();

    let paths = ConfigPaths {
        user_global: Some(global),
        explicit: Some(explicit),
    };
    let config = load_from_paths(&paths).unwrap();

    let (_, ue5_min) = config.catalog().resolve("unreal5-minimum").unwrap();
    // Sibling key from the global file survives
    assert_eq!(ue5_min.cpu_cores, 4);
    // Explicit file wins
    assert_eq!(ue5_min.disk_gb, 90.0);
    assert_eq!(config.driver_minimums().nvidia, "470.00");
    // Null removes the inherited value
    assert_eq!(config.install.python, None);
    assert_eq!(config.ml_packages(), vec!["numpy".to_string()]);
}

#[test]
fn invalid_values_are_rejected_after_merge() {
    let temp = TempDir::new().unwrap();
    let explicit = temp.path().join("rig.yml");
    fs::write(
        &explicit,
        "drivers:\n  amd: \"  \"\ninstall:\n  ml_packages: [numpy, \"\"]\n",
    )
    .unwrap();

    let paths = ConfigPaths {
        user_global: None,
        explicit: Some(explicit),
    };
    match load_from_paths(&paths) {
        Err(RigcheckError::ConfigValidationError { message }) => {
            assert!(message.contains("; "), "expected two errors in {}", message);
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn probe_path_is_configurable() {
    let temp = TempDir::new().unwrap();
    let explicit = temp.path().join("rig.yml");
    fs::write(&explicit, "probe:\n  disk_path: /data\n").unwrap();

    let paths = ConfigPaths {
        user_global: None,
        explicit: Some(explicit),
    };
    let config = load_from_paths(&paths).unwrap();

    assert_eq!(config.disk_path(), std::path::PathBuf::from("/data"));
}
