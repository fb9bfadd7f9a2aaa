//! Where a command's hardware snapshot comes from.

use std::path::Path;

use crate::config::RigcheckConfig;
use crate::error::Result;
use crate::hardware::{RawSnapshot, SpecProbe};

/// A snapshot together with its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotSource {
    pub snapshot: RawSnapshot,
    /// True when the snapshot was probed from this machine.
    pub live: bool,
}

impl SnapshotSource {
    /// A recorded snapshot.
    pub fn recorded(snapshot: RawSnapshot) -> Self {
        Self {
            snapshot,
            live: false,
        }
    }

    /// Load `path` when given, otherwise probe the host.
    pub fn resolve(path: Option<&Path>, config: &RigcheckConfig) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading recorded snapshot");
                Ok(Self::recorded(RawSnapshot::load(path)?))
            }
            None => {
                let snapshot = SpecProbe::new(config.disk_path()).run().to_raw();
                Ok(Self {
                    snapshot,
                    live: true,
                })
            }
        }
    }
}
