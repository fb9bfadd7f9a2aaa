//! Host snapshot types.
//!
//! A snapshot exists in three shapes:
//!
//! - [`SystemSnapshot`] - typed values with units, produced by the probe
//! - [`RawSnapshot`] - the string-encoded form with fixed keys (`CPU`, `RAM`,
//!   `Disk Space`, `OS`, `GPU`), used for display, `--json` output and
//!   recorded snapshot files
//! - [`HostReading`] - the parsed view the validator consumes
//!
//! [`RawSnapshot::read`] is the only place where string parsing happens.
//! A field that fails to parse becomes a [`FieldParseError`] inside the
//! reading rather than an error of the whole conversion.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{Result, RigcheckError};

use super::gpu::{GpuInfo, GpuVendor};

/// Substring that marks a GPU field as "no dedicated GPU".
pub const NO_DEDICATED_GPU: &str = "No dedicated GPU";

/// Exact GPU field value the probe emits when no dedicated GPU exists.
pub const NO_DEDICATED_GPU_FOUND: &str = "No dedicated GPU found";

/// GPU state as seen by the probe.
#[derive(Debug, Clone, PartialEq)]
pub enum GpuStatus {
    /// No dedicated adapter (integrated graphics or nothing at all).
    NotFound,
    /// A dedicated adapter was found.
    Dedicated(GpuInfo),
}

impl GpuStatus {
    /// The adapter, if one was found.
    pub fn gpu(&self) -> Option<&GpuInfo> {
        match self {
            GpuStatus::NotFound => None,
            GpuStatus::Dedicated(info) => Some(info),
        }
    }
}

impl fmt::Display for GpuStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuStatus::NotFound => f.write_str(NO_DEDICATED_GPU_FOUND),
            GpuStatus::Dedicated(info) => {
                write!(f, "Dedicated GPU found: {}", info.name)?;
                if let Some(driver) = &info.driver_version {
                    write!(f, " (driver {})", driver)?;
                }
                Ok(())
            }
        }
    }
}

/// Typed snapshot of host capabilities.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemSnapshot {
    /// Processor brand string.
    pub cpu_name: String,
    /// Physical core count.
    pub cpu_cores: u32,
    /// Total memory in gigabytes.
    pub ram_gb: f64,
    /// Free space on the probed filesystem in gigabytes.
    pub disk_free_gb: f64,
    /// Operating system name and release.
    pub os: String,
    /// Dedicated GPU state.
    pub gpu: GpuStatus,
}

impl SystemSnapshot {
    /// Encode into the fixed-key string form.
    pub fn to_raw(&self) -> RawSnapshot {
        RawSnapshot {
            cpu: format!("{} ({} cores)", self.cpu_name, self.cpu_cores),
            ram: format!("{} GB", round2(self.ram_gb)),
            disk_space: format!("{} GB free", round2(self.disk_free_gb)),
            os: self.os.clone(),
            gpu: self.gpu.to_string(),
        }
    }

    /// Typed values read directly, with no parsing involved.
    pub fn reading(&self) -> HostReading {
        HostReading {
            cpu_cores: Ok(self.cpu_cores),
            ram_gb: Ok(self.ram_gb),
            disk_free_gb: Ok(self.disk_free_gb),
            dedicated_gpu: matches!(self.gpu, GpuStatus::Dedicated(_)),
        }
    }
}

/// Round to two decimals, the precision snapshots are reported with.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// String-encoded snapshot with fixed keys.
///
/// Every key is mandatory: a recorded snapshot missing one fails to
/// deserialize instead of producing a partial report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSnapshot {
    /// Processor name, optionally ending in `(N cores)`.
    #[serde(rename = "CPU")]
    pub cpu: String,
    /// Total memory, leading token in gigabytes (`"16 GB"`).
    #[serde(rename = "RAM")]
    pub ram: String,
    /// Free disk space, leading token in gigabytes (`"120.5 GB free"`).
    #[serde(rename = "Disk Space")]
    pub disk_space: String,
    /// Operating system.
    #[serde(rename = "OS")]
    pub os: String,
    /// GPU description or the no-dedicated-GPU sentinel.
    #[serde(rename = "GPU")]
    pub gpu: String,
}

impl RawSnapshot {
    /// Build a snapshot from its five encoded fields.
    pub fn new(
        cpu: impl Into<String>,
        ram: impl Into<String>,
        disk_space: impl Into<String>,
        os: impl Into<String>,
        gpu: impl Into<String>,
    ) -> Self {
        Self {
            cpu: cpu.into(),
            ram: ram.into(),
            disk_space: disk_space.into(),
            os: os.into(),
            gpu: gpu.into(),
        }
    }

    /// Load a recorded snapshot from a JSON or YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str(&content).map_err(|e| e.to_string())
        };

        parsed.map_err(|message| RigcheckError::SnapshotParseError {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Key/value pairs in display order.
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("CPU", &self.cpu),
            ("RAM", &self.ram),
            ("Disk Space", &self.disk_space),
            ("OS", &self.os),
            ("GPU", &self.gpu),
        ]
    }

    /// Recover the adapter from a `Dedicated GPU found: <name> (driver <v>)` field.
    pub fn gpu_info(&self) -> Option<GpuInfo> {
        if self.gpu.contains(NO_DEDICATED_GPU) {
            return None;
        }
        let description = self.gpu.trim();
        let description = description
            .strip_prefix("Dedicated GPU found:")
            .unwrap_or(description)
            .trim();
        if description.is_empty() {
            return None;
        }

        let (name, driver_version) = match description.rsplit_once(" (driver ") {
            Some((name, rest)) => (name, Some(rest.trim_end_matches(')').trim().to_string())),
            None => (description, None),
        };
        Some(GpuInfo {
            vendor: GpuVendor::from_name(name),
            name: name.to_string(),
            driver_version: driver_version.filter(|v| !v.is_empty()),
        })
    }

    /// Parse the numeric fields.
    pub fn read(&self) -> HostReading {
        HostReading {
            cpu_cores: parse_core_count(&self.cpu).ok_or_else(|| FieldParseError {
                field: SnapshotField::CpuCores,
                raw: self.cpu.clone(),
            }),
            ram_gb: parse_gigabytes(&self.ram).ok_or_else(|| FieldParseError {
                field: SnapshotField::Ram,
                raw: self.ram.clone(),
            }),
            disk_free_gb: parse_gigabytes(&self.disk_space).ok_or_else(|| FieldParseError {
                field: SnapshotField::DiskSpace,
                raw: self.disk_space.clone(),
            }),
            dedicated_gpu: !self.gpu.contains(NO_DEDICATED_GPU),
        }
    }
}

impl From<&SystemSnapshot> for RawSnapshot {
    fn from(snapshot: &SystemSnapshot) -> Self {
        snapshot.to_raw()
    }
}

/// Extract the core count from a CPU field.
///
/// Takes the text after the last `(` (or the whole field when there is
/// none) and parses its first space-delimited token.
pub fn parse_core_count(raw: &str) -> Option<u32> {
    let tail = raw.rsplit('(').next().unwrap_or(raw);
    tail.split(' ').next()?.parse().ok()
}

/// Parse the leading space-delimited token as gigabytes.
pub fn parse_gigabytes(raw: &str) -> Option<f64> {
    raw.split(' ')
        .next()?
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Numeric snapshot field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotField {
    CpuCores,
    Ram,
    DiskSpace,
}

impl fmt::Display for SnapshotField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SnapshotField::CpuCores => "CPU core count",
            SnapshotField::Ram => "RAM",
            SnapshotField::DiskSpace => "disk space",
        })
    }
}

/// A numeric field whose encoding could not be read.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Unable to parse {field} from '{raw}'.")]
pub struct FieldParseError {
    /// Which field failed.
    pub field: SnapshotField,
    /// The encoded value as received.
    pub raw: String,
}

/// Parsed view of a snapshot, as consumed by the validator.
#[derive(Debug, Clone, PartialEq)]
pub struct HostReading {
    pub cpu_cores: std::result::Result<u32, FieldParseError>,
    pub ram_gb: std::result::Result<f64, FieldParseError>,
    pub disk_free_gb: std::result::Result<f64, FieldParseError>,
    pub dedicated_gpu: bool,
}
