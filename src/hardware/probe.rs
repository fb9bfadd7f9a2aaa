//! Host probe.
//!
//! Reads CPU, memory, disk, OS and GPU information and returns a typed
//! [`SystemSnapshot`]. Probe failures never surface as errors: each reading
//! degrades to a value the validator understands (`"Unknown CPU"`, zero
//! gigabytes, the no-dedicated-GPU sentinel) and the fallback is logged.
//!
//! # Example
//!
//! ```no_run
//! use rigcheck::hardware::SpecProbe;
//!
//! let snapshot = SpecProbe::default().run();
//! println!("{} cores", snapshot.cpu_cores);
//! ```

use std::path::{Path, PathBuf};

use sysinfo::System;

use super::gpu;
use super::snapshot::{GpuStatus, SystemSnapshot};

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Reads a snapshot of the current host.
#[derive(Debug, Clone)]
pub struct SpecProbe {
    disk_path: PathBuf,
}

impl Default for SpecProbe {
    fn default() -> Self {
        Self::new(default_disk_path())
    }
}

impl SpecProbe {
    /// Create a probe measuring free space on the filesystem holding `disk_path`.
    pub fn new(disk_path: impl Into<PathBuf>) -> Self {
        Self {
            disk_path: disk_path.into(),
        }
    }

    /// Path whose filesystem free space is reported.
    pub fn disk_path(&self) -> &Path {
        &self.disk_path
    }

    /// Probe the host.
    pub fn run(&self) -> SystemSnapshot {
        let mut sys = System::new_all();
        sys.refresh_all();

        let cpu_name = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty())
            .unwrap_or_else(|| "Unknown CPU".to_string());
        let cpu_cores = num_cpus::get_physical() as u32;

        let ram_gb = sys.total_memory() as f64 / BYTES_PER_GB;
        let disk_free_gb = self.free_disk_gb();
        let os = os_description();

        let gpu = match gpu::detect() {
            Some(info) => GpuStatus::Dedicated(info),
            None => GpuStatus::NotFound,
        };

        tracing::debug!(
            cpu = %cpu_name,
            cores = cpu_cores,
            ram_gb,
            disk_free_gb,
            os = %os,
            gpu = %gpu,
            "Probed host"
        );

        SystemSnapshot {
            cpu_name,
            cpu_cores,
            ram_gb,
            disk_free_gb,
            os,
            gpu,
        }
    }

    fn free_disk_gb(&self) -> f64 {
        match fs2::available_space(&self.disk_path) {
            Ok(bytes) => bytes as f64 / BYTES_PER_GB,
            Err(e) => {
                tracing::warn!(
                    "Could not read free space for {}: {}",
                    self.disk_path.display(),
                    e
                );
                0.0
            }
        }
    }
}

/// System name followed by kernel release, e.g. `Linux 6.8.0-45-generic`.
fn os_description() -> String {
    let name = System::name().unwrap_or_else(|| std::env::consts::OS.to_string());
    match System::kernel_version() {
        Some(release) => format!("{} {}", name, release),
        None => name,
    }
}

/// Root of the system drive.
pub fn default_disk_path() -> PathBuf {
    if cfg!(target_os = "windows") {
        let drive = std::env::var("SystemDrive").unwrap_or_else(|_| "C:".to_string());
        PathBuf::from(format!("{}\\", drive))
    } else {
        PathBuf::from("/")
    }
}
