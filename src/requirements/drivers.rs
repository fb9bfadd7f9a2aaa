//! GPU driver guidance.
//!
//! Compares the detected driver version against a per-vendor minimum and
//! points the user at the vendor's download page. Versions are compared as
//! plain strings; no attempt is made to interpret vendor numbering schemes.

use serde::{Deserialize, Serialize};

use crate::hardware::{GpuInfo, GpuVendor};

pub const MINIMUM_DRIVER_NVIDIA: &str = "456.38";
pub const MINIMUM_DRIVER_AMD: &str = "20.10.1";
pub const MINIMUM_DRIVER_INTEL: &str = "27.20.100.8587";

pub const DOWNLOAD_NVIDIA: &str = "https://www.nvidia.com/Download/index.aspx";
pub const DOWNLOAD_AMD: &str = "https://www.amd.com/en/support";
pub const DOWNLOAD_INTEL: &str = "https://www.intel.com/content/www/us/en/download-center/home.html";

/// Minimum driver version per vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverMinimums {
    pub nvidia: String,
    pub amd: String,
    pub intel: String,
}

impl Default for DriverMinimums {
    fn default() -> Self {
        Self {
            nvidia: MINIMUM_DRIVER_NVIDIA.to_string(),
            amd: MINIMUM_DRIVER_AMD.to_string(),
            intel: MINIMUM_DRIVER_INTEL.to_string(),
        }
    }
}

impl DriverMinimums {
    pub fn for_vendor(&self, vendor: GpuVendor) -> Option<&str> {
        match vendor {
            GpuVendor::Nvidia => Some(&self.nvidia),
            GpuVendor::Amd => Some(&self.amd),
            GpuVendor::Intel => Some(&self.intel),
            GpuVendor::Other => None,
        }
    }
}

/// Vendor driver download page.
pub fn download_url(vendor: GpuVendor) -> Option<&'static str> {
    match vendor {
        GpuVendor::Nvidia => Some(DOWNLOAD_NVIDIA),
        GpuVendor::Amd => Some(DOWNLOAD_AMD),
        GpuVendor::Intel => Some(DOWNLOAD_INTEL),
        GpuVendor::Other => None,
    }
}

/// Lexical comparison of two version strings.
pub fn is_outdated(current: &str, minimum: &str) -> bool {
    current < minimum
}

/// Category of driver guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuidanceKind {
    NoGpu,
    UnknownVendor,
    UnknownVersion,
    Outdated,
    UpToDate,
}

/// Driver advice for the detected GPU.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverGuidance {
    pub kind: GuidanceKind,
    /// One-line summary.
    pub summary: String,
    /// Multi-line block for the detailed report.
    pub detail: String,
    pub download_url: Option<&'static str>,
}

impl DriverGuidance {
    /// Whether the summary should be shown as a problem.
    pub fn needs_attention(&self) -> bool {
        matches!(self.kind, GuidanceKind::Outdated)
    }
}

/// Build guidance for `gpu` against `minimums`.
pub fn driver_guidance(gpu: Option<&GpuInfo>, minimums: &DriverMinimums) -> DriverGuidance {
    let Some(gpu) = gpu else {
        return DriverGuidance {
            kind: GuidanceKind::NoGpu,
            summary: "No GPU detected. Driver guidance is only available for dedicated GPUs."
                .to_string(),
            detail: "\n--- Driver Guidance ---\nNo GPU detected.\n".to_string(),
            download_url: None,
        };
    };

    let url = download_url(gpu.vendor);
    let minimum = minimums.for_vendor(gpu.vendor);

    let mut detail = format!(
        "\n--- Driver Guidance ---\nGPU: {}\nVendor: {}\n",
        gpu.name, gpu.vendor
    );
    detail.push_str(&format!(
        "Driver version: {}\n",
        gpu.driver_version.as_deref().unwrap_or("unknown")
    ));
    if let Some(minimum) = minimum {
        detail.push_str(&format!("Minimum required: {}\n", minimum));
    }
    if let Some(url) = url {
        detail.push_str(&format!("Download: {}\n", url));
    }

    let (kind, summary) = match (minimum, gpu.driver_version.as_deref()) {
        (None, _) => (
            GuidanceKind::UnknownVendor,
            format!(
                "Detected {}, but no driver guidance is available for this vendor.",
                gpu.name
            ),
        ),
        (Some(_), None) => (
            GuidanceKind::UnknownVersion,
            format!(
                "Could not determine the {} driver version. Check {} for the latest driver.",
                gpu.vendor,
                url.unwrap_or("the vendor's website")
            ),
        ),
        (Some(minimum), Some(current)) if is_outdated(current, minimum) => (
            GuidanceKind::Outdated,
            format!(
                "Your {} driver (version {}) is outdated. Unreal Engine requires at least version {}. Download the latest driver from {}",
                gpu.vendor,
                current,
                minimum,
                url.unwrap_or("the vendor's website")
            ),
        ),
        (Some(_), Some(current)) => (
            GuidanceKind::UpToDate,
            format!(
                "Your {} driver (version {}) is up to date. Updates are available from {}",
                gpu.vendor,
                current,
                url.unwrap_or("the vendor's website")
            ),
        ),
    };

    tracing::debug!(?kind, vendor = %gpu.vendor, "Driver guidance");

    DriverGuidance {
        kind,
        summary,
        detail,
        download_url: url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gpu(vendor: GpuVendor, name: &str, driver: Option<&str>) -> GpuInfo {
        GpuInfo {
            vendor,
            name: name.to_string(),
            driver_version: driver.map(str::to_string),
        }
    }

    #[test]
    fn nvidia_up_to_date_links_vendor() {
        let g = gpu(GpuVendor::Nvidia, "NVIDIA GTX 1080", Some("456.71"));
        let guidance = driver_guidance(Some(&g), &DriverMinimums::default());
        assert_eq!(guidance.kind, GuidanceKind::UpToDate);
        assert!(guidance.summary.contains("NVIDIA"));
        assert!(guidance.summary.contains("https://www.nvidia.com"));
        assert!(!guidance.needs_attention());
    }

    #[test]
    fn nvidia_outdated() {
        let g = gpu(GpuVendor::Nvidia, "NVIDIA GTX 970", Some("391.35"));
        let guidance = driver_guidance(Some(&g), &DriverMinimums::default());
        assert_eq!(guidance.kind, GuidanceKind::Outdated);
        assert!(guidance.summary.contains("outdated"));
        assert!(guidance.summary.contains("456.38"));
        assert!(guidance.needs_attention());
    }

    #[test]
    fn no_gpu_detected() {
        let guidance = driver_guidance(None, &DriverMinimums::default());
        assert_eq!(guidance.kind, GuidanceKind::NoGpu);
        assert!(guidance.summary.contains("No GPU detected"));
        assert!(guidance.download_url.is_none());
    }

    #[test]
    fn missing_driver_version() {
        let g = gpu(GpuVendor::Amd, "AMD Radeon RX 6800", None);
        let guidance = driver_guidance(Some(&g), &DriverMinimums::default());
        assert_eq!(guidance.kind, GuidanceKind::UnknownVersion);
        assert_eq!(guidance.download_url, Some(DOWNLOAD_AMD));
        assert!(guidance.detail.contains("Driver version: unknown"));
    }

    #[test]
    fn unknown_vendor() {
        let g = gpu(GpuVendor::Other, "Matrox G200", Some("1.0"));
        let guidance = driver_guidance(Some(&g), &DriverMinimums::default());
        assert_eq!(guidance.kind, GuidanceKind::UnknownVendor);
        assert!(guidance.download_url.is_none());
    }

    #[test]
    fn comparison_is_lexical() {
        // "9.0" sorts after "456.38" as a string.
        assert!(!is_outdated("9.0", "456.38"));
        assert!(is_outdated("20.1.0", "20.10.1"));
        assert!(!is_outdated("27.20.100.8587", "27.20.100.8587"));
    }

    #[test]
    fn configured_minimum_is_used() {
        let minimums = DriverMinimums {
            nvidia: "550.00".to_string(),
            ..DriverMinimums::default()
        };
        let g = gpu(GpuVendor::Nvidia, "NVIDIA RTX 3060", Some("535.104.05"));
        assert_eq!(
            driver_guidance(Some(&g), &minimums).kind,
            GuidanceKind::Outdated
        );
    }

    #[test]
    fn detail_block_lists_driver_facts() {
        let g = gpu(GpuVendor::Intel, "Intel Arc A770", Some("31.0.101.4091"));
        let guidance = driver_guidance(Some(&g), &DriverMinimums::default());
        assert!(guidance.detail.contains("--- Driver Guidance ---"));
        assert!(guidance.detail.contains("Vendor: Intel"));
        assert!(guidance.detail.contains("Minimum required: 27.20.100.8587"));
        assert!(guidance.detail.contains(DOWNLOAD_INTEL));
    }
}
