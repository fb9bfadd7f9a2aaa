//! Dedicated GPU detection.
//!
//! Tries `nvidia-smi` first, which also reports the driver version. When that
//! is unavailable, falls back to the platform's device listing: `lspci` on
//! Linux, `wmic` on Windows. Integrated adapters (Intel UHD/Iris, AMD APU
//! graphics) do not count as dedicated.
//!
//! The output parsers are plain functions so they can be tested without the
//! tools installed.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::shell::execute_stdout;

/// GPU vendor, used for driver guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GpuVendor {
    Nvidia,
    Amd,
    Intel,
    Other,
}

impl GpuVendor {
    /// Infer the vendor from an adapter name.
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.contains("nvidia") || lower.contains("geforce") || lower.contains("quadro") {
            GpuVendor::Nvidia
        } else if lower.contains("amd")
            || lower.contains("radeon")
            || lower.contains("advanced micro devices")
            || lower.contains("ati ")
        {
            GpuVendor::Amd
        } else if lower.contains("intel") {
            GpuVendor::Intel
        } else {
            GpuVendor::Other
        }
    }
}

impl fmt::Display for GpuVendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GpuVendor::Nvidia => "NVIDIA",
            GpuVendor::Amd => "AMD",
            GpuVendor::Intel => "Intel",
            GpuVendor::Other => "Unknown vendor",
        })
    }
}

/// A detected graphics adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct GpuInfo {
    pub vendor: GpuVendor,
    pub name: String,
    pub driver_version: Option<String>,
}

/// Detect the first dedicated GPU on this host.
pub fn detect() -> Option<GpuInfo> {
    if let Some(gpu) = run_tool(
        "nvidia-smi",
        &["--query-gpu=name,driver_version", "--format=csv,noheader"],
    )
    .and_then(|out| parse_nvidia_smi(&out).into_iter().next())
    {
        return Some(gpu);
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(gpu) = run_tool("lspci", &[]).and_then(|out| parse_lspci(&out)) {
            return Some(gpu);
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(gpu) = run_tool(
            "wmic",
            &[
                "path",
                "win32_VideoController",
                "get",
                "Name,DriverVersion",
                "/format:csv",
            ],
        )
        .and_then(|out| parse_wmic_csv(&out))
        {
            return Some(gpu);
        }
    }

    tracing::debug!("No dedicated GPU detected");
    None
}

fn run_tool(program: &str, args: &[&str]) -> Option<String> {
    let output = execute_stdout(program, args);
    if output.is_none() {
        tracing::debug!("{} unavailable or failed", program);
    }
    output
}

/// Parse `nvidia-smi --query-gpu=name,driver_version --format=csv,noheader`.
pub fn parse_nvidia_smi(output: &str) -> Vec<GpuInfo> {
    output
        .lines()
        .filter_map(|line| {
            let (name, driver) = line.rsplit_once(',')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            let driver = driver.trim();
            Some(GpuInfo {
                vendor: GpuVendor::Nvidia,
                name: name.to_string(),
                driver_version: (!driver.is_empty()).then(|| driver.to_string()),
            })
        })
        .collect()
}

/// Pick the first discrete adapter from `lspci` output.
///
/// Display controller lines look like
/// `01:00.0 VGA compatible controller: NVIDIA Corporation GA104 [GeForce RTX 3070] (rev a1)`.
pub fn parse_lspci(output: &str) -> Option<GpuInfo> {
    output.lines().find_map(|line| {
        let (_, rest) = line.split_once(": ")?;
        let class = line.split(": ").next()?.to_lowercase();
        let is_display = class.contains("vga compatible controller")
            || class.contains("3d controller")
            || class.contains("display controller");
        if !is_display {
            return None;
        }

        let name = rest
            .rsplit_once(" (rev ")
            .map(|(name, _)| name)
            .unwrap_or(rest)
            .trim();
        let vendor = GpuVendor::from_name(name);
        is_dedicated(vendor, name).then(|| GpuInfo {
            vendor,
            name: name.to_string(),
            driver_version: None,
        })
    })
}

/// Pick the first discrete adapter from `wmic ... get Name,DriverVersion /format:csv`.
///
/// Columns come back alphabetically: `Node,DriverVersion,Name`.
pub fn parse_wmic_csv(output: &str) -> Option<GpuInfo> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("Node,"))
        .find_map(|line| {
            let mut cols = line.splitn(3, ',');
            let _node = cols.next()?;
            let driver = cols.next()?.trim();
            let name = cols.next()?.trim();
            let vendor = GpuVendor::from_name(name);
            is_dedicated(vendor, name).then(|| GpuInfo {
                vendor,
                name: name.to_string(),
                driver_version: (!driver.is_empty()).then(|| driver.to_string()),
            })
        })
}

/// Codenames and marketing names of AMD APUs with on-die graphics.
const AMD_INTEGRATED_MARKERS: &[&str] = &[
    "raven",
    "picasso",
    "dali",
    "pollock",
    "renoir",
    "lucienne",
    "cezanne",
    "barcelo",
    "rembrandt",
    "mendocino",
    "van gogh",
    "phoenix",
    "hawk point",
    "strix",
    "ryzen",
    "mobile series",
    "radeon graphics",
];

/// Families and codenames of AMD discrete boards.
const AMD_DISCRETE_MARKERS: &[&str] = &[
    "radeon pro",
    "radeon vii",
    "firepro",
    "instinct",
    "navi",
    "polaris",
    "ellesmere",
    "baffin",
    "lexa",
    "vega 10",
    "vega 20",
    "fiji",
    "tonga",
    "hawaii",
    "tahiti",
];

/// `RX 6800`, `R9 290`, `RX Vega 56`, `HD 7970`.
static AMD_DISCRETE_MODEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(rx|r[579]|hd)\s?(vega\s)?\d").unwrap());

/// APU naming on Windows: `Radeon(TM) Vega 8 Graphics`, `Radeon RX Vega 10 Graphics`.
static AMD_APU_VEGA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bvega \d+ graphics").unwrap());

/// Discrete Arc boards: `Arc A770`, `Arc B580`, or the `DG2` die.
static INTEL_DISCRETE_ARC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\barc [ab]\d|\bdg2\b").unwrap());

/// Whether an adapter name denotes discrete graphics.
///
/// AMD and Intel adapters count only when they match a known discrete
/// family. Meteor Lake's `Intel Arc Graphics` and AMD APUs are integrated.
fn is_dedicated(vendor: GpuVendor, name: &str) -> bool {
    let lower = name
        .to_lowercase()
        .replace("(tm)", "")
        .replace("(r)", "");
    match vendor {
        GpuVendor::Nvidia => true,
        GpuVendor::Amd => {
            if AMD_INTEGRATED_MARKERS.iter().any(|m| lower.contains(m))
                || AMD_APU_VEGA.is_match(&lower)
            {
                return false;
            }
            AMD_DISCRETE_MARKERS.iter().any(|m| lower.contains(m))
                || AMD_DISCRETE_MODEL.is_match(&lower)
        }
        GpuVendor::Intel => INTEL_DISCRETE_ARC.is_match(&lower),
        GpuVendor::Other => false,
    }
}
