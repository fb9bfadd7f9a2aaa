//! Python interpreter detection.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Result, RigcheckError};
use crate::ui::UserInterface;

use super::InstallerContext;

pub const PYTHON_DOWNLOAD_URL: &str = "https://www.python.org/downloads/";
pub const PYTHON_VIDEO_URL: &str = "https://www.youtube.com/watch?v=cTwD_LC5F9A";

pub const PYTHON_MISSING_MESSAGE: &str =
    "Python is not installed on your system. Please install Python first.";
pub const PYTHON_VIDEO_MESSAGE: &str = "Here is a short video on how to install Python.";

/// Interpreters tried, in order, when none is configured.
pub const DEFAULT_INTERPRETERS: &[&str] = &["python", "python3"];

/// A working Python interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonInstall {
    /// Program name or path used to invoke it.
    pub program: String,
    pub version: String,
}

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Python\s+(\d+\.\d+(?:\.\d+)?)").unwrap());

/// Extract the version from `python --version` output.
pub fn parse_python_version(output: &str) -> Option<String> {
    VERSION_PATTERN
        .captures(output)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Interpreters to try: the configured one, or the defaults.
pub fn candidates(configured: Option<&str>) -> Vec<String> {
    match configured {
        Some(program) => vec![program.to_string()],
        None => DEFAULT_INTERPRETERS.iter().map(|p| p.to_string()).collect(),
    }
}

/// First candidate that answers `--version` with a Python version.
pub fn find_python(candidates: &[String], ctx: &InstallerContext<'_>) -> Option<PythonInstall> {
    candidates.iter().find_map(|program| {
        let output = (ctx.capture_output)(program, &["--version"])?;
        let version = parse_python_version(&output)?;
        tracing::debug!(program = %program, version = %version, "Found Python");
        Some(PythonInstall {
            program: program.clone(),
            version,
        })
    })
}

/// Locate Python, or walk the user through installing it.
///
/// When `open_links` is false the download pages are printed instead of
/// opened.
pub fn require_python(
    configured: Option<&str>,
    ui: &mut dyn UserInterface,
    ctx: &InstallerContext<'_>,
    open_links: bool,
) -> Result<PythonInstall> {
    if let Some(python) = find_python(&candidates(configured), ctx) {
        ui.success(&format!(
            "Python {} found ({})",
            python.version, python.program
        ));
        return Ok(python);
    }

    ui.error(PYTHON_MISSING_MESSAGE);
    show_link(PYTHON_DOWNLOAD_URL, ui, ctx, open_links);
    ui.message(PYTHON_VIDEO_MESSAGE);
    show_link(PYTHON_VIDEO_URL, ui, ctx, open_links);

    Err(RigcheckError::RequirementMissing {
        requirement: "python".to_string(),
        message: PYTHON_MISSING_MESSAGE.to_string(),
    })
}

/// Open `url`, falling back to printing it.
pub(crate) fn show_link(
    url: &str,
    ui: &mut dyn UserInterface,
    ctx: &InstallerContext<'_>,
    open: bool,
) {
    if open && (ctx.open_url)(url) {
        tracing::info!(url, "Opened browser");
        return;
    }
    ui.message(url);
}
