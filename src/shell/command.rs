//! External program execution.
//!
//! Programs are spawned directly from an argument vector. No shell is
//! involved, so package names and interpreter paths are never re-parsed.

use crate::error::{Result, RigcheckError};
use std::collections::HashMap;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a program.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the program exited with code 0.
    pub success: bool,
}

impl CommandResult {
    /// Both output streams joined, stdout first.
    pub fn combined_output(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// Options for program execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Extra environment variables (merged with system env).
    pub env: HashMap<String, String>,

    /// Capture output (if false, inherits from parent).
    pub capture: bool,
}

impl CommandOptions {
    /// Options that capture both output streams.
    pub fn captured() -> Self {
        Self {
            capture: true,
            ..Default::default()
        }
    }
}

/// Render a program and its arguments for display.
pub fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run `program` with `args`.
///
/// # Errors
///
/// Returns `CommandFailed` with no code when the program cannot be spawned.
/// A non-zero exit is reported through [`CommandResult::success`].
pub fn execute(program: &str, args: &[&str], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd.stdin(Stdio::null());

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    if options.capture {
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());
    }

    tracing::debug!(command = %display_command(program, args), "Executing");

    let output = cmd.output().map_err(|e| {
        tracing::debug!(error = %e, program, "Spawn failed");
        RigcheckError::CommandFailed {
            command: display_command(program, args),
            code: None,
        }
    })?;

    let (stdout, stderr) = if options.capture {
        (
            String::from_utf8_lossy(&output.stdout).to_string(),
            String::from_utf8_lossy(&output.stderr).to_string(),
        )
    } else {
        (String::new(), String::new())
    };

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout,
        stderr,
        duration: start.elapsed(),
        success: output.status.success(),
    })
}

/// Run quietly and report only whether the program succeeded.
pub fn execute_check(program: &str, args: &[&str]) -> bool {
    execute(program, args, &CommandOptions::captured())
        .map(|r| r.success)
        .unwrap_or(false)
}

/// Run quietly and return the combined output of a successful run.
pub fn execute_output(program: &str, args: &[&str]) -> Option<String> {
    execute(program, args, &CommandOptions::captured())
        .ok()
        .filter(|r| r.success)
        .map(|r| r.combined_output())
}

/// Run quietly and return only the stdout of a successful run.
pub fn execute_stdout(program: &str, args: &[&str]) -> Option<String> {
    execute(program, args, &CommandOptions::captured())
        .ok()
        .filter(|r| r.success)
        .map(|r| r.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_arguments() {
        assert_eq!(
            display_command("python3", &["-m", "pip", "install", "pygame"]),
            "python3 -m pip install pygame"
        );
        assert_eq!(display_command("python", &[]), "python");
    }

    #[test]
    fn missing_program_is_command_failed() {
        let result = execute(
            "rigcheck-definitely-not-a-program",
            &["--version"],
            &CommandOptions::captured(),
        );
        match result {
            Err(RigcheckError::CommandFailed { command, code }) => {
                assert_eq!(command, "rigcheck-definitely-not-a-program --version");
                assert_eq!(code, None);
            }
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[test]
    fn missing_program_check_is_false() {
        assert!(!execute_check("rigcheck-definitely-not-a-program", &[]));
        assert!(execute_output("rigcheck-definitely-not-a-program", &[]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn captures_output() {
        let result = execute("sh", &["-c", "echo hello; echo oops >&2"], &CommandOptions::captured())
            .unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
        assert!(result.stderr.contains("oops"));
        assert!(result.combined_output().starts_with("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn stdout_only_drops_stderr() {
        let script = "echo 'GPU, 1.0'; echo 'warn, ignored' >&2";
        let output = execute_stdout("sh", &["-c", script]).unwrap();
        assert_eq!(output, "GPU, 1.0\n");
        assert!(execute_stdout("sh", &["-c", "echo out; exit 1"]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn reports_exit_code() {
        let result = execute("sh", &["-c", "exit 3"], &CommandOptions::captured()).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn passes_environment() {
        let mut options = CommandOptions::captured();
        options.env.insert("RIGCHECK_TEST".to_string(), "value".to_string());
        let result = execute("sh", &["-c", "echo $RIGCHECK_TEST"], &options).unwrap();
        assert!(result.stdout.contains("value"));
    }

    #[cfg(unix)]
    #[test]
    fn arguments_are_not_shell_parsed() {
        let output = execute_output("echo", &["a; echo b"]).unwrap();
        assert_eq!(output.trim(), "a; echo b");
    }

    #[cfg(unix)]
    #[test]
    fn check_reflects_exit_status() {
        assert!(execute_check("sh", &["-c", "exit 0"]));
        assert!(!execute_check("sh", &["-c", "exit 1"]));
    }
}
