//! Platform helpers.

use crate::shell::command::execute_check;

/// Check if running in a CI environment.
///
/// Used to force non-interactive mode in `main()`.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Program and arguments that open `url` in the default browser.
pub fn url_opener(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "windows") {
        (
            "cmd",
            vec![
                "/C".to_string(),
                "start".to_string(),
                String::new(),
                url.to_string(),
            ],
        )
    } else if cfg!(target_os = "macos") {
        ("open", vec![url.to_string()])
    } else {
        ("xdg-open", vec![url.to_string()])
    }
}

/// Open `url` in the default browser.
///
/// Returns false when no opener could be run; callers print the URL instead.
pub fn open_url(url: &str) -> bool {
    let (program, args) = url_opener(url);
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let opened = execute_check(program, &args);
    if !opened {
        tracing::debug!(url, program, "Could not open browser");
    }
    opened
}
