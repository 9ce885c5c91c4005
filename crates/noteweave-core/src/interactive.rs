// Interactive prompts and CLI output helpers

use anyhow::Result;
use inquire::MultiSelect;
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// Check if we should use interactive mode
pub fn is_interactive() -> bool {
    // Never be interactive in test environment or CI
    if is_test_env() || is_ci() {
        return false;
    }

    // Only interactive if stdin is a TTY
    std::io::stdin().is_terminal()
}

/// Check if running in CI environment
fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
}

/// Check if running in test environment, via the compile-time test flag,
/// the NOTEWEAVE_TEST variable, or the test harness thread name.
fn is_test_env() -> bool {
    if cfg!(test) {
        return true;
    }

    if std::env::var("NOTEWEAVE_TEST").is_ok() {
        return true;
    }

    if let Some(name) = std::thread::current().name() {
        if name.contains("test_") {
            return true;
        }
    }

    false
}

/// Multi-select prompt over template names. Returns the chosen names.
pub fn prompt_templates(names: &[&str]) -> Result<Vec<String>> {
    let picked = MultiSelect::new("Select templates", names.to_vec()).prompt()?;
    Ok(picked.into_iter().map(|s| s.to_string()).collect())
}

/// Print success message
pub fn print_success(text: &str) {
    println!("{} {}", "✓".bright_green(), text.green());
}

/// Print info message
pub fn print_info(text: &str) {
    println!("{} {}", "→".bright_blue(), text.bright_blue());
}

/// Print warning message
pub fn print_warning(text: &str) {
    println!("{} {}", "▸ ".bright_yellow(), text.yellow());
}

/// Print a list item
pub fn print_item(text: &str) {
    println!("   {} {}", "•".bright_black(), text);
}

/// Print a file path
pub fn print_file(prefix: &str, path: &str) {
    println!("   {} {}", prefix.green(), path.bright_white());
}
