//! Terminal diagnostics.
//!
//! Everything here goes to stderr: stdout is reserved for rendered
//! variables so the tool can be piped into `eval`, `docker --env-file`, or a
//! config file.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success
//! - Red: errors
//! - Cyan: hints, paths

use console::style;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled_stderr()
}

/// Print an error message (red).
///
/// Example: `✗ parameter store request failed: ...`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").for_stderr().red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ check AWS credentials and region`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").for_stderr().cyan(), style(msg).for_stderr().cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ wrote 12 variables to app.env`
pub fn success(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✓").for_stderr().green(), msg);
    } else {
        eprintln!("✓ {}", msg);
    }
}

/// Format a path in cyan for inline use.
pub fn path(p: &str) -> String {
    if colors_enabled() {
        style(p).for_stderr().cyan().to_string()
    } else {
        p.to_string()
    }
}
