//! Shared CLI output helpers.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: ids, hints
//! - Bold: headers
//! - Dimmed: secondary info

use console::style;

const RULE_WIDTH: usize = 56;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ Fleet capacity updated successfully.`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ config file not found: ops.toml`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("⚠").yellow(), msg);
    } else {
        println!("⚠ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ run: aws configure`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a section header with a separator line.
pub fn section(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
        println!("{}", style("─".repeat(RULE_WIDTH)).dim());
    } else {
        println!("{}", title);
        println!("{}", "─".repeat(RULE_WIDTH));
    }
}

/// Print a list item with bullet and optional dimmed detail.
///
/// Example: `  • build-1234  my-server 1.0.2 READY`
pub fn list_item(item: &str, detail: &str) {
    if detail.is_empty() {
        println!("  • {}", item);
    } else if colors_enabled() {
        println!("  • {}  {}", style(item).cyan(), style(detail).dim());
    } else {
        println!("  • {}  {}", item, detail);
    }
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", style(msg).dim());
    } else {
        println!("{}", msg);
    }
}
