//! Human-readable output for the command line.

use crate::analyzer::{Outcome, Resolution};
use crate::diagnostics::SkipEvent;
use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a skipped tag or version on stderr.
pub fn display_skip_event(event: &SkipEvent) {
    eprintln!("{} {}", style("⚠ SKIPPED:").yellow(), event);
}

/// Display the outcome of a resolution run.
///
/// Shows either:
/// - If a scope was found: "From: old_tag -> To: new_tag" plus the commits involved
/// - Otherwise: a note that the head commit carries no scope
pub fn display_resolution(resolution: &Resolution) {
    let first_line = resolution.head.message.lines().next().unwrap_or_default();
    display_status(&format!(
        "Branch '{}' head {}: {}",
        resolution.branch,
        resolution.head.short_hash(),
        first_line
    ));

    match &resolution.outcome {
        Outcome::NoScope => {
            display_status("Commit has no scope, no tag planned");
        }
        Outcome::Planned(plan) => {
            println!("\n{}", style("Proposed Tag Change:").bold());
            println!(
                "  From: {} ({})",
                style(&plan.current_tag).red(),
                plan.current_commit.short_hash()
            );
            println!(
                "  To:   {} ({} bump)",
                style(plan.new_tag_name()).green(),
                plan.bump
            );
            display_success(&format!(
                "Scope '{}': {} -> {}",
                plan.scope, plan.current_version, plan.new_version
            ));
        }
    }
}
