//! Pure formatting functions for resolution output.
//!
//! Nothing here prints; [super] wraps these for terminal display.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::resolution::ResolutionResult;

/// `key=value` pairs a CI step publishes, in a stable order
pub fn output_pairs(result: &ResolutionResult) -> Vec<(&'static str, String)> {
    vec![
        ("next_release_version", result.next_stable_version.to_string()),
        (
            "next_release_version_stripped",
            result.next_stable_version_stripped.clone(),
        ),
        ("next_release_branch", result.next_release_branch.clone()),
        ("next_beta_version", result.next_beta_version.to_string()),
        ("next_rc_version", result.next_rc_version.to_string()),
    ]
}

/// Render the result as `key=value` lines (one per output, trailing newline)
pub fn format_outputs(result: &ResolutionResult) -> String {
    output_pairs(result)
        .into_iter()
        .map(|(key, value)| format!("{}={}\n", key, value))
        .collect()
}

/// Render a human-readable summary of the result.
///
/// Styling is applied through `console` and disappears when colors are off.
pub fn format_summary(result: &ResolutionResult) -> String {
    let rows = [
        ("Next release", result.next_stable_version.to_string()),
        ("Release branch", result.next_release_branch.clone()),
        ("Next beta", result.next_beta_version.to_string()),
        ("Next rc", result.next_rc_version.to_string()),
    ];

    let mut out = format!("{}\n", style("Next release versions:").bold());
    for (label, value) in rows {
        out.push_str(&format!("  {:<15} {}\n", label, style(value).green()));
    }
    out
}

/// Render a boundary warning with a yellow marker
pub fn format_warning(warning: &BoundaryWarning) -> String {
    format!("{} {}", style("⚠ WARNING:").yellow(), warning)
}
