//! Terminal rendering of a migration plan.

use colored::Colorize;

use crate::plan::{MigrationPlan, MALFORMED_ATTRIBUTES, QUERY_FAILED};

/// Render per-device audit lines plus a summary header.
pub fn render_plan_text(plan: &MigrationPlan) -> String {
    let mut out = Vec::new();
    out.push(
        format!(
            "scheme={} devices={} renames={} query_failures={} malformed={}",
            plan.scheme,
            plan.devices.len(),
            plan.renames.len(),
            plan.query_failures,
            plan.malformed
        )
        .cyan()
        .to_string(),
    );

    for outcome in &plan.devices {
        let line = format!("- {} [{}] {}", outcome.device, outcome.code, outcome.detail);
        let colored = match outcome.code.as_str() {
            "needs_migration" => line.green().to_string(),
            QUERY_FAILED | MALFORMED_ATTRIBUTES => line.red().to_string(),
            _ => line.dimmed().to_string(),
        };
        out.push(colored);
    }

    out.join("\n")
}
