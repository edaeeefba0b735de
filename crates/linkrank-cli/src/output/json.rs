//! JSON output formatter

use super::RankingReport;

pub fn format_report(report: &RankingReport) -> String {
    let output = serde_json::json!({
        "samples": report.samples,
        "damping": report.damping,
        "sampling": report.sampling,
        "iteration": report.iteration.ranks,
        "iterations": report.iteration.iterations,
        "converged": report.iteration.converged,
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string()) + "\n"
}
