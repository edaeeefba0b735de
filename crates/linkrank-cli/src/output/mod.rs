//! Output formatters

pub mod json;
pub mod terminal;

use crate::app::OutputFormat;
use linkrank_core::{Distribution, IterationReport};

/// Both rankings of one corpus
pub struct RankingReport {
    pub samples: usize,
    pub damping: f64,
    pub sampling: Distribution,
    pub iteration: IterationReport,
}

/// Format a ranking report
pub fn format_report(report: &RankingReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_report(report),
        OutputFormat::Cli => terminal::format_report(report),
    }
}
