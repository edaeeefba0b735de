//! Terminal output formatter

use super::RankingReport;
use linkrank_core::Distribution;

pub fn format_report(report: &RankingReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "PageRank Results from Sampling (n = {})\n",
        report.samples
    ));
    push_ranks(&mut output, &report.sampling);

    output.push_str("PageRank Results from Iteration\n");
    push_ranks(&mut output, &report.iteration.ranks);

    output
}

fn push_ranks(output: &mut String, ranks: &Distribution) {
    for (page, rank) in ranks.iter() {
        output.push_str(&format!("  {}: {:.4}\n", page, rank));
    }
}
