//! Crawl a corpus and rank it with both estimators

use crate::app::Cli;
use crate::output::{format_report, RankingReport};
use anyhow::{Context, Result};
use linkrank_core::{crawl, iterate_rank_with, sample_rank_with};

/// Crawl the corpus, run both estimators, and print the rankings
pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.rank_config();
    config.validate()?;

    let graph = crawl(&cli.corpus, &cli.crawl_options())
        .with_context(|| format!("Failed to crawl corpus {}", cli.corpus.display()))?;

    let sampling = sample_rank_with(&graph, &config)?;
    let iteration = iterate_rank_with(&graph, &config)?;

    let report = RankingReport {
        samples: config.samples,
        damping: config.damping,
        sampling,
        iteration,
    };
    print!("{}", format_report(&report, cli.format));

    Ok(())
}
