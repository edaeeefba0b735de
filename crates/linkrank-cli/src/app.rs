//! CLI argument definitions

use clap::{Parser, ValueEnum};
use linkrank_core::{CrawlOptions, RankConfig, DEFAULT_DAMPING, DEFAULT_MASK, DEFAULT_SAMPLES};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkrank")]
#[command(
    version,
    about = "Rank the pages of a hyperlinked corpus by sampling and by iteration"
)]
pub struct Cli {
    /// Directory holding the corpus documents
    pub corpus: PathBuf,

    /// Probability of following a link rather than jumping to a random page
    #[arg(long, env = "LINKRANK_DAMPING", default_value_t = DEFAULT_DAMPING)]
    pub damping: f64,

    /// Number of pages visited by the random surfer
    #[arg(short = 'n', long, env = "LINKRANK_SAMPLES", default_value_t = DEFAULT_SAMPLES)]
    pub samples: usize,

    /// Seed for a reproducible random walk
    #[arg(long, env = "LINKRANK_SEED")]
    pub seed: Option<u64>,

    /// Glob matched against corpus file names
    #[arg(long, default_value = DEFAULT_MASK)]
    pub mask: String,

    /// Output format
    #[arg(long, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn rank_config(&self) -> RankConfig {
        RankConfig {
            damping: self.damping,
            samples: self.samples,
            seed: self.seed,
            ..RankConfig::default()
        }
    }

    pub fn crawl_options(&self) -> CrawlOptions {
        CrawlOptions {
            mask: self.mask.clone(),
            ..CrawlOptions::default()
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
}
