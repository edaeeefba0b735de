//! Linkrank Core Library
//!
//! Estimates the PageRank of every page in a closed corpus of hyperlinked
//! documents.
//!
//! # Features
//! - Corpus crawling with anchor-tag link extraction
//! - Damped random-surfer transition model
//! - Monte Carlo estimation from a long random walk
//! - Fixed-point iteration of the PageRank equation

pub mod config;
pub mod error;
pub mod graph;
pub mod rank;

pub use config::{CrawlOptions, RankConfig};
pub use error::{exit_codes, Error, LinkRankError, Result};
pub use graph::{crawl, extract_links, CorpusGraph};
pub use rank::{
    iterate_rank, iterate_rank_with, sample_rank, sample_rank_with, transition, weighted_choice,
    Distribution, IterationReport, RandomSource,
};

/// Default probability of following a link rather than jumping
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Default number of pages visited by the random surfer
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Default per-page convergence tolerance for iteration
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Default upper bound on relaxation passes
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Default file mask for corpus documents
pub const DEFAULT_MASK: &str = "*.html";
