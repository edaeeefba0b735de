//! Configuration for crawling and ranking

use crate::error::{LinkRankError, Result};
use crate::{
    DEFAULT_DAMPING, DEFAULT_MASK, DEFAULT_MAX_ITERATIONS, DEFAULT_SAMPLES, DEFAULT_TOLERANCE,
};
use serde::{Deserialize, Serialize};

/// Parameters shared by both estimators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankConfig {
    /// Probability of following an outbound link instead of jumping
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Number of pages visited by the sampling estimator
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Largest per-page change still counted as converged
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Safety bound on relaxation passes
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Seed for the random surfer (entropy when absent)
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_damping() -> f64 {
    DEFAULT_DAMPING
}

fn default_samples() -> usize {
    DEFAULT_SAMPLES
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            samples: default_samples(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            seed: None,
        }
    }
}

impl RankConfig {
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject settings under which the estimators are undefined
    pub fn validate(&self) -> Result<()> {
        validate_damping(self.damping)?;
        validate_samples(self.samples)?;
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(LinkRankError::InvalidConfig(
                "tolerance must be finite and > 0".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(LinkRankError::InvalidConfig(
                "max_iterations must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

pub(crate) fn validate_damping(damping: f64) -> Result<()> {
    if !damping.is_finite() || !(0.0..=1.0).contains(&damping) {
        return Err(LinkRankError::InvalidConfig(format!(
            "damping must be in [0,1], got {}",
            damping
        )));
    }
    Ok(())
}

pub(crate) fn validate_samples(samples: usize) -> Result<()> {
    if samples == 0 {
        return Err(LinkRankError::InvalidConfig(
            "sample count must be > 0".to_string(),
        ));
    }
    Ok(())
}

/// Corpus discovery options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlOptions {
    /// Glob matched against file names directly inside the corpus directory
    #[serde(default = "default_mask")]
    pub mask: String,

    /// Skip dot-files
    #[serde(default = "default_exclude_hidden")]
    pub exclude_hidden: bool,
}

fn default_mask() -> String {
    DEFAULT_MASK.to_string()
}

fn default_exclude_hidden() -> bool {
    true
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            mask: default_mask(),
            exclude_hidden: default_exclude_hidden(),
        }
    }
}
