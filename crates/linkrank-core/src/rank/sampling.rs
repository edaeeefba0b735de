//! Monte Carlo PageRank estimation from a random walk

use super::{transition, Distribution};
use crate::config::{validate_damping, validate_samples, RankConfig};
use crate::error::{LinkRankError, Result};
use crate::graph::CorpusGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

/// Source of uniform randomness for the random surfer
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..len`; `len` is never zero
    fn next_index(&mut self, len: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Draw a page from `dist` by walking its cumulative mass.
///
/// Returns `None` when no page carries positive mass.
pub fn weighted_choice<'a, R>(dist: &'a Distribution, rng: &mut R) -> Option<&'a str>
where
    R: RandomSource + ?Sized,
{
    let draw = rng.next_unit() * dist.total();
    let mut cumulative = 0.0;
    let mut last = None;

    for (page, p) in dist.iter() {
        if p <= 0.0 {
            continue;
        }
        cumulative += p;
        last = Some(page);
        if draw < cumulative {
            return Some(page);
        }
    }

    // rounding left the draw past the final boundary
    last
}

/// Estimate PageRank as the visit frequency of an `n`-page random walk.
///
/// The walk starts on a uniformly chosen page and each following page is
/// drawn from the transition model of the current one.
pub fn sample_rank<R>(
    graph: &CorpusGraph,
    damping: f64,
    n: usize,
    rng: &mut R,
) -> Result<Distribution>
where
    R: RandomSource + ?Sized,
{
    validate_damping(damping)?;
    validate_samples(n)?;
    if graph.is_empty() {
        return Err(LinkRankError::EmptyCorpus("graph has no pages".to_string()));
    }

    let mut visits: BTreeMap<String, usize> =
        graph.pages().map(|page| (page.to_string(), 0)).collect();

    let start = rng.next_index(graph.len());
    let mut current = graph
        .pages()
        .nth(start)
        .ok_or_else(|| LinkRankError::EmptyCorpus("graph has no pages".to_string()))?
        .to_string();
    record_visit(&mut visits, &current)?;

    for _ in 1..n {
        let model = transition(graph, &current, damping)?;
        let next = weighted_choice(&model, rng)
            .ok_or_else(|| LinkRankError::UnknownPage(current.clone()))?
            .to_string();
        record_visit(&mut visits, &next)?;
        current = next;
    }

    let total = n as f64;
    let estimate = visits
        .into_iter()
        .map(|(page, count)| (page, count as f64 / total))
        .collect();

    tracing::info!("Sampled {} pages over a corpus of {}", n, graph.len());
    Ok(Distribution::from_map(estimate))
}

/// Run the sampling estimator with the settings in `config`.
///
/// Uses `config.seed` for a reproducible walk, otherwise seeds from entropy.
pub fn sample_rank_with(graph: &CorpusGraph, config: &RankConfig) -> Result<Distribution> {
    config.validate()?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    sample_rank(graph, config.damping, config.samples, &mut rng)
}

fn record_visit(visits: &mut BTreeMap<String, usize>, page: &str) -> Result<()> {
    let count = visits
        .get_mut(page)
        .ok_or_else(|| LinkRankError::UnknownPage(page.to_string()))?;
    *count += 1;
    Ok(())
}
