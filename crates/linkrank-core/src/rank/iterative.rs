//! Fixed-point PageRank iteration

use super::Distribution;
use crate::config::RankConfig;
use crate::error::{LinkRankError, Result};
use crate::graph::CorpusGraph;
use serde::Serialize;
use std::collections::HashMap;

/// Outcome of a fixed-point run
#[derive(Debug, Clone, Serialize)]
pub struct IterationReport {
    pub ranks: Distribution,
    /// Relaxation passes performed
    pub iterations: usize,
    /// Largest per-page change in the final pass
    pub max_delta: f64,
    /// False when the iteration bound was hit before the tolerance test passed
    pub converged: bool,
}

/// Solve the PageRank equation by repeated relaxation, using the default
/// tolerance and iteration bound.
pub fn iterate_rank(graph: &CorpusGraph, damping: f64) -> Result<Distribution> {
    let config = RankConfig::default().with_damping(damping);
    Ok(iterate_rank_with(graph, &config)?.ranks)
}

/// Solve the PageRank equation with the settings in `config`.
///
/// Every page starts at `1/N`. Each pass computes
/// `(1 - d)/N + d * Σ rank[q] / out(q)` for every page from the previous
/// pass only, where `q` ranges over the pages linking to it and over all
/// dangling pages (which count as linking to all `N` pages). Stops once no
/// page moved by more than `config.tolerance`.
pub fn iterate_rank_with(graph: &CorpusGraph, config: &RankConfig) -> Result<IterationReport> {
    config.validate()?;
    if graph.is_empty() {
        return Err(LinkRankError::EmptyCorpus("graph has no pages".to_string()));
    }

    let pages: Vec<&str> = graph.pages().collect();
    let n = pages.len();
    let n_f64 = n as f64;
    let index: HashMap<&str, usize> = pages.iter().enumerate().map(|(i, p)| (*p, i)).collect();

    // inbound[p] lists every q linking to p
    let mut inbound: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut out_degree = vec![0usize; n];
    for (q, page) in pages.iter().enumerate() {
        let links = graph.links(page)?;
        out_degree[q] = links.len();
        for target in links {
            let p = *index
                .get(target.as_str())
                .ok_or_else(|| LinkRankError::UnknownPage(target.clone()))?;
            inbound[p].push(q);
        }
    }
    let dangling: Vec<usize> = (0..n).filter(|&q| out_degree[q] == 0).collect();

    let teleport = (1.0 - config.damping) / n_f64;
    let mut current = vec![1.0 / n_f64; n];
    let mut next = vec![0.0; n];
    let mut iterations = 0;
    let mut max_delta = f64::INFINITY;
    let mut converged = false;

    while iterations < config.max_iterations {
        iterations += 1;

        let dangling_share: f64 = dangling.iter().map(|&q| current[q] / n_f64).sum();
        for p in 0..n {
            let linked: f64 = inbound[p]
                .iter()
                .map(|&q| current[q] / out_degree[q] as f64)
                .sum();
            next[p] = teleport + config.damping * (linked + dangling_share);
        }

        max_delta = current
            .iter()
            .zip(next.iter())
            .map(|(old, new)| (old - new).abs())
            .fold(0.0, f64::max);
        std::mem::swap(&mut current, &mut next);

        tracing::debug!("Iteration {}: max delta {:.6}", iterations, max_delta);
        if max_delta <= config.tolerance {
            converged = true;
            break;
        }
    }

    if converged {
        tracing::info!("Iteration converged after {} passes", iterations);
    } else {
        tracing::warn!(
            "Iteration stopped at bound of {} passes (max delta {:.6})",
            config.max_iterations,
            max_delta
        );
    }

    let ranks = pages
        .iter()
        .zip(current)
        .map(|(page, rank)| (page.to_string(), rank))
        .collect();

    Ok(IterationReport {
        ranks: Distribution::from_map(ranks),
        iterations,
        max_delta,
        converged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Option<f64>, expected: f64, eps: f64) {
        let actual = actual.expect("page missing from ranking");
        assert!(
            (actual - expected).abs() <= eps,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_two_page_cycle() {
        let graph = CorpusGraph::from_links([("A", vec!["B"]), ("B", vec!["A"])]);
        let ranks = iterate_rank(&graph, 0.85).unwrap();

        assert_close(ranks.get("A"), 0.5, 1e-12);
        assert_close(ranks.get("B"), 0.5, 1e-12);
    }

    #[test]
    fn test_isolated_pages_are_uniform() {
        let graph = CorpusGraph::from_links(
            (0..5).map(|i| (format!("{}.html", i), Vec::<String>::new())),
        );
        let report = iterate_rank_with(&graph, &RankConfig::default()).unwrap();

        assert!(report.converged);
        assert_eq!(report.iterations, 1);
        for (_, p) in report.ranks.iter() {
            assert!((p - 0.2).abs() < 1e-12);
        }
    }

    #[test]
    fn test_single_hub_symmetry() {
        let graph = CorpusGraph::from_links([("A", vec!["B", "C"]), ("B", vec![]), ("C", vec![])]);
        let ranks = iterate_rank(&graph, 0.85).unwrap();

        assert_eq!(ranks.get("B"), ranks.get("C"));
        assert!(ranks.get("B").unwrap() > ranks.get("A").unwrap());
        assert!((ranks.total() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_reference_corpus() {
        let graph = CorpusGraph::from_links([
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html", "4.html"]),
            ("4.html", vec!["2.html"]),
        ]);
        let ranks = iterate_rank(&graph, 0.85).unwrap();

        assert_close(ranks.get("1.html"), 0.2202, 0.005);
        assert_close(ranks.get("2.html"), 0.4289, 0.005);
        assert_close(ranks.get("3.html"), 0.2202, 0.005);
        assert_close(ranks.get("4.html"), 0.1307, 0.005);
        assert!((ranks.total() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_iteration_bound_reported() {
        let graph = CorpusGraph::from_links([
            ("a", vec!["b"]),
            ("b", vec!["c"]),
            ("c", vec!["a", "b"]),
        ]);
        let config = RankConfig {
            max_iterations: 1,
            tolerance: 1e-12,
            ..RankConfig::default()
        };
        let report = iterate_rank_with(&graph, &config).unwrap();

        assert!(!report.converged);
        assert_eq!(report.iterations, 1);
        assert!((report.ranks.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_deterministic() {
        let graph =
            CorpusGraph::from_links([("a", vec!["b", "c"]), ("b", vec!["c"]), ("c", vec![])]);
        assert_eq!(
            iterate_rank(&graph, 0.85).unwrap(),
            iterate_rank(&graph, 0.85).unwrap()
        );
    }

    #[test]
    fn test_empty_graph_rejected() {
        let err = iterate_rank(&CorpusGraph::default(), 0.85).unwrap_err();
        assert!(matches!(err, LinkRankError::EmptyCorpus(_)));
    }
}
