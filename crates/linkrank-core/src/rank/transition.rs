//! Random-surfer transition model

use super::Distribution;
use crate::config::validate_damping;
use crate::error::Result;
use crate::graph::CorpusGraph;

/// Distribution over the next page visited from `page`.
///
/// With probability `damping` the surfer follows one of the page's links,
/// otherwise it jumps to any page of the corpus. A page without links jumps
/// uniformly, as if it linked to every page.
pub fn transition(graph: &CorpusGraph, page: &str, damping: f64) -> Result<Distribution> {
    validate_damping(damping)?;
    let links = graph.links(page)?;

    if links.is_empty() {
        return Ok(Distribution::uniform(graph));
    }

    let n = graph.len() as f64;
    let jump = (1.0 - damping) / n;
    let follow = damping / links.len() as f64;

    let mass = graph
        .pages()
        .map(|p| {
            let bonus = if links.contains(p) { follow } else { 0.0 };
            (p.to_string(), jump + bonus)
        })
        .collect();

    Ok(Distribution::from_map(mass))
}
