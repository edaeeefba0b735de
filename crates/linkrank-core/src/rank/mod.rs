//! PageRank estimation over a corpus graph

mod iterative;
mod sampling;
mod transition;

pub use iterative::{iterate_rank, iterate_rank_with, IterationReport};
pub use sampling::{sample_rank, sample_rank_with, weighted_choice, RandomSource};
pub use transition::transition;

use crate::graph::CorpusGraph;
use serde::Serialize;
use std::collections::BTreeMap;

/// Probability mass assigned to every page of a corpus.
///
/// Produced by the transition model and by both estimators. Entries iterate
/// in page identifier order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Distribution {
    mass: BTreeMap<String, f64>,
}

impl Distribution {
    pub(crate) fn from_map(mass: BTreeMap<String, f64>) -> Self {
        Self { mass }
    }

    /// Equal mass on every page of `graph`
    pub fn uniform(graph: &CorpusGraph) -> Self {
        let share = 1.0 / graph.len() as f64;
        Self::from_map(graph.pages().map(|page| (page.to_string(), share)).collect())
    }

    pub fn get(&self, page: &str) -> Option<f64> {
        self.mass.get(page).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.mass.iter().map(|(page, p)| (page.as_str(), *p))
    }

    pub fn len(&self) -> usize {
        self.mass.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mass.is_empty()
    }

    /// Sum of all entries
    pub fn total(&self) -> f64 {
        self.mass.values().sum()
    }

    /// Largest absolute per-page difference against `other`
    pub fn max_delta(&self, other: &Distribution) -> f64 {
        self.mass
            .iter()
            .map(|(page, p)| (p - other.get(page).unwrap_or(0.0)).abs())
            .fold(0.0, f64::max)
    }

    pub fn into_inner(self) -> BTreeMap<String, f64> {
        self.mass
    }
}
