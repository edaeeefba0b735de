//! Corpus link graph and its construction

mod crawler;
mod link_extractor;

pub use crawler::crawl;
pub use link_extractor::extract_links;

use crate::error::{LinkRankError, Result};
use std::collections::{BTreeMap, BTreeSet};

/// Directed link graph over a closed corpus of pages.
///
/// Every outbound target is itself a page of the corpus and no page links to
/// itself. Pages and links iterate in identifier order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusGraph {
    links: BTreeMap<String, BTreeSet<String>>,
}

impl CorpusGraph {
    /// Build a graph from raw extracted links.
    ///
    /// Self-links and targets that are not among the given pages are dropped.
    pub fn from_links<I, P, L, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut raw_links: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (page, targets) in raw {
            raw_links
                .entry(page.into())
                .or_default()
                .extend(targets.into_iter().map(Into::into));
        }

        let pages: BTreeSet<String> = raw_links.keys().cloned().collect();
        let links = raw_links
            .into_iter()
            .map(|(page, targets)| {
                let kept: BTreeSet<String> = targets
                    .into_iter()
                    .filter(|target| {
                        let keep = *target != page && pages.contains(target);
                        if !keep {
                            tracing::debug!("Dropping link {} -> {}", page, target);
                        }
                        keep
                    })
                    .collect();
                (page, kept)
            })
            .collect();

        Self { links }
    }

    /// Number of pages in the corpus
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.links.contains_key(page)
    }

    /// All pages, sorted by identifier
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.links.keys().map(String::as_str)
    }

    /// Outbound links of `page`
    pub fn links(&self, page: &str) -> Result<&BTreeSet<String>> {
        self.links
            .get(page)
            .ok_or_else(|| LinkRankError::UnknownPage(page.to_string()))
    }

    /// Pages paired with their outbound links
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.links.iter().map(|(page, links)| (page.as_str(), links))
    }

    /// Total number of links between distinct pages
    pub fn link_count(&self) -> usize {
        self.links.values().map(BTreeSet::len).sum()
    }

    /// Pages without outbound links
    pub fn dangling_pages(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, links)| links.is_empty())
            .map(|(page, _)| page)
    }
}
