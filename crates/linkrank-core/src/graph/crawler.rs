//! Corpus discovery and graph construction

use super::{extract_links, CorpusGraph};
use crate::config::CrawlOptions;
use crate::error::{LinkRankError, Result};
use glob::Pattern;
use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Crawl the documents directly inside `root` and build their link graph.
///
/// Each file whose name matches `options.mask` becomes a page named after the
/// file. Subdirectories are not descended into.
pub fn crawl(root: &Path, options: &CrawlOptions) -> Result<CorpusGraph> {
    let pattern = Pattern::new(&options.mask)?;
    let mut documents = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !should_skip(e, options));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if !pattern.matches(&name) {
            continue;
        }

        let content = fs::read_to_string(entry.path())?;
        let links = extract_links(&content);
        tracing::debug!("Crawled {} ({} raw links)", name, links.len());
        documents.push((name, links));
    }

    if documents.is_empty() {
        return Err(LinkRankError::EmptyCorpus(root.display().to_string()));
    }

    let graph = CorpusGraph::from_links(documents);
    tracing::info!(
        "Built corpus graph: {} pages, {} links",
        graph.len(),
        graph.link_count()
    );

    Ok(graph)
}

fn should_skip(entry: &DirEntry, options: &CrawlOptions) -> bool {
    if entry.depth() == 0 {
        return false;
    }

    let name = entry.file_name().to_string_lossy();
    options.exclude_hidden && name.starts_with('.')
}
