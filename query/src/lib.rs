use anyhow::Result;
use std::collections::BTreeMap;
use wikirank_core::persist::{load_meta, load_ranks, load_relevance, load_titles, IndexPaths};
use wikirank_core::query::score_pages;
use wikirank_core::{PageId, RankVector, RelevanceIndex};

pub struct SearchHit {
    pub page_id: PageId,
    pub title: String,
    pub score: f64,
}

/// Query-side view of a built index directory. The rank table is only read
/// when authority scoring was requested, so plain relevance queries never
/// pay for it.
pub struct QueryEngine {
    titles: BTreeMap<PageId, String>,
    relevance: RelevanceIndex,
    ranks: Option<RankVector>,
}

impl QueryEngine {
    pub fn load(index_dir: &str, use_pagerank: bool) -> Result<Self> {
        let paths = IndexPaths::new(index_dir);
        let titles = load_titles(&paths)?;
        let relevance = load_relevance(&paths)?;
        let ranks = if use_pagerank {
            Some(load_ranks(&paths)?)
        } else {
            None
        };
        let meta = load_meta(&paths)?;
        tracing::info!(
            num_pages = meta.num_pages,
            num_words = relevance.len(),
            use_pagerank,
            "loaded index"
        );
        Ok(Self { titles, relevance, ranks })
    }

    /// Top pages for a free-text query, best first. An empty result is the
    /// normal outcome for an unmatched or all-stopword query.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        score_pages(query, &self.relevance, self.ranks.as_ref())
            .into_iter()
            .filter_map(|(page_id, score)| {
                self.titles.get(&page_id).map(|title| SearchHit {
                    page_id,
                    title: title.clone(),
                    score,
                })
            })
            .collect()
    }
}
