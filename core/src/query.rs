use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::tokenizer;
use crate::{PageId, RankVector, RelevanceIndex};

/// Most pages a single query returns.
pub const MAX_RESULTS: usize = 10;

/// Score every page matching the query and return the top hits, best first.
///
/// Each query stem with an index entry adds its relevance score to the pages
/// it occurs on (summed across terms, not averaged). With `ranks` supplied,
/// the per-term contribution becomes `relevance * rank` instead -- authority
/// multiplies, it does not add. Ties break toward the lower page id so
/// results are deterministic.
///
/// An empty query, an all-stopword query, or a query with no matching stems
/// yields an empty list, not an error.
pub fn score_pages(
    query: &str,
    index: &RelevanceIndex,
    ranks: Option<&RankVector>,
) -> Vec<(PageId, f64)> {
    let mut totals: BTreeMap<PageId, f64> = BTreeMap::new();
    for stem in tokenizer::stems(query) {
        if let Some(per_page) = index.get(&stem) {
            for (&page, &relevance) in per_page {
                let contribution = match ranks {
                    Some(ranks) => relevance * ranks.get(&page).copied().unwrap_or(0.0),
                    None => relevance,
                };
                *totals.entry(page).or_insert(0.0) += contribution;
            }
        }
    }

    let mut scored: Vec<(PageId, f64)> = totals.into_iter().collect();
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    scored.truncate(MAX_RESULTS);
    scored
}
