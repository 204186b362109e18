use std::collections::BTreeMap;

use crate::{Corpus, RelevanceIndex};

/// Convert corpus counts into TF-IDF scores.
///
/// `idf = ln(N / n_i)` over natural log; `n_i >= 1` always holds for a word
/// that made it into the corpus, so neither the division nor the log can
/// blow up. `tf = count / max_term_frequency` of the owning page, which puts
/// it in `(0, 1]`. Only pages a word actually occurs on get an entry.
pub fn relevance_index(corpus: &Corpus) -> RelevanceIndex {
    let n = corpus.page_count() as f64;
    let mut index = RelevanceIndex::new();
    for (word, stat) in &corpus.words {
        let idf = (n / f64::from(stat.document_frequency())).ln();
        let mut per_page = BTreeMap::new();
        for (&page, &count) in stat.counts() {
            let max_tf = corpus.pages[&page].max_term_frequency;
            let tf = f64::from(count) / f64::from(max_tf);
            per_page.insert(page, tf * idf);
        }
        index.insert(word.clone(), per_page);
    }
    index
}
