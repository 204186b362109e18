use std::collections::{BTreeMap, HashMap, HashSet};

use crate::links::Link;
use crate::tokenizer::{self, Token};
use crate::{Page, PageId};

/// Per-stem statistics: raw occurrence counts keyed by page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStat {
    counts: HashMap<PageId, u32>,
}

impl WordStat {
    /// Number of distinct pages the stem appears on -- the `n_i` document
    /// frequency. Equal to the size of the counts map by construction.
    pub fn document_frequency(&self) -> u32 {
        self.counts.len() as u32
    }

    pub fn counts(&self) -> &HashMap<PageId, u32> {
        &self.counts
    }

    pub fn count_on(&self, page: PageId) -> u32 {
        self.counts.get(&page).copied().unwrap_or(0)
    }
}

/// Per-page statistics: the TF normalizer and the outbound link set.
/// Self-links and duplicate targets never enter the set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageStat {
    pub max_term_frequency: u32,
    pub outbound_links: HashSet<PageId>,
}

/// Everything the single indexing pass produces: word counts, page stats
/// (the link graph lives in `PageStat::outbound_links`), and the title
/// tables. Built once per corpus load; read-only afterwards.
#[derive(Debug, Default)]
pub struct Corpus {
    pub words: HashMap<String, WordStat>,
    pub pages: BTreeMap<PageId, PageStat>,
    pub titles: BTreeMap<PageId, String>,
    title_to_id: HashMap<String, PageId>,
}

impl Corpus {
    /// Index a full page list: a title pre-pass so links can resolve to pages
    /// that appear later in the corpus, then one pass over every page's text.
    pub fn build(pages: &[Page]) -> Self {
        let mut corpus = Corpus::default();
        for page in pages {
            if let Some(prev) = corpus.title_to_id.insert(page.title.clone(), page.id) {
                tracing::warn!(title = %page.title, prev, id = page.id, "duplicate page title, later id wins");
            }
            corpus.titles.insert(page.id, page.title.clone());
        }
        for page in pages {
            corpus.index_page(page);
        }
        corpus
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page_id(&self, title: &str) -> Option<PageId> {
        self.title_to_id.get(title).copied()
    }

    fn index_page(&mut self, page: &Page) {
        // Every page gets an entry, even one that contributes no words or
        // links; the rank engine iterates over all of them.
        self.pages.entry(page.id).or_default();

        let text = match (page.title.is_empty(), page.text.is_empty()) {
            (false, false) => format!("{} {}", page.title, page.text),
            (true, _) => page.text.clone(),
            (_, true) => page.title.clone(),
        };

        for token in tokenizer::tokens(&text) {
            match token {
                Token::Link(interior) => self.index_link(page.id, interior),
                Token::Word(word) => {
                    if let Some(stem) = tokenizer::stem_word(word) {
                        self.register_stem(page.id, stem);
                    }
                }
            }
        }
    }

    /// Classify a link span: a resolvable, non-self target becomes a graph
    /// edge; the indexable text is registered as words either way.
    fn index_link(&mut self, page: PageId, interior: &str) {
        let link = Link::parse(interior);

        if let Some(target) = self.page_id(link.target()) {
            if target != page {
                if let Some(stat) = self.pages.get_mut(&page) {
                    stat.outbound_links.insert(target);
                }
            }
        }

        for stem in tokenizer::stems(&link.indexable_text()) {
            self.register_stem(page, stem);
        }
    }

    fn register_stem(&mut self, page: PageId, stem: String) {
        let count = self
            .words
            .entry(stem)
            .or_default()
            .counts
            .entry(page)
            .or_insert(0);
        *count += 1;
        let count = *count;

        if let Some(stat) = self.pages.get_mut(&page) {
            if count > stat.max_term_frequency {
                stat.max_term_frequency = count;
            }
        }
    }
}
