pub mod corpus;
pub mod links;
pub mod persist;
pub mod query;
pub mod rank;
pub mod relevance;
pub mod tokenizer;

pub use corpus::{Corpus, PageStat, WordStat};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub type PageId = u32;

/// One corpus record as supplied by the reader: unique id, unique title
/// (the link-resolution key), and raw body text (may be empty).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub title: String,
    pub text: String,
}

/// word -> page -> TF-IDF score. Absent pairs are implicitly zero and never
/// materialized.
pub type RelevanceIndex = HashMap<String, BTreeMap<PageId, f64>>;

/// page -> authority score; a stochastic distribution summing to 1 across the
/// whole corpus.
pub type RankVector = BTreeMap<PageId, f64>;
