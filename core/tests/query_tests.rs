use std::collections::BTreeMap;

use wikirank_core::query::{score_pages, MAX_RESULTS};
use wikirank_core::relevance::relevance_index;
use wikirank_core::{Corpus, Page, RankVector, RelevanceIndex};

fn page(id: u32, title: &str, text: &str) -> Page {
    Page { id, title: title.to_string(), text: text.to_string() }
}

const LN2: f64 = std::f64::consts::LN_2;

#[test]
fn one_term_per_page_returns_both_ranked_by_tfidf() {
    let corpus = Corpus::build(&[
        page(1, "One", "banana banana cherry"),
        page(2, "Two", "elephant date date"),
    ]);
    let index = relevance_index(&corpus);

    let hits = score_pages("banana elephant", &index, None);
    assert_eq!(hits.len(), 2);
    // banana: tf 2/2 * ln2; elephant: tf 1/2 * ln2
    assert_eq!(hits[0].0, 1);
    assert!((hits[0].1 - LN2).abs() < 1e-12);
    assert_eq!(hits[1].0, 2);
    assert!((hits[1].1 - LN2 / 2.0).abs() < 1e-12);
}

#[test]
fn scores_sum_across_query_terms() {
    let mut index = RelevanceIndex::new();
    index.insert("appl".to_string(), BTreeMap::from([(1, 0.5)]));
    index.insert("juic".to_string(), BTreeMap::from([(1, 0.25), (2, 0.625)]));

    let hits = score_pages("apple juice", &index, None);
    assert_eq!(hits[0], (1, 0.75));
    assert_eq!(hits[1], (2, 0.625));
}

#[test]
fn pagerank_multiplies_per_term() {
    let mut index = RelevanceIndex::new();
    index.insert("appl".to_string(), BTreeMap::from([(1, 0.5), (2, 0.5)]));
    let ranks: RankVector = BTreeMap::from([(1, 0.2), (2, 0.8)]);

    let plain = score_pages("apple", &index, None);
    assert_eq!(plain[0].0, 1); // equal scores break toward lower id

    let ranked = score_pages("apple", &index, Some(&ranks));
    assert_eq!(ranked[0], (2, 0.4));
    assert_eq!(ranked[1], (1, 0.1));
}

#[test]
fn ties_break_toward_lower_page_id() {
    let mut index = RelevanceIndex::new();
    index.insert("appl".to_string(), BTreeMap::from([(9, 0.5), (3, 0.5), (7, 0.5)]));

    let hits = score_pages("apple", &index, None);
    let ids: Vec<u32> = hits.iter().map(|h| h.0).collect();
    assert_eq!(ids, vec![3, 7, 9]);
}

#[test]
fn results_cap_at_ten() {
    let mut per_page = BTreeMap::new();
    for id in 0..25u32 {
        per_page.insert(id, 1.0 + f64::from(id));
    }
    let mut index = RelevanceIndex::new();
    index.insert("appl".to_string(), per_page);

    let hits = score_pages("apple", &index, None);
    assert_eq!(hits.len(), MAX_RESULTS);
    assert_eq!(hits[0].0, 24); // best score first
}

#[test]
fn unmatched_and_empty_queries_return_nothing() {
    let corpus = Corpus::build(&[page(1, "One", "banana")]);
    let index = relevance_index(&corpus);

    assert!(score_pages("", &index, None).is_empty());
    assert!(score_pages("zebra", &index, None).is_empty());
    // stopwords only
    assert!(score_pages("the and of", &index, None).is_empty());
}

#[test]
fn queries_are_normalized_like_pages() {
    let corpus = Corpus::build(&[page(1, "Cities", "many cities")]);
    let index = relevance_index(&corpus);

    // Query inflection folds to the same stem the page was indexed under.
    let hits = score_pages("city", &index, None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0, 1);
}
