use tempfile::tempdir;
use wikirank_core::persist::{
    save_meta, save_ranks, save_relevance, save_titles, IndexPaths, MetaFile,
};
use wikirank_core::rank::page_ranks;
use wikirank_core::relevance::relevance_index;
use wikirank_core::{Corpus, Page};
use wikirank_query::QueryEngine;

fn page(id: u32, title: &str, text: &str) -> Page {
    Page { id, title: title.to_string(), text: text.to_string() }
}

/// Three pages: Hub is link-popular but mentions "topic" with a diluted
/// term frequency; Feeder mentions it at full frequency but nothing links
/// to Feeder.
fn build_index(dir: &std::path::Path) {
    let pages = vec![
        page(1, "Hub", "topic topic topic filler filler filler filler"),
        page(2, "Feeder", "topic topic [[Hub]]"),
        page(3, "Other", "[[Hub]]"),
    ];
    let corpus = Corpus::build(&pages);
    let relevance = relevance_index(&corpus);
    let ranks = page_ranks(&corpus).unwrap();

    let paths = IndexPaths::new(dir);
    save_titles(&paths, &corpus.titles).unwrap();
    save_relevance(&paths, &relevance).unwrap();
    save_ranks(&paths, &ranks).unwrap();
    let meta = MetaFile {
        num_pages: corpus.page_count() as u32,
        created_at: "2026-01-01T00:00:00Z".into(),
        version: 1,
    };
    save_meta(&paths, &meta).unwrap();
}

#[test]
fn search_returns_ranked_titles() {
    let dir = tempdir().unwrap();
    build_index(dir.path());
    let engine = QueryEngine::load(dir.path().to_str().unwrap(), false).unwrap();

    let hits = engine.search("topic");
    assert_eq!(hits.len(), 2);
    // Feeder's tf is 1.0, Hub's is 3/4.
    assert_eq!(hits[0].title, "Feeder");
    assert_eq!(hits[1].title, "Hub");
    assert!(hits[0].score > hits[1].score);
}

#[test]
fn pagerank_flag_promotes_the_authoritative_page() {
    let dir = tempdir().unwrap();
    build_index(dir.path());
    let engine = QueryEngine::load(dir.path().to_str().unwrap(), true).unwrap();

    // Two pages link to Hub, so its authority outweighs Feeder's higher tf.
    let hits = engine.search("topic");
    assert_eq!(hits[0].title, "Hub");
    assert_eq!(hits[1].title, "Feeder");
}

#[test]
fn unmatched_query_yields_no_results() {
    let dir = tempdir().unwrap();
    build_index(dir.path());
    let engine = QueryEngine::load(dir.path().to_str().unwrap(), false).unwrap();

    assert!(engine.search("zebra").is_empty());
    assert!(engine.search("").is_empty());
    assert!(engine.search("the and of").is_empty());
}

#[test]
fn missing_index_directory_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("absent");
    assert!(QueryEngine::load(missing.to_str().unwrap(), false).is_err());
}
