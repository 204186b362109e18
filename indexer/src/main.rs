use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;
use wikirank_core::persist::{
    save_meta, save_ranks, save_relevance, save_titles, IndexPaths, MetaFile,
};
use wikirank_core::rank::page_ranks;
use wikirank_core::relevance::relevance_index;
use wikirank_core::{Corpus, Page, RankVector};

use std::fs;
use std::path::{Path, PathBuf};

mod wiki;

#[derive(Parser)]
#[command(name = "wikirank-indexer")]
#[command(about = "Build relevance and rank tables from a wiki XML corpus", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index from an XML corpus file or a directory of them
    Build {
        /// Corpus path (a .xml file, or a directory searched for .xml files)
        #[arg(long)]
        corpus: String,
        /// Output index directory
        #[arg(long)]
        output: String,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { corpus, output } => build_index(&corpus, &output),
    }
}

fn build_index(corpus: &str, output: &str) -> Result<()> {
    let input_path = Path::new(corpus);
    let out_paths = IndexPaths::new(output);

    let mut files: Vec<PathBuf> = Vec::new();
    if input_path.is_dir() {
        for entry in WalkDir::new(input_path).into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && p.extension().and_then(|s| s.to_str()) == Some("xml") {
                files.push(p.to_path_buf());
            }
        }
        // walkdir order is platform-dependent; keep multi-file corpora stable
        files.sort();
    } else {
        files.push(input_path.to_path_buf());
    }

    let mut pages: Vec<Page> = Vec::new();
    for file in &files {
        let content = fs::read_to_string(file)
            .with_context(|| format!("reading corpus file {}", file.display()))?;
        let mut parsed = wiki::read_pages(&content)
            .with_context(|| format!("parsing corpus file {}", file.display()))?;
        pages.append(&mut parsed);
    }
    tracing::info!(num_pages = pages.len(), num_files = files.len(), "parsed corpus");

    let corpus = Corpus::build(&pages);
    let relevance = relevance_index(&corpus);
    let ranks = if corpus.page_count() == 0 {
        tracing::warn!("corpus has no pages; writing empty tables");
        RankVector::new()
    } else {
        page_ranks(&corpus)?
    };
    tracing::info!(num_words = relevance.len(), "computed relevance and rank tables");

    save_titles(&out_paths, &corpus.titles)?;
    save_relevance(&out_paths, &relevance)?;
    save_ranks(&out_paths, &ranks)?;
    let meta = MetaFile {
        num_pages: corpus.page_count() as u32,
        created_at: time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_else(|_| "".into()),
        version: 1,
    };
    save_meta(&out_paths, &meta)?;

    tracing::info!(output, "index build complete");
    Ok(())
}
