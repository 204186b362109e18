use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{fmt, EnvFilter};
use wikirank_query::QueryEngine;

#[derive(Parser)]
#[command(name = "wikirank-query")]
#[command(about = "Interactive search over a built wikirank index", long_about = None)]
struct Args {
    /// Index directory path
    #[arg(long, default_value = "./index")]
    index: String,
    /// Fold page authority into the scores
    #[arg(long, default_value_t = false)]
    pagerank: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let engine = QueryEngine::load(&args.index, args.pagerank)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "Search for pages here: ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim_end_matches(['\n', '\r']);
        if query == ":quit" {
            break;
        }

        let hits = engine.search(query);
        if hits.is_empty() {
            writeln!(stdout, "No results for that search.")?;
        }
        for (idx, hit) in hits.iter().enumerate() {
            writeln!(stdout, "{} {}", idx + 1, hit.title)?;
        }
    }
    Ok(())
}
