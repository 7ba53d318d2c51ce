use anyhow::{Context, Result};
use clap::Parser;
use engine::{DocId, DocumentStatus, RequestQueue, SearchConfig, SearchEngine};
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Deserialize)]
struct InputDoc {
    id: DocId,
    text: String,
    #[serde(default)]
    status: DocumentStatus,
    #[serde(default)]
    ratings: Vec<i32>,
}

#[derive(Parser)]
#[command(name = "search-cli")]
#[command(about = "Index JSONL documents and run ranked queries from stdin", long_about = None)]
struct Args {
    /// JSONL file with one document per line:
    /// {"id": 0, "text": "...", "status": "actual", "ratings": [5, 7]}
    #[arg(long)]
    docs: PathBuf,
    /// Space-delimited stop words excluded from indexing and querying
    #[arg(long, default_value = "")]
    stop_words: String,
    /// Maximum number of hits per query
    #[arg(long, default_value_t = 5)]
    top_k: usize,
    /// Sliding window size for the no-result counter
    #[arg(long, default_value_t = engine::DEFAULT_WINDOW)]
    window: usize,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let mut search_engine =
        SearchEngine::with_config(&args.stop_words, SearchConfig { top_k: args.top_k })?;

    let file = File::open(&args.docs)
        .with_context(|| format!("opening {}", args.docs.display()))?;
    let mut added = 0usize;
    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let doc: InputDoc = serde_json::from_str(&line)?;
        search_engine.add_document(doc.id, &doc.text, doc.status, &doc.ratings)?;
        added += 1;
    }
    tracing::info!(added, "documents indexed");

    let mut queue = RequestQueue::with_capacity(&search_engine, args.window);
    for line in io::stdin().lock().lines() {
        let query = line?;
        if query.trim().is_empty() {
            continue;
        }
        match queue.add_find_request(&query) {
            Ok(hits) => {
                for hit in &hits {
                    println!("{hit}");
                }
                tracing::info!(
                    %query,
                    hits = hits.len(),
                    no_result = queue.no_result_count(),
                    "query served"
                );
            }
            Err(err) => tracing::warn!(%query, error = %err, "query rejected"),
        }
    }
    Ok(())
}
