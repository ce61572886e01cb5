use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

use stayquote::adapters::cache::memory_cache::MemoryCache;
use stayquote::adapters::cached::CachedBackend;
use stayquote::adapters::rest::client::RestBackend;
use stayquote::config::load_config;
use stayquote::domain::quote::QuoteRequest;
use stayquote::pricing::engine::QuoteEngine;

fn find_config_path() -> PathBuf {
    // Check common locations for config file
    let candidates = [
        PathBuf::from("config.yaml"),
        exe_dir().join("config.yaml"),
    ];

    for path in &candidates {
        if path.exists() {
            return path.clone();
        }
    }

    candidates[0].clone()
}

fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Reads one quote request as JSON on stdin and prints the computed quote:
/// human-readable by default, pretty JSON with `--json`.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let json_output = std::env::args().any(|arg| arg == "--json");

    let config_path = find_config_path();
    let config = load_config(&config_path)?;

    let cache: Arc<dyn stayquote::ports::cache::QuoteCache> =
        Arc::new(MemoryCache::new(config.cache.max_entries));
    let rest = RestBackend::new(&config.backend).context("failed to build backend client")?;
    let backend: Arc<dyn stayquote::ports::backend::BookingBackend> = Arc::new(
        CachedBackend::new(Arc::new(rest), cache, Duration::from_secs(config.cache.ttl_secs)),
    );
    let engine = QuoteEngine::new(backend, config.pricing);

    let mut input = String::new();
    tokio::io::stdin()
        .read_to_string(&mut input)
        .await
        .context("failed to read quote request from stdin")?;
    let request: QuoteRequest =
        serde_json::from_str(&input).context("invalid quote request JSON")?;

    let result = engine.calculate_quote(&request).await?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{result}");
    }

    Ok(())
}
