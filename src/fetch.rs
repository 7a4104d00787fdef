use anyhow::{Context, Result};
use tracing::info;

use crate::config::ScrapeConfig;

/// Return the FAQ page HTML, preferring the cache file over the network.
///
/// With `force` the cache is ignored and overwritten. The response body is
/// taken as-is; a bad snapshot is fixed by refetching.
pub async fn page_content(cfg: &ScrapeConfig, force: bool) -> Result<String> {
    if !force && cfg.cache_path.exists() {
        info!("Using cached page: {}", cfg.cache_path.display());
        return std::fs::read_to_string(&cfg.cache_path)
            .with_context(|| format!("Failed to read cache {}", cfg.cache_path.display()));
    }

    info!("Fetching FAQ page: {}", cfg.faq_url);
    let client = reqwest::Client::new();
    let body = client
        .get(&cfg.faq_url)
        .send()
        .await?
        .text()
        .await
        .context("Failed to fetch FAQ page")?;

    if let Some(parent) = cfg.cache_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(&cfg.cache_path, &body)
        .with_context(|| format!("Failed to write cache {}", cfg.cache_path.display()))?;
    info!("Cached {} bytes: {}", body.len(), cfg.cache_path.display());

    Ok(body)
}

// ── Tests ──
