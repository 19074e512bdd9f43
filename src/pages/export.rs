use crate::config::SiteConfig;
use crate::content::SitePage;
use crate::pages::documents::page_documents;
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::info;

pub const COMBINED_FILE: &str = "all_pages.json";

/// Write every page's JSON-LD to `<out>/<slug>.json` plus a combined file
pub async fn export_all(config: &SiteConfig, out: &Path) -> Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(out)
        .await
        .with_context(|| format!("Failed to create {}", out.display()))?;

    let mut combined = Map::new();
    let mut written = Vec::new();

    for page in SitePage::ALL {
        let docs = page_documents(config, page)?;
        let path = out.join(format!("{}.json", page.slug()));
        let json = serde_json::to_string_pretty(&docs)?;
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
        combined.insert(page.slug().to_string(), Value::Array(docs));
    }

    let path = out.join(COMBINED_FILE);
    let json = serde_json::to_string_pretty(&combined)?;
    tokio::fs::write(&path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    written.push(path);

    info!("💾 Saved structured data for {} pages to {}", SitePage::ALL.len(), out.display());
    Ok(written)
}
