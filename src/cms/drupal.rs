use crate::cms::types::{CmsNode, JsonApiDocument, ResourceKind, TranslatedPath};
use crate::config::SiteConfig;
use anyhow::Context;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum CmsError {
    /// Missing or unsupported content; rendered as a 404 page
    #[error("no content at {path}")]
    NotFound { path: String },
    #[error("CMS returned {status} for {url}")]
    Status { status: StatusCode, url: String },
    #[error("CMS request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected CMS response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the headless Drupal content source
pub struct DrupalClient {
    client: Client,
    base_url: String,
}

impl DrupalClient {
    pub fn new(config: &SiteConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("turnberry-place/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.drupal_base_url.clone(),
        })
    }

    /// Resolve a path alias and fetch the node behind it
    pub async fn fetch_node(&self, path: &str) -> Result<CmsNode, CmsError> {
        info!("Resolving CMS path {}", path);

        let translate_url = format!("{}/router/translate-path", self.base_url);
        let response = self
            .client
            .get(&translate_url)
            .query(&[("path", path), ("_format", "json")])
            .send()
            .await?;
        let body = read_body(response, path, &translate_url).await?;
        let (kind, resource_url) = parse_translated_path(&body, path)?;

        debug!("Fetching {:?} resource from {}", kind, resource_url);
        let response = self.client.get(&resource_url).send().await?;
        let body = read_body(response, path, &resource_url).await?;

        parse_node_document(&body, kind, path)
    }
}

async fn read_body(response: reqwest::Response, path: &str, url: &str) -> Result<String, CmsError> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        warn!("CMS has no content at {}", path);
        return Err(CmsError::NotFound { path: path.to_string() });
    }
    if !status.is_success() {
        warn!("CMS returned status: {}", status);
        return Err(CmsError::Status {
            status,
            url: url.to_string(),
        });
    }
    Ok(response.text().await?)
}

/// Kind and JSON:API resource URL from a translate-path response
pub(crate) fn parse_translated_path(body: &str, path: &str) -> Result<(ResourceKind, String), CmsError> {
    let translated: TranslatedPath = serde_json::from_str(body)?;
    let not_found = || CmsError::NotFound { path: path.to_string() };

    if translated.entity.entity_type != "node" {
        debug!("Path {} resolves to a {} entity", path, translated.entity.entity_type);
        return Err(not_found());
    }
    let kind = ResourceKind::from_bundle(&translated.entity.bundle).ok_or_else(|| {
        debug!("Unsupported bundle {} at {}", translated.entity.bundle, path);
        not_found()
    })?;
    let link = translated.jsonapi.ok_or_else(not_found)?;

    Ok((kind, link.individual))
}

pub(crate) fn parse_node_document(body: &str, kind: ResourceKind, path: &str) -> Result<CmsNode, CmsError> {
    let document: JsonApiDocument = serde_json::from_str(body)?;
    let resource = document.data;

    if resource.resource_type != kind.resource_type() {
        warn!(
            "Expected {} at {}, got {}",
            kind.resource_type(),
            path,
            resource.resource_type
        );
        return Err(CmsError::NotFound { path: path.to_string() });
    }

    let attributes = resource.attributes;
    let (body, summary) = match attributes.body {
        Some(text) => (text.processed, text.summary.filter(|s| !s.trim().is_empty())),
        None => (None, None),
    };

    Ok(CmsNode {
        id: resource.id,
        kind,
        title: attributes.title,
        summary,
        body,
        path: attributes
            .path
            .and_then(|p| p.alias)
            .unwrap_or_else(|| path.to_string()),
        changed: attributes.changed,
    })
}
