//! Checks the JSON-LD a rendered page actually ships.

use crate::schema::SCHEMA_CONTEXT;
use anyhow::{Context, Result};
use lazy_static::lazy_static;
use reqwest::Client;
use scraper::{Html, Selector};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, warn};

lazy_static! {
    static ref LD_JSON_SCRIPT: Selector = Selector::parse(r#"script[type="application/ld+json"]"#).unwrap();
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum AuditIssue {
    InvalidJson { block: usize, message: String },
    MissingContext { document: usize },
    WrongContext { document: usize, found: String },
    MissingType { document: usize },
    NullValue { document: usize, pointer: String },
    DuplicateId { id: String },
    BreadcrumbPosition { document: usize, expected: u64, found: Value },
}

impl fmt::Display for AuditIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditIssue::InvalidJson { block, message } => {
                write!(f, "script block {} is not valid JSON: {}", block, message)
            }
            AuditIssue::MissingContext { document } => write!(f, "document {} has no @context", document),
            AuditIssue::WrongContext { document, found } => {
                write!(f, "document {} has @context {:?}", document, found)
            }
            AuditIssue::MissingType { document } => write!(f, "document {} has no @type", document),
            AuditIssue::NullValue { document, pointer } => {
                write!(f, "document {} has null at {}", document, pointer)
            }
            AuditIssue::DuplicateId { id } => write!(f, "@id {} appears more than once", id),
            AuditIssue::BreadcrumbPosition {
                document,
                expected,
                found,
            } => write!(
                f,
                "breadcrumb in document {} expected position {}, found {}",
                document, expected, found
            ),
        }
    }
}

/// JSON-LD found in a page
#[derive(Debug, Default)]
pub struct Extracted {
    pub documents: Vec<Value>,
    pub issues: Vec<AuditIssue>,
}

#[derive(Debug, Serialize)]
pub struct AuditReport {
    pub url: String,
    pub documents: usize,
    pub issues: Vec<AuditIssue>,
}

/// Parse every `application/ld+json` script block; top-level arrays are flattened
pub fn extract_json_ld(html: &str) -> Extracted {
    let document = Html::parse_document(html);

    let mut extracted = Extracted::default();
    for (block, element) in document.select(&LD_JSON_SCRIPT).enumerate() {
        let text = element.text().collect::<String>();
        match serde_json::from_str::<Value>(text.trim()) {
            Ok(Value::Array(items)) => extracted.documents.extend(items),
            Ok(value) => extracted.documents.push(value),
            Err(e) => {
                warn!("Script block {} is not valid JSON: {}", block, e);
                extracted.issues.push(AuditIssue::InvalidJson {
                    block,
                    message: e.to_string(),
                });
            }
        }
    }

    debug!("Extracted {} JSON-LD documents", extracted.documents.len());
    extracted
}

/// Structural checks shared by every page
pub fn audit_documents(documents: &[Value]) -> Vec<AuditIssue> {
    let mut issues = Vec::new();
    let mut seen_ids = HashSet::new();

    for (index, doc) in documents.iter().enumerate() {
        match doc.get("@context") {
            None => issues.push(AuditIssue::MissingContext { document: index }),
            Some(Value::String(ctx)) if ctx.trim_end_matches('/') == SCHEMA_CONTEXT => {}
            Some(other) => issues.push(AuditIssue::WrongContext {
                document: index,
                found: other.to_string(),
            }),
        }

        let graph = doc.get("@graph").and_then(Value::as_array);
        let has_type = doc
            .get("@type")
            .map(|t| match t {
                Value::String(s) => !s.is_empty(),
                Value::Array(types) => !types.is_empty(),
                _ => false,
            })
            .unwrap_or(false);
        if !has_type && graph.is_none() {
            issues.push(AuditIssue::MissingType { document: index });
        }

        find_nulls(doc, String::new(), index, &mut issues);

        let nodes: Vec<&Value> = match graph {
            Some(nodes) => nodes.iter().collect(),
            None => vec![doc],
        };
        for node in nodes {
            if let Some(id) = node.get("@id").and_then(Value::as_str) {
                if !seen_ids.insert(id.to_string()) {
                    issues.push(AuditIssue::DuplicateId { id: id.to_string() });
                }
            }
            if node.get("@type").and_then(Value::as_str) == Some("BreadcrumbList") {
                check_positions(node, index, &mut issues);
            }
        }
    }

    issues
}

fn find_nulls(value: &Value, pointer: String, document: usize, issues: &mut Vec<AuditIssue>) {
    match value {
        Value::Null => issues.push(AuditIssue::NullValue {
            document,
            pointer: if pointer.is_empty() { "/".to_string() } else { pointer },
        }),
        Value::Object(map) => {
            for (key, child) in map {
                find_nulls(child, format!("{}/{}", pointer, key), document, issues);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                find_nulls(child, format!("{}/{}", pointer, i), document, issues);
            }
        }
        _ => {}
    }
}

fn check_positions(list: &Value, document: usize, issues: &mut Vec<AuditIssue>) {
    let Some(items) = list.get("itemListElement").and_then(Value::as_array) else {
        return;
    };
    for (expected, item) in (1u64..).zip(items) {
        let found = item.get("position").cloned().unwrap_or(Value::Null);
        if found.as_u64() != Some(expected) {
            issues.push(AuditIssue::BreadcrumbPosition {
                document,
                expected,
                found,
            });
        }
    }
}

/// Download a page and audit its structured data
pub async fn fetch_and_audit(url: &str) -> Result<AuditReport> {
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("turnberry-place/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to create HTTP client")?;

    info!("Fetching {}", url);
    let response = client.get(url).send().await.context("Failed to fetch page")?;
    if !response.status().is_success() {
        warn!("{} returned status: {}", url, response.status());
        anyhow::bail!("Failed to fetch {}: {}", url, response.status());
    }
    let html = response.text().await.context("Failed to read response body")?;
    debug!("Downloaded {} bytes of HTML", html.len());

    let mut extracted = extract_json_ld(&html);
    extracted.issues.extend(audit_documents(&extracted.documents));

    Ok(AuditReport {
        url: url.to_string(),
        documents: extracted.documents.len(),
        issues: extracted.issues,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_blocks_and_flattens_arrays() {
        let html = r#"<html><head>
            <script type="application/ld+json">{"@context":"https://schema.org","@type":"Thing"}</script>
            <script type="application/ld+json">[{"@type":"A"},{"@type":"B"}]</script>
            <script type="text/javascript">var x = 1;</script>
            <script type="application/ld+json">{ broken</script>
        </head><body></body></html>"#;

        let extracted = extract_json_ld(html);
        assert_eq!(extracted.documents.len(), 3);
        assert_eq!(extracted.issues.len(), 1);
        assert!(matches!(extracted.issues[0], AuditIssue::InvalidJson { block: 2, .. }));
    }

    #[test]
    fn extraction_is_repeatable_across_pages() {
        let first = r#"<script type="application/ld+json">{"@type":"WebSite"}</script>"#;
        let second = r#"<body><script type="application/ld+json">{"@type":"FAQPage"}</script></body>"#;

        assert_eq!(extract_json_ld(first).documents, vec![json!({"@type": "WebSite"})]);
        assert_eq!(extract_json_ld(second).documents, vec![json!({"@type": "FAQPage"})]);
        assert_eq!(extract_json_ld(first).documents, vec![json!({"@type": "WebSite"})]);
    }

    #[test]
    fn flags_structural_problems() {
        let docs = vec![
            json!({"@type": "Organization", "@id": "https://x/#org", "logo": null}),
            json!({"@context": "http://example.org", "@id": "https://x/#org"}),
            json!({
                "@context": "https://schema.org",
                "@type": "BreadcrumbList",
                "itemListElement": [
                    {"@type": "ListItem", "position": 1},
                    {"@type": "ListItem", "position": 3}
                ]
            }),
        ];

        let issues = audit_documents(&docs);
        assert!(issues.contains(&AuditIssue::MissingContext { document: 0 }));
        assert!(issues.contains(&AuditIssue::NullValue {
            document: 0,
            pointer: "/logo".to_string()
        }));
        assert!(issues.contains(&AuditIssue::MissingType { document: 1 }));
        assert!(issues.contains(&AuditIssue::DuplicateId {
            id: "https://x/#org".to_string()
        }));
        assert!(issues.contains(&AuditIssue::BreadcrumbPosition {
            document: 2,
            expected: 2,
            found: json!(3)
        }));
        assert_eq!(issues.len(), 6);
    }

    #[test]
    fn graph_documents_are_typed_by_their_nodes() {
        let doc = json!({
            "@context": "https://schema.org",
            "@graph": [
                {"@type": "WebSite", "@id": "a"},
                {"@type": "WebPage", "@id": "b"}
            ]
        });
        assert!(audit_documents(&[doc]).is_empty());
    }
}
