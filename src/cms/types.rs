use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content types the site renders
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Page,
    LandingPage,
    Article,
}

impl ResourceKind {
    /// Map a Drupal node bundle to a resource kind
    pub fn from_bundle(bundle: &str) -> Option<Self> {
        match bundle {
            "page" => Some(ResourceKind::Page),
            "landing_page" => Some(ResourceKind::LandingPage),
            "article" => Some(ResourceKind::Article),
            _ => None,
        }
    }

    pub fn resource_type(self) -> &'static str {
        match self {
            ResourceKind::Page => "node--page",
            ResourceKind::LandingPage => "node--landing_page",
            ResourceKind::Article => "node--article",
        }
    }
}

/// A content node fetched from the CMS
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CmsNode {
    pub id: String,
    pub kind: ResourceKind,
    pub title: String,
    pub summary: Option<String>,
    /// Rendered body HTML
    pub body: Option<String>,
    pub path: String,
    pub changed: Option<DateTime<Utc>>,
}

// Wire formats

#[derive(Debug, Deserialize)]
pub(crate) struct TranslatedPath {
    pub entity: TranslatedEntity,
    pub jsonapi: Option<JsonApiLink>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TranslatedEntity {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub bundle: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JsonApiLink {
    pub individual: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JsonApiDocument {
    pub data: JsonApiResource,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JsonApiResource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
    pub attributes: NodeAttributes,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NodeAttributes {
    pub title: String,
    pub body: Option<TextField>,
    pub path: Option<PathField>,
    pub changed: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TextField {
    pub processed: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PathField {
    pub alias: Option<String>,
}
