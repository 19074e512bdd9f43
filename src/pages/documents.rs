//! Structured data emitted by each page of the site.

use crate::cms::CmsNode;
use crate::config::SiteConfig;
use crate::content::{self, SitePage};
use crate::models::{BreadcrumbItem, ListingData};
use crate::schema::{self, AgentOverrides, AggregateOfferOptions, OrganizationOverrides};
use serde_json::Value;

/// JSON-LD documents for a page, in emission order
pub fn page_documents(config: &SiteConfig, page: SitePage) -> serde_json::Result<Vec<Value>> {
    let meta = page.meta();
    let mut docs = Vec::new();

    match page {
        SitePage::Home => {
            docs.push(schema::organization_schema(config, OrganizationOverrides::default()).to_value()?);
            docs.push(schema::website_schema(config).to_value()?);
            docs.push(schema::real_estate_agent_schema(config, AgentOverrides::default()).to_value()?);
            docs.push(schema::local_business_schema(config).to_value()?);
        }
        SitePage::Towers => {
            let towers = content::towers();
            docs.push(schema::apartment_complex_schema(config, &towers).to_value()?);
            for tower in &towers {
                docs.push(schema::residence_schema(config, tower).to_value()?);
            }
        }
        SitePage::Faq => {
            docs.push(schema::faq_schema(config, meta.path, &content::faqs()).to_value()?);
        }
        SitePage::Listings => {
            let options = AggregateOfferOptions {
                url: Some(config.url(meta.path)),
                ..Default::default()
            };
            docs.push(schema::aggregate_offer_schema(&config.business.price_range, options).to_value()?);
        }
        SitePage::Neighborhood => {
            for place in &content::nearby_places() {
                docs.push(schema::place_schema(config, place).to_value()?);
            }
        }
        SitePage::Contact => {
            docs.push(schema::local_business_schema(config).to_value()?);
            docs.push(schema::person_schema(config).to_value()?);
        }
        SitePage::Agent => {
            docs.push(schema::real_estate_agent_schema(config, AgentOverrides::default()).to_value()?);
            docs.push(schema::person_schema(config).to_value()?);
        }
    }

    push_breadcrumbs(config, &mut docs, &meta.breadcrumb_items())?;
    Ok(docs)
}

/// Documents for an individual listing page
pub fn listing_documents(config: &SiteConfig, listing: &ListingData) -> serde_json::Result<Vec<Value>> {
    let mut docs = vec![schema::real_estate_listing_schema(config, listing).to_value()?];
    let mut trail = SitePage::Listings.meta().breadcrumb_items();
    trail.push(BreadcrumbItem::new(listing.name.clone(), listing.path.clone()));
    push_breadcrumbs(config, &mut docs, &trail)?;
    Ok(docs)
}

/// Documents for a CMS-backed article page
pub fn article_documents(config: &SiteConfig, node: &CmsNode) -> serde_json::Result<Vec<Value>> {
    let mut docs = vec![schema::article_schema(config, node).to_value()?];
    let trail = vec![
        BreadcrumbItem::new("Home", "/"),
        BreadcrumbItem::new(node.title.clone(), node.path.clone()),
    ];
    push_breadcrumbs(config, &mut docs, &trail)?;
    Ok(docs)
}

// Empty trails are not rendered
fn push_breadcrumbs(config: &SiteConfig, docs: &mut Vec<Value>, trail: &[BreadcrumbItem]) -> serde_json::Result<()> {
    if !trail.is_empty() {
        docs.push(schema::breadcrumb_schema(config, trail).to_value()?);
    }
    Ok(())
}
