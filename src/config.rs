use crate::schema::types::{GeoCoordinates, PostalAddress};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://www.turnberryplacelasvegas.com";
pub const DEFAULT_DRUPAL_BASE_URL: &str = "https://cms.turnberryplacelasvegas.com";
pub const DEFAULT_CALENDLY_URL: &str = "https://calendly.com/turnberry-place/tour";
pub const DEFAULT_PHONE: &str = "(702) 500-1971";
pub const DEFAULT_EMAIL: &str = "info@turnberryplacelasvegas.com";
pub const DEFAULT_AGENT_NAME: &str = "Turnberry Place Sales Team";
pub const DEFAULT_AGENT_LICENSE: &str = "S.0197614";

/// Path of the lead endpoint, relative to the site base URL
pub const LEADS_PATH: &str = "/api/leads/submit";

/// Brokerage the sales office operates under
#[derive(Debug, Clone, PartialEq)]
pub struct Brokerage {
    pub name: String,
    pub url: String,
}

/// Fixed identity of the business behind the site
#[derive(Debug, Clone, PartialEq)]
pub struct Business {
    pub name: String,
    pub description: String,
    pub phone: String,
    pub email: String,
    pub logo_path: String,
    pub image_path: String,
    pub address: PostalAddress,
    pub geo: GeoCoordinates,
    pub agent_name: String,
    pub agent_title: String,
    pub agent_license: String,
    pub brokerage: Brokerage,
    pub price_range: String,
    pub opening_hours: Vec<String>,
    pub areas_served: Vec<String>,
    pub same_as: Vec<String>,
}

impl Business {
    fn with_contact(phone: String, email: String, agent_name: String, agent_license: String) -> Self {
        Self {
            name: "Turnberry Place Las Vegas".to_string(),
            description: "Four-tower luxury high-rise community one block off the Las Vegas Strip, \
                          with private estates, penthouses and the Stirling Club."
                .to_string(),
            phone,
            email,
            logo_path: "/images/turnberry-place-logo.png".to_string(),
            image_path: "/images/turnberry-place-towers.jpg".to_string(),
            address: PostalAddress::new(
                "2827 Paradise Rd",
                "Las Vegas",
                "NV",
                "89109",
                "US",
            ),
            geo: GeoCoordinates::new(36.1361, -115.1549),
            agent_name,
            agent_title: "Turnberry Place Listing Specialist".to_string(),
            agent_license,
            brokerage: Brokerage {
                name: "Turnberry Place Realty Group".to_string(),
                url: "https://www.turnberryplacerealty.com".to_string(),
            },
            price_range: "$800,000 - $10,000,000+".to_string(),
            opening_hours: vec!["Mo-Fr 09:00-18:00".to_string(), "Sa-Su 10:00-17:00".to_string()],
            areas_served: vec![
                "Las Vegas".to_string(),
                "Las Vegas Strip".to_string(),
                "Paradise".to_string(),
                "Henderson".to_string(),
                "Summerlin".to_string(),
            ],
            same_as: vec![
                "https://www.facebook.com/turnberryplacelv".to_string(),
                "https://www.instagram.com/turnberryplacelv".to_string(),
            ],
        }
    }
}

/// Site-wide configuration, resolved once at startup and passed by reference
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub base_url: String,
    pub drupal_base_url: String,
    pub google_maps_api_key: Option<String>,
    pub calendly_url: String,
    pub leads_endpoint: String,
    pub business: Business,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl SiteConfig {
    /// Read configuration from the process environment (after `.env`, if any)
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let base_url = trim_slash(get("SITE_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()));
        let drupal_base_url = trim_slash(
            get("DRUPAL_BASE_URL").unwrap_or_else(|| DEFAULT_DRUPAL_BASE_URL.to_string()),
        );
        let google_maps_api_key = get("GOOGLE_MAPS_API_KEY");
        if google_maps_api_key.is_none() {
            debug!("GOOGLE_MAPS_API_KEY is not set; map embeds will show a placeholder");
        }
        let leads_endpoint = get("LEADS_ENDPOINT").unwrap_or_else(|| format!("{}{}", base_url, LEADS_PATH));

        let business = Business::with_contact(
            get("CONTACT_PHONE").unwrap_or_else(|| DEFAULT_PHONE.to_string()),
            get("CONTACT_EMAIL").unwrap_or_else(|| DEFAULT_EMAIL.to_string()),
            get("AGENT_NAME").unwrap_or_else(|| DEFAULT_AGENT_NAME.to_string()),
            get("AGENT_LICENSE").unwrap_or_else(|| DEFAULT_AGENT_LICENSE.to_string()),
        );

        Self {
            base_url,
            drupal_base_url,
            google_maps_api_key,
            calendly_url: get("CALENDLY_URL").unwrap_or_else(|| DEFAULT_CALENDLY_URL.to_string()),
            leads_endpoint,
            business,
        }
    }

    /// Absolute URL for a site path; absolute inputs pass through unchanged
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.is_empty() || path == "/" {
            return format!("{}/", self.base_url);
        }
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// `@id` for a node on a page: base URL + page path + `#suffix`
    pub fn node_id(&self, page_path: &str, suffix: &str) -> String {
        format!("{}#{}", self.url(page_path), suffix)
    }
}

fn trim_slash(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
