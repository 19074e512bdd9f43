use crate::config::SiteConfig;
use reqwest::Url;
use serde::Serialize;
use tracing::warn;

const MAPS_EMBED_URL: &str = "https://www.google.com/maps/embed/v1/place";
pub const MAP_UNAVAILABLE: &str = "Error loading map";

/// What the map slot on a page renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MapEmbed {
    Iframe { src: String },
    Unavailable { message: String },
}

/// Google Maps Embed iframe for the property, or a placeholder without an API key
pub fn map_embed(config: &SiteConfig) -> MapEmbed {
    let Some(key) = config.google_maps_api_key.as_deref() else {
        warn!("No Google Maps API key configured; rendering map placeholder");
        return MapEmbed::Unavailable {
            message: MAP_UNAVAILABLE.to_string(),
        };
    };

    let address = &config.business.address;
    let query = format!(
        "{}, {}, {}, {} {}",
        config.business.name,
        address.street_address,
        address.address_locality,
        address.address_region,
        address.postal_code.as_deref().unwrap_or_default()
    );

    match Url::parse_with_params(MAPS_EMBED_URL, &[("key", key), ("q", query.trim())]) {
        Ok(url) => MapEmbed::Iframe { src: url.into() },
        Err(e) => {
            warn!("Could not build map embed URL: {}", e);
            MapEmbed::Unavailable {
                message: MAP_UNAVAILABLE.to_string(),
            }
        }
    }
}

/// Link opened by the "schedule a tour" button
pub fn scheduling_url(config: &SiteConfig) -> String {
    config.calendly_url.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_without_key() {
        let config = SiteConfig::default();
        assert_eq!(
            map_embed(&config),
            MapEmbed::Unavailable {
                message: "Error loading map".to_string()
            }
        );
    }

    #[test]
    fn iframe_with_encoded_address() {
        let config = SiteConfig {
            google_maps_api_key: Some("test-key".to_string()),
            ..SiteConfig::default()
        };
        match map_embed(&config) {
            MapEmbed::Iframe { src } => {
                assert!(src.starts_with("https://www.google.com/maps/embed/v1/place?key=test-key&q="));
                assert!(src.contains("2827+Paradise+Rd"));
                assert!(!src.contains(' '));
            }
            other => panic!("expected iframe, got {:?}", other),
        }
    }

    #[test]
    fn scheduling_link_from_config() {
        let config = SiteConfig::default();
        assert_eq!(scheduling_url(&config), crate::config::DEFAULT_CALENDLY_URL);
    }
}
