use crate::cms::CmsNode;
use crate::config::SiteConfig;
use crate::models::{BreadcrumbItem, FaqItem, ListingData, PlaceData, TowerData};
use crate::schema::price::{parse_price_range, PriceRange};
use crate::schema::types::*;
use tracing::{debug, warn};

const IN_STOCK: &str = "https://schema.org/InStock";
const TOWERS_PATH: &str = "/towers";
const NEIGHBORHOOD_PATH: &str = "/neighborhood";
const AGENT_PATH: &str = "/agent";

/// Optional replacements for the organization defaults
#[derive(Debug, Clone, Default)]
pub struct OrganizationOverrides {
    pub name: Option<String>,
    pub url: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub same_as: Option<Vec<String>>,
}

/// Optional replacements for the agent defaults
#[derive(Debug, Clone, Default)]
pub struct AgentOverrides {
    pub name: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub area_served: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct AggregateOfferOptions {
    pub currency: String,
    pub offer_count: Option<u32>,
    pub availability: Option<String>,
    pub url: Option<String>,
}

impl Default for AggregateOfferOptions {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            offer_count: None,
            availability: Some(IN_STOCK.to_string()),
            url: None,
        }
    }
}

pub fn organization_id(config: &SiteConfig) -> String {
    config.node_id("/", "organization")
}

pub fn agent_id(config: &SiteConfig) -> String {
    config.node_id("/", "agent")
}

fn brokerage(config: &SiteConfig) -> Organization {
    let brokerage = &config.business.brokerage;
    affiliation(&brokerage.name, &brokerage.url)
}

/// Bare organization carrying only a name and URL
fn affiliation(name: &str, url: &str) -> Organization {
    Organization {
        kind: "Organization",
        id: None,
        name: name.to_string(),
        url: url.to_string(),
        logo: None,
        description: None,
        telephone: None,
        email: None,
        address: None,
        contact_point: None,
        same_as: Vec::new(),
        parent_organization: None,
    }
}

/// The business identity, nested under its brokerage
pub fn organization_schema(config: &SiteConfig, overrides: OrganizationOverrides) -> JsonLd<Organization> {
    let business = &config.business;
    let telephone = overrides.telephone.unwrap_or_else(|| business.phone.clone());

    JsonLd::new(Organization {
        kind: "Organization",
        id: Some(organization_id(config)),
        name: overrides.name.unwrap_or_else(|| business.name.clone()),
        url: overrides.url.unwrap_or_else(|| config.url("/")),
        logo: Some(overrides.logo.unwrap_or_else(|| config.url(&business.logo_path))),
        description: Some(overrides.description.unwrap_or_else(|| business.description.clone())),
        telephone: Some(telephone.clone()),
        email: Some(overrides.email.unwrap_or_else(|| business.email.clone())),
        address: Some(business.address.clone()),
        contact_point: Some(ContactPoint {
            kind: "ContactPoint",
            telephone,
            contact_type: "sales".to_string(),
            email: Some(business.email.clone()),
            area_served: Some("US".to_string()),
            available_language: vec!["English".to_string(), "Spanish".to_string()],
        }),
        same_as: overrides.same_as.unwrap_or_else(|| business.same_as.clone()),
        parent_organization: Some(Box::new(brokerage(config))),
    })
}

pub fn real_estate_agent_schema(config: &SiteConfig, overrides: AgentOverrides) -> JsonLd<RealEstateAgent> {
    let business = &config.business;
    let areas = overrides
        .area_served
        .unwrap_or_else(|| business.areas_served.clone());

    let works_for = Organization {
        id: Some(organization_id(config)),
        ..affiliation(&business.name, &config.url("/"))
    };

    JsonLd::new(RealEstateAgent {
        kind: "RealEstateAgent",
        id: agent_id(config),
        name: overrides.name.unwrap_or_else(|| business.agent_name.clone()),
        url: overrides.url.unwrap_or_else(|| config.url(AGENT_PATH)),
        image: overrides.image.or_else(|| Some(config.url(&business.image_path))),
        description: overrides.description.or_else(|| {
            Some(format!(
                "Licensed Nevada real estate team specializing in {} residences.",
                business.name
            ))
        }),
        telephone: overrides.telephone.unwrap_or_else(|| business.phone.clone()),
        email: overrides.email.unwrap_or_else(|| business.email.clone()),
        address: business.address.clone(),
        geo: Some(business.geo.clone()),
        identifier: license(config),
        area_served: areas
            .into_iter()
            .map(|name| NamedNode { kind: "City", name })
            .collect(),
        works_for: Some(works_for),
        member_of: vec![
            brokerage(config),
            affiliation("Las Vegas REALTORS", "https://www.lasvegasrealtor.com"),
            affiliation("National Association of REALTORS", "https://www.nar.realtor"),
        ],
        price_range: Some(business.price_range.clone()),
        opening_hours: business.opening_hours.clone(),
        knows_language: vec!["English".to_string(), "Spanish".to_string()],
        same_as: business.same_as.clone(),
    })
}

fn license(config: &SiteConfig) -> PropertyValue {
    PropertyValue {
        kind: "PropertyValue",
        name: "Nevada Real Estate License".to_string(),
        value: config.business.agent_license.clone(),
    }
}

pub fn local_business_schema(config: &SiteConfig) -> JsonLd<LocalBusiness> {
    let business = &config.business;
    JsonLd::new(LocalBusiness {
        kind: "LocalBusiness",
        id: config.node_id("/", "localbusiness"),
        name: business.name.clone(),
        url: config.url("/"),
        description: Some(business.description.clone()),
        image: Some(config.url(&business.image_path)),
        telephone: business.phone.clone(),
        email: Some(business.email.clone()),
        address: business.address.clone(),
        geo: business.geo.clone(),
        has_map: Some(format!(
            "https://www.google.com/maps/search/?api=1&query={},{}",
            business.geo.latitude, business.geo.longitude
        )),
        opening_hours: business.opening_hours.clone(),
        price_range: Some(business.price_range.clone()),
        same_as: business.same_as.clone(),
    })
}

/// The listing agent as a person
pub fn person_schema(config: &SiteConfig) -> JsonLd<Person> {
    let business = &config.business;
    JsonLd::new(Person {
        kind: "Person",
        id: config.node_id(AGENT_PATH, "person"),
        name: business.agent_name.clone(),
        job_title: Some(business.agent_title.clone()),
        telephone: Some(business.phone.clone()),
        email: Some(business.email.clone()),
        url: Some(config.url(AGENT_PATH)),
        image: None,
        identifier: Some(license(config)),
        works_for: Some(brokerage(config)),
    })
}

pub fn website_schema(config: &SiteConfig) -> JsonLd<WebSite> {
    let business = &config.business;
    JsonLd::new(WebSite {
        kind: "WebSite",
        id: config.node_id("/", "website"),
        name: business.name.clone(),
        url: config.url("/"),
        description: Some(business.description.clone()),
        in_language: Some("en-US".to_string()),
        publisher: Some(IdRef::new(organization_id(config))),
    })
}

/// Positions are 1-based in input order. Empty input yields an empty list;
/// callers decide whether to render it.
pub fn breadcrumb_schema(config: &SiteConfig, items: &[BreadcrumbItem]) -> JsonLd<BreadcrumbList> {
    JsonLd::new(BreadcrumbList {
        kind: "BreadcrumbList",
        item_list_element: items
            .iter()
            .zip(1u32..)
            .map(|(item, position)| ListItem {
                kind: "ListItem",
                position,
                name: item.name.clone(),
                item: config.url(&item.url),
            })
            .collect(),
    })
}

pub fn faq_schema(config: &SiteConfig, page_path: &str, faqs: &[FaqItem]) -> JsonLd<FaqPage> {
    JsonLd::new(FaqPage {
        kind: "FAQPage",
        id: Some(config.node_id(page_path, "faq")),
        main_entity: faqs
            .iter()
            .map(|faq| Question {
                kind: "Question",
                name: faq.question.clone(),
                accepted_answer: Answer {
                    kind: "Answer",
                    text: faq.answer.clone(),
                },
            })
            .collect(),
    })
}

pub fn real_estate_listing_schema(config: &SiteConfig, listing: &ListingData) -> JsonLd<RealEstateListing> {
    let business = &config.business;
    let url = config.url(&listing.path);

    let offers = listing.price.map(|price| Offer {
        kind: "Offer",
        price: price.to_string(),
        price_currency: "USD".to_string(),
        availability: Some(IN_STOCK.to_string()),
        url: Some(url.clone()),
        seller: Some(IdRef::new(agent_id(config))),
    });

    JsonLd::new(RealEstateListing {
        kind: "RealEstateListing",
        id: config.node_id(&listing.path, "listing"),
        name: listing.name.clone(),
        description: listing.description.clone(),
        url,
        identifier: Some(listing.id.trim())
            .filter(|id| !id.is_empty())
            .map(|id| PropertyValue {
                kind: "PropertyValue",
                name: "Listing ID".to_string(),
                value: id.to_string(),
            }),
        image: listing.images.iter().map(|image| config.url(image)).collect(),
        date_posted: listing.date_posted,
        number_of_bedrooms_total: listing.bedrooms,
        number_of_bathrooms_total: listing.bathrooms,
        floor_size: listing.square_feet.map(QuantitativeValue::square_feet),
        offers,
        address: business.address.clone(),
        geo: business.geo.clone(),
        contained_in_place: listing
            .tower
            .as_ref()
            .map(|tower| IdRef::new(config.node_id(TOWERS_PATH, tower))),
    })
}

/// Price range summary for the listings page.
///
/// Strings without two whole-dollar amounts, or with the low amount above
/// the high one, fall back to
/// [`DEFAULT_LOW_PRICE`](crate::schema::price::DEFAULT_LOW_PRICE) and
/// [`DEFAULT_HIGH_PRICE`](crate::schema::price::DEFAULT_HIGH_PRICE); the
/// fallback is logged. Use [`parse_price_range`] directly to reject bad input.
pub fn aggregate_offer_schema(price_range: &str, options: AggregateOfferOptions) -> JsonLd<AggregateOffer> {
    let range = parse_price_range(price_range).unwrap_or_else(|e| {
        warn!("Falling back to default price range: {}", e);
        PriceRange::default()
    });
    JsonLd::new(aggregate_offer(range, options))
}

fn aggregate_offer(range: PriceRange, options: AggregateOfferOptions) -> AggregateOffer {
    AggregateOffer {
        kind: "AggregateOffer",
        low_price: range.low.to_string(),
        high_price: range.high.to_string(),
        price_currency: options.currency,
        offer_count: options.offer_count,
        availability: options.availability,
        url: options.url,
    }
}

pub fn place_schema(config: &SiteConfig, place: &PlaceData) -> JsonLd<Place> {
    let region = &config.business.address;
    let address = place.street_address.as_ref().map(|street| PostalAddress {
        kind: "PostalAddress",
        street_address: street.clone(),
        address_locality: region.address_locality.clone(),
        address_region: region.address_region.clone(),
        postal_code: None,
        address_country: region.address_country.clone(),
    });
    let geo = match (place.latitude, place.longitude) {
        (Some(lat), Some(lng)) => Some(GeoCoordinates::new(lat, lng)),
        _ => None,
    };

    JsonLd::new(Place {
        kind: place.category.schema_type(),
        id: config.node_id(NEIGHBORHOOD_PATH, &place.slug),
        name: place.name.clone(),
        description: place.description.clone(),
        address,
        geo,
        url: place.url.clone(),
        additional_property: place
            .distance
            .iter()
            .map(|distance| PropertyValue {
                kind: "PropertyValue",
                name: "Drive time".to_string(),
                value: distance.clone(),
            })
            .collect(),
    })
}

pub fn apartment_complex_schema(config: &SiteConfig, towers: &[TowerData]) -> JsonLd<ApartmentComplex> {
    let business = &config.business;
    let units: u32 = towers.iter().map(|t| u32::from(t.residences)).sum();

    let amenities = [
        "24-Hour Guard-Gated Security",
        "Valet Parking",
        "The Stirling Club",
        "Resort-Style Pools",
        "Tennis Courts",
        "Fitness Center and Spa",
        "Concierge",
    ];

    JsonLd::new(ApartmentComplex {
        kind: "ApartmentComplex",
        id: config.node_id(TOWERS_PATH, "apartment-complex"),
        name: business.name.clone(),
        description: business.description.clone(),
        url: config.url(TOWERS_PATH),
        image: Some(config.url(&business.image_path)),
        address: business.address.clone(),
        geo: business.geo.clone(),
        number_of_accommodation_units: (units > 0).then_some(units),
        amenity_feature: amenities
            .iter()
            .map(|name| LocationFeatureSpecification {
                kind: "LocationFeatureSpecification",
                name: name.to_string(),
                value: true,
            })
            .collect(),
        contains_place: towers
            .iter()
            .map(|tower| IdRef::new(config.node_id(TOWERS_PATH, &tower.slug())))
            .collect(),
    })
}

pub fn residence_schema(config: &SiteConfig, tower: &TowerData) -> JsonLd<Residence> {
    let offers = match parse_price_range(&tower.price_range) {
        Ok(range) => Some(aggregate_offer(range, AggregateOfferOptions::default())),
        Err(e) => {
            debug!("No offer for {}: {}", tower.name, e);
            None
        }
    };

    JsonLd::new(Residence {
        kind: "Residence",
        id: config.node_id(TOWERS_PATH, &tower.slug()),
        name: format!("{} {}", config.business.name, tower.name),
        description: tower.description.clone(),
        url: config.url(&format!("{}#{}", TOWERS_PATH, tower.slug())),
        year_built: tower.year_built,
        number_of_floors: tower.floors,
        number_of_accommodation_units: (tower.residences > 0).then_some(u32::from(tower.residences)),
        address: config.business.address.clone(),
        contained_in_place: IdRef::new(config.node_id(TOWERS_PATH, "apartment-complex")),
        offers,
    })
}

/// Article markup for a CMS news/blog node
pub fn article_schema(config: &SiteConfig, node: &CmsNode) -> JsonLd<Article> {
    let url = config.url(&node.path);
    JsonLd::new(Article {
        kind: "Article",
        id: config.node_id(&node.path, "article"),
        headline: node.title.clone(),
        url: url.clone(),
        description: node.summary.clone(),
        date_modified: node.changed,
        author: IdRef::new(agent_id(config)),
        publisher: IdRef::new(organization_id(config)),
        main_entity_of_page: url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cms::ResourceKind;
    use crate::content;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn value<T: serde::Serialize>(doc: &JsonLd<T>) -> Value {
        doc.to_value().unwrap()
    }

    fn sample_listing() -> ListingData {
        ListingData {
            id: "t2-2101".to_string(),
            name: "Tower 2 Residence 2101".to_string(),
            description: "Strip-view residence".to_string(),
            path: "/listings/t2-2101".to_string(),
            price: Some(1_450_000),
            bedrooms: Some(2),
            bathrooms: Some(2.5),
            square_feet: Some(2_350),
            images: vec!["/images/t2-2101.jpg".to_string()],
            tower: Some("tower-2".to_string()),
            date_posted: None,
        }
    }

    #[test]
    fn organization_defaults() {
        let config = SiteConfig::default();
        let org = value(&organization_schema(&config, OrganizationOverrides::default()));

        assert_eq!(org["@context"], "https://schema.org");
        assert_eq!(org["@type"], "Organization");
        assert_eq!(org["name"], config.business.name.as_str());
        assert_eq!(org["url"], config.url("/").as_str());
        assert_eq!(org["logo"], config.url(&config.business.logo_path).as_str());
        assert_eq!(org["parentOrganization"]["@type"], "Organization");
        assert_eq!(
            org["parentOrganization"]["name"],
            config.business.brokerage.name.as_str()
        );
        assert!(org["parentOrganization"].get("@context").is_none());
    }

    #[test]
    fn organization_overrides_replace_single_fields() {
        let config = SiteConfig::default();
        let org = organization_schema(
            &config,
            OrganizationOverrides {
                name: Some("Turnberry Towers".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(org.node.name, "Turnberry Towers");
        assert_eq!(org.node.url, config.url("/"));
    }

    #[test]
    fn agent_carries_license_and_affiliations() {
        let config = SiteConfig::default();
        let agent = value(&real_estate_agent_schema(&config, AgentOverrides::default()));

        assert_eq!(agent["@type"], "RealEstateAgent");
        assert_eq!(agent["identifier"]["value"], config.business.agent_license.as_str());
        assert_eq!(agent["worksFor"]["@id"], organization_id(&config).as_str());
        assert_eq!(agent["memberOf"].as_array().unwrap().len(), 3);
        assert_eq!(
            agent["areaServed"].as_array().unwrap().len(),
            config.business.areas_served.len()
        );
    }

    #[test]
    fn agent_area_override() {
        let config = SiteConfig::default();
        let agent = real_estate_agent_schema(
            &config,
            AgentOverrides {
                area_served: Some(vec!["Henderson".to_string()]),
                ..Default::default()
            },
        );
        assert_eq!(agent.node.area_served.len(), 1);
        assert_eq!(agent.node.area_served[0].name, "Henderson");
    }

    #[test]
    fn breadcrumb_positions_follow_input_order() {
        let config = SiteConfig::default();
        let items: Vec<BreadcrumbItem> = (0..5)
            .map(|i| BreadcrumbItem::new(format!("Step {}", i), format!("/step-{}", i)))
            .collect();
        let list = breadcrumb_schema(&config, &items);

        assert_eq!(list.node.item_list_element.len(), 5);
        for (i, entry) in list.node.item_list_element.iter().enumerate() {
            assert_eq!(entry.position as usize, i + 1);
            assert_eq!(entry.name, format!("Step {}", i));
            assert_eq!(entry.item, config.url(&format!("/step-{}", i)));
        }
    }

    #[test]
    fn breadcrumb_empty_input() {
        let config = SiteConfig::default();
        let list = value(&breadcrumb_schema(&config, &[]));
        assert_eq!(list["itemListElement"], json!([]));
    }

    #[test]
    fn breadcrumb_single_item() {
        let config = SiteConfig::default();
        let list = value(&breadcrumb_schema(&config, &[BreadcrumbItem::new("Home", "/")]));
        assert_eq!(
            list["itemListElement"],
            json!([{
                "@type": "ListItem",
                "position": 1,
                "name": "Home",
                "item": config.url("/"),
            }])
        );
    }

    #[test]
    fn faq_preserves_text_and_order() {
        let config = SiteConfig::default();
        let faqs = content::faqs();
        let page = faq_schema(&config, "/faq", &faqs);

        assert_eq!(page.node.main_entity.len(), faqs.len());
        for (question, faq) in page.node.main_entity.iter().zip(&faqs) {
            assert_eq!(question.name, faq.question);
            assert_eq!(question.accepted_answer.text, faq.answer);
        }
    }

    #[test]
    fn listing_with_all_fields() {
        let config = SiteConfig::default();
        let listing = value(&real_estate_listing_schema(&config, &sample_listing()));

        assert_eq!(listing["numberOfBedroomsTotal"], 2);
        assert_eq!(listing["numberOfBathroomsTotal"], 2.5);
        assert_eq!(listing["floorSize"]["value"], 2350);
        assert_eq!(listing["floorSize"]["unitCode"], "FTK");
        assert_eq!(listing["offers"]["price"], "1450000");
        assert_eq!(listing["containedInPlace"]["@id"], config.node_id("/towers", "tower-2").as_str());
        assert_eq!(
            listing["identifier"],
            json!({ "@type": "PropertyValue", "name": "Listing ID", "value": "t2-2101" })
        );
    }

    #[test]
    fn listing_omits_absent_fields() {
        let config = SiteConfig::default();
        let listing = ListingData {
            bedrooms: None,
            bathrooms: None,
            square_feet: None,
            price: None,
            images: Vec::new(),
            tower: None,
            id: "  ".to_string(),
            ..sample_listing()
        };
        let value = value(&real_estate_listing_schema(&config, &listing));
        let object = value.as_object().unwrap();

        for key in [
            "numberOfBedroomsTotal",
            "numberOfBathroomsTotal",
            "floorSize",
            "offers",
            "image",
            "datePosted",
            "containedInPlace",
            "identifier",
        ] {
            assert!(!object.contains_key(key), "{} should be omitted", key);
        }
    }

    #[test]
    fn aggregate_offer_parses_range() {
        let offer = aggregate_offer_schema("$800,000 - $10,000,000+", AggregateOfferOptions::default());
        assert_eq!(offer.node.low_price, "800000");
        assert_eq!(offer.node.high_price, "10000000");
        assert_eq!(offer.node.price_currency, "USD");
    }

    #[test]
    fn aggregate_offer_falls_back() {
        let offer = aggregate_offer_schema("invalid string", AggregateOfferOptions::default());
        assert_eq!(offer.node.low_price, "800000");
        assert_eq!(offer.node.high_price, "10000000");

        let offer = aggregate_offer_schema("$2,000,000 - $4,000,000", AggregateOfferOptions::default());
        assert_eq!(offer.node.low_price, "2000000");
        assert_eq!(offer.node.high_price, "4000000");
    }

    #[test]
    fn aggregate_offer_falls_back_on_abbreviated_or_reversed_range() {
        for input in ["$1.2M - $3.5M", "$1.5M - $3M", "$10,000,000 - $800,000"] {
            let offer = aggregate_offer_schema(input, AggregateOfferOptions::default());
            assert_eq!(offer.node.low_price, "800000", "{}", input);
            assert_eq!(offer.node.high_price, "10000000", "{}", input);
        }
    }

    #[test]
    fn place_without_coordinates() {
        let config = SiteConfig::default();
        let place = PlaceData {
            slug: "sphere".to_string(),
            name: "Sphere".to_string(),
            category: crate::models::PlaceCategory::Venue,
            description: None,
            street_address: None,
            latitude: Some(36.12),
            longitude: None,
            url: None,
            distance: None,
        };
        let value = value(&place_schema(&config, &place));
        assert_eq!(value["@type"], "EventVenue");
        assert!(value.get("geo").is_none());
        assert!(value.get("address").is_none());
        assert!(value.get("description").is_none());
        assert!(value.get("additionalProperty").is_none());
    }

    #[test]
    fn place_carries_drive_time() {
        let config = SiteConfig::default();
        let places = content::nearby_places();
        let place = &places[0];
        let value = value(&place_schema(&config, place));
        assert_eq!(
            value["additionalProperty"],
            json!([{
                "@type": "PropertyValue",
                "name": "Drive time",
                "value": place.distance.as_deref().unwrap(),
            }])
        );
    }

    #[test]
    fn towers_have_year_and_floors() {
        let config = SiteConfig::default();
        let towers = content::towers();
        let complex = apartment_complex_schema(&config, &towers);
        assert_eq!(complex.node.contains_place.len(), 4);

        for tower in &towers {
            let residence = residence_schema(&config, tower);
            assert_eq!(residence.node.year_built, tower.year_built);
            assert_eq!(residence.node.number_of_floors, tower.floors);
            assert_eq!(residence.node.contained_in_place.id, complex.node.id);
        }
    }

    #[test]
    fn article_from_cms_node() {
        let config = SiteConfig::default();
        let node = CmsNode {
            id: "a1".to_string(),
            kind: ResourceKind::Article,
            title: "Market update".to_string(),
            summary: None,
            body: None,
            path: "/news/market-update".to_string(),
            changed: None,
        };
        let article = value(&article_schema(&config, &node));
        assert_eq!(article["headline"], "Market update");
        assert_eq!(article["publisher"]["@id"], organization_id(&config).as_str());
        assert!(article.get("dateModified").is_none());
    }

    #[test]
    fn generators_are_pure() {
        let config = SiteConfig::default();
        assert_eq!(
            organization_schema(&config, OrganizationOverrides::default()),
            organization_schema(&config, OrganizationOverrides::default())
        );
        assert_eq!(
            real_estate_listing_schema(&config, &sample_listing()),
            real_estate_listing_schema(&config, &sample_listing())
        );
        assert_eq!(
            value(&local_business_schema(&config)),
            value(&local_business_schema(&config))
        );
        let faqs = content::faqs();
        assert_eq!(faq_schema(&config, "/faq", &faqs), faq_schema(&config, "/faq", &faqs));
        assert_eq!(
            real_estate_agent_schema(&config, AgentOverrides::default()),
            real_estate_agent_schema(&config, AgentOverrides::default())
        );
        assert_eq!(person_schema(&config), person_schema(&config));
        assert_eq!(website_schema(&config), website_schema(&config));

        let trail = [BreadcrumbItem::new("Home", "/"), BreadcrumbItem::new("Towers", "/towers")];
        assert_eq!(breadcrumb_schema(&config, &trail), breadcrumb_schema(&config, &trail));
        assert_eq!(
            aggregate_offer_schema("$800,000 - $10,000,000+", AggregateOfferOptions::default()),
            aggregate_offer_schema("$800,000 - $10,000,000+", AggregateOfferOptions::default())
        );

        for place in content::nearby_places() {
            assert_eq!(place_schema(&config, &place), place_schema(&config, &place));
        }
        let towers = content::towers();
        assert_eq!(
            apartment_complex_schema(&config, &towers),
            apartment_complex_schema(&config, &towers)
        );
        for tower in &towers {
            assert_eq!(residence_schema(&config, tower), residence_schema(&config, tower));
        }

        let node = CmsNode {
            id: "a2".to_string(),
            kind: ResourceKind::Article,
            title: "Tower 4 penthouse tour".to_string(),
            summary: Some("A walk through the top floor.".to_string()),
            body: None,
            path: "/news/penthouse-tour".to_string(),
            changed: None,
        };
        assert_eq!(article_schema(&config, &node), article_schema(&config, &node));
    }
}
