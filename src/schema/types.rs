//! schema.org node types.
//!
//! Top-level documents are wrapped in [`JsonLd`], which adds the `@context`.
//! Nested nodes carry only their `@type`. Optional properties are skipped
//! when absent so the serialized graph never contains `null`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// A top-level JSON-LD document
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct JsonLd<T> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(flatten)]
    pub node: T,
}

impl<T: Serialize> JsonLd<T> {
    pub fn new(node: T) -> Self {
        Self {
            context: SCHEMA_CONTEXT,
            node,
        }
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Reference to another node by `@id`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IdRef {
    #[serde(rename = "@id")]
    pub id: String,
}

impl IdRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub street_address: String,
    pub address_locality: String,
    pub address_region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    pub address_country: String,
}

impl PostalAddress {
    pub fn new(street: &str, locality: &str, region: &str, postal_code: &str, country: &str) -> Self {
        Self {
            kind: "PostalAddress",
            street_address: street.to_string(),
            address_locality: locality.to_string(),
            address_region: region.to_string(),
            postal_code: Some(postal_code.to_string()),
            address_country: country.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GeoCoordinates {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            kind: "GeoCoordinates",
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub telephone: String,
    pub contact_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_served: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub available_language: Vec<String>,
}

/// Named identifier, used for the real-estate license number
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyValue {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub value: String,
}

/// Any node that is just a type and a name (`City`, `AdministrativeArea`, ...)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NamedNode {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_point: Option<ContactPoint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_organization: Option<Box<Organization>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateAgent {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub telephone: String,
    pub email: String,
    pub address: PostalAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoCoordinates>,
    pub identifier: PropertyValue,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub area_served: Vec<NamedNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub works_for: Option<Organization>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub member_of: Vec<Organization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub opening_hours: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub knows_language: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocalBusiness {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub telephone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub address: PostalAddress,
    pub geo: GeoCoordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_map: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub opening_hours: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<PropertyValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub works_for: Option<Organization>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebSite {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<IdRef>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub item_list_element: Vec<ListItem>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: u32,
    pub name: String,
    pub item: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FaqPage {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub main_entity: Vec<Question>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub accepted_answer: Answer,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Answer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuantitativeValue {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub value: u32,
    pub unit_code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_text: Option<&'static str>,
}

impl QuantitativeValue {
    pub fn square_feet(value: u32) -> Self {
        Self {
            kind: "QuantitativeValue",
            value,
            unit_code: "FTK",
            unit_text: Some("sq ft"),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub price: String,
    pub price_currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller: Option<IdRef>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AggregateOffer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub low_price: String,
    pub high_price: String,
    pub price_currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateListing {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<PropertyValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub image: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_posted: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_bedrooms_total: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_bathrooms_total: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_size: Option<QuantitativeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offers: Option<Offer>,
    pub address: PostalAddress,
    pub geo: GeoCoordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contained_in_place: Option<IdRef>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoCoordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional_property: Vec<PropertyValue>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LocationFeatureSpecification {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub value: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApartmentComplex {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub address: PostalAddress,
    pub geo: GeoCoordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_accommodation_units: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amenity_feature: Vec<LocationFeatureSpecification>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contains_place: Vec<IdRef>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Residence {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub year_built: u16,
    pub number_of_floors: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_accommodation_units: Option<u32>,
    pub address: PostalAddress,
    pub contained_in_place: IdRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offers: Option<AggregateOffer>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub headline: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<DateTime<Utc>>,
    pub author: IdRef,
    pub publisher: IdRef,
    pub main_entity_of_page: String,
}
