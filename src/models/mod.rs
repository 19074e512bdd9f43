use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One step in a breadcrumb trail
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BreadcrumbItem {
    pub name: String,
    /// Site path (`/towers`) or absolute URL
    pub url: String,
}

impl BreadcrumbItem {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Question and answer shown on an FAQ page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

impl FaqItem {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A single residence offered for sale
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ListingData {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Site path of the listing page
    pub path: String,
    pub price: Option<u64>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<f32>,
    pub square_feet: Option<u32>,
    pub images: Vec<String>,
    pub tower: Option<String>,
    pub date_posted: Option<NaiveDate>,
}

/// Kind of point of interest near the property
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlaceCategory {
    Attraction,
    Shopping,
    Dining,
    Golf,
    Airport,
    Venue,
}

impl PlaceCategory {
    /// schema.org type used for this category
    pub fn schema_type(self) -> &'static str {
        match self {
            PlaceCategory::Attraction => "TouristAttraction",
            PlaceCategory::Shopping => "ShoppingCenter",
            PlaceCategory::Dining => "Restaurant",
            PlaceCategory::Golf => "GolfCourse",
            PlaceCategory::Airport => "Airport",
            PlaceCategory::Venue => "EventVenue",
        }
    }
}

/// A point of interest described on the neighborhood page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceData {
    pub slug: String,
    pub name: String,
    pub category: PlaceCategory,
    pub description: Option<String>,
    pub street_address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub url: Option<String>,
    /// Drive time from the property, e.g. "5 minutes"
    pub distance: Option<String>,
}

/// One of the residential towers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TowerData {
    pub number: u8,
    pub name: String,
    pub year_built: u16,
    pub floors: u16,
    pub residences: u16,
    pub description: String,
    pub price_range: String,
}

impl TowerData {
    pub fn slug(&self) -> String {
        format!("tower-{}", self.number)
    }
}
