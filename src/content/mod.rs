//! Static site content the pages are composed from.

use crate::models::{BreadcrumbItem, FaqItem, PlaceCategory, PlaceData, TowerData};
use serde::Serialize;

/// Pages that emit structured data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SitePage {
    Home,
    Towers,
    Faq,
    Listings,
    Neighborhood,
    Contact,
    Agent,
}

impl SitePage {
    pub const ALL: [SitePage; 7] = [
        SitePage::Home,
        SitePage::Towers,
        SitePage::Faq,
        SitePage::Listings,
        SitePage::Neighborhood,
        SitePage::Contact,
        SitePage::Agent,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            SitePage::Home => "home",
            SitePage::Towers => "towers",
            SitePage::Faq => "faq",
            SitePage::Listings => "listings",
            SitePage::Neighborhood => "neighborhood",
            SitePage::Contact => "contact",
            SitePage::Agent => "agent",
        }
    }

    pub fn meta(self) -> PageMeta {
        match self {
            SitePage::Home => PageMeta {
                path: "/",
                title: "Turnberry Place Las Vegas | Luxury High-Rise Condos Near the Strip",
                description: "Guard-gated luxury condominiums in four towers one block from the \
                              Las Vegas Strip. Residences from $800,000 to over $10 million.",
                breadcrumbs: &[],
            },
            SitePage::Towers => PageMeta {
                path: "/towers",
                title: "The Four Towers | Turnberry Place Las Vegas",
                description: "Compare Towers 1 through 4 at Turnberry Place: year built, floors, \
                              residence counts and pricing.",
                breadcrumbs: &[("Home", "/"), ("Towers", "/towers")],
            },
            SitePage::Faq => PageMeta {
                path: "/faq",
                title: "Frequently Asked Questions | Turnberry Place Las Vegas",
                description: "HOA dues, amenities, security, parking and buying at Turnberry Place.",
                breadcrumbs: &[("Home", "/"), ("FAQ", "/faq")],
            },
            SitePage::Listings => PageMeta {
                path: "/listings",
                title: "Turnberry Place Condos for Sale | Current Listings",
                description: "Residences currently for sale at Turnberry Place Las Vegas.",
                breadcrumbs: &[("Home", "/"), ("Listings", "/listings")],
            },
            SitePage::Neighborhood => PageMeta {
                path: "/neighborhood",
                title: "Neighborhood & Nearby Attractions | Turnberry Place Las Vegas",
                description: "Dining, shopping, golf and entertainment minutes from Turnberry Place.",
                breadcrumbs: &[("Home", "/"), ("Neighborhood", "/neighborhood")],
            },
            SitePage::Contact => PageMeta {
                path: "/contact",
                title: "Contact Us | Turnberry Place Las Vegas",
                description: "Schedule a private tour or ask about residences at Turnberry Place.",
                breadcrumbs: &[("Home", "/"), ("Contact", "/contact")],
            },
            SitePage::Agent => PageMeta {
                path: "/agent",
                title: "Your Turnberry Place Agent | Turnberry Place Las Vegas",
                description: "Licensed Nevada agents specializing in Turnberry Place residences.",
                breadcrumbs: &[("Home", "/"), ("Agent", "/agent")],
            },
        }
    }
}

/// SEO metadata for a page
#[derive(Debug, Clone, Copy)]
pub struct PageMeta {
    pub path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// (name, path) pairs, root first; empty for the home page
    pub breadcrumbs: &'static [(&'static str, &'static str)],
}

impl PageMeta {
    pub fn breadcrumb_items(&self) -> Vec<BreadcrumbItem> {
        self.breadcrumbs
            .iter()
            .map(|(name, path)| BreadcrumbItem::new(*name, *path))
            .collect()
    }
}

pub fn towers() -> Vec<TowerData> {
    vec![
        TowerData {
            number: 1,
            name: "Tower 1".to_string(),
            year_built: 2000,
            floors: 38,
            residences: 180,
            description: "The original tower, with sweeping Strip and mountain views.".to_string(),
            price_range: "$800,000 - $3,500,000".to_string(),
        },
        TowerData {
            number: 2,
            name: "Tower 2".to_string(),
            year_built: 2001,
            floors: 38,
            residences: 180,
            description: "Mid-rise residences and sub-penthouses facing the Strip.".to_string(),
            price_range: "$850,000 - $4,000,000".to_string(),
        },
        TowerData {
            number: 3,
            name: "Tower 3".to_string(),
            year_built: 2002,
            floors: 45,
            residences: 190,
            description: "Larger floor plans and private-elevator penthouse levels.".to_string(),
            price_range: "$900,000 - $6,500,000".to_string(),
        },
        TowerData {
            number: 4,
            name: "Tower 4".to_string(),
            year_built: 2005,
            floors: 45,
            residences: 190,
            description: "The newest tower, home to the community's grandest estates.".to_string(),
            price_range: "$1,000,000 - $10,000,000".to_string(),
        },
    ]
}

pub fn faqs() -> Vec<FaqItem> {
    vec![
        FaqItem::new(
            "Where is Turnberry Place located?",
            "Turnberry Place is at 2827 Paradise Road, one block east of the Las Vegas Strip \
             and minutes from the Las Vegas Convention Center.",
        ),
        FaqItem::new(
            "How many towers are there?",
            "Four residential towers completed between 2000 and 2005, ranging from 38 to 45 stories.",
        ),
        FaqItem::new(
            "What amenities are included?",
            "Residents enjoy the private Stirling Club with fitness center, spa, pools, tennis \
             courts and dining, plus valet parking and concierge service.",
        ),
        FaqItem::new(
            "Is the community guard-gated?",
            "Yes. Turnberry Place has 24-hour guard-gated entry with on-site security staff.",
        ),
        FaqItem::new(
            "What is the price range of residences?",
            "Residences typically range from about $800,000 to over $10,000,000 for penthouse estates.",
        ),
        FaqItem::new(
            "Are pets allowed?",
            "Pets are welcome subject to the association's rules on size and number.",
        ),
        FaqItem::new(
            "How do I schedule a private tour?",
            "Use the scheduling link on the contact page or call our office to arrange a tour.",
        ),
    ]
}

pub fn nearby_places() -> Vec<PlaceData> {
    vec![
        PlaceData {
            slug: "las-vegas-strip".to_string(),
            name: "Las Vegas Strip".to_string(),
            category: PlaceCategory::Attraction,
            description: Some("Resorts, shows and dining one block west.".to_string()),
            street_address: Some("Las Vegas Blvd S".to_string()),
            latitude: Some(36.1147),
            longitude: Some(-115.1728),
            url: None,
            distance: Some("2 minutes".to_string()),
        },
        PlaceData {
            slug: "fashion-show".to_string(),
            name: "Fashion Show Las Vegas".to_string(),
            category: PlaceCategory::Shopping,
            description: Some("Luxury and department store shopping.".to_string()),
            street_address: Some("3200 Las Vegas Blvd S".to_string()),
            latitude: Some(36.1272),
            longitude: Some(-115.1710),
            url: Some("https://www.thefashionshow.com".to_string()),
            distance: Some("5 minutes".to_string()),
        },
        PlaceData {
            slug: "wynn-golf-club".to_string(),
            name: "Wynn Golf Club".to_string(),
            category: PlaceCategory::Golf,
            description: None,
            street_address: Some("3131 Las Vegas Blvd S".to_string()),
            latitude: Some(36.1265),
            longitude: Some(-115.1637),
            url: None,
            distance: Some("4 minutes".to_string()),
        },
        PlaceData {
            slug: "convention-center".to_string(),
            name: "Las Vegas Convention Center".to_string(),
            category: PlaceCategory::Venue,
            description: None,
            street_address: Some("3150 Paradise Rd".to_string()),
            latitude: Some(36.1316),
            longitude: Some(-115.1515),
            url: None,
            distance: Some("3 minutes".to_string()),
        },
        PlaceData {
            slug: "harry-reid-airport".to_string(),
            name: "Harry Reid International Airport".to_string(),
            category: PlaceCategory::Airport,
            description: None,
            street_address: None,
            latitude: Some(36.0840),
            longitude: Some(-115.1537),
            url: None,
            distance: Some("12 minutes".to_string()),
        },
    ]
}
