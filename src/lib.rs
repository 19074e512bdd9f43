//! Structured data, content tables and lead plumbing for the Turnberry Place
//! Las Vegas marketing site.

pub mod audit;
pub mod cms;
pub mod config;
pub mod content;
pub mod embeds;
pub mod leads;
pub mod models;
pub mod pages;
pub mod schema;

pub use config::SiteConfig;
