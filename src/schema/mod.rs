pub mod generators;
pub mod price;
pub mod script;
pub mod types;

pub use generators::*;
pub use price::{parse_price_range, PriceRange, PriceRangeError};
pub use script::render_scripts;
pub use types::{JsonLd, SCHEMA_CONTEXT};
