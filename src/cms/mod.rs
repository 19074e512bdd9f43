pub mod drupal;
pub mod types;

pub use drupal::{CmsError, DrupalClient};
pub use types::{CmsNode, ResourceKind};
