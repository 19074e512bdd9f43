pub mod documents;
pub mod export;

pub use documents::{article_documents, listing_documents, page_documents};
pub use export::export_all;
