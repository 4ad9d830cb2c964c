/// Catalog module for site-match
///
/// Holds the project and record data models plus the JSON-backed
/// catalog store the matching engine iterates over.

pub mod models;
pub mod store;

pub use models::*;
pub use store::{load_records, Catalog, CatalogStats};
