/// site-match library
///
/// Core functionality for associating communication records with
/// construction projects.

pub mod catalog;
pub mod classify;
pub mod core;
pub mod error;

// Re-exports for convenience
pub use catalog::{Catalog, Project, Record, RecordKind};
pub use error::{MatchError, Result};
pub use self::core::{AliasTable, MatchStrategy, MatcherConfig, Resolver};
