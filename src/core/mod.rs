/// Core matching engine modules
///
/// Contains the main business logic for text normalization,
/// field matching, alias lookups, and record-to-project resolution.

pub mod aliases;
pub mod feed;
pub mod matcher;
pub mod normalizer;
pub mod resolver;

pub use aliases::{fuzzy_match_project, AliasTable};
pub use feed::{project_feed, project_feed_of_kind, DEFAULT_FEED_LIMIT};
pub use matcher::{match_field, matches_project, MatchField};
pub use normalizer::{char_prefix, first_word, normalize, normalize_opt};
pub use resolver::{
    MatchStrategy, MatcherConfig, ResolvedProject, Resolver, GENERAL_BUCKET,
};
