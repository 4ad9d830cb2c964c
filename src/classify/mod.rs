/// Classification module
///
/// Handles confidence-scored record classification, chat-group mapping,
/// and free-text project lookup on top of the core matching engine.

pub mod classifier;
pub mod groups;
pub mod searcher;

pub use classifier::{
    Classification, ClassifyMethod, RecordClassifier, ALIAS_CONFIDENCE, CODE_CONFIDENCE,
    NAME_CONFIDENCE,
};
pub use groups::{ChannelKind, GroupClassification, GroupClassifier, GroupRule, GroupRules, KindHint};
pub use searcher::{HintMatch, ProjectSearcher};
