/// Chat-group name classification
///
/// Group names are the messiest signal we get: "Agora GEM Site Team",
/// "HDV_Gouna Consultants", "Command Centre". Injected keyword rules map
/// them to a project and a channel kind; the highest-confidence keyword
/// wins. Command and office groups map to the general bucket, which the
/// resolver then keeps out of every project.

use crate::core::normalizer::normalize;
use crate::error::{MatchError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What kind of channel a group is
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    Client,
    Consultant,
    Internal,
    Command,
}

impl std::fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ChannelKind::Client => "client",
            ChannelKind::Consultant => "consultant",
            ChannelKind::Internal => "internal",
            ChannelKind::Command => "command",
        };
        write!(f, "{}", s)
    }
}

/// One keyword rule: group names containing `keyword` map to `project`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupRule {
    pub keyword: String,
    /// Target project name, or the general bucket
    pub project: String,
    pub kind: ChannelKind,
    pub confidence: f64,
}

/// Fallback kind detection when no project rule matches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KindHint {
    pub kind: ChannelKind,
    pub keywords: Vec<String>,
}

/// The full injected rule set
///
/// There is deliberately no built-in rule set: group naming is pure
/// deployment data, so it always arrives from the caller or a JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupRules {
    #[serde(default)]
    pub projects: Vec<GroupRule>,
    #[serde(default)]
    pub kinds: Vec<KindHint>,
}

/// Outcome of classifying one group name
#[derive(Debug, Clone, Serialize)]
pub struct GroupClassification {
    pub project: Option<String>,
    pub kind: ChannelKind,
    pub confidence: f64,
}

/// Maps chat-group names to projects and channel kinds
pub struct GroupClassifier {
    rules: GroupRules,
}

impl GroupClassifier {
    pub fn new(rules: GroupRules) -> Self {
        GroupClassifier { rules }
    }

    /// Parse rules from JSON, rejecting entries that could never fire
    pub fn from_json_str(json: &str) -> Result<Self> {
        let rules: GroupRules = serde_json::from_str(json)?;
        for rule in &rules.projects {
            if normalize(&rule.keyword).is_empty() {
                return Err(MatchError::Config(format!(
                    "group rule for {:?} has a blank keyword",
                    rule.project
                )));
            }
            if !(0.0..=1.0).contains(&rule.confidence) {
                return Err(MatchError::Config(format!(
                    "confidence {} for keyword {:?} is out of range",
                    rule.confidence, rule.keyword
                )));
            }
        }
        Ok(GroupClassifier::new(rules))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        GroupClassifier::from_json_str(&json)
    }

    /// Classify a group name
    ///
    /// Every project rule whose keyword appears in the normalized name is a
    /// candidate; the highest confidence wins. Without a candidate, the
    /// kind hints run in order and `internal` is the final fallback.
    pub fn classify(&self, group_name: &str) -> GroupClassification {
        let name = normalize(group_name);

        let mut best: Option<&GroupRule> = None;
        for rule in &self.rules.projects {
            let keyword = normalize(&rule.keyword);
            if keyword.is_empty() || !name.contains(&keyword) {
                continue;
            }
            if best.map_or(true, |current| rule.confidence > current.confidence) {
                best = Some(rule);
            }
        }

        if let Some(rule) = best {
            return GroupClassification {
                project: Some(rule.project.clone()),
                kind: rule.kind.clone(),
                confidence: rule.confidence,
            };
        }

        GroupClassification {
            project: None,
            kind: self.kind_of(&name),
            confidence: 0.0,
        }
    }

    fn kind_of(&self, normalized_name: &str) -> ChannelKind {
        for hint in &self.rules.kinds {
            let hit = hint.keywords.iter().any(|keyword| {
                let keyword = normalize(keyword);
                !keyword.is_empty() && normalized_name.contains(&keyword)
            });
            if hit {
                return hint.kind.clone();
            }
        }
        ChannelKind::Internal
    }
}
