/// Record-to-project resolution
///
/// Ties the matching pieces together: reserved-bucket exclusion first, then
/// evidence gathering over a record's project tag, headline, and a bounded
/// body scan. All tunable data (aliases, reserved buckets, scan width) rides
/// in an injected MatcherConfig rather than module constants.

use crate::catalog::models::{Project, Record};
use crate::core::aliases::{fuzzy_match_project, AliasTable};
use crate::core::matcher::{match_field, MatchField};
use crate::core::normalizer::{char_prefix, normalize};
use crate::error::MatchError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Bucket for records that deliberately belong to no project
pub const GENERAL_BUCKET: &str = "__general__";

/// Default tags that mark a record as project-less
const RESERVED_BUCKETS: &[&str] = &[GENERAL_BUCKET, "general", "command"];

/// Default width of the body scan, in characters
const BODY_SCAN_CHARS: usize = 500;

/// Tunable matching data, injected into a Resolver
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    pub aliases: AliasTable,
    pub reserved_buckets: Vec<String>,
    pub body_scan_chars: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        MatcherConfig {
            aliases: AliasTable::builtin(),
            reserved_buckets: RESERVED_BUCKETS.iter().map(|b| b.to_string()).collect(),
            body_scan_chars: BODY_SCAN_CHARS,
        }
    }
}

/// How a catalog resolution picks between candidate projects
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// First hit in catalog order (the historical behavior)
    First,
    /// Every hit, in catalog order
    All,
    /// Every hit, strongest evidence first: code beats name beats venue
    HighestSpecificity,
}

impl FromStr for MatchStrategy {
    type Err = MatchError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "first" => Ok(MatchStrategy::First),
            "all" => Ok(MatchStrategy::All),
            "specific" | "highest specificity" => Ok(MatchStrategy::HighestSpecificity),
            _ => Err(MatchError::UnknownStrategy(s.to_string())),
        }
    }
}

/// A catalog hit: the project plus the attribute that carried the match
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResolvedProject<'a> {
    pub project: &'a Project,
    pub field: MatchField,
}

/// The resolver owns a MatcherConfig and answers association questions
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: MatcherConfig,
}

impl Resolver {
    pub fn new(config: MatcherConfig) -> Self {
        Resolver { config }
    }

    /// The active matching configuration
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Is this tag one of the reserved no-project buckets?
    ///
    /// Compared after normalization, so "__general__", "General" and
    /// "GENERAL" all count.
    pub fn is_reserved_bucket(&self, tag: &str) -> bool {
        let tag = normalize(tag);
        self.config
            .reserved_buckets
            .iter()
            .any(|bucket| normalize(bucket) == tag)
    }

    /// The attribute tying `record` to `project`, if any
    ///
    /// A record tagged with a reserved bucket never matches, no matter what
    /// its subject or body says; that exclusion runs before any positive
    /// check. Otherwise the project tag, the headline, and (when
    /// `check_body` is set) the first `body_scan_chars` characters of the
    /// body are consulted, and the strongest attribute across them wins.
    pub fn match_evidence(
        &self,
        record: &Record,
        project: &Project,
        check_body: bool,
    ) -> Option<MatchField> {
        if let Some(tag) = record.project_name.as_deref() {
            if self.is_reserved_bucket(tag) {
                return None;
            }
        }

        let mut texts: Vec<&str> = Vec::new();
        if let Some(tag) = record.project_name.as_deref() {
            texts.push(tag);
        }
        if let Some(headline) = record.headline() {
            texts.push(headline);
        }
        if check_body {
            if let Some(body) = record.body.as_deref() {
                texts.push(char_prefix(body, self.config.body_scan_chars));
            }
        }

        texts
            .into_iter()
            .filter_map(|text| match_field(text, project))
            .min()
    }

    /// Does `record` belong to `project`?
    pub fn belongs_to_project(&self, record: &Record, project: &Project, check_body: bool) -> bool {
        self.match_evidence(record, project, check_body).is_some()
    }

    /// First catalog project the record belongs to, scanning bodies
    ///
    /// Projects are tried in slice order; the first hit wins, so callers
    /// control ambiguity by ordering the catalog. None for an empty catalog
    /// or a record that matches nothing.
    pub fn find_project<'a>(&self, record: &Record, projects: &'a [Project]) -> Option<&'a Project> {
        projects
            .iter()
            .find(|project| self.belongs_to_project(record, project, true))
    }

    /// Catalog hits under a strategy
    ///
    /// `First` keeps at most one hit, `All` keeps every hit in catalog
    /// order, and `HighestSpecificity` reorders hits by matched attribute
    /// with catalog order breaking ties.
    pub fn resolve<'a>(
        &self,
        record: &Record,
        projects: &'a [Project],
        strategy: MatchStrategy,
    ) -> Vec<ResolvedProject<'a>> {
        let mut hits: Vec<ResolvedProject<'a>> = projects
            .iter()
            .filter_map(|project| {
                self.match_evidence(record, project, true)
                    .map(|field| ResolvedProject { project, field })
            })
            .collect();

        match strategy {
            MatchStrategy::First => hits.truncate(1),
            MatchStrategy::All => {}
            // Stable sort keeps catalog order within each attribute
            MatchStrategy::HighestSpecificity => hits.sort_by_key(|hit| hit.field),
        }

        hits
    }

    /// Alias-aware check of free text against a project
    pub fn fuzzy_matches(&self, text: &str, project: &Project) -> bool {
        fuzzy_match_project(
            text,
            Some(&project.name),
            project.venue.as_deref(),
            &self.config.aliases,
        )
    }
}
