/// Confidence-scored record classification
///
/// The boolean resolver answers "does this belong here"; this layer answers
/// "how sure are we, and on what grounds". Three passes over the catalog,
/// strongest first: word-bounded code hits, word-bounded name hits, then
/// alias substrings. Each pass sweeps the whole catalog before the next
/// one runs, so a code hit on the last project beats a name hit on the
/// first.

use crate::catalog::models::{Project, Record};
use crate::core::aliases::AliasTable;
use crate::core::normalizer::{first_word, normalize, normalize_opt};
use regex::Regex;
use serde::Serialize;

/// Confidence assigned to a word-bounded code hit
pub const CODE_CONFIDENCE: f64 = 0.95;
/// Confidence assigned to a word-bounded name hit
pub const NAME_CONFIDENCE: f64 = 0.85;
/// Confidence assigned to an alias substring hit
pub const ALIAS_CONFIDENCE: f64 = 0.8;

// Shorter needles match everything; don't trust them
const MIN_CODE_CHARS: usize = 3;
const MIN_NAME_CHARS: usize = 4;

/// What kind of evidence decided a classification
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ClassifyMethod {
    Code,
    Name,
    Alias,
    None,
}

impl std::fmt::Display for ClassifyMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ClassifyMethod::Code => "code",
            ClassifyMethod::Name => "name",
            ClassifyMethod::Alias => "alias",
            ClassifyMethod::None => "none",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of classifying one record against a catalog
#[derive(Debug, Clone, Serialize)]
pub struct Classification<'a> {
    pub project: Option<&'a Project>,
    pub confidence: f64,
    pub method: ClassifyMethod,
}

impl<'a> Classification<'a> {
    fn unmatched() -> Self {
        Classification {
            project: None,
            confidence: 0.0,
            method: ClassifyMethod::None,
        }
    }
}

/// Per-project patterns, compiled once per catalog sweep
struct ProjectPatterns<'a> {
    project: &'a Project,
    code: Option<Regex>,
    name: Option<Regex>,
    aliases: Vec<String>,
}

/// Classifies records against a catalog with confidence scores
pub struct RecordClassifier {
    aliases: AliasTable,
}

impl RecordClassifier {
    pub fn new(aliases: AliasTable) -> Self {
        RecordClassifier { aliases }
    }

    /// Classify one record
    ///
    /// The haystack is the record's headline, full body, and sender joined
    /// together. Unlike the resolver's bounded scan, the whole body counts
    /// here. Reserved-bucket tags are the resolver's business, not this
    /// layer's.
    pub fn classify<'a>(&self, record: &Record, projects: &'a [Project]) -> Classification<'a> {
        let patterns = self.compile(projects);
        self.classify_compiled(record, &patterns)
    }

    /// Classify a batch, compiling each project's patterns only once
    pub fn classify_batch<'a>(
        &self,
        records: &[Record],
        projects: &'a [Project],
    ) -> Vec<Classification<'a>> {
        let patterns = self.compile(projects);
        records
            .iter()
            .map(|record| self.classify_compiled(record, &patterns))
            .collect()
    }

    fn compile<'a>(&self, projects: &'a [Project]) -> Vec<ProjectPatterns<'a>> {
        projects
            .iter()
            .map(|project| {
                let name = normalize(&project.name);
                let alias_key = first_word(&name).unwrap_or("");
                ProjectPatterns {
                    project,
                    code: boundary_pattern(project.code.as_deref(), MIN_CODE_CHARS),
                    name: boundary_pattern(Some(&project.name), MIN_NAME_CHARS),
                    aliases: self.aliases.aliases_for(alias_key).to_vec(),
                }
            })
            .collect()
    }

    fn classify_compiled<'a>(
        &self,
        record: &Record,
        patterns: &[ProjectPatterns<'a>],
    ) -> Classification<'a> {
        let haystack = self.haystack(record);
        if haystack.is_empty() {
            return Classification::unmatched();
        }

        for entry in patterns {
            if let Some(code) = &entry.code {
                if code.is_match(&haystack) {
                    return Classification {
                        project: Some(entry.project),
                        confidence: CODE_CONFIDENCE,
                        method: ClassifyMethod::Code,
                    };
                }
            }
        }

        for entry in patterns {
            if let Some(name) = &entry.name {
                if name.is_match(&haystack) {
                    return Classification {
                        project: Some(entry.project),
                        confidence: NAME_CONFIDENCE,
                        method: ClassifyMethod::Name,
                    };
                }
            }
        }

        for entry in patterns {
            if entry.aliases.iter().any(|alias| haystack.contains(alias.as_str())) {
                return Classification {
                    project: Some(entry.project),
                    confidence: ALIAS_CONFIDENCE,
                    method: ClassifyMethod::Alias,
                };
            }
        }

        Classification::unmatched()
    }

    fn haystack(&self, record: &Record) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(headline) = record.headline() {
            parts.push(headline);
        }
        if let Some(body) = record.body.as_deref() {
            parts.push(body);
        }
        if let Some(sender) = record.sender.as_deref() {
            parts.push(sender);
        }
        normalize(&parts.join(" "))
    }
}

fn boundary_pattern(field: Option<&str>, min_chars: usize) -> Option<Regex> {
    let needle = normalize_opt(field);
    if needle.chars().count() < min_chars {
        return None;
    }
    // Build the pattern once; escaping keeps odd code characters literal
    Regex::new(&format!(r"\b{}\b", regex::escape(&needle))).ok()
}
