/// Single-field project matching
///
/// The cheapest question the engine answers: does this text mention that
/// project? Tries the short code first, then the name, then the venue.

use crate::catalog::models::Project;
use crate::core::normalizer::{normalize, normalize_opt};
use serde::{Deserialize, Serialize};

/// Which project attribute a text matched
///
/// Declared most-specific first and ordered that way: a code hit pins down a
/// project more reliably than a name hit, and venues are often shared
/// between projects, so a venue hit ranks last.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MatchField {
    Code,
    Name,
    Venue,
}

impl std::fmt::Display for MatchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MatchField::Code => "code",
            MatchField::Name => "name",
            MatchField::Venue => "venue",
        };
        write!(f, "{}", s)
    }
}

/// Report which attribute of `project` appears in `text`, if any
///
/// Containment is checked over normalized text, so separator and case noise
/// never block a hit. Absent attributes, and attributes that normalize to
/// nothing, are skipped rather than treated as matches.
pub fn match_field(text: &str, project: &Project) -> Option<MatchField> {
    let haystack = normalize(text);

    if mentions(&haystack, project.code.as_deref()) {
        return Some(MatchField::Code);
    }
    if mentions(&haystack, Some(&project.name)) {
        return Some(MatchField::Name);
    }
    if mentions(&haystack, project.venue.as_deref()) {
        return Some(MatchField::Venue);
    }

    None
}

/// Does `text` mention `project` through any attribute?
pub fn matches_project(text: &str, project: &Project) -> bool {
    match_field(text, project).is_some()
}

fn mentions(haystack: &str, field: Option<&str>) -> bool {
    let needle = normalize_opt(field);
    !needle.is_empty() && haystack.contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agora() -> Project {
        Project {
            name: "Agora".to_string(),
            code: Some("AGR-GEM".to_string()),
            venue: Some("Grand Egyptian Museum".to_string()),
            keywords: Vec::new(),
        }
    }

    #[test]
    fn test_code_hit_without_name() {
        // The subject never says "Agora", the code alone carries it
        let field = match_field("AGR-GEM Invoice #4", &agora());
        assert_eq!(field, Some(MatchField::Code));
        assert!(matches_project("AGR-GEM Invoice #4", &agora()));
    }

    #[test]
    fn test_name_and_venue_hits() {
        assert_eq!(match_field("the agora handover list", &agora()), Some(MatchField::Name));
        assert_eq!(
            match_field("meeting at the Grand Egyptian Museum", &agora()),
            Some(MatchField::Venue)
        );
    }

    #[test]
    fn test_code_outranks_name_outranks_venue() {
        assert_eq!(match_field("Agora / AGR-GEM punch list", &agora()), Some(MatchField::Code));
        assert_eq!(
            match_field("Agora at the Grand Egyptian Museum", &agora()),
            Some(MatchField::Name)
        );
    }

    #[test]
    fn test_no_attribute_present() {
        assert_eq!(match_field("weekly safety briefing", &agora()), None);
        assert!(!matches_project("weekly safety briefing", &agora()));
        assert!(!matches_project("", &agora()));
    }

    #[test]
    fn test_blank_attributes_never_match() {
        let mut project = Project::new("Agora");
        project.code = Some("   ".to_string());
        project.venue = Some(String::new());
        // Blank code and venue must not turn everything into a match
        assert_eq!(match_field("unrelated site report", &project), None);
        assert_eq!(match_field("agora gate", &project), Some(MatchField::Name));
    }

    #[test]
    fn test_separator_noise_ignored() {
        let mut project = Project::new("Agora GEM");
        project.code = None;
        assert!(matches_project("fwd: AGORA_GEM drawings", &project));
        assert!(matches_project("agora-gem drawings", &project));
    }

    #[test]
    fn test_field_ordering_by_specificity() {
        assert!(MatchField::Code < MatchField::Name);
        assert!(MatchField::Name < MatchField::Venue);
    }
}
