/// Project lookup from free-text hints
///
/// Chat commands arrive with half a project name at best ("status agora",
/// "tasks gouna"). The ladder goes exact name, then name substring, then
/// keyword substring; ranked fuzzy suggestions cover the interactive
/// "did you mean" path.

use crate::catalog::models::Project;
use crate::core::normalizer::normalize;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::Serialize;
use std::cmp::Reverse;

/// A ranked suggestion
#[derive(Debug, Clone, Serialize)]
pub struct HintMatch<'a> {
    pub project: &'a Project,
    pub score: i64,
}

/// Resolves free-text hints to catalog projects
#[derive(Default)]
pub struct ProjectSearcher {
    matcher: SkimMatcherV2,
}

impl ProjectSearcher {
    pub fn new() -> Self {
        ProjectSearcher::default()
    }

    /// Find the project a hint refers to
    ///
    /// Tries each rung across the whole catalog before dropping down:
    /// exact normalized name, hint as a name substring, hint as a keyword
    /// substring. Blank hints find nothing.
    pub fn find_by_hint<'a>(&self, hint: &str, projects: &'a [Project]) -> Option<&'a Project> {
        let hint = normalize(hint);
        if hint.is_empty() {
            return None;
        }

        if let Some(project) = projects.iter().find(|p| normalize(&p.name) == hint) {
            return Some(project);
        }

        if let Some(project) = projects.iter().find(|p| normalize(&p.name).contains(&hint)) {
            return Some(project);
        }

        projects.iter().find(|p| {
            p.keywords
                .iter()
                .any(|keyword| normalize(keyword).contains(&hint))
        })
    }

    /// Fuzzy-ranked project suggestions for a hint
    ///
    /// # Arguments
    /// * `hint` - What the user typed
    /// * `projects` - Catalog to rank
    /// * `limit` - Maximum suggestions to return
    ///
    /// # Returns
    /// * `Vec<HintMatch>` - Suggestions sorted by score, best first
    pub fn suggest<'a>(
        &self,
        hint: &str,
        projects: &'a [Project],
        limit: usize,
    ) -> Vec<HintMatch<'a>> {
        if normalize(hint).is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<HintMatch<'a>> = projects
            .iter()
            .filter_map(|project| {
                self.matcher
                    .fuzzy_match(&project.name, hint)
                    .map(|score| HintMatch { project, score })
            })
            .collect();

        matches.sort_by_key(|hit| Reverse(hit.score));
        matches.truncate(limit);
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> Vec<Project> {
        let mut agora = Project::new("Agora");
        agora.keywords = vec!["gem".to_string(), "museum".to_string()];

        let mut hdv = Project::new("HDV Gouna");
        hdv.keywords = vec!["gouna".to_string(), "lagoon".to_string()];

        vec![agora, hdv, Project::new("Eco Tower"), Project::new("Eco")]
    }

    #[test]
    fn test_exact_name_beats_substring() {
        let searcher = ProjectSearcher::new();
        let projects = setup();

        // "Eco Tower" sits earlier in the catalog, the exact hit still wins
        let found = searcher.find_by_hint("eco", &projects).unwrap();
        assert_eq!(found.name, "Eco");

        let found = searcher.find_by_hint("HDV_Gouna", &projects).unwrap();
        assert_eq!(found.name, "HDV Gouna");
    }

    #[test]
    fn test_name_substring_rung() {
        let searcher = ProjectSearcher::new();
        let projects = setup();

        let found = searcher.find_by_hint("gou", &projects).unwrap();
        assert_eq!(found.name, "HDV Gouna");
    }

    #[test]
    fn test_keyword_rung() {
        let searcher = ProjectSearcher::new();
        let projects = setup();

        let found = searcher.find_by_hint("lagoon", &projects).unwrap();
        assert_eq!(found.name, "HDV Gouna");

        let found = searcher.find_by_hint("muse", &projects).unwrap();
        assert_eq!(found.name, "Agora");
    }

    #[test]
    fn test_blank_or_unknown_hint() {
        let searcher = ProjectSearcher::new();
        let projects = setup();

        assert!(searcher.find_by_hint("opera", &projects).is_none());
        assert!(searcher.find_by_hint("", &projects).is_none());
        assert!(searcher.find_by_hint(" _- ", &projects).is_none());
    }

    #[test]
    fn test_suggest_ranks_by_score() {
        let searcher = ProjectSearcher::new();
        let projects = setup();

        let suggestions = searcher.suggest("agr", &projects, 5);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].project.name, "Agora");
        assert!(suggestions[0].score > 0);
    }

    #[test]
    fn test_suggest_respects_limit() {
        let searcher = ProjectSearcher::new();
        let projects = setup();

        let suggestions = searcher.suggest("o", &projects, 2);
        assert_eq!(suggestions.len(), 2);
        // Best first
        assert!(suggestions[0].score >= suggestions[1].score);
    }

    #[test]
    fn test_suggest_blank_hint_is_empty() {
        let searcher = ProjectSearcher::new();
        assert!(searcher.suggest("", &setup(), 5).is_empty());
    }
}
