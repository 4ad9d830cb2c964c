/// Project catalog loading and lookup
///
/// The catalog is an ordered, validated list of projects loaded from a JSON
/// snapshot. Matching iterates it in insertion order, and that order is the
/// documented tie-breaker when more than one project could claim a record.

use crate::catalog::models::{Project, Record};
use crate::core::normalizer::normalize;
use crate::error::{MatchError, Result};
use std::path::Path;

/// Ordered project catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Build a catalog from a project list, validating every entry
    ///
    /// # Arguments
    /// * `projects` - Projects in the order matching should consider them
    ///
    /// # Returns
    /// * `Ok(Catalog)` - All entries carry a usable name
    /// * `Err(MatchError::InvalidProject)` - An entry's name normalizes to nothing
    pub fn from_projects(projects: Vec<Project>) -> Result<Self> {
        for project in &projects {
            validate(project)?;
        }
        Ok(Catalog { projects })
    }

    /// Parse a catalog from a JSON array of projects
    ///
    /// # Examples
    /// ```
    /// use site_match_lib::catalog::Catalog;
    ///
    /// let catalog = Catalog::from_json_str(r#"[{"name":"Agora","code":"AGR-GEM"}]"#).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let projects: Vec<Project> = serde_json::from_str(json)?;
        Catalog::from_projects(projects)
    }

    /// Load a catalog from a JSON snapshot file
    ///
    /// # Examples
    /// ```no_run
    /// use site_match_lib::catalog::Catalog;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let catalog = Catalog::from_path("snapshots/projects.json")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Catalog::from_json_str(&json)
    }

    /// Append a project, keeping it last in match order
    pub fn push(&mut self, project: Project) -> Result<()> {
        validate(&project)?;
        self.projects.push(project);
        Ok(())
    }

    /// Projects in match order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Find a project by name, ignoring case and separator noise
    pub fn find_by_name(&self, name: &str) -> Option<&Project> {
        let wanted = normalize(name);
        self.projects
            .iter()
            .find(|p| normalize(&p.name) == wanted)
    }

    /// Catalog statistics for debugging and CLI reports
    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            total_projects: self.projects.len(),
            with_code: count_filled(&self.projects, |p| p.code.as_deref()),
            with_venue: count_filled(&self.projects, |p| p.venue.as_deref()),
        }
    }
}

fn validate(project: &Project) -> Result<()> {
    if normalize(&project.name).is_empty() {
        return Err(MatchError::InvalidProject(format!(
            "name {:?} normalizes to nothing",
            project.name
        )));
    }
    Ok(())
}

fn count_filled(projects: &[Project], field: impl Fn(&Project) -> Option<&str>) -> usize {
    projects
        .iter()
        .filter(|p| field(p).map_or(false, |v| !v.trim().is_empty()))
        .count()
}

/// Catalog statistics
#[derive(Debug, Clone)]
pub struct CatalogStats {
    pub total_projects: usize,
    pub with_code: usize,
    pub with_venue: usize,
}

/// Load a record batch from a JSON snapshot file
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let json = std::fs::read_to_string(path)?;
    let records: Vec<Record> = serde_json::from_str(&json)?;
    Ok(records)
}
