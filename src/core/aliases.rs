/// Alias tables and alias-aware fuzzy matching
///
/// People rarely type a project's registered name in chat. The alias table
/// maps the first word of a project name or venue to the shorthand and
/// misspellings seen in the field ("gem", "agura gem", "gouna hdv"). It is
/// plain injected data: build one empty, from the built-in defaults, in
/// code, or from a JSON file.

use crate::core::normalizer::{first_word, normalize, normalize_opt};
use crate::error::Result;
use std::collections::HashMap;
use std::path::Path;

/// Immutable alias lookup table
///
/// Keys are single normalized words; values are normalized alias phrases.
/// Lookups for unknown keys return an empty list, never an error.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: HashMap<String, Vec<String>>,
}

impl AliasTable {
    /// An empty table: fuzzy matching falls back to plain substring checks
    pub fn new() -> Self {
        AliasTable::default()
    }

    /// The built-in table shipped with the engine
    ///
    /// Covers the deployment this grew out of. Treat it as a starting
    /// point; deployment-specific data belongs in an injected table.
    pub fn builtin() -> Self {
        let mut table = AliasTable::new();
        table.insert("agora", &["agora gem", "agura gem", "agoragim", "gem"]);
        table.insert("grand", &["grand egyptian museum", "egyptian museum", "gem"]);
        table.insert("gem", &["grand egyptian museum", "agora gem"]);
        table.insert("hdv", &["hdv gouna", "gouna hdv", "el gouna"]);
        table.insert("el", &["el gouna", "hdv gouna", "gouna"]);
        table
    }

    /// Load a table from a JSON object of `key -> [aliases]`
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json)?;
        let mut table = AliasTable::new();
        for (key, aliases) in &raw {
            let aliases: Vec<&str> = aliases.iter().map(|a| a.as_str()).collect();
            table.insert(key, &aliases);
        }
        Ok(table)
    }

    /// Load a table from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        AliasTable::from_json_str(&json)
    }

    /// Add aliases under a key
    ///
    /// The key is reduced to its first normalized word, the same key the
    /// matcher derives from a project name, so "Agora-GEM" and "agora" land
    /// in the same slot. Blank keys and blank aliases are dropped.
    pub fn insert(&mut self, key: &str, aliases: &[&str]) {
        let normalized_key = normalize(key);
        let word = match first_word(&normalized_key) {
            Some(word) => word.to_string(),
            None => return,
        };

        let list = self.entries.entry(word).or_default();
        for alias in aliases {
            let alias = normalize(alias);
            if !alias.is_empty() && !list.contains(&alias) {
                list.push(alias);
            }
        }
    }

    /// Aliases registered under a key; empty slice when the key is unknown
    pub fn aliases_for(&self, key: &str) -> &[String] {
        self.entries
            .get(key)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Does `text` plausibly refer to the project described by `name`/`venue`?
///
/// Checks, in order: the name as a substring, the venue as a substring, then
/// the alias lists keyed by the first word of the name and of the venue.
/// Absent fields are skipped; an unknown alias key simply contributes no
/// aliases.
pub fn fuzzy_match_project(
    text: &str,
    name: Option<&str>,
    venue: Option<&str>,
    table: &AliasTable,
) -> bool {
    let haystack = normalize(text);

    let name = normalize_opt(name);
    if !name.is_empty() && haystack.contains(&name) {
        return true;
    }

    let venue = normalize_opt(venue);
    if !venue.is_empty() && haystack.contains(&venue) {
        return true;
    }

    alias_hit(table, &haystack, first_word(&name)) || alias_hit(table, &haystack, first_word(&venue))
}

fn alias_hit(table: &AliasTable, haystack: &str, key: Option<&str>) -> bool {
    match key {
        Some(key) => table
            .aliases_for(key)
            .iter()
            .any(|alias| haystack.contains(alias.as_str())),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_alias_hop_from_venue_words() {
        // "GEM" never appears in the registered venue name, the alias
        // table under "grand" bridges the gap
        let table = AliasTable::builtin();
        assert!(fuzzy_match_project(
            "Please review GEM drawings",
            Some("Grand Egyptian Museum"),
            None,
            &table
        ));
    }

    #[test]
    fn test_direct_name_before_aliases() {
        let empty = AliasTable::new();
        assert!(fuzzy_match_project("agora gem phase 2", Some("Agora GEM"), None, &empty));
        assert!(fuzzy_match_project(
            "handover at the grand egyptian museum",
            None,
            Some("Grand Egyptian Museum"),
            &empty
        ));
    }

    #[test]
    fn test_field_misspellings() {
        // Aliases recovered from real traffic: "Agura", "agoragim"
        let table = AliasTable::builtin();
        assert!(fuzzy_match_project("Agura GEM invoice attached", Some("Agora GEM"), None, &table));
        assert!(fuzzy_match_project("agoragim site photos", Some("Agora GEM"), None, &table));
    }

    #[test]
    fn test_venue_keyed_aliases() {
        let table = AliasTable::builtin();
        // Direct venue text is absent, the "el" key still carries "gouna"
        assert!(fuzzy_match_project("weekend shift at gouna site", None, Some("El Gouna"), &table));
    }

    #[test]
    fn test_unknown_key_is_no_match() {
        let table = AliasTable::builtin();
        assert!(!fuzzy_match_project("structural review", Some("Opera House"), None, &table));
        assert_eq!(table.aliases_for("opera"), &[] as &[String]);
    }

    #[test]
    fn test_absent_fields() {
        let table = AliasTable::builtin();
        assert!(!fuzzy_match_project("anything at all", None, None, &table));
        assert!(!fuzzy_match_project("", Some("Agora"), None, &table));
    }

    #[test]
    fn test_insert_normalizes_and_merges() {
        let mut table = AliasTable::new();
        table.insert("Agora-GEM", &["Agura  Gem"]);
        table.insert("agora", &["AGORAGIM", "agura gem"]);

        // Both keys collapse to "agora"; duplicate aliases collapse too
        assert_eq!(table.len(), 1);
        assert_eq!(table.aliases_for("agora"), &["agura gem", "agoragim"]);

        table.insert("  _- ", &["ghost"]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_table_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"hdv-gouna": ["HDV Gouna", "gouna hdv", "el gouna"]}}"#).unwrap();

        let table = AliasTable::from_path(file.path()).unwrap();
        assert_eq!(table.aliases_for("hdv"), &["hdv gouna", "gouna hdv", "el gouna"]);
        assert!(fuzzy_match_project("gouna hdv punch list", Some("HDV-Gouna"), None, &table));
    }
}
