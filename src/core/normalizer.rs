/// Text normalization for matching
///
/// Every comparison in the engine runs over normalized text, so "Agora_GEM",
/// "agora-gem" and "  agora  gem " all collapse to the same key.

/// Normalize free text for comparison
///
/// Lower-cases, then collapses every run of whitespace, underscores, and
/// hyphens into a single space, trimming the ends. Idempotent: normalizing
/// an already-normalized string changes nothing.
///
/// # Examples
/// ```
/// use site_match_lib::core::normalize;
///
/// assert_eq!(normalize("  Agora_GEM  "), "agora gem");
/// assert_eq!(normalize("HDV--Gouna"), "hdv gouna");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize an optional field; absent text normalizes to the empty string
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

/// First whitespace-delimited word, if any
///
/// Callers pass already-normalized text; this is how alias-table keys are
/// derived from project names and venues.
pub fn first_word(text: &str) -> Option<&str> {
    text.split_whitespace().next()
}

/// Prefix of at most `max_chars` characters, cut on a char boundary
///
/// Body scans look at the first 500 characters of a record. Characters, not
/// bytes: slicing bytes would split multi-byte text mid-character.
pub fn char_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_separators() {
        assert_eq!(normalize("  Agora_GEM  "), normalize("agora gem"));
        assert_eq!(normalize("grand___egyptian---museum"), "grand egyptian museum");
        assert_eq!(normalize("\tAGR-GEM\n"), "agr gem");
    }

    #[test]
    fn test_normalize_idempotent() {
        let once = normalize("  HDV_Gouna -- Site  ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  _-_  "), "");
        assert_eq!(normalize_opt(None), "");
        assert_eq!(normalize_opt(Some("Agora")), "agora");
    }

    #[test]
    fn test_first_word() {
        assert_eq!(first_word("grand egyptian museum"), Some("grand"));
        assert_eq!(first_word("agora"), Some("agora"));
        assert_eq!(first_word(""), None);
    }

    #[test]
    fn test_char_prefix_counts_chars_not_bytes() {
        assert_eq!(char_prefix("abcdef", 4), "abcd");
        assert_eq!(char_prefix("abc", 10), "abc");
        // Multi-byte: each of these is one char, several bytes
        assert_eq!(char_prefix("مشروع أجورا", 6), "مشروع ");
        assert_eq!(char_prefix("日本語テスト", 3), "日本語");
    }
}
