//! Emoji catalog: glyphs, aliases and descriptions

use super::table::BUILTIN;
use std::collections::HashMap;
use std::fmt;

/// Alias used by `set` when no emoji is given.
pub const DEFAULT_EMOJI: &str = "thought_balloon";

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emoji {
    /// The rendered glyph (may span several code points)
    pub codepoint: String,
    /// Aliases, first is canonical
    pub names: Vec<String>,
    pub description: String,
}

impl Emoji {
    /// Create an entry; `names` must not be empty
    pub fn new(
        codepoint: impl Into<String>,
        names: Vec<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            codepoint: codepoint.into(),
            names,
            description: description.into(),
        }
    }

    /// Canonical alias (the first name)
    pub fn name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or_default()
    }
}

impl fmt::Display for Emoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.codepoint, self.names.join(", "), self.description)
    }
}

/// Ordered, immutable emoji lookup table
///
/// Built once by the caller and passed by reference to whatever needs it.
/// Lookups are exact-match on alias text; the first entry to claim an alias
/// keeps it.
#[derive(Debug, Clone)]
pub struct EmojiCatalog {
    entries: Vec<Emoji>,
    by_alias: HashMap<String, usize>,
}

impl EmojiCatalog {
    /// Build a catalog from entries, preserving their order
    pub fn new(entries: Vec<Emoji>) -> Self {
        let mut by_alias = HashMap::new();
        for (idx, emoji) in entries.iter().enumerate() {
            for name in &emoji.names {
                by_alias.entry(name.clone()).or_insert(idx);
            }
        }
        Self { entries, by_alias }
    }

    /// The built-in GitHub shortcode table
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(glyph, names, desc)| {
                Emoji::new(*glyph, names.iter().map(|n| n.to_string()).collect(), *desc)
            })
            .collect();
        Self::new(entries)
    }

    /// Look up an entry by alias
    pub fn get(&self, alias: &str) -> Option<&Emoji> {
        self.by_alias.get(alias).map(|&idx| &self.entries[idx])
    }

    /// Glyph for an alias, if known
    pub fn glyph(&self, alias: &str) -> Option<&str> {
        self.get(alias).map(|e| e.codepoint.as_str())
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.by_alias.contains_key(alias)
    }

    /// Index of the entry owning `alias`, in catalog order
    pub fn position(&self, alias: &str) -> Option<usize> {
        self.by_alias.get(alias).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Emoji> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(glyph: &str, names: &[&str]) -> Emoji {
        Emoji::new(glyph, names.iter().map(|n| n.to_string()).collect(), "test")
    }

    #[test]
    fn builtin_has_default_emoji() {
        let catalog = EmojiCatalog::builtin();
        assert!(catalog.contains(DEFAULT_EMOJI));
        assert_eq!(catalog.glyph(DEFAULT_EMOJI), Some("💭"));
    }

    #[test]
    fn builtin_aliases_are_unique() {
        let catalog = EmojiCatalog::builtin();
        let alias_count: usize = catalog.iter().map(|e| e.names.len()).sum();
        assert_eq!(alias_count, catalog.by_alias.len());
    }

    #[test]
    fn builtin_entries_have_names() {
        let catalog = EmojiCatalog::builtin();
        assert!(!catalog.is_empty());
        assert!(catalog.iter().all(|e| !e.names.is_empty() && !e.codepoint.is_empty()));
    }

    #[test]
    fn lookup_by_any_alias() {
        let catalog = EmojiCatalog::builtin();
        assert_eq!(catalog.glyph("+1"), Some("👍"));
        assert_eq!(catalog.glyph("thumbsup"), Some("👍"));
        assert_eq!(catalog.get("thumbsup").unwrap().name(), "+1");
    }

    #[test]
    fn lookup_is_exact_match() {
        let catalog = EmojiCatalog::builtin();
        assert!(catalog.get("Rocket").is_none());
        assert!(catalog.get(":rocket:").is_none());
        assert!(catalog.get("🚀").is_none());
    }

    #[test]
    fn first_entry_keeps_duplicate_alias() {
        let catalog = EmojiCatalog::new(vec![entry("A", &["dup", "a"]), entry("B", &["b", "dup"])]);
        assert_eq!(catalog.glyph("dup"), Some("A"));
        assert_eq!(catalog.position("b"), Some(1));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn display_lists_glyph_names_and_description() {
        let emoji = entry("🚀", &["rocket", "launch"]);
        assert_eq!(emoji.to_string(), "🚀 rocket, launch test");
    }
}
