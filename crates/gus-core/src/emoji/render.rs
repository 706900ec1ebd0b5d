//! Shortcode rendering: `:alias:` to glyph

use super::catalog::EmojiCatalog;
use regex::Regex;
use std::sync::LazyLock;

static SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r":([A-Za-z0-9_+\-]+):"));

fn compile_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        // Covered by the `load_regex` test.
        Err(err) => panic!("invalid regex pattern `{pattern}`: {err}"),
    }
}

/// Replaces `:alias:` shortcodes in human-readable text with catalog glyphs
///
/// Unknown shortcodes are left as typed. Rendering is idempotent because
/// glyphs never look like shortcodes.
#[derive(Debug, Clone, Copy)]
pub struct EmojiRenderer<'a> {
    catalog: &'a EmojiCatalog,
}

impl<'a> EmojiRenderer<'a> {
    pub fn new(catalog: &'a EmojiCatalog) -> Self {
        Self { catalog }
    }

    /// Render every known shortcode in `text`
    pub fn replace_all(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        let mut pos = 0;

        while let Some(caps) = SHORTCODE_REGEX.captures_at(text, pos) {
            let (Some(whole), Some(alias)) = (caps.get(0), caps.get(1)) else {
                break;
            };
            match self.catalog.glyph(alias.as_str()) {
                Some(glyph) => {
                    out.push_str(&text[copied..whole.start()]);
                    out.push_str(glyph);
                    copied = whole.end();
                    pos = whole.end();
                }
                // The closing colon may open the next shortcode (":nope:wave:").
                None => pos = whole.end() - 1,
            }
        }

        out.push_str(&text[copied..]);
        out
    }

    /// Glyph for a raw alias as returned by the API (`:rocket:` or `rocket`),
    /// falling back to the input when the alias is unknown
    pub fn glyph_or_raw<'t>(&self, emoji: &'t str) -> std::borrow::Cow<'t, str> {
        let alias = emoji
            .strip_prefix(':')
            .and_then(|s| s.strip_suffix(':'))
            .unwrap_or(emoji);
        match self.catalog.glyph(alias) {
            Some(glyph) => std::borrow::Cow::Owned(glyph.to_string()),
            None => std::borrow::Cow::Borrowed(emoji),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_regex() {
        let catalog = EmojiCatalog::builtin();
        let _ = EmojiRenderer::new(&catalog).replace_all("x");
    }

    #[test]
    fn replaces_known_shortcode() {
        let catalog = EmojiCatalog::builtin();
        let renderer = EmojiRenderer::new(&catalog);
        assert_eq!(renderer.replace_all("Status: :wave: hi"), "Status: 👋 hi");
    }

    #[test]
    fn replaces_every_occurrence() {
        let catalog = EmojiCatalog::builtin();
        let renderer = EmojiRenderer::new(&catalog);
        assert_eq!(
            renderer.replace_all(":rocket::rocket: launch :+1:"),
            "🚀🚀 launch 👍"
        );
    }

    #[test]
    fn no_op_without_known_alias() {
        let catalog = EmojiCatalog::builtin();
        let renderer = EmojiRenderer::new(&catalog);
        let text = "nothing to see: here at 10:30:45";
        assert_eq!(renderer.replace_all(text), text);
        assert_eq!(renderer.replace_all(""), "");
    }

    #[test]
    fn unknown_shortcode_left_untouched() {
        let catalog = EmojiCatalog::builtin();
        let renderer = EmojiRenderer::new(&catalog);
        assert_eq!(renderer.replace_all(":not_an_emoji: ok"), ":not_an_emoji: ok");
    }

    #[test]
    fn unknown_shortcode_does_not_swallow_neighbour() {
        let catalog = EmojiCatalog::builtin();
        let renderer = EmojiRenderer::new(&catalog);
        assert_eq!(renderer.replace_all(":nope:wave:"), ":nope👋");
    }

    #[test]
    fn bare_words_are_not_replaced() {
        let catalog = EmojiCatalog::builtin();
        let renderer = EmojiRenderer::new(&catalog);
        assert_eq!(renderer.replace_all("I smile and wave"), "I smile and wave");
    }

    #[test]
    fn rendering_is_idempotent() {
        let catalog = EmojiCatalog::builtin();
        let renderer = EmojiRenderer::new(&catalog);
        let once = renderer.replace_all("✓ Status set to :thought_balloon: pondering");
        assert_eq!(once, "✓ Status set to 💭 pondering");
        assert_eq!(renderer.replace_all(&once), once);
    }

    #[test]
    fn glyph_or_raw_falls_back() {
        let catalog = EmojiCatalog::builtin();
        let renderer = EmojiRenderer::new(&catalog);
        assert_eq!(renderer.glyph_or_raw(":rocket:"), "🚀");
        assert_eq!(renderer.glyph_or_raw("rocket"), "🚀");
        assert_eq!(renderer.glyph_or_raw(":mystery:"), ":mystery:");
        assert_eq!(renderer.glyph_or_raw(""), "");
    }
}
