//! Emoji catalog and shortcode rendering
//!
//! The GitHub API stores a status emoji as a shortcode (`:rocket:`). The
//! [`EmojiCatalog`] maps aliases to glyphs; the [`EmojiRenderer`] uses it to
//! turn shortcodes embedded in output text into the glyphs themselves.

mod catalog;
mod render;
mod table;

pub use catalog::{DEFAULT_EMOJI, Emoji, EmojiCatalog};
pub use render::EmojiRenderer;
