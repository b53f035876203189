// src/paragraph.rs
use once_cell::sync::Lazy;
use regex::Regex;

// Start of text, or a blank line followed by a line holding at least two characters.
static PARAGRAPH_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^|(\n\n[^\n]\S*.+)").expect("paragraph pattern is valid"));

/// Counts paragraphs heuristically: one for the start of the text plus one per
/// blank line that is followed by more content. Empty text counts as 1.
pub fn count_paragraphs(text: &str) -> usize {
    PARAGRAPH_START.find_iter(text).count()
}
