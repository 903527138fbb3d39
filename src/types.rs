// src/types.rs
//! Value types that flow through a single run: raw quotes, the formatted
//! display string, category labels and the final status payload.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between quote text and attribution in the display string.
pub const SEPARATOR: &str = " - ";
/// Marker appended when the display string had to be cut.
pub const ELLIPSIS: &str = "...";
/// Slack caps custom status text at 100 characters.
pub const DEFAULT_MAX_DISPLAY_LEN: usize = 100;

/// A quote as returned by a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub attribution: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, attribution: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attribution: attribution.into(),
        }
    }
}

/// `"{text} - {attribution}"`, never longer than the display maximum it was built with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedQuote(String);

impl FormattedQuote {
    pub fn from_quote(quote: &Quote, max_len: usize) -> Self {
        let attribution = quote.attribution.trim();
        let full = if attribution.is_empty() {
            quote.text.trim().to_string()
        } else {
            format!("{}{SEPARATOR}{attribution}", quote.text.trim())
        };
        Self::from_display(full, max_len)
    }

    /// Wrap text that is already in display form (e.g. curated fallback entries).
    pub fn from_display(text: impl Into<String>, max_len: usize) -> Self {
        Self(truncate_chars(text.into(), max_len))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in Unicode scalar values, the unit the display limit is counted in.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for FormattedQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn truncate_chars(s: String, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s;
    }
    let marker_len = ELLIPSIS.chars().count();
    if max_len <= marker_len {
        return s.chars().take(max_len).collect();
    }
    let mut out: String = s.chars().take(max_len - marker_len).collect();
    // Avoid "word ..." with a dangling space before the marker.
    while out.ends_with(char::is_whitespace) {
        out.pop();
    }
    out.push_str(ELLIPSIS);
    out
}

/// Thematic label driving emoji selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub const GENERAL: &'static str = "general";

    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into().trim().to_ascii_lowercase())
    }

    pub fn general() -> Self {
        Self(Self::GENERAL.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_general(&self) -> bool {
        self.0 == Self::GENERAL
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Everything the publisher needs for one status update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusPayload {
    pub text: FormattedQuote,
    pub emoji: String,
    /// Unix seconds of the next local midnight.
    pub expiration: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_text_and_attribution() {
        let q = Quote::new("Move fast and learn things.", "Meta Engineering");
        let f = FormattedQuote::from_quote(&q, 100);
        assert_eq!(f.as_str(), "Move fast and learn things. - Meta Engineering");
        assert_eq!(f.char_len(), 46);
    }

    #[test]
    fn empty_attribution_drops_separator() {
        let q = Quote::new("Think different.", "  ");
        assert_eq!(FormattedQuote::from_quote(&q, 100).as_str(), "Think different.");
    }

    #[test]
    fn truncates_with_ellipsis_to_exact_max() {
        let q = Quote::new("a".repeat(120), "Someone");
        let f = FormattedQuote::from_quote(&q, 80);
        assert_eq!(f.char_len(), 80);
        assert!(f.as_str().ends_with(ELLIPSIS));
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let f = FormattedQuote::from_display("é".repeat(30), 10);
        assert_eq!(f.char_len(), 10);
        assert_eq!(f.as_str(), format!("{}...", "é".repeat(7)));
    }

    #[test]
    fn truncation_trims_space_before_marker() {
        let f = FormattedQuote::from_display("abcd efgh ijkl", 8);
        assert_eq!(f.as_str(), "abcd...");
        assert!(f.char_len() <= 8);
    }

    #[test]
    fn category_labels_are_normalized() {
        assert_eq!(Category::new(" Tech "), Category::from("tech"));
        assert!(Category::general().is_general());
    }
}
