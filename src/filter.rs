// src/filter.rs
//! Content gate: length budget, topic blocklist and (in strict mode) a
//! positive-theme allowlist. Pure; no I/O.

use serde::Deserialize;

use crate::types::{DEFAULT_MAX_DISPLAY_LEN, SEPARATOR};

/// Characters reserved for the attribution before it is known.
pub const ATTRIBUTION_BUDGET: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterPolicy {
    /// Blocklist + length, and at least one positive-theme term required.
    Strict,
    /// Blocklist + length only.
    #[default]
    Loose,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    TooLong { len: usize, limit: usize },
    Blocked(String),
    NoPositiveTheme,
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    /// Short label for logs/metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            Verdict::Accepted => "accepted",
            Verdict::TooLong { .. } => "too_long",
            Verdict::Blocked(_) => "blocked_term",
            Verdict::NoPositiveTheme => "no_positive_theme",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContentFilter {
    max_display_len: usize,
    policy: FilterPolicy,
    blocklist: Vec<String>,
    allowlist: Vec<String>,
}

impl ContentFilter {
    pub fn new(
        max_display_len: usize,
        policy: FilterPolicy,
        blocklist: &[&str],
        allowlist: &[&str],
    ) -> Self {
        Self {
            max_display_len,
            policy,
            blocklist: lowered(blocklist),
            allowlist: lowered(allowlist),
        }
    }

    pub fn policy(&self) -> FilterPolicy {
        self.policy
    }

    pub fn max_display_len(&self) -> usize {
        self.max_display_len
    }

    /// Longest raw text (in chars) that can pass the length check.
    pub fn text_limit(&self) -> usize {
        self.max_display_len
            .saturating_sub(ATTRIBUTION_BUDGET)
            .saturating_sub(SEPARATOR.len())
    }

    pub fn is_appropriate(&self, text: &str) -> bool {
        self.evaluate(text).is_accepted()
    }

    pub fn evaluate(&self, text: &str) -> Verdict {
        let len = text.chars().count();
        let limit = self.text_limit();
        if len > limit {
            return Verdict::TooLong { len, limit };
        }

        let lower = text.to_lowercase();
        if let Some(term) = self.blocklist.iter().find(|t| lower.contains(t.as_str())) {
            return Verdict::Blocked(term.clone());
        }

        if self.policy == FilterPolicy::Strict
            && !self.allowlist.iter().any(|t| lower.contains(t.as_str()))
        {
            return Verdict::NoPositiveTheme;
        }

        Verdict::Accepted
    }
}

impl Default for ContentFilter {
    fn default() -> Self {
        let theme = crate::theme::Theme::default();
        Self::new(
            DEFAULT_MAX_DISPLAY_LEN,
            FilterPolicy::default(),
            crate::theme::BLOCKLIST,
            theme.allowlist(),
        )
    }
}

fn lowered(items: &[&str]) -> Vec<String> {
    items
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
