// src/theme.rs
//! Compiled-in tables. A theme bundles the category keyword table, emoji
//! sets, positive-theme allowlist and curated fallback pool; the topic
//! blocklist is shared by all themes.

use serde::Deserialize;

pub type LabelTable = &'static [(&'static str, &'static [&'static str])];

/// Topics we never put in a status, matched as lowercase substrings.
pub const BLOCKLIST: &[&str] = &[
    "death", "dying", "mortality", "kill", "pain", "suffer", "black", "white", "race",
    "gender", "political", "religion", "racist", "sexist", "offensive", "controversial",
    "hate", "drug", "alcohol", "nsfw", "dating", "gambling", "war", "violence", "crime",
    "fear", "anxiety", "depression", "fail", "negative", "darkness", "troubled",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Tech, leadership and pop-culture flavour.
    #[default]
    Tech,
    /// General inspiration and personal growth.
    Inspiration,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Tech => "tech",
            Theme::Inspiration => "inspiration",
        }
    }

    pub fn keywords(&self) -> LabelTable {
        match self {
            Theme::Tech => TECH_KEYWORDS,
            Theme::Inspiration => INSPIRATION_KEYWORDS,
        }
    }

    pub fn emoji(&self) -> LabelTable {
        match self {
            Theme::Tech => TECH_EMOJI,
            Theme::Inspiration => INSPIRATION_EMOJI,
        }
    }

    pub fn allowlist(&self) -> &'static [&'static str] {
        match self {
            Theme::Tech => TECH_ALLOWLIST,
            Theme::Inspiration => INSPIRATION_ALLOWLIST,
        }
    }

    /// `(display text, category)` pairs used when live fetching gives up.
    /// Every entry passes the loose filter at the default display length;
    /// entries carrying an allowlist term also pass the strict one.
    pub fn fallback_pool(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Theme::Tech => TECH_FALLBACK,
            Theme::Inspiration => INSPIRATION_FALLBACK,
        }
    }
}

const TECH_KEYWORDS: LabelTable = &[
    ("tech", &["code", "program", "developer", "engineer", "system", "data"]),
    ("innovation", &["innovate", "create", "invent", "build", "design", "future"]),
    ("leadership", &["lead", "guide", "inspire", "achieve", "vision", "success"]),
    ("wisdom", &["learn", "know", "understand", "truth", "mind", "think"]),
    ("power", &["strength", "force", "power", "strong", "mighty", "valor"]),
    ("victory", &["win", "conquer", "achieve", "triumph", "succeed", "accomplish"]),
    ("journey", &["path", "way", "road", "journey", "quest", "adventure"]),
];

const TECH_EMOJI: LabelTable = &[
    ("tech", &["💻", "⚡", "🤖", "🚀", "💡"]),
    ("innovation", &["✨", "💫", "🌟", "⭐", "🔮"]),
    ("leadership", &["👑", "🎯", "🦁", "⚔️", "🛡️"]),
    ("wisdom", &["🧠", "📚", "🎓", "🌿", "🔮"]),
    ("power", &["⚡", "💪", "🔥", "⚔️", "✨"]),
    ("victory", &["🏆", "👑", "⭐", "🌟", "🔥"]),
    ("journey", &["🧭", "🗺️", "⭐", "🌠", "🚀"]),
    ("general", &["💫", "✨", "⭐", "🌟", "💝"]),
];

const TECH_ALLOWLIST: &[&str] = &[
    "innovation", "leadership", "technology", "success", "growth", "courage", "wisdom",
    "power", "victory", "excellence", "creativity", "determination", "strength", "progress",
    "vision", "achievement", "inspiration", "discovery", "breakthrough", "triumph",
];

const TECH_FALLBACK: &[(&str, &str)] = &[
    ("Innovation distinguishes between a leader and a follower. - Steve Jobs", "innovation"),
    ("Move fast and learn things. - Meta Engineering", "tech"),
    ("Done is better than perfect. - Sheryl Sandberg", "leadership"),
    ("Make it work, make it right, make it fast. - Kent Beck", "tech"),
    ("First solve the problem, then write the code. - John Johnson", "tech"),
    ("Stay hungry, stay foolish. - Steve Jobs", "innovation"),
    ("Talk is cheap. Show me the code. - Linus Torvalds", "tech"),
    ("Chaos isn't a pit. Chaos is a ladder. - Littlefinger", "wisdom"),
    ("The man who passes the sentence should swing the sword. - Ned Stark", "leadership"),
    ("I am not a politician, I am a queen. - Daenerys Targaryen", "power"),
    ("The night is dark and full of terrors, but the fire burns them all away. - Melisandre", "victory"),
    ("Do. Or do not. There is no try. - Yoda", "wisdom"),
    ("Never tell me the odds. - Han Solo", "courage"),
    ("The Force will be with you. Always. - Obi-Wan Kenobi", "power"),
    ("In my experience, there's no such thing as luck. - Obi-Wan Kenobi", "wisdom"),
    ("All we have to decide is what to do with the time given us. - Gandalf", "wisdom"),
    ("Even the smallest person can change the course of the future. - Galadriel", "innovation"),
    ("There's some good in this world, and it's worth fighting for. - Sam", "victory"),
    ("I am Iron Man. - Tony Stark", "power"),
    ("With great power comes great responsibility. - Uncle Ben", "leadership"),
    ("I can do this all day. - Steve Rogers", "determination"),
    ("I am not a robot. I just speak in code. - Silicon Valley", "tech"),
    ("It's not a bug, it's an undocumented feature. - Programming Wisdom", "tech"),
    ("The best way to predict the future is to invent it. - Alan Kay", "innovation"),
    ("Code is poetry. - WordPress", "tech"),
    ("Think different. - Apple", "innovation"),
    ("Creativity is intelligence having fun. - Albert Einstein", "innovation"),
    ("Technology is best when it brings people together. - Matt Mullenweg", "tech"),
    ("Vision without execution is hallucination. - Thomas Edison", "leadership"),
];

const INSPIRATION_KEYWORDS: LabelTable = &[
    ("inspiration", &["inspire", "dream", "believe", "imagine", "hope", "wonder"]),
    ("motivation", &["goal", "work", "effort", "action", "start", "persist"]),
    ("wisdom", &["learn", "know", "understand", "truth", "mind", "think"]),
    ("life", &["life", "live", "moment", "today", "happiness", "joy"]),
    ("love", &["love", "heart", "kind", "friend", "compassion", "care"]),
    ("future", &["future", "tomorrow", "becom", "destiny", "possib", "next"]),
    ("growth", &["grow", "improve", "change", "progress", "better", "evolve"]),
];

const INSPIRATION_EMOJI: LabelTable = &[
    ("inspiration", &["✨", "🌟", "💫", "🌈", "🎇"]),
    ("motivation", &["💪", "🔥", "🚀", "🏃", "🎯"]),
    ("wisdom", &["🧠", "📚", "🦉", "🌿", "🔮"]),
    ("life", &["🌱", "🌻", "🌞", "🍃", "🌊"]),
    ("love", &["❤️", "💖", "🤗", "💞", "🌹"]),
    ("future", &["🔭", "🚀", "🌅", "🛸", "⏳"]),
    ("growth", &["🌱", "🌳", "📈", "🪴", "🌿"]),
    ("general", &["💫", "✨", "⭐", "🌟", "💝"]),
];

const INSPIRATION_ALLOWLIST: &[&str] = &[
    "inspire", "dream", "believe", "hope", "love", "joy", "grow", "kindness", "courage",
    "purpose", "gratitude", "wisdom", "happiness", "future", "success", "change", "life",
    "heart", "peace", "possible",
];

const INSPIRATION_FALLBACK: &[(&str, &str)] = &[
    ("The only way to do great work is to love what you do. - Steve Jobs", "motivation"),
    ("Believe you can and you're halfway there. - Theodore Roosevelt", "inspiration"),
    ("It always seems impossible until it's done. - Nelson Mandela", "motivation"),
    ("The future belongs to those who believe in the beauty of their dreams. - Eleanor Roosevelt", "inspiration"),
    ("Life is what happens when you're busy making other plans. - John Lennon", "life"),
    ("Knowing yourself is the beginning of all wisdom. - Aristotle", "wisdom"),
    ("Hope is a waking dream. - Aristotle", "inspiration"),
    ("Love all, trust a few, do wrong to none. - William Shakespeare", "love"),
    ("You are never too old to set another goal or to dream a new dream. - C.S. Lewis", "inspiration"),
    ("Change is the end result of all true learning. - Leo Buscaglia", "growth"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{ContentFilter, FilterPolicy};
    use crate::types::{DEFAULT_MAX_DISPLAY_LEN, SEPARATOR};

    const THEMES: [Theme; 2] = [Theme::Tech, Theme::Inspiration];

    fn quote_text(entry: &str) -> &str {
        entry.rsplit_once(SEPARATOR).map_or(entry, |(text, _)| text)
    }

    #[test]
    fn fallback_pools_pass_the_default_filter() {
        for theme in THEMES {
            let filter = ContentFilter::new(
                DEFAULT_MAX_DISPLAY_LEN,
                FilterPolicy::default(),
                BLOCKLIST,
                theme.allowlist(),
            );
            assert!(!theme.fallback_pool().is_empty());
            for (entry, _) in theme.fallback_pool() {
                assert!(
                    entry.chars().count() <= DEFAULT_MAX_DISPLAY_LEN,
                    "{} entry too long: {entry}",
                    theme.name()
                );
                let verdict = filter.evaluate(quote_text(entry));
                assert!(verdict.is_accepted(), "{entry}: {}", verdict.reason());
            }
        }
    }

    #[test]
    fn strict_filter_keeps_part_of_each_pool() {
        for theme in THEMES {
            let strict = ContentFilter::new(
                DEFAULT_MAX_DISPLAY_LEN,
                FilterPolicy::Strict,
                BLOCKLIST,
                theme.allowlist(),
            );
            let passing = theme
                .fallback_pool()
                .iter()
                .filter(|(entry, _)| strict.is_appropriate(quote_text(entry)))
                .count();
            assert!(passing >= 5, "{} has only {passing} strict entries", theme.name());
        }
    }

    #[test]
    fn every_theme_has_general_emoji_and_no_empty_sets() {
        for theme in THEMES {
            assert!(theme.emoji().iter().any(|(c, _)| *c == "general"));
            assert!(theme.emoji().iter().all(|(_, set)| !set.is_empty()));
            for (category, _) in theme.keywords() {
                assert!(
                    theme.emoji().iter().any(|(c, _)| c == category),
                    "{} has no emoji for {category}",
                    theme.name()
                );
            }
        }
    }
}
