// src/emoji.rs
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::HashMap;

use crate::error::ConfigError;
use crate::types::Category;

/// Category -> glyphs. Every entry is non-empty and `general` always exists.
#[derive(Debug, Clone)]
pub struct EmojiSelector {
    sets: HashMap<Category, Vec<String>>,
}

impl EmojiSelector {
    pub fn new(table: &[(&str, &[&str])]) -> Result<Self, ConfigError> {
        let mut sets = HashMap::with_capacity(table.len());
        for (label, glyphs) in table {
            let glyphs: Vec<String> = glyphs
                .iter()
                .map(|g| g.trim())
                .filter(|g| !g.is_empty())
                .map(str::to_string)
                .collect();
            if glyphs.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: format!("emoji.{label}"),
                    message: "emoji set must not be empty".into(),
                });
            }
            sets.insert(Category::new(*label), glyphs);
        }
        if !sets.contains_key(&Category::general()) {
            return Err(ConfigError::InvalidValue {
                key: "emoji.general".into(),
                message: "a general emoji set is required".into(),
            });
        }
        Ok(Self { sets })
    }

    /// The set used for `category`, falling back to `general`.
    pub fn set_for(&self, category: &Category) -> &[String] {
        self.sets
            .get(category)
            .or_else(|| self.sets.get(&Category::general()))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn pick<R: Rng + ?Sized>(&self, category: &Category, rng: &mut R) -> &str {
        self.set_for(category)
            .choose(rng)
            .map(String::as_str)
            .unwrap_or_default()
    }
}
