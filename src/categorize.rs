// src/categorize.rs
use crate::types::Category;

/// Ordered keyword table; the first category (in declaration order) with a
/// matching keyword wins.
#[derive(Debug, Clone)]
pub struct Categorizer {
    table: Vec<(Category, Vec<String>)>,
}

impl Categorizer {
    pub fn new(table: &[(&str, &[&str])]) -> Self {
        let table = table
            .iter()
            .map(|(label, keywords)| {
                let kws = keywords
                    .iter()
                    .map(|k| k.trim().to_lowercase())
                    .filter(|k| !k.is_empty())
                    .collect();
                (Category::new(*label), kws)
            })
            .collect();
        Self { table }
    }

    pub fn categorize(&self, text: &str) -> Category {
        let lower = text.to_lowercase();
        self.table
            .iter()
            .find(|(_, kws)| kws.iter().any(|k| lower.contains(k.as_str())))
            .map(|(cat, _)| cat.clone())
            .unwrap_or_else(Category::general)
    }

    /// Categories in evaluation order (without the implicit `general`).
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.table.iter().map(|(c, _)| c)
    }
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new(crate::theme::Theme::default().keywords())
    }
}
