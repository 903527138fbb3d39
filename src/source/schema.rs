// src/source/schema.rs
//! Provider descriptors and per-provider response extraction.

use serde::Deserialize;
use serde_json::Value;

use crate::normalize::normalize_text;
use crate::types::Quote;

/// Attribution used when a provider omits the author.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// How to pull `(text, attribution)` out of a provider's JSON body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ResponseSchema {
    /// `{"content": "...", "author": "..."}`
    Flat {
        text_field: String,
        author_field: String,
    },
    /// `[{"q": "...", "a": "..."}]`, first element wins.
    FirstOfList {
        text_field: String,
        author_field: String,
    },
}

impl ResponseSchema {
    pub fn extract(&self, body: &Value) -> Result<Quote, String> {
        let (obj, text_field, author_field) = match self {
            ResponseSchema::Flat {
                text_field,
                author_field,
            } => (body, text_field, author_field),
            ResponseSchema::FirstOfList {
                text_field,
                author_field,
            } => {
                let first = body
                    .as_array()
                    .ok_or("expected a JSON array")?
                    .first()
                    .ok_or("empty quote list")?;
                (first, text_field, author_field)
            }
        };

        if !obj.is_object() {
            return Err("expected a JSON object".into());
        }

        let text = string_field(obj, text_field)
            .ok_or_else(|| format!("missing or empty `{text_field}`"))?;
        let attribution =
            string_field(obj, author_field).unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

        Ok(Quote { text, attribution })
    }
}

fn string_field(obj: &Value, field: &str) -> Option<String> {
    obj.get(field)
        .and_then(Value::as_str)
        .map(normalize_text)
        .filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Provider {
    pub name: String,
    pub url: String,
    pub schema: ResponseSchema,
}

impl Provider {
    pub fn new(name: &str, url: &str, schema: ResponseSchema) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            schema,
        }
    }
}

pub fn default_providers() -> Vec<Provider> {
    vec![
        Provider::new(
            "quotable",
            "https://api.quotable.io/random?tags=technology,science,success,leadership,innovation,business,inspiration",
            ResponseSchema::Flat {
                text_field: "content".into(),
                author_field: "author".into(),
            },
        ),
        Provider::new(
            "zenquotes",
            "https://zenquotes.io/api/random",
            ResponseSchema::FirstOfList {
                text_field: "q".into(),
                author_field: "a".into(),
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn flat() -> ResponseSchema {
        default_providers().remove(0).schema
    }

    fn list() -> ResponseSchema {
        default_providers().remove(1).schema
    }

    #[test]
    fn extracts_flat_shape() {
        let body = json!({"_id": "x", "content": "Stay hungry,  stay foolish.", "author": "Steve Jobs"});
        let q = flat().extract(&body).unwrap();
        assert_eq!(q, Quote::new("Stay hungry, stay foolish.", "Steve Jobs"));
    }

    #[test]
    fn extracts_first_of_list_shape() {
        let body = json!([{"q": "Code is poetry.", "a": "WordPress", "h": "<blockquote/>"}]);
        let q = list().extract(&body).unwrap();
        assert_eq!(q, Quote::new("Code is poetry.", "WordPress"));
    }

    #[test]
    fn missing_author_becomes_unknown() {
        let q = flat().extract(&json!({"content": "Think different."})).unwrap();
        assert_eq!(q.attribution, UNKNOWN_AUTHOR);
    }

    #[test]
    fn shape_mismatch_is_an_error() {
        assert!(list().extract(&json!({"q": "x", "a": "y"})).is_err());
        assert!(list().extract(&json!([])).is_err());
        assert!(flat().extract(&json!([{"content": "x"}])).is_err());
        assert!(flat().extract(&json!({"content": "   "})).is_err());
    }

    #[test]
    fn schema_deserializes_from_toml() {
        #[derive(Deserialize)]
        struct Wrap {
            providers: Vec<Provider>,
        }
        let src = r#"
            [[providers]]
            name = "zen"
            url = "https://zenquotes.io/api/random"
            schema = { shape = "first_of_list", text_field = "q", author_field = "a" }
        "#;
        let w: Wrap = toml::from_str(src).unwrap();
        assert_eq!(w.providers[0].schema, list());
    }
}
