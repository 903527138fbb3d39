// src/normalize.rs
use once_cell::sync::OnceCell;
use regex::Regex;

/// Upper bound on raw quote text we bother keeping; anything longer fails the
/// length gate anyway.
const MAX_RAW_CHARS: usize = 500;

/// Normalize provider text: decode entities, strip tags, ASCII-fy typographic
/// quotes, collapse whitespace, trim. Sentence punctuation is kept.
pub fn normalize_text(s: &str) -> String {
    // 1) HTML entity decode
    let mut out = html_escape::decode_html_entities(s).to_string();

    // 2) Strip HTML tags (zenquotes occasionally embeds <br>)
    static RE_TAGS: OnceCell<Regex> = OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| Regex::new(r"(?is)</?[^>]+>").expect("tag regex"));
    out = re_tags.replace_all(&out, " ").to_string();

    // 3) “ ” ‘ ’ « » to ASCII
    out = out
        .replace(['\u{201C}', '\u{201D}', '\u{00AB}', '\u{00BB}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'");

    // 4) Collapse whitespace
    static RE_WS: OnceCell<Regex> = OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| Regex::new(r"\s+").expect("whitespace regex"));
    out = re_ws.replace_all(&out, " ").trim().to_string();

    if out.chars().count() > MAX_RAW_CHARS {
        out = out.chars().take(MAX_RAW_CHARS).collect();
    }

    out
}
