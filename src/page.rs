use std::path::Path;

use anyhow::Context;
use encoding_rs::{GBK, UTF_8};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::records::GlossEntry;

pub const DEFAULT_MIN_LINE_CHARS: usize = 5;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag pattern"));

// Well-formed entity tokens only; a stray "&" passes through untouched.
static ENTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(?:[A-Za-z][A-Za-z0-9]{1,30}|#(?:[0-9]{1,7}|x[0-9A-Fa-f]{1,6}));")
        .expect("entity pattern")
});

// Everything before the first CJK ideograph (or Chinese list punctuation) on
// a line is the phrase, the rest is the gloss text.
static LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([\w\s'.·/,()\-–—]+?)\s*([\u{4e00}-\u{9fff}；、，：].*)$").expect("line pattern")
});

// HTML-named entities that show up in scraped bookdown pages; the core XML
// five and all numeric references go through quick-xml instead.
const NAMED_ENTITIES: [(&str, &str); 7] = [
    ("&nbsp;", " "),
    ("&hellip;", "…"),
    ("&mdash;", "—"),
    ("&ndash;", "–"),
    ("&ldquo;", "\u{201c}"),
    ("&rdquo;", "\u{201d}"),
    ("&middot;", "·"),
];

/// Reads a scraped page as text. Scrapes of Chinese sites are occasionally
/// GBK-encoded, so bytes that are not valid UTF-8 get a GBK decode instead.
pub fn read_page(path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("read page: {}", path.display()))?;
    let (text, _, had_errors) = UTF_8.decode(&bytes);
    if !had_errors {
        return Ok(text.into_owned());
    }
    let (text, _, _) = GBK.decode(&bytes);
    Ok(text.into_owned())
}

/// Drops markup tags, keeping the text between them.
pub fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, "").into_owned()
}

/// Restores character entities: a small table for the HTML-named ones,
/// quick-xml for the core and numeric references. Unknown tokens are left
/// in place.
pub fn unescape_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let token = caps.get(0).unwrap().as_str();
            for (entity, replacement) in NAMED_ENTITIES {
                if token == entity {
                    return replacement.to_string();
                }
            }
            match quick_xml::escape::unescape(token) {
                Ok(plain) => plain.into_owned(),
                Err(_) => token.to_string(),
            }
        })
        .into_owned()
}

/// Splits cleaned page text into coarse entries, one per line. Lines shorter
/// than `min_line_chars` (or with no Chinese content) are skipped.
pub fn parse_page_text(text: &str, min_line_chars: usize) -> Vec<GlossEntry> {
    let mut entries = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.chars().count() < min_line_chars {
            continue;
        }
        if let Some(caps) = LINE_RE.captures(line) {
            entries.push(GlossEntry::new(caps[1].trim(), caps[2].trim()));
        }
    }
    entries
}
