use once_cell::sync::Lazy;
use regex::Regex;

use super::span::{CandidateSpan, SpanSource};

// Phrase: Latin-led, interior letters/digits/spaces/apostrophes/mid-dots/
// slashes/dash variants/commas/parentheses, terminated by a letter or digit
// (trailing punctuation never ends a phrase). Gloss: CJK-led, then more
// ideographs, full-width list punctuation, or whitespace. The gloss side is
// greedy on purpose: its right edge is fixed by whichever match or
// end-of-text comes next.
const PHRASE_PAT: &str = r"[A-Za-z][A-Za-z0-9\s'·/,()\-–—]*?[A-Za-z0-9]";
const GLOSS_PAT: &str = r"[\u{4e00}-\u{9fff}][\u{4e00}-\u{9fff}；、，：．\s]*";

static NUMBERED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(\d+\.?\s*)({PHRASE_PAT})\s+({GLOSS_PAT})")).expect("numbered pattern")
});

static PLAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"({PHRASE_PAT})\s+({GLOSS_PAT})")).expect("plain pattern")
});

/// Finds ordinal-prefixed phrase+gloss occurrences over the whole text,
/// independent of the plain matcher.
pub fn numbered_candidates(text: &str) -> Vec<CandidateSpan> {
    let mut out = Vec::new();
    for caps in NUMBERED_RE.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        let phrase = caps[2].trim();
        let meaning = caps[3].trim();
        if phrase.chars().count() < 2 || meaning.is_empty() {
            continue;
        }
        out.push(CandidateSpan {
            source: SpanSource::Numbered,
            start: whole.start(),
            end: whole.end(),
            phrase: phrase.to_string(),
            meaning: meaning.to_string(),
        });
    }
    out
}

/// Finds unprefixed phrase+gloss occurrences. Strictly more permissive than
/// the numbered matcher and expected to re-discover most numbered occurrences;
/// deduplication against those is the conflict resolver's job.
pub fn plain_candidates(text: &str) -> Vec<CandidateSpan> {
    let mut out = Vec::new();
    for caps in PLAIN_RE.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        let phrase_raw = &caps[1];
        let phrase = phrase_raw.trim();
        let meaning = caps[2].trim();
        if phrase.chars().count() < 2 || meaning.is_empty() {
            continue;
        }
        if phrase.starts_with(|c: char| c.is_ascii_digit())
            || !phrase_raw.starts_with(char::is_alphabetic)
        {
            continue;
        }
        out.push(CandidateSpan {
            source: SpanSource::Plain,
            start: whole.start(),
            end: whole.end(),
            phrase: phrase.to_string(),
            meaning: meaning.to_string(),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_finds_prefixed_occurrences() {
        let text = "2 observe 遵守；服从 3comply with 遵守规定";
        let found = numbered_candidates(text);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].phrase, "observe");
        assert_eq!(found[0].meaning, "遵守；服从");
        assert_eq!(found[1].phrase, "comply with");
        assert_eq!(found[1].meaning, "遵守规定");
        // The span covers the ordinal prefix.
        assert_eq!(found[0].start, 0);
        assert!(found[1].start < found[1].end);
    }

    #[test]
    fn numbered_accepts_dotted_ordinals() {
        let text = "132. give in 屈服，让步";
        let found = numbered_candidates(text);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].phrase, "give in");
        assert_eq!(found[0].meaning, "屈服，让步");
    }

    #[test]
    fn numbered_ignores_text_without_ordinals() {
        assert!(numbered_candidates("observe 遵守").is_empty());
        assert!(numbered_candidates("只有中文注释").is_empty());
    }

    #[test]
    fn plain_finds_unprefixed_occurrences() {
        let text = "遵守；服从 comply with 遵守规定";
        let found = plain_candidates(text);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].phrase, "comply with");
        assert_eq!(found[0].meaning, "遵守规定");
        assert_eq!(found[0].source, SpanSource::Plain);
    }

    #[test]
    fn plain_rediscovers_numbered_occurrences() {
        let text = "2 observe 遵守；服从";
        let found = plain_candidates(text);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].phrase, "observe");
        // Plain span starts after the ordinal the numbered matcher would eat.
        assert_eq!(found[0].start, 2);
    }

    #[test]
    fn plain_drops_single_letter_phrases() {
        assert!(plain_candidates("a 中文").is_empty());
    }

    #[test]
    fn matchers_fail_closed_on_half_formed_input() {
        // Latin run with no trailing Chinese gloss, and vice versa.
        assert!(plain_candidates("comply with rules").is_empty());
        assert!(plain_candidates("遵守规定").is_empty());
        assert!(numbered_candidates("3comply with rules").is_empty());
    }

    #[test]
    fn phrase_keeps_internal_punctuation() {
        let found = plain_candidates("warm-up exercise 热身运动");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].phrase, "warm-up exercise");
    }

    #[test]
    fn trailing_punctuation_never_ends_a_phrase() {
        // The phrase must terminate on a letter or digit, so an occurrence
        // whose Latin run ends in ")" yields no candidate at all.
        assert!(plain_candidates("mix up (with) 混淆，弄乱").is_empty());
    }
}
