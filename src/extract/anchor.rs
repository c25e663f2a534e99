use once_cell::sync::Lazy;
use regex::Regex;

use crate::textutil::{is_cjk_ideograph, is_gloss_continuation};

// Cut boundaries, each anchored to the current scan position: a period
// introducing a Latin sentence, a digit ordinal introducing a phrase, or a
// whitespace-separated Latin word of at least two letters. End of string is
// the fourth boundary, handled in the scan loop.
static DOT_BOUNDARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[.。]\s*[A-Za-z]").expect("dot boundary"));
static ORDINAL_BOUNDARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+\.?\s*[A-Za-z]").expect("ordinal boundary"));
static WORD_BOUNDARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s+[A-Za-z][A-Za-z]").expect("word boundary"));
static TRAILING_STOP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.。．]\s*$").expect("trailing stop"));

/// Captures the Chinese run at the very start of `text`: from offset 0 up to
/// (not including) the first boundary that introduces embedded Latin content,
/// or end of string. Shortest capture wins, so the run stops at the earliest
/// boundary. Trailing sentence-final punctuation is stripped.
///
/// Returns `None` when the text does not open with a CJK ideograph, or when
/// the run dead-ends (a character outside the gloss class with no boundary
/// in sight) — those texts have no leading gloss to reattach.
pub fn leading_gloss(text: &str) -> Option<String> {
    let first = text.chars().next()?;
    if !is_cjk_ideograph(first) {
        return None;
    }

    let mut cut = first.len_utf8();
    loop {
        let rest = &text[cut..];
        if rest.is_empty()
            || DOT_BOUNDARY_RE.is_match(rest)
            || ORDINAL_BOUNDARY_RE.is_match(rest)
            || WORD_BOUNDARY_RE.is_match(rest)
        {
            break;
        }
        match rest.chars().next() {
            Some(c) if is_gloss_continuation(c) => cut += c.len_utf8(),
            _ => return None,
        }
    }

    let captured = text[..cut].trim();
    let captured = TRAILING_STOP_RE.replace(captured, "");
    let captured = captured.trim();
    if captured.is_empty() {
        None
    } else {
        Some(captured.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_before_embedded_latin_word() {
        assert_eq!(
            leading_gloss("遵守；服从 comply with 遵守规定").as_deref(),
            Some("遵守；服从")
        );
    }

    #[test]
    fn stops_before_digit_ordinal() {
        assert_eq!(
            leading_gloss("观察，注意到 2observe 遵守").as_deref(),
            Some("观察，注意到")
        );
    }

    #[test]
    fn stops_before_period_then_latin() {
        assert_eq!(leading_gloss("增强。Strengthen it").as_deref(), Some("增强"));
    }

    #[test]
    fn runs_to_end_of_string() {
        assert_eq!(leading_gloss("问候").as_deref(), Some("问候"));
        assert_eq!(leading_gloss("屈服，让步").as_deref(), Some("屈服，让步"));
    }

    #[test]
    fn strips_trailing_full_width_stop() {
        assert_eq!(leading_gloss("遵守；服从．").as_deref(), Some("遵守；服从"));
    }

    #[test]
    fn ideographic_full_stop_dead_ends_the_run() {
        // U+3002 is outside the gloss class, so the run cannot reach the end
        // of the string; the entry falls back to its raw pair instead.
        assert_eq!(leading_gloss("遵守；服从。"), None);
    }

    #[test]
    fn rejects_text_not_opening_with_cjk() {
        assert_eq!(leading_gloss("comply with 遵守"), None);
        assert_eq!(leading_gloss(""), None);
        assert_eq!(leading_gloss("；中文"), None);
    }

    #[test]
    fn rejects_dead_ended_runs() {
        // A lone Latin letter glued to the run is neither a continuation
        // character nor a boundary, so no capture happens.
        assert_eq!(leading_gloss("中文abc"), None);
    }

    #[test]
    fn single_latin_letter_after_space_is_not_a_boundary() {
        // "\s+[A-Za-z][A-Za-z]" needs two letters; "a " alone dead-ends.
        assert_eq!(leading_gloss("中文 a 中文"), None);
    }
}
