/// CJK unified ideograph, used as the proxy for "this is Chinese text".
/// Explicit codepoint range check so behavior never depends on locale data.
#[inline]
pub fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Characters allowed after the opening ideograph of a Chinese gloss run:
/// further ideographs, full-width list punctuation, or whitespace.
#[inline]
pub fn is_gloss_continuation(c: char) -> bool {
    is_cjk_ideograph(c) || matches!(c, '；' | '、' | '，' | '：' | '．') || c.is_whitespace()
}

/// Strips a leading decimal-digit run from a scraped headword ("2observe" ->
/// "observe"). If stripping leaves nothing, the headword was pure digits and
/// is returned unchanged.
pub fn strip_ordinal_prefix(phrase: &str) -> &str {
    let stripped = phrase
        .trim_start_matches(|c: char| c.is_ascii_digit())
        .trim();
    if stripped.is_empty() {
        phrase
    } else {
        stripped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_cjk() {
        assert!(is_cjk_ideograph('遵'));
        assert!(!is_cjk_ideograph('a'));
        assert!(!is_cjk_ideograph('。'));
    }

    #[test]
    fn gloss_continuation_covers_punctuation_and_whitespace() {
        for c in ['守', '；', '、', '，', '：', '．', ' ', '\t'] {
            assert!(is_gloss_continuation(c), "expected continuation: {c:?}");
        }
        assert!(!is_gloss_continuation('a'));
        assert!(!is_gloss_continuation('3'));
        assert!(!is_gloss_continuation('。'));
    }

    #[test]
    fn strips_ordinal_prefixes() {
        assert_eq!(strip_ordinal_prefix("2observe"), "observe");
        assert_eq!(strip_ordinal_prefix("13 comply with"), "comply with");
        assert_eq!(strip_ordinal_prefix("observe"), "observe");
        // Pure-digit headwords are kept as-is rather than emptied.
        assert_eq!(strip_ordinal_prefix("42"), "42");
    }
}
