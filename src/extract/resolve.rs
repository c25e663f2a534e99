use super::span::{CandidateSpan, SpanSource};

/// Merges candidate spans from both matchers into one disjoint, ordered
/// sequence.
///
/// Two passes: first, any plain candidate whose start falls inside a numbered
/// candidate's range is dropped unconditionally (numbered matches always win
/// over a plain match that begins inside them). Second, the survivors are
/// sorted by start and swept left to right keeping a single last-accepted
/// span; on overlap the wider span is kept, equal widths keep the
/// later-scanned candidate.
pub fn resolve_spans(candidates: Vec<CandidateSpan>) -> Vec<CandidateSpan> {
    let numbered_ranges: Vec<(usize, usize)> = candidates
        .iter()
        .filter(|c| c.source == SpanSource::Numbered)
        .map(|c| (c.start, c.end))
        .collect();

    let mut working: Vec<CandidateSpan> = candidates
        .into_iter()
        .filter(|c| {
            c.source == SpanSource::Numbered
                || !numbered_ranges
                    .iter()
                    .any(|&(start, end)| (start..end).contains(&c.start))
        })
        .collect();

    // Stable sort: candidates arriving earlier (numbered before plain) keep
    // their relative order at equal starts.
    working.sort_by_key(|c| c.start);

    let mut resolved: Vec<CandidateSpan> = Vec::new();
    for cand in working {
        match resolved.last_mut() {
            Some(last) if cand.start < last.end => {
                if cand.width() >= last.width() {
                    *last = cand;
                }
            }
            _ => resolved.push(cand),
        }
    }
    resolved
}
