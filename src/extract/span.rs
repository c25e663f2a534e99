/// Which pattern family produced a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpanSource {
    Numbered,
    Plain,
}

/// One "(ordinal) English phrase + Chinese gloss" occurrence found by a
/// matcher. `start`/`end` are byte offsets of the full match into the text it
/// was found in, ordinal prefix included; `end > start` always. Phrase and
/// meaning are stored trimmed.
///
/// A resolved span is a candidate that survived conflict resolution; the
/// resolved list for one text is pairwise disjoint in `[start, end)` and
/// sorted by `start`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateSpan {
    pub source: SpanSource,
    pub start: usize,
    pub end: usize,
    pub phrase: String,
    pub meaning: String,
}

impl CandidateSpan {
    /// Span width in bytes, the tie-break key during conflict resolution.
    pub fn width(&self) -> usize {
        self.end - self.start
    }
}
