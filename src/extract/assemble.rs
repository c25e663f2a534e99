use crate::records::{GlossEntry, PhraseRecord};
use crate::textutil::strip_ordinal_prefix;

use super::anchor::leading_gloss;
use super::matcher::{numbered_candidates, plain_candidates};
use super::resolve::resolve_spans;
use super::span::CandidateSpan;

/// Runs both matchers over one gloss text and reconciles the candidates into
/// a disjoint, ordered span sequence. Empty or whitespace-only text yields
/// nothing.
pub fn extract_pairs(text: &str) -> Vec<CandidateSpan> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    let mut candidates = numbered_candidates(text);
    candidates.extend(plain_candidates(text));
    resolve_spans(candidates)
}

/// Turns coarse entries into identifier-tagged records.
///
/// The identifier counter is batch-wide state: it starts at 1, increases by
/// one per emitted record and is never reset between entries, so one
/// assembler must drive a whole batch sequentially.
pub struct RecordAssembler {
    next_id: usize,
}

impl Default for RecordAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordAssembler {
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    fn emit(&mut self, phrase: &str, meaning: &str) -> PhraseRecord {
        let record = PhraseRecord {
            phrase_id: self.next_id.to_string(),
            phrase: phrase.to_string(),
            meaning: meaning.to_string(),
        };
        self.next_id += 1;
        record
    }

    /// Processes one source entry: anchor pair first (when the gloss text
    /// opens with Chinese that belongs to the headword), resolved spans next,
    /// then the fallback paths when nothing was extracted. Entries with empty
    /// gloss text yield no records; no record ever carries an empty meaning.
    pub fn assemble(&mut self, entry: &GlossEntry) -> Vec<PhraseRecord> {
        let meaning = entry.meaning.trim();
        if meaning.is_empty() {
            return Vec::new();
        }
        let phrase = strip_ordinal_prefix(entry.phrase.trim());

        let spans = extract_pairs(meaning);

        let mut out = Vec::new();

        let anchor_usable = phrase.chars().count() >= 2 && phrase.starts_with(char::is_alphabetic);
        let first_differs = spans
            .first()
            .map_or(true, |s| s.phrase.to_lowercase() != phrase.to_lowercase());
        if anchor_usable && first_differs {
            if let Some(gloss) = leading_gloss(meaning) {
                out.push(self.emit(phrase, &gloss));
            }
        }

        for span in &spans {
            out.push(self.emit(&span.phrase, &span.meaning));
        }

        if out.is_empty() {
            if !phrase.is_empty() {
                // Keep the original pair untouched.
                out.push(self.emit(phrase, meaning));
            } else {
                // Chinese-only commentary line: empty phrase, full meaning.
                out.push(self.emit("", meaning));
            }
        }
        out
    }
}

/// Drives one assembler over a whole batch; entry order determines
/// identifier order.
pub fn flatten_entries(entries: &[GlossEntry]) -> Vec<PhraseRecord> {
    let mut assembler = RecordAssembler::new();
    entries
        .iter()
        .flat_map(|entry| assembler.assemble(entry))
        .collect()
}
