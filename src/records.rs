use serde::{Deserialize, Serialize};

/// One coarse source entry: the scraped headword plus the raw gloss text that
/// followed it on the page. The gloss text may itself contain further
/// interleaved phrase/gloss occurrences; untangling those is the extraction
/// engine's job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlossEntry {
    pub phrase: String,
    pub meaning: String,
}

impl GlossEntry {
    pub fn new(phrase: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            meaning: meaning.into(),
        }
    }
}

/// Final engine output. `phrase_id` is the decimal encoding of a batch-wide
/// counter: strictly increasing, never reset between entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseRecord {
    pub phrase_id: String,
    pub phrase: String,
    pub meaning: String,
}

/// Backend view of a [`PhraseRecord`]: opaque unique id, empty example
/// placeholder, createdAt == updatedAt at creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendRecord {
    pub id: String,
    pub phrase: String,
    pub meaning: String,
    pub example: String,
    pub created_at: String,
    pub updated_at: String,
}
