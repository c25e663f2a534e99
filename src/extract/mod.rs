mod anchor;
mod assemble;
mod matcher;
mod resolve;
mod span;

pub use anchor::leading_gloss;
pub use assemble::{extract_pairs, flatten_entries, RecordAssembler};
pub use matcher::{numbered_candidates, plain_candidates};
pub use resolve::resolve_spans;
pub use span::{CandidateSpan, SpanSource};
