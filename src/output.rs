use std::path::Path;

use anyhow::Context;
use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::records::{BackendRecord, PhraseRecord};

/// Derives the backend view: a fresh opaque id per record, an empty example
/// placeholder, and one shared createdAt == updatedAt timestamp for the
/// whole conversion.
pub fn to_backend_records(records: &[PhraseRecord]) -> Vec<BackendRecord> {
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
    records
        .iter()
        .map(|r| BackendRecord {
            id: Uuid::new_v4().to_string(),
            phrase: r.phrase.clone(),
            meaning: r.meaning.clone(),
            example: String::new(),
            created_at: now.clone(),
            updated_at: now.clone(),
        })
        .collect()
}

/// Writes the phraseId-shaped JSON array (pretty, non-ASCII preserved).
pub fn save_json(records: &[PhraseRecord], path: &Path) -> anyhow::Result<()> {
    let body = serde_json::to_string_pretty(records).context("serialize records json")?;
    std::fs::write(path, body).with_context(|| format!("write json: {}", path.display()))?;
    Ok(())
}

/// Writes the backend-shaped JSON array.
pub fn save_backend_json(records: &[PhraseRecord], path: &Path) -> anyhow::Result<()> {
    let body = serde_json::to_string_pretty(&to_backend_records(records))
        .context("serialize backend json")?;
    std::fs::write(path, body).with_context(|| format!("write json: {}", path.display()))?;
    Ok(())
}

/// Reads back a phraseId-shaped JSON array.
pub fn load_json(path: &Path) -> anyhow::Result<Vec<PhraseRecord>> {
    let body =
        std::fs::read_to_string(path).with_context(|| format!("read json: {}", path.display()))?;
    serde_json::from_str(&body).context("parse records json")
}

/// CSV with header `phraseId,phrase,meaning`. A UTF-8 BOM leads the text so
/// spreadsheet imports pick the right encoding.
pub fn render_csv(records: &[PhraseRecord]) -> String {
    let mut body = String::from("\u{feff}");
    body.push_str("phraseId,phrase,meaning\r\n");
    for r in records {
        body.push_str(&csv_field(&r.phrase_id));
        body.push(',');
        body.push_str(&csv_field(&r.phrase));
        body.push(',');
        body.push_str(&csv_field(&r.meaning));
        body.push_str("\r\n");
    }
    body
}

pub fn save_csv(records: &[PhraseRecord], path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, render_csv(records))
        .with_context(|| format!("write csv: {}", path.display()))?;
    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Two-column display table with a leading index column.
pub fn render_markdown(records: &[PhraseRecord]) -> String {
    let mut lines: Vec<String> = vec![
        "| 序号 | 词组 / 短语 | 中文释义 |".to_string(),
        "|------|-------------|----------|".to_string(),
    ];
    for r in records {
        lines.push(format!("| {} | {} | {} |", r.phrase_id, r.phrase, r.meaning));
    }
    lines.join("\n")
}

pub fn save_markdown(records: &[PhraseRecord], path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, render_markdown(records))
        .with_context(|| format!("write markdown: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<PhraseRecord> {
        vec![
            PhraseRecord {
                phrase_id: "1".to_string(),
                phrase: "comply with".to_string(),
                meaning: "遵守规定".to_string(),
            },
            PhraseRecord {
                phrase_id: "2".to_string(),
                phrase: String::new(),
                meaning: "屈服，让步".to_string(),
            },
        ]
    }

    #[test]
    fn backend_view_is_one_to_one_with_fresh_ids() {
        let records = sample();
        let backend = to_backend_records(&records);
        assert_eq!(backend.len(), records.len());
        for (b, r) in backend.iter().zip(&records) {
            assert_eq!(b.phrase, r.phrase);
            assert_eq!(b.meaning, r.meaning);
            assert!(b.example.is_empty());
            assert_eq!(b.created_at, b.updated_at);
        }
        assert_ne!(backend[0].id, backend[1].id);
    }

    #[test]
    fn json_round_trips_phrase_content() {
        let records = sample();
        let body = serde_json::to_string_pretty(&records).expect("serialize");
        assert!(body.contains("\"phraseId\": \"1\""));
        assert!(body.contains("遵守规定"));
        let parsed: Vec<PhraseRecord> = serde_json::from_str(&body).expect("parse");
        assert_eq!(parsed, records);
    }

    #[test]
    fn json_file_round_trip() {
        let records = sample();
        let path = std::env::temp_dir().join("phrase_harvester_roundtrip.json");
        save_json(&records, &path).expect("save");
        let parsed = load_json(&path).expect("load");
        let _ = std::fs::remove_file(&path);
        assert_eq!(parsed, records);
    }

    #[test]
    fn backend_json_uses_camel_case_fields() {
        let backend = to_backend_records(&sample());
        let body = serde_json::to_string_pretty(&backend).expect("serialize");
        assert!(body.contains("\"createdAt\""));
        assert!(body.contains("\"updatedAt\""));
        assert!(body.contains("\"example\": \"\""));
    }

    #[test]
    fn csv_has_bom_header_and_quoting() {
        let csv = render_csv(&sample());
        assert!(csv.starts_with("\u{feff}phraseId,phrase,meaning\r\n"));
        assert!(csv.contains("1,comply with,遵守规定\r\n"));
        // Full-width list punctuation needs no quoting.
        assert!(csv.contains("2,,屈服，让步\r\n"));
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn markdown_table_has_index_column() {
        let md = render_markdown(&sample());
        let lines: Vec<&str> = md.lines().collect();
        assert_eq!(lines[0], "| 序号 | 词组 / 短语 | 中文释义 |");
        assert_eq!(lines[2], "| 1 | comply with | 遵守规定 |");
        assert_eq!(lines[3], "| 2 |  | 屈服，让步 |");
    }
}
