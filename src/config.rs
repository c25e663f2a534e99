use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::page::DEFAULT_MIN_LINE_CHARS;

pub const CONFIG_FILENAME: &str = "phrase-harvester.toml";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Clone, Debug, Deserialize, Default)]
pub struct InputSection {
    /// Page to parse when no input argument is given.
    #[serde(default)]
    pub page: Option<PathBuf>,

    /// Lines shorter than this many characters are skipped.
    #[serde(default)]
    pub min_line_chars: Option<usize>,
}

#[derive(Clone, Debug, Deserialize, Default)]
pub struct OutputSection {
    /// Directory for output files (default: alongside the input page).
    #[serde(default)]
    pub dir: Option<PathBuf>,

    #[serde(default)]
    pub backend_json: Option<String>,
    #[serde(default)]
    pub original_json: Option<String>,
    #[serde(default)]
    pub csv: Option<String>,
    #[serde(default)]
    pub markdown: Option<String>,

    /// Also write the phraseId-shaped JSON without passing --original.
    #[serde(default)]
    pub write_original: Option<bool>,
}

/// Fully resolved run plan: one input page, concrete output paths.
#[derive(Clone, Debug)]
pub struct HarvestPlan {
    pub input: PathBuf,
    pub backend_json: PathBuf,
    pub original_json: Option<PathBuf>,
    pub csv: PathBuf,
    pub markdown: PathBuf,
    pub min_line_chars: usize,
}

impl HarvestPlan {
    pub fn resolve(
        input: PathBuf,
        output_dir: Option<PathBuf>,
        want_original: bool,
        min_line_chars: Option<usize>,
        cfg: &AppConfig,
    ) -> Self {
        let dir = output_dir
            .or_else(|| cfg.output.dir.clone())
            .or_else(|| input.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));

        let name = |opt: &Option<String>, default: &str| -> PathBuf {
            dir.join(opt.as_deref().unwrap_or(default))
        };

        let write_original = want_original || cfg.output.write_original.unwrap_or(false);
        HarvestPlan {
            backend_json: name(&cfg.output.backend_json, "phrase.json"),
            original_json: write_original
                .then(|| name(&cfg.output.original_json, "phrase_original.json")),
            csv: name(&cfg.output.csv, "phrase.csv"),
            markdown: name(&cfg.output.markdown, "phrase.md"),
            min_line_chars: min_line_chars
                .or(cfg.input.min_line_chars)
                .unwrap_or(DEFAULT_MIN_LINE_CHARS),
            input,
        }
    }
}

pub fn find_file_upwards(start_dir: &Path, filename: &str, max_levels: usize) -> Option<PathBuf> {
    let mut dir = start_dir;
    for _ in 0..=max_levels {
        let candidate = dir.join(filename);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
    None
}

pub fn find_default_config() -> Option<PathBuf> {
    if let Ok(cwd) = std::env::current_dir() {
        if let Some(p) = find_file_upwards(&cwd, CONFIG_FILENAME, 8) {
            return Some(p);
        }
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            if let Some(p) = find_file_upwards(dir, CONFIG_FILENAME, 8) {
                return Some(p);
            }
        }
    }
    None
}

pub fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: AppConfig = toml::from_str(&text).context("parse config toml")?;
    Ok(cfg)
}

pub fn init_default_config(dir: &Path, force: bool) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create config dir: {}", dir.display()))?;
    let cfg_path = dir.join(CONFIG_FILENAME);
    if cfg_path.exists() && !force {
        return Ok(cfg_path);
    }
    std::fs::write(&cfg_path, DEFAULT_CONFIG_TOML)
        .with_context(|| format!("write config: {}", cfg_path.display()))?;
    Ok(cfg_path)
}

const DEFAULT_CONFIG_TOML: &str = r#"[input]
# Page to parse when the CLI gets no input argument.
# page = "phrase.html"
# Lines shorter than this many characters are skipped.
# min_line_chars = 5

[output]
# Directory for output files (default: alongside the input page).
# dir = "."
# backend_json = "phrase.json"
# original_json = "phrase_original.json"
# csv = "phrase.csv"
# markdown = "phrase.md"
# Also write the phraseId-shaped JSON without passing --original.
# write_original = false
"#;
