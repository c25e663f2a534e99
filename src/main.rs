use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser};

use phrase_harvester::config::{
    find_default_config, init_default_config, load_config, AppConfig, HarvestPlan, CONFIG_FILENAME,
};
use phrase_harvester::extract::flatten_entries;
use phrase_harvester::output::{save_backend_json, save_csv, save_json, save_markdown};
use phrase_harvester::page::{parse_page_text, read_page, strip_tags, unescape_entities};
use phrase_harvester::progress::ConsoleReporter;

#[derive(Parser, Debug)]
#[command(name = "phrase-harvester")]
#[command(about = "Extracts phrase/meaning records from scraped bilingual vocabulary pages", long_about = None)]
struct Args {
    /// Generate a default config file, then exit
    #[arg(long)]
    init_config: bool,

    /// Directory to write the config file (default: current directory)
    #[arg(long, value_name = "DIR")]
    init_config_dir: Option<PathBuf>,

    /// Overwrite an existing config file when used with --init-config
    #[arg(long)]
    force: bool,

    /// Input page (scraped HTML or plain text)
    #[arg(value_name = "PAGE")]
    input: Option<PathBuf>,

    /// Output directory (default: alongside the input page)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Config file path (default: search for phrase-harvester.toml upwards)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write the phraseId-shaped JSON next to the backend JSON
    #[arg(long)]
    original: bool,

    /// Skip lines shorter than this many characters (dev override)
    #[arg(long)]
    min_line_chars: Option<usize>,

    /// Suppress progress output
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let progress = ConsoleReporter::new(args.quiet);

    if args.init_config {
        let dir = args
            .init_config_dir
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
        let cfg_path = init_default_config(&dir, args.force).context("init default config")?;
        eprintln!("Wrote config: {}", cfg_path.display());
        return Ok(());
    }

    let cfg = match args.config.clone().or_else(find_default_config) {
        Some(path) => load_config(&path)?,
        None => AppConfig::default(),
    };

    let input = match args.input.or_else(|| cfg.input.page.clone()) {
        Some(p) => p,
        None => {
            let mut cmd = Args::command();
            cmd.print_help().context("print help")?;
            eprintln!(
                "\n\nUSAGE:\n  phrase-harvester <page.html>\n\nTIPS:\n  - Point it at a scraped vocabulary page; phrase.json/phrase.csv/phrase.md land next to it.\n  - Default config search: {CONFIG_FILENAME} (upwards from the working directory).\n"
            );
            return Ok(());
        }
    };

    let plan = HarvestPlan::resolve(input, args.output, args.original, args.min_line_chars, &cfg);

    let html = read_page(&plan.input)?;
    let text = unescape_entities(&strip_tags(&html));
    let entries = parse_page_text(&text, plan.min_line_chars);
    progress.info(format!(
        "parsed {} coarse entries from {}",
        entries.len(),
        plan.input.display()
    ));

    let records = flatten_entries(&entries);
    if records.is_empty() {
        progress.warn("no data extracted; check the input page content");
        return Ok(());
    }
    progress.info(format!("extracted {} phrase records", records.len()));

    save_backend_json(&records, &plan.backend_json)?;
    progress.wrote(&plan.backend_json, records.len());
    if let Some(path) = plan.original_json.as_ref() {
        save_json(&records, path)?;
        progress.wrote(path, records.len());
    }
    save_csv(&records, &plan.csv)?;
    progress.wrote(&plan.csv, records.len());
    save_markdown(&records, &plan.markdown)?;
    progress.wrote(&plan.markdown, records.len());
    Ok(())
}
