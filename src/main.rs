#![forbid(unsafe_code)]
//! # Text Mood CLI
//!
//! Command-line front end for the `text_mood` crate. Runs the mood, topic
//! and keyword analysis over journal files (`.txt`, `.md`) or stdin.
//!
//! ## Example
//! ```bash
//! cargo run --release -- path/to/journal --profile polarity --export-format csv
//! ```
//!
//! A plain-text summary is always printed; `json` and `csv` additionally
//! write a timestamped export file into the working directory.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use log::error;
use text_mood::export::render_txt;
use text_mood::{
    AnalyzerConfig, ExportFormat, LexiconProfile, PathReport, SourceReport, TextMoodAnalyzer,
    analyze_path, export_stem, load_stopwords, print_failed_files, render, save_export,
};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// File or directory to analyze, or `-` for stdin
    path: String,

    /// Lexicon profile (overrides the config file)
    #[arg(long)]
    profile: Option<LexiconProfile>,

    /// Optional path to additional stopword file (.txt, one word per line)
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Optional JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format for export (txt, json, csv)
    #[arg(long, default_value = "txt")]
    export_format: ExportFormat,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let config = build_config(cli)?;
    let analyzer = TextMoodAnalyzer::new(&config);

    let (report, stem) = if cli.path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| format!("cannot read stdin: {e}"))?;
        let report = PathReport {
            reports: vec![SourceReport {
                source: "stdin".to_string(),
                result: analyzer.analyze(&text),
            }],
            failed_files: Vec::new(),
        };
        (report, "stdin".to_string())
    } else {
        let path = Path::new(&cli.path);
        (analyze_path(path, &analyzer)?, export_stem(path))
    };

    print!("{}", render_txt(&report.reports));

    if cli.export_format != ExportFormat::Txt {
        let contents = render(&report.reports, cli.export_format).map_err(|e| e.to_string())?;
        let saved = save_export(Path::new("."), &stem, cli.export_format, &contents)
            .map_err(|e| e.to_string())?;
        println!("Exported to {}", saved.display());
    }

    if !report.failed_files.is_empty() {
        print_failed_files(&report.failed_files);
        return Err(format!("{} file(s) failed", report.failed_files.len()));
    }
    Ok(())
}

fn build_config(cli: &Cli) -> Result<AnalyzerConfig, String> {
    let mut config = match &cli.config {
        Some(path) => AnalyzerConfig::from_json_file(path).map_err(|e| e.to_string())?,
        None => AnalyzerConfig::default(),
    };
    if let Some(profile) = cli.profile {
        config.profile = profile;
    }
    if let Some(path) = &cli.stopwords {
        let words = load_stopwords(path).map_err(|e| e.to_string())?;
        config.extra_stopwords.extend(words);
    }
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}
