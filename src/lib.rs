#![forbid(unsafe_code)]
//! # text_mood
//!
//! Deterministic, dictionary-based mood analysis for journal entries.
//!
//! Given free-form text the analyzer reports
//! - a mood label and a normalized intensity score in `[0, 1]`,
//! - coarse topics matched from fixed keyword tables (`["general"]` if none),
//! - up to five salient keywords ranked by frequency.
//!
//! The word tables are static data selected by a [`LexiconProfile`]. The
//! [`trends`] module turns a series of analyzed entries into distribution,
//! streak and improvement statistics.
//!
//! ## Example
//! ```
//! use text_mood::{MoodLabel, analyze};
//! let r = analyze("I feel so happy and joyful today, what a wonderful day");
//! assert_eq!(r.mood, MoodLabel::Joy);
//! assert_eq!(r.score, 1.0);
//! assert_eq!(r.topics, vec!["general"]);
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod export;
pub mod keywords;
pub mod lexicon;
pub mod mood;
pub mod topics;
pub mod trends;

use std::fs;
use std::path::Path;

use log::{info, warn};
use rayon::prelude::*;
use walkdir::WalkDir;

pub use analyzer::{
    AnalysisResult, EntryAnalysis, LexiconBackend, MoodBackend, TextMoodAnalyzer, analyze,
};
pub use config::{AnalyzerConfig, load_stopwords};
pub use error::{AnalysisError, ConfigError, ExportError};
pub use export::{ExportFormat, SourceReport, csv_safe_cell, render, save_export};
pub use keywords::{extract_keywords, rank_keywords, tokenize};
pub use lexicon::{GENERAL_TOPIC, Lexicon, LexiconProfile, MoodLabel};
pub use mood::{MoodScore, score_mood};
pub use topics::extract_topics;
pub use trends::{
    Insight, MoodSample, daily_average, dominant_mood, insights, mood_distribution, mood_improving,
    streak,
};

/// Per-source results plus the files that could not be read.
#[derive(Debug, Default)]
pub struct PathReport {
    pub reports: Vec<SourceReport>,
    pub failed_files: Vec<(String, String)>,
}

///Collects journal files (`.txt`, `.md`) under `path`, sorted. A single file is returned as is.
pub fn collect_files(path: &Path) -> Vec<String> {
    if path.is_file() {
        return vec![path.to_string_lossy().into_owned()];
    }
    let mut files: Vec<String> = WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "txt" | "md"))
                .unwrap_or(false)
        })
        .map(|e| e.path().to_string_lossy().into_owned())
        .collect();
    files.sort();
    files
}

///Analyzes every journal file under `path` in parallel.
///Returns an error only if `path` does not exist; unreadable files end up in `failed_files`.
pub fn analyze_path<B: MoodBackend>(
    path: &Path,
    analyzer: &TextMoodAnalyzer<B>,
) -> Result<PathReport, String> {
    if !path.exists() {
        return Err(format!("Path does not exist: {}", path.display()));
    }
    let files = collect_files(path);
    info!("analyzing {} file(s) under {}", files.len(), path.display());

    let outcomes: Vec<Result<SourceReport, (String, String)>> = files
        .par_iter()
        .map(|file| match fs::read_to_string(file) {
            Ok(text) => Ok(SourceReport {
                source: file.clone(),
                result: analyzer.analyze(&text),
            }),
            Err(e) => {
                warn!("cannot read {file}: {e}");
                Err((file.clone(), e.to_string()))
            }
        })
        .collect();

    let mut report = PathReport::default();
    for outcome in outcomes {
        match outcome {
            Ok(r) => report.reports.push(r),
            Err(failed) => report.failed_files.push(failed),
        }
    }
    Ok(report)
}

/// Stem used for export file names: the file stem for a file, `combined` otherwise.
pub fn export_stem(path: &Path) -> String {
    if path.is_file() {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "combined".to_string())
    } else {
        "combined".to_string()
    }
}

pub fn print_failed_files(failed: &[(String, String)]) {
    eprintln!("Failed to analyze {} file(s):", failed.len());
    for (file, reason) in failed {
        eprintln!("  {file}: {reason}");
    }
}

