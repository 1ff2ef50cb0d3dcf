use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::prelude::*;
use serde::Serialize;

use crate::analyzer::AnalysisResult;
use crate::error::ExportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Txt,
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Analysis of one input, tagged with where the text came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceReport {
    pub source: String,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

///Neutralizes spreadsheet formulas: cells starting with `=`, `+`, `-`, `@`,
///tab or carriage return get a leading apostrophe.
/// # Example
/// ```
/// use text_mood::csv_safe_cell;
/// assert_eq!(csv_safe_cell("=SUM(A1)"), "'=SUM(A1)");
/// assert_eq!(csv_safe_cell("work"), "work");
/// ```
pub fn csv_safe_cell(cell: &str) -> String {
    match cell.chars().next() {
        Some('=' | '+' | '-' | '@' | '\t' | '\r') => format!("'{cell}"),
        _ => cell.to_string(),
    }
}

/// Plain-text summary, one block per source.
pub fn render_txt(reports: &[SourceReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let r = &report.result;
        out.push_str(&format!(
            "Source: {}\n Mood: {} (score {:.2})\n Topics: {}\n Keywords: {}\n\n",
            report.source,
            r.mood,
            r.score,
            r.topics.join(", "),
            r.keywords.join(", ")
        ));
    }
    out
}

pub fn render_json(reports: &[SourceReport]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(reports)?)
}

/// CSV with columns `source,mood,score,topics,keywords`; lists joined by `;`.
pub fn render_csv(reports: &[SourceReport]) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["source", "mood", "score", "topics", "keywords"])?;
    for report in reports {
        let r = &report.result;
        wtr.write_record([
            csv_safe_cell(&report.source),
            r.mood.to_string(),
            format!("{:.4}", r.score),
            csv_safe_cell(&r.topics.join(";")),
            csv_safe_cell(&r.keywords.join(";")),
        ])?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn render(reports: &[SourceReport], format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Txt => Ok(render_txt(reports)),
        ExportFormat::Json => render_json(reports),
        ExportFormat::Csv => render_csv(reports),
    }
}

///Writes `contents` to `<dir>/<stem>_<YYYYmmdd_HHMMSS>_mood.<ext>` and returns the path.
pub fn save_export(
    dir: &Path,
    stem: &str,
    format: ExportFormat,
    contents: &str,
) -> Result<PathBuf, ExportError> {
    let local: DateTime<Local> = Local::now();
    let filename = format!(
        "{}_{}_mood.{}",
        stem,
        local.format("%Y%m%d_%H%M%S"),
        format.extension()
    );
    let path = dir.join(filename);

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;
    file.write_all(contents.as_bytes())?;

    Ok(path)
}
