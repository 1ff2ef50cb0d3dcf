use thiserror::Error;

/// Failure inside an analysis backend. Never reaches callers of
/// [`crate::TextMoodAnalyzer::analyze`]; only `try_analyze` exposes it.
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("input of {len} bytes exceeds the {limit} byte analysis limit")]
    InputTooLarge { len: usize, limit: usize },
    #[error("analysis backend failed: {0}")]
    Internal(String),
}

/// Problems loading an [`crate::AnalyzerConfig`] or a stop-word file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Problems rendering or writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("json export failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),
}
