use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::keywords::MAX_KEYWORDS;
use crate::lexicon::{Lexicon, LexiconProfile};

/// Analyzer settings. Every field has a default, so a config file only
/// needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    pub profile: LexiconProfile,
    pub max_keywords: usize,
    /// Optional ceiling on analyzed input; unlimited when unset.
    pub max_input_bytes: Option<usize>,
    pub extra_stopwords: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            profile: LexiconProfile::Emotions,
            max_keywords: MAX_KEYWORDS,
            max_input_bytes: None,
            extra_stopwords: Vec::new(),
        }
    }
}

impl AnalyzerConfig {
    /// Reads a JSON config file and validates it.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: AnalyzerConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_keywords == 0 || self.max_keywords > MAX_KEYWORDS {
            return Err(ConfigError::Invalid(format!(
                "max_keywords must be between 1 and {MAX_KEYWORDS}, got {}",
                self.max_keywords
            )));
        }
        if self.max_input_bytes == Some(0) {
            return Err(ConfigError::Invalid(
                "max_input_bytes must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds the lexicon described by this config.
    pub fn lexicon(&self) -> Lexicon {
        Lexicon::for_profile(self.profile).with_extra_stopwords(&self.extra_stopwords)
    }
}

///Loads a stop-word list (.txt, one word per line) and returns its words.
pub fn load_stopwords(path: &Path) -> Result<Vec<String>, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(raw
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_json_uses_defaults() {
        let cfg: AnalyzerConfig = serde_json::from_str(r#"{"profile":"polarity"}"#).unwrap();
        assert_eq!(cfg.profile, LexiconProfile::Polarity);
        assert_eq!(cfg.max_keywords, MAX_KEYWORDS);
        assert_eq!(cfg.max_input_bytes, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let res: Result<AnalyzerConfig, _> = serde_json::from_str(r#"{"profil":"polarity"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn validate_bounds() {
        let mut cfg = AnalyzerConfig::default();
        assert!(cfg.validate().is_ok());
        cfg.max_keywords = 6;
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
        cfg.max_keywords = 3;
        cfg.max_input_bytes = Some(0);
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn reads_files() {
        let dir = tempfile::tempdir().unwrap();
        let cfg_path = dir.path().join("mood.json");
        fs::write(&cfg_path, r#"{"max_keywords": 3, "extra_stopwords": ["Today"]}"#).unwrap();
        let cfg = AnalyzerConfig::from_json_file(&cfg_path).unwrap();
        assert_eq!(cfg.max_keywords, 3);
        assert!(cfg.lexicon().is_stopword("today"));

        let stop_path = dir.path().join("stop.txt");
        let mut f = fs::File::create(&stop_path).unwrap();
        writeln!(f, "Meeting\n\n  office  ").unwrap();
        assert_eq!(load_stopwords(&stop_path).unwrap(), vec!["meeting", "office"]);

        let missing = dir.path().join("nope.json");
        assert!(matches!(
            AnalyzerConfig::from_json_file(&missing),
            Err(ConfigError::Io { .. })
        ));
    }
}
