//! Result assembly and the recovery boundary.
//!
//! [`TextMoodAnalyzer::analyze`] always returns a usable [`AnalysisResult`]:
//! whatever goes wrong inside the backend is logged and replaced by the
//! neutral default, so a journal entry can always be saved.

use std::panic::{self, AssertUnwindSafe};
use std::sync::OnceLock;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use crate::keywords::extract_keywords;
use crate::lexicon::{GENERAL_TOPIC, Lexicon, MoodLabel};
use crate::mood::{NEUTRAL_SCORE, score_mood};
use crate::topics::extract_topics;

/// Mood, intensity, topics and keywords for one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub mood: MoodLabel,
    pub score: f64,
    pub topics: Vec<String>,
    pub keywords: Vec<String>,
}

impl AnalysisResult {
    /// The result handed out when analysis fails.
    pub fn fallback() -> Self {
        AnalysisResult {
            mood: MoodLabel::Neutral,
            score: NEUTRAL_SCORE,
            topics: vec![GENERAL_TOPIC.to_string()],
            keywords: Vec::new(),
        }
    }
}

/// Analysis sub-record a journal entry carries alongside its own mood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryAnalysis {
    pub sentiment_score: f64,
    pub detected_mood: MoodLabel,
    pub topics: Vec<String>,
    pub keywords: Vec<String>,
}

impl From<&AnalysisResult> for EntryAnalysis {
    fn from(result: &AnalysisResult) -> Self {
        EntryAnalysis {
            sentiment_score: result.score,
            detected_mood: result.mood,
            topics: result.topics.clone(),
            keywords: result.keywords.clone(),
        }
    }
}

/// Something that can turn text into an [`AnalysisResult`].
pub trait MoodBackend: Send + Sync {
    fn try_analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError>;
}

/// Dictionary-based backend built from a [`Lexicon`].
#[derive(Debug, Clone)]
pub struct LexiconBackend {
    lexicon: Lexicon,
    max_keywords: usize,
    max_input_bytes: Option<usize>,
}

impl LexiconBackend {
    pub fn new(config: &AnalyzerConfig) -> Self {
        LexiconBackend {
            lexicon: config.lexicon(),
            max_keywords: config.max_keywords,
            max_input_bytes: config.max_input_bytes,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

impl Default for LexiconBackend {
    fn default() -> Self {
        LexiconBackend::new(&AnalyzerConfig::default())
    }
}

impl MoodBackend for LexiconBackend {
    fn try_analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        if let Some(limit) = self.max_input_bytes {
            if text.len() > limit {
                return Err(AnalysisError::InputTooLarge {
                    len: text.len(),
                    limit,
                });
            }
        }

        let mood = score_mood(&self.lexicon, text);
        // topics and keywords come from the real text even when the mood fell back to neutral
        Ok(AnalysisResult {
            mood: mood.mood,
            score: mood.score,
            topics: extract_topics(&self.lexicon, text),
            keywords: extract_keywords(&self.lexicon, text, self.max_keywords),
        })
    }
}

/// Entry point for callers. Wraps a backend in the recovery boundary.
#[derive(Debug, Clone)]
pub struct TextMoodAnalyzer<B = LexiconBackend> {
    backend: B,
}

impl TextMoodAnalyzer<LexiconBackend> {
    pub fn new(config: &AnalyzerConfig) -> Self {
        TextMoodAnalyzer {
            backend: LexiconBackend::new(config),
        }
    }
}

impl Default for TextMoodAnalyzer<LexiconBackend> {
    fn default() -> Self {
        TextMoodAnalyzer::new(&AnalyzerConfig::default())
    }
}

impl<B: MoodBackend> TextMoodAnalyzer<B> {
    pub fn with_backend(backend: B) -> Self {
        TextMoodAnalyzer { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Runs the backend and reports its error, turning panics into
    /// [`AnalysisError::Internal`].
    pub fn try_analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        match panic::catch_unwind(AssertUnwindSafe(|| self.backend.try_analyze(text))) {
            Ok(result) => result,
            Err(payload) => Err(AnalysisError::Internal(panic_message(payload.as_ref()))),
        }
    }

    ///Analyzes `text`. Never fails: on error logs a warning and returns
    ///[`AnalysisResult::fallback`].
    /// # Example
    /// ```
    /// use text_mood::{AnalyzerConfig, MoodLabel, TextMoodAnalyzer};
    /// let analyzer = TextMoodAnalyzer::new(&AnalyzerConfig::default());
    /// let r = analyzer.analyze("Worried about the project deadline");
    /// assert_eq!(r.mood, MoodLabel::Fear);
    /// assert_eq!(r.topics, vec!["work"]);
    /// ```
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        match self.try_analyze(text) {
            Ok(result) => {
                debug!(
                    "analyzed {} bytes: mood={} score={:.3} topics={:?}",
                    text.len(),
                    result.mood,
                    result.score,
                    result.topics
                );
                result
            }
            Err(e) => {
                warn!("mood analysis failed, using neutral result: {e}");
                AnalysisResult::fallback()
            }
        }
    }

    /// Same as [`analyze`](Self::analyze) behind an `async` signature, so a
    /// remote backend can be dropped in later without changing callers.
    pub async fn analyze_async(&self, text: &str) -> AnalysisResult {
        self.analyze(text)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

///Analyzes `text` with the default emotions lexicon.
/// # Example
/// ```
/// use text_mood::{MoodLabel, analyze};
/// let r = analyze("");
/// assert_eq!(r.mood, MoodLabel::Neutral);
/// assert_eq!(r.score, 0.5);
/// assert_eq!(r.topics, vec!["general"]);
/// ```
pub fn analyze(text: &str) -> AnalysisResult {
    static DEFAULT: OnceLock<TextMoodAnalyzer> = OnceLock::new();
    DEFAULT
        .get_or_init(|| TextMoodAnalyzer::new(&AnalyzerConfig::default()))
        .analyze(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Exploding;

    impl MoodBackend for Exploding {
        fn try_analyze(&self, _text: &str) -> Result<AnalysisResult, AnalysisError> {
            panic!("lexicon table corrupted");
        }
    }

    #[test]
    fn panicking_backend_falls_back() {
        let analyzer = TextMoodAnalyzer::with_backend(Exploding);
        assert_eq!(
            analyzer.try_analyze("anything"),
            Err(AnalysisError::Internal("lexicon table corrupted".to_string()))
        );
        assert_eq!(analyzer.analyze("anything"), AnalysisResult::fallback());
    }

    #[test]
    fn oversized_input_falls_back() {
        let cfg = AnalyzerConfig {
            max_input_bytes: Some(16),
            ..AnalyzerConfig::default()
        };
        let analyzer = TextMoodAnalyzer::new(&cfg);
        let text = "happy joyful wonderful day at the office";
        assert!(matches!(
            analyzer.try_analyze(text),
            Err(AnalysisError::InputTooLarge { limit: 16, .. })
        ));
        assert_eq!(analyzer.analyze(text), AnalysisResult::fallback());
    }

    #[test]
    fn neutral_branch_keeps_topics_and_keywords() {
        let analyzer = TextMoodAnalyzer::new(&AnalyzerConfig::default());
        let r = analyzer.analyze("Quiet weekend, long walks, reading novels");
        assert_eq!(r.mood, MoodLabel::Neutral);
        assert_eq!(r.score, NEUTRAL_SCORE);
        assert_eq!(r.topics, vec!["relaxation"]);
        assert_eq!(r.keywords, vec!["quiet", "weekend", "long", "walks", "reading"]);
    }

    #[test]
    fn entry_analysis_mirrors_result() {
        let r = analyze("Scared and nervous before the exam");
        let entry = EntryAnalysis::from(&r);
        assert_eq!(entry.detected_mood, MoodLabel::Fear);
        assert_eq!(entry.sentiment_score, r.score);
        assert_eq!(entry.topics, r.topics);
        assert_eq!(entry.keywords, r.keywords);
    }
}
