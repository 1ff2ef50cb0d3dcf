//! Static word tables driving mood scoring, topic matching and keyword filtering.
//!
//! The tables are plain `const` data. A [`Lexicon`] is built once from a
//! [`LexiconProfile`] (optionally with extra stop-words) and is never mutated
//! afterwards, so it can be shared freely between threads.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Topic returned when no topic table matches.
pub const GENERAL_TOPIC: &str = "general";

/// Closed set of mood labels. Which ones are scored depends on the profile.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
    Joy,
    Sadness,
    Anger,
    Fear,
    Positive,
    Negative,
    Neutral,
}

impl MoodLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::Joy => "joy",
            MoodLabel::Sadness => "sadness",
            MoodLabel::Anger => "anger",
            MoodLabel::Fear => "fear",
            MoodLabel::Positive => "positive",
            MoodLabel::Negative => "negative",
            MoodLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which label set the analyzer scores against.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LexiconProfile {
    /// joy / sadness / anger / fear, falling back to neutral.
    #[default]
    Emotions,
    /// positive / negative, falling back to neutral.
    Polarity,
}

const EMOTION_MOODS: &[(MoodLabel, &[&str])] = &[
    (
        MoodLabel::Joy,
        &["happy", "joy", "exciting", "wonderful", "love", "great"],
    ),
    (
        MoodLabel::Sadness,
        &["sad", "unhappy", "miserable", "depressed", "disappointed"],
    ),
    (
        MoodLabel::Anger,
        &["angry", "furious", "annoyed", "frustrated", "hate"],
    ),
    (
        MoodLabel::Fear,
        &["afraid", "scared", "anxious", "worried", "nervous"],
    ),
];

const POLARITY_MOODS: &[(MoodLabel, &[&str])] = &[
    (
        MoodLabel::Positive,
        &["happy", "joy", "excited", "great", "wonderful", "love"],
    ),
    (
        MoodLabel::Negative,
        &["sad", "angry", "upset", "terrible", "hate", "awful"],
    ),
];

// Declaration order is output order.
const TOPICS: &[(&str, &[&str])] = &[
    (
        "work",
        &["job", "office", "work", "career", "meeting", "project"],
    ),
    (
        "health",
        &["exercise", "workout", "health", "run", "gym", "fitness"],
    ),
    (
        "relationships",
        &["friend", "family", "partner", "date", "conversation"],
    ),
    (
        "personal growth",
        &["learn", "goal", "improve", "progress", "habit"],
    ),
    (
        "relaxation",
        &["rest", "sleep", "relax", "break", "vacation", "weekend"],
    ),
];

const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "with", "by", "about",
    "as", "i", "my", "me", "mine", "you", "your", "yours", "we", "our", "us", "they", "their",
    "them", "it", "its", "this", "that", "these", "those", "is", "am", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "do", "does", "did", "will", "would", "shall", "should",
    "may", "might", "must", "can", "could",
];

/// A scored label and its trigger words.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodEntry {
    pub label: MoodLabel,
    pub triggers: Vec<String>,
}

/// A topic name and its trigger words.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicEntry {
    pub name: String,
    pub triggers: Vec<String>,
}

/// Immutable lookup tables for one analysis profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexicon {
    moods: Vec<MoodEntry>,
    default_label: MoodLabel,
    topics: Vec<TopicEntry>,
    stopwords: HashSet<String>,
}

impl Lexicon {
    /// Builds the lexicon for `profile` with the built-in stop-words.
    /// # Example
    /// ```
    /// use text_mood::{Lexicon, LexiconProfile, MoodLabel};
    /// let lex = Lexicon::for_profile(LexiconProfile::Polarity);
    /// assert_eq!(lex.default_label(), MoodLabel::Neutral);
    /// assert_eq!(lex.moods().len(), 2);
    /// ```
    pub fn for_profile(profile: LexiconProfile) -> Self {
        let table = match profile {
            LexiconProfile::Emotions => EMOTION_MOODS,
            LexiconProfile::Polarity => POLARITY_MOODS,
        };
        Lexicon {
            moods: table
                .iter()
                .map(|(label, words)| MoodEntry {
                    label: *label,
                    triggers: to_owned_words(words),
                })
                .collect(),
            default_label: MoodLabel::Neutral,
            topics: TOPICS
                .iter()
                .map(|(name, words)| TopicEntry {
                    name: (*name).to_string(),
                    triggers: to_owned_words(words),
                })
                .collect(),
            stopwords: STOPWORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// Adds stop-words on top of the built-in list. Words are trimmed and
    /// lower-cased; blank entries are ignored.
    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() {
                self.stopwords.insert(word);
            }
        }
        self
    }

    pub fn moods(&self) -> &[MoodEntry] {
        &self.moods
    }

    pub fn default_label(&self) -> MoodLabel {
        self.default_label
    }

    pub fn topics(&self) -> &[TopicEntry] {
        &self.topics
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon::for_profile(LexiconProfile::default())
    }
}

fn to_owned_words(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}
