use serde::{Deserialize, Serialize};

use crate::lexicon::{Lexicon, MoodLabel};

/// Baseline the default label carries; a label must beat it to be chosen.
pub const NEUTRAL_BASELINE: f64 = 0.2;
/// Score reported whenever the default label wins.
pub const NEUTRAL_SCORE: f64 = 0.5;
/// Number of distinct trigger hits at which the score reaches 1.0.
pub const SATURATION_HITS: f64 = 3.0;

/// Dominant label and its normalized intensity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoodScore {
    pub mood: MoodLabel,
    pub score: f64,
}

impl MoodScore {
    pub fn neutral(label: MoodLabel) -> Self {
        MoodScore {
            mood: label,
            score: NEUTRAL_SCORE,
        }
    }
}

///Scores `text` against every mood table of the lexicon.
///Each trigger word counts once if it occurs anywhere in the lower-cased text.
/// # Example
/// ```
/// use text_mood::{Lexicon, MoodLabel, score_mood};
/// let lex = Lexicon::default();
/// let s = score_mood(&lex, "So worried and anxious, almost scared.");
/// assert_eq!(s.mood, MoodLabel::Fear);
/// assert_eq!(s.score, 1.0);
/// ```
pub fn score_mood(lexicon: &Lexicon, text: &str) -> MoodScore {
    let lowered = text.to_lowercase();

    let mut best_label = lexicon.default_label();
    let mut best_hits = NEUTRAL_BASELINE;
    for entry in lexicon.moods() {
        let hits = count_present(&lowered, &entry.triggers) as f64;
        //earlier labels keep ties
        if hits > best_hits {
            best_label = entry.label;
            best_hits = hits;
        }
    }

    if best_hits <= NEUTRAL_BASELINE {
        return MoodScore::neutral(lexicon.default_label());
    }

    MoodScore {
        mood: best_label,
        score: (best_hits / SATURATION_HITS).min(1.0),
    }
}

/// Number of distinct `triggers` occurring as substrings of `lowered`.
pub(crate) fn count_present(lowered: &str, triggers: &[String]) -> usize {
    triggers
        .iter()
        .filter(|word| lowered.contains(word.as_str()))
        .count()
}
