//! Mood statistics over a caller-owned series of journal entries:
//! distribution, dominant mood, journaling streak, per-day averages and
//! week-over-week improvement.

use std::collections::{BTreeMap, HashSet};

use chrono::{Days, NaiveDate};

use crate::lexicon::MoodLabel;

/// Size of the windows compared by [`mood_improving`].
pub const WEEK: usize = 7;

/// One analyzed entry as seen by the statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodSample {
    pub date: NaiveDate,
    pub mood: MoodLabel,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insight {
    pub title: String,
    pub description: String,
}

pub fn mood_distribution(samples: &[MoodSample]) -> BTreeMap<MoodLabel, usize> {
    let mut counts = BTreeMap::new();
    for sample in samples {
        *counts.entry(sample.mood).or_insert(0) += 1;
    }
    counts
}

/// Most frequent label. Ties go to the label declared last.
pub fn dominant_mood(samples: &[MoodSample]) -> Option<MoodLabel> {
    let mut best: Option<(MoodLabel, usize)> = None;
    for (label, count) in mood_distribution(samples) {
        if best.is_none_or(|(_, top)| count >= top) {
            best = Some((label, count));
        }
    }
    best.map(|(label, _)| label)
}

///Consecutive calendar days with at least one entry, counted back from `today`.
///Zero when `today` has no entry.
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use text_mood::{MoodLabel, MoodSample, streak};
/// let date = |d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
/// let day = |d| MoodSample {
///     date: date(d),
///     mood: MoodLabel::Neutral,
///     score: 0.5,
/// };
/// let entries = [day(1), day(3), day(4), day(5)];
/// assert_eq!(streak(&entries, date(5)), 3);
/// assert_eq!(streak(&entries, date(6)), 0);
/// ```
pub fn streak(samples: &[MoodSample], today: NaiveDate) -> usize {
    let days: HashSet<NaiveDate> = samples.iter().map(|s| s.date).collect();

    let mut run = 0;
    let mut current = Some(today);
    while let Some(day) = current.filter(|d| days.contains(d)) {
        run += 1;
        current = day.checked_sub_days(Days::new(1));
    }
    run
}

/// Mean score per calendar day, ascending by date.
pub fn daily_average(samples: &[MoodSample]) -> Vec<(NaiveDate, f64)> {
    let mut days: BTreeMap<NaiveDate, (f64, u32)> = BTreeMap::new();
    for sample in samples {
        let slot = days.entry(sample.date).or_insert((0.0, 0));
        slot.0 += sample.score;
        slot.1 += 1;
    }
    days.into_iter()
        .map(|(date, (sum, n))| (date, sum / f64::from(n)))
        .collect()
}

/// True when the last [`WEEK`] entries score higher on average than the
/// [`WEEK`] entries before them.
pub fn mood_improving(samples: &[MoodSample]) -> bool {
    if samples.len() < 2 {
        return false;
    }
    let mut ordered = samples.to_vec();
    ordered.sort_by_key(|s| s.date);

    let split = ordered.len().saturating_sub(WEEK);
    let recent = &ordered[split..];
    let previous = &ordered[split.saturating_sub(WEEK)..split];
    match (mean_score(recent), mean_score(previous)) {
        (Some(now), Some(before)) => now > before,
        _ => false,
    }
}

fn mean_score(samples: &[MoodSample]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().map(|s| s.score).sum::<f64>() / samples.len() as f64)
}

pub fn insights(samples: &[MoodSample], today: NaiveDate) -> Vec<Insight> {
    let mut out = Vec::new();

    if let Some(mood) = dominant_mood(samples) {
        out.push(Insight {
            title: "Dominant Mood".to_string(),
            description: format!("Your most frequent mood is {mood}."),
        });
    }

    let days = streak(samples, today);
    if days > 0 {
        out.push(Insight {
            title: "Journaling Streak".to_string(),
            description: format!("You've been journaling for {days} days in a row!"),
        });
    }

    if mood_improving(samples) {
        out.push(Insight {
            title: "Mood Improvement".to_string(),
            description: "Your mood has been improving over the last week!".to_string(),
        });
    }

    out
}
