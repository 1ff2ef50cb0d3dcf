use std::collections::HashMap;

use crate::lexicon::Lexicon;

/// Upper bound on returned keywords.
pub const MAX_KEYWORDS: usize = 5;
/// Tokens of this many characters or fewer are never keywords.
pub const SHORT_TOKEN_CHARS: usize = 3;

///Lower-cases text and splits it at every run of non-word characters.
///Word characters are ASCII letters, ASCII digits and `_`; everything else separates.
/// # Example
/// ```
/// use text_mood::tokenize;
/// let words = tokenize("(_test] {Test2!= Café");
/// assert_eq!(words, vec!["_test", "test2", "caf"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

///Counts significant words (no stop-words, longer than three chars) and ranks them.
///Higher counts first; equal counts keep the order in which the words first appeared.
pub fn rank_keywords(lexicon: &Lexicon, text: &str) -> Vec<(String, u32)> {
    let mut ranked: Vec<(String, u32)> = Vec::new();
    let mut position: HashMap<String, usize> = HashMap::new();

    for word in tokenize(text) {
        if word.len() <= SHORT_TOKEN_CHARS || lexicon.is_stopword(&word) {
            continue;
        }
        match position.get(&word) {
            Some(&idx) => ranked[idx].1 += 1,
            None => {
                position.insert(word.clone(), ranked.len());
                ranked.push((word, 1));
            }
        }
    }

    // sort_by is stable, so first-seen order survives among equal counts
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

///Returns at most `limit` keywords (capped at [`MAX_KEYWORDS`]), most frequent first.
/// # Example
/// ```
/// use text_mood::{Lexicon, extract_keywords};
/// let lex = Lexicon::default();
/// let kw = extract_keywords(&lex, "Garden, garden and more garden work. More rain.", 5);
/// assert_eq!(kw, vec!["garden", "more", "work", "rain"]);
/// ```
pub fn extract_keywords(lexicon: &Lexicon, text: &str, limit: usize) -> Vec<String> {
    rank_keywords(lexicon, text)
        .into_iter()
        .take(limit.min(MAX_KEYWORDS))
        .map(|(word, _)| word)
        .collect()
}
