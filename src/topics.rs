use crate::lexicon::{GENERAL_TOPIC, Lexicon};

///Returns every topic whose trigger words occur in `text`, in table order.
///Falls back to `["general"]` when nothing matches.
/// # Example
/// ```
/// use text_mood::{Lexicon, extract_topics};
/// let lex = Lexicon::default();
/// assert_eq!(extract_topics(&lex, "Gym after the office"), vec!["work", "health"]);
/// assert_eq!(extract_topics(&lex, "Nothing much"), vec!["general"]);
/// ```
pub fn extract_topics(lexicon: &Lexicon, text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let found: Vec<String> = lexicon
        .topics()
        .iter()
        .filter(|topic| {
            topic
                .triggers
                .iter()
                .any(|word| lowered.contains(word.as_str()))
        })
        .map(|topic| topic.name.clone())
        .collect();

    if found.is_empty() {
        vec![GENERAL_TOPIC.to_string()]
    } else {
        found
    }
}
