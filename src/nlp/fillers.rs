use crate::models::WordCount;
use crate::nlp::tokenize::word_spans;

/// Conversational filler terms counted by default
pub const DEFAULT_FILLER_TERMS: &[&str] = &[
    "uh", "um", "you know", "like", "er", "ah", "so", "actually", "basically", "right", "well",
    "you see", "i mean", "sort of",
];

/// Count filler terms over the words of `text`
///
/// Matching is case-insensitive. Multi-word terms match runs of consecutive
/// words separated only by whitespace, so "you? Know" is not "you know".
/// The longest term wins when several start at the same word, and the
/// words of a matched phrase are not counted again. Results are in
/// first-seen order.
pub fn count_fillers(text: &str, filler_terms: &[String]) -> Vec<WordCount> {
    let mut phrases: Vec<(String, Vec<String>)> = filler_terms
        .iter()
        .map(|term| {
            let parts: Vec<String> = term.split_whitespace().map(str::to_lowercase).collect();
            (parts.join(" "), parts)
        })
        .filter(|(_, parts)| !parts.is_empty())
        .collect();
    phrases.sort_by(|a, b| b.1.len().cmp(&a.1.len()));

    let spans = word_spans(text);
    let lowered: Vec<String> = spans.iter().map(|(_, t)| t.to_lowercase()).collect();
    // joined[i]: word i and word i + 1 are separated by whitespace alone
    let joined: Vec<bool> = spans
        .windows(2)
        .map(|pair| {
            let (start, word) = pair[0];
            text[start + word.len()..pair[1].0]
                .chars()
                .all(char::is_whitespace)
        })
        .collect();
    let mut counts: Vec<WordCount> = Vec::new();
    let mut i = 0;

    while i < lowered.len() {
        let matched = phrases
            .iter()
            .find(|(_, parts)| {
                lowered[i..].starts_with(parts.as_slice())
                    && joined[i..i + parts.len() - 1].iter().all(|&j| j)
            });

        match matched {
            Some((term, parts)) => {
                match counts.iter_mut().find(|c| &c.word == term) {
                    Some(entry) => entry.count += 1,
                    None => counts.push(WordCount::new(term.clone(), 1)),
                }
                i += parts.len();
            }
            None => i += 1,
        }
    }

    counts
}
