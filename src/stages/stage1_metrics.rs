use std::collections::HashMap;

use crate::models::{Tone, WordCount};
use crate::nlp::{
    analyze_tone, count_fillers, flesch_reading_ease, split_sentences, whitespace_tokens, words,
    DEFAULT_FILLER_TERMS,
};

/// Configuration for Stage 1 metrics
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Filler terms to count (case-insensitive, multi-word allowed)
    pub filler_terms: Vec<String>,
    /// Number of most frequent words to keep
    pub top_words: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            filler_terms: DEFAULT_FILLER_TERMS.iter().map(|s| s.to_string()).collect(),
            top_words: 10,
        }
    }
}

/// Text statistics for one speaker segment
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextMetrics {
    pub total_words: usize,
    pub total_sentences: usize,
    pub most_common_words: Vec<WordCount>,
    pub filler_frequency: Vec<WordCount>,
    pub average_sentence_length: f64,
    pub clarity: f64,
    pub tone: Tone,
    pub vocabulary_diversity: f64,
    pub question_frequency: usize,
}

/// Execute Stage 1: lexical, readability and tone metrics
///
/// Empty or degenerate text yields zeroed metrics and a neutral tone.
pub fn compute_metrics(text: &str, config: &MetricsConfig) -> TextMetrics {
    let sentences = split_sentences(text);
    let words = words(text);

    TextMetrics {
        total_words: words.len(),
        total_sentences: sentences.len(),
        most_common_words: most_common_words(&words, config.top_words),
        filler_frequency: count_fillers(text, &config.filler_terms),
        average_sentence_length: average_sentence_length(&sentences),
        clarity: flesch_reading_ease(text),
        tone: analyze_tone(text),
        vocabulary_diversity: vocabulary_diversity(text),
        question_frequency: question_frequency(&sentences),
    }
}

/// The `limit` most frequent tokens, descending by count, ties in first-seen order
pub fn most_common_words(words: &[&str], limit: usize) -> Vec<WordCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<WordCount> = Vec::new();

    for &word in words {
        match index.get(word) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(word, counts.len());
                counts.push(WordCount::new(word, 1));
            }
        }
    }

    // stable: equal counts keep first-seen order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

/// Mean whitespace-delimited words per sentence
pub fn average_sentence_length(sentences: &[&str]) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }

    let total: usize = sentences.iter().map(|s| s.split_whitespace().count()).sum();
    total as f64 / sentences.len() as f64
}

/// Distinct whitespace tokens over all whitespace tokens
pub fn vocabulary_diversity(text: &str) -> f64 {
    let tokens = whitespace_tokens(text);
    if tokens.is_empty() {
        return 0.0;
    }

    let mut unique = tokens.clone();
    unique.sort_unstable();
    unique.dedup();
    unique.len() as f64 / tokens.len() as f64
}

/// Sentences ending in a question mark
pub fn question_frequency(sentences: &[&str]) -> usize {
    sentences
        .iter()
        .filter(|s| s.trim_end().ends_with('?'))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ToneLabel;

    #[test]
    fn test_metrics_single_sentence() {
        let metrics = compute_metrics("Hello there.", &MetricsConfig::default());

        assert_eq!(metrics.total_words, 2);
        assert_eq!(metrics.total_sentences, 1);
        assert_eq!(metrics.question_frequency, 0);
        assert_eq!(metrics.average_sentence_length, 2.0);
        assert_eq!(metrics.vocabulary_diversity, 1.0);
    }

    #[test]
    fn test_metrics_question() {
        let metrics = compute_metrics("Hi Alice, how are you?", &MetricsConfig::default());

        assert_eq!(metrics.total_words, 5);
        assert_eq!(metrics.total_sentences, 1);
        assert_eq!(metrics.question_frequency, 1);
    }

    #[test]
    fn test_metrics_empty_text() {
        let metrics = compute_metrics("", &MetricsConfig::default());

        assert_eq!(metrics.total_words, 0);
        assert_eq!(metrics.total_sentences, 0);
        assert!(metrics.most_common_words.is_empty());
        assert!(metrics.filler_frequency.is_empty());
        assert_eq!(metrics.average_sentence_length, 0.0);
        assert_eq!(metrics.clarity, 0.0);
        assert_eq!(metrics.tone.label, ToneLabel::Neutral);
        assert_eq!(metrics.tone.polarity, 0.0);
        assert_eq!(metrics.vocabulary_diversity, 0.0);
        assert_eq!(metrics.question_frequency, 0);
    }

    #[test]
    fn test_metrics_fillers() {
        let metrics = compute_metrics("um, so, like I said", &MetricsConfig::default());
        let fillers: Vec<&str> = metrics
            .filler_frequency
            .iter()
            .map(|f| f.word.as_str())
            .collect();

        assert_eq!(fillers, vec!["um", "so", "like"]);
        assert!(metrics.filler_frequency.iter().all(|f| f.count >= 1));
    }

    #[test]
    fn test_most_common_words_order_and_limit() {
        let words = ["b", "a", "c", "a", "b", "d", "a"];
        let top = most_common_words(&words, 3);

        assert_eq!(
            top,
            vec![
                WordCount::new("a", 3),
                WordCount::new("b", 2),
                WordCount::new("c", 1),
            ]
        );
    }

    #[test]
    fn test_most_common_words_never_exceeds_limit() {
        let text = "one two three four five six seven eight nine ten eleven twelve one";
        let tokens = words(text);
        let top = most_common_words(&tokens, 10);

        assert_eq!(top.len(), 10);
        assert_eq!(top[0], WordCount::new("one", 2));
        assert!(top.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn test_most_common_words_is_case_sensitive() {
        let top = most_common_words(&["The", "the", "the"], 10);
        assert_eq!(top, vec![WordCount::new("the", 2), WordCount::new("The", 1)]);
    }

    #[test]
    fn test_vocabulary_diversity_bounds() {
        assert_eq!(vocabulary_diversity("a b c"), 1.0);
        assert_eq!(vocabulary_diversity("a a a a"), 0.25);
        assert_eq!(vocabulary_diversity("   "), 0.0);
    }

    #[test]
    fn test_average_sentence_length() {
        let sentences = split_sentences("One two three. Four five? Six!");
        assert_eq!(average_sentence_length(&sentences), 2.0);
        assert_eq!(average_sentence_length(&[]), 0.0);
    }
}
