use std::collections::{HashMap, HashSet};

use super::tokenize::{split_sentences, words};

/// Configuration for LexRank sentence ranking
#[derive(Debug, Clone)]
pub struct LexRankConfig {
    /// Cosine similarity above which two sentences are linked
    pub threshold: f64,
    /// Power iteration stops once the L2 change drops below this
    pub epsilon: f64,
    /// Hard cap on power iterations
    pub max_iterations: usize,
}

impl Default for LexRankConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            epsilon: 0.1,
            max_iterations: 1000,
        }
    }
}

/// Extractive summary of `text` made of its `count` highest-ranked sentences
///
/// Selected sentences keep their document order and are joined with single
/// spaces. Text with no sentences summarizes to an empty string.
pub fn summarize(text: &str, count: usize, config: &LexRankConfig) -> String {
    let sentences = split_sentences(text);
    if sentences.is_empty() || count == 0 {
        return String::new();
    }

    if sentences.len() <= count {
        return sentences.join(" ");
    }

    let scores = rank_sentences(&sentences, config);

    let mut order: Vec<usize> = (0..sentences.len()).collect();
    // stable sort keeps document order between equal ratings
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order.truncate(count);
    order.sort_unstable();

    order
        .into_iter()
        .map(|i| sentences[i])
        .collect::<Vec<_>>()
        .join(" ")
}

/// LexRank centrality score for each sentence
pub fn rank_sentences(sentences: &[&str], config: &LexRankConfig) -> Vec<f64> {
    let n = sentences.len();
    if n == 0 {
        return Vec::new();
    }

    let tokenized: Vec<Vec<String>> = sentences
        .iter()
        .map(|s| words(s).into_iter().map(str::to_lowercase).collect())
        .collect();

    let tf: Vec<HashMap<&str, f64>> = tokenized.iter().map(|t| term_frequency(t)).collect();
    let idf = inverse_document_frequency(&tokenized);

    let mut matrix = vec![vec![0.0; n]; n];
    let mut degrees = vec![0.0; n];

    for row in 0..n {
        for col in 0..n {
            if cosine_similarity(&tf[row], &tf[col], &idf) > config.threshold {
                matrix[row][col] = 1.0;
                degrees[row] += 1.0;
            }
        }
    }

    for row in 0..n {
        let degree = if degrees[row] == 0.0 { 1.0 } else { degrees[row] };
        for value in matrix[row].iter_mut() {
            *value /= degree;
        }
    }

    power_method(&matrix, config)
}

/// Term counts scaled by the most frequent term in the sentence
fn term_frequency(tokens: &[String]) -> HashMap<&str, f64> {
    let mut counts: HashMap<&str, f64> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0.0) += 1.0;
    }

    let max = counts.values().copied().fold(0.0, f64::max).max(1.0);
    for value in counts.values_mut() {
        *value /= max;
    }
    counts
}

fn inverse_document_frequency(tokenized: &[Vec<String>]) -> HashMap<String, f64> {
    let sentence_count = tokenized.len() as f64;
    let mut document_frequency: HashMap<&str, usize> = HashMap::new();

    for tokens in tokenized {
        let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for term in unique {
            *document_frequency.entry(term).or_insert(0) += 1;
        }
    }

    document_frequency
        .into_iter()
        .map(|(term, n_j)| (term.to_string(), (sentence_count / (1.0 + n_j as f64)).ln()))
        .collect()
}

fn cosine_similarity(
    tf1: &HashMap<&str, f64>,
    tf2: &HashMap<&str, f64>,
    idf: &HashMap<String, f64>,
) -> f64 {
    let idf_of = |term: &str| idf.get(term).copied().unwrap_or(0.0);

    let numerator: f64 = tf1
        .iter()
        .filter_map(|(term, a)| tf2.get(term).map(|b| a * b * idf_of(*term).powi(2)))
        .sum();

    let norm = |tf: &HashMap<&str, f64>| {
        tf.iter()
            .map(|(term, value)| (value * idf_of(*term)).powi(2))
            .sum::<f64>()
            .sqrt()
    };

    let denominator = norm(tf1) * norm(tf2);
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Stationary distribution of the row-stochastic similarity matrix
fn power_method(matrix: &[Vec<f64>], config: &LexRankConfig) -> Vec<f64> {
    let n = matrix.len();
    let mut p = vec![1.0 / n as f64; n];

    for _ in 0..config.max_iterations {
        let mut next = vec![0.0; n];
        for (row, weights) in matrix.iter().enumerate() {
            for (col, weight) in weights.iter().enumerate() {
                next[col] += weight * p[row];
            }
        }

        let delta = next
            .iter()
            .zip(&p)
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt();
        p = next;

        if delta < config.epsilon {
            break;
        }
    }

    p
}
