use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::tokenize::words;
use crate::models::Tone;

/// Prior polarity of common opinion words, in [-1, 1]
const LEXICON: &[(&str, f64)] = &[
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("awesome", 1.0),
    ("amazing", 0.6),
    ("wonderful", 1.0),
    ("fantastic", 0.4),
    ("perfect", 1.0),
    ("best", 1.0),
    ("better", 0.5),
    ("nice", 0.6),
    ("fine", 0.4),
    ("happy", 0.8),
    ("glad", 0.5),
    ("pleased", 0.5),
    ("excited", 0.4),
    ("love", 0.5),
    ("lovely", 0.5),
    ("beautiful", 0.85),
    ("brilliant", 0.9),
    ("helpful", 0.5),
    ("useful", 0.3),
    ("successful", 0.75),
    ("clear", 0.1),
    ("easy", 0.43),
    ("interesting", 0.5),
    ("important", 0.4),
    ("positive", 0.23),
    ("strong", 0.43),
    ("impressive", 1.0),
    ("effective", 0.6),
    ("productive", 0.3),
    ("thankful", 0.5),
    ("grateful", 0.6),
    ("fun", 0.3),
    ("cool", 0.35),
    ("correct", 0.35),
    ("right", 0.29),
    ("smart", 0.21),
    ("confident", 0.5),
    ("valuable", 0.5),
    ("fair", 0.7),
    ("solid", 0.3),
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("poor", -0.4),
    ("sad", -0.5),
    ("unhappy", -0.6),
    ("angry", -0.5),
    ("annoying", -0.8),
    ("annoyed", -0.4),
    ("frustrated", -0.7),
    ("frustrating", -0.6),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("hate", -0.8),
    ("wrong", -0.5),
    ("difficult", -0.5),
    ("hard", -0.29),
    ("impossible", -0.67),
    ("slow", -0.3),
    ("late", -0.3),
    ("boring", -1.0),
    ("stupid", -0.8),
    ("ugly", -0.7),
    ("broken", -0.4),
    ("confusing", -0.3),
    ("confused", -0.4),
    ("worried", -0.25),
    ("serious", -0.33),
    ("negative", -0.3),
    ("useless", -0.5),
    ("weak", -0.38),
    ("painful", -0.7),
    ("expensive", -0.5),
    ("unfortunate", -0.5),
    ("unclear", -0.1),
    ("risky", -0.3),
    ("tired", -0.4),
    ("sorry", -0.5),
];

/// Words that scale the polarity of the following opinion word
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("super", 1.3),
    ("totally", 1.3),
    ("absolutely", 1.4),
    ("quite", 1.1),
    ("pretty", 1.1),
    ("too", 1.2),
    ("so", 1.2),
    ("highly", 1.3),
    ("fairly", 0.9),
    ("slightly", 0.6),
    ("somewhat", 0.8),
];

const NEGATORS: &[&str] = &["not", "never", "no", "nothing", "hardly", "cannot", "neither", "nor"];

/// Factor applied to an opinion word preceded by a negator
const NEGATION_FACTOR: f64 = -0.5;

static LEXICON_MAP: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| LEXICON.iter().copied().collect());

static INTENSIFIER_MAP: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| INTENSIFIERS.iter().copied().collect());

/// Sentiment polarity in [-1, 1], averaged over opinion words
///
/// Text without any opinion word scores 0.0.
pub fn polarity(text: &str) -> f64 {
    let tokens: Vec<String> = words(text).into_iter().map(str::to_lowercase).collect();
    let mut scores = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let Some(&prior) = LEXICON_MAP.get(token.as_str()) else {
            continue;
        };

        let mut modifier = 1.0;
        let mut lookback = i;

        if let Some(&intensity) = i
            .checked_sub(1)
            .and_then(|j| INTENSIFIER_MAP.get(tokens[j].as_str()))
        {
            modifier *= intensity;
            lookback -= 1;
        }

        if lookback
            .checked_sub(1)
            .is_some_and(|j| is_negator(&tokens[j]))
        {
            modifier *= NEGATION_FACTOR;
        }

        scores.push((prior * modifier).clamp(-1.0, 1.0));
    }

    if scores.is_empty() {
        return 0.0;
    }

    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    mean.clamp(-1.0, 1.0)
}

/// Tone label and polarity for a text
pub fn analyze_tone(text: &str) -> Tone {
    Tone::from_polarity(polarity(text))
}

fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token) || token.ends_with("n't") || token.ends_with("n\u{2019}t")
}
