use super::tokenize::{split_sentences, words};

/// Flesch Reading Ease score, rounded to two decimals
///
/// `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`.
/// Returns 0.0 when the text has no words or no sentences.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let words = words(text);
    let sentence_count = split_sentences(text).len();

    if words.is_empty() || sentence_count == 0 {
        return 0.0;
    }

    let word_count = words.len() as f64;
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

    let words_per_sentence = word_count / sentence_count as f64;
    let syllables_per_word = syllables as f64 / word_count;

    let score = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    (score * 100.0).round() / 100.0
}

/// Estimate syllables in an English word from its vowel groups
pub fn count_syllables(word: &str) -> usize {
    let chars: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    if chars.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut previous_was_vowel = false;
    for &c in &chars {
        let vowel = is_vowel(c);
        if vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = vowel;
    }

    let len = chars.len();
    if count > 1 && chars[len - 1] == 'e' {
        // "table" keeps its final syllable, "whole" does not
        let consonant_le = len >= 3 && chars[len - 2] == 'l' && !is_vowel(chars[len - 3]);
        if !consonant_le {
            count -= 1;
        }
    } else if count > 1 && len >= 3 && chars[len - 2] == 'e' && chars[len - 1] == 'd' {
        // "jumped" vs "wanted"
        if !matches!(chars[len - 3], 't' | 'd') {
            count -= 1;
        }
    }

    count.max(1)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_syllables() {
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("there"), 1);
        assert_eq!(count_syllables("table"), 2);
        assert_eq!(count_syllables("whole"), 1);
        assert_eq!(count_syllables("jumped"), 1);
        assert_eq!(count_syllables("wanted"), 2);
        assert_eq!(count_syllables("hello"), 2);
        assert_eq!(count_syllables("Basically,"), 4);
        assert_eq!(count_syllables("42"), 0);
    }

    #[test]
    fn test_flesch_simple_sentence() {
        // 6 words, 1 sentence, 6 syllables
        let score = flesch_reading_ease("The cat sat on the mat.");
        assert!((score - 116.15).abs() < 0.011, "score was {score}");
    }

    #[test]
    fn test_flesch_harder_text_scores_lower() {
        let easy = flesch_reading_ease("We met. We ate. We left.");
        let hard = flesch_reading_ease(
            "Organizational considerations necessitate comprehensive evaluation of infrastructure.",
        );
        assert!(easy > hard);
    }

    #[test]
    fn test_flesch_empty_text() {
        assert_eq!(flesch_reading_ease(""), 0.0);
        assert_eq!(flesch_reading_ease("?!"), 0.0);
    }
}
