use once_cell::sync::Lazy;
use regex::Regex;

/// Sentence terminator run, optional closing quotes/brackets, then whitespace or end of text
static SENTENCE_END_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[.!?]+["'\x{201D}\x{2019})\]]*(?:\s+|$)"#).expect("valid sentence regex")
});

/// Letters/digits, allowing inner apostrophes and hyphens ("don't", "follow-up")
static WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['\x{2019}\-][\p{L}\p{N}]+)*").expect("valid word regex")
});

/// Titles that precede a name and never end a sentence
const TITLES: &[&str] = &["mr", "mrs", "ms", "dr", "prof", "vs"];

/// Abbreviations that end a sentence only when the next word is capitalized
const ABBREVIATIONS: &[&str] = &[
    "sr", "jr", "etc", "e.g", "i.e", "approx", "dept", "inc", "ltd", "corp", "jan", "feb", "apr",
    "jun", "jul", "aug", "sept", "oct", "nov",
];

/// Split text into trimmed sentences
///
/// A sentence ends at `.`, `!` or `?` followed by whitespace or the end of
/// the text. A period does not end a sentence after a title or an initial
/// ("Dr. Lee", "J. Smith"), nor after another abbreviation unless the next
/// word is capitalized. Trailing text without a terminator forms a final
/// sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_END_RE.find_iter(text) {
        if m.end() < text.len()
            && continues_sentence(&text[start..m.start()], m.as_str(), &text[m.end()..])
        {
            continue;
        }
        push_trimmed(&mut sentences, &text[start..m.end()]);
        start = m.end();
    }

    if start < text.len() {
        push_trimmed(&mut sentences, &text[start..]);
    }

    sentences
}

/// Word tokens in order, punctuation excluded
pub fn words(text: &str) -> Vec<&str> {
    WORD_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Word tokens with their byte offsets
pub fn word_spans(text: &str) -> Vec<(usize, &str)> {
    WORD_RE.find_iter(text).map(|m| (m.start(), m.as_str())).collect()
}

/// Whitespace-delimited tokens, punctuation attached
pub fn whitespace_tokens(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, candidate: &'a str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}

fn continues_sentence(before: &str, terminator: &str, after: &str) -> bool {
    if !terminator.starts_with('.') || terminator.starts_with("..") {
        return false;
    }

    let Some(last) = before.split_whitespace().last() else {
        return false;
    };
    let last = last.trim_start_matches(|c: char| !c.is_alphanumeric());

    if is_initial(last) {
        return true;
    }

    let last = last.to_lowercase();
    if TITLES.contains(&last.as_str()) {
        return true;
    }

    ABBREVIATIONS.contains(&last.as_str()) && !starts_capitalized(after)
}

/// A single uppercase letter other than the pronoun "I"
fn is_initial(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_uppercase() && c != 'I',
        _ => false,
    }
}

fn starts_capitalized(text: &str) -> bool {
    text.split_whitespace()
        .next()
        .and_then(|word| word.chars().find(|c| c.is_alphanumeric()))
        .is_some_and(char::is_uppercase)
}
