use std::ops::Range;

use crate::models::{GrammarIssue, GrammarMatch};

/// Rule ids whose matches are too noisy to report for spoken transcripts
pub const DEFAULT_IGNORED_RULES: &[&str] = &[
    "UPPERCASE_SENTENCE_START",
    "PUNCTUATION_PARAGRAPH_END",
    "EN_A_VS_AN",
    "AGREEMENT_SENT_START",
    "MORFOLOGIK_RULE_EN_US",
];

/// Convert a UTF-16 code unit offset into a byte offset of `text`
fn utf16_to_byte(text: &str, offset: usize) -> Option<usize> {
    let mut units = 0;
    for (byte, c) in text.char_indices() {
        if units == offset {
            return Some(byte);
        }
        if units > offset {
            return None;
        }
        units += c.len_utf16();
    }
    (units == offset).then_some(text.len())
}

/// Byte range of `text` covered by a UTF-16 `offset`/`length` pair
pub fn utf16_span(text: &str, offset: usize, length: usize) -> Option<Range<usize>> {
    let start = utf16_to_byte(text, offset)?;
    let end = utf16_to_byte(text, offset.checked_add(length)?)?;
    Some(start..end)
}

/// Apply the first suggested replacement of every match
///
/// Matches without suggestions, with offsets outside the text, or
/// overlapping an already applied match are skipped.
pub fn correct_text(text: &str, matches: &[GrammarMatch]) -> String {
    let mut edits: Vec<(Range<usize>, &str)> = matches
        .iter()
        .filter_map(|m| {
            let replacement = m.replacements.first()?;
            let span = utf16_span(text, m.offset, m.length)?;
            Some((span, replacement.value.as_str()))
        })
        .collect();

    // right to left so earlier byte offsets stay valid
    edits.sort_by(|a, b| b.0.start.cmp(&a.0.start));

    let mut corrected = text.to_string();
    let mut boundary = text.len();
    for (span, replacement) in edits {
        if span.end > boundary {
            continue;
        }
        corrected.replace_range(span.clone(), replacement);
        boundary = span.start;
    }

    corrected
}

/// Grammar issues worth reporting, in checker order
pub fn significant_issues(
    text: &str,
    matches: &[GrammarMatch],
    ignored_rules: &[String],
) -> Vec<GrammarIssue> {
    matches
        .iter()
        .filter(|m| !ignored_rules.iter().any(|rule| rule == m.rule_id()))
        .map(|m| GrammarIssue {
            sentence: m.context.text.clone(),
            mistake: mistake_text(text, m),
            suggestions: m.suggestions(),
        })
        .collect()
}

/// The flagged substring, from the checked text or else from the match context
fn mistake_text(text: &str, m: &GrammarMatch) -> String {
    utf16_span(text, m.offset, m.length)
        .map(|span| text[span].to_string())
        .or_else(|| {
            utf16_span(&m.context.text, m.context.offset, m.context.length)
                .map(|span| m.context.text[span].to_string())
        })
        .unwrap_or_default()
}
