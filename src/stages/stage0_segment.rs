use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Transcript;

/// A line opening with a short name followed by a colon, e.g. "Dr. Ann Lee:"
static LABEL_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([\p{L}][\p{L}\p{N} .'\-]{0,39}):(?:\s|$)").expect("valid label regex")
});

/// Collect the text attributed to `speaker`
///
/// A line starting with the label (case-sensitive prefix match) opens a
/// block; a blank line closes it. Lines inside a block are trimmed and
/// joined with single spaces. The label itself is never part of the
/// result: only the remainder of a label line is kept. Every block for
/// the speaker is concatenated in document order.
///
/// A label that is a prefix of another speaker's label ("Ann" and "Anna")
/// also opens on the other speaker's lines; include the trailing colon in
/// labels to avoid this.
pub fn extract_speaker_text(transcript: &Transcript, speaker: &str) -> String {
    if speaker.is_empty() {
        return String::new();
    }

    let mut capturing = false;
    let mut captured: Vec<&str> = Vec::new();

    for line in transcript.lines() {
        if let Some(rest) = line.strip_prefix(speaker) {
            capturing = true;
            let rest = rest.trim();
            if !rest.is_empty() {
                captured.push(rest);
            }
            continue;
        }

        if capturing && line.trim().is_empty() {
            capturing = false;
        }

        if capturing {
            captured.push(line.trim());
        }
    }

    captured.join(" ")
}

/// Split a comma-separated list of speaker labels, trimming each entry
///
/// Empty entries are dropped; duplicates are kept in order.
pub fn parse_speaker_labels(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

/// Distinct `Name:` prefixes found at the start of lines, in first-seen order
pub fn candidate_speaker_labels(transcript: &Transcript) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();

    for line in transcript.lines() {
        let Some(caps) = LABEL_PREFIX_RE.captures(line) else {
            continue;
        };
        let label = format!("{}:", caps[1].trim_end());
        if !labels.contains(&label) {
            labels.push(label);
        }
    }

    labels
}
