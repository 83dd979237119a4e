use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{AnalyticsMapping, SpeakerAnalytics, WordCount};

/// Machine-readable output of one analysis run
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsReport {
    pub metadata: ReportMetadata,
    pub analytics: AnalyticsMapping,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// Transcript the report was built from
    pub source: String,
    /// Speaker labels as submitted
    pub speakers: Vec<String>,
}

impl AnalyticsReport {
    pub fn new(source: impl Into<String>, speakers: &[String], analytics: AnalyticsMapping) -> Self {
        Self {
            metadata: ReportMetadata {
                run_id: Uuid::new_v4(),
                generated_at: Utc::now(),
                source: source.into(),
                speakers: speakers.to_vec(),
            },
            analytics,
        }
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

/// Human-readable per-speaker dashboard
pub struct Dashboard<'a> {
    analytics: &'a AnalyticsMapping,
}

impl<'a> Dashboard<'a> {
    pub fn new(analytics: &'a AnalyticsMapping) -> Self {
        Self { analytics }
    }

    /// Format every speaker's analytics
    pub fn format(&self) -> String {
        self.analytics
            .iter()
            .map(|entry| format_speaker(&entry.speaker, &entry.analytics))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format one speaker, if present
    pub fn format_speaker(&self, speaker: &str) -> Option<String> {
        self.analytics
            .get(speaker)
            .map(|analytics| format_speaker(speaker, analytics))
    }

    /// Write to a text file
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())?;
        Ok(())
    }
}

fn format_speaker(speaker: &str, data: &SpeakerAnalytics) -> String {
    let mut out = String::new();

    out.push_str(&format!("Analytics for {}\n", speaker));
    out.push_str(&format!("{}\n", "=".repeat(14 + speaker.chars().count())));
    out.push_str(&format!("Total Words Spoken: {}\n", data.total_words));
    out.push_str(&format!("Total Sentences Spoken: {}\n", data.total_sentences));
    out.push_str(&format!(
        "Most Common Words: {}\n",
        format_counts(&data.most_common_words)
    ));
    out.push_str(&format!(
        "Filler Frequency: {}\n",
        format_counts(&data.filler_frequency)
    ));
    out.push_str(&format!(
        "Average Sentence Length: {:.2} words\n",
        data.average_sentence_length
    ));
    out.push_str(&format!("Clarity (Flesch Reading Ease): {:.2}\n", data.clarity));
    out.push_str(&format!(
        "Tone: {} (Polarity: {:.2})\n",
        data.tone.label, data.tone.polarity
    ));
    out.push_str(&format!("Vocabulary Diversity: {:.2}\n", data.vocabulary_diversity));
    out.push_str(&format!("Question Frequency: {}\n", data.question_frequency));
    out.push_str(&format!("Summary: {}\n", data.summary));

    if !data.grammar_issues.is_empty() {
        out.push_str("Grammar Issues:\n");
        for (i, issue) in data.grammar_issues.iter().enumerate() {
            out.push_str(&format!("  Mistake {}:\n", i + 1));
            out.push_str(&format!("    Sentence: {}\n", issue.sentence));
            out.push_str(&format!("    Mistake: {}\n", issue.mistake));
            out.push_str(&format!("    Suggestion: {}\n", issue.suggestions.join(", ")));
        }
    }

    out
}

fn format_counts(counts: &[WordCount]) -> String {
    if counts.is_empty() {
        return "(none)".to_string();
    }

    counts
        .iter()
        .map(|c| format!("{} ({})", c.word, c.count))
        .collect::<Vec<_>>()
        .join(", ")
}
