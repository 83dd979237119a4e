use serde::{Deserialize, Serialize};

/// A term and the number of times it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Categorical tone derived from the sign of the polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToneLabel {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl ToneLabel {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Self::Positive
        } else if polarity < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for ToneLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tone label with its signed polarity in [-1, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Tone {
    pub label: ToneLabel,
    pub polarity: f64,
}

impl Tone {
    pub fn from_polarity(polarity: f64) -> Self {
        Self {
            label: ToneLabel::from_polarity(polarity),
            polarity,
        }
    }
}

/// A grammar problem reported for a speaker's text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarIssue {
    /// Text surrounding the mistake
    pub sentence: String,
    /// Exact substring the checker flagged
    pub mistake: String,
    /// Suggested replacements, best first
    pub suggestions: Vec<String>,
}

/// Lexical, grammatical and tone statistics for one speaker
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpeakerAnalytics {
    pub total_words: usize,
    pub total_sentences: usize,
    /// Most frequent words, descending by count, ties in first-seen order
    pub most_common_words: Vec<WordCount>,
    /// Filler terms in first-seen order
    pub filler_frequency: Vec<WordCount>,
    /// Mean words per sentence
    pub average_sentence_length: f64,
    /// Flesch Reading Ease
    pub clarity: f64,
    pub tone: Tone,
    /// Unique-token ratio in [0, 1]
    pub vocabulary_diversity: f64,
    /// Sentences ending in a question mark
    pub question_frequency: usize,
    pub summary: String,
    pub grammar_issues: Vec<GrammarIssue>,
}

/// Speaker analytics for one run, keyed by speaker label in submission order
///
/// Inserting an existing label replaces its record in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalyticsMapping {
    entries: Vec<SpeakerEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerEntry {
    pub speaker: String,
    pub analytics: SpeakerAnalytics,
}

impl AnalyticsMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, speaker: impl Into<String>, analytics: SpeakerAnalytics) {
        let speaker = speaker.into();
        match self.entries.iter_mut().find(|e| e.speaker == speaker) {
            Some(entry) => entry.analytics = analytics,
            None => self.entries.push(SpeakerEntry { speaker, analytics }),
        }
    }

    pub fn get(&self, speaker: &str) -> Option<&SpeakerAnalytics> {
        self.entries
            .iter()
            .find(|e| e.speaker == speaker)
            .map(|e| &e.analytics)
    }

    pub fn speakers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.speaker.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpeakerEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
