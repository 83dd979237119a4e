use std::path::Path;

use tracing::{debug, info, warn};

use crate::grammar::GrammarChecker;
use crate::io::{read_transcript, TranscriptError};
use crate::models::{AnalyticsMapping, SpeakerAnalytics, Transcript};
use crate::stages::{
    compute_metrics, execute_grammar, execute_summary, extract_speaker_text, GrammarConfig,
    GrammarResult, MetricsConfig, SummaryConfig,
};

/// Configuration for a full analysis run
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub metrics: MetricsConfig,
    pub grammar: GrammarConfig,
    pub summary: SummaryConfig,
}

/// Analyze a single speaker's segment
///
/// A grammar-checker failure is logged and leaves the record without
/// grammar issues; the summary then uses the uncorrected text.
pub async fn analyze_segment<G: GrammarChecker>(
    text: &str,
    checker: &G,
    config: &PipelineConfig,
) -> SpeakerAnalytics {
    let metrics = compute_metrics(text, &config.metrics);

    let grammar = match execute_grammar(checker, text, &config.grammar).await {
        Ok(result) => result,
        Err(e) => {
            warn!("Grammar check failed, continuing without it: {:#}", e);
            GrammarResult::unchecked(text)
        }
    };

    let summary = execute_summary(&grammar.corrected_text, &config.summary);

    SpeakerAnalytics {
        total_words: metrics.total_words,
        total_sentences: metrics.total_sentences,
        most_common_words: metrics.most_common_words,
        filler_frequency: metrics.filler_frequency,
        average_sentence_length: metrics.average_sentence_length,
        clarity: metrics.clarity,
        tone: metrics.tone,
        vocabulary_diversity: metrics.vocabulary_diversity,
        question_frequency: metrics.question_frequency,
        summary,
        grammar_issues: grammar.issues,
    }
}

/// Analyze every requested speaker in order
///
/// Each label yields exactly one record, zeroed when the label matches no
/// lines. A repeated label replaces the earlier record.
pub async fn analyze_speakers<G: GrammarChecker>(
    transcript: &Transcript,
    speakers: &[String],
    checker: &G,
    config: &PipelineConfig,
) -> AnalyticsMapping {
    let mut mapping = AnalyticsMapping::new();

    for speaker in speakers {
        info!("Analyzing speaker {:?}", speaker);
        let text = extract_speaker_text(transcript, speaker);

        if text.is_empty() {
            warn!("No lines found for speaker {:?}", speaker);
        } else {
            debug!("Speaker {:?}: {} characters of text", speaker, text.len());
        }

        let analytics = analyze_segment(&text, checker, config).await;
        info!(
            "Speaker {:?}: {} words, {} sentences, {} grammar issues",
            speaker,
            analytics.total_words,
            analytics.total_sentences,
            analytics.grammar_issues.len()
        );
        mapping.insert(speaker.clone(), analytics);
    }

    mapping
}

/// Load a transcript document and analyze the requested speakers
///
/// An unreadable document fails before any speaker is analyzed.
pub async fn run<G: GrammarChecker>(
    source: &Path,
    speakers: &[String],
    checker: &G,
    config: &PipelineConfig,
) -> Result<AnalyticsMapping, TranscriptError> {
    let transcript = read_transcript(source)?;
    info!("Loaded {} paragraphs from {:?}", transcript.len(), source);

    Ok(analyze_speakers(&transcript, speakers, checker, config).await)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use anyhow::Result;

    use super::*;
    use crate::grammar::DisabledGrammarChecker;
    use crate::models::{GrammarMatch, MatchContext, MatchRule, Replacement, ToneLabel};

    fn meeting() -> Transcript {
        Transcript::from_lines([
            "Alice: Hello there.",
            "",
            "Bob: Hi Alice, how are you?",
            "",
        ])
    }

    fn labels(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    struct FailingChecker;

    impl GrammarChecker for FailingChecker {
        async fn check(&self, _text: &str) -> Result<Vec<GrammarMatch>> {
            anyhow::bail!("connection refused")
        }
    }

    /// Flags every occurrence of "teh" and counts calls
    #[derive(Default)]
    struct TypoChecker {
        calls: AtomicUsize,
    }

    impl GrammarChecker for TypoChecker {
        async fn check(&self, text: &str) -> Result<Vec<GrammarMatch>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(text
                .match_indices("teh")
                .map(|(offset, _)| GrammarMatch {
                    message: "Possible typo".to_string(),
                    offset,
                    length: 3,
                    replacements: vec![Replacement {
                        value: "the".to_string(),
                    }],
                    context: MatchContext {
                        text: text.to_string(),
                        offset,
                        length: 3,
                    },
                    rule: MatchRule {
                        id: "TEH".to_string(),
                        description: String::new(),
                    },
                })
                .collect())
        }
    }

    #[tokio::test]
    async fn test_two_speaker_scenario() {
        let mapping = analyze_speakers(
            &meeting(),
            &labels(&["Alice:", "Bob:"]),
            &DisabledGrammarChecker,
            &PipelineConfig::default(),
        )
        .await;

        let alice = mapping.get("Alice:").unwrap();
        assert_eq!(alice.total_words, 2);
        assert_eq!(alice.total_sentences, 1);
        assert_eq!(alice.question_frequency, 0);
        assert_eq!(alice.summary, "Hello there.");

        let bob = mapping.get("Bob:").unwrap();
        assert_eq!(bob.question_frequency, 1);
        assert_eq!(bob.summary, "Hi Alice, how are you?");
    }

    #[tokio::test]
    async fn test_unknown_speaker_gets_zeroed_record() {
        let mapping = analyze_speakers(
            &meeting(),
            &labels(&["Carol:"]),
            &DisabledGrammarChecker,
            &PipelineConfig::default(),
        )
        .await;

        let carol = mapping.get("Carol:").unwrap();
        assert_eq!(carol.total_words, 0);
        assert_eq!(carol.total_sentences, 0);
        assert_eq!(carol.tone.label, ToneLabel::Neutral);
        assert_eq!(carol.tone.polarity, 0.0);
        assert_eq!(carol.vocabulary_diversity, 0.0);
        assert_eq!(carol.summary, "");
        assert!(carol.grammar_issues.is_empty());
    }

    #[tokio::test]
    async fn test_every_label_produces_one_record() {
        let mapping = analyze_speakers(
            &meeting(),
            &labels(&["Bob:", "Alice:", "Bob:", "Dan:"]),
            &DisabledGrammarChecker,
            &PipelineConfig::default(),
        )
        .await;

        assert_eq!(
            mapping.speakers().collect::<Vec<_>>(),
            vec!["Bob:", "Alice:", "Dan:"]
        );
    }

    #[tokio::test]
    async fn test_grammar_failure_is_isolated() {
        let mapping = analyze_speakers(
            &meeting(),
            &labels(&["Alice:", "Bob:"]),
            &FailingChecker,
            &PipelineConfig::default(),
        )
        .await;

        assert_eq!(mapping.len(), 2);
        let bob = mapping.get("Bob:").unwrap();
        assert!(bob.grammar_issues.is_empty());
        assert_eq!(bob.summary, "Hi Alice, how are you?");
        assert_eq!(bob.total_words, 5);
    }

    #[tokio::test]
    async fn test_summary_uses_corrected_text_and_checker_is_shared() {
        let transcript = Transcript::from_lines([
            "Alice: I read teh report.",
            "",
            "Bob: Teh end.",
        ]);
        let checker = TypoChecker::default();

        let mapping = analyze_speakers(
            &transcript,
            &labels(&["Alice:", "Bob:", "Carol:"]),
            &checker,
            &PipelineConfig::default(),
        )
        .await;

        let alice = mapping.get("Alice:").unwrap();
        assert_eq!(alice.summary, "I read the report.");
        assert_eq!(alice.grammar_issues.len(), 1);
        assert_eq!(alice.grammar_issues[0].mistake, "teh");
        assert_eq!(alice.grammar_issues[0].suggestions, vec!["the"]);

        // case-sensitive fake: "Teh" is left alone
        assert_eq!(mapping.get("Bob:").unwrap().summary, "Teh end.");

        // Carol has no text, so only two checks hit the checker
        assert_eq!(checker.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_run_reads_document() {
        use std::io::Write;

        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "Alice: Hello there.\n\nBob: Hi Alice, how are you?\n").unwrap();

        let mapping = run(
            file.path(),
            &labels(&["Alice:", "Bob:"]),
            &DisabledGrammarChecker,
            &PipelineConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(mapping.get("Alice:").unwrap().total_words, 2);
        assert_eq!(mapping.get("Bob:").unwrap().question_frequency, 1);
    }

    #[tokio::test]
    async fn test_run_fails_on_unreadable_document() {
        let result = run(
            Path::new("/nonexistent/meeting.docx"),
            &labels(&["Alice:"]),
            &DisabledGrammarChecker,
            &PipelineConfig::default(),
        )
        .await;

        assert!(matches!(result, Err(TranscriptError::Io { .. })));
    }

    #[tokio::test]
    async fn test_pipeline_is_idempotent() {
        let transcript = Transcript::from_lines([
            "Alice: Um, so, like I said, the budget is really good.",
            "We should ship it. Do you agree?",
            "",
            "Bob: Actually, I mean, it is sort of risky.",
        ]);
        let speakers = labels(&["Alice:", "Bob:"]);
        let config = PipelineConfig::default();

        let first = analyze_speakers(&transcript, &speakers, &DisabledGrammarChecker, &config).await;
        let second = analyze_speakers(&transcript, &speakers, &DisabledGrammarChecker, &config).await;

        assert_eq!(first, second);

        let alice = first.get("Alice:").unwrap();
        assert_eq!(alice.tone.label, ToneLabel::Positive);
        assert_eq!(alice.question_frequency, 1);
        assert!(alice.vocabulary_diversity > 0.0 && alice.vocabulary_diversity <= 1.0);
        assert!(alice.most_common_words.len() <= 10);
    }
}
