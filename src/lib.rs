pub mod grammar;
pub mod io;
pub mod models;
pub mod nlp;
pub mod pipeline;
pub mod stages;

pub use grammar::{DisabledGrammarChecker, GrammarChecker, LanguageToolClient, LanguageToolConfig};
pub use io::{read_transcript, AnalyticsReport, Dashboard, TranscriptError};
pub use models::{
    AnalyticsMapping, GrammarIssue, SpeakerAnalytics, Tone, ToneLabel, Transcript, WordCount,
};
pub use pipeline::{analyze_segment, analyze_speakers, run, PipelineConfig};
pub use stages::{
    candidate_speaker_labels, compute_metrics, execute_grammar, execute_summary,
    extract_speaker_text, parse_speaker_labels, GrammarConfig, MetricsConfig, SummaryConfig,
};
