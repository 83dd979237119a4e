use crate::nlp::{summarize, LexRankConfig};

/// Configuration for Stage 3 summarization
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    /// Number of sentences to keep
    pub sentences: usize,
    pub lexrank: LexRankConfig,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            sentences: 3,
            lexrank: LexRankConfig::default(),
        }
    }
}

/// Execute Stage 3: extractive LexRank summary of a speaker's corrected text
pub fn execute_summary(text: &str, config: &SummaryConfig) -> String {
    summarize(text, config.sentences, &config.lexrank)
}
