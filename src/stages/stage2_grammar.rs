use anyhow::Result;
use tracing::debug;

use crate::grammar::{correct_text, significant_issues, GrammarChecker, DEFAULT_IGNORED_RULES};
use crate::models::GrammarIssue;

/// Configuration for Stage 2
#[derive(Debug, Clone)]
pub struct GrammarConfig {
    /// Rule ids excluded from the reported issues (still used for correction)
    pub ignored_rules: Vec<String>,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            ignored_rules: DEFAULT_IGNORED_RULES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Result of Stage 2 grammar checking
#[derive(Debug, Clone, PartialEq)]
pub struct GrammarResult {
    /// Text with the first suggestion of every match applied
    pub corrected_text: String,
    /// Reportable issues, in checker order
    pub issues: Vec<GrammarIssue>,
}

impl GrammarResult {
    /// Result used when the checker could not run: text unchanged, no issues
    pub fn unchecked(text: &str) -> Self {
        Self {
            corrected_text: text.to_string(),
            issues: Vec::new(),
        }
    }
}

/// Execute Stage 2: grammar check and correction
pub async fn execute_grammar<G: GrammarChecker>(
    checker: &G,
    text: &str,
    config: &GrammarConfig,
) -> Result<GrammarResult> {
    if text.trim().is_empty() {
        return Ok(GrammarResult::unchecked(text));
    }

    let matches = checker.check(text).await?;
    let issues = significant_issues(text, &matches, &config.ignored_rules);

    debug!(
        "Stage 2: {} matches, {} significant",
        matches.len(),
        issues.len()
    );

    Ok(GrammarResult {
        corrected_text: correct_text(text, &matches),
        issues,
    })
}
