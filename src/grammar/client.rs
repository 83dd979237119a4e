use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;

use crate::models::{CheckResponse, GrammarMatch};

/// A grammar-checking capability
///
/// Implementations are created once per run and shared across speakers.
pub trait GrammarChecker {
    /// Check `text` and return every rule match, unfiltered
    fn check(&self, text: &str) -> impl Future<Output = Result<Vec<GrammarMatch>>> + Send;
}

/// Configuration for the LanguageTool HTTP client
#[derive(Debug, Clone)]
pub struct LanguageToolConfig {
    /// Server base URL (e.g., "http://localhost:8081")
    pub base_url: String,
    /// Language code sent with each check
    pub language: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LanguageToolConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8081".to_string(),
            language: "en-US".to_string(),
            timeout_secs: 30,
        }
    }
}

impl LanguageToolConfig {
    /// Create config from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("LANGUAGETOOL_URL") {
            config.base_url = url;
        }
        if let Ok(language) = std::env::var("LANGUAGETOOL_LANGUAGE") {
            config.language = language;
        }
        if let Ok(timeout) = std::env::var("LANGUAGETOOL_TIMEOUT_SECS") {
            config.timeout_secs = timeout
                .parse()
                .with_context(|| format!("Invalid LANGUAGETOOL_TIMEOUT_SECS: {:?}", timeout))?;
        }

        Ok(config)
    }

    fn check_url(&self) -> String {
        format!("{}/v2/check", self.base_url.trim_end_matches('/'))
    }
}

/// Client for a LanguageTool server
pub struct LanguageToolClient {
    client: Client,
    config: LanguageToolConfig,
}

impl LanguageToolClient {
    pub fn new(config: LanguageToolConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &LanguageToolConfig {
        &self.config
    }
}

impl GrammarChecker for LanguageToolClient {
    async fn check(&self, text: &str) -> Result<Vec<GrammarMatch>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let response = self
            .client
            .post(self.config.check_url())
            .form(&[("text", text), ("language", self.config.language.as_str())])
            .send()
            .await
            .context("Failed to send request to LanguageTool")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("LanguageTool error: {} - {}", status, body);
        }

        let response: CheckResponse = response
            .json()
            .await
            .context("Failed to parse LanguageTool response")?;

        debug!("LanguageTool returned {} matches", response.matches.len());
        Ok(response.matches)
    }
}

/// Grammar checker that never reports anything
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGrammarChecker;

impl GrammarChecker for DisabledGrammarChecker {
    async fn check(&self, _text: &str) -> Result<Vec<GrammarMatch>> {
        Ok(Vec::new())
    }
}
