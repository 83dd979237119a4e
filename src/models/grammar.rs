use serde::{Deserialize, Serialize};

/// Root response from the LanguageTool `/v2/check` endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckResponse {
    #[serde(default)]
    pub matches: Vec<GrammarMatch>,
}

/// A single rule match reported by the grammar checker
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GrammarMatch {
    /// Human-readable explanation
    #[serde(default)]
    pub message: String,
    /// Start of the flagged span, in UTF-16 code units
    pub offset: usize,
    /// Length of the flagged span, in UTF-16 code units
    pub length: usize,
    #[serde(default)]
    pub replacements: Vec<Replacement>,
    pub context: MatchContext,
    pub rule: MatchRule,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Replacement {
    pub value: String,
}

/// Text surrounding a match, as returned by the checker
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MatchContext {
    pub text: String,
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MatchRule {
    pub id: String,
    #[serde(default)]
    pub description: String,
}

impl GrammarMatch {
    pub fn rule_id(&self) -> &str {
        &self.rule.id
    }

    /// Replacement values, best first
    pub fn suggestions(&self) -> Vec<String> {
        self.replacements.iter().map(|r| r.value.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_response() {
        let json = r#"{
            "software": {"name": "LanguageTool", "version": "6.4"},
            "matches": [{
                "message": "Possible typo",
                "shortMessage": "",
                "replacements": [{"value": "their"}, {"value": "there"}],
                "offset": 4,
                "length": 5,
                "context": {"text": "and thier plan", "offset": 4, "length": 5},
                "sentence": "and thier plan",
                "rule": {"id": "EN_SPELL", "description": "Spelling", "issueType": "misspelling"}
            }]
        }"#;

        let response: CheckResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.matches.len(), 1);
        let m = &response.matches[0];
        assert_eq!(m.rule_id(), "EN_SPELL");
        assert_eq!(m.offset, 4);
        assert_eq!(m.suggestions(), vec!["their", "there"]);
        assert_eq!(m.context.text, "and thier plan");
    }

    #[test]
    fn test_missing_matches_defaults_to_empty() {
        let response: CheckResponse = serde_json::from_str("{}").unwrap();
        assert!(response.matches.is_empty());
    }
}
