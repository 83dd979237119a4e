use serde::{Deserialize, Serialize};

/// Ordered paragraph lines of a loaded transcript document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Build a transcript from paragraph lines
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a transcript from plain text, one paragraph per line
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Paragraph lines in document order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_keeps_blank_lines() {
        let transcript = Transcript::from_text("Alice: hi\n\nBob: hello\n");

        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.lines()[1], "");
        assert_eq!(transcript.lines()[2], "Bob: hello");
    }
}
