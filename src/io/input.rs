use std::io::Read;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::Transcript;

/// Errors raised while loading a transcript document
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported transcript format {extension:?} (expected .docx or .txt)")]
    UnsupportedFormat { extension: String },
    #[error("malformed .docx archive: {0}")]
    MalformedDocx(#[from] zip::result::ZipError),
    #[error(".docx archive has no word/document.xml")]
    MissingDocumentXml,
}

/// Paragraphs, including self-closing (empty) ones
static PARAGRAPH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<w:p(?:\s[^>/]*)?/>|<w:p(?:\s[^>/]*)?>(.*?)</w:p>")
        .expect("valid paragraph regex")
});

/// Text runs, tabs and line breaks inside a paragraph
static RUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<w:t(?:\s[^>/]*)?>(.*?)</w:t>|<w:tab\s*/>|<w:br(?:\s[^>/]*)?/>")
        .expect("valid run regex")
});

/// Load a transcript from a `.docx` or plain-text file
pub fn read_transcript(path: &Path) -> Result<Transcript, TranscriptError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "docx" => {
            let file = std::fs::File::open(path).map_err(|source| TranscriptError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            read_docx(file)
        }
        "" | "txt" | "text" | "md" => {
            let content = std::fs::read_to_string(path).map_err(|source| TranscriptError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Transcript::from_text(&content))
        }
        _ => Err(TranscriptError::UnsupportedFormat { extension }),
    }
}

/// Read paragraph text from a `.docx` archive
pub fn read_docx<R: Read + std::io::Seek>(reader: R) -> Result<Transcript, TranscriptError> {
    let mut archive = zip::ZipArchive::new(reader)?;

    let mut xml = String::new();
    {
        let mut document = match archive.by_name("word/document.xml") {
            Ok(document) => document,
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(TranscriptError::MissingDocumentXml);
            }
            Err(e) => return Err(e.into()),
        };
        document
            .read_to_string(&mut xml)
            .map_err(zip::result::ZipError::Io)?;
    }

    Ok(parse_document_xml(&xml))
}

/// Extract one line per `<w:p>` paragraph from WordprocessingML
pub fn parse_document_xml(xml: &str) -> Transcript {
    let paragraphs = PARAGRAPH_RE.captures_iter(xml).map(|caps| {
        let Some(body) = caps.get(1) else {
            return String::new();
        };

        let mut text = String::new();
        for run in RUN_RE.captures_iter(body.as_str()) {
            match run.get(1) {
                Some(t) => text.push_str(&unescape_xml(t.as_str())),
                None if run[0].starts_with("<w:tab") => text.push('\t'),
                None => text.push(' '),
            }
        }
        text
    });

    Transcript::from_lines(paragraphs)
}

fn unescape_xml(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
