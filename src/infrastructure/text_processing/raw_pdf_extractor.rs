use std::sync::LazyLock;

use async_trait::async_trait;
use regex::bytes::Regex;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::Document;

// PDF content streams show text between BT/ET operators, with literal
// string operands in parentheses. `(?-u)` keeps the scan byte-oriented so
// arbitrary binary content cannot derail it.
static TEXT_OBJECT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s-u)BT.*?ET").unwrap());
static LITERAL_STRING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?-u)\(([^)]+)\)").unwrap());

// The fallback pass only succeeds with strictly more than ten alphabetic
// words, otherwise it is considered to have found noise.
const MIN_FALLBACK_WORDS: usize = 11;

/// Best-effort text recovery from raw PDF bytes.
///
/// This is not a PDF parser. The primary pass scans the buffer for
/// `BT … ET` text objects and collects their parenthesized literal
/// strings; when that yields nothing, a fallback keeps runs of printable
/// ASCII words. Scanned-image or encrypted documents come back empty.
#[derive(Default)]
pub struct RawPdfExtractor;

impl RawPdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextExtractor for RawPdfExtractor {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, TextExtractorError> {
        let buffer = data.to_vec();

        let text = tokio::task::spawn_blocking(move || extract_text_from_bytes(&buffer))
            .await
            .map_err(|e| TextExtractorError::ExtractionFailed(format!("task join error: {e}")))?;

        tracing::debug!(chars = text.len(), "Raw PDF scan complete");

        Ok(text)
    }
}

/// Run both passes over `data`. An empty result means no usable text.
pub fn extract_text_from_bytes(data: &[u8]) -> String {
    let text = extract_text_objects(data);

    if text.trim().is_empty() {
        extract_printable_words(data)
    } else {
        text
    }
}

fn extract_text_objects(data: &[u8]) -> String {
    let mut objects = Vec::new();

    for object in TEXT_OBJECT.find_iter(data) {
        let fragments: Vec<String> = LITERAL_STRING
            .captures_iter(object.as_bytes())
            .filter_map(|capture| capture.get(1))
            .map(|operand| latin1_to_string(operand.as_bytes()))
            .collect();

        let joined = fragments.join(" ");
        if !joined.trim().is_empty() {
            objects.push(joined);
        }
    }

    objects.join(" ")
}

fn extract_printable_words(data: &[u8]) -> String {
    let printable: String = data
        .iter()
        .map(|&b| match b {
            0x20..=0x7E | b'\n' | b'\r' => char::from(b),
            _ => ' ',
        })
        .collect();

    let words: Vec<&str> = printable
        .split_whitespace()
        .filter(|word| word.len() > 2 && word.bytes().all(|b| b.is_ascii_alphabetic()))
        .collect();

    if words.len() >= MIN_FALLBACK_WORDS {
        words.join(" ")
    } else {
        String::new()
    }
}

// Every byte maps to exactly one character, preserving whatever single-byte
// encoding the content stream used.
fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
