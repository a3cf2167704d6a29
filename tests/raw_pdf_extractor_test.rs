use resume_analyzer::application::ports::TextExtractor;
use resume_analyzer::domain::{ContentType, Document};
use resume_analyzer::infrastructure::text_processing::{extract_text_from_bytes, RawPdfExtractor};

#[test]
fn given_text_object_when_extracting_then_joins_literal_strings() {
    let data = b"BT (Hello) (World) ET";

    assert_eq!(extract_text_from_bytes(data), "Hello World");
}

#[test]
fn given_multiple_text_objects_when_extracting_then_joins_objects_with_spaces() {
    let data = b"%PDF-1.4\nBT (Dear) (Team) ET\nstream\x00\x01\x02endstream\nBT (Regards) ET";

    assert_eq!(extract_text_from_bytes(data), "Dear Team Regards");
}

#[test]
fn given_text_object_without_literal_strings_when_extracting_then_object_is_skipped() {
    let data = b"BT 72 720 Td /F1 12 Tf ET BT (Real content) ET";

    assert_eq!(extract_text_from_bytes(data), "Real content");
}

#[test]
fn given_high_bytes_in_literal_string_when_extracting_then_decodes_one_char_per_byte() {
    let data = b"BT (Caf\xe9) ET";

    assert_eq!(extract_text_from_bytes(data), "Caf\u{e9}");
}

#[test]
fn given_no_markers_and_no_printable_words_when_extracting_then_returns_empty() {
    let data = vec![0u8; 64];

    assert_eq!(extract_text_from_bytes(&data), "");
}

#[test]
fn given_empty_parentheses_only_when_extracting_then_returns_empty() {
    // `()` carries no content and the fallback sees too few words.
    let data = b"BT () ET";

    assert_eq!(extract_text_from_bytes(data), "");
}

#[test]
fn given_whitespace_only_literals_when_extracting_then_returns_empty() {
    let data = b"BT ( ) (  ) ET";

    assert_eq!(extract_text_from_bytes(data), "");
}

#[test]
fn given_no_markers_but_enough_printable_words_when_extracting_then_falls_back() {
    let data = b"\x00\x01resume experience education skills summary objective \
contact reference employment history qualification\x02\x03";

    assert_eq!(
        extract_text_from_bytes(data),
        "resume experience education skills summary objective \
contact reference employment history qualification"
    );
}

#[test]
fn given_fallback_with_exactly_ten_words_when_extracting_then_returns_empty() {
    // Eleven candidate words is the minimum; ten is treated as noise.
    let data = b"\x7f\x80alpha beta gamma delta epsilon zeta theta kappa lambda omicron\x81";

    assert_eq!(extract_text_from_bytes(data), "");
}

#[test]
fn given_fallback_with_eleven_words_when_extracting_then_succeeds() {
    let data = b"\x7f\x80alpha beta gamma delta epsilon zeta theta kappa lambda omicron sigma\x81";

    assert_eq!(
        extract_text_from_bytes(data),
        "alpha beta gamma delta epsilon zeta theta kappa lambda omicron sigma"
    );
}

#[test]
fn given_fallback_input_when_extracting_then_short_and_non_alphabetic_tokens_are_dropped() {
    let data = b"\x02ab x9 42 alpha beta gamma delta epsilon zeta theta kappa lambda omicron sigma\x03";

    assert_eq!(
        extract_text_from_bytes(data),
        "alpha beta gamma delta epsilon zeta theta kappa lambda omicron sigma"
    );
}

#[tokio::test]
async fn given_adapter_when_extracting_then_returns_scanned_text() {
    let extractor = RawPdfExtractor::new();
    let data = b"BT (Hello) (World) ET";
    let document = Document::new(
        "resume.pdf".to_string(),
        ContentType::Pdf,
        data.len() as u64,
    );

    let result = extractor.extract_text(data, &document).await;

    assert_eq!(result.unwrap(), "Hello World");
}

#[tokio::test]
async fn given_adapter_with_unreadable_bytes_when_extracting_then_returns_empty_ok() {
    let extractor = RawPdfExtractor::new();
    let data = vec![0u8; 32];
    let document = Document::new(
        "scanned.pdf".to_string(),
        ContentType::Pdf,
        data.len() as u64,
    );

    let result = extractor.extract_text(&data, &document).await;

    assert_eq!(result.unwrap(), "");
}
