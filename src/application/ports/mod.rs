mod text_extractor;

pub use text_extractor::{TextExtractor, TextExtractorError};
