mod raw_pdf_extractor;

pub use raw_pdf_extractor::{extract_text_from_bytes, RawPdfExtractor};
