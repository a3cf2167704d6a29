mod analysis;
mod document;
mod indicators;

pub use analysis::Analysis;
pub use document::{ContentType, Document, DocumentId};
pub use indicators::IndicatorSet;
