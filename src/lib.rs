//! Heuristic AI-generated-text detection for uploaded PDF resumes.
//!
//! The crate is laid out hexagonally: `domain` holds the request-scoped
//! value types and the static indicator tables, `application` the scoring
//! logic and the extraction seam, `infrastructure` the raw-byte PDF text
//! scan and observability plumbing, and `presentation` the HTTP surface.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
