use std::sync::Arc;

use regex::Regex;

use crate::domain::{Analysis, IndicatorSet};

const PHRASE_WEIGHT: f64 = 2.0;
const FORMAL_PATTERN_WEIGHT: f64 = 1.5;
const REPETITIVE_PATTERN_WEIGHT: f64 = 1.0;
const PERSONAL_DETAIL_WEIGHT: f64 = 3.0;
const TECHNICAL_SKILL_WEIGHT: f64 = 2.0;
const CASUAL_LANGUAGE_WEIGHT: f64 = 1.5;

const SHORT_DOCUMENT_WORDS: usize = 200;
const MEDIUM_DOCUMENT_WORDS: usize = 500;
const SHORT_DOCUMENT_FACTOR: f64 = 0.1;
const MEDIUM_DOCUMENT_FACTOR: f64 = 0.05;

const MIN_PROBABILITY: f64 = 5.0;
const MAX_PROBABILITY: f64 = 95.0;
const NO_SIGNAL_PROBABILITY: f64 = 50.0;

/// Pure heuristic scorer over an injected, read-only indicator set.
///
/// Phrase hits are counted case-insensitively against a lower-cased copy of
/// the text; pattern hits are counted non-overlapping against the text as
/// given. Short documents get a fixed additive nudge toward the AI end.
pub struct HeuristicScorer {
    indicators: Arc<IndicatorSet>,
}

impl HeuristicScorer {
    pub fn new(indicators: Arc<IndicatorSet>) -> Self {
        Self { indicators }
    }

    pub fn score(&self, text: &str) -> Analysis {
        let lower = text.to_lowercase();

        let mut ai_score = 0.0;
        for &phrase in &self.indicators.phrases {
            ai_score += lower.matches(phrase).count() as f64 * PHRASE_WEIGHT;
        }
        ai_score += count_matches(&self.indicators.formal_patterns, text) * FORMAL_PATTERN_WEIGHT;
        ai_score +=
            count_matches(&self.indicators.repetitive_patterns, text) * REPETITIVE_PATTERN_WEIGHT;

        let mut human_score = 0.0;
        human_score +=
            count_matches(&self.indicators.personal_details, text) * PERSONAL_DETAIL_WEIGHT;
        human_score +=
            count_matches(&self.indicators.technical_skills, text) * TECHNICAL_SKILL_WEIGHT;
        human_score +=
            count_matches(&self.indicators.casual_language, text) * CASUAL_LANGUAGE_WEIGHT;

        let word_count = text.split_whitespace().count();
        let length_factor = if word_count < SHORT_DOCUMENT_WORDS {
            SHORT_DOCUMENT_FACTOR
        } else if word_count < MEDIUM_DOCUMENT_WORDS {
            MEDIUM_DOCUMENT_FACTOR
        } else {
            0.0
        };

        let total_score = ai_score + human_score;
        let ai_probability = if total_score == 0.0 {
            // No indicator of either kind: report the uncertain sentinel.
            NO_SIGNAL_PROBABILITY
        } else {
            let raw = (ai_score / total_score) * 100.0 + length_factor * 100.0;
            round_to_tenth(raw.clamp(MIN_PROBABILITY, MAX_PROBABILITY))
        };

        Analysis {
            ai_probability,
            word_count,
            text_length: text.chars().count(),
        }
    }
}

fn count_matches(patterns: &[Regex], text: &str) -> f64 {
    patterns
        .iter()
        .map(|pattern| pattern.find_iter(text).count())
        .sum::<usize>() as f64
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
