use std::sync::Arc;

use resume_analyzer::application::services::HeuristicScorer;
use resume_analyzer::domain::IndicatorSet;

fn scorer() -> HeuristicScorer {
    HeuristicScorer::new(Arc::new(IndicatorSet::builtin()))
}

#[test]
fn given_text_with_no_indicators_when_scoring_then_returns_uncertain_sentinel() {
    let analysis = scorer().score("The quick brown fox jumps over the lazy dog");

    assert_eq!(analysis.ai_probability, 50.0);
    assert_eq!(analysis.word_count, 9);
    assert_eq!(analysis.text_length, 43);
}

#[test]
fn given_single_ai_phrase_when_scoring_then_probability_clamps_to_maximum() {
    // One phrase hit and nothing human: raw 100% plus the short-document
    // nudge, clamped down to the ceiling.
    let analysis = scorer().score("proven track record");

    assert_eq!(analysis.ai_probability, 95.0);
    assert_eq!(analysis.word_count, 3);
    assert_eq!(analysis.text_length, 19);
}

#[test]
fn given_long_human_only_text_when_scoring_then_probability_clamps_to_minimum() {
    // 600 neutral words push the length factor to zero, so the single
    // personal-detail hit drives the raw probability to 0, then the floor.
    let mut text = "alpha ".repeat(600);
    text.push_str("I increased sales by 15%");

    let analysis = scorer().score(&text);

    assert_eq!(analysis.ai_probability, 5.0);
    assert_eq!(analysis.word_count, 605);
}

#[test]
fn given_personal_detail_sentence_when_scoring_then_repetitive_shape_also_counts() {
    // "I graduated from MIT University in 2015" matches the personal-detail
    // table (weight 3) and, because it is also "I" plus five words, the
    // repetitive-sentence table (weight 1): 1/4 of the signal is AI-side.
    let analysis = scorer().score("I graduated from MIT University in 2015");

    assert_eq!(analysis.ai_probability, 35.0);
    assert_eq!(analysis.word_count, 7);
    assert_eq!(analysis.text_length, 39);
}

#[test]
fn given_mixed_indicators_when_scoring_then_weights_both_sides() {
    // "team player" (2.0) vs "Python" (2.0): even split plus the
    // short-document nudge.
    let analysis = scorer().score("team player who ships Python");

    assert_eq!(analysis.ai_probability, 60.0);
    assert_eq!(analysis.word_count, 5);
}

#[test]
fn given_fractional_ratio_when_scoring_then_rounds_to_one_decimal() {
    // "cutting-edge" (2.0) vs "I love" (1.5): 2/3.5 of the signal is
    // AI-side, 57.142...% plus the short-document nudge, rounded to 67.1.
    let analysis = scorer().score("cutting-edge and I love it");

    assert_eq!(analysis.ai_probability, 67.1);
}

#[test]
fn given_repeated_phrase_when_scoring_then_each_occurrence_counts() {
    // Two phrase hits against one technical hit: 4/6 of the signal.
    let analysis = scorer().score("synergy synergy plus some Tableau work");

    // 66.666... + 10.0 rounds to 76.7.
    assert_eq!(analysis.ai_probability, 76.7);
}

#[test]
fn given_same_text_twice_when_scoring_then_results_are_identical() {
    let text = "I love results-driven professional work and Docker";
    let scorer = scorer();

    let first = scorer.score(text);
    let second = scorer.score(text);

    assert_eq!(first, second);
}

#[test]
fn given_irregular_whitespace_when_scoring_then_counts_words_and_characters() {
    let analysis = scorer().score("  one   two\nthree  ");

    assert_eq!(analysis.word_count, 3);
    assert_eq!(analysis.text_length, 19);
    assert_eq!(analysis.ai_probability, 50.0);
}
