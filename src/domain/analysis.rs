/// Outcome of scoring one extracted resume text.
///
/// `ai_probability` is rounded to one decimal and lies in `[5.0, 95.0]`,
/// except for the exact `50.0` returned when no indicator of either kind
/// matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    pub ai_probability: f64,
    pub word_count: usize,
    pub text_length: usize,
}
