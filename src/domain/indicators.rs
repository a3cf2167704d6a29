use regex::Regex;

/// Static phrase and pattern tables used by the heuristic scorer.
///
/// Built once at startup and shared read-only across requests. The tables
/// and their relative weights are calibrated only by the original
/// deployment; changing them changes every reported probability, so they
/// are kept verbatim.
pub struct IndicatorSet {
    /// Stock template phrases, matched literally against lower-cased text.
    pub phrases: Vec<&'static str>,
    /// Overly formal boilerplate sentence openers.
    pub formal_patterns: Vec<Regex>,
    /// Repetitive first-person sentence shapes.
    pub repetitive_patterns: Vec<Regex>,
    /// Specific, verifiable personal history.
    pub personal_details: Vec<Regex>,
    /// Concrete tool and technology names.
    pub technical_skills: Vec<Regex>,
    /// Casual, conversational phrasing.
    pub casual_language: Vec<Regex>,
}

const PHRASES: &[&str] = &[
    "results-driven professional",
    "proven track record",
    "excellent communication skills",
    "strong analytical skills",
    "detail-oriented",
    "team player",
    "self-motivated",
    "passionate about",
    "leverage my skills",
    "utilize my experience",
    "dynamic professional",
    "innovative solutions",
    "cutting-edge",
    "synergy",
    "paradigm shift",
    "best practices",
    "value-added",
    "core competencies",
    "strategic thinking",
    "cross-functional",
    "thought leadership",
    "game-changing",
    "disruptive innovation",
    "scalable solutions",
    "end-to-end",
    "holistic approach",
    "action-oriented",
    "results-oriented",
    "performance-driven",
    "customer-centric",
];

const FORMAL_PATTERNS: &[&str] = &[
    r"(?i)I am a \w+ professional with \d+ years of experience",
    r"(?i)I have a proven track record of",
    r"(?i)I am passionate about",
    r"(?i)I am seeking a challenging position",
    r"(?i)I am a highly motivated",
    r"(?i)I possess strong",
    r"(?i)I am committed to",
    r"(?i)I am dedicated to",
    r"(?i)I am experienced in",
    r"(?i)I have extensive experience",
];

const REPETITIVE_PATTERNS: &[&str] = &[
    r"(?i)I \w+ \w+ \w+ \w+ \w+",
    r"(?i)I am \w+ \w+ \w+ \w+",
    r"(?i)I can \w+ \w+ \w+ \w+",
];

const PERSONAL_DETAILS: &[&str] = &[
    r"(?i)I graduated from \w+ University in \d{4}",
    r"(?i)I worked at \w+ from \d{4} to \d{4}",
    r"(?i)I led a team of \d+ people",
    r"(?i)I increased sales by \d+%",
    r"(?i)I reduced costs by \$\d+",
    r"(?i)I managed a budget of \$\d+",
    r"(?i)I completed \d+ projects",
    r"(?i)I received the \w+ award",
    r"(?i)I was promoted to \w+",
    r"(?i)I relocated to \w+",
];

const TECHNICAL_SKILLS: &[&str] = &[
    r"(?i)JavaScript|Python|Java|C\+\+|React|Angular|Vue|Node\.js|SQL|MongoDB|AWS|Azure|Docker|Kubernetes",
    r"(?i)Photoshop|Illustrator|Figma|Sketch|InDesign",
    r"(?i)Excel|PowerBI|Tableau|Salesforce|HubSpot",
];

const CASUAL_LANGUAGE: &[&str] = &[
    r"(?i)I love",
    r"(?i)I enjoy",
    r"(?i)I'm excited about",
    r"(?i)I'm looking forward to",
    r"(?i)I've always been",
    r"(?i)I started",
    r"(?i)I began",
    r"(?i)I decided to",
];

impl IndicatorSet {
    /// Compile the built-in tables.
    pub fn builtin() -> Self {
        Self {
            phrases: PHRASES.to_vec(),
            formal_patterns: compile(FORMAL_PATTERNS),
            repetitive_patterns: compile(REPETITIVE_PATTERNS),
            personal_details: compile(PERSONAL_DETAILS),
            technical_skills: compile(TECHNICAL_SKILLS),
            casual_language: compile(CASUAL_LANGUAGE),
        }
    }
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("built-in indicator pattern must compile"))
        .collect()
}
