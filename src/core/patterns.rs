//! Compiled transcript patterns.
//!
//! Every regex here is cached as a static to avoid recompilation on each
//! scoring request. Patterns that scan case-insensitive evidence (financing,
//! follow-up) expect the caller to pass the lowercased transcript; the
//! location pattern runs on the original text because it keys off
//! capitalization.

use once_cell::sync::Lazy;
use regex::Regex;

/// Currency/number mention: `$2M`, `500k`, `2 million`
pub static BUDGET_MENTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\d+[kKmM]?|\d+\s*(?:million|[kKmM])\b").expect("Invalid budget regex")
});

/// Amount capture with optional magnitude suffix, for intent extraction
///
/// Group 1 is the numeric part, group 2 the `k`/`m`/`million` suffix. A
/// match with neither a `$` prefix nor a suffix is a bare number and must
/// be ignored by the caller.
pub static BUDGET_AMOUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\$?\s*(\d[\d,]*(?:\.\d+)?)\s*(million|[km])?\b")
        .expect("Invalid budget amount regex")
});

/// Preposition followed by a capitalized phrase: `in Dubai Marina`
///
/// Group 1 captures the place name. The capitalized-word-sequence tail is
/// tighter than a greedy letter class so the capture stops before trailing
/// lowercase words.
pub static LOCATION_MENTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:in|at|near|around)\s+([A-Z][A-Za-z]*(?:\s+[A-Z][A-Za-z]*)*)")
        .expect("Invalid location regex")
});

/// Pre-approval evidence, matched against the lowercased transcript
pub static FINANCING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"pre-?approved|mortgage approved|loan approved").expect("Invalid financing regex")
});

/// Follow-up viewing evidence, matched against the lowercased transcript
pub static REPEAT_INTEREST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"second viewing|follow.?up|another look").expect("Invalid follow-up regex")
});

/// Bedroom count: `3BR`, `3 bed`, `3 bedrooms`
pub static BEDROOM_COUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d+)\s*-?\s*(?:br|bhk|bed(?:room)?s?)\b").expect("Invalid bedroom regex")
});

/// Urgency keywords scanned as substrings of the lowercased transcript
///
/// Any number of hits contributes a single capped urgency signal.
pub const URGENCY_KEYWORDS: &[&str] = &[
    "urgent",
    "this week",
    "asap",
    "cash buyer",
    "ready to",
    "immediately",
    "quick",
    "soon",
    "right away",
];

/// Property-type vocabulary for intent extraction, lowercase
pub const PROPERTY_TYPES: &[&str] = &[
    "villa",
    "apartment",
    "townhouse",
    "penthouse",
    "studio",
    "duplex",
    "condo",
];
