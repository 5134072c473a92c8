//! Serenity Algo - lead scoring and listing matching engine
//!
//! This library provides the deterministic core used by the Serenity
//! real-estate assistant: rule-based signal extraction over chat
//! transcripts, weighted lead scoring with hot/warm/cold banding, and
//! tolerance-based listing matching. Everything here is a pure function of
//! its inputs; the HTTP, persistence, and CRM glue lives elsewhere and
//! calls in-process.

pub mod catalog;
pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{
    extract_intent, extract_signals, score_signals, LeadScorer, ListingMatcher, MatchResult,
};
pub use crate::models::{
    LeadPreferences, LeadScore, LeadTag, ListingRecord, MatchIntent, ScoringWeights, Signal,
    TagThresholds, Urgency,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let scorer = LeadScorer::default();
        let result = scorer.score("", &LeadPreferences::default());
        assert_eq!(result.tag, LeadTag::Cold);
    }
}
