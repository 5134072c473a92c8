use serde::{Deserialize, Serialize};

use crate::models::domain::{LeadScore, LeadTag, ListingRecord};

/// Response for the score-lead operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreLeadResponse {
    pub score: f64,
    pub tag: LeadTag,
    pub reasons: Vec<String>,
}

impl From<LeadScore> for ScoreLeadResponse {
    fn from(score: LeadScore) -> Self {
        Self {
            score: score.score,
            tag: score.tag,
            reasons: score.reasons,
        }
    }
}

/// Response for the match-listings operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchListingsResponse {
    pub listings: Vec<ListingRecord>,
    pub total_candidates: usize,
}
