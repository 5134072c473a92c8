use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{LeadPreferences, MatchIntent};

/// Request to score a lead from a transcript and structured preferences
///
/// The transcript cap is enforced here, at the boundary; the core itself
/// accepts any length.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreLeadRequest {
    #[validate(length(max = 32768))]
    #[serde(alias = "chatHistory")]
    pub chat_history: String,
    #[serde(default)]
    pub preferences: LeadPreferences,
}

/// Request to match catalog listings against a search intent
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchListingsRequest {
    pub intent: MatchIntent,
    #[validate(range(min = 1, max = 50))]
    #[serde(default = "default_limit")]
    pub limit: u16,
}

fn default_limit() -> u16 {
    3
}
