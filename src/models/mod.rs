// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    LeadPreferences, LeadScore, LeadTag, ListingRecord, MatchIntent, ScoringWeights, Signal,
    SignalCategory, TagThresholds, Urgency,
};
pub use requests::{MatchListingsRequest, ScoreLeadRequest};
pub use responses::{MatchListingsResponse, ScoreLeadResponse};
