use serde::{Deserialize, Serialize};

/// Structured buyer preferences supplied alongside a chat transcript
///
/// Every field is independently optional; an explicit preference always
/// takes precedence over the same category inferred from the transcript.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadPreferences {
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub urgency: Option<Urgency>,
}

/// How soon the lead intends to transact
///
/// Aliases absorb the raw strings older clients still send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    #[serde(alias = "high", alias = "urgent")]
    Immediate,
    #[serde(alias = "medium", alias = "3_months", alias = "6_months")]
    Soon,
    #[serde(alias = "low")]
    Exploring,
}

impl Urgency {
    /// Only an immediate timeline counts as the explicit urgency signal
    pub fn is_high_priority(&self) -> bool {
        matches!(self, Urgency::Immediate)
    }
}

/// Evidence category a signal belongs to
///
/// Declaration order is the fixed evaluation order; each category
/// contributes at most one signal to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalCategory {
    Budget,
    Location,
    Urgency,
    Financing,
    RepeatInterest,
}

/// A single unit of scoring evidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub category: SignalCategory,
    pub label: String,
    pub points: f64,
    pub reason: String,
}

/// Priority bucket derived from a numeric score
///
/// Ordered coldest to hottest so a higher score never compares as a colder
/// tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadTag {
    Cold,
    Warm,
    Hot,
}

/// Scoring outcome for a single lead
///
/// Computed fresh on every request; the CRM glue owns persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadScore {
    pub score: f64,
    pub tag: LeadTag,
    pub reasons: Vec<String>,
}

/// A catalog property listing
///
/// Matches the shape of the agency listings feed. The matcher reads only
/// price, location, bedrooms, and type; a listing missing an optional field
/// is non-matching for that dimension while a constraint on it is active.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub price: f64,
    pub location: String,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<u32>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(rename = "type", default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "media")]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Structured search criteria describing what a lead is looking for
///
/// Derived from a transcript by the intent extractor or supplied directly.
/// An absent field imposes no restriction on the matcher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchIntent {
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(rename = "type", default, alias = "property_type")]
    pub property_type: Option<String>,
}

/// Per-signal weight table on the 0.0-1.0 scale
///
/// Explicit preferences outweigh their inferred counterparts. With the
/// default table the maximum attainable sum across categories is exactly
/// 1.0.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub budget_explicit: f64,
    pub budget_inferred: f64,
    pub location_explicit: f64,
    pub location_inferred: f64,
    pub urgency_explicit: f64,
    pub urgency_inferred: f64,
    pub financing: f64,
    pub repeat_interest: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            budget_explicit: 0.30,
            budget_inferred: 0.25,
            location_explicit: 0.30,
            location_inferred: 0.25,
            urgency_explicit: 0.20,
            urgency_inferred: 0.15,
            financing: 0.10,
            repeat_interest: 0.10,
        }
    }
}

impl ScoringWeights {
    /// Maximum attainable sum across categories (one signal each)
    pub fn max_total(&self) -> f64 {
        self.budget_explicit.max(self.budget_inferred)
            + self.location_explicit.max(self.location_inferred)
            + self.urgency_explicit.max(self.urgency_inferred)
            + self.financing
            + self.repeat_interest
    }
}

/// Score bands separating the hot/warm/cold tags, strictly-greater semantics
#[derive(Debug, Clone, Copy)]
pub struct TagThresholds {
    pub hot: f64,
    pub warm: f64,
}

impl Default for TagThresholds {
    fn default() -> Self {
        Self { hot: 0.60, warm: 0.35 }
    }
}
