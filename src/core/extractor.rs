use crate::core::patterns;
use crate::models::{LeadPreferences, MatchIntent, ScoringWeights, Signal, SignalCategory};

/// Extract scoring signals from a chat transcript and structured preferences
///
/// Each category contributes at most one signal, and an explicit preference
/// always wins over a keyword match inferred from the transcript. Signals
/// are emitted in category order: budget, location, urgency, financing,
/// repeat interest.
///
/// An empty transcript simply yields fewer signals; this never fails.
pub fn extract_signals(
    transcript: &str,
    preferences: &LeadPreferences,
    weights: &ScoringWeights,
) -> Vec<Signal> {
    let mut signals = Vec::with_capacity(5);
    let transcript_lower = transcript.to_lowercase();

    // Budget clarity
    if let Some(budget) = preferences.budget {
        signals.push(Signal {
            category: SignalCategory::Budget,
            label: "budget_explicit".to_string(),
            points: weights.budget_explicit,
            reason: format!("Clear budget specified: {}", budget),
        });
    } else if patterns::BUDGET_MENTION.is_match(transcript) {
        signals.push(Signal {
            category: SignalCategory::Budget,
            label: "budget_inferred".to_string(),
            points: weights.budget_inferred,
            reason: "Budget mentioned in conversation".to_string(),
        });
    }

    // Location specificity
    let explicit_location = preferences
        .location
        .as_deref()
        .filter(|location| !location.trim().is_empty());
    if let Some(location) = explicit_location {
        signals.push(Signal {
            category: SignalCategory::Location,
            label: "location_explicit".to_string(),
            points: weights.location_explicit,
            reason: format!("Specific location interest: {}", location),
        });
    } else if patterns::LOCATION_MENTION.is_match(transcript) {
        signals.push(Signal {
            category: SignalCategory::Location,
            label: "location_inferred".to_string(),
            points: weights.location_inferred,
            reason: "Location mentioned in conversation".to_string(),
        });
    }

    // Urgency: a single capped signal regardless of keyword hit count
    let explicit_urgency = preferences
        .urgency
        .map_or(false, |urgency| urgency.is_high_priority());
    if explicit_urgency {
        signals.push(Signal {
            category: SignalCategory::Urgency,
            label: "urgency_explicit".to_string(),
            points: weights.urgency_explicit,
            reason: "High urgency indicated in preferences".to_string(),
        });
    } else if patterns::URGENCY_KEYWORDS
        .iter()
        .any(|keyword| transcript_lower.contains(keyword))
    {
        signals.push(Signal {
            category: SignalCategory::Urgency,
            label: "urgency_inferred".to_string(),
            points: weights.urgency_inferred,
            reason: "Urgency signals detected in conversation".to_string(),
        });
    }

    // Financing readiness
    if patterns::FINANCING.is_match(&transcript_lower) {
        signals.push(Signal {
            category: SignalCategory::Financing,
            label: "financing_preapproved".to_string(),
            points: weights.financing,
            reason: "Pre-approved for financing".to_string(),
        });
    }

    // Repeat viewing interest
    if patterns::REPEAT_INTEREST.is_match(&transcript_lower) {
        signals.push(Signal {
            category: SignalCategory::RepeatInterest,
            label: "repeat_interest".to_string(),
            points: weights.repeat_interest,
            reason: "Requesting follow-up viewings".to_string(),
        });
    }

    tracing::debug!(
        "Extracted {} signals from {}-char transcript",
        signals.len(),
        transcript.len()
    );

    signals
}

/// Derive structured search criteria from a transcript
///
/// The deterministic slice of buyer-query understanding: budget amounts with
/// `k`/`m`/`million` multipliers, a capitalized location after a preposition,
/// a bedroom count, and a property-type keyword. Absent evidence leaves the
/// field unset, never an error.
pub fn extract_intent(transcript: &str) -> MatchIntent {
    let transcript_lower = transcript.to_lowercase();

    let budget = parse_budget_amount(transcript);

    let location = patterns::LOCATION_MENTION
        .captures(transcript)
        .and_then(|caps| caps.get(1))
        .map(|found| found.as_str().trim().to_string());

    let bedrooms = patterns::BEDROOM_COUNT
        .captures(transcript)
        .and_then(|caps| caps.get(1))
        .and_then(|found| found.as_str().parse::<u32>().ok());

    let property_type = patterns::PROPERTY_TYPES
        .iter()
        .find(|candidate| transcript_lower.contains(**candidate))
        .map(|candidate| (*candidate).to_string());

    MatchIntent {
        budget,
        location,
        bedrooms,
        property_type,
    }
}

/// Parse the first amount carrying a currency symbol or magnitude suffix
///
/// Bare numbers ("3 viewings") are skipped; only `$`-prefixed or
/// `k`/`m`/`million`-suffixed amounts read as budgets.
fn parse_budget_amount(transcript: &str) -> Option<f64> {
    for caps in patterns::BUDGET_AMOUNT.captures_iter(transcript) {
        let has_symbol = caps
            .get(0)
            .map_or(false, |whole| whole.as_str().starts_with('$'));
        let suffix = caps.get(2).map(|found| found.as_str().to_lowercase());
        if !has_symbol && suffix.is_none() {
            continue;
        }

        let digits = caps[1].replace(',', "");
        let value: f64 = match digits.parse() {
            Ok(value) => value,
            Err(_) => continue,
        };

        let multiplier = match suffix.as_deref() {
            Some("million") | Some("m") => 1_000_000.0,
            Some("k") => 1_000.0,
            _ => 1.0,
        };
        return Some(value * multiplier);
    }
    None
}
