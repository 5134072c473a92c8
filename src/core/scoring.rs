use crate::core::extractor::extract_signals;
use crate::models::{LeadPreferences, LeadScore, LeadTag, ScoringWeights, Signal, TagThresholds};

/// Lower bound of the scoring scale
pub const SCORE_MIN: f64 = 0.0;
/// Upper bound of the scoring scale
pub const SCORE_MAX: f64 = 1.0;

/// Aggregate signals into a clamped score, reason list, and tag
///
/// Each category contributes at most once (the first signal per category
/// wins, so a caller-assembled set cannot double-count), the sum is clamped
/// to [0.0, 1.0], and reasons are reported in category evaluation order
/// regardless of input order. Accepts any well-formed signal set; never
/// fails.
pub fn score_signals(signals: &[Signal], thresholds: &TagThresholds) -> LeadScore {
    let mut contributing: Vec<&Signal> = Vec::with_capacity(signals.len());
    for signal in signals {
        if !contributing.iter().any(|seen| seen.category == signal.category) {
            contributing.push(signal);
        }
    }
    contributing.sort_by_key(|signal| signal.category);

    let raw_sum: f64 = contributing.iter().map(|signal| signal.points).sum();
    let score = raw_sum.clamp(SCORE_MIN, SCORE_MAX);
    let reasons = contributing
        .iter()
        .map(|signal| signal.reason.clone())
        .collect();

    LeadScore {
        score,
        tag: tag_for_score(score, thresholds),
        reasons,
    }
}

/// Map a score to its priority band, evaluated high-to-low
#[inline]
pub fn tag_for_score(score: f64, thresholds: &TagThresholds) -> LeadTag {
    if score > thresholds.hot {
        LeadTag::Hot
    } else if score > thresholds.warm {
        LeadTag::Warm
    } else {
        LeadTag::Cold
    }
}

/// Lead scoring orchestrator
///
/// Holds the configured weight table and threshold bands and runs the
/// extract-then-aggregate pipeline over a transcript + preferences pair.
#[derive(Debug, Clone)]
pub struct LeadScorer {
    weights: ScoringWeights,
    thresholds: TagThresholds,
}

impl LeadScorer {
    pub fn new(weights: ScoringWeights, thresholds: TagThresholds) -> Self {
        Self {
            weights,
            thresholds,
        }
    }

    pub fn with_default_config() -> Self {
        Self {
            weights: ScoringWeights::default(),
            thresholds: TagThresholds::default(),
        }
    }

    /// Score a lead from a chat transcript and structured preferences
    pub fn score(&self, transcript: &str, preferences: &LeadPreferences) -> LeadScore {
        let signals = extract_signals(transcript, preferences, &self.weights);
        let result = score_signals(&signals, &self.thresholds);

        tracing::info!(
            "Lead scored: {:.2} ({:?}) from {} signals",
            result.score,
            result.tag,
            signals.len()
        );

        result
    }
}

impl Default for LeadScorer {
    fn default() -> Self {
        Self::with_default_config()
    }
}
