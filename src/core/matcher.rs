use crate::models::{ListingRecord, MatchIntent};

/// Default number of listings surfaced to the chat layer
pub const DEFAULT_MATCH_LIMIT: usize = 3;

/// Default ± price tolerance around the budget (10%)
pub const DEFAULT_PRICE_TOLERANCE: f64 = 0.10;

/// Result of the listing matching process
#[derive(Debug)]
pub struct MatchResult {
    pub listings: Vec<ListingRecord>,
    pub total_candidates: usize,
}

/// Listing matching orchestrator - applies the intent filters as a conjunction
///
/// # Filters
/// 1. Price within the ± tolerance band around the budget
/// 2. Case-insensitive location substring
/// 3. Case-insensitive property-type substring
/// 4. Exact bedroom count
///
/// Catalog order is preserved and the scan stops once `limit` listings pass;
/// this is first-match-wins truncation, not a score-sorted top-K.
#[derive(Debug, Clone)]
pub struct ListingMatcher {
    tolerance: f64,
}

impl ListingMatcher {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn with_default_tolerance() -> Self {
        Self {
            tolerance: DEFAULT_PRICE_TOLERANCE,
        }
    }

    /// Match catalog listings against a structured intent
    ///
    /// An absent (or blank) intent field imposes no restriction. An empty
    /// catalog or zero passing listings yields an empty result, not an
    /// error.
    pub fn match_listings(
        &self,
        intent: &MatchIntent,
        catalog: &[ListingRecord],
        limit: usize,
    ) -> MatchResult {
        let total_candidates = catalog.len();

        let listings: Vec<ListingRecord> = catalog
            .iter()
            .filter(|listing| self.matches_intent(intent, listing))
            .take(limit)
            .cloned()
            .collect();

        tracing::debug!(
            "Matched {}/{} listings (limit {})",
            listings.len(),
            total_candidates,
            limit
        );

        MatchResult {
            listings,
            total_candidates,
        }
    }

    /// Check a single listing against every active constraint
    fn matches_intent(&self, intent: &MatchIntent, listing: &ListingRecord) -> bool {
        if let Some(budget) = intent.budget {
            if !price_within_band(listing.price, budget, self.tolerance) {
                return false;
            }
        }

        let wanted_location = intent
            .location
            .as_deref()
            .filter(|location| !location.trim().is_empty());
        if let Some(location) = wanted_location {
            if !location_matches(&listing.location, location) {
                return false;
            }
        }

        let wanted_type = intent
            .property_type
            .as_deref()
            .filter(|property_type| !property_type.trim().is_empty());
        if let Some(wanted) = wanted_type {
            match listing.property_type.as_deref() {
                Some(have) => {
                    if !have.to_lowercase().contains(&wanted.to_lowercase()) {
                        return false;
                    }
                }
                // Constraint active but the listing has no type on record
                None => return false,
            }
        }

        if let Some(bedrooms) = intent.bedrooms {
            if listing.bedrooms != Some(bedrooms) {
                return false;
            }
        }

        true
    }
}

impl Default for ListingMatcher {
    fn default() -> Self {
        Self::with_default_tolerance()
    }
}

/// Check if a listing price falls within the ± tolerance band around a target
///
/// This is a deliberate two-sided band, not a ceiling: a listing well under
/// budget is excluded just like one well over. Bounds are inclusive. A
/// negative target inverts the band and matches nothing.
#[inline]
pub fn price_within_band(listing_price: f64, target_price: f64, tolerance: f64) -> bool {
    let lower_bound = target_price * (1.0 - tolerance);
    let upper_bound = target_price * (1.0 + tolerance);
    lower_bound <= listing_price && listing_price <= upper_bound
}

/// Case-insensitive partial location match
#[inline]
pub fn location_matches(listing_location: &str, target_location: &str) -> bool {
    listing_location
        .to_lowercase()
        .contains(&target_location.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_listing(title: &str, price: f64, location: &str, bedrooms: u32, property_type: &str) -> ListingRecord {
        ListingRecord {
            id: None,
            title: title.to_string(),
            price,
            location: location.to_string(),
            bedrooms: Some(bedrooms),
            bathrooms: None,
            area: None,
            property_type: Some(property_type.to_string()),
            description: None,
            images: vec![],
            features: vec![],
        }
    }

    fn create_catalog() -> Vec<ListingRecord> {
        vec![
            create_listing("Marina Villa", 900_000.0, "Dubai Marina", 4, "Villa"),
            create_listing("Marina Apartment", 1_000_000.0, "Dubai Marina", 2, "Apartment"),
            create_listing("Downtown Apartment", 1_100_000.0, "Downtown Dubai", 2, "Apartment"),
        ]
    }

    #[test]
    fn test_tolerance_band_admits_all_three_prices() {
        let matcher = ListingMatcher::with_default_tolerance();
        let intent = MatchIntent {
            budget: Some(1_000_000.0),
            ..MatchIntent::default()
        };

        let result = matcher.match_listings(&intent, &create_catalog(), 10);
        assert_eq!(result.listings.len(), 3);
        assert_eq!(result.total_candidates, 3);
    }

    #[test]
    fn test_tolerance_boundary_inclusive_then_exclusive() {
        let at_edge = create_listing("Edge", 1_100_000.0, "Dubai Marina", 2, "Apartment");
        let over_edge = create_listing("Over", 1_100_000.01, "Dubai Marina", 2, "Apartment");
        let matcher = ListingMatcher::with_default_tolerance();
        let intent = MatchIntent {
            budget: Some(1_000_000.0),
            ..MatchIntent::default()
        };

        let result = matcher.match_listings(&intent, &[at_edge, over_edge], 10);
        assert_eq!(result.listings.len(), 1);
        assert_eq!(result.listings[0].title, "Edge");
    }

    #[test]
    fn test_band_is_not_a_ceiling() {
        // Well under budget is excluded just like well over
        assert!(!price_within_band(500_000.0, 1_000_000.0, 0.10));
        assert!(!price_within_band(1_500_000.0, 1_000_000.0, 0.10));
        assert!(price_within_band(950_000.0, 1_000_000.0, 0.10));
    }

    #[test]
    fn test_negative_budget_matches_nothing() {
        let matcher = ListingMatcher::with_default_tolerance();
        let intent = MatchIntent {
            budget: Some(-500_000.0),
            ..MatchIntent::default()
        };

        let result = matcher.match_listings(&intent, &create_catalog(), 10);
        assert!(result.listings.is_empty());
    }

    #[test]
    fn test_location_substring_case_insensitive() {
        let matcher = ListingMatcher::with_default_tolerance();
        let intent = MatchIntent {
            location: Some("marina".to_string()),
            ..MatchIntent::default()
        };

        let result = matcher.match_listings(&intent, &create_catalog(), 10);
        assert_eq!(result.listings.len(), 2);
    }

    #[test]
    fn test_bedrooms_exact_match_not_at_least() {
        let matcher = ListingMatcher::with_default_tolerance();
        let intent = MatchIntent {
            bedrooms: Some(3),
            ..MatchIntent::default()
        };

        // Catalog has 4- and 2-bedroom listings; a 4-bedroom listing does
        // not satisfy bedrooms=3
        let result = matcher.match_listings(&intent, &create_catalog(), 10);
        assert!(result.listings.is_empty());
    }

    #[test]
    fn test_missing_bedrooms_field_fails_active_constraint() {
        let mut listing = create_listing("No beds on record", 1_000_000.0, "Dubai Marina", 2, "Apartment");
        listing.bedrooms = None;
        let matcher = ListingMatcher::with_default_tolerance();
        let intent = MatchIntent {
            bedrooms: Some(2),
            ..MatchIntent::default()
        };

        let result = matcher.match_listings(&intent, &[listing], 10);
        assert!(result.listings.is_empty());
    }

    #[test]
    fn test_first_match_wins_preserves_catalog_order() {
        let matcher = ListingMatcher::with_default_tolerance();
        let intent = MatchIntent {
            property_type: Some("apartment".to_string()),
            ..MatchIntent::default()
        };

        let result = matcher.match_listings(&intent, &create_catalog(), 1);
        assert_eq!(result.listings.len(), 1);
        // The earlier apartment in catalog order wins, not the "best" one
        assert_eq!(result.listings[0].title, "Marina Apartment");
    }

    #[test]
    fn test_respects_limit() {
        let matcher = ListingMatcher::with_default_tolerance();
        let intent = MatchIntent::default();

        let result = matcher.match_listings(&intent, &create_catalog(), 2);
        assert_eq!(result.listings.len(), 2);

        let zero = matcher.match_listings(&intent, &create_catalog(), 0);
        assert!(zero.listings.is_empty());
    }

    #[test]
    fn test_empty_catalog_is_empty_result() {
        let matcher = ListingMatcher::with_default_tolerance();
        let result = matcher.match_listings(&MatchIntent::default(), &[], 10);

        assert!(result.listings.is_empty());
        assert_eq!(result.total_candidates, 0);
    }

    #[test]
    fn test_blank_constraint_imposes_no_restriction() {
        let matcher = ListingMatcher::with_default_tolerance();
        let intent = MatchIntent {
            location: Some("   ".to_string()),
            property_type: Some(String::new()),
            ..MatchIntent::default()
        };

        let result = matcher.match_listings(&intent, &create_catalog(), 10);
        assert_eq!(result.listings.len(), 3);
    }
}
