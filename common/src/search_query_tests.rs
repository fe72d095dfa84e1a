//! Tests for filter selection parsing and normalisation.

use crate::listing::Feature;
use crate::search_query::{FilterSelection, SortBy, UNBOUNDED_PRICE};

fn pairs(raw: &[(&str, &str)]) -> FilterSelection {
    FilterSelection::from_query_pairs(raw.iter().copied())
}

#[test]
fn test_empty_pairs_give_the_default_selection() {
    let selection = pairs(&[]);
    assert_eq!(selection, FilterSelection::default());
    assert_eq!(selection.active_filter_count(), 0);
    assert_eq!(selection.sort_by, SortBy::Relevance);
}

#[test]
fn test_lists_accept_commas_and_repeats() {
    let selection = pairs(&[
        ("amenities", "wifi, pool"),
        ("amenities", "spa"),
        ("propertyTypes", "Villa,,"),
    ]);
    assert_eq!(selection.amenities, vec!["wifi", "pool", "spa"]);
    assert_eq!(selection.property_types, vec!["Villa"]);
}

#[test]
fn test_malformed_price_bounds_fall_back() {
    let selection = pairs(&[("priceMin", "abc"), ("priceMax", "300")]);
    assert_eq!(selection.price_range, Some((0.0, 300.0)));

    let selection = pairs(&[("priceMin", "120"), ("priceMax", "NaN")]);
    assert_eq!(selection.price_range, Some((120.0, UNBOUNDED_PRICE)));

    let selection = pairs(&[("priceRange", "inf,50")]);
    assert_eq!(selection.price_range, Some((0.0, 50.0)));
}

#[test]
fn test_reversed_price_range_is_swapped() {
    let selection = pairs(&[("priceRange", "400,100")]);
    assert_eq!(selection.price_range, Some((100.0, 400.0)));
}

#[test]
fn test_no_price_keys_means_no_price_filter() {
    let selection = pairs(&[("query", "beach")]);
    assert_eq!(selection.price_range, None);
    assert_eq!(selection.query, "beach");
}

#[test]
fn test_rating_is_kept_as_sent_and_garbage_dropped() {
    assert_eq!(pairs(&[("rating", "5.5")]).rating, Some(5.5));
    assert_eq!(pairs(&[("rating", "-2")]).rating, Some(-2.0));
    assert_eq!(pairs(&[("rating", "NaN")]).rating, None);
    assert_eq!(pairs(&[("rating", "four")]).rating, None);
}

#[test]
fn test_toggles_and_sort_key() {
    let selection = pairs(&[
        ("petFriendly", "true"),
        ("familyFriendly", "1"),
        ("businessFriendly", "off"),
        ("sortBy", "price-high"),
    ]);
    assert_eq!(selection.selected_features(), vec![Feature::PetFriendly, Feature::FamilyFriendly]);
    assert_eq!(selection.sort_by, SortBy::PriceHigh);
    assert_eq!(selection.active_filter_count(), 2);
}

#[test]
fn test_unknown_sort_key_falls_back_to_relevance() {
    assert_eq!(pairs(&[("sortBy", "cheapest")]).sort_by, SortBy::Relevance);
    assert!("cheapest".parse::<SortBy>().is_err());
}

#[test]
fn test_capacity_and_dates_are_kept() {
    let selection = pairs(&[
        ("capacity", "4"),
        ("checkIn", "2026-07-01"),
        ("checkOut", " "),
    ]);
    assert_eq!(selection.capacity, Some(4));
    assert_eq!(selection.check_in.as_deref(), Some("2026-07-01"));
    assert_eq!(selection.check_out, None);
    assert_eq!(selection.active_filter_count(), 0);

    assert_eq!(pairs(&[("capacity", "lots")]).capacity, None);
}

#[test]
fn test_json_wire_shape() {
    let selection: FilterSelection = serde_json::from_str(
        r#"{
            "query": "  lagoon ",
            "propertyTypes": ["Resort"],
            "priceRange": [0, 200],
            "rating": 4,
            "petFriendly": true,
            "sortBy": "newest"
        }"#,
    )
    .unwrap();
    let selection = selection.normalized();
    assert_eq!(selection.query, "lagoon");
    assert_eq!(selection.price_range, Some((0.0, 200.0)));
    assert_eq!(selection.rating, Some(4.0));
    assert!(selection.pet_friendly);
    assert_eq!(selection.sort_by, SortBy::Newest);

    let json = serde_json::to_value(&selection).unwrap();
    assert_eq!(json["sortBy"], "newest");
    assert_eq!(json["petFriendly"], true);
}

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Whatever the client sends, no NaN or reversed range survives.
        #[test]
        fn prop_price_range_is_always_sane(min in ".{0,8}", max in ".{0,8}") {
            let selection = pairs(&[("priceMin", min.as_str()), ("priceMax", max.as_str())]);
            let (lo, hi) = selection.price_range.unwrap();
            prop_assert!(lo.is_finite() && hi.is_finite());
            prop_assert!(lo >= 0.0);
            prop_assert!(lo <= hi);
        }

        #[test]
        fn prop_rating_is_always_finite(raw in any::<f64>()) {
            let selection = pairs(&[("rating", raw.to_string().as_str())]);
            if let Some(rating) = selection.rating {
                prop_assert!(rating.is_finite());
            }
        }
    }
}
