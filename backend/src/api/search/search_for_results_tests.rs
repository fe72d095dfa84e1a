//! End-to-end tests of the discovery pass, plus its algebraic properties.

use common::listing::{Listing, PriceRange};
use common::search_query::{FilterSelection, SortBy};
use common::search_result::{FacetId, FacetKind};

use crate::api::search::{search_for_results, search_for_results_hit_count};

fn scenario() -> Vec<Listing> {
    let make = |id: &str, min: f64, max: f64, rating: f64, amenities: &[&str]| Listing {
        price_range: Some(PriceRange::new(min, max)),
        rating: Some(rating),
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        ..Listing::new(id)
    };
    vec![
        make("a", 100.0, 150.0, 4.2, &["wifi", "pool"]),
        make("b", 300.0, 400.0, 4.8, &["wifi", "spa"]),
    ]
}

#[test]
fn test_reference_scenario() {
    let listings = scenario();

    let filtered = search_for_results(
        &listings,
        FilterSelection { price_range: Some((0.0, 200.0)), rating: Some(4.0), ..Default::default() },
    );
    assert_eq!(filtered.result_ids(), vec!["a"]);
    assert_eq!(filtered.total_count, 1);

    let wifi = search_for_results(
        &listings,
        FilterSelection { amenities: vec!["wifi".into()], ..Default::default() },
    );
    assert_eq!(wifi.result_ids(), vec!["a", "b"]);

    let by_price = search_for_results(
        &listings,
        FilterSelection { sort_by: SortBy::PriceHigh, ..Default::default() },
    );
    assert_eq!(by_price.result_ids(), vec!["b", "a"]);
}

#[test]
fn test_facets_describe_the_unfiltered_collection() {
    let listings = scenario();
    let result = search_for_results(
        &listings,
        FilterSelection { amenities: vec!["spa".into()], ..Default::default() },
    );
    assert_eq!(result.result_ids(), vec!["b"]);
    let price = result.facets.iter().find(|f| f.id == FacetId::PriceRange).unwrap();
    assert_eq!(price.kind, FacetKind::Range { min: 100.0, max: 400.0, step: 50.0 });
    let amenities = result.facets.iter().find(|f| f.id == FacetId::Amenities).unwrap();
    assert_eq!(amenities.options[0].display_string, "wifi");
    assert_eq!(amenities.options[0].count, 2);
}

#[test]
fn test_selection_is_normalised_before_use() {
    let listings = scenario();
    let result = search_for_results(
        &listings,
        FilterSelection { price_range: Some((200.0, f64::NAN)), ..Default::default() },
    );
    assert_eq!(result.query.price_range, Some((200.0, f64::MAX)));
    assert_eq!(result.result_ids(), vec!["b"]);
}

#[test]
fn test_empty_collection_yields_empty_results() {
    let result = search_for_results(&[], FilterSelection { query: "anything".into(), ..Default::default() });
    assert!(result.results.is_empty());
    assert_eq!(result.total_count, 0);
    assert_eq!(result.facets.len(), 5);
}

#[test]
fn test_hit_count_agrees_with_results() {
    let listings = scenario();
    let selection = FilterSelection { rating: Some(4.5), ..Default::default() };
    assert_eq!(search_for_results_hit_count(&listings, &selection), 1);
    assert_eq!(search_for_results(&listings, selection).total_count, 1);
}

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    const AMENITIES: [&str; 5] = ["wifi", "pool", "spa", "Pet corner", "kids club"];
    const CITIES: [&str; 3] = ["Nice", "Cannes", "Antibes"];

    fn listing_strategy() -> impl Strategy<Value = Listing> {
        (
            "[a-f]{1,3}",
            0usize..CITIES.len(),
            proptest::option::of((0.0f64..500.0, 0.0f64..500.0)),
            proptest::option::of(0.0f64..=5.0),
            proptest::sample::subsequence(AMENITIES.to_vec(), 0..=AMENITIES.len()),
        )
            .prop_map(|(id, city, price, rating, amenities)| Listing {
                location: CITIES[city].to_string(),
                price_range: price.map(|(a, b)| PriceRange::new(a.min(b), a.max(b))),
                rating,
                amenities: amenities.into_iter().map(str::to_string).collect(),
                ..Listing::new(id)
            })
    }

    fn selection_strategy() -> impl Strategy<Value = FilterSelection> {
        (
            proptest::option::of((0.0f64..500.0, 0.0f64..500.0)),
            proptest::option::of(0.0f64..=5.0),
            proptest::sample::subsequence(AMENITIES.to_vec(), 0..=2),
            any::<bool>(),
            prop_oneof![
                Just(SortBy::Relevance),
                Just(SortBy::PriceLow),
                Just(SortBy::PriceHigh),
                Just(SortBy::Rating),
                Just(SortBy::Newest),
                Just(SortBy::Distance),
            ],
        )
            .prop_map(|(price, rating, amenities, pets, sort_by)| FilterSelection {
                price_range: price,
                rating,
                amenities: amenities.into_iter().map(str::to_string).collect(),
                pet_friendly: pets,
                sort_by,
                ..Default::default()
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_results_are_a_subset(
            listings in proptest::collection::vec(listing_strategy(), 0..30),
            selection in selection_strategy(),
        ) {
            let result = search_for_results(&listings, selection);
            prop_assert!(result.results.len() <= listings.len());
            for found in &result.results {
                prop_assert!(listings.contains(found));
            }
        }

        #[test]
        fn prop_search_is_deterministic(
            listings in proptest::collection::vec(listing_strategy(), 0..30),
            selection in selection_strategy(),
        ) {
            let first = search_for_results(&listings, selection.clone());
            let second = search_for_results(&listings, selection);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_one_more_amenity_never_adds_results(
            listings in proptest::collection::vec(listing_strategy(), 0..30),
            selection in selection_strategy(),
            extra in 0usize..AMENITIES.len(),
        ) {
            let before = search_for_results_hit_count(&listings, &selection);
            let mut narrower = selection.clone();
            narrower.amenities.push(AMENITIES[extra].to_string());
            prop_assert!(search_for_results_hit_count(&listings, &narrower) <= before);
        }

        #[test]
        fn prop_rating_facet_never_grows_with_stars(
            listings in proptest::collection::vec(listing_strategy(), 0..30),
        ) {
            let result = search_for_results(&listings, FilterSelection::default());
            let rating = result.facets.iter().find(|f| f.id == FacetId::Rating).unwrap();
            for pair in rating.options.windows(2) {
                prop_assert!(pair[0].count >= pair[1].count);
            }
        }

        #[test]
        fn prop_relevance_keeps_collection_order(
            listings in proptest::collection::vec(listing_strategy(), 0..30),
        ) {
            let result = search_for_results(&listings, FilterSelection::default());
            prop_assert_eq!(&result.results, &listings);
        }
    }
}
