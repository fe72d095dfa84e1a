//! Facet generation over a listing collection.

use std::collections::{BTreeMap, BTreeSet};

use common::{
    listing::Listing,
    search_const::{AMENITY_FACET_LIMIT, PRICE_FACET_STEP, RATING_FACET_THRESHOLDS},
    search_result::{Facet, FacetId, FacetKind, FacetOption, FacetOriginalValue},
};

/// Facets for the whole collection, in display order.
///
/// Counts describe `listings` as given, so callers pass the unfiltered
/// collection; they must regenerate facets whenever it changes.
pub fn search_facets(listings: &[Listing]) -> Vec<Facet> {
    vec![
        location_facet(listings),
        category_facet(listings),
        price_facet(listings),
        amenity_facet(listings),
        rating_facet(listings),
    ]
}

fn location_facet(listings: &[Listing]) -> Facet {
    let options = count_string_options(listings.iter().map(|l| vec![l.location.as_str()]));
    Facet::new(FacetId::Location, FacetKind::Location, options)
}

fn category_facet(listings: &[Listing]) -> Facet {
    let options = count_string_options(
        listings.iter().map(|l| l.categories.iter().map(String::as_str).collect()),
    );
    Facet::new(FacetId::PropertyTypes, FacetKind::Checkbox, options)
}

fn amenity_facet(listings: &[Listing]) -> Facet {
    let mut options = count_string_options(
        listings.iter().map(|l| l.amenities.iter().map(String::as_str).collect()),
    );
    options.truncate(AMENITY_FACET_LIMIT);
    Facet::new(FacetId::Amenities, FacetKind::Checkbox, options)
}

fn price_facet(listings: &[Listing]) -> Facet {
    let ranges = listings.iter().filter_map(|l| l.known_price_range()).collect::<Vec<_>>();
    let kind = if ranges.is_empty() {
        // nothing priced
        FacetKind::Range { min: 0.0, max: 0.0, step: PRICE_FACET_STEP }
    } else {
        let min = ranges.iter().map(|r| r.min).fold(f64::INFINITY, f64::min);
        let max = ranges.iter().map(|r| r.max).fold(f64::NEG_INFINITY, f64::max);
        FacetKind::Range { min, max, step: PRICE_FACET_STEP }
    };
    Facet::new(FacetId::PriceRange, kind, Vec::new())
}

fn rating_facet(listings: &[Listing]) -> Facet {
    let options = RATING_FACET_THRESHOLDS
        .iter()
        .map(|&stars| FacetOption {
            display_string: format!("{stars}+ stars"),
            original_value: FacetOriginalValue::Int(stars),
            count: listings.iter().filter(|l| l.rating_or_zero() >= stars as f64).count() as u64,
        })
        .collect();
    Facet::new(FacetId::Rating, FacetKind::Select, options)
}

/// One option per distinct non-empty value; a listing counts once per value
/// however often it repeats it. Sorted by descending count, then by label.
fn count_string_options<'a>(values_per_listing: impl Iterator<Item = Vec<&'a str>>) -> Vec<FacetOption> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for values in values_per_listing {
        let distinct = values.into_iter().filter(|v| !v.trim().is_empty()).collect::<BTreeSet<_>>();
        for value in distinct {
            *counts.entry(value).or_default() += 1;
        }
    }

    let mut options = counts
        .into_iter()
        .map(|(value, count)| FacetOption {
            display_string: value.to_string(),
            original_value: FacetOriginalValue::String(value.to_string()),
            count,
        })
        .collect::<Vec<_>>();
    options.sort_by_key(|item| (u64::MAX - item.count, item.display_string.clone()));
    options
}
