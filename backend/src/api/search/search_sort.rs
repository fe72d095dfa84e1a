//! Result ordering.

use std::cmp::Ordering;

use common::{listing::Listing, search_query::SortBy};

/// Orders `listings` in place. `slice::sort_by` is stable, so ties keep their
/// filtered order; `relevance` and `distance` leave the order untouched.
pub fn sort_listings(listings: &mut [&Listing], sort_by: SortBy) {
    match sort_by {
        SortBy::PriceLow => listings.sort_by(|a, b| {
            missing_last(min_price(a), min_price(b), compare_keys)
        }),
        SortBy::PriceHigh => listings.sort_by(|a, b| {
            missing_last(max_price(a), max_price(b), |a, b| compare_keys(b, a))
        }),
        SortBy::Rating => listings.sort_by(|a, b| compare_keys(b.rating_or_zero(), a.rating_or_zero())),
        // identifiers stand in for creation order
        SortBy::Newest => listings.sort_by(|a, b| b.id.cmp(&a.id)),
        // distance needs the visitor's position, which the engine never has
        SortBy::Distance | SortBy::Relevance => {}
    }
}

/// Keys are finite here; `-0.0` and `0.0` compare equal so they keep their order.
fn compare_keys(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn min_price(listing: &Listing) -> Option<f64> {
    listing.known_price_range().map(|p| p.min)
}

fn max_price(listing: &Listing) -> Option<f64> {
    listing.known_price_range().map(|p| p.max)
}

fn missing_last(a: Option<f64>, b: Option<f64>, compare: impl Fn(f64, f64) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
