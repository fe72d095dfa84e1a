//! Predicate evaluation for the active filter selection.
//!
//! A selection is compiled once into a list of [`Predicate`]s; a listing is
//! kept only if every predicate accepts it.

use common::{
    listing::{Feature, Listing, PriceRange},
    search_const::CATEGORY_TAG_SEPARATOR,
    search_query::FilterSelection,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Lowercased; matched against name or description.
    Query(String),
    /// Lowercased; matched against the location label.
    City(String),
    /// Lowercased; any one of them inside the joined category tags.
    PropertyTypes(Vec<String>),
    Price(PriceRange),
    MinRating(f64),
    /// Every tag must be present, compared exactly.
    Amenities(Vec<String>),
    Feature(Feature),
    /// Accepted but never excludes a listing.
    Capacity(u32),
}

impl Predicate {
    pub fn matches(&self, listing: &Listing) -> bool {
        match self {
            Predicate::Query(needle) => {
                listing.name.to_lowercase().contains(needle.as_str())
                    || listing.description.to_lowercase().contains(needle.as_str())
            }
            Predicate::City(city) => listing.location.to_lowercase().contains(city.as_str()),
            Predicate::PropertyTypes(selected) => {
                let tags = listing.categories.join(CATEGORY_TAG_SEPARATOR).to_lowercase();
                selected.iter().any(|s| tags.contains(s.as_str()))
            }
            Predicate::Price(range) => listing
                .known_price_range()
                .is_some_and(|own| own.overlaps(range)),
            Predicate::MinRating(min) => listing.rating_or_zero() >= *min,
            Predicate::Amenities(required) => required.iter().all(|a| listing.has_amenity(a)),
            Predicate::Feature(feature) => listing.has_feature(*feature),
            Predicate::Capacity(_) => true,
        }
    }
}

pub fn build_predicates(selection: &FilterSelection) -> Vec<Predicate> {
    let mut predicates = Vec::new();

    let query = selection.query.trim().to_lowercase();
    if !query.is_empty() {
        predicates.push(Predicate::Query(query));
    }

    let city = selection.city.trim().to_lowercase();
    if !city.is_empty() {
        predicates.push(Predicate::City(city));
    }

    let property_types = selection
        .property_types
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>();
    if !property_types.is_empty() {
        predicates.push(Predicate::PropertyTypes(property_types));
    }

    if let Some(range) = selection.selected_price_range() {
        if range.min.is_finite() && range.max.is_finite() {
            predicates.push(Predicate::Price(range));
        }
    }

    if let Some(rating) = selection.rating {
        // zero or less admits everything
        if rating.is_finite() && rating > 0.0 {
            predicates.push(Predicate::MinRating(rating));
        }
    }

    if !selection.amenities.is_empty() {
        predicates.push(Predicate::Amenities(selection.amenities.clone()));
    }

    for feature in selection.selected_features() {
        predicates.push(Predicate::Feature(feature));
    }

    if let Some(capacity) = selection.capacity {
        predicates.push(Predicate::Capacity(capacity));
    }

    predicates
}

pub fn listing_matches(predicates: &[Predicate], listing: &Listing) -> bool {
    predicates.iter().all(|p| p.matches(listing))
}

/// Keeps the input order; ordering is the sorter's job.
pub fn filter_listings<'a>(listings: &'a [Listing], selection: &FilterSelection) -> Vec<&'a Listing> {
    let predicates = build_predicates(selection);
    listings.iter().filter(|l| listing_matches(&predicates, l)).collect()
}
