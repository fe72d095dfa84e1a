//! Shared filter selection models and helpers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::listing::{Feature, PriceRange};

/// Upper price bound used when a client sends only a lower bound.
pub const UNBOUNDED_PRICE: f64 = f64::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    #[default]
    Relevance,
    PriceLow,
    PriceHigh,
    Rating,
    Distance,
    Newest,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Relevance => "relevance",
            SortBy::PriceLow => "price-low",
            SortBy::PriceHigh => "price-high",
            SortBy::Rating => "rating",
            SortBy::Distance => "distance",
            SortBy::Newest => "newest",
        }
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "relevance" => Ok(SortBy::Relevance),
            "price-low" => Ok(SortBy::PriceLow),
            "price-high" => Ok(SortBy::PriceHigh),
            "rating" => Ok(SortBy::Rating),
            "distance" => Ok(SortBy::Distance),
            "newest" => Ok(SortBy::Newest),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// The live set of user choices on a discovery page.
///
/// Every field is optional on the wire; empty strings, empty lists, `false`
/// toggles and absent numbers impose no constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSelection {
    pub query: String,
    pub city: String,
    pub property_types: Vec<String>,
    pub price_range: Option<(f64, f64)>,
    pub rating: Option<f64>,
    pub amenities: Vec<String>,
    pub accessibility: bool,
    pub pet_friendly: bool,
    pub business_friendly: bool,
    pub family_friendly: bool,
    pub capacity: Option<u32>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub sort_by: SortBy,
}

impl FilterSelection {
    /// Builds a selection from URL query pairs, coercing malformed numbers to
    /// defaults instead of rejecting the request.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut selection = FilterSelection::default();
        let mut price_min: Option<Option<f64>> = None;
        let mut price_max: Option<Option<f64>> = None;

        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "query" | "q" => selection.query = value.trim().to_string(),
                "city" => selection.city = value.trim().to_string(),
                "propertyTypes" | "propertyType" => selection.property_types.extend(split_list(value)),
                "amenities" | "amenity" => selection.amenities.extend(split_list(value)),
                "priceMin" => price_min = Some(coerce_number(value)),
                "priceMax" => price_max = Some(coerce_number(value)),
                "priceRange" => {
                    let mut bounds = value.splitn(2, ',');
                    price_min = Some(bounds.next().and_then(coerce_number));
                    price_max = Some(bounds.next().and_then(coerce_number));
                }
                "rating" => selection.rating = coerce_number(value),
                "capacity" => selection.capacity = value.trim().parse().ok(),
                "accessibility" => selection.accessibility = coerce_toggle(value),
                "petFriendly" => selection.pet_friendly = coerce_toggle(value),
                "businessFriendly" => selection.business_friendly = coerce_toggle(value),
                "familyFriendly" => selection.family_friendly = coerce_toggle(value),
                "checkIn" => selection.check_in = non_empty(value),
                "checkOut" => selection.check_out = non_empty(value),
                "sortBy" | "sort" => selection.sort_by = value.parse().unwrap_or_default(),
                _ => {}
            }
        }

        if price_min.is_some() || price_max.is_some() {
            let min = price_min.flatten().unwrap_or(0.0);
            let max = price_max.flatten().unwrap_or(UNBOUNDED_PRICE);
            selection.price_range = Some((min, max));
        }

        selection.normalized()
    }

    /// Applies the same guards as `from_query_pairs` to a selection that
    /// arrived some other way (JSON body, URL state segment).
    pub fn normalized(mut self) -> Self {
        self.query = self.query.trim().to_string();
        self.city = self.city.trim().to_string();
        self.property_types.retain(|t| !t.trim().is_empty());
        self.amenities.retain(|a| !a.trim().is_empty());

        self.price_range = self.price_range.map(|(min, max)| {
            let min = if min.is_finite() { min.max(0.0) } else { 0.0 };
            let max = if max.is_finite() { max.max(0.0) } else { UNBOUNDED_PRICE };
            if min > max { (max, min) } else { (min, max) }
        });
        self.rating = self.rating.filter(|r| r.is_finite());
        self
    }

    pub fn selected_price_range(&self) -> Option<PriceRange> {
        self.price_range.map(|(min, max)| PriceRange::new(min, max))
    }

    pub fn selected_features(&self) -> Vec<Feature> {
        Feature::ALL
            .into_iter()
            .filter(|feature| match feature {
                Feature::Accessibility => self.accessibility,
                Feature::PetFriendly => self.pet_friendly,
                Feature::BusinessFriendly => self.business_friendly,
                Feature::FamilyFriendly => self.family_friendly,
            })
            .collect()
    }

    /// Number of filters that can exclude a listing.
    pub fn active_filter_count(&self) -> usize {
        let mut count = 0;
        count += !self.query.is_empty() as usize;
        count += !self.city.is_empty() as usize;
        count += !self.property_types.is_empty() as usize;
        count += self.price_range.is_some() as usize;
        count += self.rating.is_some_and(|r| r > 0.0) as usize;
        count += self.amenities.len();
        count += self.selected_features().len();
        count
    }
}

fn split_list(value: &str) -> impl Iterator<Item = String> + '_ {
    value.split(',').map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

fn coerce_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn coerce_toggle(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1" | "on" | "yes")
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() { None } else { Some(value.to_string()) }
}
