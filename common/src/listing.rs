//! Shared listing models, as supplied by the document store.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Interval overlap, boundaries included.
    pub fn overlaps(&self, other: &PriceRange) -> bool {
        self.max >= other.min && self.min <= other.max
    }
}

/// A bookable property as seen by the discovery pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(alias = "city")]
    pub location: String,
    #[serde(alias = "propertyTypes")]
    pub categories: Vec<String>,
    pub price_range: Option<PriceRange>,
    pub amenities: Vec<String>,
    pub rating: Option<f64>,
    pub capacity: Option<u32>,
    pub is_active: bool,
}

impl Default for Listing {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            description: String::new(),
            location: String::new(),
            categories: Vec::new(),
            price_range: None,
            amenities: Vec::new(),
            rating: None,
            capacity: None,
            is_active: true,
        }
    }
}

impl Listing {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Default::default() }
    }

    /// Absent ratings count as zero.
    pub fn rating_or_zero(&self) -> f64 {
        match self.rating {
            Some(r) if r.is_finite() => r,
            _ => 0.0,
        }
    }

    /// The price range, if present and made of real numbers.
    pub fn known_price_range(&self) -> Option<PriceRange> {
        self.price_range.filter(|p| p.min.is_finite() && p.max.is_finite())
    }

    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }

    pub fn has_feature(&self, feature: Feature) -> bool {
        let keywords = feature.keywords();
        self.amenities.iter().any(|amenity| {
            let amenity = amenity.to_lowercase();
            keywords.iter().any(|k| amenity.contains(k))
        })
    }
}

/// Features inferred from amenity text rather than stored on the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    Accessibility,
    PetFriendly,
    BusinessFriendly,
    FamilyFriendly,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::Accessibility,
        Feature::PetFriendly,
        Feature::BusinessFriendly,
        Feature::FamilyFriendly,
    ];

    /// Lowercase substrings; any one of them in any amenity tag grants the feature.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Feature::Accessibility => &["accessible", "wheelchair"],
            Feature::PetFriendly => &["pet", "dog"],
            Feature::BusinessFriendly => &["wifi", "business", "conference", "meeting"],
            Feature::FamilyFriendly => &["family", "kids", "children", "playground"],
        }
    }
}
