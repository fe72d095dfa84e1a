//! Constants shared by the facet generator and its clients.

pub const AMENITY_FACET_LIMIT: usize = 15;
pub const PRICE_FACET_STEP: f64 = 50.0;
pub const RATING_FACET_THRESHOLDS: [u64; 5] = [1, 2, 3, 4, 5];
pub const CATEGORY_TAG_SEPARATOR: &str = ",";
