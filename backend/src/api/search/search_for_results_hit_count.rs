use common::{listing::Listing, search_query::FilterSelection};
use serde::{Deserialize, Serialize};

use crate::api::search::search_filters::{build_predicates, listing_matches};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchForResultsHitCountResponse {
    pub total_count: u64,
}

pub fn search_for_results_hit_count(listings: &[Listing], query: &FilterSelection) -> u64 {
    let predicates = build_predicates(&query.clone().normalized());
    listings.iter().filter(|l| listing_matches(&predicates, l)).count() as u64
}
