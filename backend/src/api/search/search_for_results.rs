//! Full discovery pass: facets, filtered results and their order.

use common::{listing::Listing, search_query::FilterSelection, search_result::SearchResultListings};
use tracing::debug;

use crate::api::search::{search_facets::search_facets, search_filters::filter_listings, search_sort::sort_listings};

pub fn search_for_results(listings: &[Listing], query: FilterSelection) -> SearchResultListings {
    let query = query.normalized();
    let facets = search_facets(listings);

    let mut matching = filter_listings(listings, &query);
    debug!(
        "search: {} of {} listings pass {} active filters",
        matching.len(),
        listings.len(),
        query.active_filter_count(),
    );
    sort_listings(&mut matching, query.sort_by);

    let results = matching.into_iter().cloned().collect::<Vec<_>>();
    SearchResultListings {
        total_count: results.len() as u64,
        query,
        facets,
        results,
    }
}
