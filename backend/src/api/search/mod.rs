//! Listing discovery: facet generation, predicate filtering and ordering.

mod search_for_results;
pub use search_for_results::search_for_results;

mod search_for_results_hit_count;
pub use search_for_results_hit_count::{SearchForResultsHitCountResponse, search_for_results_hit_count};

pub mod search_facets;
pub use search_facets::search_facets;

pub mod search_filters;
pub mod search_sort;

#[cfg(test)]
mod search_for_results_tests;
