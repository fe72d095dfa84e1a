//! Common library exports shared between the discovery clients and the backend.

extern crate serde;


pub mod listing;
pub mod search_query;
pub mod search_result;
pub mod search_const;
pub mod url_param;

#[cfg(test)]
mod search_query_tests;
