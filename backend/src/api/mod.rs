//! Discovery API exports.

pub mod search;
