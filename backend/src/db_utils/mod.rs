//! Data-source plumbing: listing adapters and the fetch cache.

pub mod listing_cache;
pub mod listing_source;

pub use listing_cache::ListingCache;
pub use listing_source::{ListingSource, SourceError};
