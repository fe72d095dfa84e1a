use std::sync::Arc;

use common::listing::Listing;

use crate::{
    config::Config,
    db_utils::{ListingCache, ListingSource, SourceError},
};

pub struct AppState {
    pub config: Config,
    pub source: ListingSource,
    pub cache: ListingCache,
}

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        let source = config.listing_source();
        let cache = ListingCache::new(config.cache_ttl);
        Arc::new(Self { config, source, cache })
    }

    /// The full active collection; every search runs over this set.
    pub async fn active_listings(&self) -> Result<Arc<Vec<Listing>>, SourceError> {
        self.cache.get_or_fetch(&self.source).await
    }
}
