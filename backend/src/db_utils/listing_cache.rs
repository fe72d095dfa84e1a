//! In-process cache of fetched listing collections.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use common::listing::Listing;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

use crate::db_utils::listing_source::{ListingSource, SourceError};

struct CachedListings {
    fetched_at: Instant,
    listings: Arc<Vec<Listing>>,
}

pub struct ListingCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, CachedListings>>,
    // held across a refetch so concurrent misses wait for one fetch
    refetch: Mutex<()>,
}

impl ListingCache {
    /// A zero `ttl` disables caching.
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entries: RwLock::new(HashMap::new()), refetch: Mutex::new(()) }
    }

    pub async fn get_or_fetch(&self, source: &ListingSource) -> Result<Arc<Vec<Listing>>, SourceError> {
        let key = sha256::digest(source.descriptor());
        if let Some(listings) = self.get_fresh(&key).await {
            debug!("LISTING CACHE HIT: {}", key);
            return Ok(listings);
        }
        debug!("LISTING CACHE MISS: {}", key);

        let _refetch = self.refetch.lock().await;
        if let Some(listings) = self.get_fresh(&key).await {
            debug!("LISTING CACHE HIT after wait: {}", key);
            return Ok(listings);
        }

        let t0 = Instant::now();
        let listings = Arc::new(source.fetch_listings().await?);
        let dt_ms = t0.elapsed().as_millis();
        info!("fetched {} listings from {} in {}ms", listings.len(), source.descriptor(), dt_ms);

        if !self.ttl.is_zero() {
            let entry = CachedListings { fetched_at: Instant::now(), listings: listings.clone() };
            self.entries.write().await.insert(key, entry);
        }
        Ok(listings)
    }

    pub async fn invalidate(&self) {
        self.entries.write().await.clear();
    }

    async fn get_fresh(&self, key: &str) -> Option<Arc<Vec<Listing>>> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        if entry.fetched_at.elapsed() < self.ttl {
            Some(entry.listings.clone())
        } else {
            None
        }
    }
}
