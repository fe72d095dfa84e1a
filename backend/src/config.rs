use std::{fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use anyhow::anyhow;
use tracing::info;

use crate::db_utils::ListingSource;

pub const DEFAULT_PORT: &str = "8080";
pub const DEFAULT_FIXTURE: &str = "fixtures/listings.json";
pub const DEFAULT_CACHE_TTL_SECS: &str = "60";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub listings_url: Option<String>,
    pub listings_fixture: PathBuf,
    pub cache_ttl: Duration,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let listings_url = lookup("LISTINGS_URL").map(|url| url.trim().to_string()).filter(|url| !url.is_empty());
        Ok(Self {
            port: try_load(&lookup, "RESORT_PORT", DEFAULT_PORT)?,
            listings_url,
            listings_fixture: try_load(&lookup, "LISTINGS_FIXTURE", DEFAULT_FIXTURE)?,
            cache_ttl: Duration::from_secs(try_load(&lookup, "LISTINGS_CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)?),
        })
    }

    /// The document store when a URL is configured, the local fixture otherwise.
    pub fn listing_source(&self) -> ListingSource {
        match &self.listings_url {
            Some(url) => ListingSource::Document { url: url.clone() },
            None => ListingSource::Fixture { path: self.listings_fixture.clone() },
        }
    }
}

fn try_load<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> anyhow::Result<T>
where
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    raw.trim().parse().map_err(|e| anyhow!("Invalid {key} value {raw:?}: {e}"))
}
