//! Adapters for the stores that supply the candidate listing set.

use std::path::PathBuf;

use common::listing::Listing;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Listing store request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Listing store returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to read listing fixture {}: {source}", .path.display())]
    Fixture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid listing documents: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListingSource {
    /// REST endpoint of the document database; GET returns the listing documents.
    Document { url: String },
    /// Local JSON file used in development instead of the document database.
    Fixture { path: PathBuf },
}

impl ListingSource {
    /// Stable description of where the listings come from, used as cache key input.
    pub fn descriptor(&self) -> String {
        match self {
            ListingSource::Document { url } => format!("document:{url}"),
            ListingSource::Fixture { path } => format!("fixture:{}", path.display()),
        }
    }

    pub async fn fetch_listings(&self) -> Result<Vec<Listing>, SourceError> {
        let raw = match self {
            ListingSource::Document { url } => fetch_document_json(url).await?,
            ListingSource::Fixture { path } => tokio::fs::read_to_string(path)
                .await
                .map_err(|source| SourceError::Fixture { path: path.clone(), source })?,
        };
        parse_listing_documents(&raw)
    }
}

async fn fetch_document_json(url: &str) -> Result<String, SourceError> {
    let client = reqwest::Client::new();
    let response = client.get(url).header("Accept", "application/json").send().await?;
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        return Err(SourceError::Status { status: status.as_u16(), body: response_txt });
    }
    debug!("listing store response: len = {}", response_txt.len());
    Ok(response_txt)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListingDocuments {
    Bare(Vec<Listing>),
    Wrapped {
        #[serde(alias = "listings", alias = "properties")]
        documents: Vec<Listing>,
    },
}

/// Accepts a bare JSON array or an object wrapping it, and keeps only active
/// listings.
pub fn parse_listing_documents(raw: &str) -> Result<Vec<Listing>, SourceError> {
    let documents = match serde_json::from_str::<ListingDocuments>(raw)? {
        ListingDocuments::Bare(documents) => documents,
        ListingDocuments::Wrapped { documents } => documents,
    };
    let total = documents.len();
    let active = documents.into_iter().filter(|l| l.is_active).collect::<Vec<_>>();
    if active.len() != total {
        debug!("dropped {} inactive listings", total - active.len());
    }
    Ok(active)
}
