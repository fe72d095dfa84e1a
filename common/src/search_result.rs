use serde::{Deserialize, Serialize};

use crate::{listing::Listing, search_query::FilterSelection};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultListings {
    pub query: FilterSelection,
    pub facets: Vec<Facet>,
    pub results: Vec<Listing>,
    pub total_count: u64,
}

impl SearchResultListings {
    pub fn result_ids(&self) -> Vec<&str> {
        self.results.iter().map(|l| l.id.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FacetId {
    Location,
    PropertyTypes,
    PriceRange,
    Amenities,
    Rating,
}

impl FacetId {
    pub fn display_name(&self) -> &'static str {
        match self {
            FacetId::Location => "Location",
            FacetId::PropertyTypes => "Property Type",
            FacetId::PriceRange => "Price Range",
            FacetId::Amenities => "Amenities",
            FacetId::Rating => "Rating",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FacetKind {
    Checkbox,
    Range { min: f64, max: f64, step: f64 },
    Select,
    Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facet {
    pub id: FacetId,
    pub display_name: String,
    pub kind: FacetKind,
    pub options: Vec<FacetOption>,
}

impl Facet {
    pub fn new(id: FacetId, kind: FacetKind, options: Vec<FacetOption>) -> Self {
        Self { id, display_name: id.display_name().to_string(), kind, options }
    }

    pub fn option_count(&self, value: &FacetOriginalValue) -> Option<u64> {
        self.options.iter().find(|o| &o.original_value == value).map(|o| o.count)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetOption {
    pub display_string: String,
    pub original_value: FacetOriginalValue,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum FacetOriginalValue {
    String(String),
    Int(u64),
}
