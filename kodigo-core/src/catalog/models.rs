use serde::Deserialize;

/// Search response envelope
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEnvelope {
    pub result_count: Option<u32>,
    /// Missing entirely when the catalog has nothing to say
    #[serde(default)]
    pub results: Option<Vec<CatalogRecord>>,
}

/// A raw catalog record as returned by the search endpoint.
///
/// Only the fields the result cards need are mapped; everything is optional
/// because the catalog omits fields freely depending on the entity type.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    pub kind: Option<String>,
    pub track_id: Option<u64>,
    pub collection_id: Option<u64>,
    pub track_name: Option<String>,
    pub collection_name: Option<String>,
    pub artist_name: Option<String>,
    pub artwork_url100: Option<String>,
    pub release_date: Option<String>,
    pub preview_url: Option<String>,
    pub track_view_url: Option<String>,
    pub collection_view_url: Option<String>,
}
