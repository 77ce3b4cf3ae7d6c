use serde::{Deserialize, Serialize};

/// Message structure of the pagination data of a list response.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaginationMessage {
    /// Page returned by the query, starting at 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,

    /// Total number of pages available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u64>,

    /// Total number of entries across all pages
    #[serde(default)]
    pub total_entries: u64,
}
